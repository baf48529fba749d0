use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{MortgageError, MortgageQuote, SearchEngine};
use crate::models::{
    Coordinates, ErrorResponse, HealthResponse, ListingKey, MortgageQuoteRequest,
    MortgageQuoteResponse, SavedListingsResponse, SearchJobsRequest, SearchJobsResponse,
    SearchPropertiesRequest, SearchPropertiesResponse, ToggleSavedRequest, ToggleSavedResponse,
};
use crate::services::{CatalogStore, GeocodingClient, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub geocoder: Arc<GeocodingClient>,
    pub sessions: Arc<SessionStore>,
    pub engine: SearchEngine,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/properties/search", web::post().to(search_properties))
        .route("/properties/{id}", web::get().to(get_property))
        .route("/jobs/search", web::post().to(search_jobs))
        .route("/saved/toggle", web::post().to(toggle_saved))
        .route("/saved", web::get().to(get_saved))
        .route("/mortgage/quote", web::post().to(mortgage_quote));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Resolve an optional free-text place into an origin coordinate.
///
/// A failed lookup degrades proximity filtering to "no constraint": the
/// search proceeds without the origin and the message is returned for the
/// presentation layer to surface.
async fn resolve_origin(
    geocoder: &GeocodingClient,
    near: Option<&str>,
) -> (Option<Coordinates>, Option<String>) {
    let query = match near {
        Some(q) if !q.trim().is_empty() => q,
        _ => return (None, None),
    };

    match geocoder.lookup(query).await {
        Ok(coords) => (Some(coords), None),
        Err(e) if e.is_not_found() => {
            tracing::warn!("Location not found, searching without proximity: {}", query);
            (None, Some(format!("location not found: {}", query)))
        }
        Err(e) => {
            tracing::error!("Geocoding failed for {}: {}", query, e);
            (None, Some("location lookup unavailable".to_string()))
        }
    }
}

/// Property search endpoint
///
/// POST /api/v1/properties/search
///
/// Request body:
/// ```json
/// {
///   "location": "Austin",
///   "minPrice": 100000,
///   "maxPrice": 500000,
///   "minBeds": 2,
///   "tags": ["Pool"],
///   "near": "Austin, TX",
///   "radiusMiles": 50,
///   "limit": 20
/// }
/// ```
async fn search_properties(
    state: web::Data<AppState>,
    req: web::Json<SearchPropertiesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for property search: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let (origin, warning) = resolve_origin(&state.geocoder, req.near.as_deref()).await;
    let criteria = req.criteria(origin);

    let outcome = state.engine.search_properties_limited(
        state.catalog.properties(),
        &criteria,
        req.limit as usize,
    );

    tracing::info!(
        "Property search returned {} of {} candidates",
        outcome.matches.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(SearchPropertiesResponse {
        properties: outcome.matches,
        total_results: outcome.total_candidates,
        warning,
    })
}

/// Job search endpoint
///
/// POST /api/v1/jobs/search
async fn search_jobs(
    state: web::Data<AppState>,
    req: web::Json<SearchJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for job search: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let (origin, warning) = resolve_origin(&state.geocoder, req.near.as_deref()).await;
    let criteria = req.criteria(origin);

    let outcome =
        state
            .engine
            .search_jobs_limited(state.catalog.jobs(), &criteria, req.limit as usize);

    tracing::info!(
        "Job search returned {} of {} candidates",
        outcome.matches.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(SearchJobsResponse {
        jobs: outcome.matches,
        total_results: outcome.total_candidates,
        warning,
    })
}

/// Single property for the details view
///
/// GET /api/v1/properties/{id}
async fn get_property(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_property(id) {
        Some(property) => HttpResponse::Ok().json(property),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Property not found".to_string(),
            message: format!("no property with id {}", id),
            status_code: 404,
        }),
    }
}

/// Toggle a listing in the session's saved set
///
/// POST /api/v1/saved/toggle
///
/// Request body:
/// ```json
/// {
///   "sessionId": "optional, minted when absent",
///   "listingType": "property",
///   "id": 3
/// }
/// ```
async fn toggle_saved(
    state: web::Data<AppState>,
    req: web::Json<ToggleSavedRequest>,
) -> impl Responder {
    let key = ListingKey {
        kind: req.listing_type,
        id: req.id,
    };

    if state.catalog.resolve(&key).is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("no {:?} with id {}", key.kind, key.id),
            status_code: 404,
        });
    }

    let session_id = req
        .session_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let saved = state.sessions.toggle(&session_id, key).await;

    tracing::debug!(
        "Session {} toggled {:?}/{}, {} saved",
        session_id,
        key.kind,
        key.id,
        saved.len()
    );

    HttpResponse::Ok().json(ToggleSavedResponse {
        saved: saved.contains(&key),
        count: saved.len(),
        session_id,
        key,
    })
}

/// List the session's saved listings
///
/// GET /api/v1/saved?sessionId={sessionId}
async fn get_saved(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let session_id = match query.get("sessionId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing sessionId parameter".to_string(),
                message: "sessionId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let saved = state.sessions.saved(session_id).await;
    let listings = state.catalog.resolve_saved(&saved);

    HttpResponse::Ok().json(SavedListingsResponse {
        session_id: session_id.clone(),
        count: listings.len(),
        listings,
    })
}

/// Mortgage quote endpoint
///
/// POST /api/v1/mortgage/quote
///
/// Request body:
/// ```json
/// {
///   "homePrice": 500000,
///   "downPaymentPercent": 20,
///   "interestRatePercent": 3.5,
///   "termYears": 30
/// }
/// ```
async fn mortgage_quote(req: web::Json<MortgageQuoteRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match MortgageQuote::calculate(
        req.home_price,
        req.down_payment_percent,
        req.interest_rate_percent,
        req.term_years,
    ) {
        Ok(quote) => HttpResponse::Ok().json(MortgageQuoteResponse {
            principal: quote.principal,
            monthly_payment: quote.monthly_payment,
            total_paid: quote.total_paid,
            total_interest: quote.total_interest,
        }),
        Err(e @ MortgageError::InvalidTerm(_)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid term".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
