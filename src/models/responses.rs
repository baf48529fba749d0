use serde::{Deserialize, Serialize};

use crate::models::domain::{Job, Listing, ListingKey, Property};

/// Response for the property search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPropertiesResponse {
    pub properties: Vec<Property>,
    pub total_results: usize,
    /// User-facing note, e.g. when the `near` location could not be geocoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response for the job search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJobsResponse {
    pub jobs: Vec<Job>,
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response after toggling a saved listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSavedResponse {
    pub session_id: String,
    pub key: ListingKey,
    /// Membership state after the toggle
    pub saved: bool,
    pub count: usize,
}

/// Response listing the session's saved listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedListingsResponse {
    pub session_id: String,
    pub listings: Vec<Listing>,
    pub count: usize,
}

/// Response for the mortgage quote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageQuoteResponse {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
