use crate::core::distance::within_radius;
use crate::models::{Coordinates, FilterCriteria, Job, Listing, Property};

/// Case-insensitive substring test
#[inline]
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Proximity criterion: satisfied unless both an origin+radius are set and
/// the listing has coordinates that fall outside the radius.
///
/// Listings without coordinates are never excluded by proximity.
#[inline]
fn matches_proximity(coordinates: Option<Coordinates>, criteria: &FilterCriteria) -> bool {
    let (origin, radius) = match (criteria.origin, criteria.radius_miles) {
        (Some(origin), Some(radius)) => (origin, radius),
        _ => return true,
    };

    match coordinates {
        Some(point) => within_radius(origin, point, radius),
        None => true,
    }
}

/// Check if a property matches all specified criteria.
///
/// Unspecified criteria are vacuously true; job-only criteria (job type,
/// salary bracket) never constrain a property.
#[inline]
pub fn matches_property(property: &Property, criteria: &FilterCriteria) -> bool {
    // Location substring, case insensitive
    if let Some(location) = &criteria.location {
        if !contains_ci(&property.location, location) {
            return false;
        }
    }

    // Price range
    if let Some(min_price) = criteria.min_price {
        if property.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = criteria.max_price {
        if property.price > max_price {
            return false;
        }
    }
    if let Some(bracket) = criteria.price_bracket {
        if !bracket.contains(property.price) {
            return false;
        }
    }

    // Bedroom/bathroom minimums
    if let Some(min_beds) = criteria.min_beds {
        if property.beds < min_beds {
            return false;
        }
    }
    if let Some(min_baths) = criteria.min_baths {
        if property.baths < min_baths {
            return false;
        }
    }

    // Every requested tag must be present
    if !criteria.tags.iter().all(|tag| property.tags.contains(tag)) {
        return false;
    }

    // Free-text search against the title
    if let Some(search) = &criteria.search {
        if !contains_ci(&property.title, search) {
            return false;
        }
    }

    matches_proximity(property.coordinates(), criteria)
}

/// Check if a job matches all specified criteria.
///
/// Salary brackets compare against the parsed numeric salary; a job whose
/// salary text yields no amount fails a requested bracket rather than being
/// string-matched.
#[inline]
pub fn matches_job(job: &Job, criteria: &FilterCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !contains_ci(&job.location, location) {
            return false;
        }
    }

    // Free-text search against title and company
    if let Some(search) = &criteria.search {
        if !contains_ci(&job.title, search) && !contains_ci(&job.company, search) {
            return false;
        }
    }

    if let Some(job_type) = criteria.job_type {
        if job.job_type != job_type {
            return false;
        }
    }

    if let Some(bracket) = criteria.salary_bracket {
        match job.parsed_salary() {
            Some(amount) if bracket.contains(amount) => {}
            _ => return false,
        }
    }

    matches_proximity(job.coordinates(), criteria)
}

/// Check either listing kind against the criteria
#[inline]
pub fn matches_listing(listing: &Listing, criteria: &FilterCriteria) -> bool {
    match listing {
        Listing::Property(p) => matches_property(p, criteria),
        Listing::Job(j) => matches_job(j, criteria),
    }
}
