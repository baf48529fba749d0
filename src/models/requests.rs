use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    Coordinates, FilterCriteria, JobType, ListingKind, PriceBracket, SalaryBracket,
};

/// Request to search the property collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchPropertiesRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "min_price", rename = "minPrice")]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "max_price", rename = "maxPrice")]
    pub max_price: Option<f64>,
    #[serde(default, alias = "price_bracket", rename = "priceBracket")]
    pub price_bracket: Option<PriceBracket>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "min_beds", rename = "minBeds")]
    pub min_beds: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "min_baths", rename = "minBaths")]
    pub min_baths: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search: Option<String>,
    /// Free-text place to resolve through geocoding for proximity filtering
    #[serde(default)]
    pub near: Option<String>,
    #[validate(range(min = 0.1))]
    #[serde(default, alias = "radius_miles", rename = "radiusMiles")]
    pub radius_miles: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

impl SearchPropertiesRequest {
    /// Criteria for the filter engine; `origin` is the geocoded `near`
    /// coordinate, if the lookup succeeded
    pub fn criteria(&self, origin: Option<Coordinates>) -> FilterCriteria {
        FilterCriteria {
            location: self.location.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            price_bracket: self.price_bracket,
            min_beds: self.min_beds,
            min_baths: self.min_baths,
            tags: self.tags.clone(),
            search: self.search.clone(),
            origin,
            radius_miles: self.radius_miles,
            ..Default::default()
        }
    }
}

/// Request to search the job collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "job_type", rename = "jobType")]
    pub job_type: Option<JobType>,
    #[serde(default, alias = "salary_bracket", rename = "salaryBracket")]
    pub salary_bracket: Option<SalaryBracket>,
    #[serde(default)]
    pub near: Option<String>,
    #[validate(range(min = 0.1))]
    #[serde(default, alias = "radius_miles", rename = "radiusMiles")]
    pub radius_miles: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

impl SearchJobsRequest {
    pub fn criteria(&self, origin: Option<Coordinates>) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            location: self.location.clone(),
            job_type: self.job_type,
            salary_bracket: self.salary_bracket,
            origin,
            radius_miles: self.radius_miles,
            ..Default::default()
        }
    }
}

fn default_limit() -> u16 {
    20
}

/// Request to toggle a listing in the session's saved set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSavedRequest {
    /// Omitted on the first toggle; the server mints one and returns it
    #[serde(default, alias = "session_id", rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(alias = "listing_type", rename = "listingType")]
    pub listing_type: ListingKind,
    pub id: u32,
}

/// Request for a mortgage quote
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MortgageQuoteRequest {
    #[validate(range(min = 1.0))]
    #[serde(alias = "home_price", rename = "homePrice")]
    pub home_price: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, alias = "down_payment_percent", rename = "downPaymentPercent")]
    pub down_payment_percent: f64,
    #[validate(range(min = 0.0))]
    #[serde(alias = "interest_rate_percent", rename = "interestRatePercent")]
    pub interest_rate_percent: f64,
    #[validate(range(min = 1))]
    #[serde(alias = "term_years", rename = "termYears")]
    pub term_years: u32,
}
