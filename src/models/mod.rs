// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinates, FilterCriteria, Job, JobType, Listing, ListingKey, ListingKind, PriceBracket,
    Property, SalaryBracket, SavedSet,
};
pub use requests::{
    MortgageQuoteRequest, SearchJobsRequest, SearchPropertiesRequest, ToggleSavedRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, MortgageQuoteResponse, SavedListingsResponse,
    SearchJobsResponse, SearchPropertiesResponse, ToggleSavedResponse,
};
