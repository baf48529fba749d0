use crate::core::filters::{matches_job, matches_listing, matches_property};
use crate::models::{FilterCriteria, Job, Listing, Property};

/// Result of a search over one collection
#[derive(Debug)]
pub struct SearchOutcome<T> {
    pub matches: Vec<T>,
    pub total_candidates: usize,
}

/// Listing filter engine.
///
/// Stateless per call: each search walks the input collection once, keeps
/// the records matching every specified criterion, and preserves the input
/// order. No scoring, no implicit sorting. The only configuration is a cap
/// on how many matches a single response may carry.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    max_results: usize,
}

/// Cap applied when no limit is configured
pub const DEFAULT_MAX_RESULTS: usize = 100;

impl SearchEngine {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Filter properties against the criteria, preserving input order
    pub fn search_properties(
        &self,
        properties: &[Property],
        criteria: &FilterCriteria,
    ) -> SearchOutcome<Property> {
        self.run(properties, criteria, None, matches_property)
    }

    /// Filter jobs against the criteria, preserving input order
    pub fn search_jobs(&self, jobs: &[Job], criteria: &FilterCriteria) -> SearchOutcome<Job> {
        self.run(jobs, criteria, None, matches_job)
    }

    /// Filter mixed listings against the criteria, preserving input order
    pub fn search_listings(
        &self,
        listings: &[Listing],
        criteria: &FilterCriteria,
    ) -> SearchOutcome<Listing> {
        self.run(listings, criteria, None, matches_listing)
    }

    /// Property search with a per-request cap below the engine maximum
    pub fn search_properties_limited(
        &self,
        properties: &[Property],
        criteria: &FilterCriteria,
        limit: usize,
    ) -> SearchOutcome<Property> {
        self.run(properties, criteria, Some(limit), matches_property)
    }

    /// Job search with a per-request cap below the engine maximum
    pub fn search_jobs_limited(
        &self,
        jobs: &[Job],
        criteria: &FilterCriteria,
        limit: usize,
    ) -> SearchOutcome<Job> {
        self.run(jobs, criteria, Some(limit), matches_job)
    }

    fn run<T: Clone>(
        &self,
        candidates: &[T],
        criteria: &FilterCriteria,
        limit: Option<usize>,
        predicate: fn(&T, &FilterCriteria) -> bool,
    ) -> SearchOutcome<T> {
        let total_candidates = candidates.len();
        let cap = limit.map_or(self.max_results, |l| l.min(self.max_results));

        // An all-default criteria set is the identity filter
        let matches: Vec<T> = if criteria.is_unconstrained() {
            candidates.iter().take(cap).cloned().collect()
        } else {
            candidates
                .iter()
                .filter(|candidate| predicate(candidate, criteria))
                .take(cap)
                .cloned()
                .collect()
        };

        SearchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}
