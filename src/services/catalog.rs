use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Job, Listing, ListingKey, ListingKind, Property, SavedSet};

/// Errors that can occur when loading the listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse fixture file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind:?} id {id} in fixture data")]
    DuplicateId { kind: ListingKind, id: u32 },
}

/// In-memory listing catalog.
///
/// Both collections are loaded once at startup from the JSON fixture files
/// and shared immutably afterwards; the filter engine only ever derives
/// views over them.
pub struct CatalogStore {
    properties: Vec<Property>,
    jobs: Vec<Job>,
}

impl CatalogStore {
    /// Load both collections from their fixture files
    pub fn load<P: AsRef<Path>>(properties_path: P, jobs_path: P) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = read_collection(properties_path.as_ref())?;
        let jobs: Vec<Job> = read_collection(jobs_path.as_ref())?;

        tracing::info!(
            "Catalog loaded: {} properties, {} jobs",
            properties.len(),
            jobs.len()
        );

        Self::from_records(properties, jobs)
    }

    /// Build a catalog from already-parsed collections, enforcing the
    /// unique-identifier invariant
    pub fn from_records(properties: Vec<Property>, jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id) {
                return Err(CatalogError::DuplicateId {
                    kind: ListingKind::Property,
                    id: property.id,
                });
            }
        }

        seen.clear();
        for job in &jobs {
            if !seen.insert(job.id) {
                return Err(CatalogError::DuplicateId {
                    kind: ListingKind::Job,
                    id: job.id,
                });
            }
        }

        Ok(Self { properties, jobs })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get_property(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn get_job(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Resolve a saved-set key to its full listing record
    pub fn resolve(&self, key: &ListingKey) -> Option<Listing> {
        match key.kind {
            ListingKind::Property => self.get_property(key.id).cloned().map(Listing::Property),
            ListingKind::Job => self.get_job(key.id).cloned().map(Listing::Job),
        }
    }

    /// Resolve every key in a saved set, skipping ids no longer in the
    /// catalog, in the set's (kind, id) order
    pub fn resolve_saved(&self, saved: &SavedSet) -> Vec<Listing> {
        saved.iter().filter_map(|key| self.resolve(key)).collect()
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobType;

    fn create_property(id: u32) -> Property {
        Property {
            id,
            title: format!("Listing {}", id),
            location: "Austin, TX".to_string(),
            price: 450_000.0,
            beds: 3.0,
            baths: 2.0,
            sqft: 1800,
            tags: vec![],
            description: None,
            image: None,
            latitude: None,
            longitude: None,
        }
    }

    fn create_job(id: u32) -> Job {
        Job {
            id,
            title: format!("Role {}", id),
            company: "Prestige Properties".to_string(),
            salary: "$75,000 + Bonuses".to_string(),
            location: "Miami, FL".to_string(),
            job_type: JobType::FullTime,
            posted: "New".to_string(),
            description: None,
            logo: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_duplicate_property_id_rejected() {
        let result = CatalogStore::from_records(vec![create_property(1), create_property(1)], vec![]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { kind: ListingKind::Property, id: 1 })
        ));
    }

    #[test]
    fn test_same_id_across_collections_is_fine() {
        let catalog = CatalogStore::from_records(vec![create_property(1)], vec![create_job(1)])
            .expect("ids are unique per collection");

        assert!(catalog.get_property(1).is_some());
        assert!(catalog.get_job(1).is_some());
    }

    #[test]
    fn test_resolve_saved_keeps_set_order_and_skips_unknown() {
        let catalog =
            CatalogStore::from_records(vec![create_property(2), create_property(1)], vec![create_job(5)])
                .unwrap();

        let saved = SavedSet::new()
            .toggle(ListingKey::job(5))
            .toggle(ListingKey::property(2))
            .toggle(ListingKey::property(99)); // not in catalog

        let listings = catalog.resolve_saved(&saved);

        let keys: Vec<ListingKey> = listings.iter().map(|l| l.key()).collect();
        assert_eq!(keys, vec![ListingKey::property(2), ListingKey::job(5)]);
    }
}
