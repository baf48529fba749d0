use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Geographic coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A property listing as loaded from the fixture collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub beds: f64,
    pub baths: f64,
    pub sqft: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Property {
    /// Coordinates when both components are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }
}

/// Employment type for job listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Commission,
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

/// A job listing as loaded from the fixture collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    /// Free-text salary as displayed, e.g. "$90,000 - $150,000/yr"
    pub salary: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub posted: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Job {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }

    /// Numeric amount embedded in the salary text, in dollars per year.
    ///
    /// Reads the first number after a `$` sign, accepting thousands
    /// separators and a `k`/`K` suffix ("$75k" -> 75000.0). Returns None
    /// when no amount can be extracted.
    pub fn parsed_salary(&self) -> Option<f64> {
        parse_salary(&self.salary)
    }
}

fn parse_salary(text: &str) -> Option<f64> {
    let dollar = text.find('$')?;
    let rest = &text[dollar + 1..];

    let mut digits = String::new();
    let mut chars = rest.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            digits.push(c);
            chars.next();
        } else if c == ',' {
            chars.next();
        } else {
            break;
        }
    }

    let mut amount: f64 = digits.parse().ok()?;
    if matches!(chars.peek(), Some('k') | Some('K')) {
        amount *= 1000.0;
    }
    Some(amount)
}

/// Discriminates the two listing collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Property,
    Job,
}

/// Identifier of a listing across both collections.
///
/// Numeric ids are only unique within one collection, so saved-set
/// membership is keyed on (kind, id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingKey {
    pub kind: ListingKind,
    pub id: u32,
}

impl ListingKey {
    pub fn property(id: u32) -> Self {
        Self { kind: ListingKind::Property, id }
    }

    pub fn job(id: u32) -> Self {
        Self { kind: ListingKind::Job, id }
    }
}

/// Either kind of listing, for mixed views such as the saved list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Listing {
    Property(Property),
    Job(Job),
}

impl Listing {
    pub fn key(&self) -> ListingKey {
        match self {
            Listing::Property(p) => ListingKey::property(p.id),
            Listing::Job(j) => ListingKey::job(j.id),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Listing::Property(p) => &p.title,
            Listing::Job(j) => &j.title,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Listing::Property(p) => &p.location,
            Listing::Job(j) => &j.location,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Listing::Property(p) => p.coordinates(),
            Listing::Job(j) => j.coordinates(),
        }
    }
}

/// Price bracket for property searches.
///
/// Each bracket maps to a fixed numeric range; matching compares the listing
/// price against the range, never the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBracket {
    #[serde(rename = "200k-500k")]
    Entry,
    #[serde(rename = "500k-1m")]
    Mid,
    #[serde(rename = "1m+")]
    Luxury,
}

impl PriceBracket {
    /// Inclusive dollar bounds; the top bracket is open-ended
    pub fn bounds(self) -> (f64, Option<f64>) {
        match self {
            PriceBracket::Entry => (200_000.0, Some(500_000.0)),
            PriceBracket::Mid => (500_000.0, Some(1_000_000.0)),
            PriceBracket::Luxury => (1_000_000.0, None),
        }
    }

    pub fn contains(self, amount: f64) -> bool {
        let (min, max) = self.bounds();
        amount >= min && max.map_or(true, |m| amount <= m)
    }
}

/// Salary bracket for job searches, matched against the parsed salary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBracket {
    #[serde(rename = "50k-80k")]
    Low,
    #[serde(rename = "80k-120k")]
    Mid,
    #[serde(rename = "120k+")]
    High,
}

impl SalaryBracket {
    /// Inclusive dollar bounds; the top bracket is open-ended
    pub fn bounds(self) -> (f64, Option<f64>) {
        match self {
            SalaryBracket::Low => (50_000.0, Some(80_000.0)),
            SalaryBracket::Mid => (80_000.0, Some(120_000.0)),
            SalaryBracket::High => (120_000.0, None),
        }
    }

    pub fn contains(self, amount: f64) -> bool {
        let (min, max) = self.bounds();
        amount >= min && max.map_or(true, |m| amount <= m)
    }
}

/// User-chosen search constraints.
///
/// Every field defaults to "no constraint"; a listing matches when all
/// specified criteria hold. Fields that do not apply to a listing kind
/// (beds for jobs, job type for properties) are vacuously satisfied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub price_bracket: Option<PriceBracket>,
    pub min_beds: Option<f64>,
    pub min_baths: Option<f64>,
    pub tags: Vec<String>,
    pub search: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_bracket: Option<SalaryBracket>,
    pub origin: Option<Coordinates>,
    pub radius_miles: Option<f64>,
}

impl FilterCriteria {
    /// True when no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.price_bracket.is_none()
            && self.min_beds.is_none()
            && self.min_baths.is_none()
            && self.tags.is_empty()
            && self.search.is_none()
            && self.job_type.is_none()
            && self.salary_bracket.is_none()
            && (self.origin.is_none() || self.radius_miles.is_none())
    }
}

/// Listing keys the user has favorited in the current session.
///
/// Backed by an ordered set so saved views list in a stable (kind, id)
/// order without re-sorting. Lives only in the session store; nothing
/// persists across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSet(BTreeSet<ListingKey>);

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the key if absent, remove it if present.
    ///
    /// Toggling the same key twice returns the original set.
    #[must_use]
    pub fn toggle(mut self, key: ListingKey) -> Self {
        if !self.0.remove(&key) {
            self.0.insert(key);
        }
        self
    }

    pub fn contains(&self, key: &ListingKey) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingKey> {
        self.0.iter()
    }
}
