// Unit tests for the Estates Search filtering core

use estates_search::core::{
    amortized_monthly_payment,
    distance::{haversine_distance, within_radius},
    matches_job, matches_property, MortgageError, MortgageQuote, SearchEngine,
};
use estates_search::models::{
    Coordinates, FilterCriteria, Job, JobType, Listing, ListingKey, Property, SalaryBracket,
    SavedSet,
};

fn create_property(id: u32, location: &str, price: f64, coords: Option<(f64, f64)>) -> Property {
    Property {
        id,
        title: format!("Home {}", id),
        location: location.to_string(),
        price,
        beds: 3.0,
        baths: 2.0,
        sqft: 1800,
        tags: vec![],
        description: None,
        image: None,
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
    }
}

fn create_job(id: u32, salary: &str, job_type: JobType) -> Job {
    Job {
        id,
        title: format!("Role {}", id),
        company: "Prestige Properties".to_string(),
        salary: salary.to_string(),
        location: "Miami, FL".to_string(),
        job_type,
        posted: "New".to_string(),
        description: None,
        logo: None,
        latitude: None,
        longitude: None,
    }
}

#[test]
fn test_default_criteria_are_identity() {
    let engine = SearchEngine::new(100);
    let properties = vec![
        create_property(1, "Austin, TX", 450_000.0, None),
        create_property(2, "Miami, FL", 750_000.0, None),
        create_property(3, "Seattle, WA", 620_000.0, None),
    ];

    let outcome = engine.search_properties(&properties, &FilterCriteria::default());

    let ids: Vec<u32> = outcome.matches.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(outcome.total_candidates, 3);
}

#[test]
fn test_empty_collection_yields_empty_result() {
    let engine = SearchEngine::new(100);
    let criteria = FilterCriteria {
        location: Some("Austin".to_string()),
        min_price: Some(100_000.0),
        ..Default::default()
    };

    let outcome = engine.search_properties(&[], &criteria);
    assert!(outcome.matches.is_empty());
}

#[test]
fn test_relaxing_one_criterion_never_removes_matches() {
    let properties: Vec<Property> = vec![
        create_property(1, "Austin, TX", 450_000.0, Some((30.2672, -97.7431))),
        create_property(2, "Austin, TX", 900_000.0, None),
        create_property(3, "Miami, FL", 450_000.0, Some((25.7617, -80.1918))),
        create_property(4, "Austin, TX", 300_000.0, Some((30.25, -97.75))),
    ];

    let strict = FilterCriteria {
        location: Some("Austin".to_string()),
        max_price: Some(500_000.0),
        min_beds: Some(2.0),
        origin: Some(Coordinates { latitude: 30.2672, longitude: -97.7431 }),
        radius_miles: Some(50.0),
        ..Default::default()
    };

    let matched: Vec<u32> = properties
        .iter()
        .filter(|p| matches_property(p, &strict))
        .map(|p| p.id)
        .collect();

    // Relax each specified field to its default in turn
    let relaxations = vec![
        FilterCriteria { location: None, ..strict.clone() },
        FilterCriteria { max_price: None, ..strict.clone() },
        FilterCriteria { min_beds: None, ..strict.clone() },
        FilterCriteria { origin: None, radius_miles: None, ..strict.clone() },
    ];

    for relaxed in relaxations {
        let relaxed_ids: Vec<u32> = properties
            .iter()
            .filter(|p| matches_property(p, &relaxed))
            .map(|p| p.id)
            .collect();

        for id in &matched {
            assert!(
                relaxed_ids.contains(id),
                "relaxing a criterion dropped listing {}",
                id
            );
        }
    }
}

#[test]
fn test_toggle_is_an_involution() {
    let saved = SavedSet::new()
        .toggle(ListingKey::property(1))
        .toggle(ListingKey::job(2));
    let key = ListingKey::property(9);

    let round_trip = saved.clone().toggle(key).toggle(key);

    assert_eq!(round_trip, saved);
}

#[test]
fn test_toggle_adds_then_removes() {
    let key = ListingKey::property(1);

    let once = SavedSet::new().toggle(key);
    assert!(once.contains(&key));
    assert_eq!(once.len(), 1);

    let twice = once.toggle(key);
    assert!(!twice.contains(&key));
    assert!(twice.is_empty());
}

#[test]
fn test_proximity_example_new_york() {
    let new_york = Coordinates { latitude: 40.7128, longitude: -74.0060 };

    // ~1 mile away
    let nearby = Coordinates { latitude: 40.73, longitude: -73.99 };
    assert!(within_radius(new_york, nearby, 50.0));

    // Los Angeles
    let far = Coordinates { latitude: 34.05, longitude: -118.24 };
    assert!(!within_radius(new_york, far, 50.0));
}

#[test]
fn test_proximity_never_excludes_coordinate_free_listings() {
    let criteria = FilterCriteria {
        origin: Some(Coordinates { latitude: 40.7128, longitude: -74.0060 }),
        radius_miles: Some(50.0),
        ..Default::default()
    };

    let no_coords = create_property(1, "Nashville, TN", 540_000.0, None);
    assert!(matches_property(&no_coords, &criteria));
}

#[test]
fn test_haversine_is_symmetric() {
    let d1 = haversine_distance(40.7128, -74.0060, 34.05, -118.24);
    let d2 = haversine_distance(34.05, -118.24, 40.7128, -74.0060);
    assert!((d1 - d2).abs() < 1e-9);
}

#[test]
fn test_amortization_reference_payment() {
    // 500k home, 20% down, 3.5%, 30 years -> ~$1796.18 on a 400k principal
    let quote = MortgageQuote::calculate(500_000.0, 20.0, 3.5, 30).unwrap();

    assert!((quote.principal - 400_000.0).abs() < 0.01);
    assert!((quote.monthly_payment - 1796.18).abs() < 0.01);
}

#[test]
fn test_amortization_zero_rate() {
    let payment = amortized_monthly_payment(360_000.0, 0.0, 30).unwrap();
    assert!((payment - 1000.0).abs() < 1e-9);
    assert!(payment.is_finite());
}

#[test]
fn test_amortization_rejects_zero_term() {
    assert_eq!(
        amortized_monthly_payment(400_000.0, 3.5, 0),
        Err(MortgageError::InvalidTerm(0))
    );
}

#[test]
fn test_salary_bracket_matches_numerically() {
    let mid = FilterCriteria {
        salary_bracket: Some(SalaryBracket::Mid),
        ..Default::default()
    };

    // Parsed 95,000 falls inside 80k-120k
    let inside = create_job(1, "$95,000/yr", JobType::FullTime);
    assert!(matches_job(&inside, &mid));

    // Parsed 75,000 does not, regardless of the display string
    let below = create_job(2, "$75,000 + Bonuses", JobType::FullTime);
    assert!(!matches_job(&below, &mid));
}

#[test]
fn test_salary_parsing_handles_k_suffix_and_commas() {
    assert_eq!(create_job(1, "$75k", JobType::Contract).parsed_salary(), Some(75_000.0));
    assert_eq!(
        create_job(2, "$90,000 - $150,000/yr", JobType::Contract).parsed_salary(),
        Some(90_000.0)
    );
    assert_eq!(create_job(3, "Competitive", JobType::Contract).parsed_salary(), None);
}

#[test]
fn test_mixed_listing_search() {
    let engine = SearchEngine::new(100);
    let listings = vec![
        Listing::Property(create_property(1, "Miami, FL", 750_000.0, None)),
        Listing::Job(create_job(2, "$95,000/yr", JobType::Commission)),
        Listing::Property(create_property(3, "Austin, TX", 450_000.0, None)),
    ];

    let criteria = FilterCriteria {
        location: Some("miami".to_string()),
        ..Default::default()
    };

    let outcome = engine.search_listings(&listings, &criteria);

    // The Miami property and the Miami-based job, in input order
    let keys: Vec<ListingKey> = outcome.matches.iter().map(|l| l.key()).collect();
    assert_eq!(keys, vec![ListingKey::property(1), ListingKey::job(2)]);
}

#[test]
fn test_job_type_filter() {
    let engine = SearchEngine::new(100);
    let jobs = vec![
        create_job(1, "$90,000/yr", JobType::Commission),
        create_job(2, "$75,000/yr", JobType::FullTime),
        create_job(3, "$65,000/yr", JobType::PartTime),
    ];
    let criteria = FilterCriteria {
        job_type: Some(JobType::FullTime),
        ..Default::default()
    };

    let outcome = engine.search_jobs(&jobs, &criteria);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].id, 2);
}
