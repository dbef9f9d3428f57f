use std::collections::BTreeSet;

use tablice_core::{PlateFilter, Prefix, RegionRegistry, SuffixLength};

fn codes(prefixes: &[Prefix]) -> BTreeSet<&'static str> {
    prefixes.iter().map(|prefix| prefix.code).collect()
}

#[test]
fn national_pool_is_never_empty() {
    let registry = RegionRegistry::polish();
    assert!(!registry.all_codes().is_empty());
    assert_eq!(registry.all_codes(), registry.candidates(&PlateFilter::any()).prefixes());
}

#[test]
fn single_voivodeship_pool_shares_its_letter() {
    let registry = RegionRegistry::polish();
    let pool = registry.candidates(&PlateFilter::any().voivodeships(["podkarpackie"]));
    assert!(!pool.is_fallback());
    assert!(pool.codes().all(|code| code.starts_with('R')));
    assert_eq!(
        pool.len(),
        registry
            .voivodeship("podkarpackie")
            .map(|v| v.prefixes().count())
            .unwrap_or_default()
    );
}

#[test]
fn voivodeship_and_designation_are_united() {
    let registry = RegionRegistry::polish();
    let pool = registry.candidates(&PlateFilter::any().voivodeships(["łódzkie", "army"]));
    assert!(!pool.is_fallback());
    assert!(pool.codes().any(|code| code.starts_with('E')));
    assert!(pool.codes().any(|code| code.starts_with('U')));
    assert!(pool.codes().all(|code| code.starts_with('E') || code.starts_with('U')));
}

#[test]
fn voivodeship_and_county_filters_narrow_to_known_codes() {
    let registry = RegionRegistry::polish();
    let filter = PlateFilter::any()
        .voivodeships(["mazowieckie", "services"])
        .regions(["Straż Graniczna", "warszawski zachodni", "radomski"]);
    let pool = registry.candidates(&filter);

    assert!(!pool.is_fallback());
    assert_eq!(
        codes(pool.prefixes()),
        BTreeSet::from(["HWA", "HWK", "WRA", "WZ"])
    );
    for prefix in pool.prefixes() {
        let expected = SuffixLength::for_code_len(prefix.code.len());
        assert_eq!(prefix.suffix, expected, "suffix rule of {}", prefix.code);
    }
}

#[test]
fn county_filter_alone_spans_all_voivodeships() {
    let registry = RegionRegistry::polish();
    let filter = PlateFilter::new(
        None::<Vec<Option<&str>>>,
        Some(vec![
            Some("Straż Graniczna"),
            Some("warszawski zachodni"),
            Some("radomski"),
        ]),
    );
    let pool = registry.candidates(&filter);
    assert_eq!(
        codes(pool.prefixes()),
        BTreeSet::from(["HWA", "HWK", "WRA", "WZ"])
    );
}

#[test]
fn shared_county_names_match_in_every_voivodeship() {
    let registry = RegionRegistry::polish();
    let pool = registry.candidates(&PlateFilter::any().regions(["tomaszowski"]));
    assert_eq!(codes(pool.prefixes()), BTreeSet::from(["ETM", "LTM"]));
}

#[test]
fn unmatched_filters_fall_back_to_national_pool() {
    let registry = RegionRegistry::polish();
    let national = registry.all_codes();
    let filters = [
        PlateFilter::any().voivodeships(["fake voivodeship", "fake voivodeship2"]),
        PlateFilter::any()
            .voivodeships(["mazowieckie", "services"])
            .regions(["fake county"]),
        PlateFilter::any()
            .voivodeships(["fake voivodeship"])
            .regions(["Straż Graniczna", "warszawski zachodni", "radomski"]),
        PlateFilter::any().voivodeships(["podkarpackie"]).regions(["radomski"]),
    ];

    for filter in &filters {
        let pool = registry.candidates(filter);
        assert!(pool.is_fallback(), "{filter:?}");
        assert_eq!(pool.prefixes(), national.as_slice());
    }
}

#[test]
fn null_entries_are_ignored() {
    let registry = RegionRegistry::polish();
    let filter = PlateFilter::new(
        Some(vec![None::<&str>]),
        Some(vec![Some("radomski"), None]),
    );
    assert!(filter.voivodeships.is_empty());
    assert_eq!(codes(registry.candidates(&filter).prefixes()), BTreeSet::from(["WRA"]));
}

#[test]
fn pool_computation_is_repeatable() {
    let registry = RegionRegistry::polish();
    let filter = PlateFilter::any().voivodeships(["śląskie", "army"]);
    let first = registry.candidates(&filter);
    for _ in 0..10 {
        assert_eq!(registry.candidates(&filter), first);
    }
}
