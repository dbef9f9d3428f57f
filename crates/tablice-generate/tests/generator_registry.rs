use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use tablice_generate::checks::{is_valid_plate, matches_prefix_family};
use tablice_generate::errors::GenerationError;
use tablice_generate::generators::vehicle::LICENSE_PLATE_ID;
use tablice_generate::GeneratorRegistry;

#[test]
fn generator_ids_are_sorted_and_unique() {
    let registry = GeneratorRegistry::new();
    let ids = registry.generator_ids();
    assert!(ids.contains(&LICENSE_PLATE_ID));

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn license_plate_generator_is_polish() {
    let registry = GeneratorRegistry::new();
    let generator = registry
        .generator(LICENSE_PLATE_ID)
        .expect("generator exists");
    assert_eq!(generator.locale(), "pl_PL");
}

#[test]
fn params_with_nulls_are_tolerated() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let params = json!({
        "voivodeships": [null, "podkarpackie"],
        "counties": null,
    });

    for _ in 0..20 {
        let plate = registry
            .generate(LICENSE_PLATE_ID, Some(&params), &mut rng)
            .expect("plate");
        assert!(matches_prefix_family(&plate, 'R'), "{plate}");
    }
}

#[test]
fn absent_params_give_national_plates() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let plate = registry
        .generate(LICENSE_PLATE_ID, None, &mut rng)
        .expect("plate");
    assert!(is_valid_plate(&plate));
}

#[test]
fn unmatched_params_fall_back_instead_of_failing() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let params = json!({"voivodeships": ["fake voivodeship"], "counties": ["fake county"]});
    let plate = registry
        .generate(LICENSE_PLATE_ID, Some(&params), &mut rng)
        .expect("plate");
    assert!(is_valid_plate(&plate));
}

#[test]
fn malformed_params_are_rejected() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let params = json!({"voivodeships": "mazowieckie"});
    let result = registry.generate(LICENSE_PLATE_ID, Some(&params), &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidParams(_))));
}

#[test]
fn unknown_generator_is_reported() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let result = registry.generate("vehicle.vin", None, &mut rng);
    assert!(matches!(result, Err(GenerationError::UnknownGenerator(id)) if id == "vehicle.vin"));
}

#[test]
fn same_seed_gives_same_value_through_registry() {
    let registry = GeneratorRegistry::new();
    let params = json!({"voivodeships": ["śląskie"]});
    let mut first = ChaCha8Rng::seed_from_u64(10);
    let mut second = ChaCha8Rng::seed_from_u64(10);
    assert_eq!(
        registry
            .generate(LICENSE_PLATE_ID, Some(&params), &mut first)
            .expect("plate"),
        registry
            .generate(LICENSE_PLATE_ID, Some(&params), &mut second)
            .expect("plate"),
    );
}
