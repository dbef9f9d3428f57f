use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tablice_core::{PlateFilter, RegionRegistry};
use tablice_generate::PlateGenerator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let filter = PlateFilter::any()
        .voivodeships(["mazowieckie", "services"])
        .regions(["Straż Graniczna", "warszawski zachodni", "radomski"]);
    let mut generator =
        PlateGenerator::new(RegionRegistry::polish(), ChaCha8Rng::seed_from_u64(2024));

    for plate in generator.generate_batch(&filter, 10) {
        println!("{plate}");
    }
}
