use tablice_core::RegionRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(RegionRegistry::polish())?;
    println!("{json}");
    Ok(())
}
