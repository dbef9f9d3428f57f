use rand::RngCore;
use serde_json::Value;
use tablice_core::{PlateFilter, RegionRegistry};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};
use crate::params::{ParamKind, ParamSpec, validate_params};
use crate::plate::PlateGenerator;

pub const LICENSE_PLATE_ID: &str = "vehicle.license_plate";

const LICENSE_PLATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("voivodeships", ParamKind::NameList, false),
    ParamSpec::new("counties", ParamKind::NameList, false),
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(LicensePlateGenerator::new(
        RegionRegistry::polish(),
    )));
}

/// Polish license plates, optionally narrowed by voivodeship and county.
#[derive(Debug)]
pub struct LicensePlateGenerator {
    regions: &'static RegionRegistry,
}

impl LicensePlateGenerator {
    pub fn new(regions: &'static RegionRegistry) -> Self {
        Self { regions }
    }
}

impl Generator for LicensePlateGenerator {
    fn id(&self) -> &'static str {
        LICENSE_PLATE_ID
    }

    fn locale(&self) -> &'static str {
        "pl_PL"
    }

    fn generate(
        &self,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let params = validate_params(params, LICENSE_PLATE_PARAMS, LICENSE_PLATE_ID)?;
        let filter = PlateFilter::new(
            params.get_name_list("voivodeships"),
            params.get_name_list("counties"),
        );
        Ok(PlateGenerator::new(self.regions, rng).generate_with(&filter))
    }
}
