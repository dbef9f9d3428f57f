//! Pluggable providers keyed by id.
//!
//! A [`GeneratorRegistry`] is an ordinary value: callers build one and pass
//! it where it is needed. Nothing is registered globally.

use std::collections::BTreeMap;
use std::fmt;

use rand::RngCore;
use serde_json::Value;

use crate::errors::GenerationError;

pub mod vehicle;

/// A value provider with JSON parameters.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    /// Locale whose data the generator draws from.
    fn locale(&self) -> &'static str;

    fn generate(
        &self,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;
}

/// Generators available to a caller.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Registry with the built-in generators.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        vehicle::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Adds a generator, replacing any previous one with the same id.
    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        let id = generator.id();
        if self.generators.insert(id, generator).is_some() {
            tracing::warn!(event = "generator_replaced", id);
        }
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// Sorted ids of every registered generator.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    /// Looks up `id` and generates one value.
    pub fn generate(
        &self,
        id: &str,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let generator = self
            .generator(id)
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))?;
        generator.generate(params, rng)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generator_ids())
            .finish()
    }
}
