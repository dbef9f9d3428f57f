use std::fmt;

use tablice_core::{PlateFilter, Prefix, RegionRegistry, SuffixLength};

use crate::random::RandomSource;

/// Characters allowed after the prefix: digits plus letters that cannot be
/// mistaken for a digit (`B D I O Z`) or are reserved (`Q`).
pub const SUFFIX_ALPHABET: &[u8] = b"0123456789ACEFGHJKLMNPRSTUVWXY";

/// A generated plate, rendered as `PREFIX SUFFIX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate {
    pub prefix: String,
    pub suffix: String,
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.suffix)
    }
}

/// Generates plates from a registry and an owned randomness source.
///
/// Draw order per plate is fixed: prefix index, then suffix length (only
/// when the prefix allows a range), then one alphabet index per character.
#[derive(Debug)]
pub struct PlateGenerator<'r, S> {
    registry: &'r RegionRegistry,
    source: S,
}

impl<'r, S: RandomSource> PlateGenerator<'r, S> {
    pub fn new(registry: &'r RegionRegistry, source: S) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &'r RegionRegistry {
        self.registry
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Loosely typed entry point: either filter may be absent or hold null
    /// entries. Unmatched filters fall back to the national pool.
    pub fn generate(
        &mut self,
        voivodeships: Option<&[Option<&str>]>,
        regions: Option<&[Option<&str>]>,
    ) -> String {
        let filter = PlateFilter::new(
            voivodeships.map(|entries| entries.iter().copied()),
            regions.map(|entries| entries.iter().copied()),
        );
        self.generate_with(&filter)
    }

    pub fn generate_with(&mut self, filter: &PlateFilter) -> String {
        self.plate(filter).to_string()
    }

    pub fn generate_batch(&mut self, filter: &PlateFilter, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate_with(filter)).collect()
    }

    pub fn plate(&mut self, filter: &PlateFilter) -> Plate {
        let pool = self.registry.candidates(filter);
        if pool.is_fallback() && !filter.is_unrestricted() {
            tracing::debug!(
                event = "plate_pool_fallback",
                voivodeships = ?filter.voivodeships.names(),
                regions = ?filter.regions.names(),
                pool = pool.len(),
            );
        }

        // A validated registry is never empty, so the pool is not either.
        let index = self.source.below(pool.len());
        let prefix = pool.prefixes()[index];
        let plate = Plate {
            prefix: prefix.code.to_string(),
            suffix: self.suffix(prefix),
        };
        tracing::debug!(event = "plate_generated", plate = %plate);
        plate
    }

    fn suffix(&mut self, prefix: Prefix) -> String {
        let len = match prefix.suffix {
            SuffixLength::Fixed { len } => usize::from(len),
            SuffixLength::Between { min, max } => {
                let span = usize::from(max.saturating_sub(min)) + 1;
                usize::from(min) + self.source.below(span)
            }
        };

        (0..len)
            .map(|_| char::from(SUFFIX_ALPHABET[self.source.below(SUFFIX_ALPHABET.len())]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn alphabet_has_no_ambiguous_letters() {
        for letter in b"BDIOQZ" {
            assert!(!SUFFIX_ALPHABET.contains(letter));
        }
        assert_eq!(SUFFIX_ALPHABET.len(), 30);
    }

    #[test]
    fn scripted_draws_produce_golden_plate() {
        let registry = RegionRegistry::polish();
        let filter = PlateFilter::any()
            .voivodeships(["mazowieckie"])
            .regions(["radomski", "warszawski zachodni"]);
        // pool: [WRA, WZ]; index 0 -> WRA, length offset 1 -> 5 characters.
        let source = ScriptedSource::new([0, 1, 0, 10, 29, 9, 11]);
        let mut generator = PlateGenerator::new(registry, source);

        assert_eq!(generator.generate_with(&filter), "WRA 0AY9C");
        assert_eq!(generator.into_source().draws(), 7);
    }

    #[test]
    fn fixed_suffix_skips_the_length_draw() {
        let registry = RegionRegistry::polish();
        let filter = PlateFilter::any().regions(["warszawski zachodni"]);
        let source = ScriptedSource::new([0, 1, 2, 3, 4, 5]);
        let mut generator = PlateGenerator::new(registry, source);

        assert_eq!(generator.generate_with(&filter), "WZ 12345");
    }

    #[test]
    fn plate_displays_with_single_space() {
        let plate = Plate {
            prefix: "RZ".to_string(),
            suffix: "12345".to_string(),
        };
        assert_eq!(plate.to_string(), "RZ 12345");
    }
}
