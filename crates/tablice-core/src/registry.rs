use serde::Serialize;

use crate::data::VOIVODESHIPS;
use crate::error::Result;
use crate::filter::PlateFilter;
use crate::types::{Prefix, Voivodeship};
use crate::validation::validate_registry;

/// Read-only catalog of voivodeships, regions and their prefix codes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegionRegistry {
    voivodeships: &'static [Voivodeship],
}

// Validated in `data::tests`.
const POLAND: RegionRegistry = RegionRegistry {
    voivodeships: VOIVODESHIPS,
};

impl RegionRegistry {
    /// Built-in national table.
    pub const fn polish() -> &'static Self {
        &POLAND
    }

    /// Wraps a custom table after checking it.
    pub fn new(voivodeships: &'static [Voivodeship]) -> Result<Self> {
        let registry = Self { voivodeships };
        validate_registry(&registry)?;
        Ok(registry)
    }

    pub fn voivodeships(&self) -> &'static [Voivodeship] {
        self.voivodeships
    }

    pub fn voivodeship(&self, name: &str) -> Option<&'static Voivodeship> {
        self.voivodeships.iter().find(|voivodeship| voivodeship.name == name)
    }

    /// Every code in registry order; the fallback pool.
    pub fn all_codes(&self) -> Vec<Prefix> {
        self.voivodeships
            .iter()
            .flat_map(Voivodeship::prefixes)
            .collect()
    }

    /// Codes matching `filter`, without fallback. May be empty.
    ///
    /// An empty voivodeship filter selects every voivodeship; an empty region
    /// filter keeps every region of the selected voivodeships. Both filters
    /// use exact, case-sensitive name matches. The result follows registry
    /// order, so repeated names in a filter never duplicate codes.
    pub fn codes_for(&self, filter: &PlateFilter) -> Vec<Prefix> {
        self.voivodeships
            .iter()
            .filter(|voivodeship| filter.voivodeships.matches(voivodeship.name))
            .flat_map(|voivodeship| voivodeship.regions.iter())
            .filter(|region| filter.regions.matches(region.name))
            .flat_map(|region| region.prefixes())
            .collect()
    }

    /// Candidate pool for `filter`, falling back to [`Self::all_codes`] when
    /// nothing matches.
    pub fn candidates(&self, filter: &PlateFilter) -> CandidatePool {
        let prefixes = self.codes_for(filter);
        if prefixes.is_empty() {
            CandidatePool {
                prefixes: self.all_codes(),
                fallback: true,
            }
        } else {
            CandidatePool {
                prefixes,
                fallback: false,
            }
        }
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        POLAND
    }
}

/// Prefixes eligible for random selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidatePool {
    prefixes: Vec<Prefix>,
    fallback: bool,
}

impl CandidatePool {
    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// True when the filter matched nothing and the national pool was used.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn get(&self, index: usize) -> Option<Prefix> {
        self.prefixes.get(index).copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.prefixes.iter().map(|prefix| prefix.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    static SMALL: &[Voivodeship] = &[
        Voivodeship::new(
            "mazowieckie",
            'W',
            &[
                Region::new("Radom", &["WR"]),
                Region::new("radomski", &["WRA"]),
            ],
        ),
        Voivodeship::new("army", 'U', &[Region::new("army", &["UA", "UB"])]),
    ];

    fn small() -> RegionRegistry {
        RegionRegistry::new(SMALL).expect("valid table")
    }

    #[test]
    fn all_codes_follow_registry_order() {
        let codes: Vec<&str> = small().all_codes().iter().map(|p| p.code).collect();
        assert_eq!(codes, ["WR", "WRA", "UA", "UB"]);
    }

    #[test]
    fn region_filter_without_voivodeship_spans_every_voivodeship() {
        let filter = PlateFilter::any().regions(["army", "radomski"]);
        let codes: Vec<&str> = small().codes_for(&filter).iter().map(|p| p.code).collect();
        assert_eq!(codes, ["WRA", "UA", "UB"]);
    }

    #[test]
    fn repeated_names_do_not_duplicate_codes() {
        let filter = PlateFilter::any().voivodeships(["army", "army"]);
        assert_eq!(small().codes_for(&filter).len(), 2);
    }

    #[test]
    fn unmatched_filter_falls_back() {
        let filter = PlateFilter::any().voivodeships(["fake voivodeship"]);
        let pool = small().candidates(&filter);
        assert!(pool.is_fallback());
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn mismatched_pair_falls_back() {
        let filter = PlateFilter::any().voivodeships(["army"]).regions(["radomski"]);
        assert!(small().codes_for(&filter).is_empty());
        assert!(small().candidates(&filter).is_fallback());
    }

    #[test]
    fn invalid_table_is_rejected() {
        static EMPTY: &[Voivodeship] = &[];
        assert!(RegionRegistry::new(EMPTY).is_err());
    }
}
