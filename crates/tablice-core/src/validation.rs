use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::registry::RegionRegistry;
use crate::types::{Region, SuffixLength, Voivodeship};
use crate::RESERVED_PREFIX_LETTER;

/// Validate the internal consistency of a region table.
///
/// Every code, combined with a suffix of any allowed length, must satisfy
/// the national grammar: two letters followed by five characters, or three
/// letters followed by four or five.
pub fn validate_registry(registry: &RegionRegistry) -> Result<()> {
    let voivodeships = registry.voivodeships();
    if voivodeships.is_empty() {
        return Err(Error::InvalidRegistry("registry has no voivodeships".to_string()));
    }

    let mut voivodeship_names = HashSet::new();
    let mut codes = HashSet::new();

    for voivodeship in voivodeships {
        if !voivodeship_names.insert(voivodeship.name) {
            return Err(Error::InvalidRegistry(format!(
                "duplicate voivodeship {}",
                voivodeship.name
            )));
        }
        validate_voivodeship(voivodeship)?;

        for region in voivodeship.regions {
            for code in region.codes {
                if !codes.insert(*code) {
                    return Err(Error::InvalidRegistry(format!(
                        "code {code} is assigned more than once"
                    )));
                }
            }
        }
    }

    Ok(())
}

fn validate_voivodeship(voivodeship: &Voivodeship) -> Result<()> {
    if voivodeship.regions.is_empty() {
        return Err(Error::InvalidRegistry(format!(
            "voivodeship {} has no regions",
            voivodeship.name
        )));
    }
    if !voivodeship.letter.is_ascii_uppercase() || voivodeship.letter == RESERVED_PREFIX_LETTER {
        return Err(Error::InvalidRegistry(format!(
            "voivodeship {} uses invalid letter {:?}",
            voivodeship.name, voivodeship.letter
        )));
    }

    let mut region_names = HashSet::new();
    for region in voivodeship.regions {
        if !region_names.insert(region.name) {
            return Err(Error::InvalidRegistry(format!(
                "duplicate region {} in {}",
                region.name, voivodeship.name
            )));
        }
        validate_region(voivodeship, region)?;
    }

    Ok(())
}

fn validate_region(voivodeship: &Voivodeship, region: &Region) -> Result<()> {
    if region.codes.is_empty() {
        return Err(Error::InvalidRegistry(format!(
            "region {} in {} has no codes",
            region.name, voivodeship.name
        )));
    }

    for code in region.codes {
        validate_code(voivodeship, code)?;
        let allowed = SuffixLength::for_code_len(code.len());
        if region.suffix.min() > region.suffix.max()
            || region.suffix.min() < allowed.min()
            || region.suffix.max() > allowed.max()
        {
            return Err(Error::InvalidRegistry(format!(
                "suffix length {} does not fit code {code}",
                region.suffix
            )));
        }
    }

    Ok(())
}

fn validate_code(voivodeship: &Voivodeship, code: &str) -> Result<()> {
    let well_formed = (2..=3).contains(&code.len())
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() && c != RESERVED_PREFIX_LETTER);
    if !well_formed {
        return Err(Error::InvalidRegistry(format!("malformed code {code:?}")));
    }
    if !code.starts_with(voivodeship.letter) {
        return Err(Error::InvalidRegistry(format!(
            "code {code} does not start with {} ({})",
            voivodeship.letter, voivodeship.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(table: &'static [Voivodeship]) -> Result<RegionRegistry> {
        RegionRegistry::new(table)
    }

    #[test]
    fn rejects_code_with_foreign_letter() {
        static TABLE: &[Voivodeship] =
            &[Voivodeship::new("podkarpackie", 'R', &[Region::new("Rzeszów", &["WZ"])])];
        assert!(matches!(check(TABLE), Err(Error::InvalidRegistry(_))));
    }

    #[test]
    fn rejects_reserved_letter() {
        static TABLE: &[Voivodeship] =
            &[Voivodeship::new("podkarpackie", 'R', &[Region::new("Rzeszów", &["RQ"])])];
        assert!(check(TABLE).is_err());
    }

    #[test]
    fn rejects_duplicate_codes_across_voivodeships() {
        static TABLE: &[Voivodeship] = &[
            Voivodeship::new("a", 'W', &[Region::new("x", &["WA"])]),
            Voivodeship::new("b", 'W', &[Region::new("y", &["WA"])]),
        ];
        assert!(check(TABLE).is_err());
    }

    #[test]
    fn rejects_suffix_outside_grammar() {
        static TABLE: &[Voivodeship] = &[Voivodeship::new(
            "mazowieckie",
            'W',
            &[Region::new("radomski", &["WRA"]).with_suffix(SuffixLength::Fixed { len: 6 })],
        )];
        assert!(check(TABLE).is_err());
    }

    #[test]
    fn accepts_narrower_suffix_rule() {
        static TABLE: &[Voivodeship] = &[Voivodeship::new(
            "mazowieckie",
            'W',
            &[Region::new("radomski", &["WRA"]).with_suffix(SuffixLength::Fixed { len: 4 })],
        )];
        assert!(check(TABLE).is_ok());
    }

    #[test]
    fn rejects_empty_region() {
        static TABLE: &[Voivodeship] =
            &[Voivodeship::new("mazowieckie", 'W', &[Region::new("pusty", &[])])];
        assert!(check(TABLE).is_err());
    }
}
