use std::fmt;

use serde::Serialize;

/// Allowed length of the random part that follows a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SuffixLength {
    Fixed { len: u8 },
    /// Inclusive on both ends.
    Between { min: u8, max: u8 },
}

impl SuffixLength {
    /// Suffix rule mandated by the national grammar for a code of `code_len`
    /// letters: two-letter codes take five characters, three-letter codes
    /// take four or five.
    pub const fn for_code_len(code_len: usize) -> Self {
        if code_len <= 2 {
            Self::Fixed { len: 5 }
        } else {
            Self::Between { min: 4, max: 5 }
        }
    }

    pub const fn min(self) -> u8 {
        match self {
            Self::Fixed { len } => len,
            Self::Between { min, .. } => min,
        }
    }

    pub const fn max(self) -> u8 {
        match self {
            Self::Fixed { len } => len,
            Self::Between { max, .. } => max,
        }
    }

    pub fn contains(self, len: usize) -> bool {
        (usize::from(self.min())..=usize::from(self.max())).contains(&len)
    }
}

impl fmt::Display for SuffixLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { len } => write!(f, "{len}"),
            Self::Between { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// A county, city with county rights, or special designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub codes: &'static [&'static str],
    pub suffix: SuffixLength,
}

impl Region {
    /// Region whose suffix rule follows from the length of its codes.
    pub const fn new(name: &'static str, codes: &'static [&'static str]) -> Self {
        let code_len = if codes.is_empty() { 0 } else { codes[0].len() };
        Self {
            name,
            codes,
            suffix: SuffixLength::for_code_len(code_len),
        }
    }

    pub const fn with_suffix(mut self, suffix: SuffixLength) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.codes.iter().map(|code| Prefix {
            code,
            suffix: self.suffix,
        })
    }
}

/// Top-level province, or a nationwide designation group (`army`,
/// `services`) that owns its own leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voivodeship {
    pub name: &'static str,
    /// Leading letter shared by every code in this voivodeship.
    pub letter: char,
    pub regions: &'static [Region],
}

impl Voivodeship {
    pub const fn new(name: &'static str, letter: char, regions: &'static [Region]) -> Self {
        Self {
            name,
            letter,
            regions,
        }
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.regions.iter().flat_map(Region::prefixes)
    }
}

/// Entry of a candidate pool: a code plus the suffix rule that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prefix {
    pub code: &'static str,
    pub suffix: SuffixLength,
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
