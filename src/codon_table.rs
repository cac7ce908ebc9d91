//! Symbol alphabet and codon table.
//!
//! This module provides:
//! - The 62-symbol message alphabet (digits, uppercase, lowercase)
//! - RNA bases and codons
//! - The bijective symbol <-> codon table, with `AUG`/`UAA` reserved as markers

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use log::debug;
use thiserror::Error;

/// The message alphabet. Its order fixes the symbol -> codon assignment.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of bases in a codon.
pub const CODON_LEN: usize = 3;

/// Number of codons available for symbols once the two markers are reserved.
pub const MAPPED_CODONS: usize = 62;

/// Start marker (`AUG`).
pub const START_CODON: Codon = Codon([Base::A, Base::U, Base::G]);

/// Stop marker (`UAA`).
pub const STOP_CODON: Codon = Codon([Base::U, Base::A, Base::A]);

/// An RNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    /// All bases, in generation order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// Returns the base letter.
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    /// Parses an uppercase base letter. The rejected character is returned as the error.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' => Ok(Base::U),
            other => Err(other),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered triplet of bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon(pub [Base; 3]);

impl Codon {
    /// Creates a codon from three bases.
    pub const fn new(first: Base, second: Base, third: Base) -> Self {
        Self([first, second, third])
    }

    /// Returns the bases of this codon.
    pub fn bases(&self) -> &[Base; 3] {
        &self.0
    }

    /// Returns true for the start or stop marker.
    pub fn is_marker(&self) -> bool {
        *self == START_CODON || *self == STOP_CODON
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a well-formed codon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCodonError {
    /// The string did not hold exactly three characters.
    #[error("Codon must have 3 bases (got {0})")]
    Length(usize),

    /// A character outside {A, C, G, U}.
    #[error("Invalid base '{0}'")]
    Base(char),
}

impl FromStr for Codon {
    type Err = ParseCodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODON_LEN {
            return Err(ParseCodonError::Length(chars.len()));
        }
        let mut bases = [Base::A; 3];
        for (slot, &c) in bases.iter_mut().zip(&chars) {
            *slot = Base::try_from(c).map_err(ParseCodonError::Base)?;
        }
        Ok(Codon(bases))
    }
}

/// Returns the 64-codon universe, first position varying slowest.
pub fn all_codons() -> Vec<Codon> {
    let mut codons = Vec::with_capacity(64);
    for &b1 in &Base::ALL {
        for &b2 in &Base::ALL {
            for &b3 in &Base::ALL {
                codons.push(Codon::new(b1, b2, b3));
            }
        }
    }
    codons
}

/// The bijection between alphabet symbols and non-marker codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    /// Codons in alphabet order (index i encodes the i-th symbol)
    codons: Vec<Codon>,
    symbol_to_codon: HashMap<char, Codon>,
    codon_to_symbol: HashMap<Codon, char>,
}

impl CodonTable {
    /// Builds the table.
    ///
    /// # Panics
    ///
    /// Panics if removing the markers does not leave exactly 62 codons, or if
    /// the alphabet does not hold 62 distinct symbols. Both are construction
    /// bugs, not input errors.
    pub fn new() -> Self {
        let codons: Vec<Codon> = all_codons()
            .into_iter()
            .filter(|codon| !codon.is_marker())
            .collect();
        assert_eq!(codons.len(), MAPPED_CODONS, "reserved codon removal must leave 62 codons");

        let symbol_to_codon: HashMap<char, Codon> =
            ALPHABET.chars().zip(codons.iter().copied()).collect();
        assert_eq!(symbol_to_codon.len(), MAPPED_CODONS, "alphabet must hold 62 distinct symbols");

        let codon_to_symbol = symbol_to_codon
            .iter()
            .map(|(&symbol, &codon)| (codon, symbol))
            .collect();

        debug!("codon table built with {} entries", codons.len());

        Self {
            codons,
            symbol_to_codon,
            codon_to_symbol,
        }
    }

    /// Returns the shared process-wide table, building it on first use.
    pub fn global() -> &'static CodonTable {
        static TABLE: OnceLock<CodonTable> = OnceLock::new();
        TABLE.get_or_init(CodonTable::new)
    }

    /// Number of mapped symbols.
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    /// Looks up the codon for a symbol.
    pub fn codon_for(&self, symbol: char) -> Option<Codon> {
        self.symbol_to_codon.get(&symbol).copied()
    }

    /// Looks up the symbol for a codon. Markers are never mapped.
    pub fn symbol_for(&self, codon: Codon) -> Option<char> {
        self.codon_to_symbol.get(&codon).copied()
    }

    /// Iterates `(symbol, codon)` pairs in alphabet order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Codon)> + '_ {
        ALPHABET.chars().zip(self.codons.iter().copied())
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::new()
    }
}
