//! Message <-> codon sequence conversion.
//!
//! ## Encoded form
//!
//! ```text
//! AUG <codon per symbol> ... UAA
//! ```
//!
//! Two textual forms are supported, see [`RnaFormat`]. Decoding accepts either:
//! input containing whitespace is split into whitespace-separated codons,
//! anything else is cut into consecutive 3-base windows.
//!
//! Decoding validates, in order: frame markers, non-empty body, whole codons,
//! base letters, then codon lookup. The first failure aborts with no partial output.

use log::debug;
use thiserror::Error;

use crate::codon_table::{Base, Codon, CodonTable, CODON_LEN, START_CODON, STOP_CODON};

/// Errors raised while encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid character '{symbol}' at position {position}: only 0-9, A-Z and a-z can be encoded")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Sequence must start with the start codon AUG and end with the stop codon UAA")]
    Frame,

    #[error("Sequence has no codons between the start and stop codons")]
    EmptyBody,

    #[error("Incomplete codon in body: '{fragment}'")]
    Framing { fragment: String },

    #[error("Invalid base '{base}' at body position {position}: expected A, C, G or U")]
    InvalidBase { base: char, position: usize },

    #[error("Unknown codon {codon} at body codon {position}")]
    UnknownCodon { codon: String, position: usize },
}

impl CodecError {
    /// Stable short identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::InvalidSymbol { .. } => "invalid_symbol",
            CodecError::Frame => "frame",
            CodecError::EmptyBody => "empty_body",
            CodecError::Framing { .. } => "framing",
            CodecError::InvalidBase { .. } => "invalid_base",
            CodecError::UnknownCodon { .. } => "unknown_codon",
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Textual form of an encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RnaFormat {
    /// Codons joined by single spaces: `AUG AAA UAA`
    #[default]
    Spaced,
    /// One concatenated base string: `AUGAAAUAA`
    Compact,
}

impl RnaFormat {
    /// Returns the other format.
    pub fn toggle(self) -> Self {
        match self {
            RnaFormat::Spaced => RnaFormat::Compact,
            RnaFormat::Compact => RnaFormat::Spaced,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            RnaFormat::Spaced => " ",
            RnaFormat::Compact => "",
        }
    }
}

impl std::fmt::Display for RnaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RnaFormat::Spaced => write!(f, "spaced"),
            RnaFormat::Compact => write!(f, "compact"),
        }
    }
}

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Text -> codons
    #[default]
    Encode,
    /// Codons -> text
    Decode,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Encode => Direction::Decode,
            Direction::Decode => Direction::Encode,
        }
    }

    /// Runs the conversion on `input`. `format` only affects encoding.
    pub fn convert(self, input: &str, format: RnaFormat) -> CodecResult<String> {
        match self {
            Direction::Encode => encode_to_rna_with(input, format),
            Direction::Decode => decode_from_rna(input),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Encode => write!(f, "ENCODE"),
            Direction::Decode => write!(f, "DECODE"),
        }
    }
}

/// Encodes a message into a framed codon sequence.
///
/// The empty message encodes to `[START, STOP]`.
pub fn encode(table: &CodonTable, message: &str) -> CodecResult<Vec<Codon>> {
    let mut codons = Vec::with_capacity(message.len() + 2);
    codons.push(START_CODON);
    for (position, symbol) in message.chars().enumerate() {
        let codon = table
            .codon_for(symbol)
            .ok_or(CodecError::InvalidSymbol { symbol, position })?;
        codons.push(codon);
    }
    codons.push(STOP_CODON);
    Ok(codons)
}

/// Decodes a framed codon sequence back into its message.
pub fn decode(table: &CodonTable, codons: &[Codon]) -> CodecResult<String> {
    let body = match codons {
        [first, body @ .., last] if *first == START_CODON && *last == STOP_CODON => body,
        _ => return Err(CodecError::Frame),
    };
    if body.is_empty() {
        return Err(CodecError::EmptyBody);
    }

    body.iter()
        .enumerate()
        .map(|(position, &codon)| {
            table.symbol_for(codon).ok_or_else(|| CodecError::UnknownCodon {
                codon: codon.to_string(),
                position,
            })
        })
        .collect()
}

/// Renders codons in the given textual form.
pub fn format_codons(codons: &[Codon], format: RnaFormat) -> String {
    codons
        .iter()
        .map(Codon::to_string)
        .collect::<Vec<_>>()
        .join(format.separator())
}

/// Parses the textual form of an encoded sequence into codons, markers included.
///
/// Checks the frame, the body length and the base letters. Codon lookup is left
/// to [`decode`].
pub fn parse_rna(text: &str) -> CodecResult<Vec<Codon>> {
    let text = text.trim();
    if text.chars().any(char::is_whitespace) {
        parse_spaced(text)
    } else {
        parse_compact(text)
    }
}

fn parse_spaced(text: &str) -> CodecResult<Vec<Codon>> {
    let tokens: Vec<Vec<char>> = text.split_whitespace().map(|t| t.chars().collect()).collect();
    let body = match tokens.as_slice() {
        [first, body @ .., last] if spells(first, START_CODON) && spells(last, STOP_CODON) => body,
        _ => return Err(CodecError::Frame),
    };
    if body.is_empty() {
        return Err(CodecError::EmptyBody);
    }
    if let Some(token) = body.iter().find(|t| t.len() != CODON_LEN) {
        return Err(CodecError::Framing {
            fragment: token.iter().collect(),
        });
    }
    let bases: Vec<char> = body.iter().flatten().copied().collect();
    framed_codons(&bases)
}

fn parse_compact(text: &str) -> CodecResult<Vec<Codon>> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 * CODON_LEN
        || !spells(&chars[..CODON_LEN], START_CODON)
        || !spells(&chars[chars.len() - CODON_LEN..], STOP_CODON)
    {
        return Err(CodecError::Frame);
    }
    let body = &chars[CODON_LEN..chars.len() - CODON_LEN];
    if body.is_empty() {
        return Err(CodecError::EmptyBody);
    }
    let remainder = body.len() % CODON_LEN;
    if remainder != 0 {
        return Err(CodecError::Framing {
            fragment: body[body.len() - remainder..].iter().collect(),
        });
    }
    framed_codons(body)
}

/// Validates body bases (a whole number of codons) and wraps them in the markers.
fn framed_codons(body: &[char]) -> CodecResult<Vec<Codon>> {
    let bases = body
        .iter()
        .enumerate()
        .map(|(position, &c)| {
            Base::try_from(c).map_err(|base| CodecError::InvalidBase { base, position })
        })
        .collect::<CodecResult<Vec<Base>>>()?;

    let mut codons = Vec::with_capacity(bases.len() / CODON_LEN + 2);
    codons.push(START_CODON);
    codons.extend(
        bases
            .chunks_exact(CODON_LEN)
            .map(|chunk| Codon::new(chunk[0], chunk[1], chunk[2])),
    );
    codons.push(STOP_CODON);
    Ok(codons)
}

fn spells(chars: &[char], codon: Codon) -> bool {
    chars.iter().copied().eq(codon.bases().iter().map(|b| b.as_char()))
}

/// Encodes a message as space-separated codons.
///
/// # Examples
///
/// ```
/// use rnacode::codec::encode_to_rna;
///
/// assert_eq!(encode_to_rna("").unwrap(), "AUG UAA");
/// assert_eq!(encode_to_rna("01").unwrap(), "AUG AAA AAC UAA");
/// ```
pub fn encode_to_rna(message: &str) -> CodecResult<String> {
    encode_to_rna_with(message, RnaFormat::Spaced)
}

/// Encodes a message in the given textual form.
pub fn encode_to_rna_with(message: &str, format: RnaFormat) -> CodecResult<String> {
    let codons = encode(CodonTable::global(), message).inspect_err(|e| {
        debug!("encode rejected: kind={} {}", e.kind(), e);
    })?;
    debug!("encoded {} symbols as {} codons", codons.len() - 2, codons.len());
    Ok(format_codons(&codons, format))
}

/// Decodes a sequence in either textual form back into its message.
///
/// # Examples
///
/// ```
/// use rnacode::codec::{decode_from_rna, CodecError};
///
/// assert_eq!(decode_from_rna("AUG AAA AAC UAA").unwrap(), "01");
/// assert_eq!(decode_from_rna("AUGAAAAACUAA").unwrap(), "01");
/// assert!(matches!(decode_from_rna("AUG XYZ UAA"), Err(CodecError::InvalidBase { .. })));
/// ```
pub fn decode_from_rna(sequence: &str) -> CodecResult<String> {
    let result = parse_rna(sequence).and_then(|codons| decode(CodonTable::global(), &codons));
    match &result {
        Ok(message) => debug!("decoded {} symbols", message.chars().count()),
        Err(e) => debug!("decode rejected: kind={} {}", e.kind(), e),
    }
    result
}
