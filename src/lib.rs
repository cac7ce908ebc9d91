//! # rnacode - text <-> mRNA codon codec
//!
//! Maps messages over a 62-symbol alphabet (`0-9`, `A-Z`, `a-z`) onto RNA
//! codons, framed by the start codon `AUG` and the stop codon `UAA`.
//!
//! ## Architecture
//!
//! - `codon_table`: alphabet, bases, codons and the symbol <-> codon bijection
//! - `codec`: encoding, decoding, textual formats and error kinds
//! - `cli`: one-shot conversion from arguments, files or stdin
//! - `logging`: optional file logging
//! - `model`, `event`, `ui`, `controller`: the interactive terminal front end
//!
//! ## Example
//!
//! ```
//! use rnacode::{decode_from_rna, encode_to_rna};
//!
//! let rna = encode_to_rna("J38H").unwrap();
//! assert_eq!(rna.split(' ').count(), 6);
//! assert_eq!(decode_from_rna(&rna).unwrap(), "J38H");
//! ```

pub mod cli;
pub mod codec;
pub mod codon_table;
pub mod controller;
pub mod event;
pub mod logging;
pub mod model;
pub mod ui;

pub use codec::{decode_from_rna, encode_to_rna, encode_to_rna_with, CodecError, Direction, RnaFormat};
pub use codon_table::{Codon, CodonTable};
