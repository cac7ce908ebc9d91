//! Round-trip, bijectivity and rejection properties of the public codec API.

use proptest::prelude::*;

use rnacode::codec::{decode, encode, format_codons, parse_rna};
use rnacode::codon_table::{all_codons, ALPHABET, START_CODON, STOP_CODON};
use rnacode::{decode_from_rna, encode_to_rna, encode_to_rna_with, CodecError, CodonTable, RnaFormat};

fn message() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(ALPHABET.chars().collect::<Vec<_>>()), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn roundtrip_spaced(msg in message()) {
        let rna = encode_to_rna(&msg).unwrap();
        prop_assume!(!msg.is_empty());
        prop_assert_eq!(decode_from_rna(&rna).unwrap(), msg);
    }

    #[test]
    fn roundtrip_compact(msg in message()) {
        prop_assume!(!msg.is_empty());
        let rna = encode_to_rna_with(&msg, RnaFormat::Compact).unwrap();
        prop_assert_eq!(rna.len(), 3 * (msg.chars().count() + 2));
        prop_assert_eq!(decode_from_rna(&rna).unwrap(), msg);
    }

    #[test]
    fn encoded_frame_shape(msg in message()) {
        let codons = encode(CodonTable::global(), &msg).unwrap();
        prop_assert_eq!(codons.len(), msg.chars().count() + 2);
        prop_assert_eq!(codons[0], START_CODON);
        prop_assert_eq!(codons[codons.len() - 1], STOP_CODON);
        prop_assert!(codons[1..codons.len() - 1].iter().all(|c| !c.is_marker()));
    }

    #[test]
    fn foreign_characters_rejected(prefix in message(), c in any::<char>()) {
        prop_assume!(!c.is_ascii_alphanumeric());
        let msg = format!("{}{}", prefix, c);
        let err = encode_to_rna(&msg).unwrap_err();
        prop_assert_eq!(err, CodecError::InvalidSymbol { symbol: c, position: prefix.chars().count() });
    }

    #[test]
    fn missing_markers_rejected(msg in message()) {
        prop_assume!(!msg.is_empty());
        let rna = encode_to_rna(&msg).unwrap();
        let no_start = rna.strip_prefix("AUG ").unwrap();
        let no_stop = rna.strip_suffix(" UAA").unwrap();
        let neither = no_start.strip_suffix(" UAA").unwrap_or("");
        prop_assert_eq!(decode_from_rna(no_start), Err(CodecError::Frame));
        prop_assert_eq!(decode_from_rna(no_stop), Err(CodecError::Frame));
        if !neither.is_empty() {
            prop_assert_eq!(decode_from_rna(neither), Err(CodecError::Frame));
        }
    }
}

#[test]
fn every_symbol_roundtrips() {
    for symbol in ALPHABET.chars() {
        let s = symbol.to_string();
        assert_eq!(decode_from_rna(&encode_to_rna(&s).unwrap()).unwrap(), s);
    }
}

#[test]
fn every_codon_is_mapped_or_reserved() {
    let table = CodonTable::global();
    for codon in all_codons() {
        let framed = [START_CODON, codon, STOP_CODON];
        match decode(table, &framed) {
            Ok(s) => assert_eq!(s.chars().count(), 1),
            Err(CodecError::UnknownCodon { codon: text, position: 0 }) => {
                assert!(codon.is_marker());
                assert_eq!(text, codon.to_string());
            }
            Err(e) => panic!("unexpected error for {}: {}", codon, e),
        }
    }
}

#[test]
fn parse_matches_format() {
    let codons = encode(CodonTable::global(), "J38H").unwrap();
    for format in [RnaFormat::Spaced, RnaFormat::Compact] {
        assert_eq!(parse_rna(&format_codons(&codons, format)).unwrap(), codons);
    }
}

#[test]
fn j38h_scenario() {
    let rna = encode_to_rna("J38H").unwrap();
    assert_eq!(rna.split_whitespace().count(), 6);
    assert_eq!(decode_from_rna(&rna).unwrap(), "J38H");
}

#[test]
fn xyz_body_is_not_substituted() {
    let err = decode_from_rna("AUG XYZ UAA").unwrap_err();
    assert_eq!(err.kind(), "invalid_base");
    assert!(err.to_string().contains('X'));
}

#[test]
fn empty_message_encodes_but_does_not_decode() {
    let rna = encode_to_rna("").unwrap();
    assert_eq!(rna, "AUG UAA");
    assert_eq!(decode_from_rna(&rna), Err(CodecError::EmptyBody));
}
