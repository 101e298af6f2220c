//! Property-based tests for base40 conversion using proptest.
//!
//! These tests check round-trip stability of the name <-> number mappings,
//! agreement between MIDI export and the twelve-tone spelling, and that
//! arbitrary input never panics.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p base40 --test properties
//! ```

use proptest::prelude::*;

use base40::name::parse_interval_name;
use base40::{
    base40_to_interval_name, base40_to_midi, base40_to_pitch_name, interval_name_to_base40,
    pitch_name_to_base40, validate_interval_name, validate_pitch_name, Direction, Interval, Pitch,
};

// ============================================================================
// Strategies
// ============================================================================

/// Valid pitch names with 0-2 like accidentals.
fn pitch_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['C', 'D', 'E', 'F', 'G', 'A', 'B']),
        prop::sample::select(vec!["bb", "b", "", "#", "##"]),
        0u32..50,
    )
        .prop_map(|(letter, accidentals, octave)| format!("{}{}{}", letter, accidentals, octave))
}

/// Syntactically valid interval names; some have illegal qualities.
fn interval_name() -> impl Strategy<Value = (String, char, u32)> {
    (
        prop::sample::select(vec!["+", "-", ""]),
        prop::sample::select(vec!['d', 'm', 'P', 'M', 'A']),
        1u32..60,
    )
        .prop_map(|(direction, quality, quantity)| {
            (
                format!("{}{}{}", direction, quality, quantity),
                quality,
                quantity,
            )
        })
}

fn semitone(letter: char) -> i64 {
    match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        _ => 11,
    }
}

// ============================================================================
// 1. Pitch round-trips
// ============================================================================

proptest! {
    /// Every valid pitch name survives name -> number -> name.
    #[test]
    fn pitch_name_roundtrip(name in pitch_name()) {
        let base40 = pitch_name_to_base40(&name).unwrap();
        prop_assert!(base40 > 0);
        prop_assert_eq!(base40_to_pitch_name(base40).unwrap(), name);
    }

    /// Every number that has a pitch name maps back to itself.
    #[test]
    fn pitch_number_roundtrip(n in any::<i32>()) {
        if let Ok(name) = base40_to_pitch_name(n) {
            prop_assert_eq!(pitch_name_to_base40(&name).unwrap(), n);
        } else {
            prop_assert!(base40_to_midi(n).is_err());
        }
    }

    /// MIDI export agrees with the twelve-tone value of the spelling.
    #[test]
    fn midi_matches_spelling(name in pitch_name()) {
        let pitch = Pitch::from_name(&name).unwrap();
        let expected = (i64::from(pitch.octave()) + 1) * 12
            + semitone(pitch.letter().as_char())
            + i64::from(pitch.accidentals());
        let midi = base40_to_midi(pitch.base40()).unwrap();
        if expected <= 127 {
            prop_assert_eq!(midi.map(i64::from), Some(expected));
        } else {
            prop_assert_eq!(midi, None);
        }
    }
}

// ============================================================================
// 2. Interval round-trips
// ============================================================================

proptest! {
    /// Legal interval names keep direction, quality, and quantity.
    #[test]
    fn interval_name_roundtrip((name, quality, quantity) in interval_name()) {
        if let Ok(base40) = interval_name_to_base40(&name) {
            let rendered = base40_to_interval_name(base40).unwrap();
            prop_assert_eq!(interval_name_to_base40(&rendered).unwrap(), base40);

            let spelling = parse_interval_name(&rendered).unwrap();
            prop_assert_eq!(spelling.quality.code(), quality);
            prop_assert_eq!(spelling.quantity, quantity);
            if base40 != 0 {
                let descending = name.starts_with('-');
                prop_assert_eq!(spelling.direction == Direction::Descending, descending);
            }
        }
    }

    /// Every number that has an interval name maps back to itself.
    #[test]
    fn interval_number_roundtrip(n in any::<i32>()) {
        if let Ok(name) = base40_to_interval_name(n) {
            prop_assert_eq!(interval_name_to_base40(&name).unwrap(), n);
        }
    }

    /// Inverting twice returns the original simple interval class.
    #[test]
    fn interval_inversion_is_involutive(n in -400i32..400) {
        if let Ok(interval) = Interval::from_base40(n) {
            let twice = interval.inverted().unwrap().inverted().unwrap();
            prop_assert_eq!(twice.compound().simple, interval.compound().simple);
        }
    }
}

// ============================================================================
// 3. Value types
// ============================================================================

proptest! {
    /// Pitch ordering follows base40 ordering.
    #[test]
    fn pitch_ordering_matches_base40(a in pitch_name(), b in pitch_name()) {
        let p1 = Pitch::from_name(&a).unwrap();
        let p2 = Pitch::from_name(&b).unwrap();
        prop_assert_eq!(p1 < p2, p1.base40() < p2.base40());
        prop_assert_eq!(p1 == p2, p1.base40() == p2.base40());
        prop_assert_eq!(p1.cmp(&p2), p1.base40().cmp(&p2.base40()));
    }

    /// The interval between two pitches leads from the first to the second.
    #[test]
    fn interval_between_transposes_back(a in pitch_name(), b in pitch_name()) {
        let p1 = Pitch::from_name(&a).unwrap();
        let p2 = Pitch::from_name(&b).unwrap();
        if let Ok(interval) = p1.interval(&p2) {
            prop_assert_eq!((&p1 + &interval).unwrap(), p2.clone());
            prop_assert_eq!((&p2 - &interval).unwrap(), p1);
        }
    }
}

// ============================================================================
// 4. Arbitrary input never panics
// ============================================================================

proptest! {
    #[test]
    fn arbitrary_pitch_names_never_panic(s in "\\PC{0,12}") {
        let _ = validate_pitch_name(&s);
        let _ = pitch_name_to_base40(&s);
        let _ = Pitch::from_name(&s);
    }

    #[test]
    fn arbitrary_interval_names_never_panic(s in "\\PC{0,12}") {
        let _ = validate_interval_name(&s);
        let _ = interval_name_to_base40(&s);
        let _ = Interval::from_name(&s);
    }

    #[test]
    fn near_miss_pitch_names_never_panic(s in "[A-Hb#0-9+-]{0,8}") {
        if let Ok(base40) = pitch_name_to_base40(&s) {
            prop_assert!(base40 > 0);
        }
    }
}
