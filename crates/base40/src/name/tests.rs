//! Tests for pitch and interval name validation.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::NameKind;

#[test]
fn test_validate_pitch_name_accepts_well_formed() {
    for name in ["C4", "C#4", "Db4", "Bbb0", "F##12", "A0", "G10"] {
        assert!(validate_pitch_name(name).is_ok(), "expected valid: {}", name);
    }
}

#[test]
fn test_validate_pitch_name_missing_octave() {
    let err = validate_pitch_name("D").unwrap_err();
    assert_eq!(
        err,
        Base40Error::InvalidName {
            kind: NameKind::Pitch,
            name: "D".to_string(),
            reason: "octave must be a non-negative integer",
        }
    );
}

#[test]
fn test_validate_pitch_name_rejects_bad_letter() {
    assert!(validate_pitch_name("H4").is_err());
    assert!(validate_pitch_name("c4").is_err()); // case sensitive
    assert!(validate_pitch_name("").is_err());
    assert!(validate_pitch_name("#4").is_err());
}

#[test]
fn test_validate_pitch_name_accidental_limits() {
    let err = validate_pitch_name("C###4").unwrap_err();
    assert!(err.to_string().contains("maximum of two accidentals"));

    let err = validate_pitch_name("Ebbb4").unwrap_err();
    assert!(err.to_string().contains("maximum of two accidentals"));

    let err = validate_pitch_name("C#b4").unwrap_err();
    assert!(err.to_string().contains("cannot mix"));
}

#[test]
fn test_validate_pitch_name_rejects_bad_octave() {
    assert!(validate_pitch_name("C-1").is_err());
    assert!(validate_pitch_name("C+4").is_err());
    assert!(validate_pitch_name("C4#").is_err());
    assert!(validate_pitch_name("C 4").is_err());
    assert!(validate_pitch_name("C99999999999").is_err());
}

#[test]
fn test_parse_pitch_name_components() {
    assert_eq!(
        parse_pitch_name("F##3").unwrap(),
        PitchSpelling {
            letter: Letter::F,
            accidentals: 2,
            octave: 3,
        }
    );
    assert_eq!(
        parse_pitch_name("Cb6").unwrap(),
        PitchSpelling {
            letter: Letter::C,
            accidentals: -1,
            octave: 6,
        }
    );
}

#[test]
fn test_pitch_spelling_display() {
    for name in ["C4", "C##4", "Bbb0", "Eb10"] {
        assert_eq!(parse_pitch_name(name).unwrap().to_string(), name);
    }
}

#[test]
fn test_validate_interval_name_accepts_well_formed() {
    for name in ["+M9", "-P4", "+d8", "-A1", "+m3", "+P2"] {
        assert!(
            validate_interval_name(name).is_ok(),
            "expected valid: {}",
            name
        );
    }
}

#[test]
fn test_validate_interval_name_requires_direction() {
    let err = validate_interval_name("d1").unwrap_err();
    assert_eq!(
        err,
        Base40Error::InvalidName {
            kind: NameKind::Interval,
            name: "d1".to_string(),
            reason: "must start with '+' or '-'",
        }
    );
}

#[test]
fn test_validate_interval_name_rejects_bad_quality_and_quantity() {
    assert!(validate_interval_name("+X3").is_err());
    assert!(validate_interval_name("+p5").is_err());
    assert!(validate_interval_name("+M").is_err());
    assert!(validate_interval_name("+M0").is_err());
    assert!(validate_interval_name("+M-3").is_err());
    assert!(validate_interval_name("+").is_err());
    assert!(validate_interval_name("").is_err());
}

#[test]
fn test_parse_interval_name_components() {
    assert_eq!(
        parse_interval_name("-M16").unwrap(),
        IntervalSpelling {
            direction: Direction::Descending,
            quality: Quality::Major,
            quantity: 16,
        }
    );
    assert_eq!(parse_interval_name("-M16").unwrap().to_string(), "-M16");
}

#[test]
fn test_letter_and_quality_codes() {
    for letter in Letter::all() {
        assert_eq!(Letter::from_char(letter.as_char()), Some(*letter));
    }
    for code in ['d', 'm', 'P', 'M', 'A'] {
        assert_eq!(Quality::from_code(code).map(|q| q.code()), Some(code));
    }
    assert_eq!(Direction::of(-1), Direction::Descending);
    assert_eq!(Direction::of(0), Direction::Ascending);
}

#[test]
fn test_normalize_pitch_case() {
    assert_eq!(normalize_pitch_case("c#4"), "C#4");
    assert_eq!(normalize_pitch_case("BB4"), "Bb4");
    assert_eq!(normalize_pitch_case("eBB2"), "Ebb2");
    assert_eq!(normalize_pitch_case(""), "");
}
