//! Pitch and interval name validation.
//!
//! Pitch names are written as an uppercase letter, up to two accidentals of
//! the same kind (`#` for sharp, `b` for flat), and an octave number:
//! `"C4"`, `"F#3"`, `"Bbb5"`. Interval names are written as a direction
//! (`+` ascending, `-` descending), a quality code, and a quantity:
//! `"+M9"`, `"-P4"`. Both are case sensitive.

use serde::{Deserialize, Serialize};

use crate::error::Base40Error;

#[cfg(test)]
mod tests;

/// Maximum number of sharps or flats in a pitch name.
pub const MAX_ACCIDENTALS: usize = 2;

/// Diatonic pitch letters, in scale order starting from C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parses an uppercase letter. Lowercase input is rejected.
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Returns the uppercase letter.
    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Returns all letters in scale order.
    pub fn all() -> &'static [Letter] {
        &[
            Letter::C,
            Letter::D,
            Letter::E,
            Letter::F,
            Letter::G,
            Letter::A,
            Letter::B,
        ]
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// `d`
    Diminished,
    /// `m`
    Minor,
    /// `P`
    Perfect,
    /// `M`
    Major,
    /// `A`
    Augmented,
}

impl Quality {
    /// Parses a single-letter quality code.
    pub fn from_code(c: char) -> Option<Quality> {
        match c {
            'd' => Some(Quality::Diminished),
            'm' => Some(Quality::Minor),
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'A' => Some(Quality::Augmented),
            _ => None,
        }
    }

    /// Returns the single-letter quality code.
    pub fn code(&self) -> char {
        match self {
            Quality::Diminished => 'd',
            Quality::Minor => 'm',
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Augmented => 'A',
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Interval direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Parses `+` or `-`.
    pub fn from_sign(c: char) -> Option<Direction> {
        match c {
            '+' => Some(Direction::Ascending),
            '-' => Some(Direction::Descending),
            _ => None,
        }
    }

    /// Returns `+` or `-`.
    pub fn sign(&self) -> char {
        match self {
            Direction::Ascending => '+',
            Direction::Descending => '-',
        }
    }

    /// Direction of a signed base40 interval number; zero is ascending.
    pub fn of(base40: i32) -> Direction {
        if base40 < 0 {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// A syntactically valid pitch name split into its parts.
///
/// `accidentals` is positive for sharps and negative for flats, in
/// `-2..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchSpelling {
    pub letter: Letter,
    pub accidentals: i8,
    pub octave: u32,
}

impl std::fmt::Display for PitchSpelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter)?;
        let symbol = if self.accidentals > 0 { '#' } else { 'b' };
        for _ in 0..self.accidentals.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        write!(f, "{}", self.octave)
    }
}

/// A syntactically valid interval name split into its parts.
///
/// The quality is not yet checked against the quantity; see
/// [`interval_name_to_base40`](crate::codec::interval_name_to_base40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalSpelling {
    pub direction: Direction,
    pub quality: Quality,
    pub quantity: u32,
}

impl std::fmt::Display for IntervalSpelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.direction, self.quality, self.quantity)
    }
}

/// Parse a pitch name into its letter, accidentals, and octave.
///
/// # Examples
/// ```
/// use base40::name::{parse_pitch_name, Letter};
///
/// let spelling = parse_pitch_name("Bbb5").unwrap();
/// assert_eq!(spelling.letter, Letter::B);
/// assert_eq!(spelling.accidentals, -2);
/// assert_eq!(spelling.octave, 5);
/// ```
pub fn parse_pitch_name(name: &str) -> Result<PitchSpelling, Base40Error> {
    let mut chars = name.chars();
    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| Base40Error::pitch_name(name, "must start with a letter A-G"))?;

    let rest = chars.as_str();
    let accidental_len = rest
        .find(|c: char| c != '#' && c != 'b')
        .unwrap_or(rest.len());
    let (accidentals, octave_str) = rest.split_at(accidental_len);

    let sharps = accidentals.matches('#').count();
    let flats = accidentals.matches('b').count();
    if sharps > 0 && flats > 0 {
        return Err(Base40Error::pitch_name(
            name,
            "cannot mix sharps and flats",
        ));
    }
    if sharps > MAX_ACCIDENTALS || flats > MAX_ACCIDENTALS {
        return Err(Base40Error::pitch_name(
            name,
            "accepts a maximum of two accidentals",
        ));
    }

    let octave = parse_unsigned(octave_str)
        .ok_or_else(|| Base40Error::pitch_name(name, "octave must be a non-negative integer"))?;

    Ok(PitchSpelling {
        letter,
        accidentals: sharps as i8 - flats as i8,
        octave,
    })
}

/// Parse an interval name into its direction, quality, and quantity.
///
/// The direction sign is required here; use
/// [`Interval::from_name`](crate::Interval::from_name) or
/// [`interval_name_to_base40`](crate::codec::interval_name_to_base40) to
/// accept names without one.
pub fn parse_interval_name(name: &str) -> Result<IntervalSpelling, Base40Error> {
    let mut chars = name.chars();
    let direction = chars
        .next()
        .and_then(Direction::from_sign)
        .ok_or_else(|| Base40Error::interval_name(name, "must start with '+' or '-'"))?;
    let quality = chars
        .next()
        .and_then(Quality::from_code)
        .ok_or_else(|| {
            Base40Error::interval_name(name, "quality must be one of d, m, P, M, A")
        })?;

    let quantity = parse_unsigned(chars.as_str())
        .filter(|&q| q > 0)
        .ok_or_else(|| Base40Error::interval_name(name, "quantity must be a positive integer"))?;

    Ok(IntervalSpelling {
        direction,
        quality,
        quantity,
    })
}

/// Check that a pitch name is well formed.
///
/// # Examples
/// ```
/// use base40::name::validate_pitch_name;
///
/// assert!(validate_pitch_name("C#4").is_ok());
/// assert!(validate_pitch_name("D").is_err());
/// ```
pub fn validate_pitch_name(name: &str) -> Result<(), Base40Error> {
    parse_pitch_name(name).map(|_| ())
}

/// Check that an interval name is well formed.
///
/// Only syntax is checked: `"+P2"` passes here but has no base40 value.
///
/// # Examples
/// ```
/// use base40::name::validate_interval_name;
///
/// assert!(validate_interval_name("+M9").is_ok());
/// assert!(validate_interval_name("d1").is_err());
/// ```
pub fn validate_interval_name(name: &str) -> Result<(), Base40Error> {
    parse_interval_name(name).map(|_| ())
}

/// Normalize case the way pitch constructors do: first character
/// uppercase, the rest lowercase (`"bB4"` becomes `"Bb4"`).
pub(crate) fn normalize_pitch_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Decimal digits only; signs and whitespace are rejected.
fn parse_unsigned(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
