//! Base40 pitch value type.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::codec::{base40_to_midi, render_lilypond, LilypondOptions};
use crate::error::Base40Error;
use crate::interval::Interval;
use crate::name::{normalize_pitch_case, parse_pitch_name, Letter, PitchSpelling};

/// A pitch in Hewlett's base40 numbering system.
///
/// A `Pitch` always holds a name and a base40 number that agree; there is
/// no way to change one without the other. Replacement values come from
/// [`Pitch::with_name`] and [`Pitch::with_base40`].
///
/// Equality and ordering compare base40 numbers only.
///
/// # Examples
/// ```
/// use base40::{Interval, Pitch};
///
/// let c4 = Pitch::from_name("C4").unwrap();
/// assert_eq!(c4.base40(), 163);
/// assert_eq!(c4.midi(), Some(60));
///
/// let g4 = (&c4 + &Interval::from_name("P5").unwrap()).unwrap();
/// assert_eq!(g4.name(), "G4");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    name: String,
    base40: i32,
    spelling: PitchSpelling,
}

impl Pitch {
    /// Create a pitch from its name.
    ///
    /// Surrounding whitespace is ignored and case is normalized first
    /// (`"cb4"` and `"CB4"` both read as `"Cb4"`).
    pub fn from_name(name: &str) -> Result<Self, Base40Error> {
        let normalized = normalize_pitch_case(name.trim());
        Self::from_spelling(parse_pitch_name(&normalized)?)
    }

    /// Create a pitch from a base40 pitch number.
    ///
    /// # Examples
    /// ```
    /// use base40::Pitch;
    ///
    /// assert_eq!(Pitch::from_base40(140).unwrap().name(), "F3");
    /// assert!(Pitch::from_base40(0).is_err());
    /// ```
    pub fn from_base40(base40: i32) -> Result<Self, Base40Error> {
        let spelling = PitchSpelling::from_base40(base40)?;
        Ok(Self {
            name: spelling.to_string(),
            base40,
            spelling,
        })
    }

    /// Create a pitch from a parsed spelling.
    pub fn from_spelling(spelling: PitchSpelling) -> Result<Self, Base40Error> {
        let base40 = spelling.to_base40()?;
        Ok(Self {
            name: spelling.to_string(),
            base40,
            spelling,
        })
    }

    /// A new pitch with the given name.
    pub fn with_name(&self, name: &str) -> Result<Self, Base40Error> {
        Self::from_name(name)
    }

    /// A new pitch with the given base40 number.
    pub fn with_base40(&self, base40: i32) -> Result<Self, Base40Error> {
        Self::from_base40(base40)
    }

    /// Canonical pitch name (e.g., `"Cb4"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base40 pitch number.
    pub fn base40(&self) -> i32 {
        self.base40
    }

    pub fn spelling(&self) -> PitchSpelling {
        self.spelling
    }

    pub fn letter(&self) -> Letter {
        self.spelling.letter
    }

    /// Sharps (positive) or flats (negative).
    pub fn accidentals(&self) -> i8 {
        self.spelling.accidentals
    }

    pub fn octave(&self) -> u32 {
        self.spelling.octave
    }

    /// MIDI note number, or `None` above MIDI note 127.
    pub fn midi(&self) -> Option<u8> {
        // A constructed pitch is never on a gap, so only the range can fail.
        base40_to_midi(self.base40).ok().flatten()
    }

    /// Lilypond pitch string (e.g., `"ces,"` for Cb2).
    pub fn lilypond(&self) -> String {
        self.lilypond_with(&LilypondOptions::default())
    }

    pub fn lilypond_with(&self, options: &LilypondOptions) -> String {
        render_lilypond(&self.spelling, options)
    }

    /// Signed interval from this pitch to `other`.
    ///
    /// # Examples
    /// ```
    /// use base40::Pitch;
    ///
    /// let c4 = Pitch::from_name("C4").unwrap();
    /// let eb4 = Pitch::from_name("Eb4").unwrap();
    /// assert_eq!(c4.interval(&eb4).unwrap().name(), "+m3");
    /// assert_eq!(eb4.interval(&c4).unwrap().name(), "-m3");
    /// ```
    pub fn interval(&self, other: &Pitch) -> Result<Interval, Base40Error> {
        Interval::between(self, other)
    }

    /// Reflect this pitch around `index`.
    ///
    /// # Examples
    /// ```
    /// use base40::Pitch;
    ///
    /// let c4 = Pitch::from_name("C4").unwrap();
    /// let c5 = Pitch::from_name("C5").unwrap();
    /// assert_eq!(c4.inverted(&c5).unwrap().name(), "C6");
    /// ```
    pub fn inverted(&self, index: &Pitch) -> Result<Pitch, Base40Error> {
        index.transpose_up(&self.interval(index)?)
    }

    /// The pitch `interval` above this one. Descending intervals move down.
    pub fn transpose_up(&self, interval: &Interval) -> Result<Pitch, Base40Error> {
        let base40 = self
            .base40
            .checked_add(interval.base40())
            .ok_or(Base40Error::Overflow {
                operation: "pitch + interval",
            })?;
        Self::from_base40(base40)
    }

    /// The pitch `interval` below this one. Descending intervals move up.
    pub fn transpose_down(&self, interval: &Interval) -> Result<Pitch, Base40Error> {
        let base40 = self
            .base40
            .checked_sub(interval.base40())
            .ok_or(Base40Error::Overflow {
                operation: "pitch - interval",
            })?;
        Self::from_base40(base40)
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.base40 == other.base40
    }
}

impl Eq for Pitch {}

impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base40.hash(state);
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base40.cmp(&other.base40)
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Pitch {
    type Err = Base40Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i32> for Pitch {
    type Error = Base40Error;

    fn try_from(base40: i32) -> Result<Self, Self::Error> {
        Self::from_base40(base40)
    }
}

impl TryFrom<&str> for Pitch {
    type Error = Base40Error;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

impl TryFrom<String> for Pitch {
    type Error = Base40Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.name
    }
}

impl Add<&Interval> for &Pitch {
    type Output = Result<Pitch, Base40Error>;

    fn add(self, interval: &Interval) -> Self::Output {
        self.transpose_up(interval)
    }
}

impl Add<Interval> for Pitch {
    type Output = Result<Pitch, Base40Error>;

    fn add(self, interval: Interval) -> Self::Output {
        self.transpose_up(&interval)
    }
}

impl Sub<&Interval> for &Pitch {
    type Output = Result<Pitch, Base40Error>;

    fn sub(self, interval: &Interval) -> Self::Output {
        self.transpose_down(interval)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Result<Pitch, Base40Error>;

    fn sub(self, interval: Interval) -> Self::Output {
        self.transpose_down(&interval)
    }
}
