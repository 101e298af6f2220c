//! Pitch name <-> base40 pitch number conversion.

use super::tables::{anchor, PITCH_SLOTS, STEPS_PER_OCTAVE};
use crate::error::Base40Error;
use crate::name::{parse_pitch_name, Letter, PitchSpelling, MAX_ACCIDENTALS};

/// Convert a natural pitch letter to its base40 step within an octave.
///
/// # Examples
/// ```
/// use base40::codec::letter_to_base40;
///
/// assert_eq!(letter_to_base40('F').unwrap(), 20);
/// assert!(letter_to_base40('H').is_err());
/// ```
pub fn letter_to_base40(letter: char) -> Result<i32, Base40Error> {
    Letter::from_char(letter)
        .map(anchor)
        .ok_or(Base40Error::InvalidLetter { letter })
}

/// Convert a pitch name (e.g., "C4", "F#3", "Cb6") to a base40 pitch number.
///
/// # Examples
/// ```
/// use base40::codec::pitch_name_to_base40;
///
/// assert_eq!(pitch_name_to_base40("Cb6").unwrap(), 242);
/// assert_eq!(pitch_name_to_base40("A4").unwrap(), 192);
/// ```
pub fn pitch_name_to_base40(name: &str) -> Result<i32, Base40Error> {
    parse_pitch_name(name)?.to_base40()
}

/// Convert a base40 pitch number to its pitch name.
///
/// # Errors
/// Returns [`Base40Error::InvalidPitch`] for numbers below 1 and for numbers
/// that fall between two letter blocks.
///
/// # Examples
/// ```
/// use base40::codec::base40_to_pitch_name;
///
/// assert_eq!(base40_to_pitch_name(242).unwrap(), "Cb6");
/// assert!(base40_to_pitch_name(0).is_err());
/// assert!(base40_to_pitch_name(6).is_err());
/// ```
pub fn base40_to_pitch_name(base40: i32) -> Result<String, Base40Error> {
    PitchSpelling::from_base40(base40).map(|spelling| spelling.to_string())
}

/// Split a base40 pitch number into its octave and 1-based step.
pub(crate) fn split_pitch(base40: i32) -> Result<(u32, usize), Base40Error> {
    if base40 < 1 {
        return Err(Base40Error::InvalidPitch {
            value: base40,
            reason: "must be greater than 0",
        });
    }
    let zero_based = base40 - 1;
    let octave = (zero_based / STEPS_PER_OCTAVE) as u32;
    let step = (zero_based % STEPS_PER_OCTAVE) as usize + 1;
    Ok((octave, step))
}

impl PitchSpelling {
    /// Base40 pitch number for this spelling.
    pub fn to_base40(&self) -> Result<i32, Base40Error> {
        if usize::from(self.accidentals.unsigned_abs()) > MAX_ACCIDENTALS {
            return Err(Base40Error::pitch_name(
                &self.to_string(),
                "accepts a maximum of two accidentals",
            ));
        }
        let overflow = Base40Error::Overflow {
            operation: "pitch octave",
        };
        let octave_offset = i32::try_from(self.octave)
            .ok()
            .and_then(|octave| octave.checked_mul(STEPS_PER_OCTAVE))
            .ok_or(overflow.clone())?;
        (anchor(self.letter) + i32::from(self.accidentals))
            .checked_add(octave_offset)
            .ok_or(overflow)
    }

    /// Spelling of a base40 pitch number.
    pub fn from_base40(base40: i32) -> Result<Self, Base40Error> {
        let (octave, step) = split_pitch(base40)?;
        let letter = PITCH_SLOTS[step - 1].ok_or(Base40Error::InvalidPitch {
            value: base40,
            reason: "falls between two letters",
        })?;
        Ok(Self {
            letter,
            accidentals: (step as i32 - anchor(letter)) as i8,
            octave,
        })
    }
}
