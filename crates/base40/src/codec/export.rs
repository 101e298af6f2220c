//! MIDI and Lilypond views of base40 pitches.

use serde::{Deserialize, Serialize};

use super::pitch::split_pitch;
use super::tables::{MIDI_MAX, MIDI_SLOTS, REFERENCE_OCTAVE, SEMITONES_PER_OCTAVE};
use crate::error::Base40Error;
use crate::name::{parse_pitch_name, PitchSpelling};

/// Options for Lilypond pitch export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LilypondOptions {
    /// Octave written without `'` or `,` marks (Lilypond's `c` is C3).
    pub reference_octave: u32,
}

impl Default for LilypondOptions {
    fn default() -> Self {
        Self {
            reference_octave: REFERENCE_OCTAVE,
        }
    }
}

/// Convert a base40 pitch number to a MIDI note number.
///
/// # Returns
/// `Ok(Some(note))` for notes in `0..=127`, `Ok(None)` when the pitch is
/// above the MIDI range.
///
/// # Errors
/// Returns [`Base40Error::InvalidPitch`] for numbers below 1 and for numbers
/// that fall between two letter blocks.
///
/// # Examples
/// ```
/// use base40::codec::base40_to_midi;
///
/// assert_eq!(base40_to_midi(242).unwrap(), Some(83)); // Cb6
/// assert_eq!(base40_to_midi(192).unwrap(), Some(69)); // A4
/// assert_eq!(base40_to_midi(387).unwrap(), None); // G#9
/// ```
pub fn base40_to_midi(base40: i32) -> Result<Option<u8>, Base40Error> {
    let (octave, step) = split_pitch(base40)?;
    let slot = MIDI_SLOTS[step - 1].ok_or(Base40Error::InvalidPitch {
        value: base40,
        reason: "falls between two letters",
    })?;

    let midi = i64::from(slot) + i64::from(octave) * i64::from(SEMITONES_PER_OCTAVE);
    if midi > i64::from(MIDI_MAX) {
        return Ok(None);
    }
    Ok(u8::try_from(midi).ok())
}

/// Convert a pitch name to a Lilypond pitch string.
///
/// Uses Dutch note names (`is` for sharp, `es` for flat) with octave marks
/// relative to octave 3.
///
/// # Examples
/// ```
/// use base40::codec::pitch_name_to_lilypond;
///
/// assert_eq!(pitch_name_to_lilypond("C4").unwrap(), "c'");
/// assert_eq!(pitch_name_to_lilypond("Gb2").unwrap(), "ges,");
/// assert_eq!(pitch_name_to_lilypond("F##6").unwrap(), "fisis'''");
/// ```
pub fn pitch_name_to_lilypond(name: &str) -> Result<String, Base40Error> {
    pitch_name_to_lilypond_with(name, &LilypondOptions::default())
}

/// Convert a pitch name to a Lilypond pitch string using custom options.
pub fn pitch_name_to_lilypond_with(
    name: &str,
    options: &LilypondOptions,
) -> Result<String, Base40Error> {
    let spelling = parse_pitch_name(name)?;
    Ok(render_lilypond(&spelling, options))
}

pub(crate) fn render_lilypond(spelling: &PitchSpelling, options: &LilypondOptions) -> String {
    let mut out = spelling.letter.as_char().to_ascii_lowercase().to_string();

    let suffix = if spelling.accidentals > 0 { "is" } else { "es" };
    for _ in 0..spelling.accidentals.unsigned_abs() {
        out.push_str(suffix);
    }

    let reference = options.reference_octave;
    let (mark, count) = if spelling.octave >= reference {
        ('\'', spelling.octave - reference)
    } else {
        (',', reference - spelling.octave)
    };
    out.extend(std::iter::repeat(mark).take(count as usize));
    out
}
