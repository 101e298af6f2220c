//! Conversion between pitch/interval names and Hewlett base40 numbers.
//!
//! All functions are pure and stateless. Base40 places 40 steps in each
//! octave so that enharmonic spellings (C# and Db) stay distinct, and
//! interval arithmetic becomes plain integer arithmetic:
//!
//! - pitch: `octave * 40 + step`, with C4 = 163 and A4 = 192
//! - interval: signed distance between two pitches, with P5 = 23

mod export;
mod interval;
mod pitch;
mod tables;


pub use export::{
    base40_to_midi, pitch_name_to_lilypond, pitch_name_to_lilypond_with, LilypondOptions,
};
pub use interval::{base40_to_interval_name, interval_name_to_base40};
pub use pitch::{base40_to_pitch_name, letter_to_base40, pitch_name_to_base40};
pub use tables::{
    DIATONIC_STEPS, GAP_STEPS, MIDI_MAX, REFERENCE_OCTAVE, SEMITONES_PER_OCTAVE, STEPS_PER_OCTAVE,
};

pub(crate) use export::render_lilypond;
pub(crate) use interval::with_direction;
