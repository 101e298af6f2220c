//! Base40 - Hewlett's Base40 Pitch and Interval Encoding
//!
//! This crate converts between human-readable pitch and interval names and
//! Walter Hewlett's base40 integers. Base40 gives each octave 40 steps so
//! that diatonic arithmetic (transposition, inversion, the interval between
//! two pitches) becomes integer arithmetic while keeping enharmonic spelling:
//! C#4 and Db4 are different numbers.
//!
//! # Example
//!
//! ```
//! use base40::{Interval, Pitch};
//!
//! let c4 = Pitch::from_name("C4").unwrap();
//! let eb4 = Pitch::from_name("Eb4").unwrap();
//!
//! let third = c4.interval(&eb4).unwrap();
//! assert_eq!(third.name(), "+m3");
//! assert_eq!(third.base40(), 11);
//!
//! let g4 = (&eb4 + &Interval::from_name("M3").unwrap()).unwrap();
//! assert_eq!(g4.name(), "G4");
//! assert_eq!(g4.midi(), Some(67));
//! assert_eq!(g4.lilypond(), "g'");
//! ```
//!
//! # Module Structure
//!
//! - [`name`]: Pitch and interval name validation
//! - [`codec`]: Name/number conversion, MIDI and Lilypond export
//! - [`Pitch`]: Pitch value type
//! - [`Interval`]: Interval value type
//! - [`error`]: Error taxonomy

pub mod codec;
pub mod error;
pub mod interval;
pub mod name;
pub mod pitch;

// Re-export main types
pub use codec::{
    base40_to_interval_name, base40_to_midi, base40_to_pitch_name, interval_name_to_base40,
    letter_to_base40, pitch_name_to_base40, pitch_name_to_lilypond, LilypondOptions,
};
pub use error::{Base40Error, NameKind};
pub use interval::{CompoundInterval, Interval};
pub use name::{validate_interval_name, validate_pitch_name, Direction, Letter, Quality};
pub use pitch::Pitch;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
