//! Fixed lookup tables for the base40 encoding.
//!
//! A base40 octave has 40 steps. Each letter owns five consecutive steps
//! (double flat through double sharp). Letters a whole tone apart are
//! separated by one empty step; letters a semitone apart (E-F, B-C) are not.

use crate::name::{Letter, Quality};

/// Number of base40 steps in one octave.
pub const STEPS_PER_OCTAVE: i32 = 40;

/// Number of MIDI semitones in one octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Number of diatonic steps in one octave.
pub const DIATONIC_STEPS: u32 = 7;

/// Octave that carries no octave marks in Lilypond output.
pub const REFERENCE_OCTAVE: u32 = 3;

/// Largest valid MIDI note number.
pub const MIDI_MAX: i32 = 127;

/// 1-based steps that hold no pitch: the slots between C-D, D-E, F-G, G-A,
/// and A-B.
pub const GAP_STEPS: [u8; 5] = [6, 12, 23, 29, 35];

/// Step of each natural letter within its octave (C=3, D=9, E=15, ...).
pub(crate) const LETTER_ANCHORS: [(Letter, i32); 7] = [
    (Letter::C, 3),
    (Letter::D, 9),
    (Letter::E, 15),
    (Letter::F, 20),
    (Letter::G, 26),
    (Letter::A, 32),
    (Letter::B, 38),
];

/// Letter owning each step, indexed by `step - 1`.
pub(crate) const PITCH_SLOTS: [Option<Letter>; 40] = [
    // C: Cbb..C##
    Some(Letter::C),
    Some(Letter::C),
    Some(Letter::C),
    Some(Letter::C),
    Some(Letter::C),
    None,
    // D
    Some(Letter::D),
    Some(Letter::D),
    Some(Letter::D),
    Some(Letter::D),
    Some(Letter::D),
    None,
    // E
    Some(Letter::E),
    Some(Letter::E),
    Some(Letter::E),
    Some(Letter::E),
    Some(Letter::E),
    // F
    Some(Letter::F),
    Some(Letter::F),
    Some(Letter::F),
    Some(Letter::F),
    Some(Letter::F),
    None,
    // G
    Some(Letter::G),
    Some(Letter::G),
    Some(Letter::G),
    Some(Letter::G),
    Some(Letter::G),
    None,
    // A
    Some(Letter::A),
    Some(Letter::A),
    Some(Letter::A),
    Some(Letter::A),
    Some(Letter::A),
    None,
    // B
    Some(Letter::B),
    Some(Letter::B),
    Some(Letter::B),
    Some(Letter::B),
    Some(Letter::B),
];

/// MIDI note of each step in octave 0, indexed by `step - 1`.
///
/// Each letter block starts at its double-flat (C=10, D=12, E=14, F=15,
/// G=17, A=19, B=21) so that C0 maps to MIDI 12.
pub(crate) const MIDI_SLOTS: [Option<u8>; 40] = [
    Some(10),
    Some(11),
    Some(12),
    Some(13),
    Some(14),
    None,
    Some(12),
    Some(13),
    Some(14),
    Some(15),
    Some(16),
    None,
    Some(14),
    Some(15),
    Some(16),
    Some(17),
    Some(18),
    Some(15),
    Some(16),
    Some(17),
    Some(18),
    Some(19),
    None,
    Some(17),
    Some(18),
    Some(19),
    Some(20),
    Some(21),
    None,
    Some(19),
    Some(20),
    Some(21),
    Some(22),
    Some(23),
    None,
    Some(21),
    Some(22),
    Some(23),
    Some(24),
    Some(25),
];

/// Quality and simple quantity of each base40 interval class `0..40`.
///
/// Doubly diminished and doubly augmented classes are left empty.
pub(crate) const INTERVAL_NAMES: [Option<(Quality, u32)>; 40] = [
    Some((Quality::Perfect, 1)),
    Some((Quality::Augmented, 1)),
    None,
    None,
    Some((Quality::Diminished, 2)),
    Some((Quality::Minor, 2)),
    Some((Quality::Major, 2)),
    Some((Quality::Augmented, 2)),
    None,
    None,
    Some((Quality::Diminished, 3)),
    Some((Quality::Minor, 3)),
    Some((Quality::Major, 3)),
    Some((Quality::Augmented, 3)),
    None,
    None,
    Some((Quality::Diminished, 4)),
    Some((Quality::Perfect, 4)),
    Some((Quality::Augmented, 4)),
    None,
    None,
    None,
    Some((Quality::Diminished, 5)),
    Some((Quality::Perfect, 5)),
    Some((Quality::Augmented, 5)),
    None,
    None,
    Some((Quality::Diminished, 6)),
    Some((Quality::Minor, 6)),
    Some((Quality::Major, 6)),
    Some((Quality::Augmented, 6)),
    None,
    None,
    Some((Quality::Diminished, 7)),
    Some((Quality::Minor, 7)),
    Some((Quality::Major, 7)),
    Some((Quality::Augmented, 7)),
    None,
    None,
    Some((Quality::Diminished, 8)),
];

/// Base40 value of the diminished form of each diatonic class, indexed by
/// `(quantity - 1) % 7`. The unison class is handled separately.
pub(crate) const CLASS_ROOTS: [i32; 7] = [0, 4, 10, 16, 22, 27, 33];

/// Step of a natural letter within its octave.
pub(crate) fn anchor(letter: Letter) -> i32 {
    // LETTER_ANCHORS follows the declaration order of `Letter`.
    LETTER_ANCHORS[letter as usize].1
}
