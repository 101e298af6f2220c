//! Interval name <-> base40 interval number conversion.

use std::borrow::Cow;

use super::tables::{CLASS_ROOTS, DIATONIC_STEPS, INTERVAL_NAMES, STEPS_PER_OCTAVE};
use crate::error::Base40Error;
use crate::name::{parse_interval_name, Direction, IntervalSpelling, Quality};

/// Convert an interval name (e.g., "+M9", "-P4", "m3") to a base40 interval number.
///
/// A name without a direction sign is treated as ascending.
///
/// # Errors
/// Returns [`Base40Error::InvalidName`] for malformed names and
/// [`Base40Error::IllegalIntervalQuality`] when the quality does not exist
/// for the quantity (e.g., `"+P2"`, `"+d1"`).
///
/// # Examples
/// ```
/// use base40::codec::interval_name_to_base40;
///
/// assert_eq!(interval_name_to_base40("+M9").unwrap(), 46);
/// assert_eq!(interval_name_to_base40("P5").unwrap(), 23);
/// assert_eq!(interval_name_to_base40("-m3").unwrap(), -11);
/// ```
pub fn interval_name_to_base40(name: &str) -> Result<i32, Base40Error> {
    parse_interval_name(&with_direction(name))?.to_base40()
}

/// Convert a base40 interval number to its interval name.
///
/// Compound intervals keep their full quantity: 46 is a major ninth, not a
/// major second plus an octave.
///
/// # Examples
/// ```
/// use base40::codec::base40_to_interval_name;
///
/// assert_eq!(base40_to_interval_name(46).unwrap(), "+M9");
/// assert_eq!(base40_to_interval_name(-17).unwrap(), "-P4");
/// assert!(base40_to_interval_name(2).is_err());
/// ```
pub fn base40_to_interval_name(base40: i32) -> Result<String, Base40Error> {
    IntervalSpelling::from_base40(base40).map(|spelling| spelling.to_string())
}

/// Prefix `+` when the name carries no direction.
pub(crate) fn with_direction(name: &str) -> Cow<'_, str> {
    if name.starts_with(['+', '-']) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("+{}", name))
    }
}

impl IntervalSpelling {
    /// Signed base40 interval number for this spelling.
    pub fn to_base40(&self) -> Result<i32, Base40Error> {
        let illegal = || Base40Error::IllegalIntervalQuality {
            quality: self.quality,
            quantity: self.quantity,
        };

        let Some(steps) = self.quantity.checked_sub(1) else {
            return Err(Base40Error::interval_name(
                &self.to_string(),
                "quantity must be a positive integer",
            ));
        };
        let octaves = steps / DIATONIC_STEPS;
        let class = (steps % DIATONIC_STEPS) as usize;

        let simple = match class {
            // Unison and octave. A diminished octave sits one step below
            // the octave, so it needs at least one octave to stand on.
            0 => match self.quality {
                Quality::Perfect => 0,
                Quality::Augmented => 1,
                Quality::Diminished if octaves > 0 => -1,
                _ => return Err(illegal()),
            },
            // Fourth and fifth.
            3 | 4 => {
                CLASS_ROOTS[class]
                    + match self.quality {
                        Quality::Diminished => 0,
                        Quality::Perfect => 1,
                        Quality::Augmented => 2,
                        Quality::Minor | Quality::Major => return Err(illegal()),
                    }
            }
            // Second, third, sixth, seventh.
            _ => {
                CLASS_ROOTS[class]
                    + match self.quality {
                        Quality::Diminished => 0,
                        Quality::Minor => 1,
                        Quality::Major => 2,
                        Quality::Augmented => 3,
                        Quality::Perfect => return Err(illegal()),
                    }
            }
        };

        let magnitude = i32::try_from(octaves)
            .ok()
            .and_then(|octaves| octaves.checked_mul(STEPS_PER_OCTAVE))
            .and_then(|offset| offset.checked_add(simple))
            .ok_or(Base40Error::Overflow {
                operation: "interval quantity",
            })?;

        Ok(match self.direction {
            Direction::Ascending => magnitude,
            Direction::Descending => -magnitude,
        })
    }

    /// Spelling of a signed base40 interval number.
    pub fn from_base40(base40: i32) -> Result<Self, Base40Error> {
        let magnitude = base40.unsigned_abs();
        let octaves = magnitude / STEPS_PER_OCTAVE as u32;
        let class = (magnitude % STEPS_PER_OCTAVE as u32) as usize;

        let (quality, simple_quantity) =
            INTERVAL_NAMES[class].ok_or(Base40Error::InvalidInterval { value: base40 })?;

        let quantity = octaves
            .checked_mul(DIATONIC_STEPS)
            .and_then(|q| q.checked_add(simple_quantity))
            .ok_or(Base40Error::Overflow {
                operation: "interval quantity",
            })?;

        Ok(Self {
            direction: Direction::of(base40),
            quality,
            quantity,
        })
    }
}
