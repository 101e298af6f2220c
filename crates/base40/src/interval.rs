//! Base40 interval value type.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::codec::{with_direction, STEPS_PER_OCTAVE};
use crate::error::Base40Error;
use crate::name::{parse_interval_name, Direction, IntervalSpelling, Quality};
use crate::pitch::Pitch;

/// An interval split into whole octaves and a simple base40 class.
///
/// Both parts describe the magnitude; the direction is reported by
/// [`Interval::direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundInterval {
    pub octaves: u32,
    /// Simple interval class in `0..40`.
    pub simple: u32,
}

impl CompoundInterval {
    fn of(base40: i32) -> Self {
        let magnitude = base40.unsigned_abs();
        let steps = STEPS_PER_OCTAVE as u32;
        Self {
            octaves: magnitude / steps,
            simple: magnitude % steps,
        }
    }
}

/// A signed interval in Hewlett's base40 numbering system.
///
/// Name, base40 number, and compound split always agree. The name is
/// canonical and always carries a direction sign, so `Interval::from_name("m3")`
/// has the name `"+m3"`.
///
/// Equality and ordering compare base40 numbers only.
///
/// # Examples
/// ```
/// use base40::Interval;
///
/// let m3 = Interval::from_name("m3").unwrap();
/// let maj3 = Interval::from_name("+M3").unwrap();
/// assert_eq!((m3 + maj3).unwrap().name(), "+P5");
///
/// let fifth = Interval::from_base40(23).unwrap();
/// assert_eq!(fifth.inverted().unwrap().name(), "-P4");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    name: String,
    base40: i32,
    spelling: IntervalSpelling,
    compound: CompoundInterval,
}

impl Interval {
    /// Create an interval from its name. A missing sign means ascending.
    pub fn from_name(name: &str) -> Result<Self, Base40Error> {
        let spelling = parse_interval_name(&with_direction(name.trim()))?;
        Self::from_base40(spelling.to_base40()?)
    }

    /// Create an interval from a signed base40 interval number.
    ///
    /// # Examples
    /// ```
    /// use base40::Interval;
    ///
    /// assert_eq!(Interval::from_base40(-11).unwrap().name(), "-m3");
    /// assert!(Interval::from_base40(2).is_err());
    /// ```
    pub fn from_base40(base40: i32) -> Result<Self, Base40Error> {
        let spelling = IntervalSpelling::from_base40(base40)?;
        Ok(Self {
            name: spelling.to_string(),
            base40,
            spelling,
            compound: CompoundInterval::of(base40),
        })
    }

    /// The interval from `from` to `to`; ascending when `to` is higher.
    pub fn between(from: &Pitch, to: &Pitch) -> Result<Self, Base40Error> {
        // Pitch numbers are positive, so the difference cannot overflow.
        Self::from_base40(to.base40() - from.base40())
    }

    /// A new interval with the given name.
    pub fn with_name(&self, name: &str) -> Result<Self, Base40Error> {
        Self::from_name(name)
    }

    /// A new interval with the given base40 number.
    pub fn with_base40(&self, base40: i32) -> Result<Self, Base40Error> {
        Self::from_base40(base40)
    }

    /// Canonical interval name (e.g., `"+M9"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed base40 interval number.
    pub fn base40(&self) -> i32 {
        self.base40
    }

    pub fn spelling(&self) -> IntervalSpelling {
        self.spelling
    }

    pub fn direction(&self) -> Direction {
        self.spelling.direction
    }

    pub fn quality(&self) -> Quality {
        self.spelling.quality
    }

    /// Diatonic quantity, counting compound octaves (a ninth is 9).
    pub fn quantity(&self) -> u32 {
        self.spelling.quantity
    }

    /// Octave and simple-class split of the magnitude.
    ///
    /// # Examples
    /// ```
    /// use base40::{CompoundInterval, Interval};
    ///
    /// let ninth = Interval::from_name("+M9").unwrap();
    /// assert_eq!(ninth.compound(), CompoundInterval { octaves: 1, simple: 6 });
    /// ```
    pub fn compound(&self) -> CompoundInterval {
        self.compound
    }

    /// The complementary interval, pointing the other way.
    ///
    /// The simple part is complemented within the octave and the octaves are
    /// kept, so an ascending fifth becomes a descending fourth and an
    /// ascending major ninth becomes a descending minor fourteenth.
    pub fn inverted(&self) -> Result<Interval, Base40Error> {
        let CompoundInterval { octaves, simple } = self.compound;
        let magnitude = octaves
            .checked_add(1)
            .and_then(|o| o.checked_mul(STEPS_PER_OCTAVE as u32))
            .map(|m| m - simple)
            .and_then(|m| i32::try_from(m).ok())
            .ok_or(Base40Error::Overflow {
                operation: "interval inversion",
            })?;
        if self.base40 < 0 {
            Self::from_base40(magnitude)
        } else {
            Self::from_base40(-magnitude)
        }
    }

    /// The same interval in the opposite direction.
    pub fn reversed(&self) -> Interval {
        // i32::MIN falls on an empty class, so it never reaches here.
        let spelling = IntervalSpelling {
            direction: Direction::of(-self.base40),
            ..self.spelling
        };
        Self {
            name: spelling.to_string(),
            base40: -self.base40,
            spelling,
            compound: self.compound,
        }
    }

    fn combine(
        &self,
        other: &Interval,
        op: fn(i32, i32) -> Option<i32>,
        operation: &'static str,
    ) -> Result<Interval, Base40Error> {
        let base40 = op(self.base40, other.base40).ok_or(Base40Error::Overflow { operation })?;
        Self::from_base40(base40)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.base40 == other.base40
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base40.hash(state);
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base40.cmp(&other.base40)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Interval {
    type Err = Base40Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i32> for Interval {
    type Error = Base40Error;

    fn try_from(base40: i32) -> Result<Self, Self::Error> {
        Self::from_base40(base40)
    }
}

impl TryFrom<&str> for Interval {
    type Error = Base40Error;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

impl TryFrom<String> for Interval {
    type Error = Base40Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.name
    }
}

impl Add<&Interval> for &Interval {
    type Output = Result<Interval, Base40Error>;

    fn add(self, other: &Interval) -> Self::Output {
        self.combine(other, i32::checked_add, "interval + interval")
    }
}

impl Add for Interval {
    type Output = Result<Interval, Base40Error>;

    fn add(self, other: Interval) -> Self::Output {
        &self + &other
    }
}

impl Sub<&Interval> for &Interval {
    type Output = Result<Interval, Base40Error>;

    fn sub(self, other: &Interval) -> Self::Output {
        self.combine(other, i32::checked_sub, "interval - interval")
    }
}

impl Sub for Interval {
    type Output = Result<Interval, Base40Error>;

    fn sub(self, other: Interval) -> Self::Output {
        &self - &other
    }
}

impl Neg for &Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        self.reversed()
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        self.reversed()
    }
}
