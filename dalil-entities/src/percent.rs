use std::{fmt, str::FromStr};

use thiserror::Error;

/// A whole-numbered percentage within `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Percentage out of range [0, 100]")]
pub struct PercentOutOfRange;

impl Percent {
    pub const MAX: Self = Self(100);

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Percent {
    type Error = PercentOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&from) {
            Ok(Self(from as u8))
        } else {
            Err(PercentOutOfRange)
        }
    }
}

impl TryFrom<u8> for Percent {
    type Error = PercentOutOfRange;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        i64::from(from).try_into()
    }
}

impl From<Percent> for u8 {
    fn from(from: Percent) -> Self {
        from.0
    }
}

impl FromStr for Percent {
    type Err = PercentOutOfRange;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| PercentOutOfRange)?
            .try_into()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
