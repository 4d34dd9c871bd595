use std::fmt;

use crate::percent::Percent;

/// An amount of money in minor currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// The highest price that can be stored.
    pub const MAX: Self = Self(i64::MAX as u64);

    pub const fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    /// `None` if the amount exceeds [`Price::MAX`].
    pub fn try_from_minor_units(units: u64) -> Option<Self> {
        let price = Self(units);
        (price <= Self::MAX).then_some(price)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// The part of the price that is covered by the given percentage.
    ///
    /// Fractions of minor units are rounded down.
    pub fn percentage(self, percent: Percent) -> Self {
        let part = u128::from(self.0) * u128::from(percent.value()) / 100;
        // At most 100 percent, so the part never exceeds the price.
        Self(part as u64)
    }

    /// The price after subtracting the given percentage.
    pub fn discounted(self, percent: Percent) -> Self {
        Self(self.0 - self.percentage(percent).0)
    }
}

impl From<u64> for Price {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<Price> for u64 {
    fn from(from: Price) -> Self {
        from.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(v: u8) -> Percent {
        Percent::try_from(v).unwrap()
    }

    #[test]
    fn discount_is_rounded_down() {
        let price = Price::from_minor_units(999);
        assert_eq!(Price::from_minor_units(99), price.percentage(percent(10)));
        assert_eq!(Price::from_minor_units(900), price.discounted(percent(10)));
    }

    #[test]
    fn full_and_no_discount() {
        let price = Price::from_minor_units(5000);
        assert_eq!(Price::default(), price.discounted(Percent::MAX));
        assert_eq!(price, price.discounted(Percent::zero()));
    }

    #[test]
    fn discount_huge_prices() {
        let price = Price::MAX;
        assert_eq!(
            Price::from_minor_units(6_917_529_027_641_081_856),
            price.discounted(percent(25))
        );
        let price = Price::from_minor_units(u64::MAX);
        assert_eq!(price, price.percentage(Percent::MAX));
        assert_eq!(Price::default(), price.discounted(Percent::MAX));
    }

    #[test]
    fn reject_prices_that_cannot_be_stored() {
        assert_eq!(Some(Price::MAX), Price::try_from_minor_units(i64::MAX as u64));
        assert!(Price::try_from_minor_units(i64::MAX as u64 + 1).is_none());
        assert_eq!(
            Some(Price::from_minor_units(0)),
            Price::try_from_minor_units(0)
        );
    }

    #[test]
    fn display_major_units() {
        assert_eq!("12.05", Price::from_minor_units(1205).to_string());
    }
}
