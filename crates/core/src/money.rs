//! Monetary amounts in the smallest currency unit.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Amount in the smallest currency unit (e.g. cents).
///
/// Signed so returns and credit notes can carry negative totals without a
/// separate sign channel. All document totals in the system flow through this
/// type; only a display layer converts to major units.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Major-unit portion (truncated toward zero).
    pub const fn major(self) -> i64 {
        self.0 / 100
    }

    /// Minor-unit portion, always `0..=99`.
    pub const fn minor(self) -> i64 {
        (self.0 % 100).abs()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, qty: i64) -> Money {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_minor_digits() {
        assert_eq!(Money::from_cents(199_985).to_string(), "1999.85");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn arithmetic_stays_in_cents() {
        let a = Money::from_cents(1_000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1_250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((b * 4).cents(), 1_000);
    }

    #[test]
    fn sums_over_iterators() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Money::from_cents(4999)).unwrap();
        assert_eq!(json, "4999");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(4999));
    }
}
