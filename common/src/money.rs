//! [`Money`]-related definitions.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use derive_more::{From, Into};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Amount of money in US dollars.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable [`Money`] amount.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Creates a new [`Money`] out of the provided `amount` of dollars.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of dollars of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns a short [`Display`]able form of this [`Money`], like `$1.3M`
    /// or `$550K`.
    ///
    /// [`Display`]: fmt::Display
    #[must_use]
    pub const fn compact(self) -> Compact {
        Compact(self)
    }
}

/// Formats as `$1,250,000` (or `$12.5` when there is a fractional part).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0.normalize();
        if amount.is_sign_negative() && !amount.is_zero() {
            f.write_char('-')?;
        }
        let amount = amount.abs();

        f.write_char('$')?;
        let digits = amount.trunc().normalize().to_string();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(digit)?;
        }

        let fract = amount.fract().normalize();
        if !fract.is_zero() {
            f.write_str(fract.to_string().trim_start_matches('0'))?;
        }
        Ok(())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

/// Short form of a [`Money`] amount, in millions or thousands of dollars.
#[derive(Clone, Copy, Debug)]
pub struct Compact(Money);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let million = Decimal::from(1_000_000_u32);
        let amount = self.0.amount();

        if amount >= million {
            let millions = (amount / million).round_dp_with_strategy(
                1,
                RoundingStrategy::MidpointAwayFromZero,
            );
            write!(f, "${millions:.1}M")
        } else {
            let thousands = (amount / Decimal::ONE_THOUSAND)
                .round_dp_with_strategy(
                    0,
                    RoundingStrategy::MidpointAwayFromZero,
                );
            write!(f, "${thousands:.0}K")
        }
    }
}
