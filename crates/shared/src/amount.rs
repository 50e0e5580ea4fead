use std::{fmt, iter::Sum, ops::Add, str::FromStr};

use serde::{Serialize, Serializer};

/// Number of stored units per whole measurement unit.
pub const AMOUNT_SCALE: i64 = 1000;

const AMOUNT_DECIMALS: usize = 3;

/// Fixed-point ingredient quantity, stored as thousandths of the unit.
///
/// Sums stay exact because the database adds integers; the decimal form only
/// appears when the amount is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_milli(milli: i64) -> Self {
        Self(milli)
    }

    pub fn from_units(units: i64) -> Self {
        Self(units * AMOUNT_SCALE)
    }

    pub fn milli(&self) -> i64 {
        self.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = AMOUNT_SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;

        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }

        let digits = format!("{:0width$}", frac, width = AMOUNT_DECIMALS);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("amount '{0}' has more than three decimal places")]
    TooPrecise(String),

    #[error("amount '{0}' must be greater than zero")]
    NotPositive(String),
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(frac) {
            return Err(ParseAmountError::Invalid(s.to_owned()));
        }

        let significant = frac.trim_end_matches('0');
        if significant.len() > AMOUNT_DECIMALS {
            return Err(ParseAmountError::TooPrecise(s.to_owned()));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| ParseAmountError::Invalid(s.to_owned()))?;
        let frac: i64 = if significant.is_empty() {
            0
        } else {
            format!("{:0<width$}", significant, width = AMOUNT_DECIMALS)
                .parse()
                .map_err(|_| ParseAmountError::Invalid(s.to_owned()))?
        };

        let milli = whole
            .checked_mul(AMOUNT_SCALE)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(|| ParseAmountError::Invalid(s.to_owned()))?;

        if negative || milli == 0 {
            return Err(ParseAmountError::NotPositive(s.to_owned()));
        }

        Ok(Amount(milli))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
