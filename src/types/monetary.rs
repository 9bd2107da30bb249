use crate::types::errors::MonetaryError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A monetary value. Arithmetic is exact; rounding to cents only happens
/// where a caller asks for it through [`Monetary::rounded`] or [`Monetary::share`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Monetary(Decimal::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to cents, half away from zero.
    pub fn rounded(self) -> Monetary {
        Monetary(self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }

    /// The portion of this value covered by `proportion`, rounded to cents.
    pub fn share(self, proportion: Decimal) -> Result<Monetary, MonetaryError> {
        self.0.checked_mul(proportion)
            .map(|value| Monetary(value).rounded())
            .ok_or(MonetaryError::Overflow)
    }

    /// Reads an amount the way exports carry it: a JSON number or a numeric string.
    /// Anything else, `null` included, is not an amount.
    pub fn from_json(value: &Value) -> Option<Monetary> {
        match value {
            Value::Number(number) => parse_decimal(&number.to_string()),
            Value::String(text) => parse_decimal(text.trim()),
            _ => None
        }.map(Monetary)
    }

    /// JSON form of the amount: an integer when there is no fractional part,
    /// otherwise a float. Values a float cannot hold fall back to a numeric string.
    pub fn to_json(self) -> Value {
        let value = self.0.normalize();

        if value.scale() == 0 {
            if let Some(integer) = value.to_i64() {
                return Value::from(integer);
            }
        }

        value.to_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.to_string()))
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl Sum for Monetary {
    fn sum<I: Iterator<Item = Monetary>>(iter: I) -> Self {
        Monetary(iter.map(|value| value.0).sum())
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.width$}", self.rounded().0, width = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Monetary(Decimal::from_str(value.trim())?))
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        //NOTE: Datasets exported from the API carry amounts as JSON numbers or as numeric strings, Decimal accepts both
        <Decimal as Deserialize>::deserialize(deserializer).map(Monetary)
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
