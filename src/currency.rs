//! Provides a safe, self-contained type for representing Brazilian Real amounts.

use std::fmt;
use std::ops::Add;

use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing a string into a [`BrlAmount`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBrlAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string has more than two decimal places (e.g., "1.234").
    #[error("too many decimal places for the currency")]
    TooManyDecimals,
}

/// Represents a monetary value in Brazilian Real (BRL).
///
/// Internally, the amount is stored as a signed 64-bit integer in centavos to
/// prevent floating-point inaccuracies. The `Display` implementation formats
/// it per the pt-BR convention: `.` for thousands, `,` for decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrlAmount {
    centavos: i64,
}

impl BrlAmount {
    /// The graphical symbol for the currency.
    pub const SYMBOL: &'static str = "R$";

    /// Creates a new `BrlAmount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// // 15050 centavos represents R$ 150,50
    /// let amount = BrlAmount::new_from_minor(15050);
    /// assert_eq!(amount.to_string(), "150,50");
    /// ```
    pub fn new_from_minor(centavos: i64) -> Self {
        Self { centavos }
    }

    /// Returns the raw amount in centavos.
    pub fn as_minor_units(&self) -> i64 {
        self.centavos
    }

    /// Creates a new `BrlAmount` by parsing a plain decimal string, the format
    /// the event catalog carries unit values in (e.g., `"150.50"`).
    ///
    /// This is a fallible operation that returns an error if the string is not
    /// a valid number or has more than two decimal places.
    pub fn new_from_str(s: &str) -> Result<Self, ParseBrlAmountError> {
        const DECIMALS: u32 = 2;

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseBrlAmountError::InvalidFormat);
        }

        if minor_str.len() as u32 > DECIMALS {
            return Err(ParseBrlAmountError::TooManyDecimals);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseBrlAmountError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<i64>()
                .map_err(|_| ParseBrlAmountError::InvalidFormat)?
        };

        let scaling_factor = 10_i64.pow(DECIMALS - minor_str.len() as u32);
        let mut centavos = major_units
            .checked_mul(10_i64.pow(DECIMALS))
            .ok_or(ParseBrlAmountError::InvalidFormat)?
            .checked_add(minor_units * scaling_factor)
            .ok_or(ParseBrlAmountError::InvalidFormat)?;

        if is_negative {
            centavos = -centavos;
        }

        Ok(Self::new_from_minor(centavos))
    }

    /// Multiplies the amount by a ticket count, saturating at the i64 range.
    pub fn mul_quantity(&self, quantity: i64) -> Self {
        Self {
            centavos: self.centavos.saturating_mul(quantity),
        }
    }

    /// Formats the amount with its currency symbol (e.g., "R$ 150,50").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{} {}", Self::SYMBOL, self)
    }
}

/// Formats the amount as a pt-BR numeric string (e.g., "1.234,56").
impl fmt::Display for BrlAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = (self.centavos / 100).unsigned_abs();
        let minor = (self.centavos % 100).unsigned_abs();

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        let sign = if self.centavos < 0 { "-" } else { "" };
        write!(f, "{}{},{:02}", sign, grouped, minor)
    }
}

impl Add for BrlAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            centavos: self.centavos + rhs.centavos,
        }
    }
}

impl Zero for BrlAmount {
    fn zero() -> Self {
        Self { centavos: 0 }
    }

    fn is_zero(&self) -> bool {
        self.centavos == 0
    }
}
