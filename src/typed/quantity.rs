//! Resource quantities (`500m`, `1Gi`, `1e3`) and their canonical spelling.
//!
//! Values are held as a signed count of nano-units, which covers the full
//! range of suffixes from `n` up to `E` without floating point. Inputs more
//! precise than a nano-unit are rounded up, away from zero.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NANOS_PER_UNIT: i128 = 1_000_000_000;

/// Longest digit run accepted before the value could overflow.
const MAX_DIGITS: usize = 27;

/// Suffix family the quantity was written in; it decides the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityFormat {
    /// `k`, `M`, `G`, ... and `m`, `u`, `n`.
    DecimalSI,
    /// `Ki`, `Mi`, `Gi`, ...
    BinarySI,
    /// `e3`, `E-6`, ...
    DecimalExponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantities must match the regular expression '^([+-]?[0-9.]+)([eEinumkKMGTP]*[-+]?[0-9]*)$'")]
    Format,
    #[error("unable to parse quantity's suffix")]
    Suffix,
    #[error("quantity is too large")]
    TooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    nanos: i128,
    format: QuantityFormat,
}

impl Quantity {
    pub fn format(&self) -> QuantityFormat {
        self.format
    }

    pub fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}

/// Decimal SI suffixes indexed by power of 1000, starting at nano.
const DECIMAL_SUFFIXES: [(&str, i32); 10] = [
    ("n", -9),
    ("u", -6),
    ("m", -3),
    ("", 0),
    ("k", 3),
    ("M", 6),
    ("G", 9),
    ("T", 12),
    ("P", 15),
    ("E", 18),
];

/// Binary SI suffixes indexed by power of 1024.
const BINARY_SUFFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

enum Multiplier {
    Decimal(i32),
    Binary(u32),
}

fn parse_suffix(suffix: &str) -> Result<(Multiplier, QuantityFormat), QuantityError> {
    if let Some((_, exp)) = DECIMAL_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Ok((Multiplier::Decimal(*exp), QuantityFormat::DecimalSI));
    }
    if let Some(pos) = BINARY_SUFFIXES.iter().skip(1).position(|s| *s == suffix) {
        return Ok((Multiplier::Binary(pos as u32 + 1), QuantityFormat::BinarySI));
    }
    if let Some(exp) = suffix.strip_prefix('e').or_else(|| suffix.strip_prefix('E')) {
        let exp: i32 = exp.parse().map_err(|_| QuantityError::Suffix)?;
        return Ok((Multiplier::Decimal(exp), QuantityFormat::DecimalExponent));
    }
    Err(QuantityError::Suffix)
}

fn pow10(exp: u32) -> Result<i128, QuantityError> {
    10i128.checked_pow(exp).ok_or(QuantityError::TooLarge)
}

/// Divides rounding away from zero; both operands are non-negative here.
fn div_ceil(n: i128, d: i128) -> i128 {
    (n + d - 1) / d
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, suffix) = rest.split_at(number_end);

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(QuantityError::Format);
        }
        if fraction.contains('.') {
            return Err(QuantityError::Format);
        }

        let digits = format!("{}{}", whole, fraction);
        let digits = digits.trim_start_matches('0');
        if digits.len() > MAX_DIGITS {
            return Err(QuantityError::TooLarge);
        }
        let mantissa: i128 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| QuantityError::Format)?
        };

        let (multiplier, format) = parse_suffix(suffix)?;
        let frac_len = fraction.len() as i32;

        let magnitude = match multiplier {
            Multiplier::Decimal(exp) => {
                // mantissa * 10^(exp - frac_len) expressed in nano-units.
                let shift = exp - frac_len + 9;
                if shift >= 0 {
                    mantissa
                        .checked_mul(pow10(shift as u32)?)
                        .ok_or(QuantityError::TooLarge)?
                } else if -shift > MAX_DIGITS as i32 + 9 {
                    i128::from(mantissa != 0)
                } else {
                    div_ceil(mantissa, pow10((-shift) as u32)?)
                }
            }
            Multiplier::Binary(power) => {
                let scaled = mantissa
                    .checked_mul(1024i128.pow(power))
                    .and_then(|v| v.checked_mul(NANOS_PER_UNIT))
                    .ok_or(QuantityError::TooLarge)?;
                match 10i128.checked_pow(frac_len as u32) {
                    Some(divisor) => div_ceil(scaled, divisor),
                    // Any representable value is below one nano-unit here.
                    None => i128::from(scaled != 0),
                }
            }
        };

        Ok(Quantity {
            nanos: if negative { -magnitude } else { magnitude },
            format,
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return write!(f, "0");
        }
        let sign = if self.nanos < 0 { "-" } else { "" };
        let magnitude = self.nanos.abs();

        if self.format == QuantityFormat::BinarySI && magnitude % NANOS_PER_UNIT == 0 {
            let units = magnitude / NANOS_PER_UNIT;
            // Small values read better as plain decimals.
            if units >= 1024 {
                let mut mantissa = units;
                let mut power = 0;
                while power + 1 < BINARY_SUFFIXES.len() && mantissa % 1024 == 0 {
                    mantissa /= 1024;
                    power += 1;
                }
                return write!(f, "{}{}{}", sign, mantissa, BINARY_SUFFIXES[power]);
            }
        }

        // Largest power of 1000 that keeps the mantissa whole.
        let mut mantissa = magnitude;
        let mut exp = -9;
        while mantissa % 1000 == 0 && (exp < 18 || self.format == QuantityFormat::DecimalExponent) {
            mantissa /= 1000;
            exp += 3;
        }

        if self.format == QuantityFormat::DecimalExponent {
            return if exp == 0 {
                write!(f, "{}{}", sign, mantissa)
            } else {
                write!(f, "{}{}e{}", sign, mantissa, exp)
            };
        }

        let suffix = DECIMAL_SUFFIXES
            .iter()
            .find(|(_, e)| *e == exp)
            .map(|(s, _)| *s)
            .unwrap_or_default();
        write!(f, "{}{}{}", sign, mantissa, suffix)
    }
}

/// Rewrites a quantity into the spelling the cluster stores.
pub fn canonical_quantity(raw: &str) -> Result<String, QuantityError> {
    Ok(raw.parse::<Quantity>()?.to_string())
}
