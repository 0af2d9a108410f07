// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Elements derived from the semi-major axis and eccentricity.
//!
//! The catalogue states its elements with 8 significant digits. Derived
//! distances are therefore computed in decimal arithmetic, rounding every
//! intermediate result half-to-even to [`PRECISION`] digits, so that
//! `2.5 * (1 - 0.2)` yields exactly `2.0` instead of a binary approximation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of significant digits of derived elements.
pub const PRECISION: u32 = 8;

/// A decimal number `mantissa * 10^exponent`.
///
/// Results of arithmetic are rounded to [`PRECISION`] significant digits.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Decimal {
    mantissa: i128,
    exponent: i32,
}

impl Decimal {
    pub const ONE: Decimal = Decimal {
        mantissa: 1,
        exponent: 0,
    };

    /// Creates the decimal from the shortest representation of `value` that
    /// round-trips, which is the text the value was parsed from.
    ///
    /// Returns `None` if the value isn't finite.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            value.to_string().parse().ok()
        } else {
            None
        }
    }

    pub fn to_f64(self) -> f64 {
        format!("{}e{}", self.mantissa, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Multiplies, returning `None` on overflow.
    pub fn mul(self, rhs: Self) -> Option<Self> {
        Some(
            Self {
                mantissa: self.mantissa.checked_mul(rhs.mantissa)?,
                exponent: self.exponent + rhs.exponent,
            }
            .rounded(),
        )
    }

    /// Adds, returning `None` on overflow.
    pub fn add(self, rhs: Self) -> Option<Self> {
        let exponent = self.exponent.min(rhs.exponent);
        let scale = |d: Self| {
            let pow = 10i128.checked_pow((d.exponent - exponent) as u32)?;
            d.mantissa.checked_mul(pow)
        };

        Some(
            Self {
                mantissa: scale(self)?.checked_add(scale(rhs)?)?,
                exponent,
            }
            .rounded(),
        )
    }

    /// Subtracts, returning `None` on overflow.
    pub fn sub(self, rhs: Self) -> Option<Self> {
        self.add(Self {
            mantissa: -rhs.mantissa,
            exponent: rhs.exponent,
        })
    }

    /// Rounds half-to-even to [`PRECISION`] significant digits.
    fn rounded(self) -> Self {
        let digits = digits(self.mantissa);
        if digits <= PRECISION {
            return self;
        }

        let drop = digits - PRECISION;
        let divisor = 10i128.pow(drop);
        let quotient = self.mantissa / divisor;
        let remainder = (self.mantissa % divisor).abs();
        let half = divisor / 2;

        let away = match remainder.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient % 2 != 0,
        };

        let mantissa = match (away, self.mantissa < 0) {
            (true, true) => quotient - 1,
            (true, false) => quotient + 1,
            (false, _) => quotient,
        };

        // 9999.99995 rounds up to 10000.000, one digit too many
        Self {
            mantissa,
            exponent: self.exponent + drop as i32,
        }
        .rounded()
    }
}

fn digits(mut n: i128) -> u32 {
    let mut count = 1;
    while n.abs() >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct ParseDecimalError;

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses plain decimal notation, e.g. `-2.7660512`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(ParseDecimalError);
        }

        let digits = format!("{int}{frac}");
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDecimalError);
        }

        // Zeros on either side don't count towards the significant digits,
        // which must leave room to multiply two mantissas.
        let significant = digits.trim_start_matches('0');
        let trailing = significant.len() - significant.trim_end_matches('0').len();
        let significant = &significant[..significant.len() - trailing];
        if significant.len() > 18 {
            return Err(ParseDecimalError);
        }

        let mantissa: i128 = if significant.is_empty() {
            0
        } else {
            significant.parse().map_err(|_| ParseDecimalError)?
        };

        Ok(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            exponent: trailing as i32 - frac.len() as i32,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Perihelion and aphelion distance in AU.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Apsides {
    pub perihelion: f64,
    pub aphelion: f64,
}

/// Computes `a * (1 - e)` and `a * (1 + e)`.
pub fn apsides(a: f64, e: f64) -> Option<Apsides> {
    let a = Decimal::from_f64(a)?;
    let e = Decimal::from_f64(e)?;

    Some(Apsides {
        perihelion: a.mul(Decimal::ONE.sub(e)?)?.to_f64(),
        aphelion: a.mul(Decimal::ONE.add(e)?)?.to_f64(),
    })
}

/// Computes the semi-latus rectum `a * (1 - e^2)` in AU.
pub fn semilatus_rectum(a: f64, e: f64) -> Option<f64> {
    let a = Decimal::from_f64(a)?;
    let e = Decimal::from_f64(e)?;
    Some(a.mul(Decimal::ONE.sub(e.mul(e)?)?)?.to_f64())
}

/// Rounds a binary result to [`PRECISION`] significant digits.
fn significant(value: f64) -> Option<f64> {
    Decimal::from_f64(value).map(|d| d.rounded().to_f64())
}

/// Computes the orbital period `a^1.5` in years.
pub fn orbital_period(a: f64) -> Option<f64> {
    if a > 0.0 {
        significant(a.powf(1.5))
    } else {
        None
    }
}

/// Computes the synodic period `P / |P - 1|` in years from the orbital period
/// `P` in years.
pub fn synodic_period(period: f64) -> Option<f64> {
    let diff = (period - 1.0).abs();
    if diff > 0.0 {
        significant(period / diff)
    } else {
        None
    }
}

/// Names the orbit type encoded in the low 6 bits of the hexadecimal flags.
pub fn orbit_type(hex_flags: &str) -> Option<&'static str> {
    let flags = u16::from_str_radix(hex_flags, 16).ok()?;

    match flags & 0x3F {
        0 => Some("MBA"),
        1 => Some("Atira"),
        2 => Some("Aten"),
        3 => Some("Apollo"),
        4 => Some("Amor"),
        5 => Some("Object with perihelion distance < 1.665 AU"),
        6 => Some("Hungaria"),
        7 => Some("Phocaea"),
        8 => Some("Hilda"),
        9 => Some("Jupiter Trojan"),
        10 => Some("Distant Object"),
        _ => None,
    }
}
