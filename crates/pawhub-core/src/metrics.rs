//! Derived-metric calculators.
//!
//! Pure functions over values the server already provided; no state, no
//! I/O. Views call these on every render, so they must be total: any
//! input yields a displayable result.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{Error, InvalidInputError};

/// Seconds per day, for the days-remaining ceiling.
const SECS_PER_DAY: i64 = 86_400;

/// Funding progress as a ratio in `[0, 1]`.
///
/// Clamped so an over-funded campaign never displays past 100%. A
/// non-positive goal yields 1.0 when anything was raised and 0.0
/// otherwise.
pub fn progress_ratio(current: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return if current > 0.0 { 1.0 } else { 0.0 };
    }
    if !current.is_finite() || current <= 0.0 {
        return 0.0;
    }
    (current / max).clamp(0.0, 1.0)
}

/// Whole days until `end`, rounded up, floored at zero.
///
/// Zero signals "ended"; the result is never negative. Any partial day
/// still counts as one remaining day.
pub fn days_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let secs = (end - now).num_seconds();
    if secs <= 0 {
        return 0;
    }
    ((secs + SECS_PER_DAY - 1) / SECS_PER_DAY) as u32
}

/// A currency the platform can display amounts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// Parse an ISO 4217 code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            _ => Err(InvalidInputError::Currency {
                value: code.to_string(),
            }
            .into()),
        }
    }

    /// Number of minor-unit digits the currency carries.
    pub fn minor_units(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Display symbol, prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
            Currency::Gbp => "\u{a3}",
            Currency::Jpy => "\u{a5}",
        }
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        };
        write!(f, "{}", code)
    }
}

/// Format a monetary amount, rounded to the currency's minor-unit
/// precision, with thousands grouping and the currency symbol.
///
/// Negative amounts (refunds in statements) keep the sign ahead of the
/// symbol: `-$12.50`.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let units = currency.minor_units();
    let scale = 10f64.powi(units as i32);
    let minor = (amount.abs() * scale).round() as u64;

    let whole = minor / scale as u64;
    let frac = minor % scale as u64;

    let sign = if amount < 0.0 && minor > 0 { "-" } else { "" };
    let grouped = group_thousands(whole);

    if units == 0 {
        format!("{}{}{}", sign, currency.symbol(), grouped)
    } else {
        format!(
            "{}{}{}.{:0>width$}",
            sign,
            currency.symbol(),
            grouped,
            frac,
            width = units as usize
        )
    }
}

fn group_thousands(mut n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let mut groups = Vec::new();
    while n >= 1_000 {
        groups.push(format!("{:03}", n % 1_000));
        n /= 1_000;
    }
    let mut out = n.to_string();
    for group in groups.iter().rev() {
        out.push(',');
        out.push_str(group);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn progress_clamps_at_one() {
        assert_eq!(progress_ratio(150.0, 100.0), 1.0);
        assert_eq!(progress_ratio(0.0, 100.0), 0.0);
        assert_eq!(progress_ratio(25.0, 100.0), 0.25);
    }

    #[test]
    fn progress_handles_degenerate_goals() {
        assert_eq!(progress_ratio(10.0, 0.0), 1.0);
        assert_eq!(progress_ratio(0.0, 0.0), 0.0);
        assert_eq!(progress_ratio(10.0, -5.0), 1.0);
        assert_eq!(progress_ratio(-3.0, 100.0), 0.0);
    }

    #[test]
    fn days_remaining_rounds_up() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 1).unwrap();
        assert_eq!(days_remaining(end, now), 1);

        let end = Utc.with_ymd_and_hms(2026, 6, 3, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(end, now), 2);
    }

    #[test]
    fn days_remaining_never_negative() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(end, now), 0);
        assert_eq!(days_remaining(now, now), 0);
    }

    #[test]
    fn usd_rounds_to_cents_and_groups() {
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_currency(0.005, Currency::Usd), "$0.01");
        assert_eq!(format_currency(1_000_000.0, Currency::Usd), "$1,000,000.00");
    }

    #[test]
    fn jpy_has_no_minor_units() {
        assert_eq!(format_currency(1234.6, Currency::Jpy), "\u{a5}1,235");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_currency(-12.5, Currency::Usd), "-$12.50");
        // A negative amount that rounds to zero drops the sign.
        assert_eq!(format_currency(-0.001, Currency::Usd), "$0.00");
    }

    #[test]
    fn currency_codes_parse() {
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::Usd);
        assert!(Currency::from_code("XAU").is_err());
    }
}
