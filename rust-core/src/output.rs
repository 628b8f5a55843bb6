//! Plain-text rendering of signals
//!
//! One line per signal: the real part of every sample, each followed by a
//! single space. Numbers use C `%g` formatting.

use crate::signal::Signal;
use std::io::{self, Write};

/// Significant digits used when printing samples
pub const DEFAULT_PRECISION: usize = 6;

/// Format `value` like C's `%.{precision}g`
///
/// Scientific notation is used when the decimal exponent is below -4 or
/// not less than `precision`. Trailing zeros are removed in both forms.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to the requested significant digits first; the exponent of the
    // rounded value decides the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Real parts of `signal`, each followed by a space
pub fn format_real_parts(signal: &Signal) -> String {
    signal
        .iter()
        .map(|c| format_general(c.re, DEFAULT_PRECISION) + " ")
        .collect()
}

/// Write the real-part line of `signal` terminated by a newline
pub fn write_real_parts<W: Write>(writer: &mut W, signal: &Signal) -> io::Result<()> {
    writeln!(writer, "{}", format_real_parts(signal))
}
