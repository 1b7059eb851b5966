//! Culture-invariant number formatting.
//!
//! Without a format, integers print as plain digits and floats print in
//! shortest round-trip form, switching to `E` notation for very large or very
//! small magnitudes. A format string is either a standard specifier
//! (`D`, `X`, `F`, `N`, `E`, `P`, `G`, `R`, each with an optional precision)
//! or a simple custom pattern built from `0`, `#`, `.` and `,`.
//! Anything else falls back to the default rendering.

/// A numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Signed(n) => n as f64,
            Number::Unsigned(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// True for NaN and the infinities.
    pub(crate) fn is_non_finite(self) -> bool {
        matches!(self, Number::Float(f) if !f.is_finite())
    }
}

/// Upper bound on requested precision.
const MAX_PRECISION: usize = 99;

pub(crate) fn format_number(number: Number, format: Option<&str>) -> String {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return default_text(number);
    };
    if number.is_non_finite() {
        return default_text(number);
    }

    if let Some((spec, precision)) = standard_specifier(format) {
        return match spec.to_ascii_uppercase() {
            'D' => decimal(number, precision.unwrap_or(0)),
            'X' => hex(number, precision.unwrap_or(0), spec == 'x'),
            'F' => fixed(number.as_f64(), number, precision.unwrap_or(2), false),
            'N' => fixed(number.as_f64(), number, precision.unwrap_or(2), true),
            'E' => exponential(number.as_f64(), precision.unwrap_or(6), spec == 'E'),
            'P' => percent(number.as_f64(), precision.unwrap_or(2)),
            _ => default_text(number),
        };
    }

    if is_custom_pattern(format) {
        return custom(number, format);
    }

    default_text(number)
}

/// Default text for a number: digits for integers, round-trip for floats.
pub(crate) fn default_text(number: Number) -> String {
    match number {
        Number::Signed(n) => n.to_string(),
        Number::Unsigned(n) => n.to_string(),
        Number::Float(f) => round_trip(f),
    }
}

fn round_trip(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        return scientific(&format!("{:e}", f), 2, true);
    }
    format!("{}", f)
}

/// Rewrites Rust `1.5e-7` notation as `1.5E-07`.
fn scientific(rust: &str, min_exponent_digits: usize, upper: bool) -> String {
    let Some((mantissa, exponent)) = rust.split_once('e') else {
        return rust.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!(
        "{}{}{}{:0>width$}",
        mantissa,
        if upper { 'E' } else { 'e' },
        sign,
        digits,
        width = min_exponent_digits
    )
}

/// Splits `D2`, `x`, `N0` into specifier and precision.
fn standard_specifier(format: &str) -> Option<(char, Option<usize>)> {
    let mut chars = format.chars();
    let spec = chars.next().filter(char::is_ascii_alphabetic)?;
    let rest = chars.as_str();
    if !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let precision = if rest.is_empty() {
        None
    } else {
        Some(rest.parse::<usize>().map_or(MAX_PRECISION, |p| p.min(MAX_PRECISION)))
    };
    Some((spec, precision))
}

fn decimal(number: Number, width: usize) -> String {
    let (negative, digits) = match number {
        Number::Signed(n) => (n < 0, n.unsigned_abs().to_string()),
        Number::Unsigned(n) => (false, n.to_string()),
        Number::Float(_) => return default_text(number),
    };
    let sign = if negative { "-" } else { "" };
    format!("{}{:0>width$}", sign, digits, width = width)
}

fn hex(number: Number, width: usize, lower: bool) -> String {
    let bits = match number {
        Number::Signed(n) => n as u64,
        Number::Unsigned(n) => n,
        Number::Float(_) => return default_text(number),
    };
    if lower {
        format!("{:0width$x}", bits, width = width)
    } else {
        format!("{:0width$X}", bits, width = width)
    }
}

/// Integer and fraction digits of `|value|` with `decimals` fraction digits.
fn fixed_parts(value: f64, number: Number, decimals: usize) -> (bool, String, String) {
    match number {
        Number::Signed(n) => (n < 0, n.unsigned_abs().to_string(), "0".repeat(decimals)),
        Number::Unsigned(n) => (false, n.to_string(), "0".repeat(decimals)),
        Number::Float(_) => {
            let text = format!("{:.*}", decimals, value.abs());
            let (int, frac) = text.split_once('.').unwrap_or((&text, ""));
            let is_zero = int.bytes().chain(frac.bytes()).all(|b| b == b'0');
            (value < 0.0 && !is_zero, int.to_string(), frac.to_string())
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn join(negative: bool, int: &str, frac: &str) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn fixed(value: f64, number: Number, decimals: usize, grouped: bool) -> String {
    let (negative, int, frac) = fixed_parts(value, number, decimals);
    let int = if grouped { group_thousands(&int) } else { int };
    join(negative, &int, &frac)
}

fn exponential(value: f64, decimals: usize, upper: bool) -> String {
    scientific(&format!("{:.*e}", decimals, value), 3, upper)
}

fn percent(value: f64, decimals: usize) -> String {
    let scaled = value * 100.0;
    format!("{} %", fixed(scaled, Number::Float(scaled), decimals, true))
}

fn is_custom_pattern(format: &str) -> bool {
    format.contains(['0', '#']) && format.chars().all(|c| matches!(c, '0' | '#' | '.' | ','))
}

/// Formats with a `#,##0.00`-style pattern.
fn custom(number: Number, pattern: &str) -> String {
    let (int_pattern, frac_pattern) = pattern.split_once('.').unwrap_or((pattern, ""));
    let min_int = int_pattern.chars().filter(|&c| c == '0').count();
    let grouped = int_pattern.contains(',');
    let max_frac = frac_pattern.chars().filter(|&c| c == '0' || c == '#').count();
    let min_frac = frac_pattern.chars().filter(|&c| c == '0').count();

    let (negative, int, frac) = fixed_parts(number.as_f64(), number, max_frac);

    let mut frac = frac;
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let int = if min_int == 0 && int == "0" {
        String::new()
    } else {
        format!("{:0>width$}", int, width = min_int)
    };
    let int = if grouped { group_thousands(&int) } else { int };

    let negative = negative && (int.bytes().chain(frac.bytes()).any(|b| b != b'0'));
    join(negative, &int, &frac)
}
