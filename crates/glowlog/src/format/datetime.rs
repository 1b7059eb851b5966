//! Date and time formatting with `yyyy-MM-dd`-style patterns.
//!
//! Timestamps in log templates are written with patterns such as
//! `HH:mm:ss` or `yyyy-MM-dd HH:mm:ss.fff zzz`. This module interprets those
//! patterns over chrono values, along with the single-letter standard
//! formats (`o`, `s`, `u`, `d`, `D`, `t`, `T`, `g`, `G`, `f`, `F`, `M`, `Y`,
//! `R`). All names are English and invariant.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDateTime, Timelike};

/// Round-trip pattern used by the JSON formatter and the `o` format.
const ROUND_TRIP: &str = "yyyy-MM-ddTHH:mm:ss.fffffffK";

/// Default pattern for naive values in display output.
pub(crate) const DEFAULT_NAIVE: &str = "yyyy-MM-dd HH:mm:ss";

/// Default pattern for offset values in display output.
pub(crate) const DEFAULT_OFFSET: &str = "yyyy-MM-dd HH:mm:ss zzz";

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A local date and time with an optional UTC offset.
#[derive(Debug, Clone, Copy)]
struct Stamp {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl Stamp {
    fn naive(value: &NaiveDateTime) -> Self {
        Self {
            local: *value,
            offset: None,
        }
    }

    fn with_offset(value: &DateTime<FixedOffset>) -> Self {
        Self {
            local: value.naive_local(),
            offset: Some(*value.offset()),
        }
    }

    /// The same instant expressed in UTC. Naive values, and values whose
    /// UTC form is out of range, are left as they are.
    fn to_utc(self) -> Self {
        let Some(offset) = self.offset else {
            return self;
        };
        let shift = Duration::seconds(i64::from(offset.local_minus_utc()));
        match self.local.checked_sub_signed(shift) {
            Some(local) => Self {
                local,
                offset: FixedOffset::east_opt(0),
            },
            None => self,
        }
    }

    /// Fraction of a second in 100ns units, always seven digits.
    fn ticks(&self) -> String {
        let nanos = self.local.nanosecond().min(999_999_999);
        format!("{:07}", nanos / 100)
    }
}

/// ISO-8601 with seven fractional digits and no zone.
pub(crate) fn iso_naive(value: &NaiveDateTime) -> String {
    render(Stamp::naive(value), ROUND_TRIP)
}

/// ISO-8601 with seven fractional digits and a `+HH:MM` offset.
pub(crate) fn iso_offset(value: &DateTime<FixedOffset>) -> String {
    render(Stamp::with_offset(value), ROUND_TRIP)
}

pub(crate) fn format_naive(value: &NaiveDateTime, format: Option<&str>) -> String {
    format_stamp(Stamp::naive(value), format.unwrap_or(DEFAULT_NAIVE))
}

pub(crate) fn format_offset(value: &DateTime<FixedOffset>, format: Option<&str>) -> String {
    format_stamp(Stamp::with_offset(value), format.unwrap_or(DEFAULT_OFFSET))
}

fn format_stamp(stamp: Stamp, format: &str) -> String {
    let mut chars = format.chars();
    match (chars.next(), chars.next()) {
        (Some(spec), None) => standard(stamp, spec),
        (None, _) if stamp.offset.is_some() => render(stamp, DEFAULT_OFFSET),
        (None, _) => render(stamp, DEFAULT_NAIVE),
        _ => render(stamp, format),
    }
}

/// Expands a single-letter standard format.
fn standard(stamp: Stamp, spec: char) -> String {
    let pattern = match spec {
        'o' | 'O' => ROUND_TRIP,
        's' => "yyyy-MM-ddTHH:mm:ss",
        'u' => return render(stamp.to_utc(), "yyyy-MM-dd HH:mm:ss'Z'"),
        'R' | 'r' => return render(stamp.to_utc(), "ddd, dd MMM yyyy HH:mm:ss 'GMT'"),
        'd' => "MM/dd/yyyy",
        'D' => "dddd, dd MMMM yyyy",
        't' => "HH:mm",
        'T' => "HH:mm:ss",
        'f' => "dddd, dd MMMM yyyy HH:mm",
        'F' => "dddd, dd MMMM yyyy HH:mm:ss",
        'g' => "MM/dd/yyyy HH:mm",
        'G' => "MM/dd/yyyy HH:mm:ss",
        'M' | 'm' => "MMMM dd",
        'Y' | 'y' => "yyyy MMMM",
        _ => {
            tracing::trace!(format = %spec, "unknown standard date format");
            if stamp.offset.is_some() {
                DEFAULT_OFFSET
            } else {
                DEFAULT_NAIVE
            }
        }
    };
    render(stamp, pattern)
}

/// Interprets a custom pattern.
fn render(stamp: Stamp, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        match c {
            'y' => {
                let year = stamp.local.year();
                if run <= 2 {
                    let short = year.rem_euclid(100);
                    if run == 1 {
                        out.push_str(&short.to_string());
                    } else {
                        out.push_str(&format!("{:02}", short));
                    }
                } else {
                    out.push_str(&format!("{:0width$}", year, width = run));
                }
            }
            'M' => {
                let month = stamp.local.month();
                let name = MONTH_NAMES[(month - 1) as usize];
                match run {
                    1 => out.push_str(&month.to_string()),
                    2 => out.push_str(&format!("{:02}", month)),
                    3 => out.push_str(&name[..3]),
                    _ => out.push_str(name),
                }
            }
            'd' => {
                let day = stamp.local.day();
                let name = DAY_NAMES[stamp.local.weekday().num_days_from_monday() as usize];
                match run {
                    1 => out.push_str(&day.to_string()),
                    2 => out.push_str(&format!("{:02}", day)),
                    3 => out.push_str(&name[..3]),
                    _ => out.push_str(name),
                }
            }
            'H' => push_number(&mut out, stamp.local.hour(), run),
            'h' => {
                let hour = match stamp.local.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                push_number(&mut out, hour, run);
            }
            'm' => push_number(&mut out, stamp.local.minute(), run),
            's' => push_number(&mut out, stamp.local.second(), run),
            'f' | 'F' => {
                let ticks = stamp.ticks();
                let digits = &ticks[..run.min(7)];
                if c == 'f' {
                    out.push_str(digits);
                } else {
                    out.push_str(digits.trim_end_matches('0'));
                }
            }
            't' => {
                let marker = if stamp.local.hour() < 12 { "AM" } else { "PM" };
                out.push_str(if run == 1 { &marker[..1] } else { marker });
            }
            'z' => {
                if let Some(offset) = stamp.offset {
                    push_offset(&mut out, offset, run);
                }
            }
            'K' => {
                if let Some(offset) = stamp.offset {
                    push_offset(&mut out, offset, 3);
                }
                i += 1;
                continue;
            }
            'g' => out.push_str("A.D."),
            '\'' | '"' => {
                let close = chars[i + 1..].iter().position(|&x| x == c);
                let end = close.map_or(chars.len(), |p| i + 1 + p);
                out.extend(&chars[i + 1..end]);
                i = (end + 1).min(chars.len());
                continue;
            }
            '\\' => {
                if let Some(next) = chars.get(i + 1) {
                    out.push(*next);
                }
                i += 2;
                continue;
            }
            '%' => {
                i += 1;
                continue;
            }
            _ => {
                out.push(c);
                i += 1;
                continue;
            }
        }
        i += run;
    }

    out
}

fn push_number(out: &mut String, value: u32, run: usize) {
    if run == 1 {
        out.push_str(&value.to_string());
    } else {
        out.push_str(&format!("{:02}", value));
    }
}

fn push_offset(out: &mut String, offset: FixedOffset, run: usize) {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match run {
        1 => out.push_str(&format!("{}{}", sign, hours)),
        2 => out.push_str(&format!("{}{:02}", sign, hours)),
        _ => out.push_str(&format!("{}{:02}:{:02}", sign, hours, minutes)),
    }
}
