//! Format specifiers, rendered with invariant-culture conventions.
//!
//! Numbers accept the standard single-letter forms (`F`, `N`, `D`, `E`, `P`,
//! `X`, `G`, `C`, `R`, each with an optional precision) and simple custom
//! patterns made of `0`, `#`, `.` and `,`. Dates accept the standard
//! single-letter forms and custom patterns (`yyyy-MM-dd HH:mm:ss.fff`).

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::TokenValue;

const MONTHS: [&str; 12] = [
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

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(super) fn render(value: &TokenValue, specifier: Option<&str>) -> String {
    let specifier = specifier.map(str::trim).filter(|s| !s.is_empty());
    match value {
        TokenValue::Null => String::new(),
        TokenValue::Bool(v) => v.to_string(),
        TokenValue::Text(v) => v.clone(),
        TokenValue::Int(v) => number(Number::Integer(i128::from(*v)), specifier),
        TokenValue::UInt(v) => number(Number::Integer(i128::from(*v)), specifier),
        TokenValue::Float(v) => number(Number::Float(*v), specifier),
        TokenValue::Decimal(v) => number(Number::Decimal(*v), specifier),
        TokenValue::Date(v) => date_time(&v.and_time(NaiveTime::MIN), specifier.unwrap_or("d")),
        TokenValue::DateTime(v) => date_time(v, specifier.unwrap_or("G")),
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Number {
    Integer(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    fn plain(self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Decimal(v) => v.to_string(),
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Float(v) => v,
            Self::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    fn is_negative(self) -> bool {
        match self {
            Self::Integer(v) => v < 0,
            Self::Float(v) => v < 0.0,
            Self::Decimal(v) => v.is_sign_negative() && !v.is_zero(),
        }
    }

    fn abs(self) -> Self {
        match self {
            Self::Integer(v) => Self::Integer(v.abs()),
            Self::Float(v) => Self::Float(v.abs()),
            Self::Decimal(v) => Self::Decimal(v.abs()),
        }
    }

    fn times_hundred(self) -> Self {
        match self {
            Self::Integer(v) => v
                .checked_mul(100)
                .map_or(Self::Float(v as f64 * 100.0), Self::Integer),
            Self::Float(v) => Self::Float(v * 100.0),
            Self::Decimal(v) => v
                .checked_mul(Decimal::ONE_HUNDRED)
                .map_or(Self::Float(self.to_f64() * 100.0), Self::Decimal),
        }
    }
}

fn number(value: Number, specifier: Option<&str>) -> String {
    let Some(specifier) = specifier else {
        return value.plain();
    };
    if !value.is_finite() {
        return value.plain();
    }
    standard_number(value, specifier)
        .or_else(|| custom_number(value, specifier))
        .unwrap_or_else(|| {
            tracing::trace!(specifier, "unsupported numeric format specifier");
            value.plain()
        })
}

/// Widest digit run a specifier may request.
const MAX_PRECISION: usize = 99;

fn standard_number(value: Number, specifier: &str) -> Option<String> {
    let mut chars = specifier.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    let digits = chars.as_str();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let precision: Option<usize> = if digits.is_empty() {
        None
    } else {
        Some(digits.parse::<usize>().ok()?.min(MAX_PRECISION))
    };

    let rendered = match letter {
        'F' | 'f' => fixed(value, precision.unwrap_or(2)),
        'N' | 'n' => group_thousands(&fixed(value, precision.unwrap_or(2))),
        'P' | 'p' => {
            let scaled = group_thousands(&fixed(value.times_hundred(), precision.unwrap_or(2)));
            format!("{scaled} %")
        }
        'C' | 'c' => {
            let amount = group_thousands(&fixed(value.abs(), precision.unwrap_or(2)));
            if value.is_negative() {
                format!("(¤{amount})")
            } else {
                format!("¤{amount}")
            }
        }
        'D' | 'd' => {
            let Number::Integer(v) = value else {
                return None;
            };
            let digits = v.unsigned_abs().to_string();
            let width = precision.unwrap_or(0);
            let sign = if v < 0 { "-" } else { "" };
            format!("{sign}{digits:0>width$}")
        }
        'X' | 'x' => {
            let Number::Integer(v) = value else {
                return None;
            };
            // Negative values render as their 64-bit two's complement.
            let hex = if v < 0 {
                format!("{:X}", v as i64)
            } else {
                format!("{v:X}")
            };
            let width = precision.unwrap_or(0);
            let padded = format!("{hex:0>width$}");
            if letter == 'x' {
                padded.to_ascii_lowercase()
            } else {
                padded
            }
        }
        'E' | 'e' => exponential(value.to_f64(), precision.unwrap_or(6), letter, 3),
        'G' | 'g' => general(value, precision.filter(|p| *p > 0), letter),
        'R' | 'r' => value.plain(),
        _ => return None,
    };
    Some(rendered)
}

fn fixed(value: Number, precision: usize) -> String {
    match value {
        Number::Integer(v) if precision == 0 => v.to_string(),
        Number::Integer(v) => format!("{v}.{}", "0".repeat(precision)),
        Number::Float(v) => format!("{v:.precision$}"),
        Number::Decimal(v) => {
            let rounded =
                v.round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
    }
}

/// Inserts `,` between groups of three integer digits.
fn group_thousands(number: &str) -> String {
    let (sign, digits) = number
        .strip_prefix('-')
        .map_or(("", number), |rest| ("-", rest));
    let (integer, fraction) = digits.split_at(digits.find('.').unwrap_or(digits.len()));
    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{fraction}")
}

fn exponential(value: f64, precision: usize, letter: char, exponent_digits: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let marker = if letter.is_ascii_uppercase() { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();
    format!("{mantissa}{marker}{sign}{magnitude:0>exponent_digits$}")
}

fn general(value: Number, precision: Option<usize>, letter: char) -> String {
    let Some(precision) = precision else {
        return value.plain();
    };
    let v = value.to_f64();
    if v == 0.0 {
        return "0".to_owned();
    }
    let scientific = format!("{:.*e}", precision - 1, v);
    let exponent: i32 = scientific
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent >= -5 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{v:.decimals$}"))
    } else {
        let rendered = exponential(v, precision - 1, letter, 2);
        match rendered.find(['E', 'e']) {
            Some(at) => format!("{}{}", trim_fraction(&rendered[..at]), &rendered[at..]),
            None => rendered,
        }
    }
}

fn trim_fraction(number: &str) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        number.to_owned()
    }
}

/// Custom patterns built from `0`, `#`, `.` and `,`.
fn custom_number(value: Number, pattern: &str) -> Option<String> {
    if !pattern.chars().all(|c| matches!(c, '0' | '#' | '.' | ',')) {
        return None;
    }
    let (integer_pattern, fraction_pattern) = pattern.split_once('.').unwrap_or((pattern, ""));
    let grouping = integer_pattern.contains(',');
    let min_integer = integer_pattern
        .chars()
        .filter(|c| *c == '0')
        .count()
        .min(MAX_PRECISION);
    let min_fraction = fraction_pattern
        .chars()
        .filter(|c| *c == '0')
        .count()
        .min(MAX_PRECISION);
    let max_fraction = fraction_pattern
        .chars()
        .filter(|c| matches!(c, '0' | '#'))
        .count()
        .min(MAX_PRECISION);

    let mut rendered = fixed(value, max_fraction);
    if let Some(dot) = rendered.find('.') {
        let keep = dot + 1 + min_fraction;
        while rendered.len() > keep && rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest.to_owned()),
        None => ("", rendered),
    };
    let split = unsigned.find('.').unwrap_or(unsigned.len());
    let (integer, fraction) = unsigned.split_at(split);
    let integer = if min_integer == 0 && integer == "0" && !fraction.is_empty() {
        String::new()
    } else {
        format!("{integer:0>min_integer$}")
    };
    let mut result = format!("{sign}{integer}{fraction}");
    if grouping {
        result = group_thousands(&result);
    }
    Some(result)
}

// ============================================================================
// DATES
// ============================================================================

fn date_time(value: &NaiveDateTime, specifier: &str) -> String {
    let pattern = match specifier {
        "d" => "MM/dd/yyyy",
        "D" => "dddd, dd MMMM yyyy",
        "f" => "dddd, dd MMMM yyyy HH:mm",
        "F" => "dddd, dd MMMM yyyy HH:mm:ss",
        "g" => "MM/dd/yyyy HH:mm",
        "G" => "MM/dd/yyyy HH:mm:ss",
        "m" | "M" => "MMMM dd",
        "o" | "O" => "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff",
        "r" | "R" => "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
        "s" => "yyyy'-'MM'-'dd'T'HH':'mm':'ss",
        "t" => "HH:mm",
        "T" => "HH:mm:ss",
        "u" => "yyyy'-'MM'-'dd HH':'mm':'ss'Z'",
        "y" | "Y" => "yyyy MMMM",
        custom => custom,
    };
    custom_date_time(value, pattern)
}

fn custom_date_time(value: &NaiveDateTime, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let run = chars[i..].iter().take_while(|c| **c == ch).count();
        match ch {
            'y' => {
                let year = value.year();
                match run {
                    1 => out.push_str(&(year % 100).to_string()),
                    2 => out.push_str(&format!("{:02}", year % 100)),
                    n => {
                        let width = n.min(MAX_PRECISION);
                        out.push_str(&format!("{year:0width$}"));
                    }
                }
            }
            'M' => {
                let month = value.month();
                match run {
                    1 => out.push_str(&month.to_string()),
                    2 => out.push_str(&format!("{month:02}")),
                    3 => out.push_str(&MONTHS[month as usize - 1][..3]),
                    _ => out.push_str(MONTHS[month as usize - 1]),
                }
            }
            'd' => match run {
                1 => out.push_str(&value.day().to_string()),
                2 => out.push_str(&format!("{:02}", value.day())),
                3 => out.push_str(&WEEKDAYS[value.weekday().num_days_from_monday() as usize][..3]),
                _ => out.push_str(WEEKDAYS[value.weekday().num_days_from_monday() as usize]),
            },
            'H' => push_padded(&mut out, value.hour(), run),
            'h' => {
                let hour = match value.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                push_padded(&mut out, hour, run);
            }
            'm' => push_padded(&mut out, value.minute(), run),
            's' => push_padded(&mut out, value.second(), run),
            'f' | 'F' => {
                let digits = run.min(9);
                let fraction = format!("{:09}", value.nanosecond() % 1_000_000_000);
                let fraction = &fraction[..digits];
                if ch == 'F' {
                    out.push_str(fraction.trim_end_matches('0'));
                } else {
                    out.push_str(fraction);
                }
            }
            't' => {
                let designator = if value.hour() < 12 { "AM" } else { "PM" };
                out.push_str(if run == 1 { &designator[..1] } else { designator });
            }
            'z' | 'K' => {}
            '\'' | '"' => {
                let closing = chars[i + 1..].iter().position(|c| *c == ch);
                let end = closing.map_or(chars.len(), |offset| i + 1 + offset);
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
            other => {
                out.push(other);
                i += 1;
                continue;
            }
        }
        i += run;
    }
    out
}

fn push_padded(out: &mut String, value: u32, run: usize) {
    if run >= 2 {
        out.push_str(&format!("{value:02}"));
    } else {
        out.push_str(&value.to_string());
    }
}
