//! RFC 3339 date-time parsing and formatting.
//!
//! A [`DateTime`] stores microseconds since the Unix epoch together with the
//! original UTC offset in minutes, so that formatting reproduces the offset
//! the wire value carried.

use std::fmt;

const MICROSECONDS_PER_SECOND: i64 = 1_000_000;
const MICROSECONDS_PER_MINUTE: i64 = 60 * MICROSECONDS_PER_SECOND;
const MICROSECONDS_PER_HOUR: i64 = 60 * MICROSECONDS_PER_MINUTE;
const MICROSECONDS_PER_DAY: i64 = 24 * MICROSECONDS_PER_HOUR;

/// An RFC 3339 date-time literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Microseconds since 1970-01-01T00:00:00Z.
    pub epoch_micros: i64,
    /// Signed UTC offset in minutes (e.g. +330 for +05:30).
    pub offset_min: i16,
}

/// Error type for RFC 3339 parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    pub message: String,
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DateTimeParseError {}

fn invalid(s: &str) -> DateTimeParseError {
    DateTimeParseError {
        message: format!("invalid RFC 3339 date-time: {}", s),
    }
}

/// Parses a timezone offset string (Z, +HH:MM, -HH:MM) into minutes.
fn parse_timezone_offset(offset: &str) -> Result<i16, DateTimeParseError> {
    if offset == "Z" || offset == "z" {
        return Ok(0);
    }

    let err = || DateTimeParseError {
        message: format!("invalid timezone offset: {}", offset),
    };

    if offset.len() != 6 || offset.chars().nth(3) != Some(':') {
        return Err(err());
    }

    let sign = match offset.chars().next() {
        Some('+') => 1i16,
        Some('-') => -1i16,
        _ => return Err(err()),
    };

    let hours: i16 = offset[1..3].parse().map_err(|_| err())?;
    let minutes: i16 = offset[4..6].parse().map_err(|_| err())?;

    // Allow the +/-24:00 extreme but nothing past it.
    if hours > 24 || (hours == 24 && minutes != 0) || minutes > 59 {
        return Err(err());
    }

    Ok(sign * (hours * 60 + minutes))
}

/// Formats an offset in minutes as Z, +HH:MM, or -HH:MM.
fn format_timezone_offset(offset_min: i16) -> String {
    if offset_min == 0 {
        return "Z".to_string();
    }

    let sign = if offset_min >= 0 { '+' } else { '-' };
    let abs = offset_min.abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Parses fractional seconds digits into microseconds.
fn parse_fractional_seconds(frac: &str) -> i64 {
    if frac.is_empty() {
        return 0;
    }

    // Pad or truncate to microsecond precision.
    let mut padded = frac.to_string();
    while padded.len() < 6 {
        padded.push('0');
    }
    padded.truncate(6);
    padded.parse().unwrap_or(0)
}

/// Formats microseconds as fractional seconds, omitting if zero.
fn format_fractional_seconds(us: i64) -> String {
    if us == 0 {
        return String::new();
    }

    let s = format!("{:06}", us);
    format!(".{}", s.trim_end_matches('0'))
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since the Unix epoch for a civil date (Howard Hinnant's algorithm).
fn date_to_days(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let m = if month <= 2 {
        month as i64 + 9
    } else {
        month as i64 - 3
    };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u32;
    let doy = (153 * m as u32 + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    era * 146097 + doe as i64 - 719468
}

/// Civil date for days since the Unix epoch (Hinnant's algorithm reversed).
fn days_to_date(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };

    let year = if m <= 2 { y + 1 } else { y } as i32;
    (year, m, d)
}

impl DateTime {
    /// Parses an RFC 3339 date-time string
    /// (`YYYY-MM-DDTHH:MM:SS[.ssssss](Z|+HH:MM|-HH:MM)`).
    pub fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        // Minimum length is 19: YYYY-MM-DDTHH:MM:SS. The format is pure
        // ASCII, which also keeps the byte slicing below safe.
        if s.len() < 19 || !s.is_ascii() {
            return Err(invalid(s));
        }

        let sep = s.chars().nth(10);
        if sep != Some('T') && sep != Some('t') && sep != Some(' ') {
            return Err(invalid(s));
        }

        let date_part = &s[..10];
        if date_part.chars().nth(4) != Some('-') || date_part.chars().nth(7) != Some('-') {
            return Err(invalid(s));
        }

        let year: i32 = date_part[..4].parse().map_err(|_| invalid(s))?;
        let month: u32 = date_part[5..7].parse().map_err(|_| invalid(s))?;
        let day: u32 = date_part[8..10].parse().map_err(|_| invalid(s))?;

        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return Err(invalid(s));
        }

        let time_part = &s[11..];
        if time_part.len() < 8
            || time_part.chars().nth(2) != Some(':')
            || time_part.chars().nth(5) != Some(':')
        {
            return Err(invalid(s));
        }

        let hours: i64 = time_part[..2].parse().map_err(|_| invalid(s))?;
        let minutes: i64 = time_part[3..5].parse().map_err(|_| invalid(s))?;
        let seconds: i64 = time_part[6..8].parse().map_err(|_| invalid(s))?;

        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(invalid(s));
        }

        // Optional fractional seconds, then a mandatory-or-absent offset.
        let rest = &time_part[8..];
        let (frac, offset_str) = if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if frac_end == 0 {
                return Err(invalid(s));
            }
            (&after_dot[..frac_end], &after_dot[frac_end..])
        } else {
            ("", rest)
        };

        let offset_min = if offset_str.is_empty() {
            0
        } else {
            parse_timezone_offset(offset_str)?
        };

        let micros = parse_fractional_seconds(frac);
        let local_us = date_to_days(year, month, day) * MICROSECONDS_PER_DAY
            + hours * MICROSECONDS_PER_HOUR
            + minutes * MICROSECONDS_PER_MINUTE
            + seconds * MICROSECONDS_PER_SECOND
            + micros;

        // Local time = UTC + offset, so UTC = local - offset.
        let epoch_micros = local_us - offset_min as i64 * MICROSECONDS_PER_MINUTE;

        Ok(DateTime {
            epoch_micros,
            offset_min,
        })
    }

    /// Formats this date-time as an RFC 3339 string, preserving the offset.
    pub fn to_rfc3339(self) -> String {
        let local_us = self.epoch_micros + self.offset_min as i64 * MICROSECONDS_PER_MINUTE;

        let (days, time_us) = if local_us >= 0 {
            (local_us / MICROSECONDS_PER_DAY, local_us % MICROSECONDS_PER_DAY)
        } else {
            // Floor division for instants before the epoch.
            let days = (local_us + 1) / MICROSECONDS_PER_DAY - 1;
            let time_us = ((local_us % MICROSECONDS_PER_DAY) + MICROSECONDS_PER_DAY)
                % MICROSECONDS_PER_DAY;
            (days, time_us)
        };

        let (year, month, day) = days_to_date(days);

        let hours = time_us / MICROSECONDS_PER_HOUR;
        let rem = time_us % MICROSECONDS_PER_HOUR;
        let minutes = rem / MICROSECONDS_PER_MINUTE;
        let rem = rem % MICROSECONDS_PER_MINUTE;
        let seconds = rem / MICROSECONDS_PER_SECOND;
        let micros = rem % MICROSECONDS_PER_SECOND;

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{}",
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
            format_fractional_seconds(micros),
            format_timezone_offset(self.offset_min)
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}
