//! ISO 8601 duration parsing and formatting.
//!
//! Durations are kept as their declared components rather than being
//! normalized to seconds, so `P1M` and `P30D` stay distinct and every parsed
//! value formats back to its canonical source form.

use std::fmt;

/// An ISO 8601 duration literal (`PnYnMnWnDTnHnMnS`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    /// Seconds, possibly fractional (`PT0.5S`).
    pub seconds: f64,
}

/// Error type for ISO 8601 duration parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationParseError {
    pub message: String,
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DurationParseError {}

fn invalid(s: &str) -> DurationParseError {
    DurationParseError {
        message: format!("invalid ISO 8601 duration: {}", s),
    }
}

impl Duration {
    /// Parses an ISO 8601 duration string.
    ///
    /// At least one component is required (`P` and `PT` alone are rejected);
    /// a fractional number is only accepted for the seconds component.
    pub fn parse(s: &str) -> Result<Duration, DurationParseError> {
        // The format is pure ASCII, which keeps the byte slicing below safe.
        if !s.is_ascii() {
            return Err(invalid(s));
        }

        let mut rest = s;

        let negative = if let Some(stripped) = rest.strip_prefix('-') {
            rest = stripped;
            true
        } else {
            false
        };

        rest = rest.strip_prefix('P').ok_or_else(|| invalid(s))?;

        let mut d = Duration {
            negative,
            ..Duration::default()
        };
        let mut in_time = false;
        let mut any_component = false;

        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix('T') {
                if in_time {
                    return Err(invalid(s));
                }
                in_time = true;
                rest = stripped;
                continue;
            }

            let num_end = rest
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .ok_or_else(|| invalid(s))?;
            if num_end == 0 || !rest.as_bytes()[0].is_ascii_digit() {
                return Err(invalid(s));
            }

            let number = &rest[..num_end];
            let designator = rest.as_bytes()[num_end] as char;
            rest = &rest[num_end + 1..];

            // Fractions are only meaningful on the seconds component.
            if number.contains('.') && !(in_time && designator == 'S') {
                return Err(invalid(s));
            }

            let int_value = || number.parse::<u32>().map_err(|_| invalid(s));
            match (in_time, designator) {
                (false, 'Y') => d.years = int_value()?,
                (false, 'M') => d.months = int_value()?,
                (false, 'W') => d.weeks = int_value()?,
                (false, 'D') => d.days = int_value()?,
                (true, 'H') => d.hours = int_value()?,
                (true, 'M') => d.minutes = int_value()?,
                (true, 'S') => d.seconds = number.parse().map_err(|_| invalid(s))?,
                _ => return Err(invalid(s)),
            }
            any_component = true;
        }

        if !any_component {
            return Err(invalid(s));
        }

        Ok(d)
    }

    /// Returns true if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{}S", seconds as u64)
    } else {
        let s = format!("{:.6}", seconds);
        format!("{}S", s.trim_end_matches('0').trim_end_matches('.'))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The zero duration has no non-zero component to carry the format.
        if self.is_zero() {
            return write!(f, "PT0S");
        }

        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }

        if self.hours > 0 || self.minutes > 0 || self.seconds != 0.0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                write!(f, "{}", format_seconds(self.seconds))?;
            }
        }

        Ok(())
    }
}
