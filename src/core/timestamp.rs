//! Timestamp formatting for log output
//!
//! [`DateFormatter`] renders a small pattern language:
//!
//! | token  | meaning                                  |
//! |--------|------------------------------------------|
//! | `yyyy` | four digit year                          |
//! | `yy`   | two digit year (any other run of `y`)    |
//! | `MM`   | month, `01`-`12`                         |
//! | `dd`   | day of month                             |
//! | `hh`   | hour, 24h clock                          |
//! | `mm`   | minutes                                  |
//! | `ss`   | seconds                                  |
//! | `O`    | offset from UTC as `+hhmm` / `-hhmm`     |
//!
//! Every other character is copied verbatim, so `T` and `Z` in
//! `yyyy-MM-ddThh:mm:ssZ` stay literal.

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike, Utc};

/// Default pattern, ISO 8601 with offset: `2025-01-08T10:30:45+0100`
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-ddThh:mm:ssO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
    /// `None` follows the host's local offset at each formatted instant
    offset: Option<FixedOffset>,
}

impl DateFormatter {
    /// Formatter for `pattern` in host local time
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            offset: None,
        }
    }

    /// Render in a fixed offset instead of local time
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The fixed offset, or `None` when rendering in local time
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn set_offset(&mut self, offset: FixedOffset) {
        self.offset = Some(offset);
    }

    /// Go back to rendering in local time
    pub fn use_local_time(&mut self) {
        self.offset = None;
    }

    /// Offset applied to `timestamp`; local time is resolved for that
    /// instant, so DST changes are picked up.
    pub fn offset_at(&self, timestamp: &DateTime<Utc>) -> FixedOffset {
        self.offset
            .unwrap_or_else(|| *timestamp.with_timezone(&Local).offset())
    }

    #[must_use]
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        let offset = self.offset_at(timestamp);
        format_date(&timestamp.with_timezone(&offset), &self.pattern)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// Render `date` with the pattern language described in the module docs
pub fn format_date(date: &DateTime<FixedOffset>, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        match c {
            'y' => {
                if run == 4 {
                    out.push_str(&format!("{:04}", date.year()));
                } else {
                    out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                }
                i += run;
            }
            'M' | 'd' | 'h' | 'm' | 's' if run >= 2 => {
                let value = match c {
                    'M' => date.month(),
                    'd' => date.day(),
                    'h' => date.hour(),
                    'm' => date.minute(),
                    _ => date.second(),
                };
                out.push_str(&format!("{:02}", value));
                i += 2;
            }
            'O' => {
                out.push_str(&offset_string(date.offset()));
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn offset_string(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 09:05:04 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 9, 5, 4)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_pattern_in_utc() {
        let formatter = DateFormatter::default().with_offset(FixedOffset::east_opt(0).unwrap());
        assert_eq!(formatter.format(&fixed_datetime()), "2025-01-08T09:05:04+0000");
    }

    #[test]
    fn test_offset_is_applied() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let formatter = DateFormatter::new("dd/MM/yyyy hh:mm O").with_offset(cet);
        assert_eq!(formatter.format(&fixed_datetime()), "08/01/2025 10:05 +0100");

        let est = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let formatter = DateFormatter::new("hh:mm O").with_offset(est);
        assert_eq!(formatter.format(&fixed_datetime()), "03:35 -0530");
    }

    #[test]
    fn test_short_year_and_literals() {
        let formatter = DateFormatter::new("yy-MM-ddThh:mm:ssZ").with_offset(FixedOffset::east_opt(0).unwrap());
        assert_eq!(formatter.format(&fixed_datetime()), "25-01-08T09:05:04Z");
    }

    #[test]
    fn test_single_letters_are_literal() {
        let formatter = DateFormatter::new("M d h").with_offset(FixedOffset::east_opt(0).unwrap());
        assert_eq!(formatter.format(&fixed_datetime()), "M d h");
    }

    #[test]
    fn test_set_pattern() {
        let mut formatter = DateFormatter::default().with_offset(FixedOffset::east_opt(0).unwrap());
        formatter.set_pattern("yyyy");
        assert_eq!(formatter.pattern(), "yyyy");
        assert_eq!(formatter.format(&fixed_datetime()), "2025");
    }

    #[test]
    fn test_local_offset_resolved_per_instant() {
        let formatter = DateFormatter::new("O");
        assert_eq!(formatter.offset(), None);

        // Winter and summer instants each get the local offset in force then
        let winter = fixed_datetime();
        let summer = Utc.with_ymd_and_hms(2025, 7, 8, 9, 5, 4).single().expect("valid datetime");
        for instant in [winter, summer] {
            let expected = *instant.with_timezone(&Local).offset();
            assert_eq!(formatter.offset_at(&instant), expected);
            assert_eq!(formatter.format(&instant), offset_string(&expected));
        }
    }

    #[test]
    fn test_fixed_offset_can_be_reset_to_local() {
        let mut formatter = DateFormatter::new("O").with_offset(FixedOffset::east_opt(7200).unwrap());
        assert_eq!(formatter.format(&fixed_datetime()), "+0200");

        formatter.use_local_time();
        assert_eq!(formatter.offset(), None);
    }
}
