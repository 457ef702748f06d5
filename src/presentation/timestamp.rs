//! Publish timestamp formatting.

use crate::model::TimestampOptions;
use chrono::{DateTime, Duration, Utc};

/// Abbreviated date format, e.g. `Oct 19, 3:04 PM`.
const SHORT_FORMAT: &str = "%b %-d, %-I:%M %p";
/// Full date format, e.g. `October 19, 2026 3:04 PM`.
const LONG_FORMAT: &str = "%B %-d, %Y %-I:%M %p";

/// Turns a publish date into display text.
pub trait TimestampFormatter {
    /// Format `published` according to `options`.
    fn format(&self, published: DateTime<Utc>, options: TimestampOptions) -> String;
}

/// Formatter measuring elapsed time against a fixed reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTimestampFormatter {
    now: DateTime<Utc>,
}

impl ClockTimestampFormatter {
    /// Formatter using `now` as the current time.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Formatter using the system clock at construction.
    pub fn system() -> Self {
        Self::at(Utc::now())
    }

    fn elapsed(&self, published: DateTime<Utc>) -> Option<String> {
        let elapsed = self.now.signed_duration_since(published);
        if elapsed < Duration::zero() {
            return None;
        }
        if elapsed < Duration::minutes(1) {
            return Some("just now".to_string());
        }
        if elapsed < Duration::hours(1) {
            return Some(plural(elapsed.num_minutes(), "minute"));
        }
        if elapsed < Duration::days(1) {
            return Some(plural(elapsed.num_hours(), "hour"));
        }
        None
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

impl TimestampFormatter for ClockTimestampFormatter {
    fn format(&self, published: DateTime<Utc>, options: TimestampOptions) -> String {
        if options.show_elapsed_time {
            if let Some(text) = self.elapsed(published) {
                return text;
            }
        }

        let format = if options.display_short_date_time {
            SHORT_FORMAT
        } else {
            LONG_FORMAT
        };
        published.format(format).to_string()
    }
}
