//! Date and bucket-range labels for the tooltip's date line

use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use dashchart_shared::{AxisValue, BucketRange, TooltipSettings};

const DATE_WITH_YEAR: &str = "%b %-d, %Y";
const DATE_WITHOUT_YEAR: &str = "%b %-d";

/// How axis positions are turned into labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisLabelOptions {
    /// The axis holds epoch milliseconds; otherwise values pass through untouched
    pub is_timestamp: bool,
    pub utc: bool,
    pub show_time: bool,
    pub show_seconds: bool,
    pub clock_24h: bool,
    /// Bucket width in milliseconds
    pub bucket_size: Option<i64>,
}

impl From<&TooltipSettings> for AxisLabelOptions {
    fn from(settings: &TooltipSettings) -> Self {
        Self {
            is_timestamp: settings.is_grouped_by_date,
            utc: settings.utc,
            show_time: settings.show_time_in_tooltip,
            show_seconds: settings.add_seconds_to_time_format,
            clock_24h: settings.clock_24h,
            bucket_size: settings.bucket_size,
        }
    }
}

impl AxisLabelOptions {
    fn time_pattern(&self) -> &'static str {
        match (self.show_time, self.clock_24h, self.show_seconds) {
            (false, _, _) => "",
            (true, false, false) => "%-I:%M %p",
            (true, false, true) => "%-I:%M:%S %p",
            (true, true, false) => "%H:%M",
            (true, true, true) => "%H:%M:%S",
        }
    }
}

/// Label for an axis position, using the wall clock for the year rule
pub fn format_axis_label(value: &AxisValue, options: &AxisLabelOptions) -> String {
    format_axis_label_at(value, options, Utc::now())
}

/// Label for an axis position as seen at `now`.
///
/// Bucketed labels show the year whenever either boundary falls outside the
/// year of `now`, and repeat the date on the end boundary only when the
/// bucket crosses midnight.
pub fn format_axis_label_at(
    value: &AxisValue,
    options: &AxisLabelOptions,
    now: DateTime<Utc>,
) -> String {
    if !options.is_timestamp {
        return value.to_string();
    }

    let Some(millis) = value.as_millis() else {
        log::warn!("Non-numeric position {value} on a time axis, passing through");
        return value.to_string();
    };

    let range = BucketRange::new(millis, options.bucket_size);
    let label = if options.utc {
        format_range(&Utc, range, now, options)
    } else {
        format_range(&Local, range, now, options)
    };

    label.unwrap_or_else(|| {
        log::warn!("Timestamp {millis} out of range for formatting");
        value.to_string()
    })
}

fn join_pattern(date: &str, time: &str) -> String {
    format!("{date} {time}").trim().to_string()
}

fn format_range<Tz: TimeZone>(
    tz: &Tz,
    range: BucketRange,
    now: DateTime<Utc>,
    options: &AxisLabelOptions,
) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    let time = options.time_pattern();
    let start = tz.timestamp_millis_opt(range.start).single()?;

    let Some(end_millis) = range.end else {
        return Some(start.format(&join_pattern(DATE_WITH_YEAR, time)).to_string());
    };
    let end = tz.timestamp_millis_opt(end_millis).single()?;

    let current_year = now.with_timezone(tz).year();
    let show_year = current_year != start.year() || current_year != end.year();
    let show_end_date = start.date_naive() != end.date_naive();

    let date = if show_year {
        DATE_WITH_YEAR
    } else {
        DATE_WITHOUT_YEAR
    };
    let start_pattern = join_pattern(date, time);
    let end_pattern = if show_end_date {
        join_pattern(date, time)
    } else {
        time.to_string()
    };

    log::trace!(
        "Bucket label {}..{} show_year={show_year} show_end_date={show_end_date}",
        range.start,
        end_millis
    );

    Some(format!(
        "{} — {}",
        start.format(&start_pattern),
        end.format(&end_pattern)
    ))
}
