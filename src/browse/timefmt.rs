//! Timestamp formatting for display.
//!
//! Record timestamps arrive in two shapes: the archive's own
//! `DD-MM-YYYY HH:mm` form and ISO-8601 strings. The custom form is tried
//! first because chrono's ISO parsers would misread `15-11-2015` as a
//! year. Anything unparseable renders as-is; formatting never fails.

use chrono::{DateTime, NaiveDateTime};

const ARCHIVE_FORMAT: &str = "%d-%m-%Y %H:%M";
const DISPLAY_FORMAT: &str = "%d %b %Y, %H:%M";

const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a raw timestamp string, archive format first, then ISO forms.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, ARCHIVE_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ISO_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    None
}

/// Format a raw timestamp for display, e.g. `15 Nov 2015, 06:30`.
///
/// Unparseable input is returned unchanged rather than surfacing an error
/// or an "invalid date" artifact to the user.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(raw, "unparseable timestamp, rendering raw");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_archive_format() {
        let dt = parse_timestamp("15-11-2015 06:30").unwrap();
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.month(), 11);
        assert_eq!(dt.year(), 2015);
        assert_eq!(dt.hour(), 6);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_format_archive_format() {
        assert_eq!(format_timestamp("15-11-2015 06:30"), "15 Nov 2015, 06:30");
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_timestamp("2016-05-17T06:00:00Z"),
            "17 May 2016, 06:00"
        );
    }

    #[test]
    fn test_format_iso_without_zone() {
        assert_eq!(
            format_timestamp("2017-02-03 08:00:00"),
            "03 Feb 2017, 08:00"
        );
        assert_eq!(format_timestamp("2017-02-03T08:00:00"), "03 Feb 2017, 08:00");
    }

    #[test]
    fn test_nonconforming_string_passes_through() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_invalid_components_pass_through() {
        // Right shape, impossible calendar values.
        assert_eq!(format_timestamp("45-99-2015 06:30"), "45-99-2015 06:30");
        assert_eq!(format_timestamp("31-02-2019 12:00"), "31-02-2019 12:00");
        assert_eq!(format_timestamp("15-11-2015 29:99"), "15-11-2015 29:99");
    }

    #[test]
    fn test_partial_archive_shape_passes_through() {
        assert_eq!(format_timestamp("15-11-2015"), "15-11-2015");
        assert_eq!(format_timestamp("06:30"), "06:30");
    }

    #[test]
    fn test_day_month_not_misread_as_iso() {
        // Must parse day-month-year, not year-month-day.
        let dt = parse_timestamp("03-02-2017 08:00").unwrap();
        assert_eq!(dt.day(), 3);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.year(), 2017);
    }
}
