use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Anything that can be resolved to a single UTC instant.
///
/// Timezone-naive values are taken to be UTC, which matches how the hydrology
/// API publishes `dateTime` (GMT, no offset).
pub trait AnyDateTime {
    fn get_datetime(self) -> Option<DateTime<Utc>>;
}

impl AnyDateTime for NaiveDateTime {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        Some(Utc.from_utc_datetime(&self))
    }
}

impl AnyDateTime for DateTime<Local> {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl AnyDateTime for DateTime<Utc> {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        Some(self)
    }
}

impl AnyDateTime for DateTime<FixedOffset> {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl AnyDateTime for NaiveDate {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        self.and_hms_opt(0, 0, 0)?.get_datetime()
    }
}

impl AnyDateTime for &String {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        self.as_str().get_datetime()
    }
}

impl AnyDateTime for String {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        self.as_str().get_datetime()
    }
}

impl AnyDateTime for &str {
    fn get_datetime(self) -> Option<DateTime<Utc>> {
        let s = self.trim();
        // With offset: "2023-07-07T12:00:00Z", "2023-07-07T13:00:00+01:00"
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return dt.get_datetime();
        }
        // ISO 8601 without offset, optional fraction: "2023-07-07T12:00:00"
        if let Ok(naive_dt) = s.parse::<NaiveDateTime>() {
            return naive_dt.get_datetime();
        }
        for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(s, format) {
                return naive_dt.get_datetime();
            }
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return naive_date.get_datetime();
        }
        None
    }
}
