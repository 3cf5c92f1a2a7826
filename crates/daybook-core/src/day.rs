use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate};

/// Wire format of a calendar-day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

#[must_use]
pub fn format_day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

pub fn parse_day_key(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DAY_KEY_FORMAT)
        .with_context(|| format!("invalid day key: {raw}"))
}

/// The Sunday starting the week that contains `day`.
#[must_use]
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    let back = i64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_signed(Duration::days(back)).unwrap_or(day)
}

/// The seven consecutive days of the week containing `day`, Sunday first.
#[must_use]
pub fn week_of(day: NaiveDate) -> [NaiveDate; 7] {
    let start = start_of_week(day);
    std::array::from_fn(|offset| {
        start
            .checked_add_signed(Duration::days(offset as i64))
            .unwrap_or(start)
    })
}

/// Serde adapter for fields carried as `YYYY-MM-DD` day keys.
pub mod day_key_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&day.format(super::DAY_KEY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, super::DAY_KEY_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};

    use super::{format_day_key, parse_day_key, start_of_week, week_of};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn day_key_roundtrip() {
        let parsed = parse_day_key("2024-06-01").expect("parse day key");
        assert_eq!(parsed, day(2024, 6, 1));
        assert_eq!(format_day_key(parsed), "2024-06-01");
    }

    #[test]
    fn rejects_malformed_day_key() {
        assert!(parse_day_key("06/01/2024").is_err());
        assert!(parse_day_key("").is_err());
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-06-05 is a Wednesday; its week starts Sunday 2024-06-02.
        let start = start_of_week(day(2024, 6, 5));
        assert_eq!(start, day(2024, 6, 2));
        assert_eq!(start, start_of_week(start));
    }

    #[test]
    fn week_of_is_seven_consecutive_days() {
        let days = week_of(day(2024, 6, 5));
        assert_eq!(days[0], day(2024, 6, 2));
        assert_eq!(days[6], day(2024, 6, 8));
        assert!(days.iter().all(|d| start_of_week(*d) == days[0]));
        assert_eq!(days[0].weekday(), Weekday::Sun);
    }
}
