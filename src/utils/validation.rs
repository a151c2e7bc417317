use crate::utils::error::{RecordError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordError::invalid_argument(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(RecordError::invalid_argument(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| RecordError::invalid_argument(field_name, "value is required"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordError::invalid_argument(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects only the empty string; whitespace is a legitimate value.
pub fn validate_present_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RecordError::invalid_argument(field_name, "Value cannot be empty"));
    }
    Ok(())
}

/// Parses an RFC 3339 timestamp, a zone-less `YYYY-MM-DDTHH:MM:SS` (taken as
/// UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn validate_timestamp(field_name: &str, value: &str) -> Result<DateTime<Utc>> {
    let text = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| {
            RecordError::invalid_argument(
                field_name,
                format!(
                    "'{}' is not a YYYY-MM-DD date or YYYY-MM-DDTHH:MM:SS timestamp: {}",
                    value, e
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roster", "staff.toml").is_ok());
        assert!(validate_path("roster", "").is_err());
        assert!(validate_path("roster", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "John").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("n", &present).unwrap(), 3);
        assert!(validate_required_field("n", &absent).is_err());
    }

    #[test]
    fn test_validate_present_string() {
        assert!(validate_present_string("name", " ").is_ok());
        assert!(validate_present_string("name", "").is_err());
    }

    #[test]
    fn test_validate_timestamp() {
        use chrono::TimeZone;

        let midnight = validate_timestamp("date_of_joining", "2020-05-20").unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2020, 5, 20, 0, 0, 0).unwrap());

        let local = validate_timestamp("date_of_joining", "2020-05-20T09:30:00").unwrap();
        assert_eq!(local, Utc.with_ymd_and_hms(2020, 5, 20, 9, 30, 0).unwrap());

        let offset = validate_timestamp("date_of_joining", "2020-05-20T09:30:00+02:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2020, 5, 20, 7, 30, 0).unwrap());

        assert!(validate_timestamp("date_of_joining", "20/05/2020").is_err());
        assert!(validate_timestamp("date_of_joining", "2020-02-30").is_err());
    }
}
