use crate::error::ExportError;
use crate::slack::Message;
use chrono::{DateTime, FixedOffset};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Asia/Tokyo has no daylight saving, so a fixed offset is exact.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Formats a string-encoded epoch timestamp (fractional seconds allowed) as
/// `YYYY/MM/DD HH:MM:SS` in the given zone. Pure; whole-second precision.
pub fn format_timestamp(ts: &str, zone: &FixedOffset) -> Result<String, ExportError> {
    let seconds: f64 = ts
        .trim()
        .parse()
        .map_err(|_| ExportError::Timestamp(ts.to_string()))?;
    if !seconds.is_finite() {
        return Err(ExportError::Timestamp(ts.to_string()));
    }

    let utc = DateTime::from_timestamp(seconds.floor() as i64, 0)
        .ok_or_else(|| ExportError::Timestamp(ts.to_string()))?;
    Ok(utc.with_timezone(zone).format("%Y/%m/%d %H:%M:%S").to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub user: String,
    pub timestamp: String,
    pub text: String,
}

/// A record without a user or text still produces a row with that cell left
/// empty; a record without a usable timestamp aborts the run.
pub fn to_row(message: &Message, zone: &FixedOffset) -> Result<Row, ExportError> {
    let ts = message.ts.as_deref().unwrap_or("");
    Ok(Row {
        user: message.user.clone().unwrap_or_default(),
        timestamp: format_timestamp(ts, zone)?,
        text: message.text.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_formats_in_jst() {
        assert_eq!(format_timestamp("0", &jst()).unwrap(), "1970/01/01 09:00:00");
    }

    #[test]
    fn zone_is_honored() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_timestamp("0", &utc).unwrap(), "1970/01/01 00:00:00");
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(
            format_timestamp("1234567890.123456", &jst()).unwrap(),
            "2009/02/14 08:31:30"
        );
    }

    #[test]
    fn same_input_same_output() {
        let first = format_timestamp("1700000000.000100", &jst()).unwrap();
        let second = format_timestamp("1700000000.000100", &jst()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_numeric_timestamps() {
        for bad in ["abc", "", "NaN", "inf"] {
            let err = format_timestamp(bad, &jst()).unwrap_err();
            assert!(matches!(err, ExportError::Timestamp(value) if value == bad));
        }
    }

    #[test]
    fn missing_user_and_text_become_empty_cells() {
        let message = Message {
            user: None,
            ts: Some("0".to_string()),
            text: None,
        };

        let row = to_row(&message, &jst()).unwrap();
        assert_eq!(
            row,
            Row {
                user: String::new(),
                timestamp: "1970/01/01 09:00:00".to_string(),
                text: String::new(),
            }
        );
    }

    #[test]
    fn missing_timestamp_is_an_error() {
        let message = Message {
            user: Some("U1".to_string()),
            ts: None,
            text: Some("hi".to_string()),
        };

        assert!(matches!(
            to_row(&message, &jst()),
            Err(ExportError::Timestamp(_))
        ));
    }
}
