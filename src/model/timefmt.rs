//! Serde helpers for wire time formats.

/// `HH:MM` wire format for event times, tolerant of `HH:MM:SS` on input.
///
/// The reservation forms submit times without seconds, which the default
/// chrono serde representation rejects.
pub mod hm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::hm_time")]
        time: NaiveTime,
    }

    #[test]
    fn accepts_times_with_and_without_seconds() {
        let w: Wrapper = serde_json::from_str(r#"{"time":"16:00"}"#).unwrap();
        assert_eq!(w.time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());

        let w: Wrapper = serde_json::from_str(r#"{"time":"16:00:30"}"#).unwrap();
        assert_eq!(w.time, NaiveTime::from_hms_opt(16, 0, 30).unwrap());
    }

    #[test]
    fn serializes_without_seconds() {
        let w = Wrapper {
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
        };
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"time":"09:05"}"#);
    }
}
