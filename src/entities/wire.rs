//! Serde helpers for the upstream export's wire shapes
//!
//! Records originate from a MongoDB-backed API, so JSON exports mix
//! plain strings with extended-JSON wrappers (`$oid`, `$date`) and a
//! few date layouts. These helpers accept all of them on the way in
//! and write back the plain forms, keeping the YAML records clean.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Plain(String),
    Extended {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StampRepr {
    Text(String),
    Millis(i64),
    Extended {
        #[serde(rename = "$date")]
        date: StampInner,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StampInner {
    Text(String),
    Millis(i64),
    Long {
        #[serde(rename = "$numberLong")]
        millis: String,
    },
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    // Frontends truncate datetimes at 'T'; some exports use a space.
    let head = s.split(['T', ' ']).next().unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn parse_datetime_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Python isoformat without an offset
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    // jsonify renders datetimes in RFC 1123
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date_text(s).and_then(|d| d.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n)))
}

fn stamp_to_text(repr: StampRepr) -> Result<String, i64> {
    match repr {
        StampRepr::Text(s) => Ok(s),
        StampRepr::Millis(ms) => Err(ms),
        StampRepr::Extended { date } => match date {
            StampInner::Text(s) => Ok(s),
            StampInner::Millis(ms) => Err(ms),
            StampInner::Long { millis } => Err(millis.parse().unwrap_or(0)),
        },
    }
}

/// Upstream `_id` values: plain strings or `{"$oid": "..."}`.
pub mod object_id {
    use super::*;

    pub fn serialize<S: Serializer>(id: &str, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        match IdRepr::deserialize(de)? {
            IdRepr::Plain(s) => Ok(s),
            IdRepr::Extended { oid } => Ok(oid),
        }
    }
}

/// Calendar dates: `YYYY-MM-DD`, optionally with a time tail, or an
/// extended-JSON `$date`. Empty strings mean "no date" because blank
/// form fields are stored verbatim upstream.
pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => ser.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(repr) = Option::<StampRepr>::deserialize(de)? else {
            return Ok(None);
        };
        let date = match stamp_to_text(repr) {
            Ok(s) if s.trim().is_empty() => None,
            Ok(s) => Some(
                parse_date_text(&s)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {:?}", s)))?,
            ),
            Err(ms) => DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive()),
        };
        Ok(date)
    }
}

/// Full timestamps (`createdAt`, `updatedAt`): RFC 3339, Python
/// isoformat, RFC 1123, epoch millis or extended-JSON `$date`.
pub mod datetime {
    use super::*;

    pub fn serialize<S: Serializer>(
        stamp: &Option<DateTime<Utc>>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        match stamp {
            Some(dt) => ser.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(repr) = Option::<StampRepr>::deserialize(de)? else {
            return Ok(None);
        };
        let stamp = match stamp_to_text(repr) {
            Ok(s) if s.trim().is_empty() => None,
            Ok(s) => Some(parse_datetime_text(&s).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid timestamp: {:?}", s))
            })?),
            Err(ms) => DateTime::from_timestamp_millis(ms),
        };
        Ok(stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        #[serde(alias = "_id", with = "object_id")]
        id: String,
        #[serde(default, with = "date")]
        expiry: Option<NaiveDate>,
        #[serde(default, with = "datetime")]
        created: Option<DateTime<Utc>>,
    }

    #[test]
    fn plain_string_id() {
        let p: Probe = serde_json::from_str(r#"{"_id": "665f1c2ab"}"#).unwrap();
        assert_eq!(p.id, "665f1c2ab");
    }

    #[test]
    fn extended_json_oid() {
        let p: Probe = serde_json::from_str(r#"{"_id": {"$oid": "665f1c2ab47d"}}"#).unwrap();
        assert_eq!(p.id, "665f1c2ab47d");
    }

    #[test]
    fn date_accepts_plain_and_datetime_tails() {
        let p: Probe =
            serde_json::from_str(r#"{"_id": "x", "expiry": "2025-09-15"}"#).unwrap();
        assert_eq!(p.expiry.unwrap().to_string(), "2025-09-15");

        let p: Probe =
            serde_json::from_str(r#"{"_id": "x", "expiry": "2025-09-15T00:00:00"}"#).unwrap();
        assert_eq!(p.expiry.unwrap().to_string(), "2025-09-15");
    }

    #[test]
    fn empty_date_string_is_none() {
        let p: Probe = serde_json::from_str(r#"{"_id": "x", "expiry": ""}"#).unwrap();
        assert!(p.expiry.is_none());
    }

    #[test]
    fn extended_json_date_millis() {
        let p: Probe = serde_json::from_str(
            r#"{"_id": "x", "expiry": {"$date": {"$numberLong": "1757894400000"}}}"#,
        )
        .unwrap();
        assert_eq!(p.expiry.unwrap().to_string(), "2025-09-15");
    }

    #[test]
    fn created_accepts_python_isoformat() {
        let p: Probe = serde_json::from_str(
            r#"{"_id": "x", "created": "2025-06-10T12:34:56.789000"}"#,
        )
        .unwrap();
        assert_eq!(p.created.unwrap().timestamp(), 1749558896);
    }

    #[test]
    fn created_accepts_rfc1123() {
        let p: Probe = serde_json::from_str(
            r#"{"_id": "x", "created": "Tue, 10 Jun 2025 12:34:56 GMT"}"#,
        )
        .unwrap();
        assert_eq!(p.created.unwrap().timestamp(), 1749558896);
    }

    #[test]
    fn serializes_back_to_plain_forms() {
        let p: Probe = serde_json::from_str(
            r#"{"_id": {"$oid": "abc"}, "expiry": "2025-09-15T10:00:00", "created": "2025-06-10T12:34:56"}"#,
        )
        .unwrap();
        let yaml = serde_yml::to_string(&p).unwrap();
        assert!(yaml.contains("id: abc"));
        assert!(yaml.contains("expiry: 2025-09-15"));
        assert!(yaml.contains("created: 2025-06-10T12:34:56Z"));
    }
}
