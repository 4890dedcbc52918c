use chrono_tz::Tz;
use serde_json::{Map, Value};
use thiserror::Error;

use super::time::LocalTimestamp;

pub const DEFAULT_HOUR: i64 = 12;
pub const DEFAULT_MINUTE: i64 = 0;
pub const DEFAULT_SECOND: i64 = 0;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Belgrade;
pub const DEFAULT_HOUSE_SYSTEM: &str = "P";

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("body is not a JSON object")]
    NotAnObject,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing field '{0}'")]
    Missing(&'static str),
    #[error("field '{0}' has an invalid value")]
    Invalid(&'static str),
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
}

/// A validated chart request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub local: LocalTimestamp,
    pub timezone: Tz,
    pub lat: f64,
    pub lon: f64,
    /// Uppercase code passed to the house computation.
    pub house_system: char,
    /// The `house_system` value as sent, echoed back in the response.
    pub house_system_raw: Value,
}

impl ChartRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, RequestError> {
        let fields = value.as_object().ok_or(RequestError::NotAnObject)?;

        let local = LocalTimestamp {
            year: required(fields, "year", as_integer)?,
            month: required(fields, "month", as_integer)?,
            day: required(fields, "day", as_integer)?,
            hour: optional(fields, "hour", as_integer)?.unwrap_or(DEFAULT_HOUR),
            minute: optional(fields, "minute", as_integer)?.unwrap_or(DEFAULT_MINUTE),
            second: optional(fields, "second", as_integer)?.unwrap_or(DEFAULT_SECOND),
        };

        let timezone = match optional(fields, "timezone", Value::as_str)? {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| RequestError::UnknownTimezone(name.to_string()))?,
            None => DEFAULT_TIMEZONE,
        };

        let lat = required(fields, "lat", as_float)?;
        let lon = required(fields, "lon", as_float)?;

        let house_system_raw = fields
            .get("house_system")
            .cloned()
            .unwrap_or_else(|| Value::String(DEFAULT_HOUSE_SYSTEM.to_string()));
        let house_system =
            house_code(&house_system_raw).ok_or(RequestError::Invalid("house_system"))?;

        Ok(ChartRequest {
            local,
            timezone,
            lat,
            lon,
            house_system,
            house_system_raw,
        })
    }
}

fn required<T>(
    fields: &Map<String, Value>,
    key: &'static str,
    coerce: impl Fn(&Value) -> Option<T>,
) -> Result<T, RequestError> {
    optional(fields, key, coerce)?.ok_or(RequestError::Missing(key))
}

fn optional<'a, T>(
    fields: &'a Map<String, Value>,
    key: &'static str,
    coerce: impl Fn(&'a Value) -> Option<T>,
) -> Result<Option<T>, RequestError> {
    fields
        .get(key)
        .map(|value| coerce(value).ok_or(RequestError::Invalid(key)))
        .transpose()
}

/// Integers, floats truncated toward zero, booleans, and numeric strings.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Numbers, booleans and numeric strings; the result must be finite.
fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// First character of the value's textual form, uppercased. Must be ASCII.
///
/// `null` reads as "None" and booleans as "True"/"False"; arrays and
/// objects contribute their opening bracket.
fn house_code(value: &Value) -> Option<char> {
    let first = match value {
        Value::String(s) => s.chars().next(),
        Value::Number(n) => n.to_string().chars().next(),
        Value::Null => Some('N'),
        Value::Bool(true) => Some('T'),
        Value::Bool(false) => Some('F'),
        Value::Array(_) => Some('['),
        Value::Object(_) => Some('{'),
    };
    first
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Value {
        json!({"year": 1990, "month": 5, "day": 17, "lat": 44.8, "lon": 20.46})
    }

    fn with(key: &str, value: Value) -> Value {
        let mut body = base();
        body[key] = value;
        body
    }

    fn without(key: &str) -> Value {
        let mut body = base();
        body.as_object_mut().unwrap().remove(key);
        body
    }

    #[test]
    fn defaults_for_optional_fields() {
        let request = ChartRequest::from_value(&base()).unwrap();
        assert_eq!(request.local.hour, 12);
        assert_eq!(request.local.minute, 0);
        assert_eq!(request.local.second, 0);
        assert_eq!(request.timezone, chrono_tz::Europe::Belgrade);
        assert_eq!(request.house_system, 'P');
        assert_eq!(request.house_system_raw, json!("P"));
    }

    #[test]
    fn missing_required_fields() {
        for key in ["year", "month", "day", "lat", "lon"] {
            assert!(
                matches!(
                    ChartRequest::from_value(&without(key)),
                    Err(RequestError::Missing(k)) if k == key
                ),
                "{}",
                key
            );
        }
    }

    #[test]
    fn non_numeric_values_are_invalid() {
        for (key, value) in [
            ("lat", json!("north")),
            ("lon", json!([20.0])),
            ("year", json!("nineteen")),
            ("day", json!(null)),
            ("hour", json!("noon")),
            ("minute", json!({"m": 1})),
        ] {
            assert!(
                matches!(
                    ChartRequest::from_value(&with(key, value)),
                    Err(RequestError::Invalid(k)) if k == key
                ),
                "{}",
                key
            );
        }
    }

    #[test]
    fn numeric_strings_and_floats_are_coerced() {
        let request = ChartRequest::from_value(&json!({
            "year": "1990", "month": 5.9, "day": " 17 ", "hour": true,
            "lat": "44.8", "lon": 20
        }))
        .unwrap();
        assert_eq!(request.local.year, 1990);
        assert_eq!(request.local.month, 5);
        assert_eq!(request.local.day, 17);
        assert_eq!(request.local.hour, 1);
        assert_eq!(request.lat, 44.8);
        assert_eq!(request.lon, 20.0);
    }

    #[test]
    fn non_finite_coordinates_are_invalid() {
        for value in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                ChartRequest::from_value(&with("lat", json!(value))),
                Err(RequestError::Invalid("lat"))
            ));
        }
    }

    #[test]
    fn timezone_must_be_known() {
        assert!(matches!(
            ChartRequest::from_value(&with("timezone", json!("Mars/Olympus_Mons"))),
            Err(RequestError::UnknownTimezone(_))
        ));
        assert!(matches!(
            ChartRequest::from_value(&with("timezone", json!(1))),
            Err(RequestError::Invalid("timezone"))
        ));
        let request =
            ChartRequest::from_value(&with("timezone", json!("America/New_York"))).unwrap();
        assert_eq!(request.timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn house_system_takes_first_character_uppercased() {
        let request = ChartRequest::from_value(&with("house_system", json!("koch"))).unwrap();
        assert_eq!(request.house_system, 'K');
        assert_eq!(request.house_system_raw, json!("koch"));

        let request = ChartRequest::from_value(&with("house_system", json!(5))).unwrap();
        assert_eq!(request.house_system, '5');
    }

    #[test]
    fn house_system_code_from_any_json_value() {
        for (value, code) in [
            (json!("topocentric"), 'T'),
            (json!(null), 'N'),
            (json!(false), 'F'),
            (json!(-1), '-'),
            (json!(["P"]), '['),
            (json!({"system": "P"}), '{'),
        ] {
            let request = ChartRequest::from_value(&with("house_system", value.clone())).unwrap();
            assert_eq!(request.house_system, code, "{}", value);
            assert_eq!(request.house_system_raw, value);
        }
    }

    #[test]
    fn unusable_house_system_values() {
        for value in [json!(""), json!("élan")] {
            assert!(matches!(
                ChartRequest::from_value(&with("house_system", value)),
                Err(RequestError::Invalid("house_system"))
            ));
        }
    }

    #[test]
    fn body_must_be_a_json_object() {
        assert!(matches!(
            ChartRequest::from_slice(b"[1, 2, 3]"),
            Err(RequestError::NotAnObject)
        ));
        assert!(matches!(
            ChartRequest::from_slice(b"{\"year\": "),
            Err(RequestError::Json(_))
        ));
    }
}
