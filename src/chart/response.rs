use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::request::ChartRequest;
use super::zodiac::{ZodiacPosition, ZodiacSign};
use crate::ephemeris::HouseCusps;

/// Normalized inputs echoed back to the caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartInput {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub timezone: String,
    pub lat: f64,
    pub lon: f64,
    /// As sent, not the single-letter code used for the computation.
    #[schema(value_type = Object)]
    pub house_system: Value,
}

impl From<&ChartRequest> for ChartInput {
    fn from(request: &ChartRequest) -> Self {
        Self {
            year: request.local.year,
            month: request.local.month,
            day: request.local.day,
            hour: request.local.hour,
            minute: request.local.minute,
            second: request.local.second,
            timezone: request.timezone.name().to_string(),
            lat: request.lat,
            lon: request.lon,
            house_system: request.house_system_raw.clone(),
        }
    }
}

/// An ecliptic longitude annotated with its zodiac position.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EclipticReading {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

impl EclipticReading {
    pub fn new(longitude: f64) -> Self {
        let position = ZodiacPosition::from_longitude(longitude);
        Self {
            longitude: round4(longitude),
            sign: position.sign,
            degree_in_sign: round2(position.degree_in_sign),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HouseReading {
    /// 1 to 12.
    pub house: u8,
    pub cusp_longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Angles {
    #[serde(rename = "ASC")]
    pub asc: EclipticReading,
    #[serde(rename = "MC")]
    pub mc: EclipticReading,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartResponse {
    pub input: ChartInput,
    pub julian_day_ut: f64,
    pub planets: BTreeMap<String, EclipticReading>,
    pub houses: Vec<HouseReading>,
    pub angles: Angles,
}

impl ChartResponse {
    pub fn assemble(
        request: &ChartRequest,
        julian_day_ut: f64,
        planets: impl IntoIterator<Item = (&'static str, f64)>,
        cusps: &HouseCusps,
    ) -> Self {
        let planets = planets
            .into_iter()
            .map(|(name, longitude)| (name.to_string(), EclipticReading::new(longitude)))
            .collect();

        let houses = (1u8..)
            .zip(cusps.cusps.iter())
            .map(|(house, &cusp)| {
                let reading = EclipticReading::new(cusp);
                HouseReading {
                    house,
                    cusp_longitude: reading.longitude,
                    sign: reading.sign,
                    degree_in_sign: reading.degree_in_sign,
                }
            })
            .collect();

        Self {
            input: ChartInput::from(request),
            julian_day_ut,
            planets,
            houses,
            angles: Angles {
                asc: EclipticReading::new(cusps.ascendant),
                mc: EclipticReading::new(cusps.midheaven),
            },
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
