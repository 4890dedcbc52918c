use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::ephemeris::normalize_degrees;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Signs in ecliptic order, Aries at 0°.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude split into its 30° sign and the offset inside it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Full precision, in [0, 30).
    pub degree_in_sign: f64,
}

impl ZodiacPosition {
    /// Accepts any real longitude; it is reduced to [0, 360) first.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = normalize_degrees(longitude);
        let index = ((normalized / 30.0).floor() as usize).min(11);
        Self {
            sign: ZodiacSign::ALL[index],
            degree_in_sign: (normalized - 30.0 * index as f64).max(0.0),
        }
    }
}
