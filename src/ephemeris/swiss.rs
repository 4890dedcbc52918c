use std::sync::{Mutex, MutexGuard};

use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

use super::{normalize_degrees, Body, Ephemeris, EphemerisError, HouseCusps};

/// FLG_SWIEPH: Swiss Ephemeris files, Moshier when none are installed.
const FLG_SWIEPH: u32 = 2;

/// Twelve-cusp codes `swe_houses` understands, uppercase. Gauquelin
/// sectors ('G') fill 36 cusps and are not offered.
pub const HOUSE_SYSTEM_CODES: &str = "ABCDEFHIKLMNOPQRSTUVWXY";

/// Swiss Ephemeris adapter.
///
/// The C library keeps global state, so calls are serialized.
#[derive(Debug, Default)]
pub struct SwissEphemeris {
    lock: Mutex<()>,
}

impl SwissEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn is_supported_house_system(code: char) -> bool {
    code.is_ascii_uppercase() && HOUSE_SYSTEM_CODES.contains(code)
}

fn ensure_finite(
    value: f64,
    quantity: &'static str,
    julian_day: f64,
) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::NonFinite {
            quantity,
            julian_day,
        })
    }
}

impl Ephemeris for SwissEphemeris {
    fn body_longitude(&self, julian_day_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        let result = {
            let _guard = self.guard();
            calc_ut(julian_day_ut, body.swe_id(), FLG_SWIEPH)
        }
        .map_err(|e| EphemerisError::Calculation {
            body: body.name(),
            julian_day: julian_day_ut,
            message: e.to_string(),
        })?;

        let longitude = ensure_finite(result.out[0], body.name(), julian_day_ut)?;
        Ok(normalize_degrees(longitude))
    }

    fn houses(
        &self,
        julian_day_ut: f64,
        latitude: f64,
        longitude: f64,
        house_system: char,
    ) -> Result<HouseCusps, EphemerisError> {
        let code = house_system.to_ascii_uppercase();
        if !is_supported_house_system(code) {
            return Err(EphemerisError::UnsupportedHouseSystem(house_system));
        }

        let (c, a) = {
            let _guard = self.guard();
            houses_ex(julian_day_ut, 0, latitude, longitude, code as i32)
        };
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let values = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];
        let mut cusps = [0.0; 12];
        for (slot, value) in cusps.iter_mut().zip(values) {
            *slot = normalize_degrees(ensure_finite(value, "house cusp", julian_day_ut)?);
        }

        Ok(HouseCusps {
            cusps,
            ascendant: normalize_degrees(ensure_finite(
                ascmc.ascendant,
                "ascendant",
                julian_day_ut,
            )?),
            midheaven: normalize_degrees(ensure_finite(ascmc.mc, "midheaven", julian_day_ut)?),
        })
    }
}
