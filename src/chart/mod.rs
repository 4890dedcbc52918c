mod error;
mod request;
mod response;
mod time;
mod zodiac;

pub use error::ChartError;
pub use request::ChartRequest;
pub use response::{Angles, ChartInput, ChartResponse, EclipticReading, HouseReading};
pub use zodiac::ZodiacSign;

use crate::ephemeris::{Body, Ephemeris};
use time::julian_day_ut;

/// Compute a natal chart for an already validated request.
pub fn compute(
    request: &ChartRequest,
    ephemeris: &dyn Ephemeris,
) -> Result<ChartResponse, ChartError> {
    let instant = request.local.to_utc(request.timezone)?;
    let jd_ut = julian_day_ut(instant);

    let planets = Body::ALL
        .iter()
        .map(|&body| Ok((body.name(), ephemeris.body_longitude(jd_ut, body)?)))
        .collect::<Result<Vec<_>, ChartError>>()?;

    let houses = ephemeris.houses(jd_ut, request.lat, request.lon, request.house_system)?;

    log::debug!(
        "Chart at JD {} for ({}, {}) using house system {}",
        jd_ut,
        request.lat,
        request.lon,
        request.house_system
    );

    Ok(ChartResponse::assemble(request, jd_ut, planets, &houses))
}

/// Validate a raw JSON body and compute its chart.
pub fn chart_from_json(
    body: &[u8],
    ephemeris: &dyn Ephemeris,
) -> Result<ChartResponse, ChartError> {
    let request = ChartRequest::from_slice(body)?;
    compute(&request, ephemeris)
}
