use thiserror::Error;

use super::request::RequestError;
use super::time::TimeError;
use crate::ephemeris::EphemerisError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),
    #[error("Invalid local time: {0}")]
    Time(#[from] TimeError),
    #[error("Ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
