use thiserror::Error;

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("unsupported house system: {0}")]
    UnsupportedHouseSystem(char),
    #[error("failed to compute {body} at JD {julian_day}: {message}")]
    Calculation {
        body: &'static str,
        julian_day: f64,
        message: String,
    },
    #[error("non-finite {quantity} at JD {julian_day}")]
    NonFinite {
        quantity: &'static str,
        julian_day: f64,
    },
}
