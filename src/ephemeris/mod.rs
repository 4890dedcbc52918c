mod error;
mod swiss;

pub use error::EphemerisError;
pub use swiss::SwissEphemeris;

/// Reduces an angle to [0, 360).
///
/// `rem_euclid` alone rounds tiny negative inputs up to exactly 360.
pub fn normalize_degrees(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(360.0);
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Bodies reported in every chart, in response order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::MeanNode,
    ];

    /// Key used for the body in the `planets` object of a chart.
    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::MeanNode => "Mean_Node",
        }
    }

    /// Swiss Ephemeris body number (SE_SUN .. SE_PLUTO, SE_MEAN_NODE).
    pub fn swe_id(self) -> u32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
            Body::MeanNode => 10,
        }
    }
}

/// House cusps and angles for one moment and place. Longitudes are in [0, 360).
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCusps {
    /// Cusp of house `i + 1` at index `i`.
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Source of ecliptic positions for chart assembly.
///
/// Implementations must be callable from concurrent requests.
pub trait Ephemeris: Send + Sync {
    /// Apparent geocentric ecliptic longitude of `body`, in degrees.
    fn body_longitude(&self, julian_day_ut: f64, body: Body) -> Result<f64, EphemerisError>;

    /// House cusps and angles for a geographic position (east longitude positive).
    fn houses(
        &self,
        julian_day_ut: f64,
        latitude: f64,
        longitude: f64,
        house_system: char,
    ) -> Result<HouseCusps, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_half_open_range() {
        assert_eq!(normalize_degrees(-1e-15), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(725.5), 5.5);
    }

    #[test]
    fn body_names_are_unique() {
        let mut names: Vec<_> = Body::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn node_uses_mean_node_number() {
        assert_eq!(Body::MeanNode.swe_id(), 10);
        let ids: Vec<u32> = Body::ALL.iter().map(|b| b.swe_id()).collect();
        assert_eq!(ids, (0..=10).collect::<Vec<u32>>());
    }
}
