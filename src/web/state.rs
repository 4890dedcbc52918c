use std::sync::Arc;

use crate::ephemeris::Ephemeris;

#[derive(Clone)]
pub struct AppState {
    pub ephemeris: Arc<dyn Ephemeris>,
}

impl AppState {
    pub fn new(ephemeris: impl Ephemeris + 'static) -> Self {
        AppState {
            ephemeris: Arc::new(ephemeris),
        }
    }
}
