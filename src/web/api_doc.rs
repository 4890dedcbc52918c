use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::natal::NatalRequest;
use crate::chart::{Angles, ChartInput, ChartResponse, EclipticReading, HouseReading, ZodiacSign};

#[derive(OpenApi)]
#[openapi(
    paths(super::api::natal::natal),
    components(
        schemas(
            NatalRequest,
            ChartResponse,
            ChartInput,
            EclipticReading,
            HouseReading,
            Angles,
            ZodiacSign,
            ErrorResponse,
        )
    ),
    info(
        title = "Natal Chart API",
        description = "Tropical natal chart computation: planets, house cusps and angles",
        version = "0.1.0"
    ),
    tags(
        (name = "natal", description = "Chart computation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_only_the_natal_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert_eq!(paths, vec!["/natal"]);

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ChartResponse"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
