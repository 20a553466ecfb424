use crate::common::state::AppState;
use crate::config::Config;
use crate::geography::{
    collecting_trips, counties, countries, gps_coordinates, localities, states,
};
use crate::specimens::{people, specimen_records};
use crate::taxonomy::{families, genera, orders, species, subfamilies, subspecies, tribes};
use axum::Router;
use axum_keycloak_auth::{Url, instance::KeycloakAuthInstance, instance::KeycloakConfig};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

fn keycloak_instance(config: &Config) -> Option<Arc<KeycloakAuthInstance>> {
    if config.keycloak_url.is_empty() {
        return None;
    }

    match Url::parse(&config.keycloak_url) {
        Ok(server) => Some(Arc::new(KeycloakAuthInstance::new(
            KeycloakConfig::builder()
                .server(server)
                .realm(String::from(&config.keycloak_realm))
                .build(),
        ))),
        Err(err) => {
            tracing::error!(
                "Invalid KEYCLOAK_URL '{}': {err}; authentication disabled",
                config.keycloak_url
            );
            None
        }
    }
}

pub fn build_router(db: &DatabaseConnection, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&SecurityAddon),
        security(
            ("bearerAuth" = [])
        )
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl utoipa::Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearerAuth",
                    utoipa::openapi::security::SecurityScheme::Http(
                        utoipa::openapi::security::HttpBuilder::new()
                            .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .build(),
                    ),
                );
            }
        }
    }

    let app_state: AppState = AppState::new(db.clone(), config.clone(), keycloak_instance(config));

    // Build the router with OpenAPI documentation
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router(&app_state)) // Root routes
        .nest("/api/countries", countries::views::router(&app_state))
        .nest("/api/states", states::views::router(&app_state))
        .nest("/api/counties", counties::views::router(&app_state))
        .nest("/api/localities", localities::views::router(&app_state))
        .nest(
            "/api/gps_coordinates",
            gps_coordinates::views::router(&app_state),
        )
        .nest(
            "/api/collecting_trips",
            collecting_trips::views::router(&app_state),
        )
        .nest("/api/orders", orders::views::router(&app_state))
        .nest("/api/families", families::views::router(&app_state))
        .nest("/api/subfamilies", subfamilies::views::router(&app_state))
        .nest("/api/tribes", tribes::views::router(&app_state))
        .nest("/api/genera", genera::views::router(&app_state))
        .nest("/api/species", species::views::router(&app_state))
        .nest("/api/subspecies", subspecies::views::router(&app_state))
        .nest("/api/people", people::views::router(&app_state))
        .nest(
            "/api/specimen_records",
            specimen_records::views::router(&app_state),
        )
        .split_for_parts();

    router.merge(Scalar::with_url("/api/docs", api))
}
