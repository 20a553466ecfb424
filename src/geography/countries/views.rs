use super::models::{Country, router as crudrouter};
use crate::common::auth::protect;
use crate::common::state::AppState;
use crudcrate::CRUDResource;
use utoipa_axum::router::OpenApiRouter;

pub fn router(state: &AppState) -> OpenApiRouter {
    protect(
        crudrouter(&state.db.clone()),
        state,
        Country::RESOURCE_NAME_PLURAL,
    )
}
