use super::models::{self as species, Species, router as crudrouter};
use crate::common::auth::protect;
use crate::common::errors::{BusinessResult, DbErrorExt};
use crate::common::state::AppState;
use crate::not_found;
use crate::taxonomy::subspecies::models::{self as subspecies, Subspecies, enrich_subspecies};
use axum::{
    Json,
    extract::{Path, State},
    routing::get,
};
use crudcrate::CRUDResource;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = crudrouter(&state.db.clone());

    mutating_router = mutating_router.route(
        "/{id}/subspecies",
        get(get_species_subspecies).with_state(state.clone()),
    );

    protect(mutating_router, state, Species::RESOURCE_NAME_PLURAL)
}

/// List the subspecies of a species
#[utoipa::path(
    get,
    path = "/species/{id}/subspecies",
    params(("id" = Uuid, Path, description = "Species ID")),
    responses(
        (status = 200, description = "Subspecies ordered by name, with their trinomials", body = Vec<Subspecies>),
        (status = 404, description = "Species not found")
    ),
    tag = "species",
    summary = "Get species subspecies"
)]
pub async fn get_species_subspecies(
    Path(species_id): Path<Uuid>,
    State(app_state): State<AppState>,
) -> BusinessResult<Json<Vec<Subspecies>>> {
    let db = &app_state.db;

    species::Entity::find_by_id(species_id)
        .one(db)
        .await
        .map_err(|e| e.to_business_error("species"))?
        .ok_or_else(|| not_found!("species", species_id))?;

    let models = subspecies::Entity::find()
        .filter(subspecies::Column::SpeciesId.eq(species_id))
        .order_by_asc(subspecies::Column::Name)
        .all(db)
        .await
        .map_err(|e| e.to_business_error("subspecies"))?;

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        items.push(
            enrich_subspecies(db, model)
                .await
                .map_err(|e| e.to_business_error("subspecies"))?,
        );
    }

    Ok(Json(items))
}
