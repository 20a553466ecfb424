use super::models::{self as localities, Locality, LocalityCreate, LocalityUpdate};
use crate::common::auth::protect;
use crate::common::errors::{BusinessError, BusinessResult, DbErrorExt};
use crate::common::models::merged;
use crate::common::state::AppState;
use crate::geography::validation::validate_single_region;
use crate::not_found;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use crudcrate::{CRUDResource, traits::MergeIntoActiveModel};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

const RESOURCE: &str = "locality";

/// Listing, reads and deletes are crudcrate's. Create and update are replaced so that a
/// region conflict answers with the per-field error body.
pub fn router(state: &AppState) -> OpenApiRouter {
    let router = OpenApiRouter::new()
        .routes(routes!(localities::get_all_handler, create_locality))
        .routes(routes!(
            localities::get_one_handler,
            update_locality,
            localities::delete_one_handler
        ))
        .with_state(state.db.clone());

    protect(router, state, Locality::RESOURCE_NAME_PLURAL)
}

fn db_error(err: DbErr) -> BusinessError {
    err.to_business_error(RESOURCE)
}

fn check_regions(country: bool, state: bool, county: bool) -> BusinessResult<()> {
    validate_single_region(country, state, county).map_err(|fields| {
        tracing::warn!(?fields, "Rejected locality attached to more than one region");
        BusinessError::FieldErrors { fields }
    })
}

#[utoipa::path(
    post,
    path = "/",
    request_body = LocalityCreate,
    responses(
        (status = CREATED, description = "Locality created", body = Locality),
        (status = BAD_REQUEST, description = "More than one of county, state and country was given")
    ),
    tag = "localities",
    summary = "Create a locality",
    description = "A locality may be attached to at most one of a county, a state or a country. Conflicting links are rejected with one message per conflicting field."
)]
pub async fn create_locality(
    State(db): State<DatabaseConnection>,
    Json(data): Json<LocalityCreate>,
) -> BusinessResult<(StatusCode, Json<Locality>)> {
    check_regions(
        data.country_id.is_some(),
        data.state_id.is_some(),
        data.county_id.is_some(),
    )?;

    let active_model: localities::ActiveModel = data.into();
    let inserted = active_model.insert(&db).await.map_err(db_error)?;
    let locality = Locality::get_one(&db, inserted.id)
        .await
        .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(locality)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = Uuid, Path, description = "Locality ID")),
    request_body = LocalityUpdate,
    responses(
        (status = OK, description = "Locality updated", body = Locality),
        (status = BAD_REQUEST, description = "The updated locality would have more than one region"),
        (status = NOT_FOUND, description = "Locality not found")
    ),
    tag = "localities",
    summary = "Update a locality"
)]
pub async fn update_locality(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(data): Json<LocalityUpdate>,
) -> BusinessResult<Json<Locality>> {
    let existing = localities::Entity::find_by_id(id)
        .one(&db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found!(RESOURCE, id))?;

    // The request's fields over the stored row is what will be saved
    let updated = data
        .merge_into_activemodel(existing.clone().into_active_model())
        .map_err(db_error)?;
    check_regions(
        merged(&updated.country_id, Some(&existing.country_id))
            .flatten()
            .is_some(),
        merged(&updated.state_id, Some(&existing.state_id))
            .flatten()
            .is_some(),
        merged(&updated.county_id, Some(&existing.county_id))
            .flatten()
            .is_some(),
    )?;

    updated.update(&db).await.map_err(db_error)?;
    let locality = Locality::get_one(&db, id).await.map_err(db_error)?;

    Ok(Json(locality))
}
