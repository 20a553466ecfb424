use super::models::{self as collecting_trips, CollectingTrip, router as crudrouter};
use super::trip_states;
use crate::common::auth::protect;
use crate::common::errors::{BusinessError, BusinessResult, DbErrorExt};
use crate::common::state::AppState;
use crate::geography::states::models as states;
use crate::not_found;
use axum::{
    Json,
    extract::{Path, State},
    routing::put,
};
use crudcrate::CRUDResource;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

const RESOURCE: &str = "collecting_trip";

/// Replacement set of states for a collecting trip.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TripStatesUpdate {
    pub state_ids: Vec<Uuid>,
}

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = crudrouter(&state.db.clone());

    mutating_router = mutating_router.route(
        "/{id}/states",
        put(set_trip_states).with_state(state.clone()),
    );

    protect(mutating_router, state, CollectingTrip::RESOURCE_NAME_PLURAL)
}

fn db_error(err: DbErr) -> BusinessError {
    err.to_business_error(RESOURCE)
}

/// Replace the states visited on a collecting trip
#[utoipa::path(
    put,
    path = "/collecting_trips/{id}/states",
    params(("id" = Uuid, Path, description = "Collecting trip ID")),
    request_body = TripStatesUpdate,
    responses(
        (status = 200, description = "The trip with its new states", body = CollectingTrip),
        (status = 404, description = "Collecting trip or state not found")
    ),
    tag = "collecting_trips",
    summary = "Set collecting trip states"
)]
pub async fn set_trip_states(
    State(app_state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(update): Json<TripStatesUpdate>,
) -> BusinessResult<Json<CollectingTrip>> {
    let db = &app_state.db;

    collecting_trips::Entity::find_by_id(trip_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found!("collecting trip", trip_id))?;

    let mut state_ids = update.state_ids;
    state_ids.sort_unstable();
    state_ids.dedup();

    let known: Vec<Uuid> = states::Entity::find()
        .filter(states::Column::Id.is_in(state_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|state| state.id)
        .collect();
    if let Some(missing) = state_ids.iter().find(|id| !known.contains(id)) {
        return Err(not_found!("state", missing));
    }

    let txn = db.begin().await.map_err(db_error)?;
    trip_states::Entity::delete_many()
        .filter(trip_states::Column::CollectingTripId.eq(trip_id))
        .exec(&txn)
        .await
        .map_err(db_error)?;
    if !state_ids.is_empty() {
        trip_states::Entity::insert_many(state_ids.iter().map(|state_id| {
            trip_states::ActiveModel {
                collecting_trip_id: Set(trip_id),
                state_id: Set(*state_id),
            }
        }))
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;
    }
    txn.commit().await.map_err(db_error)?;

    tracing::info!(
        "Collecting trip {trip_id} now covers {} state(s)",
        state_ids.len()
    );

    let trip = CollectingTrip::get_one(db, trip_id)
        .await
        .map_err(db_error)?;
    Ok(Json(trip))
}
