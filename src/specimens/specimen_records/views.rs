use super::collectors;
use super::models::{
    self as specimen_records, SpecimenRecord, SpecimenRecordList, router as crudrouter,
    search_specimen_records,
};
use super::search::SpecimenSearch;
use crate::common::auth::protect;
use crate::common::errors::{BusinessError, BusinessResult, DbErrorExt};
use crate::common::state::AppState;
use crate::not_found;
use crate::specimens::people::models as people;
use axum::{
    Json,
    extract::{Path, Query, State},
    routing::{get, put},
};
use crudcrate::CRUDResource;
use sea_orm::{ActiveValue::Set, ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

const RESOURCE: &str = "specimen_record";

/// Replacement set of collectors for a specimen record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SpecimenCollectorsUpdate {
    pub person_ids: Vec<Uuid>,
}

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = crudrouter(&state.db.clone());

    mutating_router = mutating_router
        .route(
            "/search",
            get(search_specimen_records_handler).with_state(state.clone()),
        )
        .route(
            "/{id}/collectors",
            put(set_specimen_collectors).with_state(state.clone()),
        );

    protect(mutating_router, state, SpecimenRecord::RESOURCE_NAME_PLURAL)
}

fn db_error(err: DbErr) -> BusinessError {
    err.to_business_error(RESOURCE)
}

/// Search specimen records by taxonomy, people, place and collecting details
#[utoipa::path(
    get,
    path = "/specimen_records/search",
    params(SpecimenSearch),
    responses(
        (status = 200, description = "Matching specimen records ordered by USI", body = Vec<SpecimenRecordList>),
    ),
    tag = "specimen_records",
    summary = "Search specimen records"
)]
pub async fn search_specimen_records_handler(
    State(app_state): State<AppState>,
    Query(search): Query<SpecimenSearch>,
) -> BusinessResult<Json<Vec<SpecimenRecordList>>> {
    let records = search_specimen_records(&app_state.db, &search)
        .await
        .map_err(db_error)?;

    tracing::debug!("Specimen search matched {} record(s)", records.len());
    Ok(Json(records))
}

/// Replace the people who collected a specimen
#[utoipa::path(
    put,
    path = "/specimen_records/{id}/collectors",
    params(("id" = Uuid, Path, description = "Specimen record ID")),
    request_body = SpecimenCollectorsUpdate,
    responses(
        (status = 200, description = "The record with its new collectors", body = SpecimenRecord),
        (status = 404, description = "Specimen record or person not found")
    ),
    tag = "specimen_records",
    summary = "Set specimen collectors"
)]
pub async fn set_specimen_collectors(
    State(app_state): State<AppState>,
    Path(record_id): Path<Uuid>,
    Json(update): Json<SpecimenCollectorsUpdate>,
) -> BusinessResult<Json<SpecimenRecord>> {
    let db = &app_state.db;

    specimen_records::Entity::find_by_id(record_id)
        .one(db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found!("specimen record", record_id))?;

    let mut person_ids = update.person_ids;
    person_ids.sort_unstable();
    person_ids.dedup();

    let known: Vec<Uuid> = people::Entity::find()
        .filter(people::Column::Id.is_in(person_ids.clone()))
        .all(db)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(|person| person.id)
        .collect();
    if let Some(missing) = person_ids.iter().find(|id| !known.contains(id)) {
        return Err(not_found!("person", missing));
    }

    let txn = db.begin().await.map_err(db_error)?;
    collectors::Entity::delete_many()
        .filter(collectors::Column::SpecimenRecordId.eq(record_id))
        .exec(&txn)
        .await
        .map_err(db_error)?;
    if !person_ids.is_empty() {
        collectors::Entity::insert_many(person_ids.iter().map(|person_id| {
            collectors::ActiveModel {
                specimen_record_id: Set(record_id),
                person_id: Set(*person_id),
            }
        }))
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;
    }
    txn.commit().await.map_err(db_error)?;

    tracing::info!(
        "Specimen record {record_id} now has {} collector(s)",
        person_ids.len()
    );

    let record = SpecimenRecord::get_one(db, record_id)
        .await
        .map_err(db_error)?;
    Ok(Json(record))
}
