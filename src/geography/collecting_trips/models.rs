use crate::common::models::ordered;
use crate::geography::labels::slugify;
use crate::geography::models::{CollectingTripSummary, StateSummary};
use crate::geography::services::visited_states;
use chrono::{DateTime, NaiveDate, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "collecting_trips")]
#[crudcrate(
    generate_router,
    api_struct = "CollectingTrip",
    name_singular = "collecting_trip",
    name_plural = "collecting_trips",
    description = "Collecting trips group specimens gathered over a date range across one or more states.",
    fn_get_one = get_one_collecting_trip,
    fn_get_all = get_all_collecting_trips,
    fn_create = create_collecting_trip,
    fn_update = update_collecting_trip,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(sortable, filterable)]
    pub start_date: NaiveDate,
    #[crudcrate(sortable, filterable)]
    pub end_date: NaiveDate,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext)]
    pub notes: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub slug: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub states: Option<Vec<StateSummary>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip_states::Entity")]
    TripStates,
}

impl Related<super::trip_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripStates.def()
    }
}

impl Related<crate::geography::states::models::Entity> for Entity {
    fn to() -> RelationDef {
        super::trip_states::Relation::States.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::trip_states::Relation::CollectingTrips.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CollectingTripSummary {
    fn from(model: Model) -> Self {
        Self {
            slug: slugify(&model.name),
            id: model.id,
            name: model.name,
        }
    }
}

async fn get_one_collecting_trip(db: &DatabaseConnection, id: Uuid) -> Result<CollectingTrip, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Collecting trip not found".to_string()))?;

    let states = visited_states(db, id).await?;
    let slug = slugify(&model.name);
    let mut trip: CollectingTrip = model.into();
    trip.slug = Some(slug);
    trip.states = Some(states);

    Ok(trip)
}

async fn get_all_collecting_trips(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<CollectingTripList>, DbErr> {
    let models = ordered(
        Entity::find().filter(condition.clone()),
        order_column,
        order_direction,
        &[Column::Name],
    )
    .offset(offset)
    .limit(limit)
    .all(db)
    .await?;

    let mut trips = Vec::with_capacity(models.len());
    for model in models {
        let states = visited_states(db, model.id).await?;
        let slug = slugify(&model.name);
        let mut trip = CollectingTripList::from(model);
        trip.slug = Some(slug);
        trip.states = Some(states);
        trips.push(trip);
    }

    Ok(trips)
}

async fn create_collecting_trip(
    db: &DatabaseConnection,
    create_data: CollectingTripCreate,
) -> Result<CollectingTrip, DbErr> {
    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    CollectingTrip::get_one(db, inserted.id).await
}

async fn update_collecting_trip(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: CollectingTripUpdate,
) -> Result<CollectingTrip, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Collecting trip not found".to_string()))?;

    let updated = update_data.merge_into_activemodel(existing.into_active_model())?;
    updated.update(db).await?;

    CollectingTrip::get_one(db, id).await
}
