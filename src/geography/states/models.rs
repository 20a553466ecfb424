use crate::common::models::ordered;
use crate::geography::models::{CountrySummary, StateSummary};
use crate::geography::services::country_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "states")]
#[crudcrate(
    generate_router,
    api_struct = "Province",
    name_singular = "state",
    name_plural = "states",
    description = "States (or provinces) belong to a country and group its counties.",
    fn_get_one = get_one_state,
    fn_get_all = get_all_states,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub country_id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(sortable, filterable)]
    pub abbr: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub country: Option<CountrySummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::geography::countries::models::Entity",
        from = "Column::CountryId",
        to = "crate::geography::countries::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Countries,
    #[sea_orm(has_many = "crate::geography::counties::models::Entity")]
    Counties,
}

impl Related<crate::geography::countries::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Countries.def()
    }
}

impl Related<crate::geography::counties::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Counties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StateSummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            abbr: model.abbr,
        }
    }
}

async fn get_one_state(db: &DatabaseConnection, id: Uuid) -> Result<Province, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("State not found".to_string()))?;

    let country = country_summary(db, Some(model.country_id)).await?;
    let mut state: Province = model.into();
    state.country = country;

    Ok(state)
}

async fn get_all_states(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<ProvinceList>, DbErr> {
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

    let mut states = Vec::with_capacity(models.len());
    for model in models {
        let country = country_summary(db, Some(model.country_id)).await?;
        let mut state = ProvinceList::from(model);
        state.country = country;
        states.push(state);
    }

    Ok(states)
}
