use crate::common::models::ordered;
use crate::geography::models::CountrySummary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "countries")]
#[crudcrate(
    generate_router,
    api_struct = "Country",
    name_singular = "country",
    name_plural = "countries",
    description = "Countries are the root of the geographic hierarchy. States, and localities without a finer region, attach to a country."
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(sortable, filterable)]
    pub abbr: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::geography::states::models::Entity")]
    States,
    #[sea_orm(has_many = "crate::geography::localities::models::Entity")]
    Localities,
}

impl Related<crate::geography::states::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::States.def()
    }
}

impl Related<crate::geography::localities::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Localities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CountrySummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            abbr: model.abbr,
        }
    }
}

async fn get_all_countries(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<CountryList>, DbErr> {
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

    Ok(models.into_iter().map(CountryList::from).collect())
}
