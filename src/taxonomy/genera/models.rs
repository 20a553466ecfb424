use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::linked_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "genera")]
#[crudcrate(
    generate_router,
    api_struct = "Genus",
    name_singular = "genus",
    name_plural = "genera",
    description = "Genera belong to a tribe and give species the first half of their binomial.",
    fn_get_one = get_one_genus,
    fn_get_all = get_all_genera,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub tribe_id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(sortable, filterable, fulltext)]
    pub common_name: Option<String>,
    #[crudcrate(filterable)]
    pub authority: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub tribe: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::tribes::models::Entity",
        from = "Column::TribeId",
        to = "crate::taxonomy::tribes::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tribes,
    #[sea_orm(has_many = "crate::taxonomy::species::models::Entity")]
    Species,
}

impl Related<crate::taxonomy::tribes::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tribes.def()
    }
}

impl Related<crate::taxonomy::species::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn get_one_genus(db: &DatabaseConnection, id: Uuid) -> Result<Genus, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Genus not found".to_string()))?;

    let tribe = linked_summary(db, Some(model.tribe_id), Taxon::Tribe).await?;
    let mut genus: Genus = model.into();
    genus.tribe = tribe;

    Ok(genus)
}

async fn get_all_genera(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<GenusList>, DbErr> {
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

    let mut items = Vec::with_capacity(models.len());
    for model in models {
        let tribe = linked_summary(db, Some(model.tribe_id), Taxon::Tribe).await?;
        let mut item = GenusList::from(model);
        item.tribe = tribe;
        items.push(item);
    }

    Ok(items)
}
