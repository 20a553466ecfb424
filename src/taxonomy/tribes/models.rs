use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::linked_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "tribes")]
#[crudcrate(
    generate_router,
    api_struct = "Tribe",
    name_singular = "tribe",
    name_plural = "tribes",
    description = "Tribes belong to a subfamily, e.g. Papilionini.",
    fn_get_one = get_one_tribe,
    fn_get_all = get_all_tribes,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub subfamily_id: Uuid,
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
    pub subfamily: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::subfamilies::models::Entity",
        from = "Column::SubfamilyId",
        to = "crate::taxonomy::subfamilies::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Subfamilies,
    #[sea_orm(has_many = "crate::taxonomy::genera::models::Entity")]
    Genera,
}

impl Related<crate::taxonomy::subfamilies::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subfamilies.def()
    }
}

impl Related<crate::taxonomy::genera::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genera.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn get_one_tribe(db: &DatabaseConnection, id: Uuid) -> Result<Tribe, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Tribe not found".to_string()))?;

    let subfamily = linked_summary(db, Some(model.subfamily_id), Taxon::Subfamily).await?;
    let mut tribe: Tribe = model.into();
    tribe.subfamily = subfamily;

    Ok(tribe)
}

async fn get_all_tribes(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<TribeList>, DbErr> {
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
        let subfamily = linked_summary(db, Some(model.subfamily_id), Taxon::Subfamily).await?;
        let mut item = TribeList::from(model);
        item.subfamily = subfamily;
        items.push(item);
    }

    Ok(items)
}
