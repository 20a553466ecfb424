use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::linked_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "families")]
#[crudcrate(
    generate_router,
    api_struct = "Family",
    name_singular = "family",
    name_plural = "families",
    description = "Families belong to an order, e.g. Papilionidae (swallowtails).",
    fn_get_one = get_one_family,
    fn_get_all = get_all_families,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub order_id: Uuid,
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
    pub order: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::orders::models::Entity",
        from = "Column::OrderId",
        to = "crate::taxonomy::orders::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Orders,
    #[sea_orm(has_many = "crate::taxonomy::subfamilies::models::Entity")]
    Subfamilies,
}

impl Related<crate::taxonomy::orders::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<crate::taxonomy::subfamilies::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subfamilies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn get_one_family(db: &DatabaseConnection, id: Uuid) -> Result<Family, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Family not found".to_string()))?;

    let order = linked_summary(db, Some(model.order_id), Taxon::Order).await?;
    let mut family: Family = model.into();
    family.order = order;

    Ok(family)
}

async fn get_all_families(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<FamilyList>, DbErr> {
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
        let order = linked_summary(db, Some(model.order_id), Taxon::Order).await?;
        let mut item = FamilyList::from(model);
        item.order = order;
        items.push(item);
    }

    Ok(items)
}
