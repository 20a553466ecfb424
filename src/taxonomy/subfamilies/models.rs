use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::linked_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "subfamilies")]
#[crudcrate(
    generate_router,
    api_struct = "Subfamily",
    name_singular = "subfamily",
    name_plural = "subfamilies",
    description = "Subfamilies belong to a family, e.g. Papilioninae.",
    fn_get_one = get_one_subfamily,
    fn_get_all = get_all_subfamilies,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub family_id: Uuid,
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
    pub family: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::families::models::Entity",
        from = "Column::FamilyId",
        to = "crate::taxonomy::families::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Families,
    #[sea_orm(has_many = "crate::taxonomy::tribes::models::Entity")]
    Tribes,
}

impl Related<crate::taxonomy::families::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Families.def()
    }
}

impl Related<crate::taxonomy::tribes::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tribes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn get_one_subfamily(db: &DatabaseConnection, id: Uuid) -> Result<Subfamily, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Subfamily not found".to_string()))?;

    let family = linked_summary(db, Some(model.family_id), Taxon::Family).await?;
    let mut subfamily: Subfamily = model.into();
    subfamily.family = family;

    Ok(subfamily)
}

async fn get_all_subfamilies(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<SubfamilyList>, DbErr> {
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
        let family = linked_summary(db, Some(model.family_id), Taxon::Family).await?;
        let mut item = SubfamilyList::from(model);
        item.family = family;
        items.push(item);
    }

    Ok(items)
}
