use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::{linked_summary, subspecies_trinomial};
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "subspecies")]
#[crudcrate(
    generate_router,
    api_struct = "Subspecies",
    name_singular = "subspecies",
    name_plural = "subspecies",
    description = "Subspecies belong to a species. The trinomial is the species binomial followed by the subspecies name.",
    fn_get_one = get_one_subspecies,
    fn_get_all = get_all_subspecies,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub species_id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(sortable, filterable, fulltext)]
    pub common_name: Option<String>,
    #[crudcrate(filterable)]
    pub authority: String,
    #[crudcrate(sortable, filterable)]
    pub mona: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub p3: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub ps: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub trinomial: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub species: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::species::models::Entity",
        from = "Column::SpeciesId",
        to = "crate::taxonomy::species::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Species,
}

impl Related<crate::taxonomy::species::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attaches the trinomial and the parent species to a stored subspecies.
pub async fn enrich_subspecies(db: &DatabaseConnection, model: Model) -> Result<Subspecies, DbErr> {
    let trinomial = subspecies_trinomial(db, &model).await?;
    let species = linked_summary(db, Some(model.species_id), Taxon::Species).await?;
    let mut subspecies: Subspecies = model.into();
    subspecies.trinomial = Some(trinomial);
    subspecies.species = species;

    Ok(subspecies)
}

async fn get_one_subspecies(db: &DatabaseConnection, id: Uuid) -> Result<Subspecies, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Subspecies not found".to_string()))?;

    enrich_subspecies(db, model).await
}

async fn get_all_subspecies(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<SubspeciesList>, DbErr> {
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
        let trinomial = subspecies_trinomial(db, &model).await?;
        let species = linked_summary(db, Some(model.species_id), Taxon::Species).await?;
        let mut item = SubspeciesList::from(model);
        item.trinomial = Some(trinomial);
        item.species = species;
        items.push(item);
    }

    Ok(items)
}
