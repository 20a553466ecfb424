use crate::common::models::ordered;
use crate::taxonomy::models::{Taxon, TaxonSummary};
use crate::taxonomy::services::{linked_summary, species_binomial};
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "species")]
#[crudcrate(
    generate_router,
    api_struct = "Species",
    name_singular = "species",
    name_plural = "species",
    description = "Species belong to a genus. The binomial is derived from the genus name on every read and never stored. MONA, P3 and PS are catalogue numbers from published checklists.",
    fn_get_one = get_one_species,
    fn_get_all = get_all_species,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub genus_id: Uuid,
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
    pub binomial: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub genus: Option<TaxonSummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::taxonomy::genera::models::Entity",
        from = "Column::GenusId",
        to = "crate::taxonomy::genera::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Genera,
    #[sea_orm(has_many = "crate::taxonomy::subspecies::models::Entity")]
    Subspecies,
}

impl Related<crate::taxonomy::genera::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genera.def()
    }
}

impl Related<crate::taxonomy::subspecies::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subspecies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

async fn get_one_species(db: &DatabaseConnection, id: Uuid) -> Result<Species, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Species not found".to_string()))?;

    let binomial = species_binomial(db, &model).await?;
    let genus = linked_summary(db, Some(model.genus_id), Taxon::Genus).await?;
    let mut species: Species = model.into();
    species.binomial = Some(binomial);
    species.genus = genus;

    Ok(species)
}

async fn get_all_species(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<SpeciesList>, DbErr> {
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
        let binomial = species_binomial(db, &model).await?;
        let genus = linked_summary(db, Some(model.genus_id), Taxon::Genus).await?;
        let mut item = SpeciesList::from(model);
        item.binomial = Some(binomial);
        item.genus = genus;
        items.push(item);
    }

    Ok(items)
}
