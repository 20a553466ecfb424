use crate::common::models::ordered;
use crate::geography::labels::locality_display_name;
use crate::geography::models::{
    CountrySummary, CountySummary, LocalitySummary, ResolvedRegion, StateSummary,
};
use crate::geography::services::resolve_region;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "localities")]
#[crudcrate(
    generate_router,
    api_struct = "Locality",
    name_singular = "locality",
    name_plural = "localities",
    description = "Localities are named collecting sites attached to at most one of a county, state or country.",
    fn_get_one = get_one_locality,
    fn_get_all = get_all_localities,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub country_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub state_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub county_id: Option<Uuid>,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub range: Option<String>,
    #[crudcrate(sortable, filterable, fulltext)]
    pub town: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub display_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub country: Option<CountrySummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub state: Option<StateSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub county: Option<CountySummary>,
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
    #[sea_orm(
        belongs_to = "crate::geography::states::models::Entity",
        from = "Column::StateId",
        to = "crate::geography::states::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    States,
    #[sea_orm(
        belongs_to = "crate::geography::counties::models::Entity",
        from = "Column::CountyId",
        to = "crate::geography::counties::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Counties,
    #[sea_orm(has_many = "crate::geography::gps_coordinates::models::Entity")]
    GpsCoordinates,
}

impl Related<crate::geography::countries::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Countries.def()
    }
}

impl Related<crate::geography::states::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::States.def()
    }
}

impl Related<crate::geography::counties::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Counties.def()
    }
}

impl Related<crate::geography::gps_coordinates::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GpsCoordinates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn display_name(&self, region: &ResolvedRegion) -> String {
        locality_display_name(
            self.name.as_deref(),
            self.range.as_deref(),
            self.town.as_deref(),
            region.label(),
        )
    }
}

impl LocalitySummary {
    pub fn new(locality: Model, region: &ResolvedRegion) -> Self {
        Self {
            display_name: locality.display_name(region),
            id: locality.id,
            name: locality.name,
            range: locality.range,
            town: locality.town,
        }
    }
}

/// The derived parts of a locality: its display name and the summary of its one region.
struct LocalityDetails {
    display_name: String,
    region: ResolvedRegion,
}

async fn locality_details(db: &DatabaseConnection, model: &Model) -> Result<LocalityDetails, DbErr> {
    let region = resolve_region(db, model.country_id, model.state_id, model.county_id).await?;

    Ok(LocalityDetails {
        display_name: model.display_name(&region),
        region,
    })
}

async fn get_one_locality(db: &DatabaseConnection, id: Uuid) -> Result<Locality, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Locality not found".to_string()))?;

    let details = locality_details(db, &model).await?;
    let mut locality: Locality = model.into();
    locality.display_name = Some(details.display_name);
    locality.country = details.region.country;
    locality.state = details.region.state;
    locality.county = details.region.county;

    Ok(locality)
}

async fn get_all_localities(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<LocalityList>, DbErr> {
    let models = ordered(
        Entity::find().filter(condition.clone()),
        order_column,
        order_direction,
        &[Column::Name, Column::Town],
    )
    .offset(offset)
    .limit(limit)
    .all(db)
    .await?;

    let mut localities = Vec::with_capacity(models.len());
    for model in models {
        let details = locality_details(db, &model).await?;
        let mut locality = LocalityList::from(model);
        locality.display_name = Some(details.display_name);
        locality.country = details.region.country;
        locality.state = details.region.state;
        locality.county = details.region.county;
        localities.push(locality);
    }

    Ok(localities)
}
