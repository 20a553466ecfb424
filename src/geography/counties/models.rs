use crate::common::models::ordered;
use crate::geography::labels::{CountyLabels, county_display_name};
use crate::geography::models::{CountrySummary, CountySummary, StateSummary};
use crate::geography::services::{country_summary, parent_state};
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "counties")]
#[crudcrate(
    generate_router,
    api_struct = "County",
    name_singular = "county",
    name_plural = "counties",
    description = "Counties (boroughs, parishes, census areas) belong to a state. Their abbreviation and full name are derived from the state and never stored.",
    fn_get_one = get_one_county,
    fn_get_all = get_all_counties,
    fn_create = create_county,
    fn_update = update_county,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub state_id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub abbr: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub county_line: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub full_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub display_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub state: Option<StateSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub country: Option<CountrySummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::geography::states::models::Entity",
        from = "Column::StateId",
        to = "crate::geography::states::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
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

impl CountySummary {
    pub fn new(county: &Model, state_name: &str) -> Self {
        let labels = CountyLabels::new(state_name, &county.name);
        Self {
            id: county.id,
            name: county.name.clone(),
            abbr: labels.abbr,
            county_line: labels.county_line,
            full_name: labels.full_name,
        }
    }
}

/// The labels and parents every county response carries.
struct CountyDetails {
    labels: CountyLabels,
    display_name: String,
    state: StateSummary,
    country: Option<CountrySummary>,
}

async fn county_details(db: &DatabaseConnection, model: &Model) -> Result<CountyDetails, DbErr> {
    let state = parent_state(db, model.state_id).await?;
    let country = country_summary(db, Some(state.country_id)).await?;

    Ok(CountyDetails {
        labels: CountyLabels::new(&state.name, &model.name),
        display_name: county_display_name(&state.name, &state.abbr, &model.name),
        state: state.into(),
        country,
    })
}

async fn get_one_county(db: &DatabaseConnection, id: Uuid) -> Result<County, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("County not found".to_string()))?;

    let details = county_details(db, &model).await?;
    let mut county: County = model.into();
    county.abbr = Some(details.labels.abbr);
    county.county_line = Some(details.labels.county_line);
    county.full_name = Some(details.labels.full_name);
    county.display_name = Some(details.display_name);
    county.state = Some(details.state);
    county.country = details.country;

    Ok(county)
}

async fn get_all_counties(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<CountyList>, DbErr> {
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

    let mut counties = Vec::with_capacity(models.len());
    for model in models {
        let details = county_details(db, &model).await?;
        let mut county = CountyList::from(model);
        county.abbr = Some(details.labels.abbr);
        county.county_line = Some(details.labels.county_line);
        county.full_name = Some(details.labels.full_name);
        county.display_name = Some(details.display_name);
        county.state = Some(details.state);
        county.country = details.country;
        counties.push(county);
    }

    Ok(counties)
}

async fn create_county(db: &DatabaseConnection, create_data: CountyCreate) -> Result<County, DbErr> {
    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    County::get_one(db, inserted.id).await
}

async fn update_county(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: CountyUpdate,
) -> Result<County, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("County not found".to_string()))?;

    let updated = update_data.merge_into_activemodel(existing.into_active_model())?;
    updated.update(db).await?;

    County::get_one(db, id).await
}
