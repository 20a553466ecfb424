use crate::geography::labels::{elevation_meters, gps_display_name};
use crate::geography::models::{GpsSummary, LocalitySummary};
use crate::geography::services::locality_summary;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, IntoActiveModel, QueryOrder, QuerySelect};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "gps_coordinates")]
#[crudcrate(
    generate_router,
    api_struct = "Gps",
    name_singular = "gps_coordinate",
    name_plural = "gps_coordinates",
    description = "GPS readings taken at a locality. Coordinates are kept as text to preserve their recorded precision; elevation may be a range such as 3157-3402.",
    fn_get_one = get_one_gps,
    fn_get_all = get_all_gps,
    fn_create = create_gps,
    fn_update = update_gps,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub locality_id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub latitude: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub longitude: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub elevation: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub elevation_meters: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub display_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub locality: Option<LocalitySummary>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::geography::localities::models::Entity",
        from = "Column::LocalityId",
        to = "crate::geography::localities::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Localities,
}

impl Related<crate::geography::localities::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Localities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GpsSummary {
    fn from(model: Model) -> Self {
        Self {
            elevation_meters: elevation_meters(&model.elevation),
            id: model.id,
            latitude: model.latitude,
            longitude: model.longitude,
            elevation: model.elevation,
        }
    }
}

struct GpsLabels {
    elevation_meters: String,
    display_name: String,
    locality: Option<LocalitySummary>,
}

async fn gps_labels(db: &DatabaseConnection, model: &Model) -> Result<GpsLabels, DbErr> {
    let locality = locality_summary(db, Some(model.locality_id)).await?;
    let display_name = gps_display_name(
        model.latitude.as_deref(),
        model.longitude.as_deref(),
        &model.elevation,
        locality
            .as_ref()
            .map_or("", |locality| locality.display_name.as_str()),
    );

    Ok(GpsLabels {
        elevation_meters: elevation_meters(&model.elevation),
        display_name,
        locality,
    })
}

async fn get_one_gps(db: &DatabaseConnection, id: Uuid) -> Result<Gps, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("GPS coordinate not found".to_string()))?;

    let labels = gps_labels(db, &model).await?;
    let mut gps: Gps = model.into();
    gps.elevation_meters = Some(labels.elevation_meters);
    gps.display_name = Some(labels.display_name);
    gps.locality = labels.locality;

    Ok(gps)
}

async fn get_all_gps(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<GpsList>, DbErr> {
    let models = Entity::find()
        .filter(condition.clone())
        .order_by(order_column, order_direction)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    let mut coordinates = Vec::with_capacity(models.len());
    for model in models {
        let labels = gps_labels(db, &model).await?;
        let mut gps = GpsList::from(model);
        gps.elevation_meters = Some(labels.elevation_meters);
        gps.display_name = Some(labels.display_name);
        gps.locality = labels.locality;
        coordinates.push(gps);
    }

    Ok(coordinates)
}

async fn create_gps(db: &DatabaseConnection, create_data: GpsCreate) -> Result<Gps, DbErr> {
    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    Gps::get_one(db, inserted.id).await
}

async fn update_gps(db: &DatabaseConnection, id: Uuid, update_data: GpsUpdate) -> Result<Gps, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("GPS coordinate not found".to_string()))?;

    let updated = update_data.merge_into_activemodel(existing.into_active_model())?;
    updated.update(db).await?;

    Gps::get_one(db, id).await
}
