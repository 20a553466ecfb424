use super::collectors;
use super::enums::{Method, Preparation, Sex, Stage};
use super::search::SpecimenSearch;
use crate::common::models::{merged, ordered};
use crate::geography::models::{
    CollectingTripSummary, CountrySummary, CountySummary, GpsSummary, LocalitySummary,
    StateSummary,
};
use crate::geography::services::{
    collecting_trip_summary, country_summary, county_summary, gps_summary, locality_summary,
    state_summary,
};
use crate::specimens::dates::{Month, collected_date, full_date, num_date, validate_date_parts, validate_year};
use crate::specimens::models::PersonSummary;
use crate::specimens::names::collectors as collector_names;
use crate::specimens::people::models as people;
use crate::specimens::temperature::{is_valid_temperature, temp_c, temp_f};
use crate::taxonomy::models::{Taxon, TaxonLinks, TaxonSummary};
use crate::taxonomy::services::linked_summary;
use chrono::{DateTime, NaiveDate, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, IntoActiveModel, QueryOrder, QuerySelect, Value};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "specimen_records")]
#[crudcrate(
    generate_router,
    api_struct = "SpecimenRecord",
    name_singular = "specimen_record",
    name_plural = "specimen_records",
    description = "Specimen records catalogue one collected insect: its taxonomy, where and when it was caught, by whom, and how it was prepared. Dates, temperatures, collector names and the most specific taxon are derived on every read.",
    fn_get_one = get_one_specimen_record,
    fn_get_all = get_all_specimen_records,
    fn_create = create_specimen_record,
    fn_update = update_specimen_record,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub usi: String,
    #[crudcrate(sortable, filterable)]
    pub order_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub family_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub subfamily_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub tribe_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub genus_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub species_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub subspecies_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub determiner_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub determined_year: Option<i32>,
    #[crudcrate(sortable)]
    pub sex: Option<Sex>,
    #[crudcrate(sortable)]
    pub stage: Option<Stage>,
    #[crudcrate(sortable, filterable)]
    pub preparer_id: Option<Uuid>,
    #[crudcrate(sortable)]
    pub preparation: Option<Preparation>,
    #[crudcrate(sortable)]
    pub preparation_date: Option<NaiveDate>,
    #[crudcrate(filterable)]
    pub labels_printed: Option<bool>,
    #[crudcrate(filterable)]
    pub labeled: Option<bool>,
    #[crudcrate(filterable)]
    pub photographed: Option<bool>,
    #[crudcrate(sortable, filterable)]
    pub collecting_trip_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub country_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub state_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub county_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub locality_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub gps_id: Option<Uuid>,
    #[crudcrate(sortable, filterable)]
    pub day: Option<i32>,
    #[crudcrate(sortable)]
    pub month: Option<Month>,
    #[crudcrate(sortable, filterable)]
    pub year: Option<i32>,
    #[crudcrate(sortable)]
    pub method: Option<Method>,
    #[crudcrate(filterable, fulltext)]
    pub weather: Option<String>,
    #[crudcrate(filterable)]
    pub temperature: Option<String>,
    #[crudcrate(filterable, fulltext)]
    pub time_of_day: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext)]
    pub habitat: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext)]
    pub notes: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub order: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub family: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub subfamily: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub tribe: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub genus: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub species: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub subspecies: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub taxon: Option<TaxonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub identified: Option<bool>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub determiner: Option<PersonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub preparer: Option<PersonSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub collecting_trip: Option<CollectingTripSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub country: Option<CountrySummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub state: Option<StateSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub county: Option<CountySummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub locality: Option<LocalitySummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub gps: Option<GpsSummary>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub collected_date: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub full_date: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub num_date: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub collector: Option<Vec<PersonSummary>>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub collectors: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub temp_f: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub temp_c: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::collectors::Entity")]
    Collectors,
}

impl Related<super::collectors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collectors.def()
    }
}

impl Related<people::Entity> for Entity {
    fn to() -> RelationDef {
        super::collectors::Relation::People.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::collectors::Relation::SpecimenRecords.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn taxon_links(&self) -> TaxonLinks {
        TaxonLinks {
            order: self.order_id,
            family: self.family_id,
            subfamily: self.subfamily_id,
            tribe: self.tribe_id,
            genus: self.genus_id,
            species: self.species_id,
            subspecies: self.subspecies_id,
        }
    }
}

/// Collectors of a record in label order.
pub async fn record_collectors(
    db: &DatabaseConnection,
    record_id: Uuid,
) -> Result<Vec<people::Model>, DbErr> {
    let person_ids: Vec<Uuid> = collectors::Entity::find()
        .filter(collectors::Column::SpecimenRecordId.eq(record_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.person_id)
        .collect();
    if person_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut collected_by = people::Entity::find()
        .filter(people::Column::Id.is_in(person_ids))
        .all(db)
        .await?;
    collected_by.sort_by_cached_key(people::Model::person_name);

    Ok(collected_by)
}

/// Everything a record shows beyond its stored columns.
struct SpecimenDetails {
    order: Option<TaxonSummary>,
    family: Option<TaxonSummary>,
    subfamily: Option<TaxonSummary>,
    tribe: Option<TaxonSummary>,
    genus: Option<TaxonSummary>,
    species: Option<TaxonSummary>,
    subspecies: Option<TaxonSummary>,
    taxon: Option<TaxonSummary>,
    determiner: Option<PersonSummary>,
    preparer: Option<PersonSummary>,
    collecting_trip: Option<CollectingTripSummary>,
    country: Option<CountrySummary>,
    state: Option<StateSummary>,
    county: Option<CountySummary>,
    locality: Option<LocalitySummary>,
    gps: Option<GpsSummary>,
    collector: Vec<PersonSummary>,
    collectors: String,
}

async fn person_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<PersonSummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(people::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(PersonSummary::from))
}

async fn specimen_details(db: &DatabaseConnection, model: &Model) -> Result<SpecimenDetails, DbErr> {
    let order = linked_summary(db, model.order_id, Taxon::Order).await?;
    let family = linked_summary(db, model.family_id, Taxon::Family).await?;
    let subfamily = linked_summary(db, model.subfamily_id, Taxon::Subfamily).await?;
    let tribe = linked_summary(db, model.tribe_id, Taxon::Tribe).await?;
    let genus = linked_summary(db, model.genus_id, Taxon::Genus).await?;
    let species = linked_summary(db, model.species_id, Taxon::Species).await?;
    let subspecies = linked_summary(db, model.subspecies_id, Taxon::Subspecies).await?;

    let taxon = match model.taxon_links().most_specific() {
        Some(Taxon::Subspecies(_)) => subspecies.clone(),
        Some(Taxon::Species(_)) => species.clone(),
        Some(Taxon::Genus(_)) => genus.clone(),
        Some(Taxon::Tribe(_)) => tribe.clone(),
        Some(Taxon::Subfamily(_)) => subfamily.clone(),
        Some(Taxon::Family(_)) => family.clone(),
        Some(Taxon::Order(_)) => order.clone(),
        None => None,
    };

    let collected_by = record_collectors(db, model.id).await?;
    let names: Vec<_> = collected_by.iter().map(people::Model::person_name).collect();

    Ok(SpecimenDetails {
        taxon,
        order,
        family,
        subfamily,
        tribe,
        genus,
        species,
        subspecies,
        determiner: person_summary(db, model.determiner_id).await?,
        preparer: person_summary(db, model.preparer_id).await?,
        collecting_trip: collecting_trip_summary(db, model.collecting_trip_id).await?,
        country: country_summary(db, model.country_id).await?,
        state: state_summary(db, model.state_id).await?,
        county: county_summary(db, model.county_id).await?,
        locality: locality_summary(db, model.locality_id).await?,
        gps: gps_summary(db, model.gps_id).await?,
        collectors: collector_names(&names),
        collector: collected_by.into_iter().map(PersonSummary::from).collect(),
    })
}

/// Fills the derived fields shared by `SpecimenRecord` and `SpecimenRecordList`.
macro_rules! attach_details {
    ($record:ident, $model:expr, $details:expr) => {{
        let model = $model;
        let details = $details;
        $record.identified = Some(model.species_id.is_some());
        $record.collected_date = Some(collected_date(model.day, model.month, model.year));
        $record.full_date = Some(full_date(model.day, model.month, model.year));
        $record.num_date = Some(num_date(model.day, model.month, model.year));
        $record.temp_f = Some(temp_f(model.temperature.as_deref()));
        $record.temp_c = Some(temp_c(model.temperature.as_deref()));
        $record.order = details.order;
        $record.family = details.family;
        $record.subfamily = details.subfamily;
        $record.tribe = details.tribe;
        $record.genus = details.genus;
        $record.species = details.species;
        $record.subspecies = details.subspecies;
        $record.taxon = details.taxon;
        $record.determiner = details.determiner;
        $record.preparer = details.preparer;
        $record.collecting_trip = details.collecting_trip;
        $record.country = details.country;
        $record.state = details.state;
        $record.county = details.county;
        $record.locality = details.locality;
        $record.gps = details.gps;
        $record.collector = Some(details.collector);
        $record.collectors = Some(details.collectors);
    }};
}

/// Checks the record as it will be saved. `existing` is the stored row when updating, so
/// fields the request leaves out are validated with their stored values.
fn validate_specimen(record: &ActiveModel, existing: Option<&Model>) -> Result<(), DbErr> {
    let fail = |message: String| Err(DbErr::Custom(format!("Validation failed: {message}")));

    if merged(&record.usi, existing.map(|m| &m.usi)).is_some_and(|usi| usi.trim().is_empty()) {
        return fail("usi must not be blank".to_string());
    }

    let day = merged(&record.day, existing.map(|m| &m.day)).flatten();
    let month = merged(&record.month, existing.map(|m| &m.month)).flatten();
    let year = merged(&record.year, existing.map(|m| &m.year)).flatten();
    if let Err(message) = validate_date_parts(day, month, year) {
        return fail(message);
    }

    let determined_year =
        merged(&record.determined_year, existing.map(|m| &m.determined_year)).flatten();
    if let Some(determined_year) = determined_year {
        if let Err(message) = validate_year("determined_year", determined_year) {
            return fail(message);
        }
    }

    let temperature = merged(&record.temperature, existing.map(|m| &m.temperature)).flatten();
    if !is_valid_temperature(temperature.as_deref()) {
        return fail(format!(
            "temperature must be numeric degrees Fahrenheit, got '{}'",
            temperature.unwrap_or_default()
        ));
    }

    Ok(())
}

/// Replaces a missing value with `default`. On update only an explicit null counts as
/// missing; a field the request left out keeps its stored value.
fn fill_default<T>(value: &mut ActiveValue<Option<T>>, default: T, creating: bool)
where
    Option<T>: Into<Value>,
{
    let missing = match value {
        ActiveValue::Set(None) | ActiveValue::Unchanged(None) => true,
        ActiveValue::NotSet => creating,
        ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_)) => false,
    };
    if missing {
        *value = ActiveValue::Set(Some(default));
    }
}

/// Unset sex, stage and preparation fall back to unknown, adult and spread.
fn apply_defaults(record: &mut ActiveModel, creating: bool) {
    fill_default(&mut record.sex, Sex::Unknown, creating);
    fill_default(&mut record.stage, Stage::Adult, creating);
    fill_default(&mut record.preparation, Preparation::Spread, creating);
}

async fn get_one_specimen_record(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<SpecimenRecord, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Specimen record not found".to_string()))?;

    let details = specimen_details(db, &model).await?;
    let labels = model.clone();
    let mut record: SpecimenRecord = model.into();
    attach_details!(record, &labels, details);

    Ok(record)
}

async fn get_all_specimen_records(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<SpecimenRecordList>, DbErr> {
    let models = ordered(
        Entity::find().filter(condition.clone()),
        order_column,
        order_direction,
        &[Column::Usi],
    )
    .offset(offset)
    .limit(limit)
    .all(db)
    .await?;

    list_with_details(db, models).await
}

/// Records matching a search, ordered by USI.
pub async fn search_specimen_records(
    db: &DatabaseConnection,
    search: &SpecimenSearch,
) -> Result<Vec<SpecimenRecordList>, DbErr> {
    let models = Entity::find()
        .filter(search.condition())
        .order_by_asc(Column::Usi)
        .all(db)
        .await?
        .into_iter()
        .filter(|model| search.matches_full_date(model.day, model.month, model.year))
        .collect();

    list_with_details(db, models).await
}

async fn list_with_details(
    db: &DatabaseConnection,
    models: Vec<Model>,
) -> Result<Vec<SpecimenRecordList>, DbErr> {
    let mut records = Vec::with_capacity(models.len());
    for model in models {
        let details = specimen_details(db, &model).await?;
        let labels = model.clone();
        let mut record = SpecimenRecordList::from(model);
        attach_details!(record, &labels, details);
        records.push(record);
    }

    Ok(records)
}

async fn create_specimen_record(
    db: &DatabaseConnection,
    create_data: SpecimenRecordCreate,
) -> Result<SpecimenRecord, DbErr> {
    let mut active_model: ActiveModel = create_data.into();
    apply_defaults(&mut active_model, true);
    validate_specimen(&active_model, None)?;
    let inserted = active_model.insert(db).await?;

    SpecimenRecord::get_one(db, inserted.id).await
}

async fn update_specimen_record(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: SpecimenRecordUpdate,
) -> Result<SpecimenRecord, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Specimen record not found".to_string()))?;

    let mut updated = update_data.merge_into_activemodel(existing.clone().into_active_model())?;
    apply_defaults(&mut updated, false);
    validate_specimen(&updated, Some(&existing))?;
    updated.update(db).await?;

    SpecimenRecord::get_one(db, id).await
}
