use crate::common::models::{ordered, stored};
use crate::specimens::models::PersonSummary;
use crate::specimens::names::PersonName;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, IntoActiveModel, QuerySelect};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "people")]
#[crudcrate(
    generate_router,
    api_struct = "Person",
    name_singular = "person",
    name_plural = "people",
    description = "People who collect, determine or prepare specimens. Full and label (collector) names are derived on every read.",
    fn_get_one = get_one_person,
    fn_get_all = get_all_people,
    fn_create = create_person,
    fn_update = update_person,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub first_name: String,
    #[crudcrate(filterable)]
    pub middle_initial: Option<String>,
    #[crudcrate(sortable, filterable, fulltext)]
    pub last_name: String,
    #[crudcrate(filterable)]
    pub suffix: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub date_created: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub date_modified: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub full_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub collector_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::specimens::specimen_records::collectors::Entity")]
    Collected,
}

impl Related<crate::specimens::specimen_records::collectors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collected.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MAX_SUFFIX_CHARS: usize = 5;

impl Model {
    pub fn person_name(&self) -> PersonName {
        PersonName::new(
            &self.first_name,
            self.middle_initial.as_deref(),
            &self.last_name,
            self.suffix.as_deref(),
        )
    }
}

impl From<Model> for PersonSummary {
    fn from(model: Model) -> Self {
        let name = model.person_name();
        Self {
            full_name: name.full_name(),
            collector_name: name.collector_name(),
            id: model.id,
            first_name: model.first_name,
            middle_initial: model.middle_initial,
            last_name: model.last_name,
            suffix: model.suffix,
        }
    }
}

/// Names must be non-blank; the middle initial is one letter.
fn validate_person(person: &ActiveModel) -> Result<(), DbErr> {
    let fail = |message: &str| Err(DbErr::Custom(format!("Validation failed: {message}")));

    if stored(&person.first_name).is_some_and(|name| name.trim().is_empty()) {
        return fail("first_name must not be blank");
    }
    if stored(&person.last_name).is_some_and(|name| name.trim().is_empty()) {
        return fail("last_name must not be blank");
    }
    if let Some(Some(initial)) = stored(&person.middle_initial) {
        if initial.trim().chars().count() > 1 {
            return fail("middle_initial must be a single letter");
        }
    }
    if let Some(Some(suffix)) = stored(&person.suffix) {
        if suffix.trim().chars().count() > MAX_SUFFIX_CHARS {
            return fail("suffix must be at most 5 characters");
        }
    }

    Ok(())
}

async fn get_one_person(db: &DatabaseConnection, id: Uuid) -> Result<Person, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Person not found".to_string()))?;

    let name = model.person_name();
    let mut person: Person = model.into();
    person.full_name = Some(name.full_name());
    person.collector_name = Some(name.collector_name());

    Ok(person)
}

async fn get_all_people(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<PersonList>, DbErr> {
    let models = ordered(
        Entity::find().filter(condition.clone()),
        order_column,
        order_direction,
        &[Column::LastName, Column::FirstName],
    )
    .offset(offset)
    .limit(limit)
    .all(db)
    .await?;

    Ok(models
        .into_iter()
        .map(|model| {
            let name = model.person_name();
            let mut person = PersonList::from(model);
            person.full_name = Some(name.full_name());
            person.collector_name = Some(name.collector_name());
            person
        })
        .collect())
}

async fn create_person(db: &DatabaseConnection, create_data: PersonCreate) -> Result<Person, DbErr> {
    let active_model: ActiveModel = create_data.into();
    validate_person(&active_model)?;
    let inserted = active_model.insert(db).await?;

    Person::get_one(db, inserted.id).await
}

async fn update_person(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: PersonUpdate,
) -> Result<Person, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Person not found".to_string()))?;

    let updated = update_data.merge_into_activemodel(existing.into_active_model())?;
    validate_person(&updated)?;
    updated.update(db).await?;

    Person::get_one(db, id).await
}
