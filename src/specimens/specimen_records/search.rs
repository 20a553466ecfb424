use super::collectors;
use super::enums::{Preparation, Sex, Stage};
use super::models::Column;
use crate::geography::{
    collecting_trips::models as collecting_trips, counties::models as counties,
    countries::models as countries, gps_coordinates::models as gps_coordinates,
    localities::models as localities, states::models as states,
};
use crate::specimens::dates::{Month, full_date};
use crate::specimens::people::models as people;
use crate::taxonomy::{
    families::models as families, genera::models as genera, orders::models as orders,
    species::models as species, subfamilies::models as subfamilies,
    subspecies::models as subspecies, tribes::models as tribes,
};
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, Query, SelectStatement, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the specimen search. Text filters match any part of
/// the value, ignoring case. `usi`, the numbers, dates, flags and choices match exactly.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SpecimenSearch {
    pub usi: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub subfamily: Option<String>,
    pub tribe: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub subspecies: Option<String>,
    /// Name of the most specific taxon
    pub taxon: Option<String>,
    /// Common name of the most specific taxon
    pub common_name: Option<String>,
    pub determiner_lastname: Option<String>,
    pub determiner_firstname: Option<String>,
    pub determined_year: Option<i32>,
    pub sex: Option<Sex>,
    pub stage: Option<Stage>,
    pub preparer_lastname: Option<String>,
    pub preparer_firstname: Option<String>,
    pub preparation: Option<Preparation>,
    pub preparation_date: Option<NaiveDate>,
    pub labels_printed: Option<bool>,
    pub labeled: Option<bool>,
    pub photographed: Option<bool>,
    pub collector_lastname: Option<String>,
    pub collector_firstname: Option<String>,
    pub collecting_trip: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    /// Matches the locality name or its town
    pub locality: Option<String>,
    pub gps_lat: Option<String>,
    pub gps_long: Option<String>,
    pub elevation: Option<String>,
    pub day: Option<i32>,
    pub month: Option<Month>,
    pub year: Option<i32>,
    /// Matches the long date label, e.g. "June 2006"
    pub full_date: Option<String>,
    pub method: Option<String>,
    pub weather: Option<String>,
    pub temperature: Option<String>,
    pub time_of_day: Option<String>,
    pub habitat: Option<String>,
    pub notes: Option<String>,
}

const LIKE_ESCAPE: char = '!';

fn term(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `%value%`, lowercased, with the LIKE wildcards in `value` escaped so they match literally.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.to_lowercase().chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn contains<C: IntoColumnRef>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(like_pattern(value)).escape(LIKE_ESCAPE))
}

/// `SELECT id FROM <entity> WHERE <condition>`
fn ids_where<E: EntityTrait, C: IntoColumnRef>(
    entity: E,
    id_column: C,
    condition: Condition,
) -> SelectStatement {
    Query::select()
        .column(id_column)
        .from(entity)
        .cond_where(condition)
        .to_owned()
}

fn named<E: EntityTrait, C: IntoColumnRef + Copy>(
    entity: E,
    id_column: C,
    name_column: C,
    value: &str,
) -> SelectStatement {
    ids_where(
        entity,
        id_column,
        Condition::all().add(contains(name_column, value)),
    )
}

/// Each taxon level from subspecies up to order: the record's link column and the ids of the
/// nodes whose name (or common name) contains `value`.
fn taxon_levels(value: &str, common_name: bool) -> [(Column, SelectStatement); 7] {
    macro_rules! level {
        ($link:expr, $module:ident) => {
            (
                $link,
                named(
                    $module::Entity,
                    $module::Column::Id,
                    if common_name {
                        $module::Column::CommonName
                    } else {
                        $module::Column::Name
                    },
                    value,
                ),
            )
        };
    }

    [
        level!(Column::SubspeciesId, subspecies),
        level!(Column::SpeciesId, species),
        level!(Column::GenusId, genera),
        level!(Column::TribeId, tribes),
        level!(Column::SubfamilyId, subfamilies),
        level!(Column::FamilyId, families),
        level!(Column::OrderId, orders),
    ]
}

/// Matches when the most specific level a record links to is one of the matching nodes.
fn most_specific_taxon(levels: [(Column, SelectStatement); 7]) -> Condition {
    let mut any = Condition::any();
    let mut finer = Vec::with_capacity(levels.len());
    for (link, matching) in levels {
        let level = finer
            .iter()
            .fold(Condition::all(), |level, column: &Column| level.add(column.is_null()));
        any = any.add(level.add(link.in_subquery(matching)));
        finer.push(link);
    }
    any
}

impl SpecimenSearch {
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(usi) = term(&self.usi) {
            condition = condition.add(Column::Usi.eq(usi));
        }

        let text_columns = [
            (&self.method, Column::Method),
            (&self.weather, Column::Weather),
            (&self.temperature, Column::Temperature),
            (&self.time_of_day, Column::TimeOfDay),
            (&self.habitat, Column::Habitat),
            (&self.notes, Column::Notes),
        ];
        for (value, column) in text_columns {
            if let Some(value) = term(value) {
                condition = condition.add(contains(column, value));
            }
        }

        if let Some(value) = term(&self.order) {
            condition = condition.add(Column::OrderId.in_subquery(named(
                orders::Entity,
                orders::Column::Id,
                orders::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.family) {
            condition = condition.add(Column::FamilyId.in_subquery(named(
                families::Entity,
                families::Column::Id,
                families::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.subfamily) {
            condition = condition.add(Column::SubfamilyId.in_subquery(named(
                subfamilies::Entity,
                subfamilies::Column::Id,
                subfamilies::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.tribe) {
            condition = condition.add(Column::TribeId.in_subquery(named(
                tribes::Entity,
                tribes::Column::Id,
                tribes::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.genus) {
            condition = condition.add(Column::GenusId.in_subquery(named(
                genera::Entity,
                genera::Column::Id,
                genera::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.species) {
            condition = condition.add(Column::SpeciesId.in_subquery(named(
                species::Entity,
                species::Column::Id,
                species::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.subspecies) {
            condition = condition.add(Column::SubspeciesId.in_subquery(named(
                subspecies::Entity,
                subspecies::Column::Id,
                subspecies::Column::Name,
                value,
            )));
        }

        if let Some(people) = people_matching(&self.determiner_lastname, &self.determiner_firstname) {
            condition = condition.add(Column::DeterminerId.in_subquery(people));
        }
        if let Some(people) = people_matching(&self.preparer_lastname, &self.preparer_firstname) {
            condition = condition.add(Column::PreparerId.in_subquery(people));
        }
        if let Some(people) = people_matching(&self.collector_lastname, &self.collector_firstname) {
            let collected = ids_where(
                collectors::Entity,
                collectors::Column::SpecimenRecordId,
                Condition::all().add(collectors::Column::PersonId.in_subquery(people)),
            );
            condition = condition.add(Column::Id.in_subquery(collected));
        }

        if let Some(value) = term(&self.collecting_trip) {
            condition = condition.add(Column::CollectingTripId.in_subquery(named(
                collecting_trips::Entity,
                collecting_trips::Column::Id,
                collecting_trips::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.country) {
            condition = condition.add(Column::CountryId.in_subquery(named(
                countries::Entity,
                countries::Column::Id,
                countries::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.state) {
            condition = condition.add(Column::StateId.in_subquery(named(
                states::Entity,
                states::Column::Id,
                states::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.county) {
            condition = condition.add(Column::CountyId.in_subquery(named(
                counties::Entity,
                counties::Column::Id,
                counties::Column::Name,
                value,
            )));
        }
        if let Some(value) = term(&self.locality) {
            let localities = ids_where(
                localities::Entity,
                localities::Column::Id,
                Condition::any()
                    .add(contains(localities::Column::Name, value))
                    .add(contains(localities::Column::Town, value)),
            );
            condition = condition.add(Column::LocalityId.in_subquery(localities));
        }

        if let Some(value) = term(&self.taxon) {
            condition = condition.add(most_specific_taxon(taxon_levels(value, false)));
        }
        if let Some(value) = term(&self.common_name) {
            condition = condition.add(most_specific_taxon(taxon_levels(value, true)));
        }

        let gps_columns = [
            (&self.gps_lat, gps_coordinates::Column::Latitude),
            (&self.gps_long, gps_coordinates::Column::Longitude),
            (&self.elevation, gps_coordinates::Column::Elevation),
        ];
        for (value, column) in gps_columns {
            if let Some(value) = term(value) {
                condition = condition.add(Column::GpsId.in_subquery(named(
                    gps_coordinates::Entity,
                    gps_coordinates::Column::Id,
                    column,
                    value,
                )));
            }
        }

        let numbers = [
            (self.determined_year, Column::DeterminedYear),
            (self.day, Column::Day),
            (self.year, Column::Year),
        ];
        for (value, column) in numbers {
            if let Some(value) = value {
                condition = condition.add(column.eq(value));
            }
        }

        let flags = [
            (self.labels_printed, Column::LabelsPrinted),
            (self.labeled, Column::Labeled),
            (self.photographed, Column::Photographed),
        ];
        for (value, column) in flags {
            if let Some(value) = value {
                condition = condition.add(column.eq(value));
            }
        }

        if let Some(month) = self.month {
            condition = condition.add(Column::Month.eq(month));
        }
        if let Some(sex) = self.sex {
            condition = condition.add(Column::Sex.eq(sex));
        }
        if let Some(stage) = self.stage {
            condition = condition.add(Column::Stage.eq(stage));
        }
        if let Some(preparation) = self.preparation {
            condition = condition.add(Column::Preparation.eq(preparation));
        }
        if let Some(preparation_date) = self.preparation_date {
            condition = condition.add(Column::PreparationDate.eq(preparation_date));
        }

        condition
    }

    /// `full_date` is derived on read, so it is matched after the query.
    pub fn matches_full_date(
        &self,
        day: Option<i32>,
        month: Option<Month>,
        year: Option<i32>,
    ) -> bool {
        term(&self.full_date).is_none_or(|value| {
            full_date(day, month, year)
                .to_lowercase()
                .contains(&value.to_lowercase())
        })
    }
}

/// Ids of people whose names contain both given parts, if any part is given.
fn people_matching(
    last_name: &Option<String>,
    first_name: &Option<String>,
) -> Option<SelectStatement> {
    let last_name = term(last_name);
    let first_name = term(first_name);
    if last_name.is_none() && first_name.is_none() {
        return None;
    }

    let mut condition = Condition::all();
    if let Some(value) = last_name {
        condition = condition.add(contains(people::Column::LastName, value));
    }
    if let Some(value) = first_name {
        condition = condition.add(contains(people::Column::FirstName, value));
    }

    Some(ids_where(people::Entity, people::Column::Id, condition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    fn sql(search: &SpecimenSearch) -> String {
        super::super::models::Entity::find()
            .filter(search.condition())
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn test_empty_search_has_no_conditions() {
        assert!(SpecimenSearch::default().condition().is_empty());
    }

    #[test]
    fn test_blank_terms_are_ignored() {
        let search = SpecimenSearch {
            usi: Some("   ".to_string()),
            genus: Some(String::new()),
            taxon: Some("\t".to_string()),
            ..Default::default()
        };
        assert!(search.condition().is_empty());
    }

    #[test]
    fn test_text_filters_ignore_case() {
        let search = SpecimenSearch {
            weather: Some("SuNNy".to_string()),
            ..Default::default()
        };
        let sql = sql(&search);
        assert!(sql.contains("LOWER(\"weather\") LIKE '%sunny%'"), "{sql}");
    }

    #[test]
    fn test_usi_matches_exactly() {
        let search = SpecimenSearch {
            usi: Some(" KLM-0101 ".to_string()),
            ..Default::default()
        };
        let sql = sql(&search);
        assert!(sql.contains("\"usi\" = 'KLM-0101'"), "{sql}");
        assert!(!sql.contains("LIKE"), "{sql}");
    }

    #[test]
    fn test_wildcards_in_terms_are_escaped() {
        assert_eq!(like_pattern("50%"), "%50!%%");
        assert_eq!(like_pattern("a_b"), "%a!_b%");
        assert_eq!(like_pattern("Hi!"), "%hi!!%");

        let search = SpecimenSearch {
            notes: Some("_".to_string()),
            ..Default::default()
        };
        let sql = sql(&search);
        assert!(sql.contains("LIKE '%!_%' ESCAPE '!'"), "{sql}");
    }

    #[test]
    fn test_linked_filters_use_subqueries() {
        let search = SpecimenSearch {
            genus: Some("papilio".to_string()),
            collector_lastname: Some("Smith".to_string()),
            elevation: Some("3157".to_string()),
            ..Default::default()
        };
        let sql = sql(&search);
        assert!(sql.contains("\"genus_id\" IN (SELECT \"id\" FROM \"genera\""), "{sql}");
        assert!(sql.contains("FROM \"specimen_record_collectors\""), "{sql}");
        assert!(sql.contains("LOWER(\"last_name\") LIKE '%smith%'"), "{sql}");
        assert!(sql.contains("\"gps_id\" IN (SELECT \"id\" FROM \"gps_coordinates\""), "{sql}");
    }

    #[test]
    fn test_full_date_matches_derived_label() {
        let search = SpecimenSearch {
            full_date: Some("june 2006".to_string()),
            ..Default::default()
        };
        assert!(search.matches_full_date(Some(26), Some(Month::June), Some(2006)));
        assert!(!search.matches_full_date(Some(26), Some(Month::July), Some(2006)));
        assert!(!search.matches_full_date(None, None, None));
        assert!(SpecimenSearch::default().matches_full_date(None, None, None));
    }
}
