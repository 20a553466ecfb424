use super::collecting_trips::{models as collecting_trips, trip_states};
use super::counties::models as counties;
use super::countries::models as countries;
use super::gps_coordinates::models as gps_coordinates;
use super::localities::models as localities;
use super::models::{
    CollectingTripSummary, CountrySummary, CountySummary, GpsSummary, LocalitySummary,
    ResolvedRegion, StateSummary,
};
use super::states::models as states;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub async fn country_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<CountrySummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(countries::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(CountrySummary::from))
}

pub async fn state_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<StateSummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(states::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(StateSummary::from))
}

/// The state a county belongs to; counties cannot exist without one.
pub async fn parent_state(db: &DatabaseConnection, state_id: Uuid) -> Result<states::Model, DbErr> {
    states::Entity::find_by_id(state_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("State '{state_id}' not found")))
}

pub async fn county_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<CountySummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };
    let Some(county) = counties::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let state = parent_state(db, county.state_id).await?;
    Ok(Some(CountySummary::new(&county, &state.name)))
}

/// Loads whichever of the three region links are set.
pub async fn resolve_region(
    db: &DatabaseConnection,
    country_id: Option<Uuid>,
    state_id: Option<Uuid>,
    county_id: Option<Uuid>,
) -> Result<ResolvedRegion, DbErr> {
    Ok(ResolvedRegion {
        country: country_summary(db, country_id).await?,
        state: state_summary(db, state_id).await?,
        county: county_summary(db, county_id).await?,
    })
}

pub async fn locality_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<LocalitySummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };
    let Some(locality) = localities::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let region = resolve_region(db, locality.country_id, locality.state_id, locality.county_id)
        .await?;
    Ok(Some(LocalitySummary::new(locality, &region)))
}

pub async fn gps_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<GpsSummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(gps_coordinates::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(GpsSummary::from))
}

pub async fn collecting_trip_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
) -> Result<Option<CollectingTripSummary>, DbErr> {
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(collecting_trips::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(CollectingTripSummary::from))
}

/// States visited on a trip, ordered by state name.
pub async fn visited_states(
    db: &DatabaseConnection,
    trip_id: Uuid,
) -> Result<Vec<StateSummary>, DbErr> {
    let links = trip_states::Entity::find()
        .filter(trip_states::Column::CollectingTripId.eq(trip_id))
        .all(db)
        .await?;
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let states = states::Entity::find()
        .filter(states::Column::Id.is_in(links.into_iter().map(|link| link.state_id)))
        .order_by_asc(states::Column::Name)
        .order_by_asc(states::Column::Id)
        .all(db)
        .await?;

    Ok(states.into_iter().map(StateSummary::from).collect())
}
