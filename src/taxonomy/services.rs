use super::families::models as families;
use super::genera::models as genera;
use super::models::{Taxon, TaxonSummary};
use super::names::{binomial, trinomial};
use super::orders::models as orders;
use super::species::models as species;
use super::subfamilies::models as subfamilies;
use super::subspecies::models as subspecies;
use super::tribes::models as tribes;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Genus name followed by the species epithet.
pub async fn species_binomial(
    db: &DatabaseConnection,
    model: &species::Model,
) -> Result<String, DbErr> {
    let genus = genera::Entity::find_by_id(model.genus_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Genus '{}' not found", model.genus_id)))?;

    Ok(binomial(&genus.name, &model.name))
}

/// Species binomial followed by the subspecies epithet.
pub async fn subspecies_trinomial(
    db: &DatabaseConnection,
    model: &subspecies::Model,
) -> Result<String, DbErr> {
    let parent = species::Entity::find_by_id(model.species_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("Species '{}' not found", model.species_id))
        })?;

    Ok(trinomial(&species_binomial(db, &parent).await?, &model.name))
}

pub async fn taxon_summary(
    db: &DatabaseConnection,
    taxon: Taxon,
) -> Result<Option<TaxonSummary>, DbErr> {
    let found = match taxon {
        Taxon::Order(id) => orders::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| (m.name, m.common_name)),
        Taxon::Family(id) => families::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| (m.name, m.common_name)),
        Taxon::Subfamily(id) => subfamilies::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| (m.name, m.common_name)),
        Taxon::Tribe(id) => tribes::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| (m.name, m.common_name)),
        Taxon::Genus(id) => genera::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|m| (m.name, m.common_name)),
        Taxon::Species(id) => match species::Entity::find_by_id(id).one(db).await? {
            Some(model) => {
                let name = species_binomial(db, &model).await?;
                Some((name, model.common_name))
            }
            None => None,
        },
        Taxon::Subspecies(id) => match subspecies::Entity::find_by_id(id).one(db).await? {
            Some(model) => {
                let name = subspecies_trinomial(db, &model).await?;
                Some((name, model.common_name))
            }
            None => None,
        },
    };

    Ok(found.map(|(name, common_name)| TaxonSummary {
        level: taxon.level(),
        id: taxon.id(),
        name,
        common_name,
    }))
}

/// Summary of an optional link, e.g. `linked_summary(db, record.genus_id, Taxon::Genus)`.
pub async fn linked_summary(
    db: &DatabaseConnection,
    id: Option<Uuid>,
    taxon: fn(Uuid) -> Taxon,
) -> Result<Option<TaxonSummary>, DbErr> {
    match id {
        Some(id) => taxon_summary(db, taxon(id)).await,
        None => Ok(None),
    }
}
