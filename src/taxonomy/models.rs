//! Levels of the taxonomic tree and the compact form used to nest a taxon
//! inside other resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaxonLevel {
    Order,
    Family,
    Subfamily,
    Tribe,
    Genus,
    Species,
    Subspecies,
}

/// A reference to one node of the tree, tagged with its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Taxon {
    Order(Uuid),
    Family(Uuid),
    Subfamily(Uuid),
    Tribe(Uuid),
    Genus(Uuid),
    Species(Uuid),
    Subspecies(Uuid),
}

impl Taxon {
    pub fn level(&self) -> TaxonLevel {
        match self {
            Taxon::Order(_) => TaxonLevel::Order,
            Taxon::Family(_) => TaxonLevel::Family,
            Taxon::Subfamily(_) => TaxonLevel::Subfamily,
            Taxon::Tribe(_) => TaxonLevel::Tribe,
            Taxon::Genus(_) => TaxonLevel::Genus,
            Taxon::Species(_) => TaxonLevel::Species,
            Taxon::Subspecies(_) => TaxonLevel::Subspecies,
        }
    }

    pub fn id(&self) -> Uuid {
        match *self {
            Taxon::Order(id)
            | Taxon::Family(id)
            | Taxon::Subfamily(id)
            | Taxon::Tribe(id)
            | Taxon::Genus(id)
            | Taxon::Species(id)
            | Taxon::Subspecies(id) => id,
        }
    }
}

/// The optional taxonomy links carried by a specimen record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaxonLinks {
    pub order: Option<Uuid>,
    pub family: Option<Uuid>,
    pub subfamily: Option<Uuid>,
    pub tribe: Option<Uuid>,
    pub genus: Option<Uuid>,
    pub species: Option<Uuid>,
    pub subspecies: Option<Uuid>,
}

impl TaxonLinks {
    /// The deepest level that is set, searching from subspecies up to order.
    pub fn most_specific(&self) -> Option<Taxon> {
        self.subspecies
            .map(Taxon::Subspecies)
            .or_else(|| self.species.map(Taxon::Species))
            .or_else(|| self.genus.map(Taxon::Genus))
            .or_else(|| self.tribe.map(Taxon::Tribe))
            .or_else(|| self.subfamily.map(Taxon::Subfamily))
            .or_else(|| self.family.map(Taxon::Family))
            .or_else(|| self.order.map(Taxon::Order))
    }
}

/// `name` is the binomial for species and the trinomial for subspecies.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaxonSummary {
    pub level: TaxonLevel,
    pub id: Uuid,
    pub name: String,
    pub common_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_specific_prefers_deepest_level() {
        let order = Uuid::new_v4();
        let genus = Uuid::new_v4();
        let subspecies = Uuid::new_v4();

        let mut links = TaxonLinks {
            order: Some(order),
            genus: Some(genus),
            subspecies: Some(subspecies),
            ..Default::default()
        };
        assert_eq!(links.most_specific(), Some(Taxon::Subspecies(subspecies)));

        links.subspecies = None;
        assert_eq!(links.most_specific(), Some(Taxon::Genus(genus)));

        links.genus = None;
        let taxon = links.most_specific().unwrap();
        assert_eq!(taxon.level(), TaxonLevel::Order);
        assert_eq!(taxon.id(), order);
    }

    #[test]
    fn test_no_links_means_no_taxon() {
        assert_eq!(TaxonLinks::default().most_specific(), None);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let value = serde_json::to_value(TaxonLevel::Subfamily).unwrap();
        assert_eq!(value, "subfamily");
    }
}
