//! Compact forms of geography records nested inside other resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CountrySummary {
    pub id: Uuid,
    pub name: String,
    pub abbr: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct StateSummary {
    pub id: Uuid,
    pub name: String,
    pub abbr: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CountySummary {
    pub id: Uuid,
    pub name: String,
    pub abbr: String,
    pub county_line: String,
    pub full_name: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct LocalitySummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub range: Option<String>,
    pub town: Option<String>,
    pub display_name: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct GpsSummary {
    pub id: Uuid,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub elevation: String,
    pub elevation_meters: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CollectingTripSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// The region a record hangs off, with the parents needed to label it.
#[derive(Clone, Debug, Default)]
pub struct ResolvedRegion {
    pub country: Option<CountrySummary>,
    pub state: Option<StateSummary>,
    pub county: Option<CountySummary>,
}

impl ResolvedRegion {
    /// County full name, else state abbreviation, else country abbreviation.
    pub fn label(&self) -> Option<&str> {
        if let Some(county) = &self.county {
            Some(county.full_name.as_str())
        } else if let Some(state) = &self.state {
            Some(state.abbr.as_str())
        } else {
            self.country.as_ref().map(|country| country.abbr.as_str())
        }
    }
}
