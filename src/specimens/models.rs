use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A person as nested in specimen records, with both name forms.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PersonSummary {
    pub id: Uuid,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub full_name: String,
    pub collector_name: String,
}
