use crate::config::Config;
use sea_orm::{ActiveValue, EntityTrait, IdenStatic, Order, QueryOrder, Select, Value};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Serialize, Default)]
pub struct UIConfiguration {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub realm: String,
    pub url: String,
    pub deployment: String,
}

impl From<&Config> for UIConfiguration {
    fn from(config: &Config) -> Self {
        Self {
            client_id: config.keycloak_ui_id.clone(),
            realm: config.keycloak_realm.clone(),
            url: config.keycloak_url.clone(),
            deployment: config.deployment.clone(),
        }
    }
}

#[derive(ToSchema, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
}

/// The value an active model will hold once saved, if it has one.
pub fn stored<T: Clone + Into<Value>>(value: &ActiveValue<T>) -> Option<T> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v.clone()),
        ActiveValue::NotSet => None,
    }
}

/// The value a record holds after a save: what the request sets, else what is already stored.
///
/// crudcrate's update merge leaves every field the client did not send as `NotSet`, so
/// validation of an update must fall back to the existing row.
pub fn merged<T>(value: &ActiveValue<T>, existing: Option<&T>) -> Option<T>
where
    T: Clone + Into<Value>,
{
    stored(value).or_else(|| existing.cloned())
}

/// Applies the client's `sort` when one was sent, else the resource's default order.
///
/// crudcrate falls back to the `id` column when no sort is requested, so an `id` order column
/// means the client asked for nothing. The default keys also break ties under a client sort.
pub fn ordered<E: EntityTrait>(
    query: Select<E>,
    order_column: E::Column,
    order_direction: Order,
    default_order: &[E::Column],
) -> Select<E> {
    let query = if order_column.as_str() == "id" {
        query
    } else {
        query.order_by(order_column, order_direction)
    };

    default_order
        .iter()
        .fold(query, |query, column| query.order_by_asc(*column))
}
