use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "unknown")]
    Unknown,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[sea_orm(string_value = "egg")]
    Egg,
    #[sea_orm(string_value = "larva")]
    Larva,
    #[sea_orm(string_value = "nymph")]
    Nymph,
    #[sea_orm(string_value = "pupa")]
    Pupa,
    #[sea_orm(string_value = "adult")]
    Adult,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "snake_case")]
pub enum Preparation {
    #[sea_orm(string_value = "spread")]
    Spread,
    #[sea_orm(string_value = "pinned")]
    Pinned,
    #[sea_orm(string_value = "minuten")]
    Minuten,
    #[sea_orm(string_value = "pointed")]
    Pointed,
    #[sea_orm(string_value = "envelope")]
    Envelope,
    #[sea_orm(string_value = "container")]
    Container,
    #[sea_orm(string_value = "alcohol")]
    Alcohol,
}

/// How a specimen was caught.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Method {
    #[sea_orm(string_value = "Net")]
    #[serde(rename = "Net")]
    Net,
    #[sea_orm(string_value = "Reared")]
    #[serde(rename = "Reared")]
    Reared,
    #[sea_orm(string_value = "Trap")]
    #[serde(rename = "Trap")]
    Trap,
    #[sea_orm(string_value = "UV trap")]
    #[serde(rename = "UV trap")]
    UvTrap,
    #[sea_orm(string_value = "Light")]
    #[serde(rename = "Light")]
    Light,
    #[sea_orm(string_value = "MV light")]
    #[serde(rename = "MV light")]
    MvLight,
    #[sea_orm(string_value = "MV light sheet")]
    #[serde(rename = "MV light sheet")]
    MvLightSheet,
    #[sea_orm(string_value = "UV light")]
    #[serde(rename = "UV light")]
    UvLight,
    #[sea_orm(string_value = "UV light sheet")]
    #[serde(rename = "UV light sheet")]
    UvLightSheet,
    #[sea_orm(string_value = "UV/MV light sheet")]
    #[serde(rename = "UV/MV light sheet")]
    UvMvLightSheet,
    #[sea_orm(string_value = "UV/MV/LED light sheet")]
    #[serde(rename = "UV/MV/LED light sheet")]
    UvMvLedLightSheet,
    #[sea_orm(string_value = "Bait")]
    #[serde(rename = "Bait")]
    Bait,
    #[sea_orm(string_value = "By hand")]
    #[serde(rename = "By hand")]
    ByHand,
    #[sea_orm(string_value = "Sweep")]
    #[serde(rename = "Sweep")]
    Sweep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_uses_label_text() {
        assert_eq!(
            serde_json::to_value(Method::UvMvLedLightSheet).unwrap(),
            "UV/MV/LED light sheet"
        );
        assert_eq!(Method::ByHand.to_value(), "By hand");
        let parsed: Method = serde_json::from_str("\"MV light sheet\"").unwrap();
        assert_eq!(parsed, Method::MvLightSheet);
    }

    #[test]
    fn test_sex_and_stage_are_lowercase() {
        assert_eq!(serde_json::to_value(Sex::Unknown).unwrap(), "unknown");
        assert_eq!(serde_json::to_value(Stage::Adult).unwrap(), "adult");
        assert_eq!(Preparation::Minuten.to_value(), "minuten");
    }
}
