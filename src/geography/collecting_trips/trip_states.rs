use sea_orm::entity::prelude::*;

/// Join table between collecting trips and the states they visited.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collecting_trip_states")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collecting_trip_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub state_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::models::Entity",
        from = "Column::CollectingTripId",
        to = "super::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CollectingTrips,
    #[sea_orm(
        belongs_to = "crate::geography::states::models::Entity",
        from = "Column::StateId",
        to = "crate::geography::states::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    States,
}

impl Related<super::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectingTrips.def()
    }
}

impl Related<crate::geography::states::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::States.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
