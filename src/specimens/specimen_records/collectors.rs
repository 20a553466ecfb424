use sea_orm::entity::prelude::*;

/// Join table between specimen records and the people who collected them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "specimen_record_collectors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub specimen_record_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub person_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::models::Entity",
        from = "Column::SpecimenRecordId",
        to = "super::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SpecimenRecords,
    #[sea_orm(
        belongs_to = "crate::specimens::people::models::Entity",
        from = "Column::PersonId",
        to = "crate::specimens::people::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
}

impl Related<super::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecimenRecords.def()
    }
}

impl Related<crate::specimens::people::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
