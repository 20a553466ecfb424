use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).uuid().not_null().primary_key().to_owned()
}

fn timestamp_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Name, common name and authority are shared by every taxon level.
fn taxon_table<T: IntoIden + Copy + 'static>(
    table: T,
    id: T,
    name: T,
    common_name: T,
    authority: T,
    date_created: T,
    date_modified: T,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(id_column(id))
        .col(ColumnDef::new(name).string_len(100).not_null())
        .col(ColumnDef::new(common_name).string_len(100))
        .col(ColumnDef::new(authority).string_len(100).not_null())
        .col(timestamp_column(date_created))
        .col(timestamp_column(date_modified))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============ GEOGRAPHY ============
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(id_column(Countries::Id))
                    .col(ColumnDef::new(Countries::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Countries::Abbr).string_len(3).not_null())
                    .col(timestamp_column(Countries::DateCreated))
                    .col(timestamp_column(Countries::DateModified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(States::Table)
                    .if_not_exists()
                    .col(id_column(States::Id))
                    .col(ColumnDef::new(States::CountryId).uuid().not_null())
                    .col(ColumnDef::new(States::Name).string_len(50).not_null())
                    .col(ColumnDef::new(States::Abbr).string_len(10).not_null())
                    .col(timestamp_column(States::DateCreated))
                    .col(timestamp_column(States::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_states_country_id")
                            .from(States::Table, States::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Counties::Table)
                    .if_not_exists()
                    .col(id_column(Counties::Id))
                    .col(ColumnDef::new(Counties::StateId).uuid().not_null())
                    .col(ColumnDef::new(Counties::Name).string_len(50).not_null())
                    .col(timestamp_column(Counties::DateCreated))
                    .col(timestamp_column(Counties::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counties_state_id")
                            .from(Counties::Table, Counties::StateId)
                            .to(States::Table, States::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Localities::Table)
                    .if_not_exists()
                    .col(id_column(Localities::Id))
                    .col(ColumnDef::new(Localities::CountryId).uuid())
                    .col(ColumnDef::new(Localities::StateId).uuid())
                    .col(ColumnDef::new(Localities::CountyId).uuid())
                    .col(ColumnDef::new(Localities::Name).string_len(100))
                    .col(ColumnDef::new(Localities::Range).string_len(10))
                    .col(ColumnDef::new(Localities::Town).string_len(50))
                    .col(timestamp_column(Localities::DateCreated))
                    .col(timestamp_column(Localities::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_localities_country_id")
                            .from(Localities::Table, Localities::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_localities_state_id")
                            .from(Localities::Table, Localities::StateId)
                            .to(States::Table, States::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_localities_county_id")
                            .from(Localities::Table, Localities::CountyId)
                            .to(Counties::Table, Counties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GpsCoordinates::Table)
                    .if_not_exists()
                    .col(id_column(GpsCoordinates::Id))
                    .col(ColumnDef::new(GpsCoordinates::LocalityId).uuid().not_null())
                    .col(ColumnDef::new(GpsCoordinates::Latitude).string_len(20))
                    .col(ColumnDef::new(GpsCoordinates::Longitude).string_len(20))
                    .col(
                        ColumnDef::new(GpsCoordinates::Elevation)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(timestamp_column(GpsCoordinates::DateCreated))
                    .col(timestamp_column(GpsCoordinates::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gps_coordinates_locality_id")
                            .from(GpsCoordinates::Table, GpsCoordinates::LocalityId)
                            .to(Localities::Table, Localities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollectingTrips::Table)
                    .if_not_exists()
                    .col(id_column(CollectingTrips::Id))
                    .col(
                        ColumnDef::new(CollectingTrips::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CollectingTrips::StartDate).date().not_null())
                    .col(ColumnDef::new(CollectingTrips::EndDate).date().not_null())
                    .col(ColumnDef::new(CollectingTrips::Notes).text())
                    .col(timestamp_column(CollectingTrips::DateCreated))
                    .col(timestamp_column(CollectingTrips::DateModified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollectingTripStates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollectingTripStates::CollectingTripId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollectingTripStates::StateId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CollectingTripStates::CollectingTripId)
                            .col(CollectingTripStates::StateId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collecting_trip_states_trip_id")
                            .from(
                                CollectingTripStates::Table,
                                CollectingTripStates::CollectingTripId,
                            )
                            .to(CollectingTrips::Table, CollectingTrips::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collecting_trip_states_state_id")
                            .from(CollectingTripStates::Table, CollectingTripStates::StateId)
                            .to(States::Table, States::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // ============ TAXONOMY ============
        manager
            .create_table(taxon_table(
                Orders::Table,
                Orders::Id,
                Orders::Name,
                Orders::CommonName,
                Orders::Authority,
                Orders::DateCreated,
                Orders::DateModified,
            ))
            .await?;

        let mut families = taxon_table(
            Families::Table,
            Families::Id,
            Families::Name,
            Families::CommonName,
            Families::Authority,
            Families::DateCreated,
            Families::DateModified,
        );
        families
            .col(ColumnDef::new(Families::OrderId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_families_order_id")
                    .from(Families::Table, Families::OrderId)
                    .to(Orders::Table, Orders::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(families).await?;

        let mut subfamilies = taxon_table(
            Subfamilies::Table,
            Subfamilies::Id,
            Subfamilies::Name,
            Subfamilies::CommonName,
            Subfamilies::Authority,
            Subfamilies::DateCreated,
            Subfamilies::DateModified,
        );
        subfamilies
            .col(ColumnDef::new(Subfamilies::FamilyId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_subfamilies_family_id")
                    .from(Subfamilies::Table, Subfamilies::FamilyId)
                    .to(Families::Table, Families::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(subfamilies).await?;

        let mut tribes = taxon_table(
            Tribes::Table,
            Tribes::Id,
            Tribes::Name,
            Tribes::CommonName,
            Tribes::Authority,
            Tribes::DateCreated,
            Tribes::DateModified,
        );
        tribes
            .col(ColumnDef::new(Tribes::SubfamilyId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_tribes_subfamily_id")
                    .from(Tribes::Table, Tribes::SubfamilyId)
                    .to(Subfamilies::Table, Subfamilies::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(tribes).await?;

        let mut genera = taxon_table(
            Genera::Table,
            Genera::Id,
            Genera::Name,
            Genera::CommonName,
            Genera::Authority,
            Genera::DateCreated,
            Genera::DateModified,
        );
        genera
            .col(ColumnDef::new(Genera::TribeId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_genera_tribe_id")
                    .from(Genera::Table, Genera::TribeId)
                    .to(Tribes::Table, Tribes::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(genera).await?;

        let mut species = taxon_table(
            Species::Table,
            Species::Id,
            Species::Name,
            Species::CommonName,
            Species::Authority,
            Species::DateCreated,
            Species::DateModified,
        );
        species
            .col(ColumnDef::new(Species::GenusId).uuid().not_null())
            .col(ColumnDef::new(Species::Mona).string_len(20))
            .col(ColumnDef::new(Species::P3).string_len(20))
            .col(ColumnDef::new(Species::Ps).string_len(20))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_species_genus_id")
                    .from(Species::Table, Species::GenusId)
                    .to(Genera::Table, Genera::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(species).await?;

        let mut subspecies = taxon_table(
            Subspecies::Table,
            Subspecies::Id,
            Subspecies::Name,
            Subspecies::CommonName,
            Subspecies::Authority,
            Subspecies::DateCreated,
            Subspecies::DateModified,
        );
        subspecies
            .col(ColumnDef::new(Subspecies::SpeciesId).uuid().not_null())
            .col(ColumnDef::new(Subspecies::Mona).string_len(20))
            .col(ColumnDef::new(Subspecies::P3).string_len(20))
            .col(ColumnDef::new(Subspecies::Ps).string_len(20))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_subspecies_species_id")
                    .from(Subspecies::Table, Subspecies::SpeciesId)
                    .to(Species::Table, Species::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            );
        manager.create_table(subspecies).await?;

        // ============ SPECIMENS ============
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(id_column(People::Id))
                    .col(ColumnDef::new(People::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(People::MiddleInitial).string_len(1))
                    .col(ColumnDef::new(People::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(People::Suffix).string_len(5))
                    .col(timestamp_column(People::DateCreated))
                    .col(timestamp_column(People::DateModified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpecimenRecords::Table)
                    .if_not_exists()
                    .col(id_column(SpecimenRecords::Id))
                    .col(ColumnDef::new(SpecimenRecords::Usi).string_len(15).not_null())
                    .col(ColumnDef::new(SpecimenRecords::OrderId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::FamilyId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::SubfamilyId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::TribeId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::GenusId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::SpeciesId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::SubspeciesId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::DeterminerId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::DeterminedYear).integer())
                    .col(
                        ColumnDef::new(SpecimenRecords::Sex)
                            .string_len(10)
                            .not_null()
                            .default("unknown"),
                    )
                    .col(
                        ColumnDef::new(SpecimenRecords::Stage)
                            .string_len(10)
                            .not_null()
                            .default("adult"),
                    )
                    .col(ColumnDef::new(SpecimenRecords::PreparerId).uuid())
                    .col(
                        ColumnDef::new(SpecimenRecords::Preparation)
                            .string_len(15)
                            .not_null()
                            .default("spread"),
                    )
                    .col(ColumnDef::new(SpecimenRecords::PreparationDate).date())
                    .col(ColumnDef::new(SpecimenRecords::LabelsPrinted).boolean())
                    .col(ColumnDef::new(SpecimenRecords::Labeled).boolean())
                    .col(ColumnDef::new(SpecimenRecords::Photographed).boolean())
                    .col(ColumnDef::new(SpecimenRecords::CollectingTripId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::CountryId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::StateId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::CountyId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::LocalityId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::GpsId).uuid())
                    .col(ColumnDef::new(SpecimenRecords::Day).integer())
                    .col(ColumnDef::new(SpecimenRecords::Month).string_len(10))
                    .col(ColumnDef::new(SpecimenRecords::Year).integer())
                    .col(ColumnDef::new(SpecimenRecords::Method).string_len(50))
                    .col(ColumnDef::new(SpecimenRecords::Weather).string_len(100))
                    .col(ColumnDef::new(SpecimenRecords::Temperature).string_len(10))
                    .col(ColumnDef::new(SpecimenRecords::TimeOfDay).string_len(50))
                    .col(ColumnDef::new(SpecimenRecords::Habitat).text())
                    .col(ColumnDef::new(SpecimenRecords::Notes).text())
                    .col(timestamp_column(SpecimenRecords::DateCreated))
                    .col(timestamp_column(SpecimenRecords::DateModified))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_order_id",
                        SpecimenRecords::OrderId,
                        Orders::Table,
                        Orders::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_family_id",
                        SpecimenRecords::FamilyId,
                        Families::Table,
                        Families::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_subfamily_id",
                        SpecimenRecords::SubfamilyId,
                        Subfamilies::Table,
                        Subfamilies::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_tribe_id",
                        SpecimenRecords::TribeId,
                        Tribes::Table,
                        Tribes::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_genus_id",
                        SpecimenRecords::GenusId,
                        Genera::Table,
                        Genera::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_species_id",
                        SpecimenRecords::SpeciesId,
                        Species::Table,
                        Species::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_subspecies_id",
                        SpecimenRecords::SubspeciesId,
                        Subspecies::Table,
                        Subspecies::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_determiner_id",
                        SpecimenRecords::DeterminerId,
                        People::Table,
                        People::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_specimen_records_preparer_id",
                        SpecimenRecords::PreparerId,
                        People::Table,
                        People::Id,
                    ))
                    // Geography links survive the deletion of their target
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_collecting_trip_id",
                        SpecimenRecords::CollectingTripId,
                        CollectingTrips::Table,
                        CollectingTrips::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_country_id",
                        SpecimenRecords::CountryId,
                        Countries::Table,
                        Countries::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_state_id",
                        SpecimenRecords::StateId,
                        States::Table,
                        States::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_county_id",
                        SpecimenRecords::CountyId,
                        Counties::Table,
                        Counties::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_locality_id",
                        SpecimenRecords::LocalityId,
                        Localities::Table,
                        Localities::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_specimen_records_gps_id",
                        SpecimenRecords::GpsId,
                        GpsCoordinates::Table,
                        GpsCoordinates::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpecimenRecordCollectors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecimenRecordCollectors::SpecimenRecordId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecimenRecordCollectors::PersonId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SpecimenRecordCollectors::SpecimenRecordId)
                            .col(SpecimenRecordCollectors::PersonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_specimen_record_collectors_record_id")
                            .from(
                                SpecimenRecordCollectors::Table,
                                SpecimenRecordCollectors::SpecimenRecordId,
                            )
                            .to(SpecimenRecords::Table, SpecimenRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_specimen_record_collectors_person_id")
                            .from(
                                SpecimenRecordCollectors::Table,
                                SpecimenRecordCollectors::PersonId,
                            )
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SpecimenRecordCollectors::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SpecimenRecords::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subspecies::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Species::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genera::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tribes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subfamilies::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Families::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CollectingTripStates::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CollectingTrips::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GpsCoordinates::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Localities::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Counties::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(States::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

fn cascade_fk<C, T, P>(name: &str, column: C, parent: T, parent_id: P) -> ForeignKeyCreateStatement
where
    C: IntoIden + 'static,
    T: IntoIden + 'static,
    P: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(SpecimenRecords::Table, column)
        .to(parent, parent_id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

fn set_null_fk<C, T, P>(name: &str, column: C, parent: T, parent_id: P) -> ForeignKeyCreateStatement
where
    C: IntoIden + 'static,
    T: IntoIden + 'static,
    P: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(SpecimenRecords::Table, column)
        .to(parent, parent_id)
        .on_delete(ForeignKeyAction::SetNull)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
    Name,
    Abbr,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum States {
    Table,
    Id,
    CountryId,
    Name,
    Abbr,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum Counties {
    Table,
    Id,
    StateId,
    Name,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum Localities {
    Table,
    Id,
    CountryId,
    StateId,
    CountyId,
    Name,
    Range,
    Town,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum GpsCoordinates {
    Table,
    Id,
    LocalityId,
    Latitude,
    Longitude,
    Elevation,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum CollectingTrips {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Notes,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum CollectingTripStates {
    Table,
    CollectingTripId,
    StateId,
}

#[derive(DeriveIden, Clone, Copy)]
enum Orders {
    Table,
    Id,
    Name,
    CommonName,
    Authority,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Families {
    Table,
    Id,
    OrderId,
    Name,
    CommonName,
    Authority,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Subfamilies {
    Table,
    Id,
    FamilyId,
    Name,
    CommonName,
    Authority,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Tribes {
    Table,
    Id,
    SubfamilyId,
    Name,
    CommonName,
    Authority,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Genera {
    Table,
    Id,
    TribeId,
    Name,
    CommonName,
    Authority,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Species {
    Table,
    Id,
    GenusId,
    Name,
    CommonName,
    Authority,
    Mona,
    #[sea_orm(iden = "p3")]
    P3,
    Ps,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden, Clone, Copy)]
enum Subspecies {
    Table,
    Id,
    SpeciesId,
    Name,
    CommonName,
    Authority,
    Mona,
    #[sea_orm(iden = "p3")]
    P3,
    Ps,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    FirstName,
    MiddleInitial,
    LastName,
    Suffix,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum SpecimenRecords {
    Table,
    Id,
    Usi,
    OrderId,
    FamilyId,
    SubfamilyId,
    TribeId,
    GenusId,
    SpeciesId,
    SubspeciesId,
    DeterminerId,
    DeterminedYear,
    Sex,
    Stage,
    PreparerId,
    Preparation,
    PreparationDate,
    LabelsPrinted,
    Labeled,
    Photographed,
    CollectingTripId,
    CountryId,
    StateId,
    CountyId,
    LocalityId,
    GpsId,
    Day,
    Month,
    Year,
    Method,
    Weather,
    Temperature,
    TimeOfDay,
    Habitat,
    Notes,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum SpecimenRecordCollectors {
    Table,
    SpecimenRecordId,
    PersonId,
}
