use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, column) for every lookup the API filters or sorts on.
const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_countries_name", "countries", "name"),
    ("idx_states_name", "states", "name"),
    ("idx_states_country_id", "states", "country_id"),
    ("idx_counties_name", "counties", "name"),
    ("idx_counties_state_id", "counties", "state_id"),
    ("idx_localities_name", "localities", "name"),
    ("idx_localities_county_id", "localities", "county_id"),
    ("idx_gps_coordinates_locality_id", "gps_coordinates", "locality_id"),
    ("idx_collecting_trips_name", "collecting_trips", "name"),
    ("idx_orders_name", "orders", "name"),
    ("idx_families_order_id", "families", "order_id"),
    ("idx_subfamilies_family_id", "subfamilies", "family_id"),
    ("idx_tribes_subfamily_id", "tribes", "subfamily_id"),
    ("idx_genera_tribe_id", "genera", "tribe_id"),
    ("idx_species_genus_id", "species", "genus_id"),
    ("idx_subspecies_species_id", "subspecies", "species_id"),
    ("idx_people_last_name", "people", "last_name"),
    ("idx_specimen_records_usi", "specimen_records", "usi"),
    ("idx_specimen_records_species_id", "specimen_records", "species_id"),
    ("idx_specimen_records_locality_id", "specimen_records", "locality_id"),
    ("idx_specimen_records_year", "specimen_records", "year"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(*name)
                        .table(Alias::new(*table))
                        .if_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
