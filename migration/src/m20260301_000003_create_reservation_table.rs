use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::BerthNumber))
                    .col(string_len(Reservation::ClientName, 100))
                    .col(string_len(Reservation::BoatName, 100))
                    .col(timestamp_with_time_zone(Reservation::CheckIn))
                    .col(timestamp_with_time_zone(Reservation::CheckOut))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_berth_number")
                    .table(Reservation::Table)
                    .col(Reservation::BerthNumber)
                    .to_owned(),
            )
            .await?;

        // Identical bookings of one berth can never both be valid
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_berth_window")
                    .table(Reservation::Table)
                    .col(Reservation::BerthNumber)
                    .col(Reservation::CheckIn)
                    .col(Reservation::CheckOut)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    BerthNumber,
    ClientName,
    BoatName,
    CheckIn,
    CheckOut,
    CreatedAt,
    UpdatedAt,
}
