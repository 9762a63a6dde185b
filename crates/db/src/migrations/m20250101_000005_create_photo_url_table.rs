//! Create photo URL table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoUrl::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhotoUrl::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PhotoUrl::Url).string_len(2048).not_null())
                    .col(
                        ColumnDef::new(PhotoUrl::RestaurantId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_url_restaurant")
                            .from(PhotoUrl::Table, PhotoUrl::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: restaurant_id (for grouping photos under restaurants)
        manager
            .create_index(
                Index::create()
                    .name("idx_photo_url_restaurant_id")
                    .table(PhotoUrl::Table)
                    .col(PhotoUrl::RestaurantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhotoUrl::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PhotoUrl {
    Table,
    Id,
    Url,
    RestaurantId,
}

#[derive(Iden)]
enum Restaurant {
    Table,
    Id,
}
