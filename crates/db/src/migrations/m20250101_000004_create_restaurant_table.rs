//! Create restaurant table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurant::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurant::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Restaurant::Address).string_len(512).not_null())
                    .col(
                        ColumnDef::new(Restaurant::OffersEnglishMenu)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Restaurant::WalkInsOk)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Restaurant::AcceptsCreditCards)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Restaurant::Notes).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Restaurant::CreatedByUserId)
                            .big_integer()
                            .not_null(),
                    )
                    // 0 = no cuisine / price range picked; never an allocated id
                    .col(
                        ColumnDef::new(Restaurant::CuisineId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Restaurant::PriceRangeId)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Restaurant::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_created_by_user")
                            .from(Restaurant::Table, Restaurant::CreatedByUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: created_by_user_id (for profile listings)
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_created_by_user_id")
                    .table(Restaurant::Table)
                    .col(Restaurant::CreatedByUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Restaurant {
    Table,
    Id,
    Name,
    Address,
    OffersEnglishMenu,
    WalkInsOk,
    AcceptsCreditCards,
    Notes,
    CreatedByUserId,
    CuisineId,
    PriceRangeId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
