//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_cuisine_table;
mod m20250101_000003_create_price_range_table;
mod m20250101_000004_create_restaurant_table;
mod m20250101_000005_create_photo_url_table;
mod m20250101_000006_create_likes_table;
mod m20250101_000007_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_cuisine_table::Migration),
            Box::new(m20250101_000003_create_price_range_table::Migration),
            Box::new(m20250101_000004_create_restaurant_table::Migration),
            Box::new(m20250101_000005_create_photo_url_table::Migration),
            Box::new(m20250101_000006_create_likes_table::Migration),
            Box::new(m20250101_000007_create_comment_table::Migration),
        ]
    }
}
