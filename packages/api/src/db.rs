//! Database connection and the operations on the `product` table.

use std::time::Duration;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, Schema,
};

use crate::entity::purchase;
use crate::forms::ValidatedItem;

/// Opens the connection pool for `url`.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Creates the `product` table when it does not exist yet. There are no
/// migrations; the schema is derived from the entity.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(purchase::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Inserts one purchase row in a single commit and returns it with its
/// assigned id.
pub async fn insert_purchase(
    db: &DatabaseConnection,
    item: &ValidatedItem,
    date: NaiveDate,
) -> Result<purchase::Model, DbErr> {
    let record = purchase::ActiveModel {
        product: Set(Some(item.product.clone())),
        price: Set(Some(item.price)),
        date: Set(Some(date)),
        store: Set(item.store.clone()),
        location: Set(item.location.clone()),
        category: Set(item.category.clone()),
        volume: Set(item.volume),
        units: Set(item.units.clone()),
        special: Set(Some(item.special)),
        brand: Set(item.brand.clone()),
        ..Default::default()
    };

    record.insert(db).await
}

pub async fn purchase_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<purchase::Model>, DbErr> {
    purchase::Entity::find_by_id(id).one(db).await
}
