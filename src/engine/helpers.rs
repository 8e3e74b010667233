use super::Database;

use sqlx::{Executor, Row, Transaction};
use uuid::Uuid;

use crate::{
    auth::User,
    entities::{Place, PlaceRecord},
    error::Error,
};

#[tracing::instrument(skip(tx))]
pub async fn fetch_place_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Place, Error> {
    let place = sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::not_found_error())?;

    Ok(place)
}

// roles come from the table, never from the caller
#[tracing::instrument(skip(tx))]
pub async fn fetch_user(tx: &mut Transaction<'_, Database>, user: &User) -> Result<User, Error> {
    let roles = tx
        .fetch_all(sqlx::query("SELECT role FROM user_roles WHERE user_id = $1").bind(&user.id))
        .await?
        .iter()
        .map(|row| row.try_get("role"))
        .collect::<Result<Vec<String>, _>>()?;

    Ok(User { id: user.id, roles })
}

#[tracing::instrument(skip(tx, place))]
pub async fn insert_place(tx: &mut Transaction<'_, Database>, place: &Place) -> Result<Place, Error> {
    let place = sqlx::query_as::<_, Place>(
        "INSERT INTO places (id, name, description, category, latitude, longitude, address, image_url, is_famous, source) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(&place.id)
    .bind(&place.name)
    .bind(&place.description)
    .bind(&place.category)
    .bind(place.latitude)
    .bind(place.longitude)
    .bind(&place.address)
    .bind(&place.image_url)
    .bind(place.is_famous)
    .bind(&place.source)
    .fetch_one(&mut *tx)
    .await?;

    Ok(place)
}

#[tracing::instrument(skip(tx, record))]
pub async fn update_place(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
    record: &PlaceRecord,
) -> Result<Place, Error> {
    let place = sqlx::query_as::<_, Place>(
        "UPDATE places SET name = $2, description = $3, category = $4, latitude = $5, longitude = $6, \
         address = $7, image_url = $8, is_famous = $9, source = $10 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&record.name)
    .bind(&record.description)
    .bind(&record.category)
    .bind(record.latitude)
    .bind(record.longitude)
    .bind(&record.address)
    .bind(&record.image_url)
    .bind(record.is_famous)
    .bind(&record.source)
    .fetch_one(&mut *tx)
    .await?;

    Ok(place)
}
