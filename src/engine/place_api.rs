use super::helpers::{fetch_place_for_update, fetch_user, insert_place, update_place};
use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{Acquire, Executor};
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    auth::{Platform, User},
    entities::{Place, PlaceRecord},
    error::Error,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_places(&self, user: User) -> Result<Vec<Place>, Error> {
        self.authorize(user, "read", Platform::default())?;

        let places: Vec<Place> =
            sqlx::query_as::<_, Place>("SELECT * FROM places ORDER BY created_at DESC")
                .fetch(&self.pool)
                .try_collect()
                .await?;

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn create_place(&self, user: User, record: PlaceRecord) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let user = fetch_user(&mut tx, &user).await?;
        self.authorize(user, "create_place", Platform::default())?;

        let place = insert_place(&mut tx, &Place::new(record)).await?;

        tx.commit().await?;

        tracing::info!("created place {}", place.id);

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn update_place(
        &self,
        user: User,
        id: Uuid,
        record: PlaceRecord,
    ) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let user = fetch_user(&mut tx, &user).await?;
        let place = fetch_place_for_update(&mut tx, &id).await?;

        self.authorize(user, "update", place)?;

        let place = update_place(&mut tx, &id, &record).await?;

        tx.commit().await?;

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_place(&self, user: User, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let user = fetch_user(&mut tx, &user).await?;
        let place = fetch_place_for_update(&mut tx, &id).await?;

        self.authorize(user, "delete", place)?;

        tx.execute(sqlx::query("DELETE FROM places WHERE id = $1").bind(&id))
            .await?;

        tx.commit().await?;

        tracing::info!("deleted place {}", id);

        Ok(())
    }
}
