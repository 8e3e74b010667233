mod auth_api;
mod helpers;
mod place_api;
mod role_api;

use oso::Oso;
use sqlx::{Executor, Pool, Postgres};

use crate::{
    api::API,
    auth::{authorizor, TokenDecoder},
    error::Error,
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    authorizor: Oso,
    tokens: TokenDecoder,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, jwt_secret: &str) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS places (
                id UUID PRIMARY KEY,
                name VARCHAR(200) NOT NULL,
                description TEXT,
                category VARCHAR NOT NULL DEFAULT 'other',
                latitude DOUBLE PRECISION NOT NULL CHECK (latitude BETWEEN -90 AND 90),
                longitude DOUBLE PRECISION NOT NULL CHECK (longitude BETWEEN -180 AND 180),
                address TEXT,
                image_url TEXT,
                is_famous BOOLEAN NOT NULL DEFAULT FALSE,
                source VARCHAR(200),
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS places_created_at_idx ON places (created_at DESC)")
            .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS user_roles (user_id UUID PRIMARY KEY, role VARCHAR NOT NULL)",
        )
        .await?;

        Ok(Self {
            pool,
            authorizor: authorizor::new()?,
            tokens: TokenDecoder::new(jwt_secret),
        })
    }
}

impl Engine {
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.authorizor.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(Error::unauthorized_error())
    }
}

impl API for Engine {}
