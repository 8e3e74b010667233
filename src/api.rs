use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{Session, User};
use crate::entities::{Place, PlaceRecord, Role};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn list_places(&self, user: User) -> Result<Vec<Place>, Error>;
    async fn create_place(&self, user: User, record: PlaceRecord) -> Result<Place, Error>;
    async fn update_place(&self, user: User, id: Uuid, record: PlaceRecord)
        -> Result<Place, Error>;
    async fn delete_place(&self, user: User, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait RoleAPI {
    async fn find_role(&self, user_id: Uuid) -> Result<Option<Role>, Error>;
}

#[async_trait]
pub trait AuthAPI {
    async fn authenticate(&self, access_token: String) -> Result<Session, Error>;
}

pub trait API: PlaceAPI + RoleAPI + AuthAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
