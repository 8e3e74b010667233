use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use oso::Oso;

use crate::api::{AuthAPI, PlaceAPI, RoleAPI, API};
use crate::auth::{authorizor, Platform, Session, SessionUser, User};
use crate::entities::{Place, PlaceRecord, Role};
use crate::error::Error;

pub struct MemoryAPI {
    places: Mutex<Vec<Place>>,
    roles: Mutex<HashMap<Uuid, Option<Role>>>,
    authorizor: Oso,
    clock: AtomicI64,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
    role_calls: AtomicUsize,
    fail_read: AtomicBool,
    fail_write: AtomicBool,
    fail_role: AtomicBool,
}

impl MemoryAPI {
    pub fn new() -> Self {
        Self {
            places: Mutex::new(vec![]),
            roles: Mutex::new(HashMap::new()),
            authorizor: authorizor::new().unwrap(),
            clock: AtomicI64::new(0),
            list_calls: AtomicUsize::new(0),
            write_calls: AtomicUsize::new(0),
            role_calls: AtomicUsize::new(0),
            fail_read: AtomicBool::new(false),
            fail_write: AtomicBool::new(false),
            fail_role: AtomicBool::new(false),
        }
    }

    // `None` leaves the user without a role row
    pub fn add_user(&self, role: Option<Role>) -> User {
        let user = User::new(Uuid::new_v4(), role);
        self.roles.lock().unwrap().insert(user.id, role);
        user
    }

    pub fn seed_place(&self, name: &str, category: &str) -> Place {
        let place = self.stamp(Place::new(PlaceRecord {
            name: name.into(),
            description: None,
            category: category.into(),
            latitude: 0.0,
            longitude: 0.0,
            address: None,
            image_url: None,
            is_famous: false,
            source: None,
        }));
        self.places.lock().unwrap().push(place.clone());
        place
    }

    pub fn stored_places(&self) -> Vec<Place> {
        let mut places = self.places.lock().unwrap().clone();
        places.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        places
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn role_calls(&self) -> usize {
        self.role_calls.load(Ordering::SeqCst)
    }

    pub fn fail_next_read(&self) {
        self.fail_read.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_write(&self) {
        self.fail_write.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_role_lookup(&self) {
        self.fail_role.store(true, Ordering::SeqCst);
    }

    // distinct, increasing creation times
    fn stamp(&self, mut place: Place) -> Place {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        place.created_at = Utc::now() + Duration::milliseconds(tick);
        place
    }

    // same policy as the engine, against the stored role
    fn authorize<Resource: oso::ToPolar>(
        &self,
        user: &User,
        action: &str,
        resource: Resource,
    ) -> Result<(), Error> {
        let role = self.roles.lock().unwrap().get(&user.id).copied().flatten();
        let user = User::new(user.id, role);

        if self.authorizor.is_allowed(user, action.to_string(), resource)? {
            return Ok(());
        }
        Err(Error::unauthorized_error())
    }

    fn begin_write(&self) -> Result<(), Error> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_write.swap(false, Ordering::SeqCst) {
            return Err(Error::database_error("injected failure"));
        }
        Ok(())
    }

    fn find_place(&self, id: Uuid) -> Result<Place, Error> {
        self.places
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(Error::not_found_error)
    }
}

pub fn session_for(user_id: Uuid) -> Session {
    Session {
        access_token: user_id.to_string(),
        user: SessionUser {
            id: user_id,
            email: None,
        },
        expires_at: Utc::now() + Duration::hours(1),
    }
}

#[async_trait]
impl PlaceAPI for MemoryAPI {
    async fn list_places(&self, _user: User) -> Result<Vec<Place>, Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_read.swap(false, Ordering::SeqCst) {
            return Err(Error::database_error("injected failure"));
        }
        Ok(self.stored_places())
    }

    async fn create_place(&self, user: User, record: PlaceRecord) -> Result<Place, Error> {
        self.begin_write()?;
        self.authorize(&user, "create_place", Platform::default())?;
        let place = self.stamp(Place::new(record));
        self.places.lock().unwrap().push(place.clone());
        Ok(place)
    }

    async fn update_place(
        &self,
        user: User,
        id: Uuid,
        record: PlaceRecord,
    ) -> Result<Place, Error> {
        self.begin_write()?;
        let place = self.find_place(id)?;
        self.authorize(&user, "update", place)?;

        let mut places = self.places.lock().unwrap();
        let place = places
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(Error::not_found_error)?;
        place.apply(record);
        Ok(place.clone())
    }

    async fn delete_place(&self, user: User, id: Uuid) -> Result<(), Error> {
        self.begin_write()?;
        let place = self.find_place(id)?;
        self.authorize(&user, "delete", place)?;

        self.places.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl RoleAPI for MemoryAPI {
    async fn find_role(&self, user_id: Uuid) -> Result<Option<Role>, Error> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_role.swap(false, Ordering::SeqCst) {
            return Err(Error::database_error("injected failure"));
        }
        Ok(self.roles.lock().unwrap().get(&user_id).copied().flatten())
    }
}

#[async_trait]
impl AuthAPI for MemoryAPI {
    // tokens are the user id in plain text
    async fn authenticate(&self, access_token: String) -> Result<Session, Error> {
        let user_id = Uuid::parse_str(&access_token).map_err(Error::token_error)?;
        Ok(session_for(user_id))
    }
}

impl API for MemoryAPI {}
