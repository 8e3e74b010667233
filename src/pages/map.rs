use serde::Serialize;
use uuid::Uuid;

use super::{Route, SessionStage, APP_TITLE};
use crate::api::{PlaceAPI, RoleAPI};
use crate::auth::{AuthEvent, Session, SessionState, Subscription, User};
use crate::components::{AddPlaceDialog, ListView, PlacesList, SubmitOutcome};
use crate::entities::{Category, Role};
use crate::error::Error;
use crate::notify::{Notice, Notifier};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapView {
    pub title: String,
    pub mode: String,
    pub can_add_place: bool,
    pub add_place_open: bool,
    pub categories: Vec<CategoryOption>,
    pub list: ListView,
}

#[derive(Debug)]
pub struct MapPage {
    sessions: SessionState,
    stage: SessionStage,
    list: PlacesList,
    add_place: AddPlaceDialog,
    subscription: Option<Subscription>,
    notifier: Notifier,
}

impl MapPage {
    #[tracing::instrument(name = "MapPage::mount", skip_all)]
    pub async fn mount<A>(api: &A, sessions: &SessionState, notifier: Notifier) -> Self
    where
        A: RoleAPI + PlaceAPI + ?Sized,
    {
        let subscription = sessions.subscribe();
        let session = sessions.current();

        let mut page = Self {
            sessions: sessions.clone(),
            stage: SessionStage::Unauthenticated,
            list: PlacesList::new(),
            add_place: AddPlaceDialog::new(),
            subscription: Some(subscription),
            notifier,
        };
        page.apply_session(api, session).await;

        page
    }

    async fn apply_session<A>(&mut self, api: &A, session: Option<Session>)
    where
        A: RoleAPI + PlaceAPI + ?Sized,
    {
        let session = match session {
            Some(session) => session,
            None => {
                self.stage = SessionStage::Unauthenticated;
                return;
            }
        };

        self.stage = match api.find_role(session.user.id).await {
            Ok(Some(role)) => SessionStage::Authorized(session, role),
            Ok(None) => SessionStage::Authenticated(session),
            Err(err) => {
                tracing::warn!("role lookup for {} failed: {}", session.user.id, err);
                SessionStage::Authenticated(session)
            }
        };

        if let Some(user) = self.stage.user() {
            self.list.fetch(api, &user, &self.notifier).await;
        }
    }

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn role(&self) -> Option<Role> {
        self.stage.role()
    }

    pub fn list(&self) -> &PlacesList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut PlacesList {
        &mut self.list
    }

    pub fn redirect(&self) -> Option<Route> {
        match self.stage {
            SessionStage::Unauthenticated => Some(Route::Landing),
            _ => None,
        }
    }

    pub async fn handle_auth_event<A>(&mut self, api: &A, event: AuthEvent) -> Option<Route>
    where
        A: RoleAPI + PlaceAPI + ?Sized,
    {
        let session = match event {
            AuthEvent::SignedIn(session) => Some(session),
            AuthEvent::SignedOut => None,
        };
        self.apply_session(api, session).await;

        self.redirect()
    }

    pub async fn next_auth_event(&mut self) -> Option<AuthEvent> {
        self.subscription.as_mut()?.next().await
    }

    pub async fn reload<A>(&mut self, api: &A)
    where
        A: RoleAPI + PlaceAPI + ?Sized,
    {
        let session = self.sessions.current();
        self.apply_session(api, session).await;
    }

    fn developer(&self) -> Result<User, Error> {
        let user = self
            .stage
            .user()
            .ok_or_else(Error::unauthenticated_error)?;

        if !Role::is_developer(self.role()) {
            return Err(Error::unauthorized_error());
        }

        Ok(user)
    }

    pub fn open_add_place(&mut self) -> Result<(), Error> {
        self.developer()?;
        self.add_place.set_open(true);

        Ok(())
    }

    pub fn close_add_place(&mut self) {
        self.add_place.set_open(false);
    }

    pub fn add_place_mut(&mut self) -> &mut AddPlaceDialog {
        &mut self.add_place
    }

    pub async fn submit_add_place<A>(&mut self, api: &A) -> Result<SubmitOutcome, Error>
    where
        A: RoleAPI + PlaceAPI + ?Sized,
    {
        let user = self.developer()?;

        let outcome = self.add_place.submit(api, &user, &self.notifier).await;
        if outcome == SubmitOutcome::Saved {
            self.reload(api).await;
        }

        Ok(outcome)
    }

    pub fn begin_edit(&mut self, id: Uuid) -> Result<bool, Error> {
        self.developer()?;

        Ok(self.list.begin_edit(id))
    }

    pub async fn submit_edit<A>(&mut self, api: &A) -> Result<Option<SubmitOutcome>, Error>
    where
        A: PlaceAPI + ?Sized,
    {
        let user = self.developer()?;

        Ok(self.list.submit_edit(api, &user, &self.notifier).await)
    }

    pub async fn delete_place<A>(&mut self, api: &A, id: Uuid) -> Result<bool, Error>
    where
        A: PlaceAPI + ?Sized,
    {
        let user = self.developer()?;

        Ok(self.list.delete(api, &user, &self.notifier, id).await)
    }

    #[tracing::instrument(name = "MapPage::sign_out", skip_all)]
    pub fn sign_out(&mut self) -> Route {
        self.sessions.sign_out();

        self.stage = SessionStage::Unauthenticated;
        self.notifier.notify(Notice::info(
            "Signed out",
            "You have been signed out successfully",
        ));

        Route::Landing
    }

    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn view(&self) -> MapView {
        let role = self.role();
        let is_developer = Role::is_developer(role);

        MapView {
            title: APP_TITLE.into(),
            mode: if is_developer {
                "Developer Dashboard".into()
            } else {
                "Explorer Mode".into()
            },
            can_add_place: is_developer,
            add_place_open: is_developer && self.add_place.is_open(),
            categories: Category::ALL
                .iter()
                .map(|category| CategoryOption {
                    value: category.name().into(),
                    label: category.title().into(),
                })
                .collect(),
            list: self.list.view(role),
        }
    }
}
