mod landing;
mod map;
mod role_selection;

pub use landing::{Feature, LandingPage, LandingView};
pub use map::{CategoryOption, MapPage, MapView};
pub use role_selection::{RoleChoice, RoleSelectionPage, RoleSelectionView};

use serde::Serialize;

use crate::auth::{Session, User};
use crate::entities::Role;

pub const APP_TITLE: &str = "Local Secrets Pro";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    RoleSelection,
    Map,
    Auth(Role),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::RoleSelection => "/role-selection".into(),
            Self::Map => "/map".into(),
            Self::Auth(role) => format!("/auth?role={}", role.name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionStage {
    Unauthenticated,
    Authenticated(Session),
    Authorized(Session, Role),
}

impl SessionStage {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authorized(_, role) => Some(*role),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<User> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(session) => Some(session.to_user(None)),
            Self::Authorized(session, role) => Some(session.to_user(Some(*role))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub destination: String,
}

impl Link {
    fn new(label: &str, route: Route) -> Self {
        Self {
            label: label.into(),
            destination: route.path(),
        }
    }
}

#[test]
fn route_paths_test() {
    assert_eq!(Route::Landing.path(), "/");
    assert_eq!(Route::Map.path(), "/map");
    assert_eq!(Route::Auth(Role::Developer).path(), "/auth?role=developer");
    assert_eq!(Route::Auth(Role::Explorer).path(), "/auth?role=user");
}
