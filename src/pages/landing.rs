use serde::Serialize;

use super::{Link, Route, SessionStage, APP_TITLE};
use crate::auth::{AuthEvent, SessionState, Subscription};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LandingView {
    pub title: String,
    pub headline: String,
    pub tagline: String,
    pub features: Vec<Feature>,
    pub start: Link,
}

#[derive(Debug)]
pub struct LandingPage {
    stage: SessionStage,
    subscription: Option<Subscription>,
}

impl LandingPage {
    #[tracing::instrument(name = "LandingPage::mount", skip_all)]
    pub fn mount(sessions: &SessionState) -> Self {
        let subscription = sessions.subscribe();
        let stage = match sessions.current() {
            Some(session) => SessionStage::Authenticated(session),
            None => SessionStage::Unauthenticated,
        };

        Self {
            stage,
            subscription: Some(subscription),
        }
    }

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn redirect(&self) -> Option<Route> {
        match self.stage {
            SessionStage::Unauthenticated => None,
            _ => Some(Route::Map),
        }
    }

    pub fn handle_auth_event(&mut self, event: AuthEvent) -> Option<Route> {
        self.stage = match event {
            AuthEvent::SignedIn(session) => SessionStage::Authenticated(session),
            AuthEvent::SignedOut => SessionStage::Unauthenticated,
        };

        self.redirect()
    }

    pub async fn next_auth_event(&mut self) -> Option<AuthEvent> {
        self.subscription.as_mut()?.next().await
    }

    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn view(&self) -> LandingView {
        LandingView {
            title: APP_TITLE.into(),
            headline: "Discover Your Next Adventure".into(),
            tagline: "Explore famous landmarks and hidden local gems all in one place".into(),
            features: vec![
                Feature {
                    title: "Hidden Gems".into(),
                    description: "Discover secret spots that only locals know about, from cozy cafes to breathtaking viewpoints.".into(),
                },
                Feature {
                    title: "Famous Landmarks".into(),
                    description: "Access comprehensive information about all the must-see attractions and iconic locations.".into(),
                },
                Feature {
                    title: "Community Driven".into(),
                    description: "Join developers who contribute new places and help travelers discover authentic experiences.".into(),
                },
            ],
            start: Link::new("Start Exploring", Route::RoleSelection),
        }
    }
}
