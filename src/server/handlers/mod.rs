pub mod auth;
pub mod pages;
pub mod places;

use async_trait::async_trait;
use axum::extract::{Extension, FromRequest, RequestParts};
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::api::DynAPI;
use crate::auth::SessionState;
use crate::components::SubmitOutcome;
use crate::error::Error;
use crate::notify::{Notice, Notifier};
use crate::pages::{MapPage, Route};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub view: T,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse<T> {
    pub outcome: SubmitOutcome,
    pub view: T,
    pub notices: Vec<Notice>,
}

// The requesting client's session, from a bearer token or the session
// cookie. A missing or rejected token leaves it signed out.
pub struct ClientSession(pub SessionState);

#[async_trait]
impl<B> FromRequest<B> for ClientSession
where
    B: Send,
{
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let Extension(api) = Extension::<DynAPI>::from_request(req)
            .await
            .map_err(|_| Error::unexpected_error())?;
        let jar = CookieJar::from_request(req)
            .await
            .map_err(|_| Error::unexpected_error())?;

        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.to_string())
            .or_else(|| jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string()));

        let sessions = SessionState::new();
        if let Some(token) = token {
            match api.authenticate(token).await {
                Ok(session) => sessions.replace(Some(session)),
                Err(err) => tracing::info!("request treated as signed out: {}", err),
            }
        }

        Ok(ClientSession(sessions))
    }
}

pub fn redirect(route: Route) -> Response {
    Redirect::to(&route.path()).into_response()
}

pub async fn signed_in_map_page(
    api: &DynAPI,
    sessions: &SessionState,
    notifier: Notifier,
) -> Result<MapPage, Error> {
    let page = MapPage::mount(&**api, sessions, notifier).await;

    if page.redirect().is_some() {
        page.unmount();
        return Err(Error::unauthenticated_error());
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::testing::MemoryAPI;

    async fn extract(request: Request<Body>) -> SessionState {
        let mut parts = RequestParts::new(request);
        let ClientSession(sessions) = ClientSession::from_request(&mut parts).await.unwrap();
        sessions
    }

    fn api() -> DynAPI {
        Arc::new(MemoryAPI::new())
    }

    #[tokio::test]
    async fn bearer_token_identifies_client_test() {
        let user_id = Uuid::new_v4();
        let request = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {}", user_id))
            .extension(api())
            .body(Body::empty())
            .unwrap();

        let session = extract(request).await.current().unwrap();
        assert_eq!(session.user.id, user_id);
    }

    #[tokio::test]
    async fn session_cookie_identifies_client_test() {
        let user_id = Uuid::new_v4();
        let request = Request::builder()
            .header("cookie", format!("{}={}", ACCESS_TOKEN_COOKIE, user_id))
            .extension(api())
            .body(Body::empty())
            .unwrap();

        let session = extract(request).await.current().unwrap();
        assert_eq!(session.user.id, user_id);
    }

    #[tokio::test]
    async fn missing_or_bad_credentials_are_signed_out_test() {
        let request = Request::builder()
            .extension(api())
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(request).await.current(), None);

        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer not-a-token")
            .extension(api())
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(request).await.current(), None);
    }
}
