use axum::extract::{Extension, Json};
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use super::{redirect, ClientSession, ACCESS_TOKEN_COOKIE};
use crate::api::DynAPI;
use crate::error::Error;
use crate::notify::Notifier;
use crate::pages::{MapPage, Route};

#[derive(Serialize, Deserialize)]
pub struct SignInParams {
    access_token: String,
}

fn session_cookie(value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(ACCESS_TOKEN_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

pub async fn sign_in(
    Extension(api): Extension<DynAPI>,
    jar: CookieJar,
    Json(params): Json<SignInParams>,
) -> Result<(CookieJar, Response), Error> {
    let session = api.authenticate(params.access_token).await?;

    tracing::info!("user {} signed in", session.user.id);

    Ok((
        jar.add(session_cookie(session.access_token)),
        redirect(Route::Map),
    ))
}

pub async fn sign_out(
    Extension(api): Extension<DynAPI>,
    ClientSession(sessions): ClientSession,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let (notifier, _notices) = Notifier::channel();
    let mut page = MapPage::mount(&*api, &sessions, notifier).await;

    let route = match page.redirect() {
        Some(route) => route,
        None => page.sign_out(),
    };
    page.unmount();

    (
        jar.remove(session_cookie(String::new())),
        redirect(route),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::{FromRequest, RequestParts};
    use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::SessionState;
    use crate::testing::{session_for, MemoryAPI};

    fn api() -> DynAPI {
        Arc::new(MemoryAPI::new())
    }

    async fn jar(cookie: Option<String>) -> CookieJar {
        let mut request = Request::builder();
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        let request = request.body(Body::empty()).unwrap();

        CookieJar::from_request(&mut RequestParts::new(request))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn sign_in_sets_session_cookie_test() {
        let user_id = Uuid::new_v4();
        let params = SignInParams {
            access_token: user_id.to_string(),
        };

        let response = sign_in(Extension(api()), jar(None).await, Json(params))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/map");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}={}", ACCESS_TOKEN_COOKIE, user_id)));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn rejected_token_is_unauthenticated_test() {
        let params = SignInParams {
            access_token: "forged".into(),
        };

        let err = sign_in(Extension(api()), jar(None).await, Json(params))
            .await
            .err()
            .unwrap();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sign_out_clears_only_this_client_test() {
        let mine = SessionState::signed_in(session_for(Uuid::new_v4()));
        let theirs = SessionState::signed_in(session_for(Uuid::new_v4()));

        let cookies = jar(Some(format!("{}=token", ACCESS_TOKEN_COOKIE))).await;

        let response = sign_out(Extension(api()), ClientSession(mine.clone()), cookies)
            .await
            .into_response();

        assert_eq!(response.headers()[LOCATION], "/");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}=;", ACCESS_TOKEN_COOKIE)));
        assert!(cookie.contains("Max-Age=0"));
        assert_eq!(mine.current(), None);
        assert!(theirs.current().is_some());
    }
}
