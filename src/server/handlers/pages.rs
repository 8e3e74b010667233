use axum::extract::{Extension, Json};
use axum::response::{IntoResponse, Response};

use super::{redirect, ClientSession, PageResponse};
use crate::api::DynAPI;
use crate::notify::{drain, Notifier};
use crate::pages::{LandingPage, MapPage, RoleSelectionPage, RoleSelectionView};

pub async fn landing(ClientSession(sessions): ClientSession) -> Response {
    let page = LandingPage::mount(&sessions);

    let response = match page.redirect() {
        Some(route) => redirect(route),
        None => Json(page.view()).into_response(),
    };
    page.unmount();

    response
}

pub async fn role_selection() -> Json<RoleSelectionView> {
    RoleSelectionPage::view().into()
}

pub async fn map(
    Extension(api): Extension<DynAPI>,
    ClientSession(sessions): ClientSession,
) -> Response {
    let (notifier, notices) = Notifier::channel();
    let page = MapPage::mount(&*api, &sessions, notifier).await;

    let response = match page.redirect() {
        Some(route) => redirect(route),
        None => Json(PageResponse {
            view: page.view(),
            notices: drain(&notices),
        })
        .into_response(),
    };
    page.unmount();

    response
}
