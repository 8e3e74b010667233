use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use super::{signed_in_map_page, ClientSession, PageResponse, SubmitResponse};
use crate::api::DynAPI;
use crate::components::PlaceForm;
use crate::error::Error;
use crate::notify::{drain, Notifier};
use crate::pages::MapView;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    ClientSession(sessions): ClientSession,
    Json(form): Json<PlaceForm>,
) -> Result<Json<SubmitResponse<MapView>>, Error> {
    let (notifier, notices) = Notifier::channel();
    let mut page = signed_in_map_page(&api, &sessions, notifier).await?;

    page.open_add_place()?;
    page.add_place_mut().form = form;
    let outcome = page.submit_add_place(&*api).await?;

    let response = SubmitResponse {
        outcome,
        view: page.view(),
        notices: drain(&notices),
    };
    page.unmount();

    Ok(response.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    ClientSession(sessions): ClientSession,
    Path(id): Path<Uuid>,
    Json(form): Json<PlaceForm>,
) -> Result<Json<SubmitResponse<MapView>>, Error> {
    let (notifier, notices) = Notifier::channel();
    let mut page = signed_in_map_page(&api, &sessions, notifier).await?;

    if !page.begin_edit(id)? {
        return Err(Error::not_found_error());
    }

    let dialog = page
        .list_mut()
        .editing_mut()
        .ok_or_else(Error::invalid_state_error)?;
    dialog.form = form;

    let outcome = page
        .submit_edit(&*api)
        .await?
        .ok_or_else(Error::invalid_state_error)?;

    let response = SubmitResponse {
        outcome,
        view: page.view(),
        notices: drain(&notices),
    };
    page.unmount();

    Ok(response.into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    ClientSession(sessions): ClientSession,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse<MapView>>, Error> {
    let (notifier, notices) = Notifier::channel();
    let mut page = signed_in_map_page(&api, &sessions, notifier).await?;

    page.delete_place(&*api, id).await?;

    let response = PageResponse {
        view: page.view(),
        notices: drain(&notices),
    };
    page.unmount();

    Ok(response.into())
}
