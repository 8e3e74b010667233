mod handlers;

use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};

use crate::api::DynAPI;
use crate::error::Error;
use crate::server::handlers::{auth, pages, places};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/role-selection", get(pages::role_selection))
        .route("/map", get(pages::map))
        .route("/auth/session", post(auth::sign_in))
        .route("/sign-out", post(auth::sign_out))
        .route("/places", post(places::create))
        .route("/places/:id", put(places::update).delete(places::delete))
        .layer(Extension(api))
}

pub async fn serve(api: DynAPI, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            Error::unexpected_error()
        })
}
