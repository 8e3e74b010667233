use super::Engine;

use async_trait::async_trait;

use crate::{api::AuthAPI, auth::Session, error::Error};

#[async_trait]
impl AuthAPI for Engine {
    #[tracing::instrument(skip_all)]
    async fn authenticate(&self, access_token: String) -> Result<Session, Error> {
        let session = self.tokens.decode(&access_token)?;

        tracing::debug!("access token accepted for user {}", session.user.id);

        Ok(session)
    }
}
