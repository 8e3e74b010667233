use super::Engine;

use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{api::RoleAPI, entities::Role, error::Error};

#[async_trait]
impl RoleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_role(&self, user_id: Uuid) -> Result<Option<Role>, Error> {
        let maybe_result = sqlx::query("SELECT role FROM user_roles WHERE user_id = $1")
            .bind(&user_id)
            .fetch_optional(&self.pool)
            .await?;

        let role = match maybe_result {
            Some(row) => {
                let name: String = row.try_get("role")?;
                Some(Role::from_name(&name))
            }
            None => None,
        };

        Ok(role)
    }
}
