use chrono::{TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{Session, SessionUser};
use crate::error::Error;

pub const AUDIENCE: &str = "authenticated";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub aud: String,
    pub exp: i64,
    pub email: Option<String>,
}

pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl TokenDecoder {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn decode(&self, access_token: &str) -> Result<Session, Error> {
        let data = decode::<Claims>(access_token, &self.key, &self.validation)?;
        let claims = data.claims;

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or_else(|| Error::token_error("exp out of range"))?;

        Ok(Session {
            access_token: access_token.to_string(),
            user: SessionUser {
                id: claims.sub,
                email: claims.email,
            },
            expires_at,
        })
    }
}

#[cfg(test)]
pub fn encode_for_test(secret: &str, sub: Uuid, exp: i64) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = Claims {
        sub,
        aud: AUDIENCE.into(),
        exp,
        email: Some("dev@example.com".into()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
