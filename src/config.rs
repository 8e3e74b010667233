use std::env;
use std::net::SocketAddr;

use crate::error::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("AUTH_JWT_SECRET")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::config_error("DATABASE_MAX_CONNECTIONS must be a number"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let listen_addr = env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into())
            .parse()?;

        Ok(Self {
            database_url,
            max_connections,
            jwt_secret,
            listen_addr,
        })
    }
}
