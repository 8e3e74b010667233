pub mod authorizor;
mod platform;
mod session;
mod token;
mod user;

pub use platform::Platform;
pub use session::{AuthEvent, Session, SessionState, SessionUser, Subscription};
pub use token::{Claims, TokenDecoder};
pub use user::User;

#[cfg(test)]
pub use token::encode_for_test;
