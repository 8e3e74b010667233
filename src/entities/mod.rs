mod category;
mod place;
mod role;

pub use category::Category;
pub use place::{Place, PlaceRecord};
pub use role::{Role, DEVELOPER_ROLE};
