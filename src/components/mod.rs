mod add_place;
mod edit_place;
mod place_form;
mod places_list;

pub use add_place::AddPlaceDialog;
pub use edit_place::EditPlaceDialog;
pub use place_form::PlaceForm;
pub use places_list::{CardAction, EmptyState, ListView, PlaceCard, PlacesList};

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Invalid,
    Failed,
    Saved,
}
