use serde::Serialize;

use super::{Link, Route};
use crate::entities::Role;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleChoice {
    pub role: Role,
    pub title: String,
    pub description: String,
    pub perks: Vec<String>,
    pub action: Link,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleSelectionView {
    pub title: String,
    pub subtitle: String,
    pub back: Link,
    pub choices: Vec<RoleChoice>,
}

pub struct RoleSelectionPage;

impl RoleSelectionPage {
    pub fn view() -> RoleSelectionView {
        RoleSelectionView {
            title: "Choose Your Role".into(),
            subtitle: "Select how you'd like to use Local Secrets Pro".into(),
            back: Link::new("Back to Home", Route::Landing),
            choices: vec![
                RoleChoice {
                    role: Role::Developer,
                    title: "Developer".into(),
                    description: "Contribute to the platform by adding new places, updating information, and helping travelers discover amazing locations.".into(),
                    perks: vec![
                        "Add new places to the map".into(),
                        "Edit existing locations".into(),
                        "Manage place information".into(),
                    ],
                    action: Link::new("Continue as Developer", Route::Auth(Role::Developer)),
                },
                RoleChoice {
                    role: Role::Explorer,
                    title: "Explorer".into(),
                    description: "Discover and explore both famous landmarks and hidden local gems. Find your next adventure with curated recommendations.".into(),
                    perks: vec![
                        "Browse famous landmarks".into(),
                        "Discover hidden gems".into(),
                        "Explore interactive map".into(),
                    ],
                    action: Link::new("Continue as Explorer", Route::Auth(Role::Explorer)),
                },
            ],
        }
    }
}

#[test]
fn offers_two_destinations_test() {
    let view = RoleSelectionPage::view();
    let destinations: Vec<&str> = view
        .choices
        .iter()
        .map(|c| c.action.destination.as_str())
        .collect();

    assert_eq!(destinations, vec!["/auth?role=developer", "/auth?role=user"]);
    assert_eq!(view.back.destination, "/");
}
