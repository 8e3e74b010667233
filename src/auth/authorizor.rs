use oso::{Oso, PolarClass};

use crate::auth::{Platform, User};
use crate::entities::Place;
use crate::error::Error;

pub fn new() -> Result<Oso, Error> {
    let mut o = Oso::new();

    o.register_class(Platform::get_polar_class())?;
    o.register_class(User::get_polar_class())?;
    o.register_class(Place::get_polar_class())?;

    o.load_str(include_str!("rules.polar"))?;

    Ok(o)
}

#[cfg(test)]
fn place() -> Place {
    use crate::entities::PlaceRecord;

    Place::new(PlaceRecord {
        name: "Hidden Courtyard".into(),
        description: None,
        category: "hidden_gem".into(),
        latitude: 41.38,
        longitude: 2.17,
        address: None,
        image_url: None,
        is_famous: false,
        source: None,
    })
}

#[test]
fn platform_place_relation_test() {
    let authorizor = new().unwrap();

    let result = authorizor.query_rule(
        "has_relation",
        (Platform::default(), "platform", place()),
    );
    assert!(result.unwrap().next().unwrap().is_ok());
}

#[test]
fn platform_role_test() {
    use crate::entities::Role;
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let developer = User::new(Uuid::new_v4(), Some(Role::Developer));
    let explorer = User::new(Uuid::new_v4(), None);

    let result =
        authorizor.query_rule("has_role", (developer.clone(), "developer", Platform::default()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result =
        authorizor.query_rule("has_role", (explorer.clone(), "developer", Platform::default()));
    assert!(result.unwrap().next().is_none());

    let result = authorizor.is_allowed(developer, "create_place", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(explorer.clone(), "create_place", Platform::default());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(explorer, "read", Platform::default());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn place_developer_and_explorer_role_test() {
    use crate::entities::Role;
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let developer = User::new(Uuid::new_v4(), Some(Role::Developer));
    let explorer = User::new(Uuid::new_v4(), Some(Role::Explorer));
    let place = place();

    let result = authorizor.is_allowed(explorer.clone(), "read", place.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(explorer.clone(), "update", place.clone());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(explorer.clone(), "delete", place.clone());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(developer.clone(), "read", place.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(developer.clone(), "update", place.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(developer.clone(), "delete", place.clone());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn place_writes_without_role_row_test() {
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let newcomer = User::new(Uuid::new_v4(), None);
    let place = place();

    let result = authorizor.is_allowed(newcomer.clone(), "read", place.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(newcomer.clone(), "update", place.clone());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(newcomer, "delete", place);
    assert_eq!(result.unwrap(), false);
}

