use serde::{Deserialize, Serialize};

pub const DEVELOPER_ROLE: &str = "developer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Developer,
    Explorer,
}

impl Role {
    // anything but "developer" is read-only
    pub fn from_name(name: &str) -> Self {
        match name {
            DEVELOPER_ROLE => Self::Developer,
            _ => Self::Explorer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Developer => DEVELOPER_ROLE,
            Self::Explorer => "user",
        }
    }

    pub fn is_developer(role: Option<Role>) -> bool {
        matches!(role, Some(Role::Developer))
    }
}

#[test]
fn role_from_name_test() {
    assert_eq!(Role::from_name("developer"), Role::Developer);
    assert_eq!(Role::from_name("user"), Role::Explorer);
    assert_eq!(Role::from_name("admin"), Role::Explorer);
    assert!(!Role::is_developer(None));
}
