use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Landmark,
    HiddenGem,
    Restaurant,
    Cafe,
    Nature,
    Entertainment,
    Culture,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Landmark,
        Category::HiddenGem,
        Category::Restaurant,
        Category::Cafe,
        Category::Nature,
        Category::Entertainment,
        Category::Culture,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Landmark => "landmark",
            Self::HiddenGem => "hidden_gem",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Nature => "nature",
            Self::Entertainment => "entertainment",
            Self::Culture => "culture",
            Self::Other => "other",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landmark => "Landmark",
            Self::HiddenGem => "Hidden Gem",
            Self::Restaurant => "Restaurant",
            Self::Cafe => "Cafe",
            Self::Nature => "Nature",
            Self::Entertainment => "Entertainment",
            Self::Culture => "Culture",
            Self::Other => "Other",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Landmark => "bg-primary text-primary-foreground",
            Self::HiddenGem => "bg-accent text-accent-foreground",
            Self::Restaurant => "bg-secondary text-secondary-foreground",
            Self::Cafe => "bg-muted text-muted-foreground",
            Self::Nature => "bg-green-500 text-white",
            Self::Entertainment => "bg-purple-500 text-white",
            Self::Culture => "bg-blue-500 text-white",
            Self::Other => "bg-gray-500 text-white",
        }
    }

    pub fn badge_class_for(name: &str) -> &'static str {
        Self::from_name(name).unwrap_or(Self::Other).badge_class()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

#[test]
fn unknown_category_falls_back_to_other_badge_test() {
    assert_eq!(
        Category::badge_class_for("nature"),
        "bg-green-500 text-white"
    );
    assert_eq!(
        Category::badge_class_for("museum"),
        Category::Other.badge_class()
    );
    assert_eq!(Category::from_name("hidden_gem"), Some(Category::HiddenGem));
}
