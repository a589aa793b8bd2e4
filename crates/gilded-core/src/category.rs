use serde::{Deserialize, Serialize};

/// Behavior class an item is sorted into by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Default,
    AgedBrie,
    Sulfuras,
    BackstagePass,
    Conjured,
}

impl ItemCategory {
    /// Variants in match priority order, `Default` last.
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::AgedBrie,
        ItemCategory::Sulfuras,
        ItemCategory::BackstagePass,
        ItemCategory::Conjured,
        ItemCategory::Default,
    ];

    /// Substring that selects this category, if any.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            ItemCategory::AgedBrie => Some("Aged Brie"),
            ItemCategory::Sulfuras => Some("Sulfuras"),
            ItemCategory::BackstagePass => Some("Backstage"),
            ItemCategory::Conjured => Some("Conjured"),
            ItemCategory::Default => None,
        }
    }

    /// Names can carry several markers; the first check that hits wins.
    pub fn classify(name: &str) -> Self {
        if name.contains("Aged Brie") {
            ItemCategory::AgedBrie
        } else if name.contains("Sulfuras") {
            ItemCategory::Sulfuras
        } else if name.contains("Backstage") {
            ItemCategory::BackstagePass
        } else if name.contains("Conjured") {
            ItemCategory::Conjured
        } else {
            ItemCategory::Default
        }
    }

    pub fn is_static(self) -> bool {
        self == ItemCategory::Sulfuras
    }
}
