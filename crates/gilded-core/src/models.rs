use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;

/// A stocked item. The name is fixed at construction and only drives
/// classification; `sell_in` and `quality` move once per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// The part of an item the update rules read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::classify(&self.name)
    }

    pub fn state(&self) -> ItemState {
        ItemState {
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }

    pub fn set_state(&mut self, state: ItemState) {
        self.sell_in = state.sell_in;
        self.quality = state.quality;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
