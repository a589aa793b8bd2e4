use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;
use crate::error::BoundsError;
use crate::models::ItemState;

pub const DEFAULT_MIN_QUALITY: i32 = 0;
pub const DEFAULT_MAX_QUALITY: i32 = 50;

/// Inclusive range every quality mutation is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct QualityBounds {
    min: i32,
    max: i32,
}

#[derive(Deserialize)]
struct RawBounds {
    min: i32,
    max: i32,
}

impl TryFrom<RawBounds> for QualityBounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        QualityBounds::new(raw.min, raw.max)
    }
}

impl QualityBounds {
    pub fn new(min: i32, max: i32) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }

    fn clamp(&self, quality: i32) -> i32 {
        quality.clamp(self.min, self.max)
    }

    fn raise(&self, quality: i32, by: i32) -> i32 {
        self.clamp(quality.saturating_add(by))
    }

    fn lower(&self, quality: i32, by: i32) -> i32 {
        self.clamp(quality.saturating_sub(by))
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_QUALITY,
            max: DEFAULT_MAX_QUALITY,
        }
    }
}

impl ItemCategory {
    /// One day of aging. Everything but Sulfuras loses a day of sell-in
    /// first; the quality step then looks at the new sell-in.
    pub fn next_state(self, state: ItemState, bounds: &QualityBounds) -> ItemState {
        if self.is_static() {
            return state;
        }

        let sell_in = state.sell_in.saturating_sub(1);
        let quality = state.quality;

        let quality = match self {
            ItemCategory::Default if sell_in <= 0 => bounds.lower(quality, 2),
            ItemCategory::Default => bounds.lower(quality, 1),
            ItemCategory::AgedBrie => bounds.raise(quality, 1),
            ItemCategory::BackstagePass => match sell_in {
                i32::MIN..=0 => bounds.min(),
                1..=5 => bounds.raise(quality, 3),
                6..=10 => bounds.raise(quality, 2),
                _ => bounds.lower(quality, 1),
            },
            ItemCategory::Conjured => bounds.lower(quality, 2),
            ItemCategory::Sulfuras => quality,
        };

        ItemState { sell_in, quality }
    }
}
