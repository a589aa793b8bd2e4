use gilded_core::{Item, QualityBounds};
use gilded_platform::EngineConfig;
use tracing::{debug, trace};

/// Ages items by one day. Holds only the quality bounds, never the items.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateEngine {
    bounds: QualityBounds,
}

impl UpdateEngine {
    pub fn new(bounds: QualityBounds) -> Self {
        Self { bounds }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.bounds)
    }

    pub fn bounds(&self) -> &QualityBounds {
        &self.bounds
    }

    pub fn advance_one_day(&self, items: &mut [Item]) {
        debug!(count = items.len(), "advancing inventory one day");

        for item in items.iter_mut() {
            self.advance_item(item);
        }
    }

    /// Returns the item as it will look tomorrow, leaving `item` as is.
    pub fn next_day(&self, item: &Item) -> Item {
        let mut next = item.clone();
        self.advance_item(&mut next);
        next
    }

    fn advance_item(&self, item: &mut Item) {
        let category = item.category();
        let next = category.next_state(item.state(), &self.bounds);
        item.set_state(next);

        trace!(
            item = item.name(),
            category = ?category,
            sell_in = next.sell_in,
            quality = next.quality,
            "item advanced"
        );
    }
}

/// Ages `items` by one day with the default 0..=50 quality bounds.
pub fn advance_one_day(items: &mut [Item]) {
    UpdateEngine::default().advance_one_day(items);
}
