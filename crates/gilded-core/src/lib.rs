pub mod category;
pub mod error;
pub mod models;
pub mod rules;

pub use category::ItemCategory;
pub use error::BoundsError;
pub use models::{Item, ItemState};
pub use rules::QualityBounds;
