pub mod engine;

pub use engine::{UpdateEngine, advance_one_day};
