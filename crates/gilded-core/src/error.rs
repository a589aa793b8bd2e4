use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("quality floor {min} is above quality ceiling {max}")]
    Inverted { min: i32, max: i32 },
}
