use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("escape count {count} exceeds max_iter {max_iter}")]
    CountExceedsMax { count: u32, max_iter: u32 },
}

pub(crate) fn check_count(count: u32, max_iter: u32) -> Result<(), ColourMapError> {
    if count > max_iter {
        return Err(ColourMapError::CountExceedsMax { count, max_iter });
    }

    Ok(())
}
