use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeGridError {
    #[error("grid needs positive size and budget: {width}x{height}, max_iter {max_iter}")]
    Empty {
        width: u32,
        height: u32,
        max_iter: u32,
    },
    #[error("grid size {width}x{height} does not match {len} counts")]
    BoundsMismatch { width: u32, height: u32, len: usize },
    #[error("count {count} exceeds max_iter {max_iter}")]
    CountExceedsMax { count: u32, max_iter: u32 },
}

/// Row-major escape counts. Row `i`, column `j` holds the sample taken at
/// `imag_min + i·Δy`, `real_min + j·Δx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    width: u32,
    height: u32,
    max_iter: u32,
    counts: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_counts(
        width: u32,
        height: u32,
        max_iter: u32,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeGridError> {
        if width == 0 || height == 0 || max_iter == 0 {
            return Err(EscapeGridError::Empty {
                width,
                height,
                max_iter,
            });
        }

        if (width as usize) * (height as usize) != counts.len() {
            return Err(EscapeGridError::BoundsMismatch {
                width,
                height,
                len: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > max_iter) {
            return Err(EscapeGridError::CountExceedsMax { count, max_iter });
        }

        Ok(Self {
            width,
            height,
            max_iter,
            counts,
        })
    }

    /// Counts straight from the evaluator, which already guarantees shape
    /// and range.
    pub(crate) fn from_evaluation(width: u32, height: u32, max_iter: u32, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), width as usize * height as usize);

        Self {
            width,
            height,
            max_iter,
            counts,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.counts
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.width as usize)
    }

    /// Number of samples that never escaped within the budget.
    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.max_iter)
            .count()
    }
}
