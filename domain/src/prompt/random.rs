//! Random source capability used for template selection

/// Source of uniformly distributed indices.
///
/// The prompt generator never owns a global generator; callers inject one.
/// Implementations backed by a real RNG live in the infrastructure layer.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Always picks the same index, clamped to the last valid one.
///
/// Useful wherever template choice must be deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandomSource(pub usize);

impl RandomSource for FixedRandomSource {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_returns_index() {
        assert_eq!(FixedRandomSource(1).pick(2), 1);
        assert_eq!(FixedRandomSource(0).pick(2), 0);
    }

    #[test]
    fn test_fixed_source_clamps() {
        assert_eq!(FixedRandomSource(9).pick(2), 1);
    }
}
