//! Memoized Fibonacci numbers.
//!
//! The memo table lives in a caller-owned [`FibonacciCache`]; there is no
//! process-wide state. Values are computed iteratively so large indexes do not
//! recurse.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibonacciError {
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("F({index}) does not fit in 64 bits")]
    Overflow { index: usize },
}

/// Memo table indexed by position: `memo[i] == F(i)`, with F(0)=0, F(1)=1.
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    memo: Vec<u64>,
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCache {
    pub fn new() -> Self {
        Self { memo: vec![0, 1] }
    }

    /// The first `n` terms, starting at F(0).
    ///
    /// Fails with `InvalidArgument` when `n <= 0`.
    pub fn sequence(&mut self, n: i64) -> Result<Vec<u64>, FibonacciError> {
        let count = usize::try_from(n)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(FibonacciError::InvalidArgument(
                "Number of terms must be a positive integer.",
            ))?;
        self.fill_to(count - 1)?;
        Ok(self.memo[..count].to_vec())
    }

    /// F(`index`), 0-indexed.
    ///
    /// Fails with `InvalidArgument` when `index` is negative.
    pub fn nth(&mut self, index: i64) -> Result<u64, FibonacciError> {
        let index = usize::try_from(index)
            .map_err(|_| FibonacciError::InvalidArgument("n must be a non-negative integer"))?;
        self.fill_to(index)?;
        Ok(self.memo[index])
    }

    fn fill_to(&mut self, index: usize) -> Result<(), FibonacciError> {
        while self.memo.len() <= index {
            let len = self.memo.len();
            let next = self.memo[len - 1]
                .checked_add(self.memo[len - 2])
                .ok_or(FibonacciError::Overflow { index: len })?;
            self.memo.push(next);
        }
        Ok(())
    }
}
