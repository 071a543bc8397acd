//! Nullable random: deterministic byte sources.

use seedvault_crypto::{CryptoError, RandomSource};
use std::sync::Mutex;

/// A deterministic [`RandomSource`] for testing.
///
/// Returns pre-configured chunks in order, cycling when exhausted. Each chunk
/// is repeated to fill the requested buffer.
pub struct NullRandom {
    outputs: Vec<Vec<u8>>,
    index: Mutex<usize>,
    failing: bool,
}

impl NullRandom {
    /// Create with a sequence of deterministic chunks, one per call.
    pub fn new(outputs: Vec<Vec<u8>>) -> Self {
        assert!(
            outputs.iter().all(|o| !o.is_empty()),
            "NullRandom chunks must be non-empty"
        );
        Self {
            outputs,
            index: Mutex::new(0),
            failing: false,
        }
    }

    /// Fill every buffer with the same byte.
    pub fn constant(value: u8) -> Self {
        Self::new(vec![vec![value]])
    }

    /// A source that is always unavailable.
    pub fn failing() -> Self {
        Self {
            outputs: Vec::new(),
            index: Mutex::new(0),
            failing: true,
        }
    }

    /// Number of fill requests served so far.
    pub fn calls(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl RandomSource for NullRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        if self.failing || self.outputs.is_empty() {
            return Err(CryptoError::RandomnessFailure(
                "null random source is unavailable".to_string(),
            ));
        }
        let mut idx = self.index.lock().unwrap();
        let chunk = &self.outputs[*idx % self.outputs.len()];
        *idx += 1;
        for (byte, value) in dest.iter_mut().zip(chunk.iter().cycle()) {
            *byte = *value;
        }
        Ok(())
    }
}
