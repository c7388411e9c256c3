use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cloud::DecodedGeometry;
use crate::error::Result;

/// A shared flag telling an in-flight pass that a newer load has started.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token, and every clone of it, as cancelled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Decodes a surface or point-cloud file into vertex positions.
///
/// Implemented by the host; long-running loaders should poll `token` and
/// give up early once it is cancelled.
pub trait GeometryLoader {
    /// Loads the geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded or the load was
    /// cancelled.
    fn load(&self, token: &CancelToken) -> Result<DecodedGeometry>;
}

impl<F> GeometryLoader for F
where
    F: Fn(&CancelToken) -> Result<DecodedGeometry>,
{
    fn load(&self, token: &CancelToken) -> Result<DecodedGeometry> {
        self(token)
    }
}
