//! Store configuration.

/// Configuration for a [`crate::concurrency::TokenStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Initial capacity hint (in entries) for the backing maps.
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
        }
    }
}
