//! Error types for the settings store boundary.

/// Errors that can occur when reading or writing the settings store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No value is stored under the key.
    #[error("No value stored for key '{key}'")]
    Missing {
        /// The key that was looked up.
        key: String,
    },

    /// A stored value exists but has the wrong shape for the key.
    #[error("Corrupt value for key '{key}' (raw: {raw})")]
    Corrupt {
        /// The key that was looked up.
        key: String,
        /// The raw value found in the store.
        raw: i32,
    },

    /// The store rejected a write.
    #[error("Failed to write key '{key}'")]
    WriteFailed {
        /// The key that was being written.
        key: String,
    },
}
