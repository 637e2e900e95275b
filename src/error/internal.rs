use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to decode a JSON column stored on an entity
    ///
    /// Occurs when a stored JSON array (banned words, whitelists) cannot be
    /// deserialized, indicating the row was written by something other than
    /// the application. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Failed to decode stored JSON column '{column}': {source}")]
    CorruptJsonColumn {
        /// Name of the column that failed to decode
        column: &'static str,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Failure to convert a mute expiry into a Discord timestamp
    ///
    /// Discord rejects timestamps outside its representable range. Results in
    /// a 500 Internal Server Error with a generic message returned to client.
    #[error("Failed to build Discord timestamp from {timestamp}: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that was rejected
        timestamp: i64,
        /// Why the conversion failed
        reason: String,
    },
}
