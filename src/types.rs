/// Opaque value attached to a history entry at navigation time.
pub type HistoryState = serde_json::Value;
