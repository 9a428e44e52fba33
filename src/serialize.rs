//! [`JobPayload`] → JSON serialization.

use crate::error::SerializeError;
use crate::types::JobPayload;

/// Serialize a payload to the JSON body sent to the job board.
///
/// `status` is emitted first, followed by the fields in registry order.
pub fn serialize(payload: &JobPayload) -> Result<String, SerializeError> {
    serde_json::to_string(payload).map_err(|e| SerializeError {
        message: format!("failed to serialize job payload: {}", e),
    })
}

impl JobPayload {
    pub fn to_json(&self) -> Result<String, SerializeError> {
        serialize(self)
    }
}
