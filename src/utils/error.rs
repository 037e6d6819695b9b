use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Invalid tracking number: {reason} (tracking: {tracking})")]
    InvalidTrackingNumber { tracking: String, reason: String },
}

impl CourierError {
    /// Packages the offending detect payload together with the rejection
    /// reason so callers can see exactly what they passed in.
    pub fn invalid_tracking_number<T>(tracking: &T, reason: &str) -> Self
    where
        T: Serialize + std::fmt::Debug,
    {
        let tracking =
            serde_json::to_string(tracking).unwrap_or_else(|_| format!("{:?}", tracking));
        CourierError::InvalidTrackingNumber {
            tracking,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
