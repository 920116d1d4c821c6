pub mod otp;
pub mod user;

use serde::Serialize;

/// Body for operations whose success payload is a confirmation message.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
