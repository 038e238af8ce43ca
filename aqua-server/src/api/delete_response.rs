use serde::Serialize;

/// Response body for successful DELETE requests
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
