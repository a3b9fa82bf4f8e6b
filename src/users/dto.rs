use serde::{Deserialize, Serialize};

use crate::auth::repo_types::Role;

/// Request body for the role update. The role arrives as a raw string so that
/// membership failures map to 400 instead of a body-rejection status.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateRoleResponse {
    pub success: bool,
    pub message: String,
    pub role: Role,
}

/// Request body for saving preferences.
#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub sub_interests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub success: bool,
    pub message: String,
}
