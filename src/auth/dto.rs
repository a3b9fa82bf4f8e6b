use serde::{Deserialize, Serialize};

use crate::auth::repo_types::Role;

/// Request body for user registration. Name is optional.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_uses_camel_case_user_id() {
        let response = AuthResponse {
            success: true,
            message: "Account created".into(),
            token: "t".into(),
            user_id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: Role::Child,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["role"], "child");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn register_request_defaults_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }
}
