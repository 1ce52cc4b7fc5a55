//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Public view of a user (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Sidebar entry: a user plus live presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
}

// Request bodies use `Option` so that missing fields become a 400 from the
// use case instead of an extractor rejection.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "profilePic")]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessageRequest {
    pub text: Option<String>,
    /// Base64 data URL.
    pub image: Option<String>,
}

/// `{"message": "..."}` body used for errors and simple acknowledgements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
}
