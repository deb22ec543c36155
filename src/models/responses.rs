use serde::{Deserialize, Serialize};

use crate::core::navigation::ProfileSection;
use crate::core::skills::PasswordStrength;
use crate::models::domain::{UserProfile, Theme};

/// A partner as shown in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCard {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub average_skill: u8,
}

/// Response for the partner search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSearchResponse {
    pub partners: Vec<PartnerCard>,
    pub total_results: usize,
    pub has_more_results: bool,
    pub page_size: usize,
}

/// Demo account listed on the login view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoAccount {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// State of the login view for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginViewResponse {
    pub return_url: String,
    pub message: String,
    /// Set when the client already has a session and should go straight on
    pub redirect_to: Option<String>,
    pub demo_accounts: Vec<DemoAccount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: String,
    pub username: String,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub success: bool,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub password_strength: PasswordStrength,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub value: u8,
}

/// Link into the profile editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditLink {
    pub section: ProfileSection,
    pub url: String,
}

/// Profile viewer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewResponse {
    pub profile: UserProfile,
    pub is_viewing_own_profile: bool,
    pub average_skill: u8,
    pub skill_items: Vec<SkillItem>,
    pub availability_text: String,
    /// Only filled for the client's own profile
    pub edit_links: Vec<EditLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreatedResponse {
    pub success: bool,
    pub profile: UserProfile,
    pub redirect_to: String,
}

/// Outcome of a partner action (view, contact, match)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerActionResponse {
    pub success: bool,
    pub request_id: Option<String>,
    pub message: String,
    pub redirect_to: Option<String>,
}

/// Prompt shown to a client that must log in before acting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPromptResponse {
    pub prompt: String,
    pub return_url: Option<String>,
    pub message: String,
    pub login_url: String,
}

/// Result of resolving a path through the route table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub allowed: bool,
    pub view: String,
    pub redirect_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
