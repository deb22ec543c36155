// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, Availability, CurrentUser, DemoCredential, GenderPreference, Location,
    PartnerPreferences, PartnerSkillLevel, PlayingStyle, SkillBreakdown, SkillLevel, Surface,
    TennisProfile, Theme, UnknownVariant, UserProfile,
};
pub use requests::{
    LoginRequest, LoginViewQuery, NavigateQuery, PartnerSearchQuery, ProfileFormData,
    ProfileQuery, RegisterRequest, ThemeRequest,
};
pub use responses::{
    DemoAccount, EditLink, ErrorResponse, HealthResponse, LoginPromptResponse, LoginResponse,
    LoginViewResponse, LogoutResponse, NavigateResponse, PartnerActionResponse, PartnerCard, PartnerSearchResponse,
    ProfileCreatedResponse, ProfileViewResponse, RegisterResponse, SessionResponse, SkillItem,
    ThemeResponse,
};
