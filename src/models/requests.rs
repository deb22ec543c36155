use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{
    AgeRange, Availability, GenderPreference, Location, PartnerPreferences, PartnerSkillLevel,
    PlayingStyle, SkillBreakdown, SkillLevel, Surface, TennisProfile, Theme, UserProfile,
};

/// Login form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Query parameters of the login view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginViewQuery {
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Partner search query string
///
/// Every field is optional; empty strings count as unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub playing_style: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub weekdays: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub weekends: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub evenings: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub mornings: Option<bool>,
}

/// Read an optional flag where an empty value (`?weekdays=`) means unset
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<bool>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected true or false, got '{}'", value))),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigateQuery {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

fn default_min_age() -> u8 { 18 }
fn default_max_age() -> u8 { 80 }
fn default_max_distance() -> u16 { 25 }

/// Account registration form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(required(message = "Skill level is required"))]
    pub skill_level: Option<SkillLevel>,
    #[validate(required(message = "Playing style is required"))]
    pub playing_style: Option<PlayingStyle>,
    #[validate(required(message = "Preferred surface is required"))]
    pub preferred_surface: Option<Surface>,
    #[serde(default)]
    pub weekdays: bool,
    #[serde(default)]
    pub weekends: bool,
    #[serde(default)]
    pub evenings: bool,
    #[serde(default)]
    pub mornings: bool,
    #[validate(
        required(message = "Experience is required"),
        range(min = 0, max = 50, message = "Experience must be between 0 and 50 years")
    )]
    pub experience: Option<u8>,
    #[serde(default)]
    pub about_me: Option<String>,

    #[serde(default = "default_min_age")]
    #[validate(range(min = 18, max = 80))]
    pub min_age: u8,
    #[serde(default = "default_max_age")]
    #[validate(range(min = 18, max = 80))]
    pub max_age: u8,
    #[serde(default)]
    pub partner_skill_level: PartnerSkillLevel,
    #[serde(default = "default_max_distance")]
    #[validate(range(min = 1, max = 100))]
    pub max_distance: u16,
    #[serde(default)]
    pub gender_preference: GenderPreference,
    #[serde(default)]
    pub tournaments: bool,
    #[serde(default)]
    pub coaching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoForm {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<chrono::NaiveDate>,
}

fn default_country() -> String { "Netherlands".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationForm {
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    #[serde(default = "default_country")]
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

fn default_rating() -> u8 { 5 }

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillBreakdownForm {
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub technique: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub strategy: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub fitness: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub mental: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub serve: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub forehand: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub backhand: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 10))]
    pub volley: u8,
}

impl Default for SkillBreakdownForm {
    fn default() -> Self {
        Self {
            technique: 5,
            strategy: 5,
            fitness: 5,
            mental: 5,
            serve: 5,
            forehand: 5,
            backhand: 5,
            volley: 5,
        }
    }
}

impl From<SkillBreakdownForm> for SkillBreakdown {
    fn from(form: SkillBreakdownForm) -> Self {
        Self {
            technique: form.technique,
            strategy: form.strategy,
            fitness: form.fitness,
            mental: form.mental,
            serve: form.serve,
            forehand: form.forehand,
            backhand: form.backhand,
            volley: form.volley,
        }
    }
}

fn default_experience() -> u8 { 1 }

fn default_availability() -> Availability {
    Availability {
        weekdays: true,
        weekends: true,
        evenings: true,
        mornings: false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TennisProfileForm {
    pub skill_level: SkillLevel,
    pub playing_style: PlayingStyle,
    pub preferred_surface: Surface,
    #[serde(default = "default_availability")]
    pub availability: Availability,
    #[serde(default)]
    #[validate(nested)]
    pub skill_breakdown: SkillBreakdownForm,
    #[serde(default = "default_experience")]
    pub experience: u8,
    #[serde(default)]
    pub tournaments: bool,
    #[serde(default)]
    pub coaching: bool,
    #[serde(default)]
    pub about_me: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AgeRangeForm {
    #[serde(default = "default_min_age")]
    #[validate(range(min = 16, message = "Minimum age must be at least 16"))]
    pub min: u8,
    #[serde(default = "default_partner_max_age")]
    #[validate(range(max = 80, message = "Maximum age must be at most 80"))]
    pub max: u8,
}

fn default_partner_max_age() -> u8 { 65 }

impl Default for AgeRangeForm {
    fn default() -> Self {
        Self {
            min: default_min_age(),
            max: default_partner_max_age(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesForm {
    #[serde(default)]
    #[validate(nested)]
    pub partner_age_range: AgeRangeForm,
    #[serde(default)]
    pub partner_skill_level: PartnerSkillLevel,
    #[serde(default = "default_max_distance")]
    #[validate(range(min = 1, max = 100))]
    pub max_distance: u16,
    #[serde(default)]
    pub gender_preference: GenderPreference,
}

/// Profile creation form, one section per wizard step
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    #[validate(nested)]
    pub personal_info: PersonalInfoForm,
    #[validate(nested)]
    pub location: LocationForm,
    #[validate(nested)]
    pub tennis_profile: TennisProfileForm,
    #[validate(nested)]
    pub preferences: PreferencesForm,
}

impl ProfileFormData {
    /// Build a profile record from an accepted form
    pub fn into_profile(self, id: String, now: chrono::DateTime<chrono::Utc>) -> UserProfile {
        let tennis = self.tennis_profile;
        let prefs = self.preferences;

        UserProfile {
            id,
            first_name: self.personal_info.first_name,
            last_name: self.personal_info.last_name,
            email: self.personal_info.email,
            phone: self.personal_info.phone.filter(|p| !p.is_empty()),
            date_of_birth: self.personal_info.date_of_birth,
            profile_image: None,
            location: Location {
                city: self.location.city,
                postal_code: self.location.postal_code,
                country: self.location.country,
            },
            tennis_profile: TennisProfile {
                skill_level: tennis.skill_level,
                playing_style: tennis.playing_style,
                preferred_surface: tennis.preferred_surface,
                availability: tennis.availability,
                skill_breakdown: tennis.skill_breakdown.into(),
                experience: tennis.experience,
                tournaments: tennis.tournaments,
                coaching: tennis.coaching,
                about_me: tennis.about_me.filter(|a| !a.is_empty()),
            },
            preferences: PartnerPreferences {
                partner_age_range: Some(AgeRange {
                    min: prefs.partner_age_range.min,
                    max: prefs.partner_age_range.max,
                }),
                partner_skill_level: Some(prefs.partner_skill_level),
                max_distance: Some(prefs.max_distance),
                gender_preference: Some(prefs.gender_preference),
            },
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
