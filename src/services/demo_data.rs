use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{
    AgeRange, Availability, CurrentUser, DemoCredential, GenderPreference, Location,
    PartnerPreferences, PartnerSkillLevel, PlayingStyle, SkillBreakdown, SkillLevel, Surface,
    TennisProfile, UserProfile,
};

/// Errors raised by the demo data store
#[derive(Debug, Error)]
pub enum DemoDataError {
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

static DEMO_CREDENTIALS: [DemoCredential; 3] = [
    DemoCredential {
        id: "1",
        username: "alex.martinez",
        password: "tennis123",
        email: "alex.martinez@email.com",
    },
    DemoCredential {
        id: "2",
        username: "sarah.berg",
        password: "tennis456",
        email: "sarah.vanderberg@email.com",
    },
    DemoCredential {
        id: "3",
        username: "marco.rossi",
        password: "tennis789",
        email: "marco.rossi@email.com",
    },
];

/// Outcome of a credential check
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub success: bool,
    pub user_id: Option<String>,
    pub profile: Option<UserProfile>,
}

/// Read-only profile store and demo account table
///
/// Nothing here is mutated after construction, so the store is shared
/// behind an `Arc` by every request.
#[derive(Debug, Clone)]
pub struct DemoDataService {
    profiles: Arc<Vec<UserProfile>>,
}

impl DemoDataService {
    pub fn new() -> Self {
        Self::with_profiles(demo_profiles())
    }

    pub fn with_profiles(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    pub fn credentials(&self) -> &'static [DemoCredential] {
        &DEMO_CREDENTIALS
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn profile_by_id(&self, id: &str) -> Option<&UserProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn require_profile(&self, id: &str) -> Result<&UserProfile, DemoDataError> {
        self.profile_by_id(id)
            .ok_or_else(|| DemoDataError::ProfileNotFound(id.to_string()))
    }

    /// Look up an exact username/password pair in the demo account table
    pub fn validate_login(&self, username: &str, password: &str) -> LoginResult {
        let account = self
            .credentials()
            .iter()
            .find(|c| c.username == username && c.password == password);

        match account {
            Some(account) => LoginResult {
                success: true,
                user_id: Some(account.id.to_string()),
                profile: self.profile_by_id(account.id).cloned(),
            },
            None => LoginResult {
                success: false,
                user_id: None,
                profile: None,
            },
        }
    }

    /// Build the session record for a login, failing unless both account and profile exist
    pub fn authenticate(&self, username: &str, password: &str) -> Result<CurrentUser, DemoDataError> {
        match self.validate_login(username, password) {
            LoginResult {
                success: true,
                user_id: Some(id),
                profile: Some(profile),
            } => Ok(CurrentUser {
                id,
                username: username.to_string(),
                profile,
            }),
            LoginResult {
                success: true,
                user_id: Some(id),
                profile: None,
            } => {
                tracing::warn!("Demo account {} has no profile", id);
                Err(DemoDataError::InvalidCredentials)
            }
            _ => Err(DemoDataError::InvalidCredentials),
        }
    }

    /// Display name for a demo account, taken from its profile
    pub fn account_name(&self, credential: &DemoCredential) -> String {
        self.profile_by_id(credential.id)
            .map(UserProfile::full_name)
            .unwrap_or_else(|| credential.username.to_string())
    }
}

impl Default for DemoDataService {
    fn default() -> Self {
        Self::new()
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn timestamp(year: i32, month: u32, day: u32) -> Option<chrono::DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn rotterdam(postal_code: &str) -> Location {
    Location {
        city: "Rotterdam".to_string(),
        postal_code: postal_code.to_string(),
        country: "Netherlands".to_string(),
    }
}

/// The built-in demo dataset
pub fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "1".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Martinez".to_string(),
            email: "alex.martinez@email.com".to_string(),
            phone: Some("+31 6 12345678".to_string()),
            date_of_birth: date(1990, 5, 15),
            profile_image: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face"
                    .to_string(),
            ),
            location: rotterdam("3011 AA"),
            tennis_profile: TennisProfile {
                skill_level: SkillLevel::Advanced,
                playing_style: PlayingStyle::Aggressive,
                preferred_surface: Surface::Hard,
                availability: Availability {
                    weekdays: true,
                    weekends: true,
                    evenings: true,
                    mornings: false,
                },
                skill_breakdown: SkillBreakdown {
                    technique: 8,
                    strategy: 7,
                    fitness: 9,
                    mental: 6,
                    serve: 8,
                    forehand: 9,
                    backhand: 7,
                    volley: 6,
                },
                experience: 12,
                tournaments: true,
                coaching: false,
                about_me: Some(
                    "Competitive player who loves aggressive baseline play. Looking for challenging matches and tournament partners."
                        .to_string(),
                ),
            },
            preferences: PartnerPreferences {
                partner_age_range: Some(AgeRange { min: 25, max: 40 }),
                partner_skill_level: Some(PartnerSkillLevel::Advanced),
                max_distance: Some(30),
                gender_preference: Some(GenderPreference::Any),
            },
            created_at: timestamp(2024, 1, 15),
            updated_at: timestamp(2024, 1, 15),
        },
        UserProfile {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "van der Berg".to_string(),
            email: "sarah.vanderberg@email.com".to_string(),
            phone: Some("+31 6 87654321".to_string()),
            date_of_birth: date(1988, 12, 3),
            profile_image: Some(
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face"
                    .to_string(),
            ),
            location: rotterdam("3012 BB"),
            tennis_profile: TennisProfile {
                skill_level: SkillLevel::Intermediate,
                playing_style: PlayingStyle::AllAround,
                preferred_surface: Surface::Clay,
                availability: Availability {
                    weekdays: true,
                    weekends: false,
                    evenings: true,
                    mornings: true,
                },
                skill_breakdown: SkillBreakdown {
                    technique: 6,
                    strategy: 7,
                    fitness: 8,
                    mental: 8,
                    serve: 5,
                    forehand: 7,
                    backhand: 6,
                    volley: 5,
                },
                experience: 6,
                tournaments: false,
                coaching: false,
                about_me: Some(
                    "Friendly player who enjoys social tennis and improving my game. Prefer clay courts for the slower pace."
                        .to_string(),
                ),
            },
            preferences: PartnerPreferences {
                partner_age_range: Some(AgeRange { min: 25, max: 45 }),
                partner_skill_level: Some(PartnerSkillLevel::Intermediate),
                max_distance: Some(25),
                gender_preference: Some(GenderPreference::Any),
            },
            created_at: timestamp(2024, 1, 10),
            updated_at: timestamp(2024, 1, 10),
        },
        UserProfile {
            id: "3".to_string(),
            first_name: "Marco".to_string(),
            last_name: "Rossi".to_string(),
            email: "marco.rossi@email.com".to_string(),
            phone: Some("+31 6 11223344".to_string()),
            date_of_birth: date(1995, 8, 22),
            profile_image: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
                    .to_string(),
            ),
            location: rotterdam("3013 CC"),
            tennis_profile: TennisProfile {
                skill_level: SkillLevel::Expert,
                playing_style: PlayingStyle::ServeAndVolley,
                preferred_surface: Surface::Grass,
                availability: Availability {
                    weekdays: true,
                    weekends: true,
                    evenings: false,
                    mornings: true,
                },
                skill_breakdown: SkillBreakdown {
                    technique: 9,
                    strategy: 9,
                    fitness: 8,
                    mental: 9,
                    serve: 10,
                    forehand: 8,
                    backhand: 8,
                    volley: 10,
                },
                experience: 18,
                tournaments: true,
                coaching: true,
                about_me: Some(
                    "Former college player and current coach. Specialize in serve-and-volley tactics. Available for coaching sessions."
                        .to_string(),
                ),
            },
            preferences: PartnerPreferences {
                partner_age_range: Some(AgeRange { min: 18, max: 50 }),
                partner_skill_level: Some(PartnerSkillLevel::Advanced),
                max_distance: Some(40),
                gender_preference: Some(GenderPreference::Any),
            },
            created_at: timestamp(2024, 1, 5),
            updated_at: timestamp(2024, 1, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_credentials() {
        let store = DemoDataService::new();

        for account in store.credentials() {
            let result = store.validate_login(account.username, account.password);
            assert!(result.success);
            assert_eq!(result.user_id.as_deref(), Some(account.id));
            assert_eq!(result.profile.map(|p| p.id).as_deref(), Some(account.id));
        }
    }

    #[test]
    fn test_invalid_credentials() {
        let store = DemoDataService::new();

        let cases = [
            ("alex.martinez", "tennis456"),
            ("Alex.Martinez", "tennis123"),
            ("alex.martinez ", "tennis123"),
            ("", ""),
            ("nobody", "tennis123"),
        ];

        for (username, password) in cases {
            let result = store.validate_login(username, password);
            assert!(!result.success, "{} should not log in", username);
            assert!(result.user_id.is_none());
            assert!(result.profile.is_none());
        }
    }

    #[test]
    fn test_authenticate_without_profile_fails() {
        let store = DemoDataService::with_profiles(vec![]);
        let result = store.validate_login("marco.rossi", "tennis789");
        assert!(result.success);
        assert!(result.profile.is_none());

        assert!(matches!(
            store.authenticate("marco.rossi", "tennis789"),
            Err(DemoDataError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_builds_session() {
        let store = DemoDataService::new();
        let user = store.authenticate("sarah.berg", "tennis456").unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.username, "sarah.berg");
        assert_eq!(user.profile.last_name, "van der Berg");
    }

    #[test]
    fn test_profile_ids_unique() {
        let profiles = demo_profiles();
        let ids: HashSet<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), profiles.len());
    }

    #[test]
    fn test_account_name() {
        let store = DemoDataService::new();
        let names: Vec<String> = store
            .credentials()
            .iter()
            .map(|c| store.account_name(c))
            .collect();
        assert_eq!(names, vec!["Alex Martinez", "Sarah van der Berg", "Marco Rossi"]);
    }
}
