use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string does not name a known enumerated value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `as_str`, `Display` and `FromStr` over the serde names of a unit enum
macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

string_enum!(SkillLevel, "skill level", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
    Expert => "expert",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayingStyle {
    Aggressive,
    Defensive,
    AllAround,
    ServeAndVolley,
    Baseline,
}

string_enum!(PlayingStyle, "playing style", {
    Aggressive => "aggressive",
    Defensive => "defensive",
    AllAround => "all-around",
    ServeAndVolley => "serve-and-volley",
    Baseline => "baseline",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Indoor,
    Any,
}

string_enum!(Surface, "surface", {
    Hard => "hard",
    Clay => "clay",
    Grass => "grass",
    Indoor => "indoor",
    Any => "any",
});

/// Skill level a player wants in a partner; `any` means no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerSkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[default]
    Any,
}

string_enum!(PartnerSkillLevel, "partner skill level", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
    Expert => "expert",
    Any => "any",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Male,
    Female,
    #[default]
    Any,
}

string_enum!(GenderPreference, "gender preference", {
    Male => "male",
    Female => "female",
    Any => "any",
});

/// UI colour scheme stored under the `theme` storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

string_enum!(Theme, "theme", {
    Dark => "dark",
    Light => "light",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Times of the week a player can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    pub weekdays: bool,
    pub weekends: bool,
    pub evenings: bool,
    pub mornings: bool,
}

/// Self-assessed ratings, each from 1 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub technique: u8,
    pub strategy: u8,
    pub fitness: u8,
    pub mental: u8,
    pub serve: u8,
    pub forehand: u8,
    pub backhand: u8,
    pub volley: u8,
}

impl SkillBreakdown {
    /// Ratings as (name, value) pairs in declaration order
    pub fn items(&self) -> [(&'static str, u8); 8] {
        [
            ("technique", self.technique),
            ("strategy", self.strategy),
            ("fitness", self.fitness),
            ("mental", self.mental),
            ("serve", self.serve),
            ("forehand", self.forehand),
            ("backhand", self.backhand),
            ("volley", self.volley),
        ]
    }
}

impl Default for SkillBreakdown {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TennisProfile {
    pub skill_level: SkillLevel,
    pub playing_style: PlayingStyle,
    pub preferred_surface: Surface,
    pub availability: Availability,
    pub skill_breakdown: SkillBreakdown,
    /// Years of playing
    pub experience: u8,
    pub tournaments: bool,
    pub coaching: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

/// What a player is looking for in a partner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_skill_level: Option<PartnerSkillLevel>,
    /// In kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_preference: Option<GenderPreference>,
}

/// Player profile with contact, location and tennis data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub location: Location,
    pub tennis_profile: TennisProfile,
    #[serde(default)]
    pub preferences: PartnerPreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Logged-in user record kept under the `currentUser` storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub profile: UserProfile,
}

/// Demo login account
#[derive(Debug, Clone, Copy)]
pub struct DemoCredential {
    pub id: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub email: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlayingStyle::ServeAndVolley).unwrap(),
            "\"serve-and-volley\""
        );
        assert_eq!(
            serde_json::to_string(&PlayingStyle::AllAround).unwrap(),
            "\"all-around\""
        );
        assert_eq!(serde_json::to_string(&SkillLevel::Expert).unwrap(), "\"expert\"");

        for style in PlayingStyle::ALL {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("advanced".parse::<SkillLevel>(), Ok(SkillLevel::Advanced));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));

        let err = "Advanced".parse::<SkillLevel>().unwrap_err();
        assert_eq!(err.kind, "skill level");
        assert_eq!(err.to_string(), "unknown skill level: Advanced");
    }

    #[test]
    fn test_skill_items_order() {
        let breakdown = SkillBreakdown {
            technique: 1,
            strategy: 2,
            fitness: 3,
            mental: 4,
            serve: 5,
            forehand: 6,
            backhand: 7,
            volley: 8,
        };

        let names: Vec<&str> = breakdown.items().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["technique", "strategy", "fitness", "mental", "serve", "forehand", "backhand", "volley"]
        );
        assert_eq!(breakdown.items()[7].1, 8);
    }

    #[test]
    fn test_preferences_skip_unset_fields() {
        let json = serde_json::to_value(PartnerPreferences::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
