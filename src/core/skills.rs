use serde::{Deserialize, Serialize};

use crate::models::{Availability, SkillBreakdown, SkillItem};

/// Rounded mean of the eight skill ratings
///
/// Halves round away from zero, so 6.5 becomes 7.
pub fn average_skill(breakdown: &SkillBreakdown) -> u8 {
    let items = breakdown.items();
    let sum: u32 = items.iter().map(|(_, v)| *v as u32).sum();
    let mean = sum as f64 / items.len() as f64;
    mean.round() as u8
}

pub fn skill_items(breakdown: &SkillBreakdown) -> Vec<SkillItem> {
    breakdown
        .items()
        .iter()
        .map(|(name, value)| SkillItem {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

/// Human readable list of available slots
///
/// "Weekdays", "Weekdays & Evenings", "Weekdays, Weekends & Evenings".
pub fn availability_text(availability: &Availability) -> String {
    let mut slots: Vec<&str> = [
        (availability.weekdays, "Weekdays"),
        (availability.weekends, "Weekends"),
        (availability.evenings, "Evenings"),
        (availability.mornings, "Mornings"),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| name)
    .collect();

    match slots.len() {
        0 => "Not specified".to_string(),
        1 => slots[0].to_string(),
        2 => slots.join(" & "),
        _ => {
            let last = slots.pop().unwrap_or_default();
            format!("{} & {}", slots.join(", "), last)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score a password on length, case mix, digits and special characters
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];

    match checks.iter().filter(|passed| **passed).count() {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Fair,
        4 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_skill_rounds() {
        // Alex: 8+7+9+6+8+9+7+6 = 60 -> 7.5 -> 8
        let alex = SkillBreakdown {
            technique: 8,
            strategy: 7,
            fitness: 9,
            mental: 6,
            serve: 8,
            forehand: 9,
            backhand: 7,
            volley: 6,
        };
        assert_eq!(average_skill(&alex), 8);
        assert_eq!(average_skill(&SkillBreakdown::default()), 5);
    }

    #[test]
    fn test_availability_text() {
        let mut a = Availability::default();
        assert_eq!(availability_text(&a), "Not specified");

        a.evenings = true;
        assert_eq!(availability_text(&a), "Evenings");

        a.weekdays = true;
        assert_eq!(availability_text(&a), "Weekdays & Evenings");

        a.weekends = true;
        assert_eq!(availability_text(&a), "Weekdays, Weekends & Evenings");

        a.mornings = true;
        assert_eq!(availability_text(&a), "Weekdays, Weekends, Evenings & Mornings");
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), PasswordStrength::Weak);
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefgh1"), PasswordStrength::Fair);
        assert_eq!(password_strength("Abcdefgh1"), PasswordStrength::Good);
        assert_eq!(password_strength("Abcdefgh1!"), PasswordStrength::Strong);
    }

    #[test]
    fn test_skill_items() {
        let items = skill_items(&SkillBreakdown::default());
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].name, "technique");
        assert!(items.iter().all(|i| i.value == 5));
    }
}
