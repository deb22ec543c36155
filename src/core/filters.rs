use crate::models::{
    Availability, PartnerSearchQuery, PlayingStyle, SkillLevel, UnknownVariant, UserProfile,
};

/// Criteria of the partner search view
///
/// Unset fields impose no constraint. Availability flags only constrain
/// when set to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub query: Option<String>,
    pub skill_level: Option<SkillLevel>,
    pub city: Option<String>,
    pub playing_style: Option<PlayingStyle>,
    pub availability: Availability,
}

impl FilterSet {
    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.active_query().is_none()
            && self.skill_level.is_none()
            && self.city.is_none()
            && self.playing_style.is_none()
            && !self.has_availability_filter()
    }

    /// The free-text query, lowercased, if one is active
    ///
    /// A query is active when it is non-blank. The untrimmed text is what
    /// gets matched.
    pub fn active_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(str::to_lowercase)
    }

    pub fn has_availability_filter(&self) -> bool {
        let a = &self.availability;
        a.weekdays || a.weekends || a.evenings || a.mornings
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<PartnerSearchQuery> for FilterSet {
    type Error = UnknownVariant;

    fn try_from(query: PartnerSearchQuery) -> Result<Self, Self::Error> {
        let skill_level = non_empty(query.skill_level)
            .map(|s| s.parse::<SkillLevel>())
            .transpose()?;
        let playing_style = non_empty(query.playing_style)
            .map(|s| s.parse::<PlayingStyle>())
            .transpose()?;

        Ok(FilterSet {
            query: non_empty(query.q),
            skill_level,
            city: non_empty(query.location),
            playing_style,
            availability: Availability {
                weekdays: query.weekdays.unwrap_or(false),
                weekends: query.weekends.unwrap_or(false),
                evenings: query.evenings.unwrap_or(false),
                mornings: query.mornings.unwrap_or(false),
            },
        })
    }
}

/// Case-insensitive substring match over names, city, skill level and style
///
/// `needle` must already be lowercased.
#[inline]
pub fn matches_query(profile: &UserProfile, needle: &str) -> bool {
    let tennis = &profile.tennis_profile;

    profile.first_name.to_lowercase().contains(needle)
        || profile.last_name.to_lowercase().contains(needle)
        || profile.location.city.to_lowercase().contains(needle)
        || tennis.skill_level.as_str().contains(needle)
        || tennis.playing_style.as_str().contains(needle)
}

#[inline]
pub fn matches_skill_level(profile: &UserProfile, level: SkillLevel) -> bool {
    profile.tennis_profile.skill_level == level
}

/// Exact, case-sensitive city comparison
#[inline]
pub fn matches_city(profile: &UserProfile, city: &str) -> bool {
    profile.location.city == city
}

#[inline]
pub fn matches_playing_style(profile: &UserProfile, style: PlayingStyle) -> bool {
    profile.tennis_profile.playing_style == style
}

/// Every required slot must be available on the profile
#[inline]
pub fn matches_availability(profile: &UserProfile, required: &Availability) -> bool {
    let available = &profile.tennis_profile.availability;

    (!required.weekdays || available.weekdays)
        && (!required.weekends || available.weekends)
        && (!required.evenings || available.evenings)
        && (!required.mornings || available.mornings)
}

/// Check a single profile against every active criterion
pub fn matches_filter_set(profile: &UserProfile, filters: &FilterSet) -> bool {
    if let Some(needle) = filters.active_query() {
        if !matches_query(profile, &needle) {
            return false;
        }
    }

    if let Some(level) = filters.skill_level {
        if !matches_skill_level(profile, level) {
            return false;
        }
    }

    if let Some(city) = filters.city.as_deref() {
        if !matches_city(profile, city) {
            return false;
        }
    }

    if let Some(style) = filters.playing_style {
        if !matches_playing_style(profile, style) {
            return false;
        }
    }

    matches_availability(profile, &filters.availability)
}
