use crate::core::filters::{
    matches_availability, matches_city, matches_playing_style, matches_query,
    matches_skill_level, FilterSet,
};
use crate::models::UserProfile;

/// Number of partners shown before the "load more" control appears
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Result of the filtering process
#[derive(Debug)]
pub struct SearchResult {
    pub partners: Vec<UserProfile>,
    pub has_more_results: bool,
}

/// Partner filter engine - narrows the profile list one criterion at a time
///
/// # Pipeline Stages
/// 1. Free-text query over names, city, skill level and playing style
/// 2. Skill level equality
/// 3. City equality
/// 4. Playing style equality
/// 5. Availability requirements
///
/// No ranking is applied: matches keep their input order.
#[derive(Debug, Clone)]
pub struct PartnerSearch {
    page_size: usize,
}

impl PartnerSearch {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Apply every active criterion in `filters` to `partners`
    pub fn apply(&self, partners: Vec<UserProfile>, filters: &FilterSet) -> SearchResult {
        let total = partners.len();
        let mut filtered = partners;

        // Stage 1: free text
        if let Some(needle) = filters.active_query() {
            filtered.retain(|p| matches_query(p, &needle));
        }

        // Stage 2-4: structured equality filters
        if let Some(level) = filters.skill_level {
            filtered.retain(|p| matches_skill_level(p, level));
        }
        if let Some(city) = filters.city.as_deref() {
            filtered.retain(|p| matches_city(p, city));
        }
        if let Some(style) = filters.playing_style {
            filtered.retain(|p| matches_playing_style(p, style));
        }

        // Stage 5: availability
        if filters.has_availability_filter() {
            filtered.retain(|p| matches_availability(p, &filters.availability));
        }

        tracing::debug!(
            "Partner search kept {} of {} profiles",
            filtered.len(),
            total
        );

        let has_more_results = filtered.len() > self.page_size;

        SearchResult {
            partners: filtered,
            has_more_results,
        }
    }
}

impl Default for PartnerSearch {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::matches_filter_set;
    use crate::models::{Availability, PlayingStyle, SkillLevel};
    use crate::services::demo_data::demo_profiles;

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.partners.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let search = PartnerSearch::default();
        let result = search.apply(demo_profiles(), &FilterSet::default());

        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        assert!(!result.has_more_results);
    }

    #[test]
    fn test_query_rotterdam_returns_all() {
        let search = PartnerSearch::default();
        let filters = FilterSet {
            query: Some("rotterdam".to_string()),
            ..Default::default()
        };

        let result = search.apply(demo_profiles(), &filters);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_marco_returns_profile_3() {
        let search = PartnerSearch::default();
        let filters = FilterSet {
            query: Some("MARCO".to_string()),
            ..Default::default()
        };

        let result = search.apply(demo_profiles(), &filters);
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn test_has_more_results_threshold() {
        let search = PartnerSearch::new(2);
        let result = search.apply(demo_profiles(), &FilterSet::default());
        assert!(result.has_more_results);

        let search = PartnerSearch::new(3);
        let result = search.apply(demo_profiles(), &FilterSet::default());
        assert!(!result.has_more_results);
    }

    #[test]
    fn test_staged_pipeline_agrees_with_single_predicate() {
        let search = PartnerSearch::default();
        let profiles = demo_profiles();

        let levels = [None, Some(SkillLevel::Advanced), Some(SkillLevel::Beginner)];
        let styles = [None, Some(PlayingStyle::AllAround)];
        let queries = [None, Some("r"), Some("berg")];

        for level in levels {
            for style in styles {
                for query in queries {
                    for bits in 0u8..16 {
                        let filters = FilterSet {
                            query: query.map(str::to_string),
                            skill_level: level,
                            city: None,
                            playing_style: style,
                            availability: Availability {
                                weekdays: bits & 1 != 0,
                                weekends: bits & 2 != 0,
                                evenings: bits & 4 != 0,
                                mornings: bits & 8 != 0,
                            },
                        };

                        let expected: Vec<&str> = profiles
                            .iter()
                            .filter(|p| matches_filter_set(p, &filters))
                            .map(|p| p.id.as_str())
                            .collect();

                        let result = search.apply(profiles.clone(), &filters);
                        assert_eq!(ids(&result), expected, "filters: {:?}", filters);
                    }
                }
            }
        }
    }
}
