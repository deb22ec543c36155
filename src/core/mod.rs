// Core logic exports
pub mod filters;
pub mod navigation;
pub mod search;
pub mod skills;

pub use filters::{matches_filter_set, FilterSet};
pub use navigation::{login_url, resolve, Navigation, PartnerAction, ProfileSection, View};
pub use search::{PartnerSearch, SearchResult, DEFAULT_PAGE_SIZE};
pub use skills::{availability_text, average_skill, password_strength, skill_items, PasswordStrength};
