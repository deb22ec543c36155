use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const DEFAULT_RETURN_URL: &str = "/profile";
pub const GUARD_MESSAGE: &str = "Please log in to continue";
pub const OWN_PROFILE_MESSAGE: &str = "Please log in to view your profile";

/// Views of the application route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    ProfileCreation,
    FindPartner,
    FindCourt,
    Profile,
    Login,
    Register,
}

impl View {
    /// Match a path (query string ignored) against the route table
    pub fn from_path(path: &str) -> Option<View> {
        let route = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');

        match route {
            "" => Some(View::Home),
            "profile-creation" => Some(View::ProfileCreation),
            "find-partner" => Some(View::FindPartner),
            "find-court" => Some(View::FindCourt),
            "profile" => Some(View::Profile),
            "login" => Some(View::Login),
            "register" => Some(View::Register),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::ProfileCreation => "/profile-creation",
            View::FindPartner => "/find-partner",
            View::FindCourt => "/find-court",
            View::Profile => "/profile",
            View::Login => "/login",
            View::Register => "/register",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::ProfileCreation => "profile-creation",
            View::FindPartner => "find-partner",
            View::FindCourt => "find-court",
            View::Profile => "profile",
            View::Login => "login",
            View::Register => "register",
        }
    }

    /// Views that require a session
    pub fn is_protected(&self) -> bool {
        matches!(self, View::Profile)
    }
}

/// Outcome of routing a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(String),
}

/// Route `path` through the table and the session guard
///
/// Unknown paths fall back to home. Protected views without a session
/// redirect to login, carrying the requested path and a message.
pub fn resolve(path: &str, authenticated: bool) -> Navigation {
    match View::from_path(path) {
        None => Navigation::Redirect(HOME_PATH.to_string()),
        Some(view) if view.is_protected() && !authenticated => {
            Navigation::Redirect(login_url(Some(path), Some(GUARD_MESSAGE)))
        }
        Some(view) => Navigation::Render(view),
    }
}

/// Build `/login` with optional `returnUrl` and `message` parameters
pub fn login_url(return_url: Option<&str>, message: Option<&str>) -> String {
    let params: Vec<String> = [("returnUrl", return_url), ("message", message)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if params.is_empty() {
        LOGIN_PATH.to_string()
    } else {
        format!("{}?{}", LOGIN_PATH, params.join("&"))
    }
}

pub fn profile_url(id: &str) -> String {
    format!("{}?id={}", View::Profile.path(), urlencoding::encode(id))
}

/// Action on a partner card that needs a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerAction {
    View,
    Contact,
    Match,
}

impl PartnerAction {
    /// Where to come back to after logging in
    pub fn return_url(&self, partner_id: &str) -> String {
        match self {
            PartnerAction::View => profile_url(partner_id),
            PartnerAction::Contact | PartnerAction::Match => View::FindPartner.path().to_string(),
        }
    }

    /// Message shown on the login view
    pub fn login_message(&self) -> &'static str {
        match self {
            PartnerAction::View => "Please log in to view partner profiles",
            PartnerAction::Contact => "Please log in to contact partners",
            PartnerAction::Match => "Please log in to send match requests",
        }
    }

    /// Text of the inline prompt on the partner card
    pub fn prompt(&self) -> &'static str {
        match self {
            PartnerAction::View => "Log in to view this partner's full profile",
            PartnerAction::Contact => "Log in to contact this partner",
            PartnerAction::Match => "Log in to send a match request",
        }
    }

    pub fn login_url(&self, partner_id: &str) -> String {
        login_url(Some(&self.return_url(partner_id)), Some(self.login_message()))
    }
}

/// Section of the profile editor an edit link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSection {
    Personal,
    Tennis,
    Preferences,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 3] = [
        ProfileSection::Personal,
        ProfileSection::Tennis,
        ProfileSection::Preferences,
    ];

    pub fn edit_url(&self) -> String {
        let section = match self {
            ProfileSection::Personal => "personal",
            ProfileSection::Tennis => "tennis",
            ProfileSection::Preferences => "preferences",
        };
        format!("{}?section={}", View::ProfileCreation.path(), section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(View::from_path("/"), Some(View::Home));
        assert_eq!(View::from_path(""), Some(View::Home));
        assert_eq!(View::from_path("/profile?id=3"), Some(View::Profile));
        assert_eq!(View::from_path("/find-partner/"), Some(View::FindPartner));
        assert_eq!(View::from_path("/nowhere"), None);
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        assert_eq!(resolve("/nowhere", true), Navigation::Redirect("/".to_string()));
    }

    #[test]
    fn test_guard_redirects_to_login() {
        let nav = resolve("/profile?id=2", false);
        assert_eq!(
            nav,
            Navigation::Redirect(
                "/login?returnUrl=%2Fprofile%3Fid%3D2&message=Please%20log%20in%20to%20continue"
                    .to_string()
            )
        );

        assert_eq!(resolve("/profile", true), Navigation::Render(View::Profile));
        assert_eq!(resolve("/find-partner", false), Navigation::Render(View::FindPartner));
    }

    #[test]
    fn test_login_url_omits_empty_params() {
        assert_eq!(login_url(None, None), "/login");
        assert_eq!(login_url(Some(""), None), "/login");
        assert_eq!(
            login_url(None, Some(OWN_PROFILE_MESSAGE)),
            "/login?message=Please%20log%20in%20to%20view%20your%20profile"
        );
    }

    #[test]
    fn test_partner_action_return_urls() {
        assert_eq!(PartnerAction::View.return_url("3"), "/profile?id=3");
        assert_eq!(PartnerAction::Contact.return_url("3"), "/find-partner");
        assert_eq!(PartnerAction::Match.return_url("3"), "/find-partner");
    }

    #[test]
    fn test_section_edit_url() {
        assert_eq!(
            ProfileSection::Tennis.edit_url(),
            "/profile-creation?section=tennis"
        );
    }
}
