use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::navigation::{
    login_url, profile_url, ProfileSection, GUARD_MESSAGE, OWN_PROFILE_MESSAGE,
};
use crate::core::{availability_text, average_skill, skill_items, View};
use crate::models::{
    EditLink, LoginPromptResponse, ProfileCreatedResponse, ProfileFormData, ProfileQuery,
    ProfileViewResponse, UserProfile,
};
use crate::routes::{simulate_latency, ApiError, AppState, ClientId};

/// Configure profile viewer and profile creation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profile", web::get().to(view_profile))
        .route("/profiles", web::post().to(create_profile));
}

fn login_prompt(return_url: Option<String>, message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(LoginPromptResponse {
        prompt: message.to_string(),
        login_url: login_url(return_url.as_deref(), Some(message)),
        return_url,
        message: message.to_string(),
    })
}

fn profile_view(profile: &UserProfile, is_viewing_own_profile: bool) -> ProfileViewResponse {
    let tennis = &profile.tennis_profile;

    let edit_links = if is_viewing_own_profile {
        ProfileSection::ALL
            .iter()
            .map(|section| EditLink {
                section: *section,
                url: section.edit_url(),
            })
            .collect()
    } else {
        Vec::new()
    };

    ProfileViewResponse {
        average_skill: average_skill(&tennis.skill_breakdown),
        skill_items: skill_items(&tennis.skill_breakdown),
        availability_text: availability_text(&tennis.availability),
        profile: profile.clone(),
        is_viewing_own_profile,
        edit_links,
    }
}

/// Profile viewer endpoint
///
/// GET /api/v1/profile?id={id}
///
/// Without `id` the client's own profile is shown.
async fn view_profile(
    state: web::Data<AppState>,
    client: ClientId,
    query: web::Query<ProfileQuery>,
) -> Result<HttpResponse, ApiError> {
    let requested_id = query.id.as_deref().filter(|id| !id.is_empty());

    if !state.gate.is_authenticated(client.as_str()).await {
        let path = match requested_id {
            Some(id) => profile_url(id),
            None => View::Profile.path().to_string(),
        };
        return Ok(login_prompt(Some(path), GUARD_MESSAGE));
    }

    let current_user_id = state.gate.current_user(client.as_str()).await.map(|u| u.id);

    match requested_id {
        Some(id) => {
            let profile = state.demo.require_profile(id)?;

            let own = current_user_id.as_deref() == Some(id);
            Ok(HttpResponse::Ok().json(profile_view(profile, own)))
        }
        None => {
            let own_profile = current_user_id
                .as_deref()
                .and_then(|id| state.demo.profile_by_id(id));

            match own_profile {
                Some(profile) => Ok(HttpResponse::Ok().json(profile_view(profile, true))),
                None => {
                    tracing::info!("No own profile for client {}, sending to login", client.as_str());
                    Ok(login_prompt(None, OWN_PROFILE_MESSAGE))
                }
            }
        }
    }
}

/// Profile creation endpoint
///
/// POST /api/v1/profiles
///
/// Validates the form and echoes the resulting profile. The profile store
/// itself is read-only.
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<ProfileFormData>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    simulate_latency(state.delays.submit_delay()).await;

    let profile = req
        .into_inner()
        .into_profile(uuid::Uuid::new_v4().to_string(), chrono::Utc::now());

    tracing::info!("Profile form accepted for {}", profile.email);

    Ok(HttpResponse::Created().json(ProfileCreatedResponse {
        success: true,
        profile,
        redirect_to: View::Profile.path().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_profiles;

    #[test]
    fn test_profile_view_derived_fields() {
        let marco = demo_profiles().into_iter().find(|p| p.id == "3").unwrap();
        let view = profile_view(&marco, false);

        // 9+9+8+9+10+8+8+10 = 71 -> 8.875
        assert_eq!(view.average_skill, 9);
        assert_eq!(view.availability_text, "Weekdays, Weekends & Mornings");
        assert_eq!(view.skill_items.len(), 8);
        assert!(!view.is_viewing_own_profile);
        assert!(view.edit_links.is_empty());
    }

    #[test]
    fn test_own_profile_has_edit_links() {
        let alex = demo_profiles().into_iter().find(|p| p.id == "1").unwrap();
        let view = profile_view(&alex, true);

        let urls: Vec<&str> = view.edit_links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/profile-creation?section=personal",
                "/profile-creation?section=tennis",
                "/profile-creation?section=preferences",
            ]
        );
    }
}
