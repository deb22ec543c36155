use actix_web::{web, HttpResponse};

use crate::core::{average_skill, FilterSet, PartnerAction};
use crate::models::{
    LoginPromptResponse, PartnerActionResponse, PartnerCard, PartnerSearchQuery,
    PartnerSearchResponse, UserProfile,
};
use crate::routes::{simulate_latency, ApiError, AppState, ClientId};

/// Configure partner search and action routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/partners", web::get().to(search_partners))
        .route("/partners/{id}/{action}", web::post().to(partner_action));
}

fn partner_card(profile: UserProfile) -> PartnerCard {
    PartnerCard {
        average_skill: average_skill(&profile.tennis_profile.skill_breakdown),
        profile,
    }
}

/// Partner search endpoint
///
/// GET /api/v1/partners?q=&skillLevel=&location=&playingStyle=&weekdays=&weekends=&evenings=&mornings=
async fn search_partners(
    state: web::Data<AppState>,
    query: web::Query<PartnerSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let filters = FilterSet::try_from(query.into_inner())?;

    simulate_latency(state.delays.load_delay()).await;

    let result = state.search.apply(state.demo.profiles().to_vec(), &filters);

    tracing::info!(
        "Returning {} partners (more: {})",
        result.partners.len(),
        result.has_more_results
    );

    Ok(HttpResponse::Ok().json(PartnerSearchResponse {
        total_results: result.partners.len(),
        partners: result.partners.into_iter().map(partner_card).collect(),
        has_more_results: result.has_more_results,
        page_size: state.search.page_size(),
    }))
}

/// Partner action endpoint
///
/// POST /api/v1/partners/{id}/{view|contact|match}
///
/// Without a session the client gets a login prompt carrying where to
/// come back to.
async fn partner_action(
    state: web::Data<AppState>,
    client: ClientId,
    path: web::Path<(String, PartnerAction)>,
) -> Result<HttpResponse, ApiError> {
    let (partner_id, action) = path.into_inner();

    if !state.gate.is_authenticated(client.as_str()).await {
        return Ok(HttpResponse::Unauthorized().json(LoginPromptResponse {
            prompt: action.prompt().to_string(),
            return_url: Some(action.return_url(&partner_id)),
            message: action.login_message().to_string(),
            login_url: action.login_url(&partner_id),
        }));
    }

    if action == PartnerAction::View {
        return Ok(HttpResponse::Ok().json(PartnerActionResponse {
            success: true,
            request_id: None,
            message: String::new(),
            redirect_to: Some(action.return_url(&partner_id)),
        }));
    }

    let partner = state
        .demo
        .profile_by_id(&partner_id)
        .ok_or_else(|| ApiError::NotFound("Partner not found".to_string()))?;

    simulate_latency(state.delays.action_delay()).await;

    let message = match action {
        PartnerAction::Contact => format!(
            "Contact request sent to {}. They will be notified via email.",
            partner.full_name()
        ),
        _ => format!(
            "Match request sent to {}! They will be notified and can accept or decline your request.",
            partner.full_name()
        ),
    };

    tracing::info!("{:?} request from {} to {}", action, client.as_str(), partner.id);

    Ok(HttpResponse::Ok().json(PartnerActionResponse {
        success: true,
        request_id: Some(uuid::Uuid::new_v4().to_string()),
        message,
        redirect_to: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_profiles;

    #[test]
    fn test_partner_card_flattens_profile() {
        let sarah = demo_profiles().into_iter().find(|p| p.id == "2").unwrap();
        let card = serde_json::to_value(partner_card(sarah)).unwrap();

        assert_eq!(card["id"], "2");
        assert_eq!(card["firstName"], "Sarah");
        assert_eq!(card["averageSkill"], 7);
    }
}
