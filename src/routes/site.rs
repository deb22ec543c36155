use actix_web::{web, HttpResponse};

use crate::core::{Navigation, View};
use crate::models::{HealthResponse, NavigateQuery, NavigateResponse, Theme, ThemeRequest, ThemeResponse};
use crate::routes::{AppState, ClientId};
use crate::services::THEME_KEY;

/// Configure health, navigation and preference routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/navigate", web::get().to(navigate))
        .route("/preferences/theme", web::get().to(get_theme))
        .route("/preferences/theme", web::put().to(set_theme));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Resolve a path through the route table and session guard
///
/// GET /api/v1/navigate?path=/profile
async fn navigate(
    state: web::Data<AppState>,
    client: ClientId,
    query: web::Query<NavigateQuery>,
) -> HttpResponse {
    let path = query.path.as_deref().unwrap_or("/");

    let response = match state.gate.navigate(client.as_str(), path).await {
        Navigation::Render(view) => NavigateResponse {
            allowed: true,
            view: view.name().to_string(),
            redirect_to: None,
        },
        Navigation::Redirect(target) => {
            let view = View::from_path(&target).unwrap_or(View::Home);
            NavigateResponse {
                allowed: false,
                view: view.name().to_string(),
                redirect_to: Some(target),
            }
        }
    };

    HttpResponse::Ok().json(response)
}

/// Stored colour scheme; anything but "dark" reads as light
async fn get_theme(state: web::Data<AppState>, client: ClientId) -> HttpResponse {
    let theme = state
        .gate
        .storage()
        .get_item(client.as_str(), THEME_KEY)
        .await
        .and_then(|t| t.parse::<Theme>().ok())
        .unwrap_or_default();

    HttpResponse::Ok().json(ThemeResponse { theme })
}

async fn set_theme(
    state: web::Data<AppState>,
    client: ClientId,
    req: web::Json<ThemeRequest>,
) -> HttpResponse {
    state
        .gate
        .storage()
        .set_item(client.as_str(), THEME_KEY, req.theme.as_str().to_string())
        .await;

    tracing::debug!("Client {} switched to {} theme", client.as_str(), req.theme);

    let mut response = HttpResponse::Ok();
    client.remember(&mut response);
    response.json(ThemeResponse { theme: req.theme })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_health_check_reports_version() {
        let resp = health_check().await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
