use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::navigation::{DEFAULT_RETURN_URL, HOME_PATH};
use crate::core::{password_strength, View};
use crate::models::{
    DemoAccount, LoginRequest, LoginResponse, LoginViewQuery, LoginViewResponse, LogoutResponse,
    RegisterRequest, RegisterResponse, SessionResponse,
};
use crate::routes::{simulate_latency, ApiError, AppState, ClientId};

/// Configure login, logout, session and registration routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::get().to(login_view))
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout))
        .route("/auth/session", web::get().to(session))
        .route("/auth/register", web::post().to(register));
}

/// Only app-internal paths are followed; anything else lands on the profile
fn return_url_or_default(return_url: Option<&str>) -> String {
    return_url
        .filter(|u| is_internal_path(u))
        .unwrap_or(DEFAULT_RETURN_URL)
        .to_string()
}

fn is_internal_path(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.starts_with("/\\")
}

/// Login view state
///
/// GET /api/v1/auth/login?returnUrl=/profile&message=...
///
/// A client that already has a session is sent straight to `returnUrl`.
async fn login_view(
    state: web::Data<AppState>,
    client: ClientId,
    query: web::Query<LoginViewQuery>,
) -> HttpResponse {
    let return_url = return_url_or_default(query.return_url.as_deref());
    let authenticated = state.gate.is_authenticated(client.as_str()).await;

    if authenticated {
        tracing::debug!("Client {} already logged in, redirecting to {}", client.as_str(), return_url);
    }

    let demo_accounts = state
        .demo
        .credentials()
        .iter()
        .map(|c| DemoAccount {
            name: state.demo.account_name(c),
            username: c.username.to_string(),
            password: c.password.to_string(),
        })
        .collect();

    HttpResponse::Ok().json(LoginViewResponse {
        redirect_to: authenticated.then(|| return_url.clone()),
        return_url,
        message: query.message.clone().unwrap_or_default(),
        demo_accounts,
    })
}

/// Login endpoint
///
/// POST /api/v1/auth/login
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "password": "string",
///   "returnUrl": "/profile"
/// }
/// ```
async fn login(
    state: web::Data<AppState>,
    client: ClientId,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    simulate_latency(state.delays.login_delay()).await;

    let user = match state.demo.authenticate(&req.username, &req.password) {
        Ok(user) => user,
        Err(e) => {
            tracing::info!("Failed login attempt for {}", req.username);
            return Err(e.into());
        }
    };

    state.gate.sign_in(client.as_str(), &user).await?;

    let mut response = HttpResponse::Ok();
    client.remember(&mut response);
    Ok(response.json(LoginResponse {
        success: true,
        user_id: user.id,
        username: user.username,
        redirect_to: return_url_or_default(req.return_url.as_deref()),
    }))
}

/// Logout endpoint; always succeeds
async fn logout(state: web::Data<AppState>, client: ClientId) -> HttpResponse {
    state.gate.sign_out(client.as_str()).await;

    HttpResponse::Ok().json(LogoutResponse {
        success: true,
        redirect_to: HOME_PATH.to_string(),
    })
}

/// Current session state of the client
async fn session(state: web::Data<AppState>, client: ClientId) -> HttpResponse {
    let authenticated = state.gate.is_authenticated(client.as_str()).await;
    let user = state.gate.current_user(client.as_str()).await;

    HttpResponse::Ok().json(SessionResponse {
        authenticated,
        user_id: user.as_ref().map(|u| u.id.clone()),
        username: user.map(|u| u.username),
    })
}

/// Registration endpoint
///
/// POST /api/v1/auth/register
///
/// Validates the form and points the client at profile creation. No
/// account is stored.
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    simulate_latency(state.delays.submit_delay()).await;

    tracing::info!("Registration accepted for {}", req.email);

    Ok(HttpResponse::Ok().json(RegisterResponse {
        success: true,
        password_strength: password_strength(&req.password),
        redirect_to: View::ProfileCreation.path().to_string(),
    }))
}
