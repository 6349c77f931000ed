//! Registration, login, and profile endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nuru_core::Currency;

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::UserProfile;
use crate::services::{AuthService, IssuedToken, RegisterInput};
use crate::state::AppState;

/// Country assumed when registration doesn't name one.
const DEFAULT_COUNTRY: &str = "Kenya";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub preferred_currency: Option<Currency>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token plus profile, returned by every login-shaped endpoint.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

impl SessionResponse {
    pub(crate) fn from_parts(user: &crate::models::User, token: IssuedToken) -> Self {
        Self {
            token: token.token,
            expires_at: token.expires_at,
            user: UserProfile::from(user),
        }
    }
}

/// `POST /auth/register` - create a customer account and log in.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let country = req.country.as_deref().unwrap_or(DEFAULT_COUNTRY);

    let (user, token) = AuthService::new(state.pool())
        .register(RegisterInput {
            name: req.name.trim(),
            email: &req.email,
            phone: req.phone.as_deref(),
            password: &req.password,
            country,
            preferred_currency: req.preferred_currency,
        })
        .await?;

    tracing::info!(user_id = %user.id, "Customer registered");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_parts(&user, token)),
    ))
}

/// `POST /auth/login` - exchange credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    let (user, token) = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(SessionResponse::from_parts(&user, token)))
}

/// `GET /auth/profile` - the authenticated user's profile.
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<UserProfile> {
    Json(UserProfile::from(&user))
}
