use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::warn;

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the bearer token to a stored credential. Runs before every
/// protected handler; any failure along the way is a 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::unauthorized("invalid Authorization header"))?;

        let subject = state.tokens.validate(token).map_err(|e| {
            warn!(error = %e, "token validation failed");
            ApiError::unauthorized("invalid or expired token")
        })?;

        // The subject may no longer map to a credential (deleted between
        // issuance and use); that is also a 401.
        let user = User::find_by_username(&state.db, &subject)
            .await?
            .ok_or_else(|| {
                warn!(subject = %subject, "token subject has no credential");
                ApiError::unauthorized("user not found")
            })?;

        Ok(CurrentUser(user))
    }
}
