use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::error::ErrorBody;
use crate::routes::AppState;

/// Acting user, inserted by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

/// Reads `Authorization: Token <jwt>` (or `Bearer <jwt>`), falling back to
/// the `auth_token` cookie. Answers 401 when neither carries a valid token.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = header_token(req.headers())
        .or_else(|| jar.get(super::AUTH_COOKIE_NAME).map(|c| c.value().to_owned()))
    else {
        tracing::debug!("missing credentials");
        return unauthorized();
    };

    let claims = match super::validate_token(&token, &state.config.jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "invalid token");
            return unauthorized();
        }
    };

    req.extensions_mut().insert(Auth {
        user_id: claims.sub,
    });

    next.run(req).await
}

fn header_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("token") && !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_owned())
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(ErrorBody::new("authentication credentials were not provided")),
    )
        .into_response()
}
