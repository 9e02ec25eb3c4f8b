use axum::extract::FromRequestParts;
use directory_sdk::Role;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::api::problem::Problem;
use crate::contract::AuthContext;

const USER_ID_HEADER: &str = "x-user-id";
const USER_ROLE_HEADER: &str = "x-user-role";

fn unauthenticated(detail: &str) -> Problem {
    Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized", detail)
        .with_code("mentorship.unauthenticated")
}

/// Extract the already-authenticated caller identity from gateway-injected
/// headers. The core never sees credentials; the upstream gateway
/// terminates authentication and forwards `x-user-id` / `x-user-role`.
impl<S: Send + Sync> FromRequestParts<S> for AuthContext {
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthenticated("missing x-user-id header"))?;
        let user_id: Uuid = user_id
            .parse()
            .map_err(|_| unauthenticated("x-user-id is not a valid UUID"))?;

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthenticated("missing x-user-role header"))?;
        let role: Role = role
            .parse()
            .map_err(|()| unauthenticated("x-user-role must be admin, mentor or mentee"))?;

        Ok(AuthContext::new(user_id, role))
    }
}
