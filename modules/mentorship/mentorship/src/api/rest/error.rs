use http::StatusCode;

use crate::api::problem::Problem;
use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 problem document.
///
/// The taxonomy is fixed: invalid input 400, invalid reference 422,
/// forbidden 403, not found 404, conflict 409; storage and collaborator
/// failures collapse to an opaque 500 with details only in the logs.
pub(crate) fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::RequestNotFound { .. } | DomainError::SessionNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string())
                .with_code("mentorship.not_found")
        }
        DomainError::NotRequestMentor { .. }
        | DomainError::NotRequestMentee { .. }
        | DomainError::NotSessionMentor { .. }
        | DomainError::RoleRequired { .. }
        | DomainError::NotBookingEligible { .. } => {
            Problem::new(StatusCode::FORBIDDEN, "Forbidden", e.to_string())
                .with_code("mentorship.forbidden")
        }
        DomainError::RoleMismatch { .. } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid Reference",
            e.to_string(),
        )
        .with_code("mentorship.invalid_reference"),
        DomainError::DuplicateRequest { .. } => {
            Problem::new(StatusCode::CONFLICT, "Conflict", e.to_string())
                .with_code("mentorship.request_conflict")
        }
        DomainError::InvalidDate { .. }
        | DomainError::InvalidDecision { .. }
        | DomainError::TooManySlots { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Input", e.to_string())
                .with_code("mentorship.invalid_input")
        }
        DomainError::Directory { .. } | DomainError::Database { .. } => {
            tracing::error!(error = %e, "internal error while handling request");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
            .with_code("mentorship.internal")
        }
    };
    problem.with_instance(instance)
}
