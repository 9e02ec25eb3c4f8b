// Extractors are consumed by value per axum's handler contract.
#![allow(clippy::needless_pass_by_value)]

pub(super) mod availability;
pub(super) mod mentors;
pub(super) mod requests;
pub(super) mod sessions;

use crate::api::problem::Problem;

pub(super) type ApiResult<T> = Result<T, Problem>;
