mod dto;
mod error;
mod extract;
mod handlers;
mod routes;

pub use dto::{
    BookSessionBody, CreateRequestBody, DecideRequestBody, ReplaceSlotsBody,
    UpdateSessionStatusBody,
};
pub use routes::{AppState, router};
