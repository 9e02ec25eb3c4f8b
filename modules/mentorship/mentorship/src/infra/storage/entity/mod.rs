pub mod availability_slot;
pub mod request;
pub mod session;
