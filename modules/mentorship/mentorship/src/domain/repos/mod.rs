mod requests_repo;
mod sessions_repo;
mod slots_repo;

pub use requests_repo::RequestsRepository;
pub use sessions_repo::SessionsRepository;
pub use slots_repo::SlotsRepository;
