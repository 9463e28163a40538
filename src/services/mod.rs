pub mod stop_repository;

pub use stop_repository::StopRepository;
