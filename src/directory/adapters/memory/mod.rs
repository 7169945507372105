//! In-memory adapters for directory tests and lightweight composition.

mod user;

pub use user::InMemoryUserRepository;
