mod error;
pub mod memory;
pub mod repo;
mod repo_types;

pub use error::{UserRepoError, UserRepoResult};
pub use memory::InMemoryUserRepository;
pub use repo::{PgUserRepository, UserRepository};
pub use repo_types::User;
