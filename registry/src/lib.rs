pub mod error;
pub mod game;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use game::Game;
pub use registry::{Registry, find_user_by_id, sort_users_by_balance};
pub use types::{Role, User};
