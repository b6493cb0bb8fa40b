//! User entities.

pub mod model;
pub mod user_type;

pub use model::{CreateUser, UpdateProfile, User};
pub use user_type::UserType;
