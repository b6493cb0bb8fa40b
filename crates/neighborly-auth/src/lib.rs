//! # neighborly-auth
//!
//! Authentication building blocks: JWT issuing and validation, Argon2id
//! password hashing, and a sliding-window login throttle.

pub mod jwt;
pub mod password;
pub mod rate_limit;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rate_limit::LoginThrottle;
