//! Identity collaborator implementations.
//!
//! - `bcrypt`: password hashing
//! - `jwt`: HS256 session tokens

pub mod bcrypt;
pub mod jwt;

pub use self::bcrypt::BcryptPasswordHasher;
pub use self::jwt::{JwtTokenService, TOKEN_TTL_SECS};
