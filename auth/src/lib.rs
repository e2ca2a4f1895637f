//! Authentication infrastructure library
//!
//! Provides the building blocks the vaccination API authenticates with:
//! - Password hashing (Argon2id)
//! - Signed, time-limited access tokens (HS256 JWT)
//! - The fixed role set carried in token claims
//!
//! The library performs no I/O; the service wires these pieces into its
//! login operation and HTTP middleware.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Role, TokenService};
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let issued = tokens.issue(Uuid::new_v4(), "juanperez", Role::Doctor).unwrap();
//! let claims = tokens.verify(&issued.token).unwrap();
//! assert_eq!(claims.role, Role::Doctor);
//! ```

pub mod password;
pub mod role;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use role::UnknownRole;
pub use token::AccessClaims;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenService;
