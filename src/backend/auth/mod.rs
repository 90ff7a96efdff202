//! Authentication Module
//!
//! Membership for the site: registration, login, session tokens, the
//! session cookie and profile updates.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt credential hashing
//! ├── sessions.rs     - JWT issue and verification
//! ├── cookie.rs       - Session cookie formatting and parsing
//! ├── gateway.rs      - Signup, login, verify and profile flows
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email and password → member created → token returned and set as cookie
//! 2. **Login**: email and password → credentials verified → token returned and set as cookie
//! 3. **Verify / Me**: token → member, or 401
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 12) before storage
//! - Tokens are HS256 JWTs valid for 7 days
//! - Unknown email and wrong password give the same 401
//! - The password hash never leaves the gateway

/// bcrypt password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie
pub mod cookie;

/// Membership flows
pub mod gateway;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use cookie::{SessionCookie, AUTH_COOKIE};
pub use gateway::{AuthGateway, AuthSession, Credentials, ProfileUpdate, Registration};
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use password::{HashedPassword, PasswordHasher};
pub use sessions::{Clock, SystemClock, TokenService, TOKEN_TTL_SECS};
