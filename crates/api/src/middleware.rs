/// Password hashing and bearer-token authentication
pub mod auth;
/// Mapping of service errors onto HTTP responses
pub mod error_handling;
