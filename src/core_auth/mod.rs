mod core_auth;

pub use core_auth::{UserDirectory, UserEntry};
