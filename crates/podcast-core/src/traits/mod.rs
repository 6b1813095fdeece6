//! Core traits defined in `podcast-core` and implemented by other crates.

pub mod password;

pub use password::PasswordHashing;
