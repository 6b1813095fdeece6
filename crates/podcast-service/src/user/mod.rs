//! Account creation, login and profile management.

pub mod service;

pub use service::UserService;
