//! User domain entities.

pub mod model;
pub mod role;

pub use model::{EditProfile, NewUser, User, UserLookup};
pub use role::UserRole;
