//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod role_repo;
pub mod session_repo;
pub mod sweet_repo;
pub mod user_repo;

pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use sweet_repo::{PurchaseOutcome, SweetRepo};
pub use user_repo::UserRepo;
