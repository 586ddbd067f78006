//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod project;
pub mod task;
pub mod user;

pub use project::{ProjectRecord, ProjectRepository, UpdateProject};
pub use task::{TaskRecord, TaskRepository, UpdateTask};
pub use user::{UserRecord, UserRepository};
