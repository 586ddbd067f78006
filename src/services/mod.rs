//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer. Every mutation on an owned
//! resource goes through [`assert_owner`] before touching the row.

pub mod project;
pub mod task;
pub mod user;

pub use project::ProjectService;
pub use task::TaskService;
pub use user::UserService;

use crate::error::ApiError;
use uuid::Uuid;

/// Authorization guard shared by every mutating resource operation:
/// the recorded creator must be the authenticated caller.
pub fn assert_owner(creator: Uuid, caller: Uuid) -> Result<(), ApiError> {
    if creator != caller {
        return Err(ApiError::Forbidden(
            "Only the creator may modify this resource".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_passes_ownership_check() {
        let user = Uuid::new_v4();
        assert!(assert_owner(user, user).is_ok());
    }

    #[test]
    fn test_other_caller_is_forbidden() {
        let creator = Uuid::new_v4();
        let caller = Uuid::new_v4();
        let result = assert_owner(creator, caller);
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }
}
