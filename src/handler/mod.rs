//! Data-access seam for custom groups.
//!
//! The backend consumes storage exclusively through the [`GroupsHandler`]
//! trait, so it can be exercised against a substitute implementation and
//! stays independent of any concrete storage technology.

#[cfg(any(test, feature = "mock"))]
mod mock;
mod rows;

use thiserror::Error;

use crate::search::Search;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGroupsHandlerBuilder;
pub use rows::{GroupId, GroupRow, MemberRow};

/// Faults raised by the storage layer behind a [`GroupsHandler`].
///
/// "No matching row" is not a fault; handlers report it as `Ok(None)` or an
/// empty listing.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Query failed: {0}")]
    Query(String),
}

/// Row-oriented access to custom groups and their memberships.
///
/// Row order in listings is significant; implementations must return rows in
/// a stable order for identical calls.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait GroupsHandler {
    /// Fetch a single group row by a named column/value pair.
    fn group_by(&self, column: &str, value: &str) -> Result<Option<GroupRow>, HandlerError>;

    /// List the groups `user_id` is a member of, optionally filtered.
    fn user_memberships(
        &self,
        user_id: &str,
        search: Option<Search>,
    ) -> Result<Vec<GroupRow>, HandlerError>;

    /// Test whether `user_id` is a member of the group `group_id`.
    fn in_group(&self, user_id: &str, group_id: GroupId) -> Result<bool, HandlerError>;

    /// Search groups by partial name with pagination.
    fn search_groups(&self, search: &Search) -> Result<Vec<GroupRow>, HandlerError>;

    /// List members of the group `group_id`, filtered and paginated.
    fn group_members(
        &self,
        group_id: GroupId,
        search: &Search,
    ) -> Result<Vec<MemberRow>, HandlerError>;
}
