//! Backend adapter exposing application-defined custom groups to a host
//! group-management interface.
//!
//! Group identifiers seen by the host are `customgroup_<uri>`; the adapter
//! strips and re-applies the prefix and delegates every lookup to a
//! [`GroupsHandler`] implementation. It is read-only glue: creation,
//! deletion and membership mutation are left to other backends and are
//! advertised as unsupported through the capability mask.

mod backend;
mod handler;
mod search;

pub use backend::{actions, CustomGroupsBackend, GroupDetails, GROUP_ID_PREFIX};
pub use handler::{GroupId, GroupRow, GroupsHandler, HandlerError, MemberRow};
#[cfg(any(test, feature = "mock"))]
pub use handler::{MockGroupsHandler, MockGroupsHandlerBuilder};
pub use search::Search;
