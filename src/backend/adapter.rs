use serde::{Deserialize, Serialize};
use tracing::debug;

use super::actions::GROUP_DETAILS;
use crate::handler::{GroupRow, GroupsHandler, HandlerError};
use crate::search::Search;

/// Identifier prefix distinguishing custom groups from the host's other
/// group types.
pub const GROUP_ID_PREFIX: &str = "customgroup_";

/// Details of a single group as presented to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetails {
    /// Prefixed identifier (`customgroup_<uri>`)
    pub gid: String,
    /// Human-readable label, exactly as stored
    pub display_name: Option<String>,
}

/// Read-only group backend over a [`GroupsHandler`].
///
/// Holds the handler for its whole lifetime and keeps no other state; every
/// operation is a single-pass translation of one host call into at most two
/// handler calls. Nothing is cached, so repeated identical calls re-query
/// the handler.
pub struct CustomGroupsBackend<H> {
    handler: H,
}

impl<H: GroupsHandler> CustomGroupsBackend<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Declare which host group operations this backend supports.
    ///
    /// Only group details retrieval. Creation, deletion, membership changes
    /// and user counting are reported as unsupported.
    pub fn implements_actions(&self, actions: u32) -> bool {
        actions & GROUP_DETAILS != 0
    }

    /// Check membership of `user_id` in the group identified by `gid`.
    ///
    /// Identifiers without the custom-group prefix and unknown uris both
    /// yield `false`.
    pub fn in_group(&self, user_id: &str, gid: &str) -> Result<bool, HandlerError> {
        let group = match self.group_object(gid)? {
            Some(group) => group,
            None => return Ok(false),
        };
        self.handler.in_group(user_id, group.group_id)
    }

    /// Identifiers of all groups `user_id` belongs to, in handler order.
    pub fn get_user_groups(&self, user_id: &str) -> Result<Vec<String>, HandlerError> {
        let memberships = self.handler.user_memberships(user_id, None)?;
        Ok(memberships.iter().map(|row| format_gid(&row.uri)).collect())
    }

    /// Search groups by partial name, returning prefixed identifiers in
    /// handler order.
    pub fn get_groups(
        &self,
        search: &str,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<String>, HandlerError> {
        let search = Search::new(search, limit, offset);
        let groups = self.handler.search_groups(&search)?;
        Ok(groups.iter().map(|row| format_gid(&row.uri)).collect())
    }

    /// Whether a group with this identifier exists.
    pub fn group_exists(&self, gid: &str) -> Result<bool, HandlerError> {
        Ok(self.group_object(gid)?.is_some())
    }

    /// Identifier and display name for `gid`.
    ///
    /// `None` when the identifier is not a custom group or no such group
    /// exists; callers can rely on the distinction from empty fields.
    pub fn get_group_details(&self, gid: &str) -> Result<Option<GroupDetails>, HandlerError> {
        let group = match self.group_object(gid)? {
            Some(group) => group,
            None => return Ok(None),
        };
        Ok(Some(GroupDetails {
            gid: format_gid(&group.uri),
            display_name: group.display_name,
        }))
    }

    /// User ids of the group's members, filtered and paginated, in handler
    /// order.
    pub fn users_in_group(
        &self,
        gid: &str,
        search: &str,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<String>, HandlerError> {
        let group = match self.group_object(gid)? {
            Some(group) => group,
            None => return Ok(Vec::new()),
        };
        let search = Search::new(search, limit, offset);
        let members = self.handler.group_members(group.group_id, &search)?;
        Ok(members.into_iter().map(|row| row.user_id).collect())
    }

    /// Resolve a host identifier to its stored row.
    ///
    /// Identifiers without the prefix are rejected before the handler is
    /// consulted.
    fn group_object(&self, gid: &str) -> Result<Option<GroupRow>, HandlerError> {
        let uri = match extract_uri(gid) {
            Some(uri) => uri,
            None => {
                debug!(gid = %gid, "Not a custom group identifier");
                return Ok(None);
            }
        };
        self.handler.group_by("uri", uri)
    }
}

/// Strip the custom-group prefix; `None` when it is missing.
fn extract_uri(gid: &str) -> Option<&str> {
    gid.strip_prefix(GROUP_ID_PREFIX)
}

/// Prepend the custom-group prefix to a stored uri.
fn format_gid(uri: &str) -> String {
    format!("{}{}", GROUP_ID_PREFIX, uri)
}
