use serde::{Deserialize, Serialize};

/// Opaque storage-assigned key relating groups, memberships and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub i64);

/// A custom group as stored.
///
/// `uri` is the group's external short name, unique within the custom-groups
/// namespace and stored without the host-facing prefix. `display_name` is
/// forwarded exactly as stored; rows from membership listings may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    pub group_id: GroupId,
    pub uri: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A single group membership row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRow {
    pub user_id: String,
}
