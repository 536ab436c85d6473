//! Fixture-backed wiring for the generated [`MockGroupsHandler`].
//!
//! Raw expectations are fine for call-shape assertions, but scenario tests
//! want a handler that simply answers from data. The builder registers
//! groups with their members and wires blanket expectations consulting that
//! fixture; individual expectations can still be layered on the returned
//! mock before use.

use super::{GroupRow, MemberRow, MockGroupsHandler};
use crate::search::Search;

pub struct MockGroupsHandlerBuilder {
    groups: Vec<(GroupRow, Vec<String>)>,
}

impl MockGroupsHandlerBuilder {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Register a group and its member user ids, in listing order.
    pub fn group<I, S>(mut self, row: GroupRow, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .push((row, members.into_iter().map(Into::into).collect()));
        self
    }

    pub fn build(self) -> MockGroupsHandler {
        let mut handler = MockGroupsHandler::new();
        let groups = self.groups;

        {
            let groups = groups.clone();
            handler.expect_group_by().returning(move |column: &str, value: &str| {
                if column != "uri" {
                    return Ok(None);
                }
                Ok(groups
                    .iter()
                    .find(|(group, _)| group.uri == value)
                    .map(|(group, _)| group.clone()))
            });
        }
        {
            let groups = groups.clone();
            handler
                .expect_user_memberships()
                .returning(move |user_id: &str, search: Option<Search>| {
                    let rows: Vec<GroupRow> = groups
                        .iter()
                        .filter(|(_, members)| members.iter().any(|member| member == user_id))
                        .map(|(group, _)| group.clone())
                        .collect();
                    Ok(match search {
                        Some(search) => paginate(
                            rows.into_iter()
                                .filter(|group| group_matches(group, search.term()))
                                .collect(),
                            &search,
                        ),
                        None => rows,
                    })
                });
        }
        {
            let groups = groups.clone();
            handler.expect_in_group().returning(move |user_id: &str, group_id| {
                Ok(groups.iter().any(|(group, members)| {
                    group.group_id == group_id && members.iter().any(|member| member == user_id)
                }))
            });
        }
        {
            let groups = groups.clone();
            handler.expect_search_groups().returning(move |search: &Search| {
                let rows: Vec<GroupRow> = groups
                    .iter()
                    .map(|(group, _)| group.clone())
                    .filter(|group| group_matches(group, search.term()))
                    .collect();
                Ok(paginate(rows, search))
            });
        }
        {
            handler
                .expect_group_members()
                .returning(move |group_id, search: &Search| {
                    let members: Vec<String> = groups
                        .iter()
                        .find(|(group, _)| group.group_id == group_id)
                        .map(|(_, members)| members.clone())
                        .unwrap_or_default();
                    let rows: Vec<MemberRow> = members
                        .into_iter()
                        .filter(|member| member_matches(member, search.term()))
                        .map(|user_id| MemberRow { user_id })
                        .collect();
                    Ok(paginate(rows, search))
                });
        }

        handler
    }
}

impl Default for MockGroupsHandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn group_matches(row: &GroupRow, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    row.uri.to_lowercase().contains(&term)
        || row
            .display_name
            .as_deref()
            .map(|name| name.to_lowercase().contains(&term))
            .unwrap_or(false)
}

fn member_matches(user_id: &str, term: &str) -> bool {
    term.is_empty() || user_id.to_lowercase().contains(&term.to_lowercase())
}

fn paginate<T>(rows: Vec<T>, search: &Search) -> Vec<T> {
    rows.into_iter()
        .skip(search.offset())
        .take(search.limit().unwrap_or(usize::MAX))
        .collect()
}
