//! Ban registry: members grouped per ban.
//!
//! Every ban in [`Ban::ALL`] has a list from the start. Lists stay free of
//! duplicates (by [`MemberKey`](crate::models::MemberKey)) and sorted by
//! (first name, last name), case-sensitive. Members with an unknown ban
//! label are skipped with a warning.
//!
//! ```text
//! members (input order)           BanRegistry
//! ┌──────────────────────┐       ┌─────────────────────────┐
//! │ Zoe A    Knapen      │       │ Piepedollen  []         │
//! │ Anna B   Knapen      │  →    │ ...                     │
//! │ anna b   Knapen      │       │ Knapen  [Anna B, Zoe A] │
//! │ Tom C    Foobar      │ (warn)│ ...                     │
//! └──────────────────────┘       └─────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{Ban, Member};

/// What happened to a member passed to [`BanRegistry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(Ban),
    /// A member with the same identity already sits in this ban.
    Duplicate(Ban),
    /// The ban label is not one of the known bans.
    Unrecognized,
}

/// Counts returned by [`BanRegistry::insert_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsertSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub unrecognized: usize,
}

impl InsertSummary {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted(_) => self.inserted += 1,
            InsertOutcome::Duplicate(_) => self.duplicates += 1,
            InsertOutcome::Unrecognized => self.unrecognized += 1,
        }
    }
}

/// Fixed mapping from [`Ban`] to its ordered, duplicate-free members.
#[derive(Debug, Clone, Default)]
pub struct BanRegistry {
    bans: [Vec<Member>; Ban::COUNT],
}

impl BanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from members in input order.
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        let mut registry = Self::new();
        registry.insert_all(members);
        registry
    }

    /// Place a member in its ban.
    ///
    /// Duplicates are dropped. Equal names keep their insertion order.
    pub fn insert(&mut self, member: Member) -> InsertOutcome {
        let Some(ban) = member.category() else {
            tracing::warn!(
                ban = %member.ban,
                member = %format!("{} {}", member.first_name, member.last_name),
                "'{}' is not a recognized ban, member skipped",
                member.ban
            );
            return InsertOutcome::Unrecognized;
        };

        let list = &mut self.bans[ban.index()];
        let key = member.key();
        if list.iter().any(|m| m.key() == key) {
            tracing::debug!(
                ban = %ban,
                first_name = %member.first_name,
                last_name = %member.last_name,
                "duplicate member skipped"
            );
            return InsertOutcome::Duplicate(ban);
        }

        // Upper bound, so equal names keep insertion order.
        let position = list.partition_point(|m| sort_key(m) <= sort_key(&member));
        list.insert(position, member);
        InsertOutcome::Inserted(ban)
    }

    /// Insert members in order and count the outcomes.
    pub fn insert_all(&mut self, members: impl IntoIterator<Item = Member>) -> InsertSummary {
        let mut summary = InsertSummary::default();
        for member in members {
            summary.record(self.insert(member));
        }
        summary
    }

    /// Members of a ban, in sort order.
    pub fn members(&self, ban: Ban) -> &[Member] {
        &self.bans[ban.index()]
    }

    /// Members of the ban with this exact name, or `None` for unknown names.
    pub fn get(&self, name: &str) -> Option<&[Member]> {
        Ban::from_name(name).map(|ban| self.members(ban))
    }

    /// All bans with their members, in [`Ban::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Ban, &[Member])> + '_ {
        Ban::ALL.into_iter().map(move |ban| (ban, self.members(ban)))
    }

    /// Total number of placed members.
    pub fn len(&self) -> usize {
        self.bans.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordered JSON view: `[{ban, shortCode, count, members}, ...]`.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.iter()
                .map(|(ban, members)| {
                    json!({
                        "ban": ban.name(),
                        "shortCode": ban.short_code(),
                        "count": members.len(),
                        "members": members,
                    })
                })
                .collect(),
        )
    }
}

fn sort_key(member: &Member) -> (&str, &str) {
    (member.first_name.as_str(), member.last_name.as_str())
}
