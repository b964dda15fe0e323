// 📋 Roster - authoritative collection of current members
//
// Members live here and nowhere else. The ledger, journal and training index
// only hold ids or copied fields, so mutating or removing a member never
// leaves a dangling reference behind.
//
// Ids come from a counter owned by the roster. It only moves forward: bulk
// loads push it past the highest loaded id, and only `clear` (or an explicit
// `reset_id_counter`) brings it back down.

use crate::members::{Member, MemberDraft, MemberId};
use chrono::NaiveDate;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

const FIRST_ID: MemberId = 1;

#[derive(Debug)]
pub struct Roster {
    members: BTreeMap<MemberId, Member>,
    next_id: MemberId,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            members: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    /// Assign the next id and store the member, replacing any stale entry
    /// under that id
    pub fn admit(&mut self, draft: MemberDraft, join_date: NaiveDate) -> &Member {
        let id = self.next_id;
        self.next_id += 1;
        let member = Member::from_draft(id, draft, join_date);
        match self.members.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(member);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(member),
        }
    }

    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn find_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn remove(&mut self, id: MemberId) -> Option<Member> {
        self.members.remove(&id)
    }

    /// Owned copy of every member, ascending id
    pub fn all(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The id the next admitted member will receive
    pub fn peek_next_id(&self) -> MemberId {
        self.next_id
    }

    /// Drop every member and restart ids at 1
    pub fn clear(&mut self) {
        self.members.clear();
        self.reset_id_counter();
    }

    /// Restart ids at 1, or just past the highest id still present
    pub fn reset_id_counter(&mut self) {
        self.next_id = self.members.keys().next_back().map_or(FIRST_ID, |max| max + 1);
    }

    /// Replace every member with `members`. Later duplicates of an id win,
    /// payload values are clamped, and the counter never moves backwards.
    pub fn replace_all(&mut self, members: Vec<Member>) {
        self.members = members
            .into_iter()
            .map(|mut member| {
                member.clamp_profile();
                (member.id, member)
            })
            .collect();
        let past_loaded = self.members.keys().next_back().map_or(FIRST_ID, |max| max + 1);
        self.next_id = self.next_id.max(past_loaded);
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
