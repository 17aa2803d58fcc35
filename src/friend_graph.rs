//! Directed friendship edges between users.
//!
//! An edge `a -> b` means `a` has added `b` as a friend. Mutual friendship is
//! never stored; it is the presence of both `a -> b` and `b -> a`.

use crate::error::{Error, Result};
use crate::model::UserId;
use std::collections::{BTreeSet, HashMap};

/// Friend edges with a reverse index so that removing a user only touches
/// the sets that actually mention it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendGraph {
    /// user -> users they have added.
    forward: HashMap<UserId, BTreeSet<UserId>>,
    /// user -> users who have added them.
    reverse: HashMap<UserId, BTreeSet<UserId>>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_edge(&self, user: UserId, friend: UserId) -> bool {
        self.forward
            .get(&user)
            .map_or(false, |friends| friends.contains(&friend))
    }

    /// Adds `user -> friend`.
    ///
    /// Fails on a self edge or when the edge already exists. Existence of
    /// both users is checked by the caller.
    pub fn link(&mut self, user: UserId, friend: UserId) -> Result<()> {
        if user == friend {
            return Err(Error::SelfFriendship(user));
        }
        if self.has_edge(user, friend) {
            return Err(Error::AlreadyFriends {
                user_id: user,
                friend_id: friend,
            });
        }
        self.forward.entry(user).or_default().insert(friend);
        self.reverse.entry(friend).or_default().insert(user);
        Ok(())
    }

    /// Removes `user -> friend`, returning whether the edge existed.
    pub fn unlink(&mut self, user: UserId, friend: UserId) -> bool {
        let removed = remove_from(&mut self.forward, user, friend);
        if removed {
            remove_from(&mut self.reverse, friend, user);
        }
        removed
    }

    /// Friends of `user` in ascending id order.
    pub fn friends_of(&self, user: UserId) -> Vec<UserId> {
        self.forward
            .get(&user)
            .map(|friends| friends.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Users that both `a` and `b` have added, in ascending id order.
    pub fn common(&self, a: UserId, b: UserId) -> Vec<UserId> {
        match (self.forward.get(&a), self.forward.get(&b)) {
            (Some(left), Some(right)) => left.intersection(right).copied().collect(),
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    fn is_mutual(&self, a: UserId, b: UserId) -> bool {
        self.has_edge(a, b) && self.has_edge(b, a)
    }

    /// Drops every edge starting or ending at `user`.
    pub fn remove_user(&mut self, user: UserId) {
        if let Some(friends) = self.forward.remove(&user) {
            for friend in friends {
                remove_from(&mut self.reverse, friend, user);
            }
        }
        if let Some(followers) = self.reverse.remove(&user) {
            for follower in followers {
                remove_from(&mut self.forward, follower, user);
            }
        }
    }
}

/// Removes `value` from the set under `key`, dropping the set once empty.
pub(crate) fn remove_from(
    index: &mut HashMap<u64, BTreeSet<u64>>,
    key: u64,
    value: u64,
) -> bool {
    let set = match index.get_mut(&key) {
        Some(set) => set,
        None => return false,
    };
    let removed = set.remove(&value);
    if set.is_empty() {
        index.remove(&key);
    }
    removed
}
