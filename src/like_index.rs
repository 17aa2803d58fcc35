//! Which users like which films.

use crate::error::{Error, Result};
use crate::friend_graph::remove_from;
use crate::model::{FilmId, UserId};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeIndex {
    /// film -> users who like it.
    likers: HashMap<FilmId, BTreeSet<UserId>>,
    /// user -> films they like, used when a user is deleted.
    liked: HashMap<UserId, BTreeSet<FilmId>>,
}

impl LikeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `user` likes `film`. Liking twice changes nothing.
    /// Returns whether the like is new.
    pub fn like(&mut self, film: FilmId, user: UserId) -> bool {
        let added = self.likers.entry(film).or_default().insert(user);
        if added {
            self.liked.entry(user).or_default().insert(film);
        }
        added
    }

    /// Withdraws a like. Unlike [`FriendGraph::unlink`](crate::friend_graph::FriendGraph::unlink),
    /// a missing like is an error.
    pub fn unlike(&mut self, film: FilmId, user: UserId) -> Result<()> {
        if !remove_from(&mut self.likers, film, user) {
            return Err(Error::LikeNotFound {
                film_id: film,
                user_id: user,
            });
        }
        remove_from(&mut self.liked, user, film);
        Ok(())
    }

    #[cfg(test)]
    fn likes(&self, film: FilmId, user: UserId) -> bool {
        self.likers
            .get(&film)
            .map_or(false, |users| users.contains(&user))
    }

    /// Users liking `film` in ascending id order.
    pub fn likers_of(&self, film: FilmId) -> Vec<UserId> {
        self.likers
            .get(&film)
            .map(|users| users.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn count(&self, film: FilmId) -> usize {
        self.likers.get(&film).map_or(0, BTreeSet::len)
    }

    pub fn remove_user(&mut self, user: UserId) {
        if let Some(films) = self.liked.remove(&user) {
            for film in films {
                remove_from(&mut self.likers, film, user);
            }
        }
    }

    pub fn remove_film(&mut self, film: FilmId) {
        if let Some(users) = self.likers.remove(&film) {
            for user in users {
                remove_from(&mut self.liked, user, film);
            }
        }
    }
}
