use crate::error::{Error, Result};
use crate::friend_graph::FriendGraph;
use crate::like_index::LikeIndex;
use crate::model::*;
use crate::ranking;
use crate::table::Table;
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

pub trait UserDb {
    type Error;
    fn add_user(&self, user: UserData) -> Result<User, Self::Error>;
    fn get_user(&self, id: UserId) -> Result<User, Self::Error>;
    fn update_user(&self, id: UserId, user: UserData) -> Result<User, Self::Error>;
    fn delete_user(&self, id: UserId) -> Result<User, Self::Error>;
    fn users(&self) -> Vec<User>;
    fn add_friend(&self, id: UserId, friend_id: UserId) -> Result<(), Self::Error>;
    fn remove_friend(&self, id: UserId, friend_id: UserId) -> Result<(), Self::Error>;
    fn friends(&self, id: UserId) -> Result<Vec<User>, Self::Error>;
    fn common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>, Self::Error>;
}

pub trait FilmDb {
    type Error;
    fn add_film(&self, film: FilmData) -> Result<Film, Self::Error>;
    fn get_film(&self, id: FilmId) -> Result<Film, Self::Error>;
    fn update_film(&self, id: FilmId, film: FilmData) -> Result<Film, Self::Error>;
    fn delete_film(&self, id: FilmId) -> Result<Film, Self::Error>;
    fn films(&self) -> Vec<Film>;
    fn like(&self, film_id: FilmId, user_id: UserId) -> Result<(), Self::Error>;
    fn unlike(&self, film_id: FilmId, user_id: UserId) -> Result<(), Self::Error>;
    fn like_count(&self, film_id: FilmId) -> Result<usize, Self::Error>;
    /// Films ordered by popularity; `None` returns all of them.
    fn popular(&self, count: Option<usize>) -> Result<Vec<Film>, Self::Error>;
}

#[derive(Debug)]
struct State {
    users: Table<UserData>,
    films: Table<FilmData>,
    friends: FriendGraph,
    likes: LikeIndex,
}

impl State {
    fn new() -> Self {
        State {
            users: Table::new(Entity::User),
            films: Table::new(Entity::Film),
            friends: FriendGraph::new(),
            likes: LikeIndex::new(),
        }
    }

    fn user(&self, id: UserId) -> Result<User> {
        let data = self.users.get(id)?;
        Ok(User::from_data(id, data, self.friends.friends_of(id)))
    }

    fn film(&self, id: FilmId) -> Result<Film> {
        let data = self.films.get(id)?;
        Ok(Film::from_data(id, data, self.likes.likers_of(id)))
    }

    fn users_by_id<I: IntoIterator<Item = UserId>>(&self, ids: I) -> Result<Vec<User>> {
        ids.into_iter().map(|id| self.user(id)).collect()
    }

    fn films_by_id<I: IntoIterator<Item = FilmId>>(&self, ids: I) -> Result<Vec<Film>> {
        ids.into_iter().map(|id| self.film(id)).collect()
    }
}

/// In-memory store of users, films and the relations between them.
///
/// All four collections sit behind a single lock, so a reader never sees a
/// half-applied mutation such as a deleted user still listed as a friend.
/// Cloning yields another handle to the same data.
#[derive(Clone)]
pub struct Database {
    state: Arc<RwLock<State>>,
}

impl Database {
    pub fn new() -> Self {
        Database {
            state: Arc::new(RwLock::new(State::new())),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDb for Database {
    type Error = Error;

    fn add_user(&self, user: UserData) -> Result<User> {
        let mut state = self.state.write();
        let id = state.users.insert(user);
        info!("added user {}", id);
        state.user(id)
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        self.state.read().user(id)
    }

    fn update_user(&self, id: UserId, user: UserData) -> Result<User> {
        let mut state = self.state.write();
        state.users.replace(id, user)?;
        info!("updated user {}", id);
        state.user(id)
    }

    fn delete_user(&self, id: UserId) -> Result<User> {
        let mut state = self.state.write();
        let user = state.user(id)?;
        state.users.remove(id)?;
        state.friends.remove_user(id);
        state.likes.remove_user(id);
        info!("deleted user {}", id);
        Ok(user)
    }

    fn users(&self) -> Vec<User> {
        let state = self.state.read();
        state
            .users
            .iter()
            .map(|(id, data)| User::from_data(id, data, state.friends.friends_of(id)))
            .collect()
    }

    fn add_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        let mut state = self.state.write();
        state.users.ensure(id)?;
        state.users.ensure(friend_id)?;
        state.friends.link(id, friend_id)?;
        info!("user {} added friend {}", id, friend_id);
        Ok(())
    }

    fn remove_friend(&self, id: UserId, friend_id: UserId) -> Result<()> {
        let mut state = self.state.write();
        state.users.ensure(id)?;
        state.users.ensure(friend_id)?;
        if state.friends.unlink(id, friend_id) {
            info!("user {} removed friend {}", id, friend_id);
        } else {
            debug!("user {} had no friend {} to remove", id, friend_id);
        }
        Ok(())
    }

    fn friends(&self, id: UserId) -> Result<Vec<User>> {
        let state = self.state.read();
        state.users.ensure(id)?;
        state.users_by_id(state.friends.friends_of(id))
    }

    fn common_friends(&self, id: UserId, other_id: UserId) -> Result<Vec<User>> {
        let state = self.state.read();
        state.users.ensure(id)?;
        state.users.ensure(other_id)?;
        state.users_by_id(state.friends.common(id, other_id))
    }
}

impl FilmDb for Database {
    type Error = Error;

    fn add_film(&self, film: FilmData) -> Result<Film> {
        let mut state = self.state.write();
        let id = state.films.insert(film);
        info!("added film {}", id);
        state.film(id)
    }

    fn get_film(&self, id: FilmId) -> Result<Film> {
        self.state.read().film(id)
    }

    fn update_film(&self, id: FilmId, film: FilmData) -> Result<Film> {
        let mut state = self.state.write();
        state.films.replace(id, film)?;
        info!("updated film {}", id);
        state.film(id)
    }

    fn delete_film(&self, id: FilmId) -> Result<Film> {
        let mut state = self.state.write();
        let film = state.film(id)?;
        state.films.remove(id)?;
        state.likes.remove_film(id);
        info!("deleted film {}", id);
        Ok(film)
    }

    fn films(&self) -> Vec<Film> {
        let state = self.state.read();
        state
            .films
            .iter()
            .map(|(id, data)| Film::from_data(id, data, state.likes.likers_of(id)))
            .collect()
    }

    fn like(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        let mut state = self.state.write();
        state.films.ensure(film_id)?;
        state.users.ensure(user_id)?;
        if state.likes.like(film_id, user_id) {
            info!("user {} liked film {}", user_id, film_id);
        } else {
            debug!("user {} already likes film {}", user_id, film_id);
        }
        Ok(())
    }

    fn unlike(&self, film_id: FilmId, user_id: UserId) -> Result<()> {
        let mut state = self.state.write();
        state.films.ensure(film_id)?;
        state.users.ensure(user_id)?;
        state.likes.unlike(film_id, user_id)?;
        info!("user {} unliked film {}", user_id, film_id);
        Ok(())
    }

    fn like_count(&self, film_id: FilmId) -> Result<usize> {
        let state = self.state.read();
        state.films.ensure(film_id)?;
        Ok(state.likes.count(film_id))
    }

    fn popular(&self, count: Option<usize>) -> Result<Vec<Film>> {
        let state = self.state.read();
        let ranked = ranking::rank(
            state.films.ids().map(|id| (id, state.likes.count(id))),
            count,
        );
        debug!("ranked {} of {} films", ranked.len(), state.films.len());
        state.films_by_id(ranked)
    }
}
