use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = u64;
pub type FilmId = u64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    User,
    Film,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::User => f.write_str("user"),
            Entity::Film => f.write_str("film"),
        }
    }
}

/// User fields as submitted by a client. Identity and friends are owned by the database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserData {
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl UserData {
    /// The name shown for this user; falls back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub id: UserId,
    #[serde(flatten)]
    pub data: UserData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: Vec<UserId>,
}

impl User {
    pub(crate) fn from_data(id: UserId, data: &UserData, friends: Vec<UserId>) -> Self {
        User {
            id,
            email: data.email.clone(),
            login: data.login.clone(),
            name: data.display_name().to_owned(),
            birthday: data.birthday,
            friends,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilmData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Length in minutes.
    pub duration: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilmUpdate {
    pub id: FilmId,
    #[serde(flatten)]
    pub data: FilmData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: FilmId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: Vec<UserId>,
}

impl Film {
    pub(crate) fn from_data(id: FilmId, data: &FilmData, likes: Vec<UserId>) -> Self {
        Film {
            id,
            name: data.name.clone(),
            description: data.description.clone(),
            release_date: data.release_date,
            duration: data.duration,
            likes,
        }
    }
}
