//! Users and films kept in memory, with a directed friend graph and a
//! like-based popularity ranking, served over a JSON HTTP API.

pub mod config;
pub mod database;
pub mod error;
pub mod friend_graph;
pub mod like_index;
pub mod model;
pub mod ranking;
pub mod routes;
pub mod table;
pub mod validation;

pub use database::{Database, FilmDb, UserDb};
pub use error::{Error, ErrorKind, Result};
