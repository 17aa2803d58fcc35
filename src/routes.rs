//! JSON HTTP endpoints for users and films.

use crate::database::{Database, FilmDb, UserDb};
use crate::error::Error;
use crate::model::*;
use crate::validation::today;
use actix_web::{web, HttpResponse};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

type Db = web::Data<Database>;

fn log_error(err: Error) -> Error {
    warn!("request rejected: {}", err);
    err
}

/// Malformed JSON bodies answer with the same `validation_failed` body as
/// field rule violations.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _| log_error(Error::invalid("body", err.to_string())).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _| log_error(Error::invalid("query", err.to_string())).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _| log_error(Error::invalid("path", err.to_string())).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .route(web::put().to(update_user)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::get().to(get_user))
            .route(web::delete().to(delete_user)),
    )
    .service(web::resource("/users/{id}/friends").route(web::get().to(friends)))
    .service(
        web::resource("/users/{id}/friends/common/{other_id}")
            .route(web::get().to(common_friends)),
    )
    .service(
        web::resource("/users/{id}/friends/{friend_id}")
            .route(web::put().to(add_friend))
            .route(web::delete().to(remove_friend)),
    )
    .service(
        web::resource("/films")
            .route(web::get().to(list_films))
            .route(web::post().to(create_film))
            .route(web::put().to(update_film)),
    )
    .service(web::resource("/films/popular").route(web::get().to(popular)))
    .service(
        web::resource("/films/{id}")
            .route(web::get().to(get_film))
            .route(web::delete().to(delete_film)),
    )
    .service(web::resource("/films/{id}/likes").route(web::get().to(like_count)))
    .service(
        web::resource("/films/{id}/like/{user_id}")
            .route(web::put().to(like))
            .route(web::delete().to(unlike)),
    );
}

async fn list_users(db: Db) -> HttpResponse {
    let users = db.users();
    debug!("listing {} users", users.len());
    HttpResponse::Ok().json(users)
}

async fn get_user(db: Db, id: web::Path<UserId>) -> Result<HttpResponse, Error> {
    let user = db.get_user(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(user))
}

async fn create_user(db: Db, user: web::Json<UserData>) -> Result<HttpResponse, Error> {
    let user = user.into_inner().validate(today()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(db.add_user(user)?))
}

async fn update_user(db: Db, update: web::Json<UserUpdate>) -> Result<HttpResponse, Error> {
    let UserUpdate { id, data } = update.into_inner();
    let data = data.validate(today()).map_err(log_error)?;
    let user = db.update_user(id, data).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(user))
}

async fn delete_user(db: Db, id: web::Path<UserId>) -> Result<HttpResponse, Error> {
    let user = db.delete_user(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(user))
}

async fn add_friend(db: Db, path: web::Path<(UserId, UserId)>) -> Result<HttpResponse, Error> {
    let (id, friend_id) = path.into_inner();
    db.add_friend(id, friend_id).map_err(log_error)?;
    Ok(HttpResponse::Ok().finish())
}

async fn remove_friend(
    db: Db,
    path: web::Path<(UserId, UserId)>,
) -> Result<HttpResponse, Error> {
    let (id, friend_id) = path.into_inner();
    db.remove_friend(id, friend_id).map_err(log_error)?;
    Ok(HttpResponse::Ok().finish())
}

async fn friends(db: Db, id: web::Path<UserId>) -> Result<HttpResponse, Error> {
    let friends = db.friends(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(friends))
}

async fn common_friends(
    db: Db,
    path: web::Path<(UserId, UserId)>,
) -> Result<HttpResponse, Error> {
    let (id, other_id) = path.into_inner();
    let common = db.common_friends(id, other_id).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(common))
}

async fn list_films(db: Db) -> HttpResponse {
    let films = db.films();
    debug!("listing {} films", films.len());
    HttpResponse::Ok().json(films)
}

async fn get_film(db: Db, id: web::Path<FilmId>) -> Result<HttpResponse, Error> {
    let film = db.get_film(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(film))
}

async fn create_film(db: Db, film: web::Json<FilmData>) -> Result<HttpResponse, Error> {
    let film = film.into_inner().validate().map_err(log_error)?;
    Ok(HttpResponse::Ok().json(db.add_film(film)?))
}

async fn update_film(db: Db, update: web::Json<FilmUpdate>) -> Result<HttpResponse, Error> {
    let FilmUpdate { id, data } = update.into_inner();
    let data = data.validate().map_err(log_error)?;
    let film = db.update_film(id, data).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(film))
}

async fn delete_film(db: Db, id: web::Path<FilmId>) -> Result<HttpResponse, Error> {
    let film = db.delete_film(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(film))
}

async fn like(db: Db, path: web::Path<(FilmId, UserId)>) -> Result<HttpResponse, Error> {
    let (id, user_id) = path.into_inner();
    db.like(id, user_id).map_err(log_error)?;
    Ok(HttpResponse::Ok().finish())
}

async fn unlike(db: Db, path: web::Path<(FilmId, UserId)>) -> Result<HttpResponse, Error> {
    let (id, user_id) = path.into_inner();
    db.unlike(id, user_id).map_err(log_error)?;
    Ok(HttpResponse::Ok().finish())
}

#[derive(Serialize)]
struct LikeCount {
    likes: usize,
}

async fn like_count(db: Db, id: web::Path<FilmId>) -> Result<HttpResponse, Error> {
    let likes = db.like_count(id.into_inner()).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(LikeCount { likes }))
}

#[derive(Deserialize)]
struct PopularParams {
    count: Option<usize>,
}

async fn popular(db: Db, params: web::Query<PopularParams>) -> Result<HttpResponse, Error> {
    let films = db.popular(params.count).map_err(log_error)?;
    Ok(HttpResponse::Ok().json(films))
}
