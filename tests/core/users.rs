//! Integration tests for user storage
//!
//! Id assignment, reads, updates and cascading deletes.

use crate::common::*;
use filmorate::model::Entity;
use filmorate::{Database, Error, ErrorKind, FilmDb, UserDb};

// =============================================================================
// Id assignment
// =============================================================================

#[test]
fn ids_increase_from_one() {
    let db = Database::new();
    assert_eq!(add_users(&db, 3), vec![1, 2, 3]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let db = Database::new();
    add_users(&db, 3);

    db.delete_user(3).unwrap();
    db.delete_user(1).unwrap();

    assert_eq!(db.add_user(user("next")).unwrap().id, 4);
    assert_eq!(ids(&db.users(), |u| u.id), vec![2, 4]);
}

#[test]
fn users_and_films_count_separately() {
    let db = Database::new();
    add_users(&db, 2);
    assert_eq!(add_film(&db, "Solaris"), 1);
}

// =============================================================================
// Reads and updates
// =============================================================================

#[test]
fn get_missing_user_is_not_found() {
    let db = Database::new();
    let err = db.get_user(42).unwrap_err();
    assert_eq!(err, Error::not_found(Entity::User, 42));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn name_defaults_to_login() {
    let db = Database::new();
    let created = db.add_user(user("neo")).unwrap();
    assert_eq!(created.name, "neo");
    assert_eq!(db.get_user(created.id).unwrap(), created);
}

#[test]
fn update_replaces_fields_in_place() {
    let db = Database::new();
    let id = db.add_user(user("old")).unwrap().id;

    let mut data = user("new");
    data.name = Some("New Name".to_owned());
    let updated = db.update_user(id, data).unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.login, "new");
    assert_eq!(updated.name, "New Name");
    assert_eq!(db.users().len(), 1);
}

#[test]
fn update_missing_user_is_not_found() {
    let db = Database::new();
    assert_eq!(
        db.update_user(9, user("ghost")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert!(db.users().is_empty());
}

#[test]
fn list_is_in_insertion_order() {
    let db = Database::new();
    for login in &["c", "a", "b"] {
        db.add_user(user(login)).unwrap();
    }
    let logins: Vec<_> = db.users().into_iter().map(|u| u.login).collect();
    assert_eq!(logins, vec!["c", "a", "b"]);
}

// =============================================================================
// Cascading delete
// =============================================================================

#[test]
fn delete_returns_the_removed_user() {
    let db = Database::new();
    let ids = add_users(&db, 2);
    db.add_friend(ids[0], ids[1]).unwrap();

    let removed = db.delete_user(ids[0]).unwrap();
    assert_eq!(removed.login, "user0");
    assert_eq!(removed.friends, vec![ids[1]]);
    assert_eq!(db.delete_user(ids[0]).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn delete_removes_user_from_every_friend_set() {
    let db = Database::new();
    let ids = add_users(&db, 4);
    let (gone, a, b, c) = (ids[0], ids[1], ids[2], ids[3]);
    db.add_friend(a, gone).unwrap();
    db.add_friend(b, gone).unwrap();
    db.add_friend(gone, c).unwrap();
    db.add_friend(a, c).unwrap();

    db.delete_user(gone).unwrap();

    assert_eq!(ids_of(db.friends(a).unwrap()), vec![c]);
    assert!(db.friends(b).unwrap().is_empty());
    assert!(db.users().iter().all(|u| !u.friends.contains(&gone)));
    assert_eq!(db.friends(gone).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn delete_removes_user_from_every_liker_set() {
    let db = Database::new();
    let ids = add_users(&db, 2);
    let first = add_film(&db, "Stalker");
    let second = add_film(&db, "Mirror");
    for film in &[first, second] {
        for user in &ids {
            db.like(*film, *user).unwrap();
        }
    }

    db.delete_user(ids[0]).unwrap();

    assert_eq!(db.like_count(first), Ok(1));
    assert_eq!(db.get_film(second).unwrap().likes, vec![ids[1]]);
    assert!(db.films().iter().all(|f| !f.likes.contains(&ids[0])));
}

fn ids_of(users: Vec<filmorate::model::User>) -> Vec<u64> {
    users.into_iter().map(|u| u.id).collect()
}
