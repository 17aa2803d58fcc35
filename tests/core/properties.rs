//! Property-based tests for id assignment, ranking order and common friends

use crate::common::*;
use filmorate::{Database, FilmDb, UserDb};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    /// Ids handed out by the database strictly increase, whatever gets deleted in between.
    #[test]
    fn prop_ids_strictly_increase(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let db = Database::new();
        let mut live: Vec<u64> = Vec::new();
        let mut last = 0;

        for op in ops {
            match op {
                Op::Add => {
                    let id = db.add_user(user("u")).unwrap().id;
                    prop_assert!(id > last);
                    last = id;
                    live.push(id);
                }
                Op::Delete(pick) if !live.is_empty() => {
                    let id = live.remove(pick % live.len());
                    db.delete_user(id).unwrap();
                }
                Op::Delete(_) => {}
            }
        }

        let listed: Vec<u64> = db.users().into_iter().map(|u| u.id).collect();
        prop_assert_eq!(listed, live);
    }

    /// Ranking is descending by likes, ascending by id, and ignores creation order.
    #[test]
    fn prop_popular_is_totally_ordered(
        likes in prop::collection::vec(0usize..5, 1..12),
        limit in prop::option::of(0usize..15),
    ) {
        let db = Database::new();
        let users = add_users(&db, 5);
        for (n, count) in likes.iter().enumerate() {
            let film = add_film(&db, &format!("film{}", n));
            for user in users.iter().take(*count) {
                db.like(film, *user).unwrap();
            }
        }

        let ranked = db.popular(limit).unwrap();
        let expected_len = limit.map_or(likes.len(), |l| l.min(likes.len()));
        prop_assert_eq!(ranked.len(), expected_len);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.likes.len() > b.likes.len()
                    || (a.likes.len() == b.likes.len() && a.id < b.id)
            );
        }
    }

    /// Common friends do not depend on argument order.
    #[test]
    fn prop_common_friends_symmetric(
        edges in prop::collection::vec((0usize..8, 0usize..8), 0..40),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let db = Database::new();
        let users = add_users(&db, 8);
        for (from, to) in edges {
            // Duplicates and self edges are rejected; the graph stays as it was.
            let _ = db.add_friend(users[from], users[to]);
        }

        let forward: Vec<u64> = db.common_friends(users[a], users[b]).unwrap()
            .into_iter().map(|u| u.id).collect();
        let backward: Vec<u64> = db.common_friends(users[b], users[a]).unwrap()
            .into_iter().map(|u| u.id).collect();
        prop_assert_eq!(&forward, &backward);

        let left: BTreeSet<u64> = db.get_user(users[a]).unwrap().friends.into_iter().collect();
        let right: BTreeSet<u64> = db.get_user(users[b]).unwrap().friends.into_iter().collect();
        let expected: Vec<u64> = left.intersection(&right).copied().collect();
        prop_assert_eq!(forward, expected);
    }

    /// No user ever lists itself as a friend.
    #[test]
    fn prop_no_self_friendship(edges in prop::collection::vec((0usize..5, 0usize..5), 0..30)) {
        let db = Database::new();
        let users = add_users(&db, 5);
        for (from, to) in edges {
            let _ = db.add_friend(users[from], users[to]);
        }
        for user in db.users() {
            prop_assert!(!user.friends.contains(&user.id));
        }
    }
}
