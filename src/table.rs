//! Keyed record storage with monotonically assigned identifiers.

use crate::error::{Error, Result};
use crate::model::Entity;
use std::collections::BTreeMap;

/// Records of one entity kind keyed by id.
///
/// Ids start at 1 and are never handed out twice, even after the row holding
/// the highest id has been removed.
#[derive(Debug, Clone)]
pub struct Table<T> {
    entity: Entity,
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Table<T> {
    pub fn new(entity: Entity) -> Self {
        Table {
            entity,
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn generate_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    pub fn insert(&mut self, row: T) -> u64 {
        let id = self.generate_id();
        self.rows.insert(id, row);
        id
    }

    pub fn get(&self, id: u64) -> Result<&T> {
        self.rows
            .get(&id)
            .ok_or_else(|| Error::not_found(self.entity, id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Fails with `NotFound` unless a row with this id exists.
    pub fn ensure(&self, id: u64) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::not_found(self.entity, id))
        }
    }

    pub fn replace(&mut self, id: u64, row: T) -> Result<&T> {
        let entity = self.entity;
        let slot = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(entity, id))?;
        *slot = row;
        Ok(slot)
    }

    pub fn remove(&mut self, id: u64) -> Result<T> {
        self.rows
            .remove(&id)
            .ok_or_else(|| Error::not_found(self.entity, id))
    }

    /// Rows in insertion order, which is ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> + '_ {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.keys().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}
