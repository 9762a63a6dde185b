//! Batch-projection helpers.
//!
//! The feed endpoints load every association of a restaurant list with one
//! query per entity type, then join the results in memory. These two small
//! containers carry that join: [`ChildIndex`] for 1:N associations (photos,
//! likes, comments) and [`EntityMap`] for 1:1 lookups (cuisine, price range,
//! creator user).

use std::collections::HashMap;

/// Foreign key → ordered child rows, built from one batched fetch.
///
/// Rows keep the order the source returned them in. A parent with no rows
/// maps to the empty list.
#[derive(Debug)]
pub struct ChildIndex<T> {
    groups: HashMap<i64, Vec<T>>,
}

impl<T> ChildIndex<T> {
    /// Group rows by the foreign key extracted by `parent_id`.
    pub fn build<F>(rows: Vec<T>, parent_id: F) -> Self
    where
        F: Fn(&T) -> i64,
    {
        let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
        for row in rows {
            groups.entry(parent_id(&row)).or_default().push(row);
        }
        Self { groups }
    }

    /// Borrow the children of a parent; empty slice when absent.
    #[must_use]
    pub fn get(&self, parent_id: i64) -> &[T] {
        self.groups.get(&parent_id).map_or(&[], Vec::as_slice)
    }

    /// Take ownership of a parent's children; empty vec when absent.
    ///
    /// Each child row belongs to exactly one parent, so handing the group
    /// out once is enough.
    #[must_use]
    pub fn take(&mut self, parent_id: i64) -> Vec<T> {
        self.groups.remove(&parent_id).unwrap_or_default()
    }
}

/// Primary key → entity, built from one batched fetch.
#[derive(Debug)]
pub struct EntityMap<T> {
    map: HashMap<i64, T>,
}

impl<T> EntityMap<T> {
    /// Index rows by the key extracted by `id`.
    pub fn build<F>(rows: Vec<T>, id: F) -> Self
    where
        F: Fn(&T) -> i64,
    {
        let map = rows.into_iter().map(|row| (id(&row), row)).collect();
        Self { map }
    }

    /// Look up an entity; absence is a normal outcome, not an error.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&T> {
        self.map.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        parent: i64,
        value: &'static str,
    }

    const fn row(parent: i64, value: &'static str) -> Row {
        Row { parent, value }
    }

    #[test]
    fn test_child_index_groups_by_parent() {
        let rows = vec![row(1, "a"), row(2, "b"), row(1, "c")];
        let index = ChildIndex::build(rows, |r| r.parent);

        assert_eq!(index.get(1).len(), 2);
        assert_eq!(index.get(2).len(), 1);
    }

    #[test]
    fn test_child_index_preserves_source_order() {
        let rows = vec![row(1, "first"), row(1, "second"), row(1, "third")];
        let index = ChildIndex::build(rows, |r| r.parent);

        let values: Vec<_> = index.get(1).iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_child_index_absent_parent_is_empty() {
        let index = ChildIndex::build(vec![row(1, "a")], |r| r.parent);

        assert!(index.get(99).is_empty());
    }

    #[test]
    fn test_child_index_take_hands_out_group_once() {
        let mut index = ChildIndex::build(vec![row(1, "a"), row(1, "b")], |r| r.parent);

        assert_eq!(index.take(1).len(), 2);
        assert!(index.take(1).is_empty());
        assert!(index.take(99).is_empty());
    }

    #[test]
    fn test_entity_map_lookup() {
        let map = EntityMap::build(vec![row(10, "x"), row(20, "y")], |r| r.parent);

        assert_eq!(map.get(10).map(|r| r.value), Some("x"));
        assert!(map.get(30).is_none());
    }
}
