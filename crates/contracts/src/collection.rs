//! Keyed, insertion-ordered record sets.
//!
//! The admin panel owns one `RecordSet` per entity kind as the authoritative
//! in-memory collection for the session. Lookups go through the id map;
//! display order is the carried insertion-order sequence, so tables stay
//! stable across edits.

use std::collections::HashMap;

/// A record that can live in a [`RecordSet`].
///
/// Identifiers are opaque kind-prefixed strings. `fresh_id` must be
/// practically collision-free; the set still re-rolls on a hit.
pub trait Record: Clone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn fresh_id() -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T: Record> {
    order: Vec<String>,
    by_id: HashMap<String, T>,
}

impl<T: Record> RecordSet<T> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Build a set from seed data, keeping the seed order. A duplicated id in
    /// the seed keeps the first occurrence.
    pub fn from_seed(items: Vec<T>) -> Self {
        let mut set = Self::new();
        for item in items {
            if set.by_id.contains_key(item.id()) {
                continue;
            }
            set.order.push(item.id().to_string());
            set.by_id.insert(item.id().to_string(), item);
        }
        set
    }

    /// Commit a record. An id matching an existing record replaces that
    /// record wholesale (no field merge) and keeps its position; any other
    /// id — including the empty one a create form submits — gets a fresh
    /// identifier and the record is appended. Returns the effective id.
    pub fn save(&mut self, mut item: T) -> String {
        if self.by_id.contains_key(item.id()) {
            let id = item.id().to_string();
            self.by_id.insert(id.clone(), item);
            return id;
        }

        let mut id = T::fresh_id();
        while self.by_id.contains_key(&id) {
            id = T::fresh_id();
        }
        item.set_id(id.clone());
        self.order.push(id.clone());
        self.by_id.insert(id.clone(), item);
        id
    }

    /// Remove the record with `id`. Unknown ids are a no-op, not an error.
    pub fn delete(&mut self, id: &str) {
        if self.by_id.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Record> Default for RecordSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::broker::Broker;
    use crate::domain::owner::Owner;
    use crate::seed;

    fn seeded_brokers() -> RecordSet<Broker> {
        RecordSet::from_seed(seed::brokers())
    }

    #[test]
    fn save_with_empty_id_assigns_fresh_id_and_appends() {
        let mut set = seeded_brokers();
        let before = set.len();

        let id = set.save(Broker {
            name: "Beatriz Lima".into(),
            email: "beatriz@imoveis.com".into(),
            phone: "(11) 91111-2222".into(),
            license_number: "CRECI-SP 99887".into(),
            ..Broker::default()
        });

        assert_eq!(set.len(), before + 1);
        assert!(id.starts_with("broker-"));
        assert_eq!(set.get(&id).unwrap().name, "Beatriz Lima");
        // Appended last, existing order untouched.
        let ids: Vec<&str> = set.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["broker-1", "broker-2", id.as_str()]);
    }

    #[test]
    fn save_with_existing_id_replaces_in_place() {
        let mut set = seeded_brokers();
        let untouched = set.get("broker-2").unwrap().clone();

        let mut edited = set.get("broker-1").unwrap().clone();
        edited.name = "Carlos A. Ferreira".into();
        set.save(edited);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("broker-1").unwrap().name, "Carlos A. Ferreira");
        assert_eq!(set.get("broker-2").unwrap(), &untouched);
        let ids: Vec<&str> = set.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["broker-1", "broker-2"]);
    }

    #[test]
    fn save_replacement_is_full_not_a_merge() {
        let mut set = seeded_brokers();
        let replacement = Broker {
            id: "broker-1".into(),
            name: "Carlos Ferreira".into(),
            email: "carlos.f@imoveis.com".into(),
            phone: "(11) 98765-4321".into(),
            whatsapp: None,
            license_number: "CRECI-SP 12345".into(),
        };
        set.save(replacement.clone());
        // The old record's whatsapp does not survive the replacement.
        assert_eq!(set.get("broker-1").unwrap(), &replacement);
    }

    #[test]
    fn delete_removes_exactly_one_and_is_idempotent_on_missing_ids() {
        let mut set = RecordSet::from_seed(seed::owners());
        assert_eq!(set.len(), 3);

        set.delete("owner-2");
        assert_eq!(set.len(), 2);
        assert!(!set.contains("owner-2"));
        let ids: Vec<&str> = set.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["owner-1", "owner-3"]);

        let before = set.to_vec();
        set.delete("owner-2");
        set.delete("no-such-id");
        assert_eq!(set.to_vec(), before);
    }

    #[test]
    fn fresh_ids_do_not_collide_with_existing_ones() {
        let mut set: RecordSet<Owner> = RecordSet::from_seed(seed::owners());
        let mut seen: Vec<String> = set.iter().map(|o| o.id.clone()).collect();
        for i in 0..50 {
            let id = set.save(Owner {
                name: format!("Pessoa {i}"),
                email: format!("pessoa{i}@email.com"),
                phone: "(11) 90000-0000".into(),
                ..Owner::default()
            });
            assert!(!seen.contains(&id));
            seen.push(id);
        }
        assert_eq!(set.len(), 53);
    }

    #[test]
    fn seed_duplicates_keep_first_occurrence() {
        let mut first = seed::owners()[0].clone();
        first.name = "Original".into();
        let mut dup = first.clone();
        dup.name = "Duplicate".into();

        let set = RecordSet::from_seed(vec![first, dup]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("owner-1").unwrap().name, "Original");
    }
}
