//! Optimistic mutation tracker
//!
//! A list view applies a change locally before the request lands. Each
//! change yields a [`MutationTicket`] holding the undo information; the
//! ticket is either committed when the server accepts or rolled back when
//! it refuses, so local state never silently diverges from the backend.
//!
//! Several tickets may be pending on the same list. Removed rows keep their
//! slot in an order ledger until settled, so a rollback lands them between
//! the same neighbours regardless of what else was removed in the meantime.

use std::collections::HashMap;
use std::future::Future;

use shared::models::{AssetTransaction, FollowUp};
use uuid::Uuid;

use crate::ClientResult;

/// Records addressable by their backend id
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for AssetTransaction {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for FollowUp {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Handle for one in-flight mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTicket {
    id: Uuid,
    key: String,
}

impl MutationTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug)]
enum Undo<T> {
    /// Snapshot taken before an in-place update
    Restore(T),
    /// Removed row, still holding its slot in the order ledger
    Reinsert(T),
}

#[derive(Debug)]
pub struct OptimisticList<T> {
    items: Vec<T>,
    /// Keys in list order, including rows whose removal is still pending
    order: Vec<String>,
    pending: HashMap<Uuid, Undo<T>>,
}

impl<T> Default for OptimisticList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            order: Vec::new(),
            pending: HashMap::new(),
        }
    }
}

fn key_order<T: Keyed>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.key().to_string()).collect()
}

impl<T: Keyed + Clone> OptimisticList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            order: key_order(&items),
            items,
            pending: HashMap::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Number of mutations neither committed nor rolled back
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Swap in a freshly fetched list; outstanding undo data is dropped
    pub fn reload(&mut self, items: Vec<T>) {
        if !self.pending.is_empty() {
            tracing::debug!(dropped = self.pending.len(), "Reload discards pending mutations");
        }
        self.pending.clear();
        self.order = key_order(&items);
        self.items = items;
    }

    /// Replace the row with the same key, or append it
    pub fn replace(&mut self, item: T) {
        match self.position(item.key()) {
            Some(index) => self.items[index] = item,
            None => {
                if !self.order.iter().any(|k| k == item.key()) {
                    self.order.push(item.key().to_string());
                }
                self.items.push(item);
            }
        }
    }

    /// Apply an in-place change; `None` when no row has that key
    pub fn update(&mut self, key: &str, change: impl FnOnce(&mut T)) -> Option<MutationTicket> {
        let index = self.position(key)?;
        let snapshot = self.items[index].clone();
        change(&mut self.items[index]);
        Some(self.track(key, Undo::Restore(snapshot)))
    }

    /// Remove a row; `None` when no row has that key
    pub fn remove(&mut self, key: &str) -> Option<MutationTicket> {
        let index = self.position(key)?;
        let item = self.items.remove(index);
        Some(self.track(key, Undo::Reinsert(item)))
    }

    fn track(&mut self, key: &str, undo: Undo<T>) -> MutationTicket {
        let ticket = MutationTicket {
            id: Uuid::new_v4(),
            key: key.to_string(),
        };
        self.pending.insert(ticket.id, undo);
        ticket
    }

    /// Server accepted: forget the undo data
    pub fn commit(&mut self, ticket: &MutationTicket) -> bool {
        let Some(undo) = self.pending.remove(&ticket.id) else {
            return false;
        };
        if matches!(undo, Undo::Reinsert(_)) && self.position(&ticket.key).is_none() {
            self.order.retain(|k| *k != ticket.key);
        }
        true
    }

    /// Server refused: put the row back the way it was
    ///
    /// A row deleted since the update stays deleted; if its removal is
    /// itself pending, the snapshot is what a rollback of that removal
    /// brings back. Returns false for an unknown or already-settled ticket.
    pub fn rollback(&mut self, ticket: &MutationTicket) -> bool {
        let Some(undo) = self.pending.remove(&ticket.id) else {
            return false;
        };
        match undo {
            Undo::Restore(snapshot) => self.restore(snapshot),
            Undo::Reinsert(item) => self.reinsert(item),
        }
        true
    }

    fn restore(&mut self, snapshot: T) {
        if let Some(index) = self.position(snapshot.key()) {
            self.items[index] = snapshot;
            return;
        }
        let removed = self.pending.values_mut().find_map(|undo| match undo {
            Undo::Reinsert(item) if item.key() == snapshot.key() => Some(item),
            _ => None,
        });
        match removed {
            Some(item) => *item = snapshot,
            None => tracing::debug!(key = snapshot.key(), "Row gone, update rollback skipped"),
        }
    }

    fn reinsert(&mut self, item: T) {
        if self.position(item.key()).is_some() {
            return;
        }
        // after the nearest preceding row that is still visible
        let index = self
            .order
            .iter()
            .take_while(|k| k.as_str() != item.key())
            .filter_map(|k| self.position(k))
            .max()
            .map_or(0, |i| i + 1);
        self.items.insert(index, item);
    }

    /// Await the request and settle the ticket on its outcome
    pub async fn settle<R, F>(&mut self, ticket: MutationTicket, request: F) -> ClientResult<R>
    where
        F: Future<Output = ClientResult<R>>,
    {
        match request.await {
            Ok(value) => {
                self.commit(&ticket);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(key = ticket.key(), error = %e, "Mutation rejected, rolling back");
                self.rollback(&ticket);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;
    use shared::Normalize;

    fn followups() -> OptimisticList<FollowUp> {
        OptimisticList::new(FollowUp::normalize_all(&[
            json!({"id": "a", "status": "Pending"}),
            json!({"id": "b", "status": "Pending"}),
            json!({"id": "c", "status": "Overdue"}),
        ]))
    }

    fn keys(list: &OptimisticList<FollowUp>) -> Vec<&str> {
        list.items().iter().map(|f| f.key()).collect()
    }

    #[test]
    fn test_remove_rollback_restores_position() {
        let mut list = followups();
        let ticket = list.remove("b").unwrap();
        assert_eq!(keys(&list), ["a", "c"]);
        assert!(list.rollback(&ticket));
        assert_eq!(keys(&list), ["a", "b", "c"]);
        assert!(!list.rollback(&ticket));
        assert_eq!(list.pending(), 0);
    }

    #[test]
    fn test_update_rollback_restores_snapshot() {
        let mut list = followups();
        let ticket = list.update("a", |f| f.set_status("Completed")).unwrap();
        assert_eq!(list.get("a").unwrap().status, "Completed");
        list.rollback(&ticket);
        assert_eq!(list.get("a").unwrap().status, "Pending");
    }

    #[test]
    fn test_overlapping_removals_roll_back_in_place() {
        let mut list = followups();
        let first = list.remove("a").unwrap();
        let second = list.remove("b").unwrap();
        assert_eq!(keys(&list), ["c"]);
        list.rollback(&first);
        list.rollback(&second);
        assert_eq!(keys(&list), ["a", "b", "c"]);

        let first = list.remove("a").unwrap();
        let second = list.remove("b").unwrap();
        list.rollback(&second);
        list.rollback(&first);
        assert_eq!(keys(&list), ["a", "b", "c"]);
    }

    #[test]
    fn test_rollback_beside_committed_removal() {
        let mut list = followups();
        let kept = list.remove("b").unwrap();
        let gone = list.remove("a").unwrap();
        list.commit(&gone);
        list.rollback(&kept);
        assert_eq!(keys(&list), ["b", "c"]);
        assert_eq!(list.pending(), 0);
    }

    #[test]
    fn test_update_rollback_after_committed_delete() {
        let mut list = followups();
        let update = list.update("a", |f| f.set_status("Completed")).unwrap();
        let delete = list.remove("a").unwrap();
        list.commit(&delete);
        list.rollback(&update);
        assert_eq!(keys(&list), ["b", "c"]);
        assert!(list.get("a").is_none());
    }

    #[test]
    fn test_update_rollback_under_pending_delete() {
        let mut list = followups();
        let update = list.update("a", |f| f.set_status("Completed")).unwrap();
        let delete = list.remove("a").unwrap();
        list.rollback(&update);
        assert!(list.get("a").is_none());
        list.rollback(&delete);
        assert_eq!(keys(&list), ["a", "b", "c"]);
        assert_eq!(list.get("a").unwrap().status, "Pending");
    }

    #[test]
    fn test_unknown_key() {
        let mut list = followups();
        assert!(list.update("zzz", |_| {}).is_none());
        assert!(list.remove("zzz").is_none());
    }

    #[tokio::test]
    async fn test_settle_commit_and_rollback() {
        let mut list = followups();

        let ticket = list.remove("a").unwrap();
        let ok: ClientResult<()> = list.settle(ticket, async { Ok(()) }).await;
        assert!(ok.is_ok());
        assert_eq!(keys(&list), ["b", "c"]);

        let ticket = list.remove("c").unwrap();
        let err: ClientResult<()> = list
            .settle(ticket, async {
                Err(ClientError::Api {
                    status: 503,
                    message: "down".into(),
                })
            })
            .await;
        assert!(err.is_err());
        assert_eq!(keys(&list), ["b", "c"]);
        assert_eq!(list.pending(), 0);
    }
}
