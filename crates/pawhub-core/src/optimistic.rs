//! Optimistic mutation coordination.
//!
//! A mutating action (refund request, campaign pause, adoption accept or
//! reject) flips a single field on an in-memory record immediately, then
//! reconciles with the server: confirmation makes the change permanent,
//! rejection rolls the field back to its pre-optimistic value.
//!
//! Field values are `serde_json::Value` so one ledger covers every
//! record type. Overlap policy is last-writer-wins: at most one live
//! [`PatchRecord`] per `(target, field)` slot; a second apply before the
//! first resolves supersedes it, keeping the original value from before
//! any optimistic change as the rollback baseline. Only the newest
//! generation's confirm or reject resolves the slot, so reconciliations
//! arriving out of order key off their own ticket and stale ones are
//! no-ops.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{AdoptionRequest, Campaign, Donation, Keyed};
use crate::error::InvalidInputError;
use crate::types::ResourceId;
use crate::Result;

/// A record whose fields can be optimistically patched by wire name.
pub trait Patchable: Keyed {
    /// Read a patchable field; `None` if the record has no such field.
    fn get_field(&self, field: &str) -> Option<Value>;

    /// Write a patchable field; false if the record has no such field.
    fn set_field(&mut self, field: &str, value: Value) -> bool;
}

/// A pending local mutation awaiting server reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRecord {
    /// The record being mutated.
    pub target: ResourceId,
    /// The mutated field's wire name.
    pub field: &'static str,
    /// The value to restore on rejection.
    pub original: Value,
    generation: u64,
}

/// Handle to one applied mutation, used to reconcile it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTicket {
    target: ResourceId,
    field: &'static str,
    generation: u64,
}

/// Tracks pending optimistic patches across records.
#[derive(Debug, Default)]
pub struct MutationLedger {
    next_generation: u64,
    pending: HashMap<(ResourceId, &'static str), PatchRecord>,
}

impl MutationLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a mutation on this slot awaits reconciliation.
    pub fn is_pending(&self, target: &ResourceId, field: &str) -> bool {
        self.pending
            .keys()
            .any(|(t, f)| t == target && *f == field)
    }

    /// Apply a field change to the record immediately.
    ///
    /// If the slot already has a live patch, this supersedes it: the
    /// existing rollback baseline is kept and the older ticket can no
    /// longer resolve the slot.
    pub fn apply<T: Patchable>(
        &mut self,
        item: &mut T,
        field: &'static str,
        value: Value,
    ) -> Result<MutationTicket> {
        let current = item.get_field(field).ok_or(InvalidInputError::UnknownField {
            field: field.to_string(),
        })?;

        let target = item.key().clone();
        self.next_generation += 1;
        let generation = self.next_generation;

        let slot = (target.clone(), field);
        match self.pending.get_mut(&slot) {
            Some(record) => {
                trace!(%target, field, superseded = record.generation, "superseding pending patch");
                record.generation = generation;
            }
            None => {
                self.pending.insert(
                    slot,
                    PatchRecord {
                        target: target.clone(),
                        field,
                        original: current,
                        generation,
                    },
                );
            }
        }

        item.set_field(field, value);
        debug!(%target, field, generation, "optimistic patch applied");
        Ok(MutationTicket {
            target,
            field,
            generation,
        })
    }

    /// The server accepted the mutation; the change becomes permanent.
    ///
    /// A stale ticket (superseded by a later apply) is a no-op: the newer
    /// mutation still owns the slot.
    pub fn confirm(&mut self, ticket: &MutationTicket) {
        let slot = (ticket.target.clone(), ticket.field);
        if self
            .pending
            .get(&slot)
            .is_some_and(|record| record.generation == ticket.generation)
        {
            self.pending.remove(&slot);
            debug!(target = %ticket.target, field = ticket.field, "patch confirmed");
        }
    }

    /// The server rejected the mutation; restore the original value.
    ///
    /// A stale ticket is a no-op, so an out-of-order rejection of a
    /// superseded mutation cannot clobber the newer one's optimistic
    /// state.
    pub fn reject<T: Patchable>(&mut self, ticket: &MutationTicket, item: &mut T) {
        let slot = (ticket.target.clone(), ticket.field);
        if self
            .pending
            .get(&slot)
            .is_some_and(|record| record.generation == ticket.generation)
        {
            let record = self.pending.remove(&slot).expect("checked above");
            item.set_field(ticket.field, record.original);
            debug!(target = %ticket.target, field = ticket.field, "patch rolled back");
        }
    }
}

/// Apply a mutation optimistically, then reconcile with the server call.
///
/// The field flips before the call is issued; on success the change is
/// permanent and the server's output is returned, on failure the field is
/// rolled back and the error surfaces to the caller for notification.
pub async fn mutate<T, F, Fut, R>(
    ledger: &mut MutationLedger,
    item: &mut T,
    field: &'static str,
    value: Value,
    server_call: F,
) -> Result<R>
where
    T: Patchable,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let ticket = ledger.apply(item, field, value)?;
    match server_call().await {
        Ok(output) => {
            ledger.confirm(&ticket);
            Ok(output)
        }
        Err(err) => {
            ledger.reject(&ticket, item);
            Err(err)
        }
    }
}

// Patchable field names, as they appear on the wire.

/// `refundRequested` on a donation.
pub const REFUND_REQUESTED: &str = "refundRequested";
/// `isPaused` on a campaign.
pub const IS_PAUSED: &str = "isPaused";
/// `status` on an adoption request.
pub const STATUS: &str = "status";

impl Patchable for Donation {
    fn get_field(&self, field: &str) -> Option<Value> {
        match field {
            REFUND_REQUESTED => Some(Value::Bool(self.refund_requested)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: Value) -> bool {
        match field {
            REFUND_REQUESTED => {
                self.refund_requested = value.as_bool().unwrap_or(self.refund_requested);
                true
            }
            _ => false,
        }
    }
}

impl Patchable for Campaign {
    fn get_field(&self, field: &str) -> Option<Value> {
        match field {
            IS_PAUSED => Some(Value::Bool(self.paused)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: Value) -> bool {
        match field {
            IS_PAUSED => {
                self.paused = value.as_bool().unwrap_or(self.paused);
                true
            }
            _ => false,
        }
    }
}

impl Patchable for AdoptionRequest {
    fn get_field(&self, field: &str) -> Option<Value> {
        match field {
            STATUS => serde_json::to_value(self.status).ok(),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: Value) -> bool {
        match field {
            STATUS => {
                if let Ok(status) = serde_json::from_value(value) {
                    self.status = status;
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::RequestStatus;
    use crate::error::{Error, TransportError};

    fn donation() -> Donation {
        serde_json::from_value(json!({
            "_id": "d1",
            "amount": 40.0,
            "refundRequested": false
        }))
        .unwrap()
    }

    fn request() -> AdoptionRequest {
        serde_json::from_value(json!({
            "_id": "r1",
            "petId": "pet1"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn confirmed_mutation_sticks() {
        let mut ledger = MutationLedger::new();
        let mut d = donation();

        let result = mutate(&mut ledger, &mut d, REFUND_REQUESTED, json!(true), || async {
            Ok(())
        })
        .await;

        assert!(result.is_ok());
        assert!(d.refund_requested);
        assert!(!ledger.is_pending(&d.id, REFUND_REQUESTED));
    }

    #[tokio::test]
    async fn rejected_mutation_rolls_back() {
        let mut ledger = MutationLedger::new();
        let mut d = donation();

        let result: Result<()> =
            mutate(&mut ledger, &mut d, REFUND_REQUESTED, json!(true), || async {
                Err(Error::Transport(TransportError::Timeout))
            })
            .await;

        assert!(result.is_err());
        assert!(!d.refund_requested);
        assert!(!ledger.is_pending(&d.id, REFUND_REQUESTED));
    }

    #[test]
    fn field_flips_before_reconciliation() {
        let mut ledger = MutationLedger::new();
        let mut d = donation();

        let ticket = ledger.apply(&mut d, REFUND_REQUESTED, json!(true)).unwrap();
        assert!(d.refund_requested);
        assert!(ledger.is_pending(&d.id, REFUND_REQUESTED));

        ledger.confirm(&ticket);
        assert!(d.refund_requested);
        assert!(!ledger.is_pending(&d.id, REFUND_REQUESTED));
    }

    #[test]
    fn superseded_rollback_restores_pre_optimistic_value() {
        let mut ledger = MutationLedger::new();
        let mut req = request();

        // Accept, then change of mind to reject, before either resolves.
        let first = ledger.apply(&mut req, STATUS, json!("accepted")).unwrap();
        let second = ledger.apply(&mut req, STATUS, json!("rejected")).unwrap();
        assert_eq!(req.status, RequestStatus::Rejected);

        // The server bounces the second mutation: the field reverts to
        // the value from before any optimistic change, not to "accepted".
        ledger.reject(&second, &mut req);
        assert_eq!(req.status, RequestStatus::Pending);

        // The first ticket was superseded; its late rejection is a no-op.
        ledger.reject(&first, &mut req);
        assert_eq!(req.status, RequestStatus::Pending);
    }

    #[test]
    fn stale_confirmation_does_not_resolve_newer_patch() {
        let mut ledger = MutationLedger::new();
        let mut d = donation();

        let first = ledger.apply(&mut d, REFUND_REQUESTED, json!(true)).unwrap();
        let second = ledger.apply(&mut d, REFUND_REQUESTED, json!(false)).unwrap();

        // Responses arrive out of order: the first call's confirmation
        // lands after the supersede and must not clear the slot.
        ledger.confirm(&first);
        assert!(ledger.is_pending(&d.id, REFUND_REQUESTED));

        ledger.reject(&second, &mut d);
        assert!(!d.refund_requested);
        assert!(!ledger.is_pending(&d.id, REFUND_REQUESTED));
    }

    #[test]
    fn independent_slots_do_not_interfere() {
        let mut ledger = MutationLedger::new();
        let mut a = donation();
        let mut b: Donation = serde_json::from_value(json!({
            "_id": "d2",
            "amount": 10.0,
            "refundRequested": false
        }))
        .unwrap();

        let ta = ledger.apply(&mut a, REFUND_REQUESTED, json!(true)).unwrap();
        let tb = ledger.apply(&mut b, REFUND_REQUESTED, json!(true)).unwrap();

        ledger.reject(&ta, &mut a);
        assert!(!a.refund_requested);
        // b's patch is untouched.
        assert!(b.refund_requested);
        ledger.confirm(&tb);
        assert!(b.refund_requested);
    }

    #[test]
    fn unknown_field_is_an_input_error() {
        let mut ledger = MutationLedger::new();
        let mut d = donation();
        let err = ledger.apply(&mut d, "notAField", json!(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
