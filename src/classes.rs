//! Classification performance tracker.
//!
//! Class records are refreshed from the analysis gateway. A refresh can be
//! driven in two halves, `begin_refresh` and `complete_refresh`, with the
//! gateway call in between and no workspace borrow held across it. Each
//! refresh carries a sequence number; a response arriving after a newer
//! refresh of the same record was started is discarded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::collection::Collection;
use crate::confirm::Confirm;
use crate::error::{RegistryError, Result};
use crate::gateway::{AnalysisGateway, GatewayError};
use crate::models::{ClassAnalysis, ClassSocietyData};
use crate::store::KeyValueStore;
use crate::workspace::Workspace;

pub const PENDING_REASON: &str = "Analysis Pending";

/// Bookkeeping for outstanding refreshes.
#[derive(Debug, Default)]
pub(crate) struct RefreshLedger {
    next_seq: u64,
    latest: HashMap<String, u64>,
    in_flight: Arc<AtomicUsize>,
}

impl RefreshLedger {
    fn issue(&mut self, id: &str) -> (u64, InFlight) {
        self.next_seq += 1;
        self.latest.insert(id.to_string(), self.next_seq);
        (self.next_seq, InFlight::enter(&self.in_flight))
    }

    fn is_latest(&self, id: &str, seq: u64) -> bool {
        self.latest.get(id) == Some(&seq)
    }

    fn forget(&mut self, id: &str) {
        self.latest.remove(id);
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Counts one outstanding refresh until dropped.
#[derive(Debug)]
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A started refresh, to be handed back to `complete_refresh`.
///
/// The refresh counts as in flight until the ticket is completed or dropped,
/// so an abandoned gateway call does not leave the tracker analyzing.
#[derive(Debug)]
#[must_use = "a refresh ticket must be completed"]
pub struct RefreshTicket {
    id: String,
    name: String,
    seq: u64,
    _in_flight: InFlight,
}

impl RefreshTicket {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Society name to send to the gateway.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> u64 {
        self.seq
    }
}

/// How a refresh ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The record now holds the new analysis.
    Updated,
    /// The gateway failed or returned nothing usable; the record is unchanged.
    Failed { notice: String },
    /// A newer refresh of the same record was started; this response was dropped.
    Superseded,
    /// The record was deleted while the request was in flight.
    Removed,
}

impl RefreshOutcome {
    /// User-facing notice, for failed refreshes.
    pub fn notice(&self) -> Option<&str> {
        match self {
            RefreshOutcome::Failed { notice } => Some(notice),
            _ => None,
        }
    }
}

/// Result of adding a society: the record as it stands after its first
/// refresh, and how that refresh went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassAdded {
    pub record: ClassSocietyData,
    pub refresh: RefreshOutcome,
}

/// Operations over the classification-society collection.
pub struct ClassTracker<'a, S> {
    ws: &'a mut Workspace<S>,
}

impl<'a, S: KeyValueStore> ClassTracker<'a, S> {
    pub(crate) fn new(ws: &'a mut Workspace<S>) -> Self {
        Self { ws }
    }

    pub fn all(&self) -> &[ClassSocietyData] {
        &self.ws.state.classes
    }

    pub fn get(&self, id: &str) -> Option<&ClassSocietyData> {
        self.ws.state.classes.iter().find(|c| c.id == id)
    }

    pub fn is_analyzing(&self) -> bool {
        self.ws.is_analyzing()
    }

    /// Append a pending record without analysing it.
    pub fn insert(&mut self, name: &str) -> Result<ClassSocietyData> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation(
                "class society name is required".into(),
            ));
        }

        let (id, now) = self.ws.stamp();
        let record = ClassSocietyData::pending(id, name, PENDING_REASON, now);

        let ws = &mut *self.ws;
        let mut next = ws.state.classes.clone();
        next.push(record.clone());
        ws.sync.commit(&mut ws.state.classes, next)?;

        info!(id = %record.id, name = %record.name, "class society added");
        Ok(record)
    }

    /// Add a society and run its first refresh before returning.
    ///
    /// A failed refresh does not undo the add; the record stays pending.
    pub async fn add<G: AnalysisGateway>(&mut self, gateway: &G, name: &str) -> Result<ClassAdded> {
        let record = self.insert(name)?;
        let refresh = self.refresh(gateway, &record.id).await?;
        let record = self.get(&record.id).cloned().unwrap_or(record);
        Ok(ClassAdded { record, refresh })
    }

    /// Refresh one record from the gateway.
    pub async fn refresh<G: AnalysisGateway>(
        &mut self,
        gateway: &G,
        id: &str,
    ) -> Result<RefreshOutcome> {
        let ticket = self.begin_refresh(id)?;
        let result = gateway.analyze_class(ticket.name()).await;
        self.complete_refresh(ticket, result)
    }

    /// Start a refresh of `id`, superseding any refresh already in flight
    /// for the same record.
    pub fn begin_refresh(&mut self, id: &str) -> Result<RefreshTicket> {
        let record = self.get(id).ok_or_else(|| RegistryError::NotFound {
            collection: ClassSocietyData::KEY,
            id: id.to_string(),
        })?;
        let name = record.name.clone();

        let (seq, in_flight) = self.ws.refreshes.issue(id);
        debug!(id, name = %name, seq, "class refresh started");

        Ok(RefreshTicket {
            id: id.to_string(),
            name,
            seq,
            _in_flight: in_flight,
        })
    }

    /// Apply the gateway's answer for `ticket`.
    ///
    /// Only a usable analysis for the newest ticket of a still-existing record
    /// changes anything, and then every field but the id is replaced.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: std::result::Result<Option<ClassAnalysis>, GatewayError>,
    ) -> Result<RefreshOutcome> {
        if self.get(&ticket.id).is_none() {
            info!(id = %ticket.id, "class record removed before refresh completed");
            return Ok(RefreshOutcome::Removed);
        }
        if !self.ws.refreshes.is_latest(&ticket.id, ticket.seq) {
            info!(id = %ticket.id, seq = ticket.seq, "discarding superseded class refresh");
            return Ok(RefreshOutcome::Superseded);
        }

        let analysis = match result {
            Ok(Some(analysis)) => analysis,
            Ok(None) => {
                warn!(name = %ticket.name, "class analysis returned no usable data");
                return Ok(failed(&ticket));
            }
            Err(err) => {
                warn!(name = %ticket.name, error = %err, "class analysis failed");
                return Ok(failed(&ticket));
            }
        };

        let now = self.ws.now();
        let ws = &mut *self.ws;
        let next = ws
            .state
            .classes
            .iter()
            .map(|c| {
                let mut c = c.clone();
                if c.id == ticket.id {
                    c.apply(analysis.clone(), now);
                }
                c
            })
            .collect();
        ws.sync.commit(&mut ws.state.classes, next)?;

        info!(id = %ticket.id, name = %ticket.name, "class society refreshed");
        Ok(RefreshOutcome::Updated)
    }

    /// Delete a society. Returns false if the confirmation was declined.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool> {
        if self.get(id).is_none() {
            return Err(RegistryError::NotFound {
                collection: ClassSocietyData::KEY,
                id: id.to_string(),
            });
        }

        if !confirm.confirm("Delete this class society?") {
            debug!(id, "class society deletion declined");
            return Ok(false);
        }

        let ws = &mut *self.ws;
        let next = ws
            .state
            .classes
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        ws.sync.commit(&mut ws.state.classes, next)?;
        ws.refreshes.forget(id);

        info!(id, "class society deleted");
        Ok(true)
    }
}

fn failed(ticket: &RefreshTicket) -> RefreshOutcome {
    RefreshOutcome::Failed {
        notice: format!("Failed to update data for {}", ticket.name),
    }
}
