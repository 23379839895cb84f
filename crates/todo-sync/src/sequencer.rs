//! Request Sequencing
//!
//! Responses for the same key can complete out of order. Each request
//! takes a monotonically increasing sequence number, and a completion is
//! applied only if no newer request for that key has been applied yet.

use std::collections::HashMap;

/// What a request reads or overwrites
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKey {
    AllLists,
    List(String),
    Bucket(String),
    Task { todolist_id: String, task_id: String },
}

/// Handed out when a request is issued, checked when it completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: Option<RequestKey>,
    pub seq: u64,
    pub epoch: u64,
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    next_seq: u64,
    applied: HashMap<RequestKey, u64>,
}

impl RequestSequencer {
    pub fn issue(&mut self, key: Option<RequestKey>, epoch: u64) -> Ticket {
        self.next_seq += 1;
        Ticket { key, seq: self.next_seq, epoch }
    }

    /// Record a successful completion; false if a newer one already landed
    pub fn settle(&mut self, ticket: &Ticket) -> bool {
        let Some(key) = &ticket.key else {
            return true;
        };
        match self.applied.get(key) {
            Some(&latest) if latest > ticket.seq => false,
            _ => {
                self.applied.insert(key.clone(), ticket.seq);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.applied.clear();
    }
}
