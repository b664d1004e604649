// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounded table of currently known neighbors.
//!
//! A fixed-capacity slot array; a free slot is `None`. A neighbor's
//! identity is the (local port, remote dpid, remote port) triple and no
//! two live slots may share one.

use crate::config::PortId;
use std::time::Instant;

/// Identity of a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborKey {
    /// Local port the neighbor was heard on.
    pub in_port: PortId,
    /// The neighbor's datapath id.
    pub dpid: u64,
    /// The neighbor's port facing us.
    pub port: PortId,
}

/// One live neighbor entry.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub key: NeighborKey,
    /// Evicted at the next tick at or after this instant unless refreshed.
    pub expiry: Instant,
}

/// What `refresh_or_insert` did with a probe report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The key was already known; only its expiry moved.
    Refreshed,
    /// A free slot was populated.
    Inserted,
    /// Table full; the report was dropped.
    Full,
}

/// Fixed-capacity neighbor set.
pub struct NeighborTable {
    slots: Vec<Option<Neighbor>>,
}

impl NeighborTable {
    /// Create a table with `capacity` free slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Refresh the entry with this exact key, or claim a free slot for it.
    ///
    /// On [`SlotOutcome::Full`] nothing changes; the caller logs and drops
    /// the report.
    pub fn refresh_or_insert(&mut self, key: NeighborKey, expiry: Instant) -> SlotOutcome {
        let mut free = None;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            match slot {
                Some(neighbor) if neighbor.key == key => {
                    neighbor.expiry = expiry;
                    return SlotOutcome::Refreshed;
                }
                Some(_) => {}
                None => {
                    if free.is_none() {
                        free = Some(i);
                    }
                }
            }
        }

        match free {
            Some(i) => {
                self.slots[i] = Some(Neighbor { key, expiry });
                SlotOutcome::Inserted
            }
            None => SlotOutcome::Full,
        }
    }

    /// Remove every entry whose expiry has passed and return their keys.
    pub fn expire(&mut self, now: Instant) -> Vec<NeighborKey> {
        let mut expired = Vec::new();
        for slot in &mut self.slots {
            if let Some(neighbor) = slot {
                if neighbor.expiry <= now {
                    expired.push(neighbor.key);
                    *slot = None;
                }
            }
        }
        expired
    }

    /// Remove every entry and return the keys that were live.
    pub fn drain_all(&mut self) -> Vec<NeighborKey> {
        let mut drained = Vec::new();
        for slot in &mut self.slots {
            if let Some(neighbor) = slot.take() {
                drained.push(neighbor.key);
            }
        }
        drained
    }

    /// Expiry of the entry with this key, if it is live.
    pub fn expiry_of(&self, key: NeighborKey) -> Option<Instant> {
        self.slots
            .iter()
            .flatten()
            .find(|n| n.key == key)
            .map(|n| n.expiry)
    }

    /// Live entries heard on `port`. Must equal the port table's count for
    /// that port at all times.
    pub fn occupied_on(&self, port: PortId) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|n| n.key.in_port == port)
            .count() as u32
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether no entry is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
