// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-port probe scheduling state.
//!
//! A dense array addressed by raw port number, the arena-style layout the
//! wire format invites: ports are u16, so the table is 65536 entries and
//! lookups are plain indexing. `next_probe == None` means the port was
//! never advertised and gets no probes.

use crate::config::{PortId, PORT_TABLE_SIZE};
use std::time::Instant;

/// Scheduling state of one port.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortProbeState {
    /// Neighbors currently recorded as reachable via this port. Kept in
    /// lock-step with the neighbor table; see `NeighborTable`.
    pub neighbor_count: u32,
    /// When the next probe is due; `None` while the port is unscheduled.
    pub next_probe: Option<Instant>,
}

/// Probe schedule for the whole port space.
pub struct PortProbeTable {
    ports: Vec<PortProbeState>,
}

impl PortProbeTable {
    /// Create a table with every port unscheduled.
    pub fn new() -> Self {
        Self {
            ports: vec![PortProbeState::default(); PORT_TABLE_SIZE],
        }
    }

    /// Reset every port to unscheduled with a zero neighbor count.
    pub fn clear_all(&mut self) {
        for state in &mut self.ports {
            *state = PortProbeState::default();
        }
    }

    /// Schedule the next probe for `port`.
    pub fn schedule(&mut self, port: PortId, deadline: Instant) {
        self.ports[usize::from(port)].next_probe = Some(deadline);
    }

    /// Next probe deadline of `port`, if one is scheduled.
    pub fn next_probe(&self, port: PortId) -> Option<Instant> {
        self.ports[usize::from(port)].next_probe
    }

    /// Current neighbor count of `port`.
    pub fn neighbor_count(&self, port: PortId) -> u32 {
        self.ports[usize::from(port)].neighbor_count
    }

    /// A neighbor appeared on `port`.
    pub fn increment(&mut self, port: PortId) {
        self.ports[usize::from(port)].neighbor_count += 1;
    }

    /// A neighbor left `port`. An underflow means the two tables went out
    /// of step; it is logged and clamped, never fatal.
    pub fn decrement(&mut self, port: PortId) {
        let state = &mut self.ports[usize::from(port)];
        if state.neighbor_count == 0 {
            log::warn!("[port_table] neighbor count underflow on port {port}");
            return;
        }
        state.neighbor_count -= 1;
    }
}

impl Default for PortProbeTable {
    fn default() -> Self {
        Self::new()
    }
}
