// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Neighbor discovery: probe scheduling, the bounded neighbor set, and
//! the engine tying them together.
//!
//! # Module Structure
//!
//! - `port_table`: per-port probe deadlines and neighbor counts
//! - `neighbor_table`: fixed-capacity set of known neighbors
//! - `engine`: the [`NeighborDiscovery`] state machine, hooked into the
//!   relay

mod engine;
mod neighbor_table;
mod port_table;

pub use engine::NeighborDiscovery;
pub use neighbor_table::{Neighbor, NeighborKey, NeighborTable, SlotOutcome};
pub use port_table::{PortProbeState, PortProbeTable};
