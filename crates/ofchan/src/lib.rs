// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # ofchan - OpenFlow secure-channel proxy extensions
//!
//! Extension layer for an OpenFlow switch's secure-channel proxy: the
//! proxy relays messages between a switch datapath and its remote
//! controller, and extensions observe and inject traffic through typed
//! callback hooks. This crate ships the neighbor-discovery extension: a
//! timer-driven state machine that probes every switch port with a custom
//! LLDP-style frame, tracks which neighbors answer, ages out the silent
//! ones, and reports discovery and expiry to the controller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ofchan::{DiscoveryConfig, HookChain, NeighborDiscovery};
//! use std::time::Instant;
//! # use std::sync::Arc;
//! # use ofchan::Connection;
//! # struct Conn;
//! # impl Connection for Conn {
//! #     fn is_connected(&self) -> bool { true }
//! #     fn send(&self, _msg: Vec<u8>) {}
//! # }
//! # let (switch, controller): (Arc<dyn Connection>, Arc<dyn Connection>) =
//! #     (Arc::new(Conn), Arc::new(Conn));
//!
//! let mut hooks = HookChain::new();
//! hooks.register(Box::new(NeighborDiscovery::new(
//!     switch,
//!     controller,
//!     DiscoveryConfig::default(),
//! )));
//!
//! // Driven by the relay loop:
//! hooks.tick(Instant::now());
//! let wait = hooks.wait_hint(Instant::now());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +----------------------------------------------------------+
//! |                      relay loop (host)                   |
//! |    switch conn  <->  hook dispatch  <->  controller conn |
//! +----------------------------------------------------------+
//! |                        ofchan                            |
//! |   relay:      Connection / Hook / HookChain              |
//! |   discovery:  engine + port & neighbor tables            |
//! |   protocol:   features-reply, packet-in, probe, notify   |
//! +----------------------------------------------------------+
//! ```
//!
//! Everything runs on the relay's single thread; hooks hold no locks and
//! never block. A hook that declines a packet leaves it for the next hook
//! and ultimately the default relay path.

/// Wire constants and per-engine discovery tunables.
pub mod config;
/// Neighbor discovery engine and its tables.
pub mod discovery;
/// Decode error types.
pub mod error;
/// Wire codecs for the consumed and produced message families.
pub mod protocol;
/// Hook and connection interfaces of the relay.
pub mod relay;

pub use config::DiscoveryConfig;
pub use discovery::NeighborDiscovery;
pub use error::{Error, Result};
pub use relay::{Connection, Hook, HookChain};
