// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Global configuration - single source of truth for wire constants and
//! discovery tunables.
//!
//! This module centralizes ALL OpenFlow and discovery constants.
//! **NEVER hardcode elsewhere!**
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: Compile-time constants (OpenFlow wire format,
//!   reserved addresses, table sizes)
//! - **Level 2 (Dynamic)**: [`DiscoveryConfig`] for per-engine tunables
//!   (probe cadence, miss multiplier, neighbor capacity)

use std::time::Duration;

/// OpenFlow port number as carried on the wire.
pub type PortId = u16;

// =======================================================================
// OpenFlow wire format (openflow rev 0x98)
// =======================================================================

/// Protocol version byte carried in every message header.
pub const OFP_VERSION: u8 = 0x98;

/// Fixed OpenFlow header: version u8, type u8, length u16, xid u32.
pub const OFP_HEADER_LEN: usize = 8;

/// `OFPT_FEATURES_REPLY` message type.
pub const OFPT_FEATURES_REPLY: u8 = 6;
/// `OFPT_PACKET_IN` message type.
pub const OFPT_PACKET_IN: u8 = 10;
/// `OFPT_PACKET_OUT` message type.
pub const OFPT_PACKET_OUT: u8 = 13;
/// Vendor-extension discovery notification, first value after the
/// standard message set (HELLO=0 .. BARRIER_REPLY=19).
pub const OFPT_NEIGHBOR_MSG: u8 = 20;

/// Largest physical port number; everything above is reserved.
pub const OFPP_MAX: PortId = 0xff00;
/// "No port" sentinel, also marks an empty neighbor slot.
pub const OFPP_NONE: PortId = 0xffff;

/// Fixed part of a features-reply (header + dpid + n_buffers + n_tables
/// + pad + capabilities + actions).
pub const FEATURES_REPLY_FIXED_LEN: usize = 32;
/// One physical port descriptor inside a features-reply.
pub const PHY_PORT_LEN: usize = 48;

/// Offset of the embedded frame inside a packet-in. The frame starts
/// halfway through a 32-bit word so the embedded IP header is aligned.
pub const PACKET_IN_DATA_OFFSET: usize = 18;

/// Fixed part of a packet-out (header + buffer_id + in_port + actions_len).
pub const PACKET_OUT_FIXED_LEN: usize = 16;
/// One `OFPAT_OUTPUT` action.
pub const ACTION_OUTPUT_LEN: usize = 8;

// =======================================================================
// Discovery probe frame
// =======================================================================

/// Ethernet header: dst 6, src 6, ethertype 2.
pub const ETH_HEADER_LEN: usize = 14;
/// Packed probe payload: outport u16, datapath_id u64, interval u16.
pub const PROBE_PAYLOAD_LEN: usize = 12;
/// Complete probe frame (Ethernet header + payload).
pub const PROBE_FRAME_LEN: usize = ETH_HEADER_LEN + PROBE_PAYLOAD_LEN;
/// Complete probe packet-out message.
pub const PROBE_MESSAGE_LEN: usize =
    PACKET_OUT_FIXED_LEN + ACTION_OUTPUT_LEN + PROBE_FRAME_LEN;

/// IEEE 802.1AB LLDP ethertype, reused for the discovery probe.
pub const DISCOVERY_ETHERTYPE: u16 = 0x88cc;

/// Probe source marker: Stanford OUI with zero thereafter. A frame whose
/// source does not match this address is not a probe.
pub const PROBE_SRC_ADDR: [u8; 6] = [0x08, 0x00, 0x56, 0x00, 0x00, 0x00];

/// IEEE 802.1AB LLDP multicast destination address.
pub const PROBE_DST_ADDR: [u8; 6] = [0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e];

/// Discovery notification message: header + activity u16 + local_port u16
/// + neighbor_dpid u64 + neighbor_port u16 + pad[2] (vendor-extension
/// structures are 32-bit aligned in size).
pub const NEIGHBOR_MSG_LEN: usize = 24;

// =======================================================================
// Discovery engine defaults
// =======================================================================

/// Maximum number of neighbors tracked per engine.
pub const NEIGHBOR_MAX: usize = 64;

/// Port probe table size (dense array indexed by raw port number).
pub const PORT_TABLE_SIZE: usize = 65536;

/// Default probe cadence for a port with no known neighbor.
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_secs(12);

/// Default probe cadence for a port with at least one known neighbor.
pub const DEFAULT_ACTIVE_INTERVAL: Duration = Duration::from_secs(2);

/// Default number of probes a neighbor may miss before declaring us gone.
/// Should be greater than 2.
pub const DEFAULT_MISS_MULTIPLIER: u16 = 5;

/// Target cadence of the periodic tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Per-engine discovery tunables, fixed at engine construction.
///
/// # Examples
///
/// ```
/// use ofchan::config::DiscoveryConfig;
/// use std::time::Duration;
///
/// let config = DiscoveryConfig {
///     active_interval: Duration::from_secs(1),
///     ..DiscoveryConfig::default()
/// };
/// assert_eq!(config.miss_multiplier, 5);
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Probe cadence for ports with zero neighbors.
    pub idle_interval: Duration,
    /// Probe cadence for ports with at least one neighbor.
    pub active_interval: Duration,
    /// Factor applied to the cadence to produce the staleness window
    /// advertised to the neighbor.
    pub miss_multiplier: u16,
    /// Neighbor table capacity.
    pub neighbor_capacity: usize,
    /// Ethertype of the probe frame.
    pub ethertype: u16,
    /// Source marker address of the probe frame.
    pub src_addr: [u8; 6],
    /// Multicast destination address of the probe frame.
    pub dst_addr: [u8; 6],
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            idle_interval: DEFAULT_IDLE_INTERVAL,
            active_interval: DEFAULT_ACTIVE_INTERVAL,
            miss_multiplier: DEFAULT_MISS_MULTIPLIER,
            neighbor_capacity: NEIGHBOR_MAX,
            ethertype: DISCOVERY_ETHERTYPE,
            src_addr: PROBE_SRC_ADDR,
            dst_addr: PROBE_DST_ADDR,
        }
    }
}

impl DiscoveryConfig {
    /// Probe cadence for a port, chosen by its current neighbor count.
    pub fn cadence(&self, neighbor_count: u32) -> Duration {
        if neighbor_count == 0 {
            self.idle_interval
        } else {
            self.active_interval
        }
    }

    /// Staleness window advertised to the neighbor, in whole seconds.
    ///
    /// The neighbor waits this long after the last probe before timing us
    /// out, i.e. it tolerates `miss_multiplier - 1` lost probes.
    pub fn staleness_secs(&self, neighbor_count: u32) -> u16 {
        let cadence = self.cadence(neighbor_count).as_secs();
        self.miss_multiplier.saturating_mul(cadence.min(u64::from(u16::MAX)) as u16)
    }
}
