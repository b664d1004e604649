// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Probe frame codec and the pre-built probe packet-out template.
//!
//! The probe is an Ethernet frame with a custom 12-byte payload, carried
//! to the switch inside an OpenFlow packet-out with a single output
//! action. The full message is prepacked once per engine; each send only
//! rewrites the output port and the advertised staleness interval.
//!
//! ```text
//! 0        8        16       24       38            50
//! +--------+--------+--------+--------------+
//! | pktout | pktout | output | ethernet     | payload:
//! | header | body   | action | header       |   outport    u16
//! +--------+--------+--------+--------------+   datapath   u64
//!                                               interval   u16
//! ```

use crate::config::{
    DiscoveryConfig, PortId, ETH_HEADER_LEN, OFPP_NONE, OFPT_PACKET_OUT, OFP_VERSION,
    PACKET_OUT_FIXED_LEN, PROBE_FRAME_LEN, PROBE_MESSAGE_LEN,
};
use crate::protocol::openflow::put_header;

// Offsets of the variable fields inside the prepacked message.
const ACTION_PORT_OFFSET: usize = 20;
const FRAME_OFFSET: usize = PACKET_OUT_FIXED_LEN + 8;
const PAYLOAD_OUTPORT_OFFSET: usize = FRAME_OFFSET + ETH_HEADER_LEN;
const PAYLOAD_DPID_OFFSET: usize = PAYLOAD_OUTPORT_OFFSET + 2;
const PAYLOAD_INTERVAL_OFFSET: usize = PAYLOAD_DPID_OFFSET + 8;

/// A probe heard from a neighbor, as extracted from a packet-in frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    /// The neighbor's datapath id.
    pub datapath_id: u64,
    /// The port the neighbor sent the probe out of.
    pub out_port: PortId,
    /// Seconds of silence after which the neighbor should be considered
    /// gone.
    pub interval_secs: u16,
}

/// Try to interpret `frame` as a discovery probe.
///
/// Returns `None` unless the ethertype and the source marker address both
/// match and the frame carries a complete payload. A frame that fails any
/// of these checks is simply not ours, never an error; trailing bytes
/// beyond the payload (Ethernet minimum-size padding) are tolerated.
pub fn try_decode_probe(frame: &[u8], config: &DiscoveryConfig) -> Option<ProbeReport> {
    if frame.len() < PROBE_FRAME_LEN {
        return None;
    }
    let ethertype = u16::from_be_bytes([frame[12], frame[13]]);
    if ethertype != config.ethertype || frame[6..12] != config.src_addr {
        return None;
    }

    Some(ProbeReport {
        out_port: u16::from_be_bytes([frame[14], frame[15]]),
        datapath_id: u64::from_be_bytes([
            frame[16], frame[17], frame[18], frame[19], frame[20], frame[21], frame[22], frame[23],
        ]),
        interval_secs: u16::from_be_bytes([frame[24], frame[25]]),
    })
}

/// Prepacked probe packet-out.
///
/// The fixed fields (headers, action shape, Ethernet addresses, local
/// dpid) are written once; [`ProbeTemplate::message`] rewrites only the
/// per-send fields and hands out a fresh copy for the connection queue.
pub struct ProbeTemplate {
    buf: [u8; PROBE_MESSAGE_LEN],
}

impl ProbeTemplate {
    /// Prepack everything that does not vary per send.
    pub fn new(config: &DiscoveryConfig) -> Self {
        let mut buf = [0u8; PROBE_MESSAGE_LEN];

        put_header(
            &mut buf,
            OFP_VERSION,
            OFPT_PACKET_OUT,
            PROBE_MESSAGE_LEN as u16,
            0,
        );
        // buffer_id = -1: the frame travels in the message itself
        buf[8..12].copy_from_slice(&0xffff_ffffu32.to_be_bytes());
        buf[12..14].copy_from_slice(&OFPP_NONE.to_be_bytes());
        // actions_len counts bytes, one 8-byte output action
        buf[14..16].copy_from_slice(&8u16.to_be_bytes());

        // OFPAT_OUTPUT action; port is rewritten per send, max_len unused
        buf[16..18].copy_from_slice(&0u16.to_be_bytes());
        buf[18..20].copy_from_slice(&8u16.to_be_bytes());

        buf[FRAME_OFFSET..FRAME_OFFSET + 6].copy_from_slice(&config.dst_addr);
        buf[FRAME_OFFSET + 6..FRAME_OFFSET + 12].copy_from_slice(&config.src_addr);
        buf[FRAME_OFFSET + 12..FRAME_OFFSET + 14].copy_from_slice(&config.ethertype.to_be_bytes());

        Self { buf }
    }

    /// Record the local datapath id, known once a features-reply arrives.
    pub fn set_datapath_id(&mut self, dpid: u64) {
        self.buf[PAYLOAD_DPID_OFFSET..PAYLOAD_DPID_OFFSET + 8]
            .copy_from_slice(&dpid.to_be_bytes());
    }

    /// Produce the message for one probe transmission: rewrite the output
    /// port (action and payload) and the advertised interval, then copy.
    pub fn message(&mut self, out_port: PortId, interval_secs: u16) -> Vec<u8> {
        self.buf[ACTION_PORT_OFFSET..ACTION_PORT_OFFSET + 2]
            .copy_from_slice(&out_port.to_be_bytes());
        self.buf[PAYLOAD_OUTPORT_OFFSET..PAYLOAD_OUTPORT_OFFSET + 2]
            .copy_from_slice(&out_port.to_be_bytes());
        self.buf[PAYLOAD_INTERVAL_OFFSET..PAYLOAD_INTERVAL_OFFSET + 2]
            .copy_from_slice(&interval_secs.to_be_bytes());
        self.buf.to_vec()
    }

    /// Current template bytes (test support).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
