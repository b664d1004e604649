// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message builders shared by the unit tests. The decoders under test
//! never see their own encoder output, only bytes assembled here by hand.

use super::openflow::put_header;
use crate::config::{
    PortId, DISCOVERY_ETHERTYPE, FEATURES_REPLY_FIXED_LEN, OFPT_FEATURES_REPLY, OFPT_PACKET_IN,
    OFP_VERSION, PACKET_IN_DATA_OFFSET, PHY_PORT_LEN, PROBE_FRAME_LEN, PROBE_SRC_ADDR,
};

pub(crate) fn build_features_reply(dpid: u64, ports: &[PortId]) -> Vec<u8> {
    let len = FEATURES_REPLY_FIXED_LEN + ports.len() * PHY_PORT_LEN;
    let mut msg = vec![0u8; len];
    put_header(&mut msg, OFP_VERSION, OFPT_FEATURES_REPLY, len as u16, 0);
    msg[8..16].copy_from_slice(&dpid.to_be_bytes());
    for (i, port) in ports.iter().enumerate() {
        let off = FEATURES_REPLY_FIXED_LEN + i * PHY_PORT_LEN;
        msg[off..off + 2].copy_from_slice(&port.to_be_bytes());
    }
    msg
}

pub(crate) fn build_packet_in(in_port: PortId, frame: &[u8]) -> Vec<u8> {
    let len = PACKET_IN_DATA_OFFSET + frame.len();
    let mut msg = vec![0u8; len];
    put_header(&mut msg, OFP_VERSION, OFPT_PACKET_IN, len as u16, 0);
    msg[8..12].copy_from_slice(&0xffff_ffffu32.to_be_bytes());
    msg[12..14].copy_from_slice(&(frame.len() as u16).to_be_bytes());
    msg[14..16].copy_from_slice(&in_port.to_be_bytes());
    msg[PACKET_IN_DATA_OFFSET..].copy_from_slice(frame);
    msg
}

/// A probe frame as a neighbor would emit it. `src` defaults to the
/// vendor marker; pass something else to make the frame "not ours".
pub(crate) fn build_probe_frame(
    src: Option<[u8; 6]>,
    outport: PortId,
    dpid: u64,
    interval_secs: u16,
) -> Vec<u8> {
    let mut frame = vec![0u8; PROBE_FRAME_LEN];
    frame[0..6].copy_from_slice(&[0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e]);
    frame[6..12].copy_from_slice(&src.unwrap_or(PROBE_SRC_ADDR));
    frame[12..14].copy_from_slice(&DISCOVERY_ETHERTYPE.to_be_bytes());
    frame[14..16].copy_from_slice(&outport.to_be_bytes());
    frame[16..24].copy_from_slice(&dpid.to_be_bytes());
    frame[24..26].copy_from_slice(&interval_secs.to_be_bytes());
    frame
}
