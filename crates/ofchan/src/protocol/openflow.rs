// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decoders for the OpenFlow control messages the engine consumes.

use crate::config::{
    PortId, FEATURES_REPLY_FIXED_LEN, OFP_HEADER_LEN, PACKET_IN_DATA_OFFSET, PHY_PORT_LEN,
};
use crate::error::{Error, Result};

/// Fixed OpenFlow message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub msg_type: u8,
    pub length: u16,
    pub xid: u32,
}

/// Decode the fixed header of a message.
///
/// # Errors
///
/// - [`Error::Truncated`] if the buffer is shorter than the header.
/// - [`Error::Malformed`] if the declared length exceeds the buffer or is
///   shorter than the header itself.
pub fn decode_header(msg: &[u8]) -> Result<Header> {
    if msg.len() < OFP_HEADER_LEN {
        return Err(Error::Truncated {
            need: OFP_HEADER_LEN,
            got: msg.len(),
        });
    }
    let length = u16::from_be_bytes([msg[2], msg[3]]);
    if usize::from(length) < OFP_HEADER_LEN || usize::from(length) > msg.len() {
        return Err(Error::Malformed("header length field"));
    }
    Ok(Header {
        version: msg[0],
        msg_type: msg[1],
        length,
        xid: u32::from_be_bytes([msg[4], msg[5], msg[6], msg[7]]),
    })
}

/// Write the fixed header into the first 8 bytes of `buf`.
pub(crate) fn put_header(buf: &mut [u8], version: u8, msg_type: u8, length: u16, xid: u32) {
    buf[0] = version;
    buf[1] = msg_type;
    buf[2..4].copy_from_slice(&length.to_be_bytes());
    buf[4..8].copy_from_slice(&xid.to_be_bytes());
}

/// Features-reply: the switch's datapath id and advertised port numbers.
///
/// Every advertised port is reported, including reserved ones above
/// `OFPP_MAX`; filtering is the engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesReply {
    pub datapath_id: u64,
    pub ports: Vec<PortId>,
}

/// Decode a features-reply.
///
/// The port descriptor count is inferred from the header length:
/// `(length - 32) / 48`.
///
/// # Errors
///
/// [`Error::Malformed`] if the length field disagrees with the buffer or
/// the port array is not a whole number of 48-byte descriptors.
pub fn decode_features_reply(msg: &[u8]) -> Result<FeaturesReply> {
    let header = decode_header(msg)?;
    if msg.len() < FEATURES_REPLY_FIXED_LEN {
        return Err(Error::Truncated {
            need: FEATURES_REPLY_FIXED_LEN,
            got: msg.len(),
        });
    }
    if usize::from(header.length) != msg.len() {
        return Err(Error::Malformed("features-reply length field"));
    }

    let ports_len = msg.len() - FEATURES_REPLY_FIXED_LEN;
    if ports_len % PHY_PORT_LEN != 0 {
        return Err(Error::Malformed("features-reply port array remainder"));
    }

    let datapath_id = u64::from_be_bytes([
        msg[8], msg[9], msg[10], msg[11], msg[12], msg[13], msg[14], msg[15],
    ]);

    let mut ports = Vec::with_capacity(ports_len / PHY_PORT_LEN);
    let mut offset = FEATURES_REPLY_FIXED_LEN;
    while offset < msg.len() {
        // port_no is the first field of each descriptor
        ports.push(u16::from_be_bytes([msg[offset], msg[offset + 1]]));
        offset += PHY_PORT_LEN;
    }

    Ok(FeaturesReply { datapath_id, ports })
}

/// Packet-in: ingress port plus the raw embedded frame, borrowed from the
/// message buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketIn<'a> {
    pub buffer_id: u32,
    pub total_len: u16,
    pub in_port: PortId,
    pub frame: &'a [u8],
}

/// Decode a packet-in.
///
/// The embedded frame starts at offset 18, halfway through a 32-bit word,
/// so the frame's IP header lands 32-bit aligned.
///
/// # Errors
///
/// [`Error::Truncated`] if the buffer ends before the frame starts,
/// [`Error::Malformed`] if the length field disagrees with the buffer.
pub fn decode_packet_in(msg: &[u8]) -> Result<PacketIn<'_>> {
    let header = decode_header(msg)?;
    if msg.len() < PACKET_IN_DATA_OFFSET {
        return Err(Error::Truncated {
            need: PACKET_IN_DATA_OFFSET,
            got: msg.len(),
        });
    }
    if usize::from(header.length) != msg.len() {
        return Err(Error::Malformed("packet-in length field"));
    }

    Ok(PacketIn {
        buffer_id: u32::from_be_bytes([msg[8], msg[9], msg[10], msg[11]]),
        total_len: u16::from_be_bytes([msg[12], msg[13]]),
        in_port: u16::from_be_bytes([msg[14], msg[15]]),
        frame: &msg[PACKET_IN_DATA_OFFSET..],
    })
}
