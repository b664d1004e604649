// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Discovery notification sent to the controller when a neighbor appears
//! or expires.
//!
//! Vendor-extension message, 32-bit aligned in size:
//!
//! ```text
//! header(8) | activity u16 | local_port u16 | neighbor_dpid u64
//!           | neighbor_port u16 | pad[2]
//! ```

use crate::config::{PortId, NEIGHBOR_MSG_LEN, OFPT_NEIGHBOR_MSG, OFP_VERSION};
use crate::error::{Error, Result};
use crate::protocol::openflow::{decode_header, put_header};

/// What happened to the neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// A neighbor answered a probe for the first time.
    Discovered = 0,
    /// A known neighbor went silent past its staleness window.
    Expired = 1,
}

/// One discovery event as reported to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub activity: Activity,
    /// Local port the neighbor is (or was) reachable through.
    pub local_port: PortId,
    pub neighbor_dpid: u64,
    /// The neighbor's own port facing us.
    pub neighbor_port: PortId,
}

/// Encode a notification message.
pub fn encode_notification(n: &Notification) -> Vec<u8> {
    let mut msg = vec![0u8; NEIGHBOR_MSG_LEN];
    put_header(
        &mut msg,
        OFP_VERSION,
        OFPT_NEIGHBOR_MSG,
        NEIGHBOR_MSG_LEN as u16,
        0,
    );
    msg[8..10].copy_from_slice(&(n.activity as u16).to_be_bytes());
    msg[10..12].copy_from_slice(&n.local_port.to_be_bytes());
    msg[12..20].copy_from_slice(&n.neighbor_dpid.to_be_bytes());
    msg[20..22].copy_from_slice(&n.neighbor_port.to_be_bytes());
    msg
}

/// Decode a notification message (controller-side consumer and tests).
///
/// # Errors
///
/// [`Error::Malformed`] on a wrong type byte, length, or activity value.
pub fn decode_notification(msg: &[u8]) -> Result<Notification> {
    let header = decode_header(msg)?;
    if header.msg_type != OFPT_NEIGHBOR_MSG {
        return Err(Error::Malformed("notification type"));
    }
    if msg.len() != NEIGHBOR_MSG_LEN || usize::from(header.length) != NEIGHBOR_MSG_LEN {
        return Err(Error::Malformed("notification length"));
    }

    let activity = match u16::from_be_bytes([msg[8], msg[9]]) {
        0 => Activity::Discovered,
        1 => Activity::Expired,
        _ => return Err(Error::Malformed("notification activity")),
    };

    Ok(Notification {
        activity,
        local_port: u16::from_be_bytes([msg[10], msg[11]]),
        neighbor_dpid: u64::from_be_bytes([
            msg[12], msg[13], msg[14], msg[15], msg[16], msg[17], msg[18], msg[19],
        ]),
        neighbor_port: u16::from_be_bytes([msg[20], msg[21]]),
    })
}
