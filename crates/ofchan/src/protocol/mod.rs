// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire codecs for the message families the discovery extension consumes
//! and produces.
//!
//! All multi-byte integers are big-endian on the wire; conversion to and
//! from host order happens inside this module and nowhere else. All
//! structures are packed, there is no implicit padding.
//!
//! # Messages
//!
//! - features-reply (switch -> engine): dpid + advertised port set
//! - packet-in (switch -> engine): ingress port + embedded frame
//! - probe packet-out (engine -> switch): [`ProbeTemplate`]
//! - neighbor notification (engine -> controller): [`Notification`]

mod notify;
mod openflow;
mod probe;

#[cfg(test)]
pub(crate) mod testutil;

pub use notify::{decode_notification, encode_notification, Activity, Notification};
pub use openflow::{decode_features_reply, decode_header, decode_packet_in, FeaturesReply, Header, PacketIn};
pub use probe::{try_decode_probe, ProbeReport, ProbeTemplate};
