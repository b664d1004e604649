// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The neighbor discovery state machine.
//!
//! Timer-driven: every port the switch advertises is probed with a custom
//! LLDP-style frame, neighbors that answer are tracked with an expiry
//! deadline, and the controller is told when a neighbor appears or goes
//! silent. Two states only: not ready until the first features-reply,
//! ready after it; a later features-reply re-enters ready with fresh
//! tables.
//!
//! Ports with a known neighbor are probed on the active cadence, idle
//! ports on the slower idle cadence; the staleness window advertised in
//! each probe is the cadence times the miss multiplier, so a neighbor
//! tolerates a few lost probes before timing us out.
//!
//! Nothing here blocks and nothing is fatal: a full neighbor table drops
//! the report, a count underflow clamps, a malformed message is discarded
//! with its state untouched.

use crate::config::{DiscoveryConfig, PortId, OFPP_MAX, OFPT_FEATURES_REPLY, OFPT_PACKET_IN, TICK_INTERVAL};
use crate::discovery::neighbor_table::{NeighborKey, NeighborTable, SlotOutcome};
use crate::discovery::port_table::PortProbeTable;
use crate::protocol::{
    decode_features_reply, decode_header, decode_packet_in, encode_notification, try_decode_probe,
    Activity, FeaturesReply, Notification, ProbeReport, ProbeTemplate,
};
use crate::relay::{Connection, Hook};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Discovery engine for one switch/controller connection pair.
///
/// Owns all discovery state exclusively; the relay drives it through the
/// [`Hook`] entry points, strictly sequentially.
pub struct NeighborDiscovery {
    switch: Arc<dyn Connection>,
    controller: Arc<dyn Connection>,
    config: DiscoveryConfig,

    local_dpid: u64,
    ready: bool,
    max_port_no: PortId,
    last_tick: Option<Instant>,

    ports: PortProbeTable,
    neighbors: NeighborTable,
    probe: ProbeTemplate,
}

impl NeighborDiscovery {
    /// Create an engine in the not-ready state with cleared tables and the
    /// probe template prepacked.
    pub fn new(
        switch: Arc<dyn Connection>,
        controller: Arc<dyn Connection>,
        config: DiscoveryConfig,
    ) -> Self {
        let probe = ProbeTemplate::new(&config);
        let neighbors = NeighborTable::with_capacity(config.neighbor_capacity);
        Self {
            switch,
            controller,
            config,
            local_dpid: 0,
            ready: false,
            max_port_no: 0,
            last_tick: None,
            ports: PortProbeTable::new(),
            neighbors,
            probe,
        }
    }

    /// Whether a features-reply has been processed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Datapath id of the proxied switch, zero until ready.
    pub fn local_dpid(&self) -> u64 {
        self.local_dpid
    }

    /// Largest advertised physical port number, zero until ready.
    pub fn max_port_no(&self) -> PortId {
        self.max_port_no
    }

    /// Neighbors currently recorded on `port`.
    pub fn neighbor_count(&self, port: PortId) -> u32 {
        self.ports.neighbor_count(port)
    }

    /// Total neighbors currently known.
    pub fn known_neighbors(&self) -> usize {
        self.neighbors.len()
    }

    /// Next probe deadline of `port`, if the port is scheduled.
    pub fn next_probe(&self, port: PortId) -> Option<Instant> {
        self.ports.next_probe(port)
    }

    fn notify(&self, activity: Activity, key: NeighborKey) {
        self.controller.send(encode_notification(&Notification {
            activity,
            local_port: key.in_port,
            neighbor_dpid: key.dpid,
            neighbor_port: key.port,
        }));
    }

    /// Register the switch's port configuration; enters (or re-enters)
    /// the ready state.
    ///
    /// Neighbors are also dropped here: a reconfiguration may renumber
    /// ports, and a stale entry would tie a neighbor to a port identity
    /// that no longer exists. The controller gets an EXPIRED notification
    /// for each dropped entry so its topology view stays consistent.
    fn handle_features_reply(&mut self, reply: &FeaturesReply, now: Instant) {
        self.local_dpid = reply.datapath_id;
        self.probe.set_datapath_id(reply.datapath_id);

        let dropped = self.neighbors.drain_all();
        if !dropped.is_empty() {
            log::debug!(
                "[discovery] port reconfiguration drops {} neighbor(s)",
                dropped.len()
            );
            if self.controller.is_connected() {
                for key in dropped {
                    self.notify(Activity::Expired, key);
                }
            }
        }

        self.ports.clear_all();
        self.max_port_no = 0;
        let first_probe = now + self.config.idle_interval;
        for &port in &reply.ports {
            if port > OFPP_MAX {
                continue; // reserved port, never probed
            }
            self.ports.schedule(port, first_probe);
            if port > self.max_port_no {
                self.max_port_no = port;
            }
        }

        self.ready = true;
        self.last_tick = Some(now);
        log::debug!(
            "[discovery] switch {:016x} advertises {} port(s), max {}",
            self.local_dpid,
            reply.ports.len(),
            self.max_port_no
        );
    }

    /// Record a probe heard from a neighbor on `in_port`.
    fn handle_probe_report(&mut self, in_port: PortId, report: ProbeReport, now: Instant) {
        let key = NeighborKey {
            in_port,
            dpid: report.datapath_id,
            port: report.out_port,
        };
        let expiry = now + Duration::from_secs(u64::from(report.interval_secs));

        match self.neighbors.refresh_or_insert(key, expiry) {
            SlotOutcome::Refreshed => {
                log::debug!(
                    "[discovery] refreshed neighbor {:016x}:{} on port {}",
                    key.dpid,
                    key.port,
                    key.in_port
                );
            }
            SlotOutcome::Inserted => {
                self.ports.increment(in_port);
                log::debug!(
                    "[discovery] discovered neighbor {:016x}:{} on port {}",
                    key.dpid,
                    key.port,
                    key.in_port
                );
                if self.controller.is_connected() {
                    self.notify(Activity::Discovered, key);
                }
            }
            SlotOutcome::Full => {
                log::warn!(
                    "[discovery] neighbor table full, dropping report from {:016x}:{} on port {}",
                    key.dpid,
                    key.port,
                    key.in_port
                );
            }
        }
    }

    fn expire_neighbors(&mut self, now: Instant) {
        for key in self.neighbors.expire(now) {
            log::debug!(
                "[discovery] neighbor {:016x}:{} on port {} expired",
                key.dpid,
                key.port,
                key.in_port
            );
            self.notify(Activity::Expired, key);
            self.ports.decrement(key.in_port);
        }
    }

    fn send_due_probes(&mut self, now: Instant) {
        for port in 1..=self.max_port_no {
            let due = match self.ports.next_probe(port) {
                Some(deadline) => deadline <= now,
                None => false,
            };
            if !due {
                continue;
            }

            let count = self.ports.neighbor_count(port);
            let staleness = self.config.staleness_secs(count);
            self.switch.send(self.probe.message(port, staleness));
            self.ports.schedule(port, now + self.config.cadence(count));
            log::debug!("[discovery] probe out port {port}, staleness {staleness}s");
        }
    }
}

impl Hook for NeighborDiscovery {
    /// Consumes probe packet-ins; observes features-replies without
    /// consuming them, so they still reach the controller.
    fn on_switch_packet(&mut self, msg: &[u8], now: Instant) -> bool {
        let header = match decode_header(msg) {
            Ok(header) => header,
            Err(err) => {
                log::warn!("[discovery] discarding switch message: {err}");
                return false;
            }
        };

        match header.msg_type {
            OFPT_FEATURES_REPLY => {
                match decode_features_reply(msg) {
                    Ok(reply) => self.handle_features_reply(&reply, now),
                    Err(err) => {
                        log::warn!("[discovery] malformed features-reply: {err}");
                    }
                }
                false
            }
            OFPT_PACKET_IN => {
                let pkt = match decode_packet_in(msg) {
                    Ok(pkt) => pkt,
                    Err(err) => {
                        log::warn!("[discovery] malformed packet-in: {err}");
                        return false;
                    }
                };
                match try_decode_probe(pkt.frame, &self.config) {
                    Some(report) => {
                        self.handle_probe_report(pkt.in_port, report, now);
                        true
                    }
                    None => false, // not a probe, let the relay have it
                }
            }
            _ => false,
        }
    }

    fn on_tick(&mut self, now: Instant) {
        if !self.controller.is_connected() {
            // Keep the clock moving so the overrun check does not fire
            // spuriously right after a reconnect.
            self.last_tick = Some(now);
            return;
        }

        if let Some(prev) = self.last_tick {
            let gap = now.saturating_duration_since(prev);
            let budget = self.config.idle_interval.max(self.config.active_interval);
            if gap > budget {
                log::warn!("[discovery] tick overrun: {gap:?} since previous tick");
            }
        }

        self.expire_neighbors(now);

        if self.ready && self.switch.is_connected() {
            self.send_due_probes(now);
        }

        self.last_tick = Some(now);
    }

    /// Sleep hint for the relay loop: the remainder of the 1 s cadence,
    /// or an immediate wake when the cadence already elapsed. Advisory
    /// only; ticks stay correct at any actual cadence.
    fn on_wait_hint(&self, now: Instant) -> Option<Duration> {
        if !self.ready || !self.switch.is_connected() || !self.controller.is_connected() {
            return Some(TICK_INTERVAL);
        }
        let last = match self.last_tick {
            Some(last) => last,
            None => return Some(TICK_INTERVAL),
        };
        Some(TICK_INTERVAL.saturating_sub(now.saturating_duration_since(last)))
    }

    fn on_teardown(&mut self) {
        self.neighbors.drain_all();
        self.ports.clear_all();
        self.ready = false;
        log::debug!("[discovery] teardown, state released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NEIGHBOR_MAX, OFPT_NEIGHBOR_MSG, PROBE_MESSAGE_LEN};
    use crate::protocol::decode_notification;
    use crate::protocol::testutil::{build_features_reply, build_packet_in, build_probe_frame};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    struct MockConn {
        connected: AtomicBool,
        sent: Mutex<Vec<Vec<u8>>>,
    }

    impl MockConn {
        fn new(connected: bool) -> Arc<Self> {
            Arc::new(Self {
                connected: AtomicBool::new(connected),
                sent: Mutex::new(Vec::new()),
            })
        }

        fn set_connected(&self, connected: bool) {
            self.connected.store(connected, Ordering::Relaxed);
        }

        fn take_sent(&self) -> Vec<Vec<u8>> {
            std::mem::take(&mut self.sent.lock().expect("mock lock"))
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().expect("mock lock").len()
        }
    }

    impl Connection for MockConn {
        fn is_connected(&self) -> bool {
            self.connected.load(Ordering::Relaxed)
        }

        fn send(&self, msg: Vec<u8>) {
            self.sent.lock().expect("mock lock").push(msg);
        }
    }

    struct Fixture {
        switch: Arc<MockConn>,
        controller: Arc<MockConn>,
        engine: NeighborDiscovery,
        base: Instant,
    }

    fn fixture() -> Fixture {
        let switch = MockConn::new(true);
        let controller = MockConn::new(true);
        let engine = NeighborDiscovery::new(
            switch.clone(),
            controller.clone(),
            DiscoveryConfig::default(),
        );
        Fixture {
            switch,
            controller,
            engine,
            base: Instant::now(),
        }
    }

    fn probe_packet_in(in_port: PortId, dpid: u64, out_port: PortId, interval: u16) -> Vec<u8> {
        build_packet_in(in_port, &build_probe_frame(None, out_port, dpid, interval))
    }

    #[test]
    fn test_not_ready_tick_is_harmless() {
        let mut f = fixture();
        f.engine.on_tick(f.base);
        assert!(!f.engine.is_ready());
        assert_eq!(f.switch.sent_count(), 0);
        assert_eq!(f.controller.sent_count(), 0);
    }

    #[test]
    fn test_features_reply_schedules_all_ports() {
        let mut f = fixture();
        let msg = build_features_reply(0x0102_0304_0506_0708, &[1, 2, 3]);

        // Observed, not consumed: the reply still goes to the controller.
        assert!(!f.engine.on_switch_packet(&msg, f.base));

        assert!(f.engine.is_ready());
        assert_eq!(f.engine.local_dpid(), 0x0102_0304_0506_0708);
        assert_eq!(f.engine.max_port_no(), 3);
        let bound = f.base + DiscoveryConfig::default().idle_interval;
        for port in 1..=3 {
            let deadline = f.engine.next_probe(port).expect("scheduled");
            assert!(deadline <= bound);
        }
        assert_eq!(f.engine.next_probe(4), None);
    }

    #[test]
    fn test_features_reply_skips_reserved_ports() {
        let mut f = fixture();
        let msg = build_features_reply(1, &[2, OFPP_MAX + 1, 0xfffe]);
        f.engine.on_switch_packet(&msg, f.base);

        assert_eq!(f.engine.max_port_no(), 2);
        assert_eq!(f.engine.next_probe(0xfffe), None);
    }

    #[test]
    fn test_malformed_features_reply_leaves_state_unchanged() {
        let mut f = fixture();
        let mut msg = build_features_reply(1, &[1]);
        msg.pop();
        let len = msg.len() as u16;
        msg[2..4].copy_from_slice(&len.to_be_bytes());

        assert!(!f.engine.on_switch_packet(&msg, f.base));
        assert!(!f.engine.is_ready());
        assert_eq!(f.engine.local_dpid(), 0);
    }

    #[test]
    fn test_probe_discovery_notifies_controller() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2, 3]), f.base);
        f.controller.take_sent();

        let consumed = f
            .engine
            .on_switch_packet(&probe_packet_in(2, 0xaa, 5, 9), f.base);
        assert!(consumed);

        assert_eq!(f.engine.known_neighbors(), 1);
        assert_eq!(f.engine.neighbor_count(2), 1);

        let sent = f.controller.take_sent();
        assert_eq!(sent.len(), 1);
        let n = decode_notification(&sent[0]).expect("notification");
        assert_eq!(n.activity, Activity::Discovered);
        assert_eq!(n.local_port, 2);
        assert_eq!(n.neighbor_dpid, 0xaa);
        assert_eq!(n.neighbor_port, 5);
    }

    #[test]
    fn test_duplicate_probe_only_refreshes() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(2, 0xaa, 5, 9), f.base);
        f.controller.take_sent();

        let later = f.base + Duration::from_secs(2);
        f.engine
            .on_switch_packet(&probe_packet_in(2, 0xaa, 5, 9), later);

        assert_eq!(f.engine.known_neighbors(), 1);
        assert_eq!(f.engine.neighbor_count(2), 1);
        assert_eq!(f.controller.sent_count(), 0); // refresh is silent

        // The refreshed deadline holds past the original expiry...
        f.engine.on_tick(f.base + Duration::from_secs(10));
        assert_eq!(f.engine.known_neighbors(), 1);
        // ...and lapses once the refreshed window passes.
        f.engine.on_tick(later + Duration::from_secs(9));
        assert_eq!(f.engine.known_neighbors(), 0);
    }

    #[test]
    fn test_expiry_notifies_and_decrements() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(2, 0xaa, 5, 9), f.base);
        f.controller.take_sent();

        f.engine.on_tick(f.base + Duration::from_secs(9));

        assert_eq!(f.engine.known_neighbors(), 0);
        assert_eq!(f.engine.neighbor_count(2), 0);
        let sent = f.controller.take_sent();
        assert_eq!(sent.len(), 1);
        let n = decode_notification(&sent[0]).expect("notification");
        assert_eq!(n.activity, Activity::Expired);
        assert_eq!(n.local_port, 2);
    }

    #[test]
    fn test_non_probe_packet_in_is_declined() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2]), f.base);

        let frame = build_probe_frame(Some([0x08, 0x00, 0x56, 0x00, 0x00, 0x01]), 5, 0xaa, 9);
        let consumed = f
            .engine
            .on_switch_packet(&build_packet_in(2, &frame), f.base);

        assert!(!consumed);
        assert_eq!(f.engine.known_neighbors(), 0);
        assert_eq!(f.engine.neighbor_count(2), 0);
    }

    #[test]
    fn test_probes_sent_when_due() {
        let mut f = fixture();
        let config = DiscoveryConfig::default();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2, 3]), f.base);

        // Before the idle interval nothing is due.
        f.engine.on_tick(f.base + Duration::from_secs(1));
        assert_eq!(f.switch.sent_count(), 0);

        let due = f.base + config.idle_interval;
        f.engine.on_tick(due);
        let sent = f.switch.take_sent();
        assert_eq!(sent.len(), 3);
        for (i, msg) in sent.iter().enumerate() {
            assert_eq!(msg.len(), PROBE_MESSAGE_LEN);
            let port = u16::from_be_bytes([msg[20], msg[21]]);
            assert_eq!(port, (i + 1) as u16);
            // Idle port: staleness = miss x idle cadence
            assert_eq!(u16::from_be_bytes([msg[48], msg[49]]), 60);
        }

        // Rescheduled on the idle cadence, not due again immediately.
        f.engine.on_tick(due + Duration::from_secs(1));
        assert_eq!(f.switch.sent_count(), 0);
    }

    #[test]
    fn test_active_port_uses_active_cadence() {
        let mut f = fixture();
        let config = DiscoveryConfig::default();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(1, 0xaa, 5, 60), f.base);

        let due = f.base + config.idle_interval;
        f.engine.on_tick(due);
        let sent = f.switch.take_sent();
        assert_eq!(sent.len(), 1);
        // Active port: staleness = miss x active cadence
        assert_eq!(u16::from_be_bytes([sent[0][48], sent[0][49]]), 10);

        // Next probe follows the active cadence.
        f.engine.on_tick(due + config.active_interval);
        assert_eq!(f.switch.sent_count(), 1);
    }

    #[test]
    fn test_tick_without_controller_only_records_time() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(1, 0xaa, 5, 9), f.base);
        f.controller.take_sent();

        f.controller.set_connected(false);
        f.engine.on_tick(f.base + Duration::from_secs(30));

        // No expiry ran, no probe left, but the clock moved.
        assert_eq!(f.engine.known_neighbors(), 1);
        assert_eq!(f.switch.sent_count(), 0);
        assert_eq!(f.controller.sent_count(), 0);

        // Reconnect: expiry catches up on the next tick.
        f.controller.set_connected(true);
        f.engine.on_tick(f.base + Duration::from_secs(31));
        assert_eq!(f.engine.known_neighbors(), 0);
        assert_eq!(f.controller.sent_count(), 1);
    }

    #[test]
    fn test_no_probes_while_switch_disconnected() {
        let mut f = fixture();
        let config = DiscoveryConfig::default();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2]), f.base);

        f.switch.set_connected(false);
        f.engine.on_tick(f.base + config.idle_interval);
        assert_eq!(f.switch.sent_count(), 0);

        // Deadlines stay due; probes flow as soon as the switch is back.
        f.switch.set_connected(true);
        f.engine.on_tick(f.base + config.idle_interval + Duration::from_secs(1));
        assert_eq!(f.switch.sent_count(), 2);
    }

    #[test]
    fn test_capacity_bound_drops_excess_reports() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.controller.take_sent();

        for i in 0..NEIGHBOR_MAX as u64 {
            f.engine
                .on_switch_packet(&probe_packet_in(1, 100 + i, 1, 60), f.base);
        }
        assert_eq!(f.engine.known_neighbors(), NEIGHBOR_MAX);
        assert_eq!(f.controller.sent_count(), NEIGHBOR_MAX);

        // One past capacity: dropped, no notification, counts untouched.
        f.engine
            .on_switch_packet(&probe_packet_in(1, 9999, 1, 60), f.base);
        assert_eq!(f.engine.known_neighbors(), NEIGHBOR_MAX);
        assert_eq!(f.engine.neighbor_count(1), NEIGHBOR_MAX as u32);
        assert_eq!(f.controller.sent_count(), NEIGHBOR_MAX);

        // Existing entries still refresh.
        f.engine
            .on_switch_packet(&probe_packet_in(1, 100, 1, 60), f.base);
        assert_eq!(f.engine.known_neighbors(), NEIGHBOR_MAX);
    }

    #[test]
    fn test_refeatures_clears_neighbors_with_notifications() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2, 3]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(2, 0xaa, 5, 60), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(3, 0xbb, 7, 60), f.base);
        f.controller.take_sent();

        // Switch reconfigures down to a single port.
        let later = f.base + Duration::from_secs(5);
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), later);

        assert!(f.engine.is_ready());
        assert_eq!(f.engine.max_port_no(), 1);
        assert_eq!(f.engine.known_neighbors(), 0);
        assert_eq!(f.engine.neighbor_count(2), 0);
        assert_eq!(f.engine.neighbor_count(3), 0);

        let sent = f.controller.take_sent();
        assert_eq!(sent.len(), 2);
        for msg in &sent {
            let n = decode_notification(msg).expect("notification");
            assert_eq!(n.activity, Activity::Expired);
        }
    }

    #[test]
    fn test_wait_hint_tracks_cadence() {
        let mut f = fixture();

        // Not ready yet: full cadence.
        assert_eq!(f.engine.on_wait_hint(f.base), Some(TICK_INTERVAL));

        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.engine.on_tick(f.base);

        assert_eq!(
            f.engine.on_wait_hint(f.base + Duration::from_millis(300)),
            Some(Duration::from_millis(700))
        );
        // Cadence already elapsed: immediate wake.
        assert_eq!(
            f.engine.on_wait_hint(f.base + Duration::from_millis(1500)),
            Some(Duration::ZERO)
        );

        // A dropped connection falls back to the full cadence.
        f.switch.set_connected(false);
        assert_eq!(f.engine.on_wait_hint(f.base), Some(TICK_INTERVAL));
    }

    #[test]
    fn test_count_invariant_under_churn() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1, 2, 3, 4]), f.base);
        let mut rng = fastrand::Rng::with_seed(0xd15c);

        for step in 0..300u64 {
            let now = f.base + Duration::from_secs(step);
            let in_port = rng.u16(1..5);
            let dpid = rng.u64(1..30);
            f.engine
                .on_switch_packet(&probe_packet_in(in_port, dpid, 1, rng.u16(1..15)), now);
            if step % 3 == 0 {
                f.engine.on_tick(now);
            }

            for port in 1..5 {
                assert_eq!(
                    f.engine.neighbor_count(port),
                    f.engine.neighbors.occupied_on(port),
                    "count diverged on port {port} at step {step}"
                );
            }
        }
    }

    #[test]
    fn test_notifications_are_well_formed() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(1, 0xaa, 5, 1), f.base);
        f.engine.on_tick(f.base + Duration::from_secs(2));

        for msg in f.controller.take_sent() {
            assert_eq!(msg[1], OFPT_NEIGHBOR_MSG);
            decode_notification(&msg).expect("well-formed notification");
        }
    }

    #[test]
    fn test_teardown_releases_state() {
        let mut f = fixture();
        f.engine
            .on_switch_packet(&build_features_reply(1, &[1]), f.base);
        f.engine
            .on_switch_packet(&probe_packet_in(1, 0xaa, 5, 60), f.base);

        f.engine.on_teardown();
        assert!(!f.engine.is_ready());
        assert_eq!(f.engine.known_neighbors(), 0);
        assert_eq!(f.engine.next_probe(1), None);
    }

    #[test]
    fn test_truncated_message_is_declined() {
        let mut f = fixture();
        assert!(!f.engine.on_switch_packet(&[0x98, 10, 0], f.base));
        assert!(!f.engine.is_ready());
    }
}
