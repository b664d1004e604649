// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hook and connection interfaces of the secure-channel relay.
//!
//! The relay proper (socket handling, message framing, the poll loop)
//! lives in the host process. Extensions plug into it through two small
//! traits: [`Connection`] is the non-blocking send side of one managed
//! connection, and [`Hook`] is the set of callbacks an extension may
//! implement. [`HookChain`] is the dispatcher the relay drives; every
//! callback runs on the one relay thread, strictly sequentially, so hooks
//! need no locking of their own.

use std::time::{Duration, Instant};

/// Send side of a managed connection (switch or controller).
///
/// `send` is a fire-and-forget enqueue: the relay owns retransmission and
/// backpressure. Callers must check [`Connection::is_connected`] first if
/// they care whether the message can currently leave the box.
pub trait Connection {
    /// Whether the underlying connection is currently established.
    fn is_connected(&self) -> bool;

    /// Enqueue one complete OpenFlow message. Never blocks.
    fn send(&self, msg: Vec<u8>);
}

/// Callback set of one relay extension.
///
/// All four operations are optional; the defaults decline packets and do
/// nothing. The relay invokes them strictly sequentially and passes the
/// dispatch timestamp in, so hooks stay deterministic under test.
pub trait Hook {
    /// A message arrived from the switch side. Return `true` to consume
    /// it (it is not relayed further), `false` to decline.
    fn on_switch_packet(&mut self, _msg: &[u8], _now: Instant) -> bool {
        false
    }

    /// Periodic tick, called at roughly 1 Hz.
    fn on_tick(&mut self, _now: Instant) {}

    /// How long the relay may block before this hook must run again.
    /// `None` means "no preference".
    fn on_wait_hint(&self, _now: Instant) -> Option<Duration> {
        None
    }

    /// The owning connection pair is being torn down. Release everything
    /// synchronously; no callback runs after this one.
    fn on_teardown(&mut self) {}
}

/// Ordered hook registry driven by the relay loop.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a hook. Dispatch order is registration order.
    pub fn register(&mut self, hook: Box<dyn Hook>) {
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the chain has no hooks.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Offer a switch-side message to each hook in order. The first hook
    /// that consumes it ends the walk. Returns whether anyone consumed it;
    /// on `false` the relay forwards the message to the controller.
    pub fn dispatch_switch_packet(&mut self, msg: &[u8], now: Instant) -> bool {
        for hook in &mut self.hooks {
            if hook.on_switch_packet(msg, now) {
                return true;
            }
        }
        false
    }

    /// Run the periodic tick on every hook.
    pub fn tick(&mut self, now: Instant) {
        for hook in &mut self.hooks {
            hook.on_tick(now);
        }
    }

    /// Smallest wait hint across all hooks, `None` if no hook has one.
    pub fn wait_hint(&self, now: Instant) -> Option<Duration> {
        self.hooks
            .iter()
            .filter_map(|hook| hook.on_wait_hint(now))
            .min()
    }

    /// Tear down every hook and drop it. The chain is empty afterwards.
    pub fn teardown(&mut self) {
        for hook in &mut self.hooks {
            hook.on_teardown();
        }
        self.hooks.clear();
    }
}
