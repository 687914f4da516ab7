// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/settle.rs
//
// Visual settle spring with an explicit completion signal.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval, Instant};

use crate::constant::{SETTLE_FRAME, SETTLE_REST_EPSILON};

/// A purely visual spring toward an already-committed value.
///
/// The logical transform/crop values are committed before the spring
/// starts; this only interpolates their on-screen presentation from unit
/// displacement down to rest. Completion is reported through a watch
/// channel so a commit can wait without polling.
#[derive(Debug)]
pub struct SettleAnimation {
    done: watch::Receiver<bool>,
    displacement: watch::Receiver<f32>,
}

impl SettleAnimation {
    /// Start a settle spring on the current tokio runtime. Returns `None`
    /// outside a runtime; gesture handling stays usable without one, the
    /// commit then just observes already-settled values.
    pub fn spawn(duration: Duration) -> Option<Self> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let (done_tx, done_rx) = watch::channel(false);
        let (disp_tx, disp_rx) = watch::channel(1.0_f32);

        let secs = duration.as_secs_f32().max(0.001);
        // Critically damped: d(t) = (1 + wt) * e^(-wt), tuned so the
        // displacement is under the rest epsilon near `duration`.
        let omega = 10.0 / secs;

        handle.spawn(async move {
            let start = Instant::now();
            let mut frame = interval(SETTLE_FRAME);
            loop {
                frame.tick().await;
                let wt = omega * start.elapsed().as_secs_f32();
                let d = (1.0 + wt) * (-wt).exp();
                if disp_tx.send(d).is_err() {
                    return;
                }
                if d < SETTLE_REST_EPSILON {
                    break;
                }
            }
            let _ = disp_tx.send(0.0);
            let _ = done_tx.send(true);
        });

        Some(Self {
            done: done_rx,
            displacement: disp_rx,
        })
    }

    /// Current spring displacement in `[0, 1]` (1 = gesture-end pose,
    /// 0 = at rest). For rendering only.
    pub fn displacement(&self) -> f32 {
        *self.displacement.borrow()
    }

    pub fn is_done(&self) -> bool {
        *self.done.borrow()
    }

    /// Resolve once the spring reaches rest.
    pub async fn wait(&mut self) {
        while !*self.done.borrow_and_update() {
            if self.done.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Wait for an in-flight settle animation with a bounded timeout.
///
/// Returns `true` if the animation settled (or none was running). On
/// timeout the caller proceeds with the current values rather than
/// blocking indefinitely.
pub async fn wait_settled(animation: Option<&mut SettleAnimation>, timeout: Duration) -> bool {
    let Some(animation) = animation else {
        return true;
    };
    if tokio::time::timeout(timeout, animation.wait()).await.is_ok() {
        true
    } else {
        log::warn!(
            "settle animation still running after {:?}; committing current values",
            timeout
        );
        false
    }
}

#[cfg(test)]
#[path = "settle_test.rs"]
mod settle_test;
