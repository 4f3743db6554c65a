//! [`StoreState`] implementation for the release gate.

use crate::release_gate::{is_live, Clock, GateError, LaunchSchedule};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use store_runtime::{Events, StoreState};
use tokio::time::Instant;
use tracing::{debug, info};

/// Requests understood by the gate store.
#[derive(Debug, Clone)]
pub enum GateCommand {
    /// Re-reads the clock now instead of waiting for the next poll. Replies with liveness.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// Emitted once, on the evaluation that first observed the launch instant.
    WentLive { observed_at: DateTime<Utc> },
}

/// Published view of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub live: bool,
    pub launch: DateTime<Utc>,
}

/// Polls the clock until the launch instant, then latches open.
///
/// A gate that is already live when built never schedules a poll.
#[derive(Debug)]
pub struct GateState {
    schedule: LaunchSchedule,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    live: bool,
    next_poll: Option<Instant>,
}

impl GateState {
    pub fn new(schedule: LaunchSchedule, clock: Arc<dyn Clock>, poll_interval: Duration) -> Self {
        let live = is_live(schedule.launch, clock.now());
        let next_poll = (!live).then(|| Instant::now() + poll_interval);
        Self {
            schedule,
            clock,
            poll_interval,
            live,
            next_poll,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    fn evaluate(&mut self, events: &mut Events<GateEvent>) {
        if self.live {
            return;
        }

        let now = self.clock.now();
        if is_live(self.schedule.launch, now) {
            self.live = true;
            self.next_poll = None;
            info!(launch = %self.schedule.launch, "Drop is live");
            events.emit(GateEvent::WentLive { observed_at: now });
        } else {
            self.next_poll = Some(Instant::now() + self.poll_interval);
        }
    }
}

#[async_trait]
impl StoreState for GateState {
    type Command = GateCommand;
    type Reply = bool;
    type Event = GateEvent;
    type Snapshot = GateStatus;
    type Context = ();
    type Error = GateError;

    async fn handle(
        &mut self,
        command: GateCommand,
        _ctx: &(),
        events: &mut Events<GateEvent>,
    ) -> Result<bool, GateError> {
        match command {
            GateCommand::Check => {
                self.evaluate(events);
                Ok(self.live)
            }
        }
    }

    fn snapshot(&self) -> GateStatus {
        GateStatus {
            live: self.live,
            launch: self.schedule.launch,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.next_poll
    }

    async fn on_deadline(
        &mut self,
        _ctx: &(),
        events: &mut Events<GateEvent>,
    ) -> Result<(), GateError> {
        self.evaluate(events);
        Ok(())
    }

    async fn on_stop(&mut self, _ctx: &()) {
        if !self.live {
            debug!("Gate stopped before launch; poll cancelled");
        }
    }
}
