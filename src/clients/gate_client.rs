//! # Release Gate Client
//!
//! Reads the drop status from the gate's published snapshot and asks the gate to re-evaluate
//! on demand. The countdown is computed against the same clock the gate polls.

use crate::release_gate::{Clock, Countdown, GateCommand, GateError, GateState, GateStatus};
use async_trait::async_trait;
use std::sync::Arc;
use store_runtime::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the release gate store.
#[derive(Clone)]
pub struct ReleaseGateClient {
    inner: StoreClient<GateState>,
    clock: Arc<dyn Clock>,
}

impl ReleaseGateClient {
    pub fn new(inner: StoreClient<GateState>, clock: Arc<dyn Clock>) -> Self {
        Self { inner, clock }
    }
}

#[async_trait]
impl StoreHandle<GateState> for ReleaseGateClient {
    type Error = GateError;

    fn inner(&self) -> &StoreClient<GateState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GateError::StoreCommunicationError(e.to_string())
    }
}

impl ReleaseGateClient {
    /// Whether the drop is live, as of the gate's last evaluation.
    pub fn is_live(&self) -> bool {
        self.snapshot().live
    }

    pub fn status(&self) -> GateStatus {
        self.snapshot()
    }

    /// Time left on the banner, read from the gate's clock.
    pub fn countdown(&self) -> Countdown {
        Countdown::until(self.snapshot().launch, self.clock.now())
    }

    /// Evaluates the gate now rather than at the next poll.
    #[instrument(skip(self))]
    pub async fn check(&self) -> Result<bool, GateError> {
        debug!("Sending request");
        self.inner
            .dispatch(GateCommand::Check)
            .await
            .map_err(Self::map_error)
    }

    /// Resolves once the drop is live.
    #[instrument(skip(self))]
    pub async fn wait_until_live(&self) -> Result<(), GateError> {
        let mut changes = self.inner.changes();
        changes
            .wait_for(|status| status.live)
            .await
            .map(|_| ())
            .map_err(|_| {
                GateError::StoreCommunicationError("Gate store stopped before launch".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release_gate::FixedClock;
    use chrono::{TimeZone, Utc};
    use store_runtime::mock::{create_mock_client, expect_dispatch, MockClient};

    fn launch() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 25, 12, 0, 0).unwrap()
    }

    fn pending() -> GateStatus {
        GateStatus {
            live: false,
            launch: launch(),
        }
    }

    #[tokio::test]
    async fn test_countdown_uses_clock() {
        let mock = MockClient::<GateState>::new(pending());
        let clock = FixedClock::new(launch() - chrono::Duration::hours(26));
        let gate = ReleaseGateClient::new(mock.client(), Arc::new(clock));

        assert_eq!(gate.countdown().to_string(), "01d 02h 00m 00s");
        assert!(!gate.is_live());
    }

    #[tokio::test]
    async fn test_check_round_trip() {
        let (client, mut receiver) = create_mock_client::<GateState>(4, pending());
        let gate = ReleaseGateClient::new(client, Arc::new(FixedClock::new(launch())));

        let task = tokio::spawn(async move { gate.check().await });

        let (command, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert!(matches!(command, GateCommand::Check));
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_wait_until_live_wakes_on_published_status() {
        let mock = MockClient::<GateState>::new(pending());
        let gate = ReleaseGateClient::new(mock.client(), Arc::new(FixedClock::new(launch())));

        let waiter = tokio::spawn({
            let gate = gate.clone();
            async move { gate.wait_until_live().await }
        });
        tokio::task::yield_now().await;

        mock.publish_snapshot(GateStatus {
            live: true,
            launch: launch(),
        });

        waiter.await.unwrap().unwrap();
        assert!(gate.is_live());
    }
}
