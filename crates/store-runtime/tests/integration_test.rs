use async_trait::async_trait;
use std::time::Duration;
use store_runtime::{Events, FrameworkError, StoreActor, StoreState};
use tokio::time::Instant;

// --- Test State ---

const TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct Toast {
    message: Option<String>,
    expires_at: Option<Instant>,
    shown: u32,
}

#[derive(Debug)]
enum ToastCommand {
    Show(String),
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
enum ToastEvent {
    Shown(String),
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
struct ToastView {
    message: Option<String>,
    shown: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("rejected")]
struct ToastError;

#[async_trait]
impl StoreState for Toast {
    type Command = ToastCommand;
    type Reply = u32;
    type Event = ToastEvent;
    type Snapshot = ToastView;
    type Context = ();
    type Error = ToastError;

    async fn handle(
        &mut self,
        command: ToastCommand,
        _ctx: &(),
        events: &mut Events<ToastEvent>,
    ) -> Result<u32, ToastError> {
        match command {
            ToastCommand::Show(message) => {
                self.shown += 1;
                self.message = Some(message.clone());
                self.expires_at = Some(Instant::now() + TTL);
                events.emit(ToastEvent::Shown(message));
                Ok(self.shown)
            }
            ToastCommand::Reject => {
                events.emit(ToastEvent::Cleared);
                Err(ToastError)
            }
        }
    }

    fn snapshot(&self) -> ToastView {
        ToastView {
            message: self.message.clone(),
            shown: self.shown,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.expires_at
    }

    async fn on_deadline(
        &mut self,
        _ctx: &(),
        events: &mut Events<ToastEvent>,
    ) -> Result<(), ToastError> {
        self.message = None;
        self.expires_at = None;
        events.emit(ToastEvent::Cleared);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_deadline_fires_after_ttl() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    let handle = tokio::spawn(actor.run(()));

    client
        .dispatch(ToastCommand::Show("Velvet Skirt added to bag!".into()))
        .await
        .unwrap();
    assert!(client.snapshot().message.is_some());

    tokio::time::sleep(Duration::from_millis(2_999)).await;
    assert!(client.settled().await.unwrap().message.is_some());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(client.settled().await.unwrap().message, None);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_new_deadline_replaces_pending_one() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    tokio::spawn(actor.run(()));

    client
        .dispatch(ToastCommand::Show("first".into()))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    client
        .dispatch(ToastCommand::Show("second".into()))
        .await
        .unwrap();

    // 4s after the first toast: the first window has passed, the second has not.
    tokio::time::sleep(Duration::from_secs(2)).await;
    let view = client.settled().await.unwrap();
    assert_eq!(view.message.as_deref(), Some("second"));

    tokio::time::sleep(Duration::from_millis(1_001)).await;
    assert_eq!(client.settled().await.unwrap().message, None);
}

#[tokio::test]
async fn test_snapshot_published_before_events() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    tokio::spawn(actor.run(()));
    let mut feed = client.subscribe();
    let reader = client.clone();

    client
        .dispatch(ToastCommand::Show("hello".into()))
        .await
        .unwrap();

    let event = feed.recv().await.unwrap();
    assert_eq!(event, ToastEvent::Shown("hello".into()));
    assert_eq!(
        reader.snapshot().message.as_deref(),
        Some("hello")
    );
}

#[tokio::test]
async fn test_failed_command_publishes_nothing() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    tokio::spawn(actor.run(()));
    let mut feed = client.subscribe();

    let result = client.dispatch(ToastCommand::Reject).await;
    assert!(matches!(result, Err(FrameworkError::StateError(_))));

    client
        .dispatch(ToastCommand::Show("after".into()))
        .await
        .unwrap();
    // The Cleared event buffered by the failed command was discarded.
    assert_eq!(
        feed.recv().await.unwrap(),
        ToastEvent::Shown("after".into())
    );
}

#[tokio::test]
async fn test_store_stops_when_clients_dropped() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    let handle = tokio::spawn(actor.run(()));
    let second = client.clone();

    drop(client);
    assert!(!second.is_closed());
    drop(second);

    handle.await.expect("store task should exit cleanly");
}

#[tokio::test]
async fn test_closed_store_reports_store_closed() {
    let (actor, client) = StoreActor::new(Toast::default(), 8);
    let handle = tokio::spawn(actor.run(()));
    handle.abort();
    let _ = handle.await;

    let result = client.dispatch(ToastCommand::Show("late".into())).await;
    assert!(matches!(result, Err(FrameworkError::StoreClosed)));
}
