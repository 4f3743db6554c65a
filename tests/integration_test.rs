use chrono::{TimeZone, Utc};
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use std::time::Duration;
use store_runtime::tracing::try_setup_tracing;
use store_runtime::StoreHandle;
use thrift_boutique::cart::CartEvent;
use thrift_boutique::catalog::{FilterCriteria, ProductLookup, StatusFilter};
use thrift_boutique::config::StoreConfig;
use thrift_boutique::lifecycle::Storefront;
use thrift_boutique::model::Product;
use thrift_boutique::release_gate::{FixedClock, GateEvent};

fn launch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 25, 12, 0, 0).unwrap()
}

/// A storefront pinned one hour before the bundled launch date.
fn before_launch() -> (Storefront, FixedClock) {
    try_setup_tracing();
    let clock = FixedClock::new(launch() - chrono::Duration::hours(1));
    let store = Storefront::start_with_clock(StoreConfig::default(), Arc::new(clock.clone()))
        .expect("default config starts");
    (store, clock)
}

/// Full session against real stores: browse, add, check out, shut down.
#[tokio::test]
async fn test_full_storefront_session() {
    let (store, _clock) = before_launch();

    let view = store.shop(&FilterCriteria::default());
    let ids: Vec<_> = view.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "vintage-cream-blouse",
            "chic-denim-jacket",
            "black-floral-top"
        ]
    );

    assert!(store.add_to_cart("vintage-cream-blouse").await.unwrap());
    assert!(store.add_to_cart("chic-denim-jacket").await.unwrap());

    let link = store.checkout_link();
    let (base, encoded) = link.split_once("?text=").expect("link has text");
    assert_eq!(base, "https://wa.me/919760427922");
    let message = percent_decode_str(encoded).decode_utf8().unwrap();
    assert!(message.starts_with("Hello Thrift by Musk!"));
    let lines = "- Vintage Cream Blouse (₹1,299)\n- Chic Denim Jacket (₹1,899)";
    assert!(message.contains(lines));
    assert!(message.ends_with("Total: ₹3,198"));

    store.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn test_adding_twice_keeps_one_entry() {
    let (store, _clock) = before_launch();

    assert!(store.add_to_cart("black-floral-top").await.unwrap());
    assert!(!store.add_to_cart("black-floral-top").await.unwrap());

    assert_eq!(store.cart.items().len(), 1);
    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sold_gated_and_unknown_ids_are_not_added() {
    let (store, _clock) = before_launch();

    assert!(!store.add_to_cart("delicate-lace-top").await.unwrap());
    assert!(!store.add_to_cart("classic-gingham-shirt").await.unwrap());
    assert!(!store.add_to_cart("no-such-piece").await.unwrap());

    assert!(store.cart.items().is_empty());
    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_keeps_copy_taken_at_add_time() {
    let (store, _clock) = before_launch();
    let original = Product::new("scarf", "Silk Scarf", "Hermès", "M", "Vintage", 2500);

    store.cart.add_to_cart(original.clone()).await.unwrap();
    // The same piece sells elsewhere; the bag still holds what was added.
    store.cart.add_to_cart(original.sold_out()).await.unwrap();

    let items = store.cart.items();
    assert_eq!(items.len(), 1);
    assert!(!items[0].product.sold);
    store.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_notification_clears_three_seconds_after_last_add() {
    let (store, _clock) = before_launch();
    let mut feed = store.cart.subscribe();

    store.add_to_cart("vintage-cream-blouse").await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    store.add_to_cart("chic-denim-jacket").await.unwrap();

    tokio::time::sleep(Duration::from_secs(2)).await;
    let snapshot = store.cart.settled().await.unwrap();
    assert_eq!(
        snapshot.notification.as_deref(),
        Some("Chic Denim Jacket added to bag!")
    );

    tokio::time::sleep(Duration::from_millis(1_001)).await;
    assert_eq!(store.cart.settled().await.unwrap().notification, None);

    let mut cleared = 0;
    while let Ok(event) = feed.try_recv() {
        if event == CartEvent::NotificationCleared {
            cleared += 1;
        }
    }
    assert_eq!(cleared, 1, "the first timer was replaced, not fired");

    store.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_drop_goes_live_on_next_poll() {
    let (store, clock) = before_launch();
    let mut feed = store.gate.subscribe();
    assert!(!store.gate.is_live());
    assert!(matches!(
        store.product("classic-gingham-shirt"),
        ProductLookup::Upcoming(_)
    ));
    assert_eq!(store.countdown().to_string(), "00d 01h 00m 00s");

    clock.set(launch());
    tokio::time::timeout(Duration::from_secs(5), store.gate.wait_until_live())
        .await
        .expect("gate polls within the interval")
        .unwrap();

    assert!(matches!(
        feed.recv().await.unwrap(),
        GateEvent::WentLive { .. }
    ));
    assert!(store.countdown().is_elapsed());
    assert!(matches!(
        store.product("classic-gingham-shirt"),
        ProductLookup::Found(_)
    ));

    let all = FilterCriteria::default().with_status(StatusFilter::All);
    assert_eq!(store.shop(&all).products.len(), 7);

    store.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_gate_stays_live_when_clock_moves_back() {
    let (store, clock) = before_launch();

    clock.set(launch());
    assert!(store.gate.check().await.unwrap());

    clock.set(launch() - chrono::Duration::days(1));
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(store.gate.check().await.unwrap());
    assert!(store.gate.is_live());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_started_after_launch_is_live_immediately() {
    let store = Storefront::start_with_clock(
        StoreConfig::default(),
        Arc::new(FixedClock::new(launch() + chrono::Duration::days(1))),
    )
    .unwrap();

    assert!(store.gate.is_live());
    assert_eq!(store.featured().len(), 3);
    store.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_with_pending_timers() {
    let (store, _clock) = before_launch();
    store.add_to_cart("black-floral-top").await.unwrap();

    // Gate poll and notification expiry are both pending.
    tokio::time::timeout(Duration::from_millis(10), store.shutdown())
        .await
        .expect("shutdown does not wait for timers")
        .unwrap();
}

#[tokio::test]
async fn test_invalid_config_does_not_start() {
    let config = StoreConfig {
        launch_date: "whenever".into(),
        ..StoreConfig::default()
    };

    assert!(Storefront::start(config).is_err());
}
