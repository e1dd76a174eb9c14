use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;
use greenroom_core::ServerMessage;

#[tokio::test]
async fn test_duplicate_offer_not_deduplicated() {
    init_tracing();

    let relay = create_relay();

    let a = TestPeer::connect(&relay);
    let mut b = TestPeer::connect(&relay);
    a.join(&relay, "abc123").await;
    b.join(&relay, "abc123").await;

    // A re-offers before B answers; the relay forwards both and the
    // application layer lets the last one win.
    a.send_offer(&relay, "abc123", json!({ "sdp": "v=0... first" })).await;
    a.send_offer(&relay, "abc123", json!({ "sdp": "v=0... second" })).await;

    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::Offer(json!({ "sdp": "v=0... first" }))
    );
    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::Offer(json!({ "sdp": "v=0... second" }))
    );
}
