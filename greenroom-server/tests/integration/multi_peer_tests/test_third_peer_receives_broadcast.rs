use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;
use greenroom_core::ServerMessage;

// The relay itself is N-way: every member except the sender gets the
// signal. Two-party calls are the supported topology, but a third member
// is forwarded to all the same.
#[tokio::test]
async fn test_third_peer_receives_broadcast() {
    init_tracing();

    let relay = create_relay();

    let mut a = TestPeer::connect(&relay);
    let mut b = TestPeer::connect(&relay);
    let mut c = TestPeer::connect(&relay);
    a.join(&relay, "abc123").await;
    b.join(&relay, "abc123").await;
    c.join(&relay, "abc123").await;

    let offer = json!({ "sdp": "v=0..." });
    a.send_offer(&relay, "abc123", offer.clone()).await;

    assert_eq!(b.recv().await.unwrap(), ServerMessage::Offer(offer.clone()));
    assert_eq!(c.recv().await.unwrap(), ServerMessage::Offer(offer));
    a.expect_silence().await;
}
