use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;
use greenroom_core::ServerMessage;

#[tokio::test]
async fn test_per_sender_order_preserved() {
    init_tracing();

    let relay = create_relay();

    let a = TestPeer::connect(&relay);
    let mut b = TestPeer::connect(&relay);
    a.join(&relay, "abc123").await;
    b.join(&relay, "abc123").await;

    a.send_offer(&relay, "abc123", json!({ "sdp": "v=0..." })).await;
    for seq in 0..5 {
        a.send_candidate(&relay, "abc123", json!({ "candidate": seq })).await;
    }

    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::Offer(json!({ "sdp": "v=0..." }))
    );
    for seq in 0..5 {
        assert_eq!(
            b.recv().await.unwrap(),
            ServerMessage::IceCandidate(json!({ "candidate": seq }))
        );
    }
}
