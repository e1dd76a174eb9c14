use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;
use greenroom_core::ServerMessage;

#[tokio::test]
async fn test_empty_room_drops_silently() {
    init_tracing();

    let relay = create_relay();

    // C is alone in "zzz": candidates go nowhere and no error comes back.
    let mut c = TestPeer::connect(&relay);
    c.join(&relay, "zzz").await;
    c.send_candidate(&relay, "zzz", json!({ "candidate": "candidate:1" }))
        .await;
    c.expect_silence().await;

    // The dropped signal left the relay healthy.
    let mut d = TestPeer::connect(&relay);
    d.join(&relay, "zzz").await;
    c.send_offer(&relay, "zzz", json!({ "sdp": "v=0..." })).await;
    assert_eq!(
        d.recv().await.unwrap(),
        ServerMessage::Offer(json!({ "sdp": "v=0..." }))
    );
}
