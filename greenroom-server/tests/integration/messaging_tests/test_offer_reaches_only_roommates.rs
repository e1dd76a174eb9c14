use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;
use greenroom_core::ServerMessage;

#[tokio::test]
async fn test_offer_reaches_only_roommates() {
    init_tracing();

    let relay = create_relay();

    let mut a = TestPeer::connect(&relay);
    let mut b = TestPeer::connect(&relay);
    let mut outsider = TestPeer::connect(&relay);

    a.join(&relay, "abc123").await;
    b.join(&relay, "abc123").await;
    outsider.join(&relay, "zzz").await;

    let offer = json!({ "type": "offer", "sdp": "v=0..." });
    a.send_offer(&relay, "abc123", offer.clone()).await;

    assert_eq!(b.recv().await.unwrap(), ServerMessage::Offer(offer));
    outsider.expect_silence().await;
    a.expect_silence().await;
}
