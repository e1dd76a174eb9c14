use serde_json::json;

use crate::integration::{create_relay, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_unjoined_sender_is_dropped() {
    init_tracing();

    let relay = create_relay();

    let intruder = TestPeer::connect(&relay);
    let mut b = TestPeer::connect(&relay);
    b.join(&relay, "abc123").await;

    // Never joined: nothing is forwarded, the handler stays alive.
    intruder
        .send_offer(&relay, "abc123", json!({ "sdp": "v=0..." }))
        .await;
    b.expect_silence().await;

    // Joined elsewhere, addressing a room it is not in: same outcome.
    intruder.join(&relay, "other").await;
    intruder
        .send_offer(&relay, "abc123", json!({ "sdp": "v=0..." }))
        .await;
    b.expect_silence().await;
}
