mod test_third_peer_receives_broadcast;
