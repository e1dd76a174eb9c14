use clap::Parser;
use std::net::SocketAddr;

/// Command line configuration for the relay binary.
#[derive(Debug, Parser)]
#[command(name = "greenroom-server", about = "WebRTC interview signaling relay")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,
}
