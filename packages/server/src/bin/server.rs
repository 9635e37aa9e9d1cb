//! Broadcast relay server.
//!
//! Every message submitted by a client is broadcast to all connected clients;
//! newly joined clients first receive the recent history.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin huddle-server
//! cargo run --bin huddle-server -- --host 0.0.0.0 --port 3000 --static-dir public
//! ```

use std::{num::NonZeroUsize, path::PathBuf, sync::Arc};

use clap::Parser;
use huddle_server::{
    domain::{ConnectionRegistry, DEFAULT_HISTORY_CAPACITY, HistoryRepository},
    infrastructure::{registry::ChannelConnectionRegistry, repository::InMemoryHistoryRepository},
    ui::{Server, ServerConfig},
    usecase::{BroadcastSequencer, JoinUseCase, LeaveUseCase, SubmitMessageUseCase},
};
use huddle_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "huddle-server")]
#[command(about = "WebSocket broadcast relay with bounded history", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,

    /// Number of recent messages kept and sent to joining clients
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    /// Outbound queue length per connection; full queues are skipped on broadcast
    #[arg(long, default_value = "64")]
    outbound_buffer: NonZeroUsize,

    /// Directory of static assets to serve at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository / Registry
    // 2. UseCases
    // 3. Server

    // 1. History log and connection set live for the whole process
    let repository: Arc<dyn HistoryRepository> =
        Arc::new(InMemoryHistoryRepository::with_capacity(args.history_capacity));
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(ChannelConnectionRegistry::new());
    let sequencer = Arc::new(BroadcastSequencer::new());

    // 2. UseCases
    let join_usecase = Arc::new(JoinUseCase::new(
        repository.clone(),
        registry.clone(),
        sequencer.clone(),
    ));
    let submit_message_usecase = Arc::new(SubmitMessageUseCase::new(
        repository,
        registry.clone(),
        sequencer,
        Arc::new(SystemClock),
    ));
    let leave_usecase = Arc::new(LeaveUseCase::new(registry));

    tracing::info!(
        "History capacity: {}, outbound buffer: {}",
        args.history_capacity,
        args.outbound_buffer
    );

    // 3. Server
    let server = Server::new(
        join_usecase,
        submit_message_usecase,
        leave_usecase,
        ServerConfig {
            outbound_buffer: args.outbound_buffer.get(),
            static_dir: args.static_dir,
        },
    );

    server.run(args.host, args.port).await
}
