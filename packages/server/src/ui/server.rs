//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::{JoinUseCase, LeaveUseCase, SubmitMessageUseCase};

use super::{handler::websocket_handler, signal::shutdown_signal, state::AppState};

/// Default outbound queue length per connection.
pub const DEFAULT_OUTBOUND_BUFFER: usize = 64;

/// Transport-level settings of the relay.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Outbound queue length per connection (at least 1).
    pub outbound_buffer: usize,
    /// Directory served at `/` for a browser front end.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            outbound_buffer: DEFAULT_OUTBOUND_BUFFER,
            static_dir: None,
        }
    }
}

/// WebSocket relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(join_usecase, submit_message_usecase, leave_usecase, config);
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    join_usecase: Arc<JoinUseCase>,
    submit_message_usecase: Arc<SubmitMessageUseCase>,
    leave_usecase: Arc<LeaveUseCase>,
    config: ServerConfig,
}

impl Server {
    pub fn new(
        join_usecase: Arc<JoinUseCase>,
        submit_message_usecase: Arc<SubmitMessageUseCase>,
        leave_usecase: Arc<LeaveUseCase>,
        config: ServerConfig,
    ) -> Self {
        Self {
            join_usecase,
            submit_message_usecase,
            leave_usecase,
            config,
        }
    }

    /// Build the router: `/ws` plus the optional static directory.
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            join_usecase: self.join_usecase,
            submit_message_usecase: self.submit_message_usecase,
            leave_usecase: self.leave_usecase,
            outbound_buffer: self.config.outbound_buffer.max(1),
        });

        let mut app = Router::new()
            .route("/ws", get(websocket_handler))
            .with_state(app_state);

        if let Some(dir) = self.config.static_dir {
            tracing::info!("Serving static files from {}", dir.display());
            app = app.fallback_service(ServeDir::new(dir));
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }

    /// Run the relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Broadcast relay listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
