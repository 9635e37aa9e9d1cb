//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{JoinUseCase, LeaveUseCase, SubmitMessageUseCase};

/// Shared application state
pub struct AppState {
    pub join_usecase: Arc<JoinUseCase>,
    pub submit_message_usecase: Arc<SubmitMessageUseCase>,
    pub leave_usecase: Arc<LeaveUseCase>,
    /// Outbound queue length per connection; a full queue is backlogged.
    pub outbound_buffer: usize,
}
