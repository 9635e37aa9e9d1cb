//! UseCase layer: join, submit and leave flows of a connection.

pub mod error;
pub mod join;
pub mod leave;
pub mod sequencer;
pub mod submit_message;

pub use error::{JoinError, SubmitError};
pub use join::JoinUseCase;
pub use leave::LeaveUseCase;
pub use sequencer::BroadcastSequencer;
pub use submit_message::{SubmitMessageUseCase, SubmittedMessage};
