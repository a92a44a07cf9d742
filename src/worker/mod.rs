//! Background worker that reads the page snapshot off the render thread.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation and snapshot conversion

pub mod handler;
pub mod messages;

pub use handler::NotesiftWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
