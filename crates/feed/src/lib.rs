mod emitter;
mod error;
pub mod listener;
mod pacing;
mod report;
mod source;
mod transport;

pub use emitter::{EmitConfig, Emitter, RunSummary, StopReason, run};
pub use error::EmitError;
pub use listener::Listener;
pub use pacing::{Pacer, ThreadSleeper};
pub use report::{LogReporter, Reporter, StreamEvent};
pub use transport::{Transport, UdpTransport, resolve_destination};
