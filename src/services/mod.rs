pub mod advice;
pub mod chat;
pub mod completion;
mod metrics;
pub mod routing;
mod session;
pub mod streaming;
pub mod template;

pub use metrics::{MetricsService, MetricsStats};
pub use session::{Session, SessionManager};
pub use streaming::StreamingBuffer;
