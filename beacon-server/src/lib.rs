mod app;
mod registry;
mod router;
mod signaling;

pub use app::*;
pub use registry::*;
pub use router::*;
pub use signaling::*;
