mod relay_command;
mod session_router;

pub use relay_command::*;
pub use session_router::*;
