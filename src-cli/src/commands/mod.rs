//! Commands Layer
//!
//! One handler per subcommand. Report text goes to stdout, logs to stderr.

mod status_cmd;
mod votes_cmd;
mod network_cmd;
mod validate_cmd;
mod publish_cmd;

pub use status_cmd::*;
pub use votes_cmd::*;
pub use network_cmd::*;
pub use validate_cmd::*;
pub use publish_cmd::*;
