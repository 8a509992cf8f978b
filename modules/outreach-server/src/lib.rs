pub mod config;
pub mod http;
pub mod logging;
pub mod server;
pub mod stdio;
pub mod tools;

pub use config::{load_config, AppConfig, FileConfig, Transport};
pub use server::McpServer;
pub use tools::OutreachTools;
