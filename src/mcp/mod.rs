pub mod server;

pub use server::{StorefrontMcpServer, run_server};
