//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod gen_api;
pub mod gen_db;
pub mod generate;
pub mod init;
pub mod introspect;
