//! Source formatter adapters.

mod builtin;
mod external;
mod imports;
mod lexer;

pub use builtin::GoFormatter;
pub use external::{ExternalFormatter, ExternalTool, PROGRAM_ENV};
