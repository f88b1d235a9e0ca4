//! Rendering primitives shared by the built-in templates.

mod go_writer;

pub use go_writer::{Field, GoWriter};
