//! Optional user defaults file.
//!
//! A small JSON document supplying defaults for `--lang` and `--editor`, a
//! forced locale, and an alternative skill-asset source. Command-line flags
//! always take precedence.

pub mod io;
pub mod path;
pub mod structure;

pub use io::{load_config, load_config_from_file};
pub use path::get_config_file_path;
pub use structure::Config;
