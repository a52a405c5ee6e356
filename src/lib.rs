//! Unicode-aware getopt(3) and getopt_long(3) style option scanning.
//!
//! ```
//! use uniopt::{get, ShortOpts};
//!
//! let args = ["prog", "-λc", "value", "file"];
//! let parsed = get(&args, &ShortOpts::parse("λc:")).unwrap();
//! assert_eq!(parsed.flags.len(), 2);
//! assert_eq!(parsed.flags[1].value, "value");
//! assert_eq!(parsed.rest, ["file"]);
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod scan;
pub mod table;

pub use scan::{Flag, Key, OptName, ParseError, Parsed, get, get_long, get_long_with};
pub use table::{ArgMode, LongOpt, ShortOpts, TableError};
