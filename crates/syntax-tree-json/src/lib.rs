//! syntax-tree-json: decoder for the STJN binary serialization of JSON
//! syntax trees.
//!
//! A serialized tree stores node variants and byte spans but no text: string
//! and number content is recovered by slicing the original source with each
//! node's [`Location`]. Decoded trees therefore borrow the source text.
//!
//! ```
//! use syntax_tree_json::{load, NodeKind};
//!
//! fn node(bytes: &mut Vec<u8>, tag: u8, start: u64, end: u64) {
//!     bytes.push(tag);
//!     bytes.extend_from_slice(&start.to_le_bytes());
//!     bytes.extend_from_slice(&end.to_le_bytes());
//! }
//!
//! let source = "[1]";
//! let mut bytes = b"STJN".to_vec();
//! for field in [0u32, 3, 0] {
//!     bytes.extend_from_slice(&field.to_le_bytes());
//! }
//! node(&mut bytes, b'R', 0, 3);
//! node(&mut bytes, b'A', 0, 3);
//! bytes.extend_from_slice(&1u64.to_le_bytes());
//! node(&mut bytes, b'#', 1, 2);
//!
//! let root = load(source, &bytes).unwrap();
//! assert_eq!(root.to_string(), "[1]");
//! assert!(matches!(root.kind, NodeKind::Root(_)));
//! ```

pub mod cli;
pub mod decoder;
pub mod directive;
pub mod error;
pub mod format;
pub mod header;
pub mod loader;
pub mod location;
pub mod node;
pub mod pretty_print;
pub mod visit;

pub use decoder::{decode, Decoder, DecoderOptions, DEFAULT_MAX_DEPTH};
pub use directive::{Directive, MAGIC};
pub use error::{DecodeError, Field};
pub use format::format;
pub use header::{Header, Version, FORMAT_VERSION, HEADER_LEN};
pub use loader::{load, load_from_reader, Loader};
pub use location::Location;
pub use node::{Node, NodeKind};
pub use pretty_print::{pretty_print, DEFAULT_WIDTH};
pub use visit::{Summary, Visit};
