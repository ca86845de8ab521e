//! sf-keys: `EXT-X-KEY` declarations for HLS media playlists.
//!
//! This crate manages the set of decryption-key tags attached to a playlist
//! and renders them byte-exact for playlist consumers.
//!
//! # Modules
//!
//! - [`key`] - A single key declaration and its `#EXT-X-KEY` rendering
//! - [`key_list`] - Ordered, keyformat-unique key collections with
//!   copy-on-write updates and diffing
//! - [`error`] - Error types and result alias
//!
//! Lists are never mutated in place. Every update returns a new [`KeyList`],
//! so earlier snapshots can keep being read by other playlist revisions.
//!
//! # Examples
//!
//! ```
//! use sf_keys::{Key, KeyList, KeyMethod};
//!
//! let keys = KeyList::new();
//! let keys = keys
//!     .add_or_update(Key::new(KeyMethod::Aes128, "https://cdn/key").with_iv("0x1a2b"))
//!     .unwrap_or(keys);
//!
//! assert_eq!(
//!     keys.render(),
//!     "#EXT-X-KEY:METHOD=AES-128,URI=\"https://cdn/key\",IV=0x1a2b\n"
//! );
//! ```

pub mod error;
pub mod key;
pub mod key_list;
mod writer;

pub use error::{Error, Result};
pub use key::{Key, KeyMethod};
pub use key_list::KeyList;
