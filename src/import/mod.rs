//! Scene file import
//!
//! Reads OVO binary scene files into a [`SceneGraph`](crate::scene::SceneGraph).
//! The format is a flat little-endian stream of type-tagged, length-prefixed
//! chunks; the importer reconstructs the tree with an explicit
//! remaining-child-count stack.

mod chunk;
mod ovo;

pub use chunk::{unpack_half2x16, unpack_snorm3x10, ChunkReader};
pub use ovo::{from_bytes, from_file, ImportError};
