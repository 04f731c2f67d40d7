/*!
 * Lyric track parsing and timeline reconstruction.
 *
 * This module contains the core functionality for turning raw lyric track
 * blobs into a single merged timeline. It is split into several submodules:
 *
 * - `timestamp`: Leading `[mm:ss.xx]` tag tokenizer
 * - `plain`: Plain (per-line timestamped) track parser
 * - `dynamic`: Word-level (karaoke) track parser
 * - `merge`: Alignment and merge engine for all four tracks
 * - `postprocess`: Finishing pass over the merged timeline
 * - `timeline`: Shared output data model
 */

// Re-export main types for easier usage
pub use self::dynamic::{parse_dynamic_track, DynamicLine};
pub use self::merge::parse_lyric;
pub use self::plain::{parse_plain_track, PureLine};
pub use self::postprocess::{post_process, INSTRUMENTAL_PLACEHOLDER};
pub use self::timeline::{LyricLine, WordFragment};

// Submodules
pub mod dynamic;
pub mod merge;
pub mod plain;
pub mod postprocess;
pub mod timeline;
pub mod timestamp;
