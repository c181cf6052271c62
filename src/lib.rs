//! # splotr
//!
//! Inspects MPEG audio files and decodes the 32-bit header that precedes
//! each compressed frame. Only the leading header of a buffer is decoded;
//! frames are not walked and audio samples are not decoded.
//!

pub mod error;
pub mod header;
pub mod loader;
pub mod report;
pub mod tables;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{HeaderError, HeaderResult, LoadError, LoadResult, SplotrError};
pub use header::{decode, encode, FrameHeader, HeaderField, FRAME_SYNC, HEADER_SIZE};
pub use loader::Mp3File;
pub use report::{render, yes_no, OutputFormat, ReportOptions};
pub use types::{ChannelMode, Emphasis, Layer, MpegVersion};
