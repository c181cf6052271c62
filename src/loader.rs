//! Whole-file loading

use crate::error::{LoadError, LoadResult};
use crate::header::{self, FrameHeader};
use std::fs;
use std::path::{Path, PathBuf};

/// An audio file read fully into memory
#[derive(Debug, Clone)]
pub struct Mp3File {
    /// Path the file was loaded from
    pub path: PathBuf,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// Raw contents, last byte zeroed
    pub contents: Vec<u8>,
}

impl Mp3File {
    /// Read `path` into memory.
    ///
    /// The final byte of a non-empty file is replaced with 0x00 before the
    /// contents are stored. The file size is taken from its metadata.
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut contents = fs::read(path).map_err(io_error)?;
        if let Some(last) = contents.last_mut() {
            *last = 0;
        }

        let size = fs::metadata(path).map_err(io_error)?.len();
        log::debug!("Loaded {} ({} bytes)", path.display(), size);

        Ok(Self {
            path: path.to_path_buf(),
            size,
            contents,
        })
    }

    /// Decode the frame header at the start of the file
    pub fn header(&self) -> LoadResult<FrameHeader> {
        let header = header::decode(&self.contents)?;
        log::trace!("Decoded header for {}: {:?}", self.path.display(), header);
        if !header.has_valid_sync() {
            log::warn!(
                "{}: frame sync is 0x{:03X}, expected 0x{:03X}",
                self.path.display(),
                header.frame_sync,
                header::FRAME_SYNC
            );
        }
        Ok(header)
    }
}
