use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use resona_core::AudioFormat;
use resona_core::artifact::ByteStream;

/// Capability that opens the audio payload as a readable, seekable
/// stream. May be backed by a file, an archive entry, memory, ...
pub trait ByteStreamOpener: Send + Sync {
    fn open(&self) -> io::Result<ByteStream>;
}

/// An audio payload: its container format plus the capability to read
/// its bytes. Owned by the resource that wraps it.
#[derive(Clone)]
pub struct AudioSource {
    format: AudioFormat,
    opener: Arc<dyn ByteStreamOpener>,
}

impl AudioSource {
    pub fn new(format: AudioFormat, opener: Arc<dyn ByteStreamOpener>) -> Self {
        AudioSource { format, opener }
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub(crate) fn open(&self) -> io::Result<ByteStream> {
        self.opener.open()
    }
}

impl fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioSource")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Opener backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileOpener {
    path: PathBuf,
}

impl FileOpener {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileOpener { path: path.into() }
    }
}

impl ByteStreamOpener for FileOpener {
    fn open(&self) -> io::Result<ByteStream> {
        Ok(Box::new(fs::File::open(&self.path)?))
    }
}
