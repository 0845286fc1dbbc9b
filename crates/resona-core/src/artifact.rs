use std::fmt;
use std::io::{self, Cursor, Read, Seek};
use std::path::PathBuf;
use std::sync::Arc;

use mime::Mime;

/// Readable and seekable byte stream. Closing is dropping.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send + ?Sized> ReadSeek for T {}

pub type ByteStream = Box<dyn ReadSeek>;

/// Re-openable supply of bytes for a sub-artifact's lazy publisher.
pub type ByteStreamSupplier = Box<dyn Fn() -> io::Result<ByteStream> + Send + Sync>;

/// Identity of the resource a promoted sub-artifact is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIdentity {
    pub title: String,
    /// Target directory the owner's sub-resources are placed in.
    pub sub_resource_base: PathBuf,
}

impl OwnerIdentity {
    pub fn new(title: impl Into<String>, sub_resource_base: impl Into<PathBuf>) -> Self {
        OwnerIdentity {
            title: title.into(),
            sub_resource_base: sub_resource_base.into(),
        }
    }

    pub fn art_filename(&self, extension: &str) -> String {
        format!("{}.art.{}", self.title, extension)
    }
}

/// Managed handle to a published (or lazily publishable) sub-artifact.
/// Raw picture bytes never travel through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct SubArtifact {
    pub rel_target_filename: String,
    pub target_path: PathBuf,
    pub media_type: Mime,
    pub lazy_publish: bool,
}

/// Everything a resource constructor needs to register a sub-artifact.
pub struct SubArtifactDescriptor {
    pub rel_target_filename: String,
    pub target_path: PathBuf,
    pub media_type: Mime,
    /// When set, bytes are written to output only on first consumption.
    pub lazy_publish: bool,
    pub open: ByteStreamSupplier,
}

impl SubArtifactDescriptor {
    /// Supplier over an already materialized buffer. No file handle is
    /// held open behind it.
    pub fn buffered(bytes: Arc<[u8]>) -> ByteStreamSupplier {
        Box::new(move || Ok(Box::new(Cursor::new(Arc::clone(&bytes))) as ByteStream))
    }

    /// The handle this descriptor resolves to once construction succeeds.
    pub fn handle(&self) -> SubArtifact {
        SubArtifact {
            rel_target_filename: self.rel_target_filename.clone(),
            target_path: self.target_path.clone(),
            media_type: self.media_type.clone(),
            lazy_publish: self.lazy_publish,
        }
    }
}

impl fmt::Debug for SubArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubArtifactDescriptor")
            .field("rel_target_filename", &self.rel_target_filename)
            .field("target_path", &self.target_path)
            .field("media_type", &self.media_type)
            .field("lazy_publish", &self.lazy_publish)
            .finish_non_exhaustive()
    }
}
