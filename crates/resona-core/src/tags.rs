use std::sync::Arc;

use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::artifact::SubArtifact;

/// Flat metadata record read from the tag container. Absent fields are
/// the decoder-defined defaults: empty string or zero, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTags {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub album_artist: String,
    pub composer: String,
    pub genre: String,
    pub year: u32,
    pub track_number: u32,
    pub track_total: u32,
    pub disc_number: u32,
    pub disc_total: u32,
    pub lyrics: String,
    pub comment: String,
}

/// Embedded picture between decode and promotion: sniffed media type
/// plus the raw buffer. Never part of [`FinalTags`].
#[derive(Debug, Clone)]
pub struct RawArt {
    pub media_type: Mime,
    pub bytes: Arc<[u8]>,
    pub extension: String,
}

/// Extractor output, consumed immediately by the art promoter.
#[derive(Debug, Clone)]
pub struct PreTags {
    pub base: BaseTags,
    pub art: Option<RawArt>,
}

/// The externally visible result: text fields plus the promoted art
/// handle, if any picture survived classification and construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalTags {
    pub base: BaseTags,
    pub art: Option<SubArtifact>,
}
