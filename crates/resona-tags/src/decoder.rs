use std::borrow::Cow;

use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, PictureType};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};

use resona_core::BaseTags;
use resona_core::artifact::ByteStream;

use crate::error::ExtractError;

/// Decoder output: the flat text fields plus the embedded picture, if
/// the container carried one.
#[derive(Debug, Clone, Default)]
pub struct DecodedTags {
    pub base: BaseTags,
    pub picture: Option<DecodedPicture>,
}

#[derive(Debug, Clone)]
pub struct DecodedPicture {
    pub bytes: Vec<u8>,
    /// Filename extension declared by the container, if any. A hint
    /// only; content sniffing decides the media type.
    pub extension_hint: Option<String>,
}

/// Capability that understands the tag container formats (ID3 family,
/// Vorbis comments, FLAC metadata blocks, MP4 ilst).
///
/// `Ok(None)` means the stream parsed but carried no tag block.
pub trait TagDecoder: Send + Sync {
    fn decode(&self, stream: ByteStream) -> Result<Option<DecodedTags>, ExtractError>;
}

/// Production decoder on top of lofty.
#[derive(Debug, Clone, Default)]
pub struct LoftyDecoder;

impl TagDecoder for LoftyDecoder {
    fn decode(&self, stream: ByteStream) -> Result<Option<DecodedTags>, ExtractError> {
        let tagged = Probe::new(stream)
            .guess_file_type()?
            .read()
            .map_err(ExtractError::parse)?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(None);
        };

        Ok(Some(DecodedTags {
            base: base_tags_from(tag),
            picture: front_cover(tag),
        }))
    }
}

fn base_tags_from(tag: &Tag) -> BaseTags {
    BaseTags {
        title: tag.title().map(Cow::into_owned).unwrap_or_default(),
        album: tag.album().map(Cow::into_owned).unwrap_or_default(),
        artist: tag.artist().map(Cow::into_owned).unwrap_or_default(),
        album_artist: tag
            .get_string(&ItemKey::AlbumArtist)
            .unwrap_or_default()
            .to_owned(),
        composer: tag
            .get_string(&ItemKey::Composer)
            .unwrap_or_default()
            .to_owned(),
        genre: tag.genre().map(Cow::into_owned).unwrap_or_default(),
        year: tag.year().unwrap_or_default(),
        // (track, track_total) and (disc, disc_total) are independent
        // pairs; never cross-assign the totals.
        track_number: tag.track().unwrap_or_default(),
        track_total: tag.track_total().unwrap_or_default(),
        disc_number: tag.disk().unwrap_or_default(),
        disc_total: tag.disk_total().unwrap_or_default(),
        lyrics: tag
            .get_string(&ItemKey::Lyrics)
            .unwrap_or_default()
            .to_owned(),
        comment: tag.comment().map(Cow::into_owned).unwrap_or_default(),
    }
}

/// The front cover when tagged as such, otherwise the first picture.
fn front_cover(tag: &Tag) -> Option<DecodedPicture> {
    let pictures = tag.pictures();
    let picture = pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())?;

    Some(DecodedPicture {
        bytes: picture.data().to_vec(),
        extension_hint: picture
            .mime_type()
            .and_then(extension_hint)
            .map(str::to_owned),
    })
}

fn extension_hint(mime: &MimeType) -> Option<&'static str> {
    match mime {
        MimeType::Jpeg => Some("jpg"),
        MimeType::Png => Some("png"),
        MimeType::Tiff => Some("tif"),
        MimeType::Bmp => Some("bmp"),
        MimeType::Gif => Some("gif"),
        _ => None,
    }
}
