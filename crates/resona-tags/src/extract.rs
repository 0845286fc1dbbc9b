use std::sync::Arc;

use tracing::warn;

use resona_core::ImageFormat;
use resona_core::tags::{PreTags, RawArt};

use crate::config::ExtractConfig;
use crate::decoder::{DecodedPicture, TagDecoder};
use crate::error::ExtractError;
use crate::sniff::MimeSniffer;
use crate::source::AudioSource;

/// Pulls the flat metadata record and the raw embedded picture out of
/// an audio source. `Ok(None)` means the container carried no tags.
pub struct TagExtractor {
    decoder: Arc<dyn TagDecoder>,
    sniffer: Arc<dyn MimeSniffer>,
    extract_art: bool,
}

impl TagExtractor {
    pub fn new(
        decoder: Arc<dyn TagDecoder>,
        sniffer: Arc<dyn MimeSniffer>,
        config: &ExtractConfig,
    ) -> Self {
        TagExtractor {
            decoder,
            sniffer,
            extract_art: config.extract_art,
        }
    }

    pub fn extract(&self, source: &AudioSource) -> Result<Option<PreTags>, ExtractError> {
        let stream = source.open()?;
        let Some(decoded) = self.decoder.decode(stream)? else {
            return Ok(None);
        };

        let art = if self.extract_art {
            decoded.picture.and_then(|p| self.classify_picture(p))
        } else {
            None
        };

        Ok(Some(PreTags {
            base: decoded.base,
            art,
        }))
    }

    fn classify_picture(&self, picture: DecodedPicture) -> Option<RawArt> {
        let media_type = self
            .sniffer
            .sniff(&picture.bytes, picture.extension_hint.as_deref())?;

        if media_type.type_() != mime::IMAGE {
            warn!(%media_type, "embedded picture is not an image, dropping it");
            return None;
        }

        // The declared extension names the published file; the sniffed
        // format's canonical extension covers containers that declared
        // nothing.
        let extension = picture.extension_hint.clone().or_else(|| {
            ImageFormat::from_media_subtype(media_type.subtype().as_str())
                .map(|f| f.extension().to_owned())
        })?;

        Some(RawArt {
            media_type,
            bytes: picture.bytes.into(),
            extension,
        })
    }
}
