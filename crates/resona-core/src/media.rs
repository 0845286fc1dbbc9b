use std::collections::HashMap;

use mime::Mime;
use once_cell::sync::Lazy;

/// Closed set of audio containers the pipeline accepts. Anything not in
/// the registry is "unsupported", never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Aac,
    Flac,
    Ogg,
}

static AUDIO_FORMATS_BY_SUBTYPE: Lazy<HashMap<&'static str, AudioFormat>> = Lazy::new(|| {
    HashMap::from([
        ("mpeg", AudioFormat::Mp3),
        ("aac", AudioFormat::Aac),
        ("flac", AudioFormat::Flac),
        ("ogg", AudioFormat::Ogg),
    ])
});

impl AudioFormat {
    /// Looks up the format for a declared media subtype, e.g. `"mpeg"`
    /// for `audio/mpeg`.
    pub fn from_media_subtype(subtype: &str) -> Option<AudioFormat> {
        AUDIO_FORMATS_BY_SUBTYPE.get(subtype).copied()
    }
}

/// Image formats an embedded picture may be promoted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Tiff,
}

static IMAGE_FORMATS_BY_SUBTYPE: Lazy<HashMap<&'static str, ImageFormat>> = Lazy::new(|| {
    HashMap::from([
        ("jpeg", ImageFormat::Jpeg),
        ("png", ImageFormat::Png),
        ("gif", ImageFormat::Gif),
        ("webp", ImageFormat::Webp),
        ("bmp", ImageFormat::Bmp),
        ("tiff", ImageFormat::Tiff),
    ])
});

impl ImageFormat {
    pub fn from_media_subtype(subtype: &str) -> Option<ImageFormat> {
        IMAGE_FORMATS_BY_SUBTYPE.get(subtype).copied()
    }

    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn mime(self) -> Mime {
        match self {
            ImageFormat::Jpeg => mime::IMAGE_JPEG,
            ImageFormat::Png => mime::IMAGE_PNG,
            ImageFormat::Gif => mime::IMAGE_GIF,
            ImageFormat::Webp => "image/webp".parse().expect("valid MIME type"),
            ImageFormat::Bmp => mime::IMAGE_BMP,
            ImageFormat::Tiff => "image/tiff".parse().expect("valid MIME type"),
        }
    }

    /// Canonical filename extension, used when the tag container
    /// declared none for its picture.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_format_lookup() {
        assert_eq!(AudioFormat::from_media_subtype("mpeg"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_media_subtype("flac"), Some(AudioFormat::Flac));
        assert_eq!(AudioFormat::from_media_subtype("ogg"), Some(AudioFormat::Ogg));
        assert_eq!(AudioFormat::from_media_subtype("aac"), Some(AudioFormat::Aac));
    }

    #[test]
    fn audio_format_unknown_subtype_is_none() {
        assert_eq!(AudioFormat::from_media_subtype("wav"), None);
        assert_eq!(AudioFormat::from_media_subtype(""), None);
    }

    #[test]
    fn image_format_lookup() {
        assert_eq!(ImageFormat::from_media_subtype("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_media_subtype("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_media_subtype("x-icon"), None);
    }

    #[test]
    fn image_format_mime_and_extension() {
        assert_eq!(ImageFormat::Jpeg.mime(), mime::IMAGE_JPEG);
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Webp.mime().essence_str(), "image/webp");
        assert_eq!(ImageFormat::Tiff.extension(), "tif");
    }
}
