use mime::Mime;

use resona_core::ImageFormat;

/// Capability that determines a picture's media type. Byte content wins
/// over the extension hint whenever the two disagree.
pub trait MimeSniffer: Send + Sync {
    fn sniff(&self, bytes: &[u8], extension_hint: Option<&str>) -> Option<Mime>;
}

/// Sniffer that inspects the magic bytes first and only falls back to
/// the extension-derived candidate set when the content is not a
/// recognizable image.
#[derive(Debug, Clone, Default)]
pub struct ContentSniffer;

impl MimeSniffer for ContentSniffer {
    fn sniff(&self, bytes: &[u8], extension_hint: Option<&str>) -> Option<Mime> {
        if let Some(format) = image::guess_format(bytes).ok().and_then(classify) {
            return Some(format.mime());
        }
        extension_hint.and_then(|ext| mime_guess::from_ext(ext).first())
    }
}

fn classify(format: image::ImageFormat) -> Option<ImageFormat> {
    match format {
        image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
        image::ImageFormat::Png => Some(ImageFormat::Png),
        image::ImageFormat::Gif => Some(ImageFormat::Gif),
        image::ImageFormat::WebP => Some(ImageFormat::Webp),
        image::ImageFormat::Bmp => Some(ImageFormat::Bmp),
        image::ImageFormat::Tiff => Some(ImageFormat::Tiff),
        _ => None,
    }
}
