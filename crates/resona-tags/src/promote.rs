use std::sync::Arc;

use tracing::warn;

use resona_core::ImageFormat;
use resona_core::artifact::{OwnerIdentity, SubArtifact, SubArtifactDescriptor};
use resona_core::tags::RawArt;

use crate::config::ExtractConfig;
use crate::error::ConstructionError;

/// Capability that registers a new sub-artifact with the owner's
/// publishing pipeline. Invoked at most once per audio resource.
pub trait ResourceConstructor: Send + Sync {
    fn create(&self, descriptor: SubArtifactDescriptor) -> Result<SubArtifact, ConstructionError>;
}

/// Classifies a raw picture and requests a managed sub-artifact for it.
pub struct ArtPromoter {
    constructor: Arc<dyn ResourceConstructor>,
    lazy_publish: bool,
}

impl ArtPromoter {
    pub fn new(constructor: Arc<dyn ResourceConstructor>, config: &ExtractConfig) -> Self {
        ArtPromoter {
            constructor,
            lazy_publish: config.lazy_publish,
        }
    }

    /// `None` means the picture was dropped (unregistered format or
    /// failed construction), never that the owning call should fail.
    pub fn promote(&self, owner: &OwnerIdentity, raw: RawArt) -> Option<SubArtifact> {
        if ImageFormat::from_media_subtype(raw.media_type.subtype().as_str()).is_none() {
            warn!(media_type = %raw.media_type, "unregistered art format, skipping promotion");
            return None;
        }

        let filename = owner.art_filename(&raw.extension);
        let descriptor = SubArtifactDescriptor {
            target_path: owner.sub_resource_base.join(&filename),
            rel_target_filename: filename,
            media_type: raw.media_type,
            lazy_publish: self.lazy_publish,
            open: SubArtifactDescriptor::buffered(raw.bytes),
        };

        match self.constructor.create(descriptor) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                warn!(error = %e, "sub-artifact construction failed, keeping tags without art");
                None
            }
        }
    }
}
