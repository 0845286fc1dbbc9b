use std::sync::OnceLock;

use tracing::debug;

use resona_core::artifact::OwnerIdentity;
use resona_core::tags::FinalTags;

use crate::error::ExtractError;
use crate::extract::TagExtractor;
use crate::promote::ArtPromoter;
use crate::source::AudioSource;

type CachedTags = Result<Option<FinalTags>, ExtractError>;

/// An audio resource whose tags are computed on first demand and cached
/// for the resource's lifetime.
///
/// The first caller runs extraction and promotion; concurrent callers
/// block on the cell until that finishes, and every call afterwards
/// observes the identical cached value. Extraction, promotion and the
/// constructor side effect therefore run at most once per resource.
pub struct AudioResource {
    source: AudioSource,
    owner: OwnerIdentity,
    extractor: TagExtractor,
    promoter: ArtPromoter,
    cache: OnceLock<CachedTags>,
}

impl AudioResource {
    pub fn new(
        source: AudioSource,
        owner: OwnerIdentity,
        extractor: TagExtractor,
        promoter: ArtPromoter,
    ) -> Self {
        AudioResource {
            source,
            owner,
            extractor,
            promoter,
            cache: OnceLock::new(),
        }
    }

    /// `Ok(None)` is a stream that parsed but carried no tag block;
    /// `Err` is a stream or parse failure, scoped to this one resource.
    pub fn tags(&self) -> Result<Option<&FinalTags>, &ExtractError> {
        match self.cache.get_or_init(|| self.compute()) {
            Ok(tags) => Ok(tags.as_ref()),
            Err(e) => Err(e),
        }
    }

    fn compute(&self) -> CachedTags {
        debug!(title = %self.owner.title, "extracting audio tags");
        let Some(pre) = self.extractor.extract(&self.source)? else {
            return Ok(None);
        };
        let art = pre
            .art
            .and_then(|raw| self.promoter.promote(&self.owner, raw));
        Ok(Some(FinalTags {
            base: pre.base,
            art,
        }))
    }

    pub fn source(&self) -> &AudioSource {
        &self.source
    }

    pub fn owner(&self) -> &OwnerIdentity {
        &self.owner
    }
}
