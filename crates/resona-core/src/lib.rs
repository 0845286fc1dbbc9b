pub mod artifact;
pub mod media;
pub mod tags;

pub use artifact::{OwnerIdentity, SubArtifact, SubArtifactDescriptor};
pub use media::{AudioFormat, ImageFormat};
pub use tags::{BaseTags, FinalTags, PreTags, RawArt};
