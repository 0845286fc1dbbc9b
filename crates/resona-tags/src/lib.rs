pub mod config;
pub mod decoder;
pub mod error;
pub mod extract;
pub mod promote;
pub mod resource;
pub mod sniff;
pub mod source;

pub use config::ExtractConfig;
pub use decoder::{DecodedPicture, DecodedTags, LoftyDecoder, TagDecoder};
pub use error::{ConfigError, ConstructionError, ExtractError};
pub use extract::TagExtractor;
pub use promote::{ArtPromoter, ResourceConstructor};
pub use resource::AudioResource;
pub use sniff::{ContentSniffer, MimeSniffer};
pub use source::{AudioSource, ByteStreamOpener, FileOpener};
