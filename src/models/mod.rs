pub mod archetype;
pub mod card;

pub use archetype::{ArchetypeRecord, ImagePathMap, NO_DESCRIPTION, NO_IMAGE_TITLE, NO_TITLE};
pub use card::{CardImageUris, NamedCard};
