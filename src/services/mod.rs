pub mod archetype_extractor;
pub mod image_resolver;
pub mod page_fetcher;
pub mod page_renderer;

pub use archetype_extractor::ArchetypeExtractor;
pub use image_resolver::ImageResolver;
pub use page_fetcher::PageFetcher;
pub use page_renderer::PageRenderer;
