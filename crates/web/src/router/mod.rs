// =============================================================================
// Mapea Web - Section Router
// =============================================================================
// Single-page section routing: `/{lang}/{section}` kept in step with scroll
// position and browser history.
// =============================================================================

pub mod hook;
pub mod machine;
pub mod section;

pub use hook::{use_section_router, RouterSubscriptions, SectionRouterHandle};
pub use machine::{SectionRouter, Visibility};
pub use section::{section_from_path, section_url, Section};
