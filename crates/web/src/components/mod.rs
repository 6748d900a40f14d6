// =============================================================================
// Mapea Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Language Switcher
// 3. Footer
// =============================================================================

pub mod footer;
pub mod language_switcher;
pub mod nav;

pub use footer::Footer;
pub use language_switcher::{LanguageSwitcher, SwitcherVariant};
pub use nav::SiteNav;
