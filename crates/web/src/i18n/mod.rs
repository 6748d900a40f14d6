// =============================================================================
// Mapea Web - Internationalization
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// =============================================================================

pub mod catalog;
pub mod context;
pub mod language;
pub mod resolver;
pub mod switch;

pub use catalog::{Catalog, I18nError, Namespace, SeoStrings};
pub use context::{use_i18n, I18n};
pub use language::{language_from_path, language_prefix, localized_path, Language};
pub use resolver::{resolve, translate, TranslationValue};
pub use switch::{bootstrap_redirect, preferred_language, switch_language};
