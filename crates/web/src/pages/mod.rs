// =============================================================================
// Mapea Web - Page Components
// =============================================================================

pub mod landing;

pub use landing::LandingPage;
