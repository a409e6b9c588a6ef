//! Hard-coded site content.
//!
//! DESIGN
//! ======
//! Pages render these arrays directly. Everything here is `'static` data so
//! the same values are produced during SSR and after hydration.

pub mod about;
pub mod faq;
pub mod information;
pub mod landing;
pub mod room;

/// Brand name used in page titles and Open Graph tags.
pub const SITE_NAME: &str = "PhòngTốt";
