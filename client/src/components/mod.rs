//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are shared by pages: head metadata, the room gallery and the
//! site chrome around every route.

pub mod image_carousel;
pub mod seo_head;
pub mod site_chrome;
