//! Local interaction state for pages.
//!
//! DESIGN
//! ======
//! Each model is a plain value held in an `RwSignal` by its page, so the
//! transition rules are testable without a reactive runtime.

pub mod carousel;
pub mod faq_search;
