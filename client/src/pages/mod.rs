//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates shared rendering to
//! `components`. Content arrays live in `crate::content`.

pub mod about;
pub mod information;
pub mod landing;
pub mod room_detail;
pub mod support;
