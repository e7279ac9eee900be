//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic (scroll math, filter matching, reveal styles, typing frames,
//! theme parsing)
//! lives here so it can be tested natively; `dom` holds the browser glue.

#[cfg(feature = "browser")]
pub mod dom;

pub mod filter;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;
