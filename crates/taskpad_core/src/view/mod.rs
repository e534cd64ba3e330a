//! Derived display view entry points.
//!
//! # Responsibility
//! - Expose the pure filtered/sorted projection of the canonical list.
//! - Keep view shaping inside core, away from the presentation layer.

pub mod derive;
