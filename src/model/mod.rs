//! Core data structures produced by loading and bond detection.
//!
//! This module provides the types that flow through `xyzbond`:
//!
//! - [`element`] – Chemical symbols and per-element reference constants.
//! - [`structure`] – Normalized atom sets with derived radii, colors, and extents.
//! - [`bonds`] – Connectivity graphs inferred from a structure's geometry.
//!
//! Geometry ([`Structure`]) and connectivity ([`BondSet`]) are separate values;
//! a structure never stores its own bonds.
//!
//! [`Structure`]: structure::Structure
//! [`BondSet`]: bonds::BondSet

pub mod bonds;
pub mod element;
pub mod structure;
