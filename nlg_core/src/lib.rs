//! # Gazetteer NLG Core
//!
//! The text-generation "brain" of Gazetteer. This crate reads typed
//! statements through the `fact_base` access contract, picks the winning
//! value per semantic slot, composes abstract phrase trees, and renders a
//! short description plus an HTML infobox fragment for a place entity.
//!
//! ## Core Components
//!
//! - **facts**: fact selection and most-recent-wins value ranking
//! - **phrase**: composable grammatical-structure trees and the shared lexicon
//! - **grammar**: grammar variants and the pluggable linearizer contract
//! - **render**: lazy HTML-fragment streams for cities and countries
//!
//! ## Design Philosophy
//!
//! - **Fact-Driven**: every sentence part comes from a ranked statement;
//!   missing facts shrink the output instead of producing placeholders
//! - **Grammar-Agnostic**: the renderer never inspects the linearizer;
//!   variant-specific choices hang off one capability flag
//! - **Streaming**: output is a finite, single-pass fragment sequence

pub mod error;
pub mod facts;
pub mod grammar;
pub mod phrase;
pub mod render;

pub use error::*;
pub use facts::*;
pub use grammar::*;
pub use phrase::*;
pub use render::*;
