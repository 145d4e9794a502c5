//! # Crucible DQL
//!
//! Programmatic builder for Dgraph DQL query documents.
//!
//! Queries are assembled bottom-up from [`Attribute`]s, [`Param`]s,
//! [`Fragment`]s, [`VarBlock`]s and [`QueryBlock`]s, then rendered to text
//! either on one line or indented.
//!
//! ## Architecture
//!
//! - Entities: owned builder values, chained with `with_*` methods
//! - [`layout`]: entities lower themselves into a [`Segment`] tree
//! - [`render`]: [`CompactRenderer`] and [`PrettyRenderer`] fold that tree
//!   into text
//! - [`validate`]: opt-in checks for fragment spreads and duplicate names
//!
//! Criteria, directives and names are opaque strings. Their DQL validity is
//! the caller's responsibility; they are emitted verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use crucible_dql::{Attribute, Query, QueryBlock};
//!
//! let block = QueryBlock::new("me", r#"eq(name@en, "Steven Spielberg")"#)
//!     .with_directive("@filter(has(director.film))")
//!     .with_attributes([
//!         Attribute::new("name@en"),
//!         Attribute::new("director.film").with_attribute("name@en"),
//!     ]);
//!
//! let query = Query::new(block);
//!
//! assert_eq!(
//!     query.pretty_print(),
//!     r#"{
//!   me (func: eq(name@en, "Steven Spielberg")) @filter(has(director.film)) {
//!     name@en director.film {
//!       name@en
//!     }
//!   }
//! }"#
//! );
//! ```

pub mod attribute;
pub mod config;
mod error;
pub mod fragment;
pub mod layout;
pub mod param;
pub mod query;
pub mod query_block;
pub mod render;
pub mod validate;
pub mod var_block;

pub use attribute::Attribute;
pub use config::{RenderConfig, MAX_INDENT_WIDTH};
pub use error::{ValidationError, ValidationResult};
pub use fragment::Fragment;
pub use layout::{Layout, Segment};
pub use param::Param;
pub use query::Query;
pub use query_block::QueryBlock;
pub use render::{CompactRenderer, PrettyRenderer, QueryRenderer};
pub use validate::QueryValidator;
pub use var_block::VarBlock;
