//! Utility functions shared by the library and the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file location and loading
//! - [`progress`] - Progress spinner (no-op without the `progress` feature)
//! - [`source`] - Reading corpus text from files and URLs
//! - [`tokenizer`] - Whitespace word splitting
//!
//! ## Key Functions
//!
//! ```
//! use streeng::utils::split_words;
//!
//! let words = split_words("It is a truth universally acknowledged");
//! assert_eq!(words.len(), 6);
//! ```

pub mod app_data;
pub mod progress;
pub mod source;
pub mod tokenizer;

pub use app_data::*;
pub use source::*;
pub use tokenizer::*;
