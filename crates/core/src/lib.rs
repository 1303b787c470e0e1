//! Core library for fxgen
//!
//! This crate implements the **Functional Core** of the fxgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! All functions in this crate are pure transformations with zero I/O:
//! HTML goes in, extracted fields come out; a conversation goes in, a prompt
//! string comes out. Fetching pages, calling the chat model, and executing
//! generated code all live in the `fxgen` binary crate (the Imperative
//! Shell).
//!
//! # Module Organization
//!
//! - [`conversation`]: the append-only log of role-tagged chat turns
//! - [`page`]: extraction of title/description/examples from documentation HTML
//! - [`prompt`]: assembly of the code-generation instruction
//! - [`extract`]: extraction of the first fenced code block from a model reply

pub mod conversation;
pub mod extract;
pub mod page;
pub mod prompt;

pub use conversation::{Conversation, Role, Turn};
pub use extract::{extract_script, NO_SOLUTION};
pub use page::{extract_fields, ExtractedFields, PageError};
pub use prompt::build_prompt;
