//! Text Normalization Module
//!
//! Defines what counts as "the same word" for the whole service.
//!
//! ## Contract
//! - **Lower-casing**: input is lower-cased before classification.
//! - **Stripping**: every character outside `[a-z ]` is removed (digits, punctuation,
//!   tabs, newlines and non-ASCII letters alike).
//! - **Splitting**: the remaining text is split on runs of spaces; empty tokens vanish.
//!
//! Both entry points are pure and idempotent, so keys stored by ingestion and keys
//! looked up by queries always agree.

pub mod tokenizer;

#[cfg(test)]
mod tests;
