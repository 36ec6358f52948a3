//! Hack Translator for the `Nand2Tetris` course
//!
//! This crate provides a two-pass Hack assembler ([`assembler`]) and a Jack
//! language tokenizer/parser/XML-serializer front end ([`jack`]), covering
//! the HACK and Jack pieces of the Nand2Tetris toolchain.
//!
//! # Architecture
//!
//! - [`assembler`]: two-pass HACK assembly translation.
//!   - [`assembler::cleaner`]: comment/whitespace stripping.
//!   - [`assembler::instructions`]: zero-copy instruction classification.
//!   - [`assembler::code`]: binary encoding using perfect hash functions (PHF).
//!   - [`assembler::symbol_table`]: symbol management with predefined symbols.
//! - [`jack`]: Jack language front end.
//!   - [`jack::tokenizer`]: character-level lexical analysis.
//!   - [`jack::parser`]: recursive-descent parsing into a [`jack::Node`] tree.
//!   - [`jack::serializer`]: canonical XML rendering of tokens and trees.
//! - [`macros`]: compile-time optimizations and utilities shared by both
//!   front ends.
//!
//! # Performance Optimizations
//!
//! - **PHF (Perfect Hash Functions)**: O(1) compile-time hash maps for
//!   instruction and keyword lookup.
//! - **Zero-copy parsing**: string slices avoid allocation on the assembler's
//!   hot path.
//! - **Link-time optimization (LTO)**: enabled in the release profile.
//!
//! # Example
//!
//! ```rust
//! use hack_translator::assembler;
//!
//! let lines = vec!["@2".to_string(), "D=A".to_string()];
//! let out = assembler::assemble(&lines).unwrap();
//! assert_eq!(out, vec!["0000000000000010", "1110110000010000"]);
//! ```
//!
//! ```rust
//! use hack_translator::jack;
//!
//! let mut xml = Vec::new();
//! jack::compile_to_xml("class Main {\n}\n", &mut xml).unwrap();
//! assert!(String::from_utf8(xml).unwrap().starts_with("<class>\n"));
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

#[macro_use]
pub mod macros;

pub mod assembler;
pub mod jack;
