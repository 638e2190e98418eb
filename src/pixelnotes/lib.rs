//! # PixelNotes Architecture
//!
//! PixelNotes is a **UI-agnostic note-taking library**. The command-line
//! binary is just one thin client; nothing inside the library assumes a
//! terminal environment.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Notebook (notebook.rs)                                     │
//! │  - Owns the note collection and the active-note selection   │
//! │  - Create/update/delete/search, validation, persistence     │
//! │  - Returns structured Result types, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `notebook.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The notebook also takes its time source as a [`clock::Clock`]
//! collaborator, so tests control timestamps instead of sleeping.
//!
//! ## Persistence Model
//!
//! All notes live in a single JSON array stored under one fixed key
//! (`pixelnotes-v1`). Every mutation rewrites the whole blob; nothing is
//! ever partially written. See [`notebook`] for the exact contract.
//!
//! ## Module Overview
//!
//! - [`notebook`]: The notebook, the entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core data type ([`model::Note`])
//! - [`clock`]: Time source abstraction
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - `main.rs`/`args.rs`/`print.rs`: argument parsing and rendering for
//!   the binary (not part of the lib API)

pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod notebook;
pub mod store;
