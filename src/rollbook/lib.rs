//! # Rollbook Architecture
//!
//! Rollbook keeps a small list of student records in a plain text file and turns their
//! marks into totals, percentages, grades and report cards. The library holds all of the
//! rules; the `rollbook` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive menu                     │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (api.rs, commands/*.rs)                     │
//! │  - Input checks, user-facing messages                       │
//! │  - Returns `Result<CmdResult>`                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs)                                         │
//! │  - Ordered students, uniqueness, topper, sorting            │
//! │  - Saves after every change, rolls back if the save fails   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) + Line Codec (codec.rs)                   │
//! │  - RecordStore trait: FileStore, InMemoryStore              │
//! │  - One delimited line per student, atomic file replace      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Fields
//!
//! A [`model::Student`] stores its marks and derives total, percentage, grade and
//! pass/fail from them. The derived values are written to disk for people reading the
//! file, but they are always recomputed on load.
//!
//! ## Testing Strategy
//!
//! - **Model, codec, roster, commands**: unit tests next to the code, running against
//!   `InMemoryStore` so no filesystem is needed.
//! - **FileStore**: unit tests in temp directories.
//! - **Binary**: `tests/` drives the real executable with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: One function per user-facing operation
//! - [`roster`]: The in-memory collection bound to a store
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Line encoding and decoding
//! - [`model`]: `Student`, `Grade` and the grading rules
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod store;
