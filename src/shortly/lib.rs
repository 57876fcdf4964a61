//! # Shortly Architecture
//!
//! Shortly is a **UI-agnostic URL-shortening library** with accounts. The `shortly` binary is
//! one client of it; nothing below the CLI knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prompts, prints, sets exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs, returns structured Result types       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Credentials: register, login (with legacy migration)     │
//! │  - Links: shorten, list, delete                             │
//! │  - Session: restore, logout                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, batched writes                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions Are Values
//!
//! There is no ambient "current user". Logging in yields a [`model::Session`], and every link
//! operation takes one as an argument. Clients persist nothing themselves: the login command
//! stores a token, and [`api::ShortlyApi::restore_session`] turns it back into a `Session`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`User`, `StoredPassword`, `ShortLink`, `Session`)
//! - [`links`]: URL normalization and short-code generation
//! - [`digest`]: Password digests
//! - [`token`]: Session token encoding
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod digest;
pub mod error;
pub mod links;
pub mod logging;
pub mod model;
pub mod store;
pub mod token;
