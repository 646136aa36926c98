//! # Bookz Architecture
//!
//! Bookz is a UI-agnostic catalog library that happens to ship a CLI
//! client. The crate is split into layers, and code from `api.rs` inward
//! never touches stdout/stderr, never calls `std::process::exit`, and never
//! assumes a terminal:
//!
//! - **CLI** (`main.rs` + `args.rs`, binary only): argument parsing and
//!   terminal output. The only place that knows about exit codes.
//! - **API** ([`api::BookzApi`]): thin facade, one method per operation,
//!   generic over the storage backend.
//! - **Commands** ([`commands`]): the business logic — add, list, search,
//!   update, delete — as free functions that take a store and return a
//!   [`commands::CmdResult`] carrying records plus leveled user messages.
//! - **Storage** ([`store`]): the [`store::CatalogStore`] trait with a
//!   JSON-file production backend and an in-memory test backend.
//!
//! The persisted catalog is a single JSON document, `{"books": [...]}`,
//! loaded per operation and rewritten in full after every mutation. There
//! is deliberately no hidden process-wide catalog: each command loads,
//! mutates, and saves explicit state.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types ([`model::Book`], [`model::Status`])
//! - [`config`]: configuration management
//! - [`init`]: context setup for clients
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
