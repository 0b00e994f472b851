//! # Statuary Architecture
//!
//! Statuary is a sculpture storefront as a **UI-agnostic library**: faceted
//! browsing of statues, artists and collections, a shopping cart with totals,
//! and procedurally assembled 3D statue models. The terminal client in `cli/`
//! is one way to drive it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders pages, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs ("7=2", "#CD853F" → typed values)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per page, pure logic over a loaded Catalog    │
//! │  - Built on search/, cart.rs and scene/                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                   │
//! │  - Abstract CatalogSource trait                             │
//! │  - BuiltinCatalog, JsonCatalog, InMemoryCatalog (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or exits. The only
//! file access is reading a JSON catalog and the config file.
//!
//! Nothing is mutated in place: the catalog is read-only, and cart and
//! profile edits return new values, leaving the previous snapshot intact.
//!
//! ## Testing Strategy
//!
//! 1. **Core modules** (`search/`, `cart.rs`, `scene/`): unit tests of the
//!    filtering, totals and geometry rules.
//! 2. **Commands**: page assembly and messages, run against the built-in
//!    catalog or small in-memory fixtures.
//! 3. **API**: input normalization and dispatch.
//! 4. **CLI** (`tests/`): the binary end to end, with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: page logic
//! - [`search`]: query state, predicates and facet options
//! - [`cart`]: cart lines, functional updates and totals
//! - [`scene`]: statue assembly, animation and the showcase carousel
//! - [`catalog`]: data sources
//! - [`model`]: catalog records and [`model::Money`]
//! - [`config`]: persisted settings
//! - [`init`]: context setup for clients
//! - [`error`]: error types

pub mod api;
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod scene;
pub mod search;
