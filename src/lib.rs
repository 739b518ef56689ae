//! MCP Debate Server
//!
//! A Rust-based MCP server providing a practice debate opponent with
//! rule-based logical fallacy analysis. The opponent is fully scripted:
//! replies come from curated per-topic playbooks or generic fallback
//! templates, never from a language model.
//!
//! # Features
//!
//! - Five debate tools served over stdio
//! - Keyword and regex fallacy detection with fixed feedback wording
//! - Curated reply playbooks for five topics, fallbacks for the rest
//! - Paced opponent replies with a configurable delay
//!
//! # Quick Start
//!
//! ```bash
//! OPPONENT_DELAY_MS=1500 ./mcp-debate
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     stdin      ┌─────────────────┐
//! │ Claude Code │───────────────▶│   MCP Server    │
//! │ or Desktop  │◀───────────────│     (Rust)      │
//! └─────────────┘     stdout     └────────┬────────┘
//!                                         │
//!                                         ▼
//!                                ┌─────────────────┐
//!                                │  DebateEngine   │
//!                                │ detector +      │
//!                                │ selector +      │
//!                                │ session state   │
//!                                └─────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod opponent;
pub mod server;
pub mod session;
pub mod traits;
