//! # Connect K
//!
//! A gravity-drop connection game on any `rows x cols` board with any run
//! length, plus a depth-bounded minimax player. Rendering and input are left
//! to callers; the crate exposes the board, the session and the search.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, alignment detection, game session, history
//! - [`ai`] — Search engine, leaf heuristics, agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
