//! Category Grid (catgrid)
//!
//! Paginated, multi-layout grid planner for editorial content feeds, with a
//! terminal preview.
//!
//! The library follows a Pure Core / Impure Shell split: `model`,
//! `validation`, `view_state`, `state` and `presentation` never perform I/O;
//! `source`, `config`, `logging` and `view` do.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod presentation;
pub mod report;
pub mod source;
pub mod state;
pub mod validation;
pub mod view;
pub mod view_state;
