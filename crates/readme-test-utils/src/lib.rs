//! Shared test utilities for the readme-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures at increasing realism levels
//! - [`repo`] — [`repo::TestRepo`] builder for README sync scenarios

pub mod git;
pub mod repo;
