/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The fetched snapshot and its load status (catalog.rs)
/// - Title search over the snapshot (search.rs)
/// - The screen that ties them together (screen.rs)

pub mod catalog;
pub mod data;
pub mod screen;
pub mod search;
