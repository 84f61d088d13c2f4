//! # Workflows Module
//!
//! High-level entry points that drive a complete rendering session.
//!
//! - **View Workflow** ([`view`]) - Loads a model into a scene and renders a spinning sequence
//!   of frames, reporting progress along the way.

pub mod view;
