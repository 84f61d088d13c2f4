//! # Engine Module
//!
//! Turns exported atom and bond records into draw lists.
//!
//! ## Overview
//!
//! A renderer is anything implementing [`backend::SceneBackend`]: it is cleared, fed atom and
//! bond records, spun about the vertical axis, and asked to render. [`scene::Scene`] is the
//! in-memory implementation; it produces a [`frame::Frame`] of sphere and capsule instances
//! that a GPU or a foreign renderer can consume directly.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Camera distance, radii, clouds, labels and their builder
//! - **Camera** ([`camera`]) - Orbit camera circling the scene in the XZ plane
//! - **Styles** ([`style`]) - Per-element radius and color table
//! - **Frames** ([`frame`]) - `#[repr(C)]` instance data produced by a render
//! - **Backends** ([`backend`], [`scene`]) - The renderer interface and its in-memory implementation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Scene-level error types

pub mod backend;
pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod progress;
pub mod scene;
pub mod style;
