//! # molscene Core Library
//!
//! A small, strongly-typed molecular scene model: atoms and bonds, a handful of
//! fixed reference molecules, and a flat record export that any rendering backend
//! (native, GPU, or a test harness) can consume.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so the data model never depends on
//! how it is drawn.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`MolecularModel`),
//!   reference molecules, the renderer-facing record export, and model file I/O.
//!
//! - **[`engine`]: The Scene Layer.** A renderer-agnostic scene that holds
//!   exported records, an orbit camera and per-element styles, and turns them into
//!   backend-neutral draw lists (`Frame`). The `SceneBackend` trait is the seam
//!   where a real renderer plugs in.
//!
//! - **[`workflows`]: The Public API.** High-level procedures that tie `core` and
//!   `engine` together, such as the auto-rotating view loop.

pub mod core;
pub mod engine;
pub mod workflows;
