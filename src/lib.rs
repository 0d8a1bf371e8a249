//! Funguys - Main Library
//!
//! Funguys is a short-form video social client core backed entirely by a
//! local single-slot durable store and a generative-AI chat API.
//!
//! # Overview
//!
//! The heart of the crate is a reducer-driven state container:
//!
//! - **`shared`** - The entity model (users, videos, comments, messages),
//!   configuration, and the user-facing validation error taxonomy
//! - **`store`** - The state value, the pure reducer, derived view
//!   projections, the seed dataset, and the durable single-slot codec
//! - **`auth`** - Credential checks and form validation, all of which run
//!   before any action is dispatched
//! - **`assistant`** - The chat completion collaborator (Gemini REST client
//!   behind an async trait) and the two-commit exchange flow
//! - **`media`** - The cover-image extraction seam used by uploads
//!
//! # Control flow
//!
//! UI events build an [`store::Action`] → [`store::AppStore::dispatch`] runs
//! the reducer → the complete state is serialized to the durable slot →
//! [`store::projections`] recompute derived views for rendering. The only
//! asynchronous path is the assistant round trip, which commits its result
//! as a second message action when the network call resolves.
//!
//! # Error Handling
//!
//! Validation errors are values surfaced inline ([`shared::ValidationError`]);
//! collaborator failures become static fallbacks at the call site; persistence
//! failures are logged and absorbed. No reducer transition can fail.

pub mod assistant;
pub mod auth;
pub mod media;
pub mod shared;
pub mod store;
