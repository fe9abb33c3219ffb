//! PDF page rasterization behind a backend trait
//!
//! This crate turns a raw-file URL into single-page RGBA images at a
//! requested zoom scale. It knows nothing about terminals, GitHub, or the
//! application's state machine; the consumer decides when to open, which
//! page to render, and what to do with the result.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │            DocumentProvider trait                 │
//! │  - open(url) → Arc<dyn DocumentBackend>          │
//! └──────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌────────────────────┐       fetch: reqwest
//!             │ HttpHayroProvider  │       decode: hayro
//!             └────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────────┐
//! │             DocumentBackend trait                 │
//! │  - page_count()                                   │
//! │  - render_page(RenderRequest) → RenderedPage     │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Rasterization is CPU-bound and synchronous; callers that must not block
//! wrap `render_page` in `tokio::task::spawn_blocking`.

pub mod document;
pub mod hayro_backend;
pub mod provider;

pub use document::{DocumentBackend, RenderRequest, RenderedPage, ViewerError};
pub use hayro_backend::HayroBackend;
pub use provider::{DocumentProvider, HttpHayroProvider};
