//! # Fintag Web
//!
//! HTTP service around the category classifier.
//!
//! ## Quick Start
//!
//! ```bash
//! # Produce the initial model artifact
//! cargo run -p fintag-web --bin fintag-train
//!
//! # Start the service
//! cargo run -p fintag-web -- --port 5001
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/classify` | Classify a transaction description |
//! | POST | `/feedback` | Record a category correction |
//! | POST | `/retrain` | Kick off a background retrain |

pub mod routes;
pub mod state;

pub use state::AppState;
