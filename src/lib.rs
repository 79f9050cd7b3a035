//! # Transweep
//!
//! One-shot maintenance tool for a media-management cloud account: force an
//! `unsafe_update` of a named transformation, confirm the new definition,
//! then enumerate and purge every derived resource cached under the old
//! definition so it regenerates.
//!
//! ## Modules
//!
//! - `api` - Narrow trait over the three admin API operations, with a real
//!   reqwest-backed client and a scripted mock for tests
//! - `config` - Credentials from `CLOUDINARY_URL` plus the injected workflow
//!   settings (name, definition, batch size, page size)
//! - `error` - Error taxonomy: missing credential, structured API error,
//!   transport, local configuration
//! - `interaction` - Operator-facing console output behind a trait
//! - `workflow` - The four-step sequence: update, verify, enumerate, purge

pub mod api;
pub mod config;
pub mod error;
pub mod interaction;
pub mod workflow;
