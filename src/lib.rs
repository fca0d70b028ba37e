//! Start, list and tear down load generator workers on Google Compute Engine.
//!
//! Every operation is a `gcloud compute instances` call. Launches and deletions
//! are started in the background and never awaited; `list` is the only way to
//! observe their outcome.

pub mod cli;
pub mod executor;
pub mod provider;
