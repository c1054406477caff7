//! Job pipeline for the Starforge universe generator.
//!
//! This crate owns the Job Record lifecycle: enqueueing, atomic claiming,
//! progress reporting, terminal transitions, and the polling worker that
//! drives universe generation.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `starforge-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Job state-machine errors.
//! - [`job_store`] -- [`JobStore`] trait and the shared transition rules.
//! - [`memory`] -- [`MemoryJobStore`], an in-process store for tests and
//!   single-process runs.
//! - [`queue`] -- The enqueue and status-polling surface used by the HTTP
//!   layer.
//! - [`worker`] -- The polling [`Worker`] loop.
//!
//! [`JobStore`]: job_store::JobStore
//! [`MemoryJobStore`]: memory::MemoryJobStore
//! [`Worker`]: worker::Worker

pub mod config;
pub mod error;
pub mod job_store;
pub mod memory;
pub mod queue;
pub mod worker;

pub use config::{ConfigError, StarforgeConfig};
pub use error::JobError;
pub use job_store::JobStore;
pub use memory::MemoryJobStore;
pub use queue::{enqueue_job, get_job_status};
pub use worker::{PollOutcome, Worker, WorkerError};
