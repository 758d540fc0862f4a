// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # trajview
//!
//! Turns the text of a molecular-dynamics trajectory into frames of atoms plus a bond topology.
//! The work runs on a dedicated [`ParserWorker`] thread that reports back over a channel with
//! zero or more progress events followed by exactly one terminal event (see [`WorkerEvent`]).
//! [`pipeline::run`] is the same sequence without the thread, writing into any [`EventSink`].

pub mod config;
mod event;
pub mod pipeline;
mod worker;

pub use config::{AppConfig, ConfigError};
pub use event::{EventSink, WorkerEvent};
pub use pipeline::{ParsedTrajectory, PipelineError};
pub use worker::ParserWorker;

pub use bonding::{Bond, BondConfig};
pub use trajectory::{Atom, Frame, Trajectory, TrajectoryFormat};

pub const APP_NAME: &str = "trajview";

/// Module paths whose log records are shown by default.
pub const LOG_CRATES: &[&str] = &[
    env!("CARGO_PKG_NAME"),
    "trajview_bonding",
    "trajview_logging",
    "trajview_trajectory",
];

// End of File
