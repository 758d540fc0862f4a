// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Detection, parsing and bond inference, run back to back.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use bonding::{infer_bonds, Bond, BondConfig, BondConfigError};
use thiserror::Error;
use trajectory::{Diagnostics, Trajectory, TrajectoryError, TrajectoryFormat};

use crate::{EventSink, WorkerEvent};

pub const PARSING_MESSAGE: &str = "Parsing trajectory frames...";
pub const BONDING_MESSAGE: &str = "Calculating bonds for the first frame...";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error("Invalid bond configuration: {0}")]
    Config(#[from] BondConfigError),

    #[error("Unexpected failure while processing the trajectory: {0}")]
    Unexpected(String),
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct ParsedTrajectory {
    pub frames: Trajectory,
    /// Inferred from the first frame only; applies to every frame.
    pub bonds: Vec<Bond>,
    pub diagnostics: Diagnostics,
}

/// Runs the pipeline, sending progress events to `sink`, and returns the result without emitting
/// a terminal event.  Panics are not caught here; see [`run`].
pub fn process<S: EventSink + ?Sized>(
    content: &str,
    config: &BondConfig,
    sink: &mut S,
) -> Result<ParsedTrajectory, PipelineError> {
    config.validate()?;

    let start = Instant::now();
    sink.emit(WorkerEvent::progress(PARSING_MESSAGE));

    let format = trajectory::detect_format(content);
    log::info!("Detected {} input ({} bytes)", format, content.len());
    if format == TrajectoryFormat::Unknown {
        return Err(TrajectoryError::UnsupportedFormat.into());
    }

    let (frames, diagnostics) = trajectory::parse_as(content, format)?;
    for message in diagnostics.iter() {
        log::debug!("{}", message);
    }

    let Some(reference) = frames.first() else {
        return Err(TrajectoryError::EmptyTrajectory.into());
    };

    sink.emit(WorkerEvent::progress(BONDING_MESSAGE));
    let bonds = infer_bonds(reference, config);

    log::info!(
        "Processed {} frames ({} atoms in the first) and {} bonds in {}ms",
        frames.len(),
        reference.len(),
        bonds.len(),
        start.elapsed().as_millis()
    );

    Ok(ParsedTrajectory {
        frames,
        bonds,
        diagnostics,
    })
}

/// Runs the pipeline and always finishes with exactly one terminal event on `sink`: `Complete`
/// on success, `Error` on any failure, including a panic anywhere in the pipeline.
///
/// Returns the diagnostics of a successful run.
pub fn run<S: EventSink + ?Sized>(
    content: &str,
    config: &BondConfig,
    sink: &mut S,
) -> Option<Diagnostics> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| process(content, config, &mut *sink)))
        .unwrap_or_else(|payload| Err(PipelineError::Unexpected(panic_message(payload))));

    match outcome {
        Ok(parsed) => {
            sink.emit(WorkerEvent::Complete {
                frames: parsed.frames,
                bonds: parsed.bonds,
            });
            Some(parsed.diagnostics)
        }
        Err(err) => {
            log::warn!("Trajectory processing failed: {}", err);
            sink.emit(WorkerEvent::error(err.to_string()));
            None
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}


// End of File
