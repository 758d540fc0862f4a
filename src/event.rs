// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bonding::Bond;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use trajectory::Trajectory;

/// A message from the parsing pipeline to its caller.
///
/// Serializes to the JSON shapes `{"type":"progress","message":..}`,
/// `{"type":"complete","frames":[[atom, ..], ..],"bonds":[{"atom1":..,"atom2":..}, ..]}` and
/// `{"type":"error","message":..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerEvent {
    Progress { message: String },
    Complete { frames: Trajectory, bonds: Vec<Bond> },
    Error { message: String },
}

impl WorkerEvent {
    pub fn progress(message: impl Into<String>) -> Self {
        WorkerEvent::Progress {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        WorkerEvent::Error {
            message: message.into(),
        }
    }

    /// `true` for `Complete` and `Error`, after which no further events are sent.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerEvent::Progress { .. })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Destination for pipeline events.
pub trait EventSink {
    fn emit(&mut self, event: WorkerEvent);
}

impl EventSink for Vec<WorkerEvent> {
    fn emit(&mut self, event: WorkerEvent) {
        self.push(event);
    }
}

/// Events sent after the receiver is gone are dropped; that is how a caller cancels.
impl EventSink for UnboundedSender<WorkerEvent> {
    fn emit(&mut self, event: WorkerEvent) {
        if self.send(event).is_err() {
            log::trace!("event receiver dropped, discarding event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_and_error_json() {
        assert_eq!(
            WorkerEvent::progress("Parsing").to_json().unwrap(),
            r#"{"type":"progress","message":"Parsing"}"#
        );
        assert_eq!(
            WorkerEvent::error("boom").to_json().unwrap(),
            r#"{"type":"error","message":"boom"}"#
        );
    }

    #[test]
    fn complete_json() {
        let event = WorkerEvent::Complete {
            frames: Trajectory::default(),
            bonds: vec![Bond::new(2, 1)],
        };
        assert_eq!(
            event.to_json().unwrap(),
            r#"{"type":"complete","frames":[],"bonds":[{"atom1":1,"atom2":2}]}"#
        );
    }

    #[test]
    fn terminal_events() {
        assert!(!WorkerEvent::progress("x").is_terminal());
        assert!(WorkerEvent::error("x").is_terminal());
        assert!(WorkerEvent::Complete {
            frames: Trajectory::default(),
            bonds: Vec::new()
        }
        .is_terminal());
    }
}

// End of File
