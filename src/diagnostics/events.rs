// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused the composites to be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuildTrigger {
    /// A new image was loaded.
    ImageLoaded,
    /// A slider moved.
    ParameterChanged,
    /// A drag gesture ended.
    DragReleased,
}

/// A diagnostic event with wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// An image was decoded and became the current original.
    ImageLoaded {
        width: u32,
        height: u32,
        /// Where the load came from (`dialog`, `cli`).
        source: String,
    },

    /// The geometry engine produced a new transformed image.
    TransformApplied {
        rotation: f32,
        scale: f32,
        skew_x: f32,
        skew_y: f32,
        output_width: u32,
        output_height: u32,
        duration_ms: f64,
    },

    /// Both mirror composites were rebuilt.
    CompositesRebuilt {
        trigger: RebuildTrigger,
        left_width: u32,
        right_width: u32,
        height: u32,
        duration_ms: f64,
    },

    /// The combined image was written.
    ExportSucceeded { width: u32, height: u32 },

    /// Writing the combined image failed.
    ExportFailed { message: String },

    /// Non-critical warning.
    Warning { message: String },

    /// An operation failed and the user was told.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_uses_current_time() {
        let before = Utc::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "late".into(),
        });
        let after = Utc::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn warning_serializes_with_type_tag() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::Warning {
                message: "test warning".to_string(),
            },
            timestamp,
        );

        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"warning\""));
        assert!(json.contains("\"message\":\"test warning\""));
        assert!(json.contains("2024-05-01T12:00:00Z"));
    }

    #[test]
    fn composites_rebuilt_deserializes_from_json() {
        let json = concat!(
            r#"{"type":"composites_rebuilt","trigger":"drag_released","#,
            r#""left_width":100,"right_width":102,"height":60,"duration_ms":1.5}"#
        );
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match kind {
            DiagnosticEventKind::CompositesRebuilt {
                trigger,
                left_width,
                right_width,
                ..
            } => {
                assert_eq!(trigger, RebuildTrigger::DragReleased);
                assert_eq!(left_width, 100);
                assert_eq!(right_width, 102);
            }
            other => panic!("expected CompositesRebuilt, got {other:?}"),
        }
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::ExportSucceeded {
            width: 202,
            height: 60,
        });
        let json = serde_json::to_string(&event).expect("serialization should succeed");
        let back: DiagnosticEvent =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, event);
    }
}
