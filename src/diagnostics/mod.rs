// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what the application did.
//!
//! Events are stored in a memory-bounded circular buffer held by
//! [`DiagnosticsLog`]. Warnings and errors are also echoed to stderr.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event, serializable with serde
//! - [`DiagnosticsLog`]: Synchronous recorder owned by the application state

mod buffer;
mod events;

use std::time::Duration;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, RebuildTrigger};

use crate::domain::transform::TransformParameters;
use crate::media::pipeline::{DerivationTiming, DerivedViews};

/// Synchronous diagnostics recorder.
///
/// All work happens on the UI thread, so events go straight into the buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Records an arbitrary event.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    pub fn log_image_loaded(&mut self, width: u32, height: u32, source: &str) {
        self.record(DiagnosticEventKind::ImageLoaded {
            width,
            height,
            source: source.to_string(),
        });
    }

    /// Records one pipeline run: the transform step and the composite rebuild.
    pub fn log_derivation(
        &mut self,
        params: &TransformParameters,
        views: &DerivedViews,
        timing: DerivationTiming,
        trigger: RebuildTrigger,
    ) {
        self.record(DiagnosticEventKind::TransformApplied {
            rotation: params.rotation.value(),
            scale: params.scale.value(),
            skew_x: params.skew_x.value(),
            skew_y: params.skew_y.value(),
            output_width: views.transformed.width(),
            output_height: views.transformed.height(),
            duration_ms: millis(timing.transform),
        });
        self.log_composites_rebuilt(views, timing.composite, trigger);
    }

    pub fn log_composites_rebuilt(
        &mut self,
        views: &DerivedViews,
        duration: Duration,
        trigger: RebuildTrigger,
    ) {
        self.record(DiagnosticEventKind::CompositesRebuilt {
            trigger,
            left_width: views.composites.left.width(),
            right_width: views.composites.right.width(),
            height: views.composites.left.height(),
            duration_ms: millis(duration),
        });
    }

    pub fn log_export_succeeded(&mut self, width: u32, height: u32) {
        self.record(DiagnosticEventKind::ExportSucceeded { width, height });
    }

    pub fn log_export_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[ERROR] Export failed: {message}");
        self.record(DiagnosticEventKind::ExportFailed { message });
    }

    /// Records a warning and echoes it to stderr.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[WARN] {message}");
        self.record(DiagnosticEventKind::Warning { message });
    }

    /// Records an error and echoes it to stderr.
    pub fn log_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[ERROR] {message}");
        self.record(DiagnosticEventKind::Error { message });
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.buffer.latest()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
