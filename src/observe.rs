//! The recorder seam instrumentation plugs into.
//!
//! Lowcard never records anything itself; an instrumentation subsystem
//! consumes descriptors through this narrow interface. The crate ships two
//! implementations: [`TracingRecorder`], which replays observations as
//! `tracing` events, and [`NoopRecorder`] for callers that wire
//! instrumentation off. Exporters and metrics backends live elsewhere.

use std::time::Instant;

use crate::descriptor::{ObservationKind, TagKey};

/// One in-flight observation.
pub trait ObservationHandle {
    /// Attach a tag. Implementations only accept keys declared for the
    /// kind this handle was started from; anything else is dropped.
    fn tag(&mut self, key: &TagKey, value: &str);

    /// Mark the observation as failed with a cause.
    fn error(&mut self, cause: &dyn std::error::Error);

    /// Finish the observation.
    fn stop(self)
    where
        Self: Sized;
}

/// Opens observations for declared kinds.
pub trait Recorder {
    type Handle: ObservationHandle;

    /// Start an observation of the given kind.
    fn start(&self, kind: &'static ObservationKind) -> Self::Handle;
}

/// Recorder that replays observations as structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    type Handle = TracingObservation;

    fn start(&self, kind: &'static ObservationKind) -> TracingObservation {
        tracing::trace!(observation = kind.name(), "observation started");
        TracingObservation {
            kind,
            started: Instant::now(),
            tags: Vec::with_capacity(kind.low_cardinality_keys().len()),
            failed: false,
        }
    }
}

/// Handle produced by [`TracingRecorder`].
#[derive(Debug)]
pub struct TracingObservation {
    kind: &'static ObservationKind,
    started: Instant,
    tags: Vec<(&'static str, String)>,
    failed: bool,
}

impl TracingObservation {
    /// Tags accepted so far, in the order they were attached.
    #[cfg(test)]
    pub fn recorded_tags(&self) -> &[(&'static str, String)] {
        &self.tags
    }
}

impl ObservationHandle for TracingObservation {
    fn tag(&mut self, key: &TagKey, value: &str) {
        if !self.kind.declares(key) {
            // Undeclared keys would open an unbounded dimension downstream.
            tracing::warn!(
                observation = self.kind.name(),
                key = key.key(),
                "dropping tag key not declared for this observation kind"
            );
            return;
        }
        self.tags.push((key.key(), value.to_string()));
    }

    fn error(&mut self, cause: &dyn std::error::Error) {
        self.failed = true;
        tracing::warn!(
            observation = self.kind.name(),
            error = %cause,
            "observation failed"
        );
    }

    fn stop(self) {
        tracing::debug!(
            observation = self.kind.name(),
            contextual_name = self.kind.contextual_name(),
            elapsed_us = self.started.elapsed().as_micros() as u64,
            failed = self.failed,
            tags = ?self.tags,
            "observation stopped"
        );
    }
}

/// Recorder that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

/// Handle produced by [`NoopRecorder`].
#[derive(Debug)]
pub struct NoopObservation;

impl Recorder for NoopRecorder {
    type Handle = NoopObservation;

    fn start(&self, _kind: &'static ObservationKind) -> NoopObservation {
        NoopObservation
    }
}

impl ObservationHandle for NoopObservation {
    fn tag(&mut self, _key: &TagKey, _value: &str) {}

    fn error(&mut self, _cause: &dyn std::error::Error) {}

    fn stop(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{FUNCTION_INVOCATION, FUNCTION_NAME};

    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_declared_tag_is_recorded() {
        init_test_tracing();
        let recorder = TracingRecorder;
        let mut obs = recorder.start(&FUNCTION_INVOCATION);

        obs.tag(&FUNCTION_NAME, "uppercase");

        assert_eq!(
            obs.recorded_tags(),
            &[("spring.cloud.function.definition", "uppercase".to_string())]
        );
        obs.stop();
    }

    #[test]
    fn test_undeclared_tag_is_dropped() {
        init_test_tracing();
        let recorder = TracingRecorder;
        let mut obs = recorder.start(&FUNCTION_INVOCATION);

        obs.tag(&TagKey::new("spring.cloud.function.request_id"), "abc-123");

        assert!(obs.recorded_tags().is_empty());
        obs.stop();
    }

    #[test]
    fn test_error_then_stop_does_not_panic() {
        init_test_tracing();
        let recorder = TracingRecorder;
        let mut obs = recorder.start(&FUNCTION_INVOCATION);

        let cause = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        obs.error(&cause);
        obs.stop();
    }

    #[test]
    fn test_noop_recorder_accepts_full_lifecycle() {
        let recorder = NoopRecorder;
        let mut obs = recorder.start(&FUNCTION_INVOCATION);
        obs.tag(&FUNCTION_NAME, "uppercase");
        obs.stop();
    }
}
