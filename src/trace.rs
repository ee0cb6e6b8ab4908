//! Structured trace events
//!
//! The equalizer never logs inline. Tables and shapers report what happened
//! through an injected [`TraceSink`]; [`TracingSink`] forwards to `tracing`,
//! [`NullSink`] drops everything.

use std::fmt;
use std::sync::Arc;

/// Something worth recording about the equalizer
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A parameter assignment was accepted
    ParameterSet { param_index: usize, value: f32 },
    /// A parameter assignment was rejected with `INVALID_PARAMETER`
    ParameterRejected {
        param_index: usize,
        value: f32,
        reason: &'static str,
    },
    /// A shaper was created from a table snapshot
    InstanceCreated { instance_id: String },
    /// One spectral block was shaped
    BlockProcessed { bin_count: usize, zeroed: usize },
}

/// Receiver for trace events
///
/// `record` may be called from the audio thread; implementations must not
/// block.
pub trait TraceSink: Send + Sync + fmt::Debug {
    fn record(&self, event: &TraceEvent);
}

/// Shared handle to a sink
pub type SharedSink = Arc<dyn TraceSink>;

/// Forwards events to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent) {
        match event {
            TraceEvent::ParameterSet { param_index, value } => {
                tracing::debug!(param_index, value, "parameter set");
            }
            TraceEvent::ParameterRejected {
                param_index,
                value,
                reason,
            } => {
                tracing::warn!(param_index, value, reason, "parameter rejected");
            }
            TraceEvent::InstanceCreated { instance_id } => {
                tracing::debug!(%instance_id, "shaper instance created");
            }
            TraceEvent::BlockProcessed { bin_count, zeroed } => {
                tracing::trace!(bin_count, zeroed, "block processed");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _event: &TraceEvent) {}
}

/// Default sink used when none is injected
pub fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}
