//! Error types for engine boundaries.
//!
//! Expected failure conditions are reported through these results rather
//! than panics. Animation arithmetic itself is closed over its domain and
//! has no failure path.

/// Misconfiguration detected at engine construction. Fatal: the engine
/// refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The strip length is zero.
    NoPixels,
    /// Minimum brightness exceeds maximum, or maximum exceeds 100.
    BrightnessRange,
    /// An indicator references a pixel outside the strip.
    IndicatorOutOfRange,
}

/// A frame write to the strip failed. Non-fatal; the frame is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportError;

/// Switching the external power rail failed. Non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailError;

/// Failure from the non-volatile settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record stored under the requested key.
    NotFound,
    /// The stored payload does not match the current record layout.
    SizeMismatch,
    /// The store rejected the operation.
    Failed,
}

/// Rejection at the command boundary. State is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A value was outside its permitted range.
    InvalidArgument,
    /// The engine has no usable transport attached.
    NotReady,
    /// The command queue is full; the command was not enqueued.
    QueueFull,
}
