//! Ambient request deadline.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

/// Creates a layer that aborts requests running longer than `timeout`.
///
/// The handler future is dropped when the deadline passes, which cancels any
/// in-flight storage call, and the client receives `408 Request Timeout`.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}
