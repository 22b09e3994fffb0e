//! Shared data shapes for strokes and users.
//!
//! DESIGN
//! ======
//! These types mirror the payloads exchanged with peers and persisted
//! locally, so serde round-trips stay lossless. [`FadingStroke`] keeps the
//! camelCase field names its wire form already uses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use crate::state::connection::ConnectionState;

/// A transient stroke segment that fades out after its duration elapses.
///
/// The renderer owns the lifecycle: it draws the segment with an opacity
/// derived from `start_time`/`duration` and drops it once fully faded (see
/// [`crate::util::fade`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FadingStroke {
    /// Segment start, horizontal canvas coordinate.
    pub x0: f64,
    /// Segment start, vertical canvas coordinate.
    pub y0: f64,
    /// Segment end, horizontal canvas coordinate.
    pub x1: f64,
    /// Segment end, vertical canvas coordinate.
    pub y1: f64,
    /// Stroke color (hex, e.g. `"#d94b4b"`).
    pub color: String,
    /// Brush size in canvas pixels.
    pub size: f64,
    /// Milliseconds since the Unix epoch when the segment was drawn.
    pub start_time: f64,
    /// Milliseconds the segment stays visible before fading out entirely.
    pub duration: f64,
}

/// A connected participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Peer identifier assigned by the session host.
    pub id: String,
    /// Display name chosen by the user.
    pub nickname: String,
    /// Presence color (hex).
    pub color: String,
    /// Current availability.
    #[serde(default)]
    pub status: UserStatus,
}

/// Availability shown next to a user in the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Present and participating.
    #[default]
    Online,
    /// Present but marked away/busy.
    Busy,
}
