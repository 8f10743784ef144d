use std::time::Duration;

/// Values mirrored from the media element for the transport controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportState {
    /// Last reported (or requested) playback position.
    pub current_time: Duration,
    /// Source length; zero until metadata arrives, and for live streams.
    pub duration: Duration,
    /// Linear volume in `0.0..=1.0`.
    pub volume: f32,
    pub is_muted: bool,
}

impl Default for TransportState {
    fn default() -> Self {
        Self {
            current_time: Duration::ZERO,
            duration: Duration::ZERO,
            volume: 1.0,
            is_muted: false,
        }
    }
}

impl TransportState {
    /// Whether the mute indicator should show as muted.
    pub fn shows_muted(&self) -> bool {
        self.is_muted || self.volume == 0.0
    }

    /// Time left until the end of the source, zero when unknown.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.current_time)
    }

    /// Fraction of the source played so far, for the seek gauge.
    pub fn progress_ratio(&self) -> f64 {
        if self.duration.is_zero() {
            0.0
        } else {
            (self.current_time.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }
}

/// Format a duration as `M:SS` (minutes unpadded, seconds truncated).
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
