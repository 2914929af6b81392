use std::str::FromStr;

use crate::foundation::error::{PixmotionError, PixmotionResult};

/// Playback policy mapping `(delay, duration, frame)` to progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl Direction {
    pub fn is_alternate(self) -> bool {
        matches!(self, Self::Alternate | Self::AlternateReverse)
    }

    /// Flips overall progress. Unrelated to [`Curve::reverse`](crate::Curve::reverse).
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse | Self::AlternateReverse)
    }

    pub fn frame_count(self, delay: usize, duration: usize) -> usize {
        if self.is_alternate() {
            2 * (delay + duration)
        } else {
            delay + duration + delay
        }
    }

    /// Progress at `frame`. Frames past the last boundary hold `fill`.
    ///
    /// A ramp of `duration` frames covers `0.0..=1.0` inclusively, so its first frame is
    /// exactly the start and its last frame exactly the end. A one-frame ramp sits at the end.
    pub fn progress(self, delay: usize, duration: usize, fill: f64, frame: usize) -> f64 {
        let idx1 = delay;
        let idx2 = idx1 + duration;
        let idx3 = idx2 + delay;
        let idx4 = idx3 + duration;

        let ramp = |step: usize| {
            if duration > 1 {
                step as f64 / (duration - 1) as f64
            } else {
                1.0
            }
        };

        let progress = if frame < idx1 {
            0.0
        } else if frame < idx2 {
            ramp(frame - idx1)
        } else if frame < idx3 {
            1.0
        } else if self.is_alternate() && frame < idx4 {
            1.0 - ramp(frame - idx3)
        } else {
            fill
        };

        if self.is_reverse() {
            1.0 - progress
        } else {
            progress
        }
    }
}

impl FromStr for Direction {
    type Err = PixmotionError;

    fn from_str(s: &str) -> PixmotionResult<Self> {
        match s {
            "normal" => Ok(Self::Normal),
            "reverse" => Ok(Self::Reverse),
            "alternate" => Ok(Self::Alternate),
            "alternate-reverse" => Ok(Self::AlternateReverse),
            _ => Err(PixmotionError::parse(format!(
                "invalid direction '{s}' (expected 'normal', 'reverse', 'alternate' or 'alternate-reverse')"
            ))),
        }
    }
}

/// Progress held once the animation's frames are exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    #[default]
    Forwards,
    Backwards,
}

impl FillMode {
    pub fn value(self) -> f64 {
        match self {
            Self::Forwards => 1.0,
            Self::Backwards => 0.0,
        }
    }
}

impl FromStr for FillMode {
    type Err = PixmotionError;

    fn from_str(s: &str) -> PixmotionResult<Self> {
        match s {
            "forwards" => Ok(Self::Forwards),
            "backwards" => Ok(Self::Backwards),
            _ => Err(PixmotionError::parse(format!(
                "invalid fill mode '{s}' (expected 'forwards' or 'backwards')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
