//! Smooth-scroll animation for the simulated viewport.
//!
//! The animator is clocked explicitly: the host calls [`ScrollAnimator::advance`]
//! with the elapsed frame time, which keeps simulated sessions deterministic.
//! Starting a new animation while one is running replaces it, continuing from
//! the current position (last request wins).

use crate::config::ScrollConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Jump at the end of the duration.
    None,
    Linear,
    /// 1 - (1-t)³
    Cubic,
    /// 1 - (1-t)⁵
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
}

impl Easing {
    /// Map progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Easing::Linear => t,
            Easing::Cubic => 1.0 - (1.0 - t).powi(3),
            Easing::Quintic => 1.0 - (1.0 - t).powi(5),
            Easing::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    current: f64,
    animation: Option<ActiveAnimation>,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            current: 0.0,
            animation: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final position of the running animation, if any.
    pub fn target(&self) -> Option<f64> {
        self.animation.map(|a| a.to)
    }

    /// Move immediately, abandoning any running animation.
    pub fn jump_to(&mut self, position: f64) {
        self.cancel();
        self.current = position;
    }

    /// Start animating toward `target`. Jumps when smooth scrolling is off.
    pub fn animate_to(&mut self, target: f64) {
        if !self.config.is_smooth() {
            self.jump_to(target);
            return;
        }
        if let Some(previous) = self.animation {
            tracing::trace!(from = self.current, abandoned = previous.to, "animation replaced");
        }
        if (target - self.current).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            from: self.current,
            to: target,
            elapsed: Duration::ZERO,
        });
    }

    /// Stop the running animation where it is.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Advance the running animation by `dt`. Returns the new position if it moved.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        let anim = self.animation.as_mut()?;
        anim.elapsed += dt;

        let duration = self.config.duration();
        let before = self.current;
        if anim.elapsed >= duration {
            self.current = anim.to;
            self.animation = None;
        } else {
            let t = anim.elapsed.as_secs_f64() / duration.as_secs_f64();
            self.current = lerp(anim.from, anim.to, self.config.easing.apply(t));
        }

        (self.current != before).then_some(self.current)
    }
}
