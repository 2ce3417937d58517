//! Scripted jump: height follows a sine over fixed frames.
//!
//! z(frame) = baseline + jump_height * sin(RAD_PER_FRAME * frame)
//! Peak at frame 15, back on the baseline at frame 30.

use std::f32::consts::PI;

use crate::components::JumpState;

/// Phase step per fixed tick (half period = 30 frames).
pub const RAD_PER_FRAME: f32 = PI / 30.0;

/// Landing is only checked once the arc is past this frame (descent).
pub const LANDING_CHECK_FRAME: u32 = 10;

/// Height above the baseline at `frame`.
pub fn jump_offset(jump_height: f32, frame: u32) -> f32 {
    jump_height * (RAD_PER_FRAME * frame as f32).sin()
}

impl JumpState {
    /// Start a jump from `baseline_z`. False if one is already running.
    pub fn start(&mut self, baseline_z: f32) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.frame = 0;
        self.baseline_z = baseline_z;
        true
    }

    /// One fixed tick of the arc. Returns the new Z, `None` when idle.
    pub fn advance(&mut self, jump_height: f32, grounded: bool) -> Option<f32> {
        if !self.is_jumping {
            return None;
        }

        let mut z = self.baseline_z + jump_offset(jump_height, self.frame);

        if self.frame >= LANDING_CHECK_FRAME && (grounded || z <= self.baseline_z) {
            self.is_jumping = false;
            // sin(π) в f32 чуть меньше нуля
            z = z.max(self.baseline_z);
        }

        self.frame += 1;
        Some(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_shape() {
        assert_eq!(jump_offset(150.0, 0), 0.0);
        assert!((jump_offset(150.0, 15) - 150.0).abs() < 1e-3);
        assert!(jump_offset(150.0, 30).abs() < 1e-3);
        // симметрия
        assert!((jump_offset(150.0, 5) - jump_offset(150.0, 25)).abs() < 1e-3);
    }

    #[test]
    fn test_jump_lands_on_frame_30() {
        let mut jump = JumpState::default();
        assert!(jump.start(20.0));

        let mut heights = Vec::new();
        while let Some(z) = jump.advance(150.0, false) {
            heights.push(z);
            if !jump.is_jumping {
                break;
            }
        }

        // frames 0..=30
        assert_eq!(heights.len(), 31);
        assert_eq!(heights[0], 20.0);
        assert!((heights[15] - 170.0).abs() < 1e-3);
        assert_eq!(heights[30], 20.0);
        assert!(!jump.is_jumping);
    }

    #[test]
    fn test_grounded_before_frame_10_does_not_land() {
        let mut jump = JumpState::default();
        jump.start(0.0);

        for _ in 0..LANDING_CHECK_FRAME {
            jump.advance(150.0, true);
            assert!(jump.is_jumping);
        }

        // frame 10, grounded → приземление
        jump.advance(150.0, true);
        assert!(!jump.is_jumping);
    }

    #[test]
    fn test_no_double_jump() {
        let mut jump = JumpState::default();
        assert!(jump.start(0.0));
        jump.advance(150.0, false);
        jump.advance(150.0, false);

        assert!(!jump.start(50.0));
        assert_eq!(jump.baseline_z, 0.0);
        assert_eq!(jump.frame, 2);
    }

    #[test]
    fn test_idle_advance_is_noop() {
        let mut jump = JumpState::default();
        assert_eq!(jump.advance(150.0, false), None);
        assert_eq!(jump.frame, 0);
    }
}
