use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EXTRA_TURNS, MIN_EXTRA_TURNS, SPIN_DURATION_MS};
use crate::wheel_settings::Segment;

/// Transient state of the wheel. Not persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SpinState {
    /// Cumulative clockwise rotation in degrees, never wrapped between spins.
    pub rotation: f64,
    pub is_spinning: bool,
    pub winner: Option<Segment>,
    pub show_result: bool,
}

/// Everything needed to animate and resolve one spin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub segment_count: usize,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a spin. Returns `None` (and changes nothing) when a spin is
    /// already running or there is nothing to land on.
    pub fn begin<R: Rng + ?Sized>(&mut self, segment_count: usize, rng: &mut R) -> Option<SpinPlan> {
        if self.is_spinning {
            log::debug!("Spin request dropped, wheel already spinning");
            return None;
        }

        let plan = trigger(self.rotation, segment_count, rng)?;
        self.is_spinning = true;
        self.winner = None;
        self.show_result = false;
        self.rotation = plan.target_rotation;
        Some(plan)
    }

    /// Ends the spin described by `plan` against the list as it is now.
    pub fn finish(&mut self, plan: &SpinPlan, segments: &[Segment]) -> Option<&Segment> {
        self.is_spinning = false;
        self.rotation = plan.target_rotation;
        self.winner = resolve_winner(plan.target_rotation, segments.len())
            .and_then(|index| segments.get(index))
            .cloned();
        self.show_result = self.winner.is_some();
        self.winner.as_ref()
    }

    pub fn dismiss_result(&mut self) {
        self.show_result = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Picks the resting angle of the next spin.
///
/// The offset is uniform over whole degrees and the turn count only adds
/// multiples of 360, so the final angle modulo 360 is uniform no matter how
/// many spins came before.
pub fn trigger<R: Rng + ?Sized>(
    current_rotation: f64,
    segment_count: usize,
    rng: &mut R,
) -> Option<SpinPlan> {
    if segment_count == 0 {
        return None;
    }

    let extra_turns = rng.gen_range(MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS);
    let offset_degrees = rng.gen_range(0..360u32);
    let target_rotation = current_rotation + f64::from(extra_turns * 360 + offset_degrees);

    Some(SpinPlan {
        start_rotation: current_rotation,
        target_rotation,
        segment_count,
    })
}

/// Index of the segment under the top pointer once the wheel has turned
/// clockwise by `target_rotation` degrees.
pub fn resolve_winner(target_rotation: f64, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }

    let normalized = target_rotation.rem_euclid(360.0);
    let winning_angle = (360.0 - normalized).rem_euclid(360.0);
    let step = 360.0 / segment_count as f64;
    let index = (winning_angle / step).floor();

    Some((index.max(0.0) as usize).min(segment_count - 1))
}

/// Quartic ease-out shared by the renderer and the tick estimator.
pub fn ease_out_quart(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(4)
}

impl SpinPlan {
    pub fn duration_ms(&self) -> f64 {
        f64::from(SPIN_DURATION_MS)
    }

    pub fn segment_arc(&self) -> f64 {
        360.0 / self.segment_count.max(1) as f64
    }

    /// Angle shown `elapsed_ms` after the spin started.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let progress = elapsed_ms / self.duration_ms();
        self.start_rotation + (self.target_rotation - self.start_rotation) * ease_out_quart(progress)
    }

    pub fn tick_tracker(&self) -> TickTracker {
        TickTracker::new(*self)
    }
}

/// Decides when a tick cue is due while a spin animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTracker {
    plan: SpinPlan,
    last_tick_angle: f64,
}

impl TickTracker {
    pub fn new(plan: SpinPlan) -> Self {
        Self {
            plan,
            last_tick_angle: plan.start_rotation,
        }
    }

    /// Returns true when the estimated angle has moved at least one segment
    /// arc since the previous tick. Always false once the spin has run its
    /// full duration.
    pub fn sample(&mut self, elapsed_ms: f64) -> bool {
        if elapsed_ms >= self.plan.duration_ms() {
            return false;
        }

        let current = self.plan.rotation_at(elapsed_ms);
        if (current - self.last_tick_angle).abs() >= self.plan.segment_arc() {
            self.last_tick_angle = current;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{default_segments, TICK_CHECK_INTERVAL_MS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_winner_always_in_range() {
        for n in 2..=40 {
            for tenth in 0..(3600 * 3) {
                let r = tenth as f64 / 10.0;
                let index = resolve_winner(r, n).unwrap();
                assert!(index < n, "r={} n={} index={}", r, n, index);
            }
        }
    }

    #[test]
    fn test_winner_is_periodic() {
        let mut rng = rng();
        for _ in 0..5000 {
            let n = rng.gen_range(1..=30);
            let r = f64::from(rng.gen_range(0..200_000u32));
            assert_eq!(resolve_winner(r, n), resolve_winner(r + 360.0, n));
        }
    }

    #[test]
    fn test_whole_turns_land_on_first_segment() {
        for n in 1..=24 {
            for turns in 0..20 {
                assert_eq!(resolve_winner(f64::from(turns * 360), n), Some(0));
            }
        }
    }

    #[test]
    fn test_quarter_turn_on_six_segments() {
        // 90 degrees clockwise puts the arc that started at 270 under the pointer.
        assert_eq!(resolve_winner(90.0, 6), Some(4));
        assert_eq!(resolve_winner(90.0 + 360.0 * 8.0, 6), Some(4));
    }

    #[test]
    fn test_small_rotations_pick_last_segment() {
        assert_eq!(resolve_winner(1.0, 6), Some(5));
        assert_eq!(resolve_winner(359.0, 6), Some(0));
        assert_eq!(resolve_winner(0.000_001, 4), Some(3));
    }

    #[test]
    fn test_no_segments_no_winner() {
        assert_eq!(resolve_winner(123.0, 0), None);
        assert_eq!(trigger(0.0, 0, &mut rng()), None);
    }

    #[test]
    fn test_trigger_bounds() {
        let mut rng = rng();
        let mut current = 0.0;
        for _ in 0..2000 {
            let plan = trigger(current, 6, &mut rng).unwrap();
            let delta = plan.target_rotation - plan.start_rotation;
            assert_eq!(plan.start_rotation, current);
            assert!(delta >= 7.0 * 360.0 && delta <= 11.0 * 360.0 + 359.0);
            assert_eq!(delta.fract(), 0.0);
            current = plan.target_rotation;
        }
    }

    #[test]
    fn test_resting_angle_roughly_uniform() {
        let mut rng = rng();
        let mut buckets = [0u32; 12];
        let samples = 120_000;
        let mut current = 0.0;
        for _ in 0..samples {
            let plan = trigger(current, 6, &mut rng).unwrap();
            let bucket = (plan.target_rotation.rem_euclid(360.0) / 30.0) as usize;
            buckets[bucket] += 1;
            current = plan.target_rotation;
        }

        let expected = samples as f64 / buckets.len() as f64;
        for count in buckets {
            let deviation = (f64::from(count) - expected).abs() / expected;
            assert!(deviation < 0.05, "bucket deviates by {}", deviation);
        }
    }

    #[test]
    fn test_begin_and_finish() {
        let segments = default_segments();
        let mut state = SpinState::new();
        let plan = state.begin(segments.len(), &mut rng()).unwrap();
        assert!(state.is_spinning);
        assert_eq!(state.rotation, plan.target_rotation);
        assert!(state.winner.is_none());

        let expected = resolve_winner(plan.target_rotation, segments.len()).unwrap();
        let winner = state.finish(&plan, &segments).cloned().unwrap();
        assert_eq!(winner, segments[expected]);
        assert!(!state.is_spinning);
        assert!(state.show_result);

        state.dismiss_result();
        assert!(!state.show_result);
        assert_eq!(state.winner, Some(winner));
    }

    #[test]
    fn test_begin_while_spinning_is_dropped() {
        let mut state = SpinState::new();
        let mut rng = rng();
        let first = state.begin(6, &mut rng).unwrap();
        assert_eq!(state.begin(6, &mut rng), None);
        assert_eq!(state.rotation, first.target_rotation);
    }

    #[test]
    fn test_begin_clears_previous_winner() {
        let segments = default_segments();
        let mut state = SpinState::new();
        let mut rng = rng();
        let plan = state.begin(segments.len(), &mut rng).unwrap();
        state.finish(&plan, &segments);

        let second = state.begin(segments.len(), &mut rng).unwrap();
        assert_eq!(second.start_rotation, plan.target_rotation);
        assert!(state.winner.is_none());
        assert!(!state.show_result);
    }

    #[test]
    fn test_begin_with_empty_wheel_is_noop() {
        let mut state = SpinState::new();
        assert_eq!(state.begin(0, &mut rng()), None);
        assert_eq!(state, SpinState::default());
    }

    #[test]
    fn test_finish_uses_current_list() {
        let segments = default_segments();
        let plan = SpinPlan {
            start_rotation: 0.0,
            target_rotation: 90.0,
            segment_count: 6,
        };
        let mut state = SpinState::new();
        let shorter = &segments[..4];
        // 90 degrees on four segments: winning angle 270, arc 90, index 3.
        assert_eq!(state.finish(&plan, shorter), Some(&segments[3]));
        assert_eq!(state.finish(&plan, &[]), None);
        assert!(!state.show_result);
    }

    #[test]
    fn test_reset() {
        let mut state = SpinState::new();
        state.begin(6, &mut rng());
        state.reset();
        assert_eq!(state, SpinState::default());
    }

    #[test]
    fn test_ease_out_quart() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
    }

    #[test]
    fn test_rotation_at_endpoints() {
        let plan = SpinPlan {
            start_rotation: 100.0,
            target_rotation: 3000.0,
            segment_count: 6,
        };
        assert_eq!(plan.rotation_at(0.0), 100.0);
        assert_eq!(plan.rotation_at(5000.0), 3000.0);
        assert_eq!(plan.rotation_at(9000.0), 3000.0);
        assert!(plan.rotation_at(2500.0) > 2800.0);
    }

    #[test]
    fn test_ticks_follow_segment_boundaries() {
        let plan = SpinPlan {
            start_rotation: 720.0,
            target_rotation: 720.0 + 9.0 * 360.0,
            segment_count: 6,
        };
        let mut tracker = plan.tick_tracker();
        let interval = f64::from(TICK_CHECK_INTERVAL_MS);

        // No tick on the very first sample even though the wheel has already
        // travelled far from zero.
        assert!(!tracker.sample(0.0));

        let mut ticks = Vec::new();
        let mut elapsed = interval;
        while elapsed < plan.duration_ms() {
            if tracker.sample(elapsed) {
                ticks.push(elapsed);
            }
            elapsed += interval;
        }

        // Never more ticks than segment arcs travelled.
        let travelled = (plan.target_rotation - plan.start_rotation) / plan.segment_arc();
        assert!(!ticks.is_empty());
        assert!(ticks.len() as f64 <= travelled);

        // Deceleration: ticks thin out towards the end.
        let early = ticks.iter().filter(|&&t| t < 1000.0).count();
        let late = ticks.iter().filter(|&&t| t >= 4000.0).count();
        assert!(early > late);
    }

    #[test]
    fn test_ticks_stop_at_duration() {
        let plan = SpinPlan {
            start_rotation: 0.0,
            target_rotation: 3600.0,
            segment_count: 2,
        };
        let mut tracker = TickTracker::new(plan);
        assert!(!tracker.sample(5000.0));
        assert!(!tracker.sample(6000.0));
    }
}
