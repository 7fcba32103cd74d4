//! Release momentum for the ruler offset.
//!
//! After a pan ends the offset keeps moving with the release velocity, which
//! decays exponentially per elapsed millisecond. Integrating the velocity in
//! closed form per frame keeps the motion independent of the frame rate.

/// Exponential velocity decay seeded by a release velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayAnimation {
    /// Current velocity in pixels per second
    velocity: f32,
    /// Fraction of velocity retained per millisecond
    deceleration: f32,
    /// Speed below which the animation stops
    settle_velocity: f32,
}

impl DecayAnimation {
    /// Starts a decay from `velocity` (px/s).
    pub fn new(velocity: f32, deceleration: f32, settle_velocity: f32) -> Self {
        Self {
            velocity,
            deceleration,
            settle_velocity,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// True once the velocity dropped below the settle threshold.
    ///
    /// Velocities that decayed into the subnormal range always count as
    /// settled, whatever the configured threshold.
    pub fn is_settled(&self) -> bool {
        !self.velocity.is_finite() || self.velocity.abs() < self.settle_velocity.max(f32::MIN_POSITIVE)
    }

    /// Advances the animation by `dt_secs` and returns the new position.
    pub fn step(&mut self, position: f64, dt_secs: f32) -> f64 {
        if self.is_settled() || dt_secs <= 0.0 {
            return position;
        }

        let dt_ms = dt_secs * 1000.0;
        let kv = self.deceleration.powf(dt_ms);
        let kx = self.deceleration * (1.0 - kv) / (1.0 - self.deceleration);
        let v0 = self.velocity / 1000.0;

        self.velocity = v0 * kv * 1000.0;
        position + f64::from(v0 * kx)
    }

    /// Total remaining travel if the animation ran to completion.
    pub fn remaining_travel(&self) -> f32 {
        self.velocity / 1000.0 * self.deceleration / (1.0 - self.deceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_moves_in_release_direction_and_slows_down() {
        let mut decay = DecayAnimation::new(1200.0, 0.998, 1.0);
        let mut position = 0.0;
        let mut last_step = f64::MAX;

        for _ in 0..30 {
            let next = decay.step(position, DT);
            let step = next - position;
            assert!(step > 0.0);
            assert!(step < last_step);
            last_step = step;
            position = next;
        }
        assert!(decay.velocity() < 1200.0);
    }

    #[test]
    fn test_settles_within_total_travel() {
        let mut decay = DecayAnimation::new(-2000.0, 0.998, 1.0);
        let limit = decay.remaining_travel();
        let mut position = 0.0;
        let mut frames = 0;

        while !decay.is_settled() {
            position = decay.step(position, DT);
            frames += 1;
            assert!(frames < 10_000, "decay never settled");
        }

        let limit = f64::from(limit);
        assert!(position < 0.0);
        assert!(position >= limit - 1e-2);
        assert!((position - limit).abs() < 2.0);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut coarse = DecayAnimation::new(800.0, 0.998, 1.0);
        let mut fine = coarse.clone();

        let coarse_pos = coarse.step(0.0, 0.1);
        let mut fine_pos = 0.0;
        for _ in 0..10 {
            fine_pos = fine.step(fine_pos, 0.01);
        }

        assert!((coarse_pos - fine_pos).abs() < 0.01);
        assert!((coarse.velocity() - fine.velocity()).abs() < 0.01);
    }

    #[test]
    fn test_zero_threshold_still_settles() {
        let mut decay = DecayAnimation::new(1000.0, 0.998, 0.0);
        let mut position = 0.0;
        let mut frames = 0;

        while !decay.is_settled() {
            position = decay.step(position, DT);
            frames += 1;
            assert!(frames < 10_000, "decay never settled");
        }
        assert!(position > 0.0);
    }

    #[test]
    fn test_slow_release_is_already_settled() {
        let mut decay = DecayAnimation::new(0.5, 0.998, 1.0);
        assert!(decay.is_settled());
        assert_eq!(decay.step(42.0, DT), 42.0);
    }
}
