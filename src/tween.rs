use raylib::prelude::*;

/// Easing curve in raylib's `(time, start, change, duration)` form.
pub type Easing = fn(f32, f32, f32, f32) -> f32;

/// Same curve as the "swing" easing of a css-style animation.
pub const DEFAULT_EASING: Easing = ease::sine_in_out;

/// A single animated property: a current value and, while moving, the tween
/// that drives it towards `target`.
pub struct Animated {
    value: f32,
    target: f32,
    easing: Easing,

    tween: Option<ease::Tween>,
    animation_timer: f32,
    duration: f32,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            easing: DEFAULT_EASING,
            tween: None,
            animation_timer: 0.0,
            duration: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    #[cfg(test)]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps to `value`, dropping any running tween.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.tween = None;
        self.animation_timer = 0.0;
    }

    /// Starts moving from the current value to `target`.
    ///
    /// Returns `false` when nothing had to be started: the property already
    /// rests at `target` or is already heading there.
    pub fn animate_to(&mut self, target: f32, duration: f32) -> bool {
        if target == self.target && (self.is_animating() || self.value == target) {
            return false;
        }
        if duration <= 0.0 || self.value == target {
            self.set(target);
            return true;
        }

        self.target = target;
        self.duration = duration;
        self.animation_timer = 0.0;
        self.tween = Some(ease::Tween::new(self.easing, self.value, target, duration));
        true
    }

    /// Advances the running tween by `dt` seconds.
    ///
    /// Returns `true` on the frame the tween reaches its target.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        self.value = tween.apply(dt);
        self.animation_timer += dt;

        if self.animation_timer >= self.duration {
            self.set(self.target);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_snaps_to_target() {
        let mut width = Animated::new(10.0);
        assert!(width.animate_to(0.0, 0.0));
        assert_eq!(width.value(), 0.0);
        assert!(!width.is_animating());
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut width = Animated::new(0.0);
        width.animate_to(100.0, 0.5);

        let mut finished = 0;
        for _ in 0..40 {
            if width.update(1.0 / 60.0) {
                finished += 1;
            }
        }

        assert_eq!(finished, 1);
        assert_eq!(width.value(), 100.0);
        assert!(!width.is_animating());
    }

    #[test]
    fn moves_monotonically_towards_target() {
        let mut gap = Animated::new(0.0);
        gap.animate_to(30.0, 0.6);

        let mut last = gap.value();
        while gap.is_animating() {
            gap.update(1.0 / 60.0);
            assert!(gap.value() >= last - 1e-4);
            assert!(gap.value() <= 30.0 + 1e-4);
            last = gap.value();
        }
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut width = Animated::new(0.0);
        assert!(width.animate_to(50.0, 1.0));
        width.update(0.5);
        let halfway = width.value();

        assert!(!width.animate_to(50.0, 1.0));
        assert_eq!(width.value(), halfway);
        assert!(width.is_animating());

        let mut resting = Animated::new(50.0);
        assert!(!resting.animate_to(50.0, 1.0));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut width = Animated::new(0.0);
        width.animate_to(100.0, 1.0);
        width.update(0.5);
        let from = width.value();

        width.animate_to(0.0, 1.0);
        width.update(0.0);
        assert!((width.value() - from).abs() < 1e-3);
        assert_eq!(width.target(), 0.0);
    }
}
