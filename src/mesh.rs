use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec3;

use crate::geometry::GeometryDescriptor;
use crate::math::Transform;

/// Time for one full turn about an instance's rotation axis
pub const SPIN_PERIOD: Duration = Duration::from_millis(5000);

/// Vertical drift that reverses once the translation leaves `[-bound, bound]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub bound: f32,
    /// Distance travelled per spin period
    pub speed: f32,
    rising: bool,
}

impl Oscillation {
    pub const DEFAULT_BOUND: f32 = 4.0;
    pub const DEFAULT_SPEED: f32 = 15.0;

    /// Starts moving up
    pub fn new(bound: f32, speed: f32) -> Self {
        Self {
            bound,
            speed,
            rising: true,
        }
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    fn step(&mut self, model: &mut Transform, fraction: f32) {
        let sign = if self.rising { 1.0 } else { -1.0 };
        model.translate(Vec3::new(0.0, sign * self.speed * fraction, 0.0));

        let y = model.translation_y();
        if self.rising && y > self.bound {
            self.rising = false;
        } else if !self.rising && y < -self.bound {
            self.rising = true;
        }
    }
}

impl Default for Oscillation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BOUND, Self::DEFAULT_SPEED)
    }
}

/// Per-instance motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateRule {
    Spin,
    SpinAndOscillate(Oscillation),
}

/// One on-screen object: shared geometry plus its own transform and motion
#[derive(Debug, Clone)]
pub struct MeshInstance {
    geometry: Arc<GeometryDescriptor>,
    model: Transform,
    axis: Vec3,
    rule: UpdateRule,
    last_tick: Instant,
}

impl MeshInstance {
    pub fn new(
        geometry: Arc<GeometryDescriptor>,
        translation: Vec3,
        axis: Vec3,
        rule: UpdateRule,
        now: Instant,
    ) -> Self {
        Self {
            geometry,
            model: Transform::from_translation(translation),
            axis,
            rule,
            last_tick: now,
        }
    }

    /// Advance by the time elapsed since the previous update.
    ///
    /// Rotation accumulates in the local frame, so the result depends on the
    /// update cadence and not only on total elapsed time.
    pub fn update(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let fraction = elapsed.as_secs_f32() / SPIN_PERIOD.as_secs_f32();
        self.model.rotate(TAU * fraction, self.axis);

        if let UpdateRule::SpinAndOscillate(oscillation) = &mut self.rule {
            oscillation.step(&mut self.model, fraction);
        }
    }

    pub fn geometry(&self) -> &Arc<GeometryDescriptor> {
        &self.geometry
    }

    pub fn model(&self) -> &Transform {
        &self.model
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn rule(&self) -> &UpdateRule {
        &self.rule
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// `None` for spin-only instances
    pub fn is_rising(&self) -> Option<bool> {
        match &self.rule {
            UpdateRule::Spin => None,
            UpdateRule::SpinAndOscillate(oscillation) => Some(oscillation.is_rising()),
        }
    }
}
