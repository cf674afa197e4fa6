//! Falling-particle animation clock

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// What a single clock tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    /// Clock was not running, nothing moved
    Idle,
    /// Particles moved, at least one is still visible
    Running,
    /// Last particle left the screen on this tick, clock stopped
    Finished,
}

/// Periodic animation state: particle positions plus the `active` flag
#[derive(Debug, Clone)]
pub struct AnimationClock {
    active: bool,
    interval_ms: u32,
    particle_count: usize,
    particles: Vec<Vec2>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS, PARTICLE_COUNT)
    }
}

impl AnimationClock {
    pub fn new(interval_ms: u32, particle_count: usize) -> Self {
        Self {
            active: false,
            interval_ms,
            particle_count: particle_count.min(MAX_PARTICLES),
            particles: Vec::new(),
        }
    }

    /// Spawn a fresh batch of particles above the top edge.
    ///
    /// Calling this while already active replaces the running batch.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let particles = (0..self.particle_count)
            .map(|_| {
                Vec2::new(
                    rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX),
                    rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX),
                )
            })
            .collect();
        self.start_with(particles);
    }

    /// Start with explicit particle positions
    pub fn start_with(&mut self, particles: Vec<Vec2>) {
        if self.active {
            log::debug!("Animation restarted with {} particles", particles.len());
        }
        self.particles = particles;
        self.active = !self.particles.is_empty();
    }

    /// Advance every particle by one step
    pub fn tick(&mut self) -> ClockStatus {
        if !self.active {
            return ClockStatus::Idle;
        }

        for particle in &mut self.particles {
            particle.y -= PARTICLE_STEP;
        }

        if self.particles.iter().all(|p| p.y < VISIBLE_FLOOR) {
            self.stop();
            return ClockStatus::Finished;
        }

        ClockStatus::Running
    }

    /// Deactivate and drop all particles
    pub fn stop(&mut self) {
        self.active = false;
        self.particles.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn particles(&self) -> &[Vec2] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ticks_until_finished(clock: &mut AnimationClock) -> u32 {
        let mut ticks = 0;
        loop {
            ticks += 1;
            match clock.tick() {
                ClockStatus::Running => assert!(clock.is_active()),
                ClockStatus::Finished => return ticks,
                ClockStatus::Idle => panic!("clock went idle without finishing"),
            }
            assert!(ticks < 1000, "clock never finished");
        }
    }

    #[test]
    fn test_start_spawns_in_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut clock = AnimationClock::default();
        assert!(!clock.is_active());
        assert!(clock.particles().is_empty());

        clock.start(&mut rng);
        assert!(clock.is_active());
        assert_eq!(clock.particles().len(), PARTICLE_COUNT);
        for p in clock.particles() {
            assert!((SPAWN_X_MIN..=SPAWN_X_MAX).contains(&p.x));
            assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&p.y));
        }
    }

    #[test]
    fn test_tick_moves_down() {
        let mut clock = AnimationClock::default();
        clock.start_with(vec![Vec2::new(0.25, 0.9), Vec2::new(-0.5, 0.85)]);

        assert_eq!(clock.tick(), ClockStatus::Running);
        let p = clock.particles();
        assert!((p[0].y - 0.85).abs() < 1e-6);
        assert!((p[1].y - 0.80).abs() < 1e-6);
        // x never changes
        assert_eq!(p[0].x, 0.25);
        assert_eq!(p[1].x, -0.5);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut clock = AnimationClock::default();
        assert_eq!(clock.tick(), ClockStatus::Idle);
        assert!(clock.particles().is_empty());
    }

    #[test]
    fn test_finishes_after_last_particle_leaves() {
        let mut clock = AnimationClock::default();
        // 1.78 / 0.05 = 35.6 -> below the floor on tick 36
        clock.start_with(vec![Vec2::new(0.0, 0.78); PARTICLE_COUNT]);
        assert_eq!(ticks_until_finished(&mut clock), 36);
        assert!(!clock.is_active());
        assert!(clock.particles().is_empty());
    }

    #[test]
    fn test_slowest_particle_keeps_clock_running() {
        let mut clock = AnimationClock::default();
        let mut particles = vec![Vec2::new(0.0, -0.9); PARTICLE_COUNT - 1];
        particles.push(Vec2::new(0.3, 0.78));
        clock.start_with(particles);

        // Every particle but the last is gone after 3 ticks
        for _ in 0..3 {
            assert_eq!(clock.tick(), ClockStatus::Running);
        }
        assert_eq!(clock.particles().len(), PARTICLE_COUNT);
        assert_eq!(ticks_until_finished(&mut clock) + 3, 36);
    }

    #[test]
    fn test_random_batch_bounded_by_spawn_band() {
        // Highest possible start is 1.0: 2.0 / 0.05 = 40 steps lands on the
        // floor itself, so 41 ticks is the upper bound.
        let mut rng = Pcg32::seed_from_u64(11);
        let mut clock = AnimationClock::default();
        clock.start(&mut rng);
        let ticks = ticks_until_finished(&mut clock);
        assert!((36..=41).contains(&ticks), "took {ticks} ticks");
    }

    #[test]
    fn test_restart_replaces_batch() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut clock = AnimationClock::default();
        clock.start(&mut rng);
        for _ in 0..10 {
            clock.tick();
        }
        // Every particle has fallen below the spawn band by now
        assert!(clock.particles().iter().all(|p| p.y < SPAWN_Y_MIN));

        clock.start(&mut rng);
        assert!(clock.is_active());
        assert_eq!(clock.particles().len(), PARTICLE_COUNT);
        assert!(clock.particles().iter().all(|p| p.y >= SPAWN_Y_MIN));
    }

    #[test]
    fn test_particle_count_is_capped() {
        let mut rng = Pcg32::seed_from_u64(13);
        let mut clock = AnimationClock::new(TICK_INTERVAL_MS, usize::MAX);
        clock.start(&mut rng);
        assert_eq!(clock.particles().len(), MAX_PARTICLES);
    }

    #[test]
    fn test_empty_batch_does_not_activate() {
        let mut clock = AnimationClock::default();
        clock.start_with(Vec::new());
        assert!(!clock.is_active());
    }
}
