//! Game session: wires input, the animation ticker and the RNG together
//!
//! Every mutation goes through `trigger` or `advance`, which return the
//! events the driver should act on (redraws, sounds).

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::{AnimationClock, ClockStatus};
use super::state::{GameState, Rules, Tint, TriggerOutcome};
use crate::audio::SoundEffect;
use crate::settings::Settings;
use crate::timer::Ticker;

/// Side effects requested by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Next frame must reflect the new state
    Redraw,
    PlaySound(SoundEffect),
    Depleted { points: u64, capacity: u32 },
    AnimationStarted,
    AnimationFinished,
}

/// Read-only view for the renderer and HUD
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub gauge: u32,
    pub gauge_capacity: u32,
    pub points: u64,
    pub tint: Tint,
    pub active: bool,
    pub particles: &'a [Vec2],
}

#[derive(Debug)]
pub struct Session {
    seed: u64,
    state: GameState,
    clock: AnimationClock,
    ticker: Ticker,
    rng: Pcg32,
}

impl Session {
    /// Create a session with the given rules and seed
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self::with_clock(rules, seed, AnimationClock::default())
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let clock = AnimationClock::new(settings.tick_interval_ms, settings.particle_count);
        Self::with_clock(settings.rules.rules(), seed, clock)
    }

    fn with_clock(rules: Rules, seed: u64, clock: AnimationClock) -> Self {
        Self {
            seed,
            state: GameState::new(rules),
            ticker: Ticker::from_millis(clock.interval_ms()),
            clock,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Handle one button press
    pub fn trigger(&mut self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::PlaySound(SoundEffect::Fish)];

        let outcome = self.state.on_trigger(&mut self.rng);
        if let TriggerOutcome::Depleted { start_animation } = outcome {
            events.push(GameEvent::Depleted {
                points: self.state.points(),
                capacity: self.state.gauge_capacity(),
            });
            if start_animation {
                self.clock.start(&mut self.rng);
            }
            if start_animation && self.clock.is_active() {
                self.ticker.start();
                log::info!(
                    "Animation started with {} particles",
                    self.clock.particles().len()
                );
                events.push(GameEvent::AnimationStarted);
            }
        }

        events.push(GameEvent::Redraw);
        events
    }

    /// Feed elapsed wall-clock time and run any due animation ticks
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let due = self.ticker.advance(elapsed);

        for _ in 0..due {
            match self.clock.tick() {
                ClockStatus::Idle => {
                    self.ticker.stop();
                    break;
                }
                ClockStatus::Running => events.push(GameEvent::Redraw),
                ClockStatus::Finished => {
                    self.ticker.stop();
                    log::info!("Animation finished");
                    events.push(GameEvent::AnimationFinished);
                    events.push(GameEvent::Redraw);
                    break;
                }
            }
        }

        events
    }

    /// Time until the next animation tick is due (None when idle)
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.ticker.until_next()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            gauge: self.state.gauge(),
            gauge_capacity: self.state.gauge_capacity(),
            points: self.state.points(),
            tint: self.state.tint(),
            active: self.clock.is_active(),
            particles: self.clock.particles(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS as u64);

    fn press(session: &mut Session, times: usize) -> Vec<GameEvent> {
        (0..times).flat_map(|_| session.trigger()).collect()
    }

    #[test]
    fn test_plain_trigger_events() {
        let mut session = Session::new(Rules::default(), 1);
        let events = session.trigger();
        assert_eq!(
            events,
            vec![GameEvent::PlaySound(SoundEffect::Fish), GameEvent::Redraw]
        );
        assert_eq!(session.snapshot().gauge, 9);
        assert_eq!(session.until_next_tick(), None);
    }

    #[test]
    fn test_depletion_starts_animation() {
        let mut session = Session::new(Rules::default(), 1);
        press(&mut session, 9);

        let events = session.trigger();
        assert!(events.contains(&GameEvent::Depleted {
            points: 200,
            capacity: 11
        }));
        assert!(events.contains(&GameEvent::AnimationStarted));
        assert_eq!(events.last(), Some(&GameEvent::Redraw));

        let snap = session.snapshot();
        assert!(snap.active);
        assert_eq!(snap.particles.len(), PARTICLE_COUNT);
        assert_eq!(snap.gauge, 11);
        assert_eq!(session.until_next_tick(), Some(TICK));
    }

    #[test]
    fn test_classic_rules_never_animate() {
        let rules = Rules {
            escalating: false,
            visual_feedback: false,
        };
        let mut session = Session::new(rules, 1);
        let events = press(&mut session, 10);

        assert!(!events.contains(&GameEvent::AnimationStarted));
        assert!(!session.snapshot().active);
        assert!(session.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_animation_runs_to_completion() {
        let mut session = Session::new(Rules::default(), 9);
        press(&mut session, 10);

        let mut redraws = 0;
        let mut finished = false;
        for _ in 0..100 {
            for event in session.advance(TICK) {
                match event {
                    GameEvent::Redraw => redraws += 1,
                    GameEvent::AnimationFinished => finished = true,
                    _ => {}
                }
            }
            if finished {
                break;
            }
        }

        assert!(finished);
        assert!((36..=41).contains(&redraws), "redraws={redraws}");
        let snap = session.snapshot();
        assert!(!snap.active);
        assert!(snap.particles.is_empty());
        assert_eq!(session.until_next_tick(), None);
    }

    #[test]
    fn test_second_depletion_restarts_batch() {
        let mut session = Session::new(Rules::default(), 3);
        press(&mut session, 10);
        session.advance(TICK * 5);
        let before: Vec<Vec2> = session.snapshot().particles.to_vec();

        // Capacity is now 11
        let events = press(&mut session, 11);
        assert!(events.contains(&GameEvent::AnimationStarted));

        let snap = session.snapshot();
        assert!(snap.active);
        assert_eq!(snap.particles.len(), PARTICLE_COUNT);
        assert_ne!(before, snap.particles.to_vec());
        assert!(snap.particles.iter().all(|p| p.y >= SPAWN_Y_MIN));
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Session::new(Rules::default(), 1234);
        let mut b = Session::new(Rules::default(), 1234);
        press(&mut a, 10);
        press(&mut b, 10);

        assert_eq!(a.snapshot().tint, b.snapshot().tint);
        assert_eq!(a.snapshot().particles, b.snapshot().particles);
    }

    #[test]
    fn test_zero_particles_never_schedules_ticks() {
        let settings = Settings {
            particle_count: 0,
            ..Settings::default()
        };
        let mut session = Session::from_settings(&settings, 4);
        let events = press(&mut session, 10);

        assert!(events.contains(&GameEvent::Depleted {
            points: 200,
            capacity: 11
        }));
        assert!(!events.contains(&GameEvent::AnimationStarted));
        assert!(!session.snapshot().active);
        assert_eq!(session.until_next_tick(), None);
        for _ in 0..100 {
            assert!(session.advance(TICK).is_empty());
        }
        assert_eq!(session.until_next_tick(), None);
    }

    #[test]
    fn test_from_settings_uses_config() {
        let settings = Settings {
            tick_interval_ms: 50,
            particle_count: 5,
            ..Settings::default()
        };
        let mut session = Session::from_settings(&settings, 8);
        assert_eq!(session.clock().interval_ms(), 50);

        press(&mut session, 10);
        assert_eq!(session.snapshot().particles.len(), 5);
        assert_eq!(session.until_next_tick(), Some(Duration::from_millis(50)));
    }
}
