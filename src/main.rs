//! FISH TANK'D entry point
//!
//! Runs the game in a terminal. Each line on stdin presses the button;
//! `q` or end of input quits. The session lives on the main thread, the
//! stdin reader only forwards presses over a channel.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use fish_tank::Settings;
use fish_tank::audio::{AudioSink, LogAudio, NullAudio, SoundEffect};
use fish_tank::hud::{HudText, WINDOW_TITLE};
use fish_tank::renderer::Frame;
use fish_tank::sim::{GameEvent, Session};

/// Longest we block waiting for input while no animation is running
const IDLE_WAIT: Duration = Duration::from_millis(250);

enum Input {
    Press,
    Quit,
}

/// Game instance holding all state
struct Game {
    session: Session,
    audio: Box<dyn AudioSink>,
    last_time: Instant,
    frames: u64,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let mut audio: Box<dyn AudioSink> = if settings.muted {
            Box::new(NullAudio)
        } else {
            Box::new(LogAudio::new(settings.master_volume, false))
        };
        if settings.background_music {
            audio.play_looped(SoundEffect::BackgroundMusic);
        }
        Self {
            session: Session::from_settings(settings, seed),
            audio,
            last_time: Instant::now(),
            frames: 0,
        }
    }

    /// Run any due animation ticks
    fn update(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_time;
        self.last_time = now;

        let events = self.session.advance(dt);
        self.handle(events);
    }

    fn press(&mut self) {
        let events = self.session.trigger();
        self.handle(events);
    }

    fn handle(&mut self, events: Vec<GameEvent>) {
        let mut redraw = false;
        for event in events {
            match event {
                GameEvent::Redraw => redraw = true,
                GameEvent::PlaySound(effect) => self.audio.play(effect),
                GameEvent::Depleted { points, capacity } => {
                    println!("*** Gauge emptied! {} points, new gauge {} ***", points, capacity);
                }
                GameEvent::AnimationStarted | GameEvent::AnimationFinished => {}
            }
        }
        if redraw {
            self.render();
        }
    }

    /// Build the frame and refresh the HUD
    fn render(&mut self) {
        let snapshot = self.session.snapshot();
        let frame = Frame::build(&snapshot);
        self.frames += 1;
        log::trace!(
            "frame {}: {} triangles, {} lines",
            self.frames,
            frame.triangles.len() / 3,
            frame.lines.len() / 2
        );

        let hud = HudText::from_snapshot(&snapshot);
        if snapshot.active {
            let lowest = snapshot
                .particles
                .iter()
                .map(|p| p.y)
                .fold(f32::INFINITY, f32::min);
            println!("{}  (particles falling, lowest y={:.2})", hud.line(), lowest);
        } else {
            println!("{}", hud.line());
        }
    }

    /// How long to wait for input before the next tick is due
    fn wait_time(&self) -> Duration {
        self.session.until_next_tick().unwrap_or(IDLE_WAIT)
    }
}

fn spawn_input_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let input = match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => Input::Quit,
                Ok(_) => Input::Press,
                Err(e) => {
                    log::warn!("stdin error: {}", e);
                    Input::Quit
                }
            };
            let quit = matches!(input, Input::Quit);
            if tx.send(input).is_err() || quit {
                return;
            }
        }
        let _ = tx.send(Input::Quit);
    });
    rx
}

fn main() {
    env_logger::init();
    log::info!("{} starting...", WINDOW_TITLE);

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let mut game = Game::new(&settings, seed);
    log::info!(
        "Game initialized with rules '{}' and seed {}",
        settings.rules.as_str(),
        game.session.seed()
    );
    println!("{}: press Enter to hit the fish, q to quit", WINDOW_TITLE);
    game.render();

    let input = spawn_input_reader();
    loop {
        match input.recv_timeout(game.wait_time()) {
            Ok(Input::Press) => {
                game.update();
                game.press();
            }
            Ok(Input::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        game.update();
    }

    let snapshot = game.session.snapshot();
    log::info!(
        "{} exiting with {} points after {} frames",
        WINDOW_TITLE,
        snapshot.points,
        game.frames
    );
}
