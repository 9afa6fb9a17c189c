//! Process-wide game shell
//!
//! Owns the collaborators and the score board, and runs sessions back to
//! back until the host asks to quit.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::error::StartupError;
use crate::host::{AudioBackend, FramePacer, InputSource, Renderer};
use crate::render::build_frame;
use crate::scores::ScoreBoard;
use crate::settings::Settings;
use crate::sim::{Session, SessionOutcome};

pub struct GameShell<I, R, A, P>
where
    I: InputSource,
    R: Renderer,
    A: AudioBackend,
    P: FramePacer,
{
    settings: Settings,
    scores: ScoreBoard,
    running: bool,
    /// Hands out one seed per session
    seeds: Pcg32,
    input: I,
    renderer: R,
    audio: AudioManager<A>,
    pacer: P,
}

impl<I, R, A, P> GameShell<I, R, A, P>
where
    I: InputSource,
    R: Renderer,
    A: AudioBackend,
    P: FramePacer,
{
    pub fn new(settings: Settings, input: I, renderer: R, audio: A, pacer: P) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("{} shell created (seed {seed})", settings.title);
        let audio = AudioManager::new(audio, settings.effective_music_volume());
        Self {
            settings,
            scores: ScoreBoard::new(),
            running: true,
            seeds: Pcg32::seed_from_u64(seed),
            input,
            renderer,
            audio,
            pacer,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    /// Run sessions until the host requests quit, then tear down
    pub fn run(&mut self) -> Result<(), StartupError> {
        let music = self.settings.asset_manifest().music;
        self.audio.play_music(&music)?;

        while self.running {
            self.run_session();
        }

        self.shutdown();
        Ok(())
    }

    /// Play one session to its end, or until quit is requested.
    /// Returns the outcome if the session finished.
    pub fn run_session(&mut self) -> Option<SessionOutcome> {
        let seed = self.seeds.random::<u64>();
        let mut session = Session::new(seed, self.scores.best());
        log::info!(
            "Session {} starting (seed {seed}, best {})",
            self.scores.sessions_played() + 1,
            session.best_score()
        );

        while !session.is_ended() {
            let dt = self.pacer.wait_next_tick();
            let events = self.input.poll();
            if events.quit_requested {
                log::info!("Quit requested");
                self.running = false;
            }

            // The current tick still completes after a quit request
            session.tick(&events.keys, dt);
            self.renderer.present(&build_frame(&session));

            if !self.running {
                break;
            }
        }

        match session.outcome() {
            Some(outcome) => {
                if let Some(rank) = self.scores.record(&outcome) {
                    log::info!("Score {} ranked #{rank}", outcome.score);
                }
                Some(outcome)
            }
            None => {
                self.scores.raise_best(session.best_score());
                log::info!("Session abandoned at score {}", session.score());
                None
            }
        }
    }

    /// Ask the shell to stop after the current tick
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    fn shutdown(&mut self) {
        self.audio.stop();
        self.renderer.shutdown();
        log::info!(
            "Shell stopped after {} session(s), best score {}",
            self.scores.sessions_played(),
            self.scores.best()
        );
    }
}
