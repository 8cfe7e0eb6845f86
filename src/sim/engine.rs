//! The game state machine
//!
//! `Engine` is the single entry point for the loop driver and the UI: commands
//! move it between phases, `tick` advances one fixed step while Playing, and
//! `snapshot` hands a read-only view to the renderer.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::{Direction, InputState};
use super::state::{
    GameEvent, GamePhase, Obstacle, ObstacleView, Player, RunState, RunSummary, Snapshot, Track,
};
use super::{collision, movement, scoring, spawn};
use crate::config::{ConfigError, EngineConfig};

pub struct Engine {
    config: EngineConfig,
    track: Track,
    seed: u64,
    rng: Pcg32,
    phase: GamePhase,
    player: Player,
    obstacles: Vec<Obstacle>,
    run: RunState,
    high_score: u64,
    input: InputState,
    events: Vec<GameEvent>,
    last_run: Option<RunSummary>,
}

impl Engine {
    /// Create an idle engine, validating the config first
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Idle engine with the default config
    pub fn with_defaults(seed: u64) -> Self {
        Self::build(EngineConfig::default(), seed)
    }

    fn build(config: EngineConfig, seed: u64) -> Self {
        let track = Track::from_config(&config);
        Self {
            player: Player::spawn(&config, &track),
            run: RunState::new(config.base_speed),
            track,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            obstacles: Vec::new(),
            high_score: 0,
            input: InputState::default(),
            events: Vec::new(),
            last_run: None,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True while the simulation is ticking (drives looped ambience)
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Summary of the most recent finished run
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn press(&mut self, dir: Direction) {
        self.input.press(dir);
    }

    pub fn release(&mut self, dir: Direction) {
        self.input.release(dir);
    }

    /// Replace both flags at once (autopilot)
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a fresh run from Idle or GameOver
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.clear_run();
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::RunStarted);
                log::info!("Run started (high score {})", self.high_score);
                true
            }
            phase => {
                log::debug!("Ignoring start() while {:?}", phase);
                false
            }
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignoring pause() while {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Paused;
        self.events.push(GameEvent::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            log::debug!("Ignoring resume() while {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Resumed);
        true
    }

    /// Pause when playing, resume when paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Back to Idle with an empty run; the high score survives
    pub fn reset(&mut self) {
        self.clear_run();
        self.phase = GamePhase::Idle;
    }

    fn clear_run(&mut self) {
        self.player = Player::spawn(&self.config, &self.track);
        self.obstacles.clear();
        self.run = RunState::new(self.config.base_speed);
    }

    /// Advance the simulation by one fixed step (no-op unless Playing)
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let axis = self.config.orientation;
        self.run.ticks += 1;

        movement::move_player(
            &mut self.player,
            &self.input,
            &self.track,
            self.config.player_step,
            axis,
        );
        movement::advance_obstacles(&mut self.obstacles, self.run.game_speed, axis);
        self.run.distance += self.run.game_speed;

        spawn::run_spawner(
            &mut self.run,
            &mut self.obstacles,
            &self.config,
            &self.track,
            &mut self.rng,
        );

        // Collisions first so a consumed obstacle is never counted as exited
        let report = collision::resolve_collisions(&self.player.rect, &mut self.obstacles);
        movement::prune_exited(
            &mut self.obstacles,
            axis.along(self.config.field_size()),
            axis,
        );

        if report.bonuses > 0 {
            let reward = scoring::award_bonus(&mut self.run, report.bonuses, self.config.bonus_reward);
            self.events.push(GameEvent::BonusCollected { reward });
        }

        if report.hazard_hit {
            self.end_run();
            return;
        }

        if scoring::advance_score(
            &mut self.run,
            self.config.speed_threshold,
            self.config.speed_increment,
        ) {
            log::info!(
                "Score {}: speed up to {:.1}",
                self.run.score,
                self.run.game_speed
            );
            self.events.push(GameEvent::SpeedIncreased {
                speed: self.run.game_speed,
            });
        }
    }

    fn end_run(&mut self) {
        let score = self.run.score;
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::HazardCollision { score });

        if scoring::record_high_score(&mut self.high_score, score) {
            log::info!("New high score: {}", score);
            self.events.push(GameEvent::NewHighScore { score });
        }

        let summary = RunSummary {
            score,
            bonus_points: self.run.bonus_points,
            ticks: self.run.ticks,
        };
        log::info!(
            "Game over: score {} + bonus {} = {}",
            summary.score,
            summary.bonus_points,
            summary.total()
        );
        self.last_run = Some(summary);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            orientation: self.config.orientation,
            field: self.config.field_size(),
            track: self.track,
            player: self.player.rect,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect,
                    kind: o.kind,
                })
                .collect(),
            score: self.run.score,
            bonus_points: self.run.bonus_points,
            high_score: self.high_score,
            game_speed: self.run.game_speed,
            distance: self.run.distance,
        }
    }
}
