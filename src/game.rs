//! Frame driver
//!
//! Owns the simulation plus its adapters. Each display refresh calls
//! [`Game::frame`] with a timestamp and the renderer to draw into; gestures
//! arriving between frames are buffered and applied at the start of the next
//! step.

use glam::Vec2;

use crate::persistence::HighScoreStore;
use crate::platform::{AdService, BannerPlacement, Gesture, SwipeDecoder};
use crate::renderer::Renderer;
use crate::sim::{GameState, Layout, SimEvent, TickInput, clamp_frame_dt, tick};
use crate::tuning::Tuning;
use crate::ui;

pub struct Game<S, A> {
    state: GameState,
    store: S,
    ads: A,
    pending: TickInput,
    swipe: SwipeDecoder,
    last_timestamp: Option<f64>,
}

impl<S: HighScoreStore, A: AdService> Game<S, A> {
    /// Build a game on the start screen, seeding the best score from `store`
    pub fn new(layout: Layout, tuning: Tuning, mut store: S, ads: A, seed: u64) -> Self {
        let high_score = store.read_high_score();
        log::info!(
            "Office Rush ready ({}x{}, seed {}, best {:.0})",
            layout.width,
            layout.height,
            seed,
            high_score
        );
        Self {
            state: GameState::new(layout, tuning, high_score, seed),
            store,
            ads,
            pending: TickInput::default(),
            swipe: SwipeDecoder::new(),
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for debugging tools (e.g. forcing a spawn)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ads(&self) -> &A {
        &self.ads
    }

    pub fn touch_start(&mut self, point: Vec2) {
        self.swipe.touch_start(point);
    }

    pub fn touch_end(&mut self, point: Vec2) {
        if let Some(gesture) = self.swipe.touch_end(point) {
            self.handle_gesture(gesture);
        }
    }

    /// The touch was interrupted (e.g. by the system); drop it
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Queue a decoded gesture for the next step
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Left => self.pending.move_left = true,
            Gesture::Right => self.pending.move_right = true,
            Gesture::Up => self.pending.jump = true,
            Gesture::Down => self.pending.slide = true,
            Gesture::Tap(point) => {
                if ui::is_start_tap(self.state.phase, &self.state.layout, point) {
                    self.pending.start = true;
                }
            }
        }
    }

    /// Press start/restart without hit testing
    pub fn request_start(&mut self) {
        self.pending.start = true;
    }

    /// Merge already-decoded triggers (keyboard, bots) into the next step
    pub fn queue(&mut self, input: TickInput) {
        self.pending.move_left |= input.move_left;
        self.pending.move_right |= input.move_right;
        self.pending.jump |= input.jump;
        self.pending.slide |= input.slide;
        self.pending.start |= input.start;
    }

    /// Run one display frame: step the simulation, then draw
    pub fn frame<R: Renderer + ?Sized>(&mut self, timestamp_ms: f64, renderer: &mut R) -> Vec<SimEvent> {
        let raw_dt = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        let events = self.step(raw_dt);
        renderer.render(&self.state.snapshot());
        events
    }

    /// Advance the simulation by `dt_ms` (clamped) with the buffered input
    pub fn step(&mut self, dt_ms: f32) -> Vec<SimEvent> {
        let input = std::mem::take(&mut self.pending);
        let dt = clamp_frame_dt(dt_ms, self.state.tuning.max_frame_dt_ms);
        let events = tick(&mut self.state, &input, dt);
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    /// Forward side effects; none of them can fail the frame
    fn dispatch(&mut self, event: &SimEvent) {
        match event {
            SimEvent::SessionStarted => self.ads.hide_banner(),
            SimEvent::GameOver {
                score,
                new_high_score,
                ..
            } => {
                if *new_high_score {
                    if let Err(err) = self.store.write_high_score(*score) {
                        log::warn!("Could not save high score: {}", err);
                    }
                }
                self.ads
                    .show_banner(BannerPlacement::for_layout(&self.state.layout));
            }
            SimEvent::PowerUpCollected { .. } | SimEvent::HitAbsorbed { .. } => {}
        }
    }
}
