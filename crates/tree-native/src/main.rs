mod audio;
mod constants;
mod input;
mod sim;

use audio::CuePlayer;
use constants::*;
use glam::Vec2;
use input::TouchInput;
use instant::Instant;
use sim::{nudge_spin, SharedPose, SimPose, SimulatedTracker};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tree_core::{
    apply_setting, gesture_channel, starfield, AudioCue, FpsCounter, GestureClassifier,
    GestureInbox, GestureSender, HandFrame, HudSnapshot, InteractionMode, Integrator,
    PhotoOverlay, PointRenderer, Setting, SharedState, TouchSample, TrackerTask,
    MAX_BRIGHTNESS, PHOTO_COUNT, STAR_COUNT,
};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

struct App {
    state: SharedState,
    classifier: GestureClassifier,
    sender: GestureSender,
    inbox: GestureInbox,
    integrator: Integrator,
    photos: PhotoOverlay,
    touches: TouchInput,
    pose: SharedPose,
    tracker: Option<TrackerTask>,
    audio: Option<CuePlayer>,
    fps: FpsCounter,
    clock: Instant,
    last_frame: f64,
    next_title: f64,
    field_dirty: bool,
}

impl App {
    fn new() -> Self {
        let state = SharedState::default();
        let (sender, inbox) = gesture_channel();
        let integrator = Integrator::new(&state, rand::random());
        let photos = PhotoOverlay::scatter(PHOTO_COUNT, &mut rand::thread_rng());
        let audio = CuePlayer::start();
        if audio.is_none() {
            log::warn!("[audio] no output device, cues disabled");
        }
        Self {
            state,
            classifier: GestureClassifier::new(),
            sender,
            inbox,
            integrator,
            photos,
            touches: TouchInput::default(),
            pose: Arc::new(Mutex::new(SimPose::Absent)),
            tracker: None,
            audio,
            fps: FpsCounter::default(),
            clock: Instant::now(),
            last_frame: 0.0,
            next_title: 0.0,
            field_dirty: true,
        }
    }

    fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    fn push_touch(&self, sample: TouchSample) {
        self.sender.send_touch(sample, self.now());
    }

    fn set_pose(&self, f: impl FnOnce(SimPose) -> SimPose) {
        if let Ok(mut pose) = self.pose.lock() {
            *pose = f(*pose);
        }
    }

    fn toggle_camera(&mut self) {
        match self.tracker.take() {
            Some(task) => {
                task.stop();
                self.sender.send_landmarks(HandFrame::empty());
                self.state.interaction = InteractionMode::Cruise;
                log::info!("[tracker] camera off, cruising");
            }
            None => {
                let source = SimulatedTracker::new(Arc::clone(&self.pose));
                let period = Duration::from_millis(TRACKER_PERIOD_MS);
                match TrackerTask::spawn(source, self.sender.clone(), period) {
                    Ok(task) => {
                        self.tracker = Some(task);
                        self.state.interaction = InteractionMode::Interactive;
                        log::info!("[tracker] simulated camera on");
                    }
                    Err(e) => log::warn!("[tracker] could not start: {}", e),
                }
            }
        }
    }

    fn apply(&mut self, setting: Setting) {
        match apply_setting(&mut self.state, &mut self.integrator, setting) {
            Ok(_) => self.field_dirty = true,
            Err(e) => log::warn!("[settings] rejected: {}", e),
        }
    }

    fn key(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::ArrowLeft) => self.set_pose(|p| nudge_spin(p, -SIM_SPIN_STEP)),
            Key::Named(NamedKey::ArrowRight) => self.set_pose(|p| nudge_spin(p, SIM_SPIN_STEP)),
            Key::Character(c) => {
                let params = self.state.params.clone();
                match c.to_lowercase().as_str() {
                    "0" => self.set_pose(|_| SimPose::Absent),
                    "1" => self.set_pose(|_| SimPose::OpenHands),
                    "2" => self.set_pose(|_| SimPose::CloseHands),
                    "3" => self.set_pose(|_| SimPose::Pinch),
                    "c" => self.toggle_camera(),
                    "=" | "+" => self.apply(Setting::ParticleCount(params.particle_count * 2)),
                    "-" => self.apply(Setting::ParticleCount(params.particle_count / 2)),
                    "t" => self.apply(Setting::Theme(params.theme.next())),
                    "[" => self.apply(Setting::Brightness(
                        (params.brightness - BRIGHTNESS_STEP).max(0.0),
                    )),
                    "]" => self.apply(Setting::Brightness(
                        (params.brightness + BRIGHTNESS_STEP).min(MAX_BRIGHTNESS),
                    )),
                    "p" => self.apply(Setting::PhotosVisible(!params.photos_visible)),
                    "r" => self.apply(Setting::Reset),
                    "m" => {
                        if let Some(audio) = &self.audio {
                            let muted = audio.toggle_mute();
                            log::info!("[audio] {}", if muted { "muted" } else { "unmuted" });
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn frame(
        &mut self,
        renderer: &mut PointRenderer<'_>,
        window: &Window,
    ) -> Result<(), wgpu::SurfaceError> {
        let now = self.now();
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        if self.tracker.as_ref().is_some_and(|t| t.is_finished()) {
            self.tracker = None;
            self.state.interaction = InteractionMode::Cruise;
            log::warn!("[tracker] tracker ended, cruising");
        }

        let outcome = self.inbox.drain(&mut self.classifier, &mut self.state, now);
        let out = self.integrator.step(&self.state, dt);

        if out.positions_changed || out.colors_changed || self.field_dirty {
            renderer.upload_particles(self.integrator.field());
            self.field_dirty = false;
        }
        renderer.upload_sprites(self.photos.sprite_positions(now as f32), out.overlay_visible);

        if let (Some(audio), Some(cue)) = (
            &self.audio,
            AudioCue::for_frame(outcome.gesture_changed, out.mode_changed),
        ) {
            audio.play(cue);
        }

        self.fps.frame(now);
        if now >= self.next_title {
            self.next_title = now + TITLE_REFRESH_SEC;
            let hud = HudSnapshot::capture(&self.state, self.fps.fps());
            window.set_title(&format!("{} | {}", WINDOW_TITLE, hud.one_line()));
        }

        renderer.render(out.rotation, self.state.params.brightness)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    let window = &window;

    let size = window.inner_size();
    let stars = starfield(STAR_COUNT, &mut rand::thread_rng());
    let mut renderer = pollster::block_on(PointRenderer::new(
        window,
        size.width.max(1),
        size.height.max(1),
        &stars,
    ))?;
    let mut app = App::new();
    log::info!("[app] keys: 1 open, 2 close, 3 pinch, arrows spin, 0 hands away, C camera");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => renderer.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => app.key(&logical_key),
            WindowEvent::Touch(touch) => {
                let at = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                let sample = app.touches.touch(touch.id, touch.phase, at);
                app.push_touch(sample);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let at = Vec2::new(position.x as f32, position.y as f32);
                if let Some(sample) = app.touches.cursor_moved(at) {
                    app.push_touch(sample);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(sample) = app.touches.left_button(state) {
                    app.push_touch(sample);
                }
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame(&mut renderer, window) {
            Ok(_) => window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => {
                let size = window.inner_size();
                renderer.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
