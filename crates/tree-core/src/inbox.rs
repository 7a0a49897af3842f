//! Sample delivery from input sources to the frame tick.
//!
//! Input arrives asynchronously (touch callbacks, a tracker thread, a JS
//! callback on web) and is queued on a channel. The frame tick drains the
//! queue before integrating, so the shared state only ever changes on the
//! tick's own timeline.

use crate::error::TrackerError;
use crate::gesture::{GestureClassifier, GestureOutcome};
use crate::landmarks::HandFrame;
use crate::state::SharedState;
use crate::touch::TouchSample;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// One recognized input event, consumed once by the classifier.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureSample {
    Landmarks(HandFrame),
    Touch { sample: TouchSample, at: f64 },
}

#[derive(Clone, Debug)]
pub struct GestureSender {
    tx: Sender<GestureSample>,
    closed: Arc<AtomicBool>,
}

impl GestureSender {
    /// Queue a sample. Returns `false` once the inbox has been dropped.
    pub fn send(&self, sample: GestureSample) -> bool {
        self.tx.send(sample).is_ok()
    }

    pub fn send_landmarks(&self, frame: HandFrame) -> bool {
        self.send(GestureSample::Landmarks(frame))
    }

    pub fn send_touch(&self, sample: TouchSample, at: f64) -> bool {
        self.send(GestureSample::Touch { sample, at })
    }

    /// True once the inbox has been dropped, without sending anything.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }
}

pub struct GestureInbox {
    rx: Receiver<GestureSample>,
    closed: Arc<AtomicBool>,
}

pub fn gesture_channel() -> (GestureSender, GestureInbox) {
    let (tx, rx) = mpsc::channel();
    let closed = Arc::new(AtomicBool::new(false));
    (
        GestureSender {
            tx,
            closed: Arc::clone(&closed),
        },
        GestureInbox { rx, closed },
    )
}

impl Drop for GestureInbox {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::Relaxed);
    }
}

impl GestureInbox {
    /// Apply every queued sample in arrival order, then the classifier's
    /// timers at `now`.
    pub fn drain(
        &self,
        classifier: &mut GestureClassifier,
        state: &mut SharedState,
        now: f64,
    ) -> GestureOutcome {
        let mut outcome = GestureOutcome::default();
        for sample in self.rx.try_iter() {
            let step = match &sample {
                GestureSample::Landmarks(frame) => {
                    classifier.classify_landmarks(frame, state)
                }
                GestureSample::Touch { sample, at } => {
                    classifier.classify_touch(sample, *at, state)
                }
            };
            outcome.merge(step);
        }
        classifier.tick(now, state);
        outcome
    }
}

/// A hand-landmark producer polled by [`TrackerTask`].
pub trait LandmarkSource: Send + 'static {
    /// `Ok(None)` means no analysis result this period.
    fn poll(&mut self) -> Result<Option<HandFrame>, TrackerError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use task::TrackerTask;

#[cfg(not(target_arch = "wasm32"))]
mod task {
    use super::*;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    /// Periodic landmark polling on its own thread with an explicit stop flag.
    /// Slow polls simply delay the next one; nothing is queued on the source
    /// side.
    pub struct TrackerTask {
        stop: Arc<AtomicBool>,
        handle: Option<JoinHandle<()>>,
    }

    impl TrackerTask {
        pub fn spawn<S: LandmarkSource>(
            mut source: S,
            sender: GestureSender,
            period: Duration,
        ) -> std::io::Result<Self> {
            let stop = Arc::new(AtomicBool::new(false));
            let stop_flag = Arc::clone(&stop);
            let handle = thread::Builder::new()
                .name("hand-tracker".into())
                .spawn(move || {
                    while !stop_flag.load(Ordering::Relaxed) && !sender.is_closed() {
                        match source.poll() {
                            Ok(Some(frame)) => {
                                if !sender.send_landmarks(frame) {
                                    break;
                                }
                            }
                            Ok(None) => {}
                            Err(e) => {
                                log::warn!("[tracker] stopping: {}", e);
                                sender.send_landmarks(HandFrame::empty());
                                break;
                            }
                        }
                        thread::sleep(period);
                    }
                    log::info!("[tracker] stopped");
                })?;
            Ok(Self {
                stop,
                handle: Some(handle),
            })
        }

        pub fn is_finished(&self) -> bool {
            self.handle.as_ref().map_or(true, |h| h.is_finished())
        }

        /// Ask the task to stop and wait for it.
        pub fn stop(mut self) {
            self.shutdown();
        }

        fn shutdown(&mut self) {
            self.stop.store(true, Ordering::Relaxed);
            if let Some(handle) = self.handle.take() {
                _ = handle.join();
            }
        }
    }

    impl Drop for TrackerTask {
        fn drop(&mut self) {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GestureKind, ShapeMode};
    use crate::touch::TouchPhase;
    use glam::Vec2;

    #[test]
    fn drain_applies_samples_in_order() {
        let (tx, inbox) = gesture_channel();
        let mut classifier = GestureClassifier::new();
        let mut state = SharedState::default();

        let a = Vec2::new(100.0, 100.0);
        let start = TouchSample::new(TouchPhase::Start, &[a, Vec2::new(200.0, 100.0)]);
        let pinch = TouchSample::new(TouchPhase::Move, &[a, Vec2::new(140.0, 100.0)]);
        tx.send_touch(start, 0.0);
        tx.send_touch(pinch, 0.1);
        let outcome = inbox.drain(&mut classifier, &mut state, 0.1);

        assert_eq!(state.shape_mode, ShapeMode::Condensed);
        assert_eq!(state.last_gesture(), Some(GestureKind::TouchCondense));
        assert!(outcome.mode_changed);
        assert!(outcome.gesture_changed);

        let idle = inbox.drain(&mut classifier, &mut state, 0.2);
        assert_eq!(idle, GestureOutcome::default());
    }

    #[test]
    fn sender_reports_dropped_inbox() {
        let (tx, inbox) = gesture_channel();
        drop(inbox);
        assert!(!tx.send_landmarks(HandFrame::empty()));
    }

    #[test]
    fn sender_sees_closed_inbox() {
        let (tx, inbox) = gesture_channel();
        assert!(!tx.is_closed());
        drop(inbox);
        assert!(tx.is_closed());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod tracker {
        use super::*;
        use crate::error::TrackerError;
        use std::thread;
        use std::time::{Duration, Instant};

        /// Replays a fixed list of poll results, then reports nothing forever.
        struct Scripted(Vec<Result<Option<HandFrame>, TrackerError>>);

        impl LandmarkSource for Scripted {
            fn poll(&mut self) -> Result<Option<HandFrame>, TrackerError> {
                if self.0.is_empty() {
                    Ok(None)
                } else {
                    self.0.remove(0)
                }
            }
        }

        fn wait_finished(task: &TrackerTask) -> bool {
            let deadline = Instant::now() + Duration::from_secs(2);
            while Instant::now() < deadline {
                if task.is_finished() {
                    return true;
                }
                thread::sleep(Duration::from_millis(2));
            }
            false
        }

        fn one_hand() -> HandFrame {
            HandFrame::from_flat(1, &[0.5; 42])
        }

        #[test]
        fn error_sends_one_empty_frame_and_finishes() {
            let (tx, inbox) = gesture_channel();
            let script = vec![
                Ok(Some(one_hand())),
                Ok(Some(one_hand())),
                Err(TrackerError::Unavailable("camera lost".into())),
            ];
            let task = TrackerTask::spawn(Scripted(script), tx, Duration::from_millis(1)).unwrap();
            assert!(wait_finished(&task));

            let received: Vec<_> = inbox.rx.try_iter().collect();
            assert_eq!(received.len(), 3);
            assert_eq!(
                received.last(),
                Some(&GestureSample::Landmarks(HandFrame::empty()))
            );
            assert!(received[..2]
                .iter()
                .all(|s| *s == GestureSample::Landmarks(one_hand())));
        }

        #[test]
        fn stop_joins_running_task() {
            let (tx, _inbox) = gesture_channel();
            let period = Duration::from_millis(1);
            let task = TrackerTask::spawn(Scripted(Vec::new()), tx, period).unwrap();
            assert!(!task.is_finished());
            task.stop();
        }

        #[test]
        fn dropped_inbox_ends_idle_task() {
            let (tx, inbox) = gesture_channel();
            let period = Duration::from_millis(5);
            let task = TrackerTask::spawn(Scripted(Vec::new()), tx, period).unwrap();
            drop(inbox);
            assert!(wait_finished(&task));
        }
    }
}
