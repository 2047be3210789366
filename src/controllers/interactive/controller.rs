use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::FrameError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::controllers::renderer::errors::RenderError;
use crate::controllers::renderer::fractal_renderer::{FractalRenderer, RenderSettings};
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        settings: RenderSettings,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            let mut renderer = FractalRenderer::new(settings);
            Self::worker_loop(&worker_shared, &mut renderer);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Replaces any pending request and returns the generation it was given.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, renderer: &mut FractalRenderer) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let generation_token = GenerationToken::new(&shared.generation, job_generation);
            let cancel_token =
                || shared.shutdown.load(Ordering::Relaxed) || generation_token.is_cancelled();

            let start = Instant::now();
            let result = renderer.render_cancelable(
                request.viewport,
                &request.config,
                request.width,
                request.height,
                &cancel_token,
            );
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderError::Cancelled) => {
                    log::trace!("generation {} superseded", job_generation);
                    continue;
                }
                Err(error) => RenderEvent::Error(FrameError {
                    generation: job_generation,
                    error,
                }),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .fetch_max(job_generation, Ordering::AcqRel);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
