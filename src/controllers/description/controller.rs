use crate::controllers::description::describer::{ViewDescriber, describe_view};
use crate::controllers::description::ports::presenter_port::DescriptionPresenterPort;
use crate::core::data::viewport::Viewport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub generation: u64,
    pub viewport: Viewport,
    pub text: String,
}

struct SharedState {
    generation: AtomicU64,
    latest: Mutex<Option<Description>>,
    describer: Arc<dyn ViewDescriber>,
    presenter_port: Arc<dyn DescriptionPresenterPort>,
}

/// Runs each description request on its own thread so rendering never waits.
///
/// Requests may overlap. Only a completion whose generation is still the
/// newest is kept and presented; older ones are dropped.
pub struct DescriptionController {
    shared: Arc<SharedState>,
    workers: Vec<JoinHandle<()>>,
}

impl DescriptionController {
    pub fn new(
        describer: Arc<dyn ViewDescriber>,
        presenter_port: Arc<dyn DescriptionPresenterPort>,
    ) -> Self {
        Self {
            shared: Arc::new(SharedState {
                generation: AtomicU64::new(0),
                latest: Mutex::new(None),
                describer,
                presenter_port,
            }),
            workers: Vec::new(),
        }
    }

    pub fn request(&mut self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let shared = Arc::clone(&self.shared);

        self.workers.retain(|worker| !worker.is_finished());
        self.workers.push(thread::spawn(move || {
            let text = describe_view(
                shared.describer.as_ref(),
                viewport.center_x(),
                viewport.center_y(),
                viewport.zoom(),
            );
            Self::complete(&shared, Description {
                generation,
                viewport,
                text,
            });
        }));

        generation
    }

    /// The most recent description that was still current when it arrived.
    #[must_use]
    pub fn latest(&self) -> Option<Description> {
        self.shared
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Blocks until every outstanding request has finished.
    pub fn wait_idle(&mut self) {
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                log::error!("description worker panicked");
            }
        }
    }

    fn complete(shared: &SharedState, description: Description) {
        {
            let mut latest = shared
                .latest
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            if description.generation != shared.generation.load(Ordering::Acquire) {
                log::debug!("dropping stale description {}", description.generation);
                return;
            }

            *latest = Some(description.clone());
        }

        shared.presenter_port.present(description);
    }
}

impl Drop for DescriptionController {
    fn drop(&mut self) {
        self.wait_idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::description::describer::FALLBACK_DESCRIPTION;
    use crate::controllers::description::errors::DescribeError;
    use crate::controllers::description::geometric::GeometricDescriber;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{OnceLock, Weak};
    use std::time::Duration;

    #[derive(Default)]
    struct MockPresenterPort {
        descriptions: Mutex<Vec<Description>>,
    }

    impl DescriptionPresenterPort for MockPresenterPort {
        fn present(&self, description: Description) {
            self.descriptions.lock().unwrap().push(description);
        }
    }

    /// Blocks each call until the test releases it.
    struct GatedDescriber {
        gate: Mutex<Receiver<()>>,
    }

    impl ViewDescriber for GatedDescriber {
        fn describe(&self, center_x: f64, _: f64, _: f64) -> Result<String, DescribeError> {
            self.gate
                .lock()
                .unwrap()
                .recv_timeout(Duration::from_secs(2))
                .map_err(|_| DescribeError::Service {
                    message: "gate closed".to_string(),
                })?;
            Ok(format!("centre {}", center_x))
        }
    }

    /// Reads the controller's latest description from inside `present`.
    #[derive(Default)]
    struct ReadBackPresenterPort {
        shared: OnceLock<Weak<SharedState>>,
        seen: Mutex<Vec<Option<Description>>>,
    }

    impl DescriptionPresenterPort for ReadBackPresenterPort {
        fn present(&self, _description: Description) {
            let latest = self
                .shared
                .get()
                .and_then(Weak::upgrade)
                .and_then(|shared| shared.latest.lock().unwrap().clone());
            self.seen.lock().unwrap().push(latest);
        }
    }

    struct FailingDescriber;

    impl ViewDescriber for FailingDescriber {
        fn describe(&self, _: f64, _: f64, _: f64) -> Result<String, DescribeError> {
            Err(DescribeError::Service {
                message: "offline".to_string(),
            })
        }
    }

    fn gated() -> (Arc<GatedDescriber>, Sender<()>) {
        let (sender, receiver) = mpsc::channel();
        let describer = Arc::new(GatedDescriber {
            gate: Mutex::new(receiver),
        });
        (describer, sender)
    }

    #[test]
    fn request_presents_description() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = DescriptionController::new(
            Arc::new(GeometricDescriber),
            Arc::clone(&presenter_port) as Arc<dyn DescriptionPresenterPort>,
        );

        let generation = controller.request(Viewport::INITIAL);
        controller.wait_idle();

        let latest = controller.latest().unwrap();
        assert_eq!(latest.generation, generation);
        assert_eq!(latest.viewport, Viewport::INITIAL);
        assert!(latest.text.contains("main cardioid"));
        assert_eq!(presenter_port.descriptions.lock().unwrap().len(), 1);
    }

    #[test]
    fn failing_describer_presents_fallback() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = DescriptionController::new(
            Arc::new(FailingDescriber),
            Arc::clone(&presenter_port) as Arc<dyn DescriptionPresenterPort>,
        );

        controller.request(Viewport::INITIAL);
        controller.wait_idle();

        assert_eq!(controller.latest().unwrap().text, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn older_completion_is_discarded() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let (describer, gate) = gated();
        let mut controller = DescriptionController::new(
            describer,
            Arc::clone(&presenter_port) as Arc<dyn DescriptionPresenterPort>,
        );

        controller.request(Viewport::new(1.0, 0.0, 1.0).unwrap());
        let newest = controller.request(Viewport::new(2.0, 0.0, 1.0).unwrap());

        gate.send(()).unwrap();
        gate.send(()).unwrap();
        controller.wait_idle();

        let presented = presenter_port.descriptions.lock().unwrap().clone();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].generation, newest);
        assert_eq!(presented[0].text, "centre 2");
        assert_eq!(controller.latest(), presented.first().cloned());
    }

    #[test]
    fn no_description_before_first_request() {
        let controller = DescriptionController::new(
            Arc::new(GeometricDescriber),
            Arc::new(MockPresenterPort::default()),
        );

        assert!(controller.latest().is_none());
    }

    #[test]
    fn presenter_can_read_latest_while_presenting() {
        let presenter_port = Arc::new(ReadBackPresenterPort::default());
        let mut controller = DescriptionController::new(
            Arc::new(GeometricDescriber),
            Arc::clone(&presenter_port) as Arc<dyn DescriptionPresenterPort>,
        );
        let _ = presenter_port.shared.set(Arc::downgrade(&controller.shared));

        controller.request(Viewport::INITIAL);
        controller.wait_idle();

        let seen = presenter_port.seen.lock().unwrap().clone();
        assert_eq!(seen, vec![controller.latest()]);
        assert!(seen[0].is_some());
    }
}
