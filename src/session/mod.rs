//! Sessions and the visualizer facade
//!
//! A [`Session`] binds one dataset, one algorithm and (for searches) one
//! target to the step sequence recorded for them and a
//! [`PlaybackController`] over it. Sessions are never edited: any change to
//! the dataset, category, algorithm or target installs a new session with a
//! fresh [`SessionId`], and the old session's pending timer goes with it.
//!
//! [`Visualizer`] is the surface the front-end talks to:
//! - [`configure`](Visualizer::configure) validates a selection and installs
//!   a session
//! - [`regenerate`](Visualizer::regenerate) replaces the dataset
//! - playback operations delegate to the active session's controller
//! - [`tick`](Visualizer::tick) polls the injected [`Clock`]
//! - [`frame`](Visualizer::frame) returns what to draw

pub mod cache;
pub mod errors;

pub use cache::StepCache;
pub use errors::{parse_target, ConfigError};

use crate::dataset::{self, Dataset};
use crate::highlight::{classify_all, Highlight};
use crate::playback::{
    Clock, PlaybackController, PlaybackState, PlaybackStatus, SessionId, SystemClock,
    TickOutcome, Timer, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED,
};
use crate::recorder::{Algorithm, Category, Step};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Start-up settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub dataset_size: usize,
    pub speed: u8,
    /// Seed for dataset generation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            dataset_size: dataset::DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

/// One configured algorithm run
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    dataset: Dataset,
    algorithm: Algorithm,
    target: Option<i32>,
    steps: Rc<[Step]>,
    playback: PlaybackController,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn category(&self) -> Category {
        self.algorithm.category()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn target(&self) -> Option<i32> {
        self.target
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Step at the playback position
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.playback.position())
    }
}

/// Everything the view needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub array: Vec<i32>,
    pub highlights: Vec<Highlight>,
    pub comparisons: usize,
    pub operations: usize,
    pub message: String,
    pub position: usize,
    pub total_steps: usize,
    pub status: PlaybackStatus,
}

pub struct Visualizer<C: Clock = SystemClock> {
    rng: StdRng,
    clock: C,
    size: usize,
    speed: u8,
    dataset: Dataset,
    session: Option<Session>,
    cache: StepCache,
    next_session: u64,
}

impl Visualizer<SystemClock> {
    pub fn new(config: VisualizerConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Visualizer<C> {
    /// Visualizer with an initial random dataset and no session
    pub fn with_clock(config: VisualizerConfig, clock: C) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let size = dataset::clamp_size(config.dataset_size);
        let dataset = dataset::generate(size, false, &mut rng);

        Visualizer {
            rng,
            clock,
            size,
            speed: config.speed.clamp(MIN_SPEED, MAX_SPEED),
            dataset,
            session: None,
            cache: StepCache::new(),
            next_session: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Validate a selection and install a session for it
    ///
    /// Nothing changes unless every argument is valid. A size that differs
    /// from the current dataset, or an algorithm that needs sorted input
    /// while the dataset is not sorted, regenerates the dataset first.
    /// Re-applying the active configuration keeps the active session.
    pub fn configure(
        &mut self,
        category: &str,
        algorithm_id: &str,
        size: Option<usize>,
        target: Option<&str>,
    ) -> Result<&Session, ConfigError> {
        let (algorithm, target) = validate(category, algorithm_id, target).map_err(|err| {
            warn!(%err, "configuration rejected");
            err
        })?;

        let size = size.map(dataset::clamp_size);
        let resize = size.is_some_and(|s| s != self.dataset.len());
        let resort = algorithm.requires_sorted() && !self.dataset.is_sorted();
        if resize || resort {
            if let Some(size) = size {
                self.size = size;
            }
            // the new selection replaces the session below
            self.session = None;
            let fresh = dataset::generate(self.size, algorithm.requires_sorted(), &mut self.rng);
            self.replace_dataset(fresh);
        }

        let session = match self.session.take() {
            Some(active) if active.algorithm == algorithm && active.target == target => active,
            _ => self.build(algorithm, target),
        };
        let session: &Session = self.session.insert(session);
        Ok(session)
    }

    /// Replace the dataset with a freshly generated one
    ///
    /// The step cache is dropped. An active session is replaced by a new
    /// one for the same algorithm and target over the new data.
    pub fn regenerate(&mut self, size: Option<usize>) -> &Dataset {
        if let Some(size) = size {
            self.size = dataset::clamp_size(size);
        }
        let sorted = self
            .session
            .as_ref()
            .is_some_and(|s| s.algorithm.requires_sorted());
        let fresh = dataset::generate(self.size, sorted, &mut self.rng);
        self.replace_dataset(fresh);
        &self.dataset
    }

    /// Replace the dataset with caller-supplied values
    pub fn load_values(&mut self, values: Vec<i32>) -> &Dataset {
        self.size = values.len();
        self.replace_dataset(Dataset::from_values(values));
        &self.dataset
    }

    /// Install `dataset` and rebuild the active session over it
    ///
    /// A session whose algorithm needs sorted input gets the values in
    /// ascending order.
    fn replace_dataset(&mut self, mut dataset: Dataset) {
        let needs_sorted = self
            .session
            .as_ref()
            .is_some_and(|s| s.algorithm.requires_sorted());
        if needs_sorted && !dataset.is_sorted() {
            debug!(len = dataset.len(), "sorting values for the active search");
            dataset = dataset.into_sorted();
        }
        info!(len = dataset.len(), sorted = dataset.is_sorted(), "dataset replaced");
        self.dataset = dataset;
        self.cache.clear();
        if let Some(old) = self.session.take() {
            self.session = Some(self.build(old.algorithm, old.target));
        }
    }

    fn build(&mut self, algorithm: Algorithm, target: Option<i32>) -> Session {
        let steps = self
            .cache
            .get_or_record(algorithm, target, self.dataset.values());
        self.next_session += 1;
        let id = SessionId(self.next_session);

        debug!(
            session = %id,
            algorithm = algorithm.id(),
            ?target,
            steps = steps.len(),
            "session built"
        );

        Session {
            id,
            dataset: self.dataset.clone(),
            algorithm,
            target,
            playback: PlaybackController::new(id, steps.len(), self.speed),
            steps,
        }
    }

    pub fn start(&mut self) -> bool {
        let now = self.clock.now();
        self.session
            .as_mut()
            .is_some_and(|s| s.playback.start(now))
    }

    pub fn pause(&mut self) -> bool {
        self.session.as_mut().is_some_and(|s| s.playback.pause())
    }

    pub fn step_forward(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.playback.step_forward())
    }

    pub fn step_backward(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.playback.step_backward())
    }

    pub fn seek(&mut self, position: usize) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.playback.seek(position))
    }

    /// Rewind the active session to idle at its first step
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.playback.reset();
        }
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let now = self.clock.now();
        if let Some(session) = self.session.as_mut() {
            session.playback.set_speed(self.speed, now);
        }
    }

    /// The pending auto-advance of the active session
    pub fn pending_timer(&self) -> Option<Timer> {
        self.session.as_ref().and_then(|s| s.playback.pending())
    }

    /// Advance if the pending timer is due
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.clock.now();
        match self.session.as_mut() {
            Some(session) => session.playback.poll(now),
            None => TickOutcome::Waiting,
        }
    }

    /// Deliver a specific timer, ignoring it unless it belongs to the
    /// active session and is still the pending one
    pub fn fire(&mut self, timer: Timer) -> TickOutcome {
        let now = self.clock.now();
        match self.session.as_mut() {
            Some(session) if session.id == timer.session => session.playback.fire(timer, now),
            _ => TickOutcome::Stale,
        }
    }

    /// Current frame of the active session
    pub fn frame(&self) -> Option<FrameView> {
        let session = self.session.as_ref()?;
        let step = session.current_step()?;
        let state = session.playback.state();

        Some(FrameView {
            array: step.array.clone(),
            highlights: classify_all(step),
            comparisons: step.comparisons,
            operations: step.operations,
            message: step.message.clone(),
            position: state.position,
            total_steps: session.steps.len(),
            status: state.status,
        })
    }
}

/// Parse a selection into an algorithm and, for searches, a target
///
/// Nothing is recorded; this is the check [`Visualizer::configure`] runs
/// before touching any state.
pub fn validate(
    category: &str,
    algorithm_id: &str,
    target: Option<&str>,
) -> Result<(Algorithm, Option<i32>), ConfigError> {
    let category: Category = category.parse().map_err(ConfigError::UnknownCategory)?;
    let algorithm = Algorithm::from_id(algorithm_id)
        .ok_or_else(|| ConfigError::UnknownAlgorithm(algorithm_id.to_string()))?;

    if algorithm.category() != category {
        return Err(ConfigError::CategoryMismatch {
            algorithm: algorithm_id.to_string(),
            category,
        });
    }

    let target = match category {
        Category::Searching => Some(parse_target(target)?),
        Category::Sorting => None,
    };
    Ok((algorithm, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::ManualClock;

    fn visualizer() -> Visualizer<ManualClock> {
        let config = VisualizerConfig {
            seed: Some(11),
            ..VisualizerConfig::default()
        };
        Visualizer::with_clock(config, ManualClock::new())
    }

    #[test]
    fn test_no_session_until_configured() {
        let mut vis = visualizer();
        assert!(vis.session().is_none());
        assert!(vis.frame().is_none());
        assert!(!vis.start());
        assert_eq!(vis.tick(), TickOutcome::Waiting);
    }

    #[test]
    fn test_rejected_configuration_keeps_session() {
        let mut vis = visualizer();
        let id = vis.configure("sorting", "bubble", None, None).unwrap().id();

        assert_eq!(
            vis.configure("searching", "binary", None, Some("abc"))
                .unwrap_err(),
            ConfigError::InvalidTarget("abc".to_string())
        );
        assert_eq!(
            vis.configure("searching", "binary", None, None).unwrap_err(),
            ConfigError::MissingTarget
        );
        assert!(matches!(
            vis.configure("sorting", "jump", None, None),
            Err(ConfigError::CategoryMismatch { .. })
        ));
        assert!(matches!(
            vis.configure("graphs", "bfs", None, None),
            Err(ConfigError::UnknownCategory(_))
        ));
        assert_eq!(vis.session().unwrap().id(), id);
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(
            validate("Searching", "jump", Some("12")),
            Ok((Algorithm::JumpSearch, Some(12)))
        );
        assert_eq!(
            validate("sorting", "merge", Some("ignored")),
            Ok((Algorithm::MergeSort, None))
        );
        assert_eq!(
            validate("sorting", "bogo", None),
            Err(ConfigError::UnknownAlgorithm("bogo".to_string()))
        );
        assert_eq!(
            validate("searching", "quick", Some("1")),
            Err(ConfigError::CategoryMismatch {
                algorithm: "quick".to_string(),
                category: Category::Searching,
            })
        );
    }

    #[test]
    fn test_same_configuration_keeps_session() {
        let mut vis = visualizer();
        let first = vis.configure("sorting", "quick", None, None).unwrap().id();
        let again = vis.configure("sorting", "quick", None, None).unwrap().id();
        assert_eq!(first, again);

        let other = vis.configure("sorting", "merge", None, None).unwrap().id();
        assert_ne!(first, other);
    }

    #[test]
    fn test_search_forces_sorted_dataset() {
        let mut vis = visualizer();
        vis.load_values(vec![9, 3, 7]);
        let session = vis
            .configure("searching", "binary", None, Some("7"))
            .unwrap();

        assert!(session.dataset().is_sorted());
        // a three-value load is regenerated at the minimum generated size
        assert_eq!(session.dataset().len(), dataset::MIN_SIZE);
    }

    #[test]
    fn test_linear_search_keeps_unsorted_values() {
        let mut vis = visualizer();
        vis.load_values(vec![9, 3, 7]);
        let session = vis
            .configure("searching", "linear", None, Some("7"))
            .unwrap();

        assert_eq!(session.dataset().values(), &[9, 3, 7]);
        assert_eq!(session.steps().last().unwrap().found, Some(2));
    }

    #[test]
    fn test_loading_unsorted_values_under_binary_search() {
        let mut vis = visualizer();
        vis.configure("searching", "binary", None, Some("3"))
            .unwrap();
        vis.load_values(vec![9, 7, 5, 3, 1]);

        let session = vis.session().unwrap();
        assert_eq!(session.algorithm(), Algorithm::BinarySearch);
        assert!(session.dataset().is_sorted());
        assert_eq!(session.dataset().values(), &[1, 3, 5, 7, 9]);

        let last = session.steps().last().unwrap();
        assert_eq!(last.kind, crate::recorder::StepKind::Found);
        assert_eq!(last.found, Some(1));
    }

    #[test]
    fn test_loading_unsorted_values_under_sort_keeps_order() {
        let mut vis = visualizer();
        vis.configure("sorting", "bubble", None, None).unwrap();
        vis.load_values(vec![9, 7, 5]);
        assert_eq!(vis.session().unwrap().dataset().values(), &[9, 7, 5]);
    }

    #[test]
    fn test_regenerate_replaces_session() {
        let mut vis = visualizer();
        let old = vis.configure("sorting", "bubble", None, None).unwrap().id();
        vis.start();
        let timer = vis.pending_timer().unwrap();

        vis.regenerate(Some(20));
        let session = vis.session().unwrap();
        assert_ne!(session.id(), old);
        assert_eq!(session.dataset().len(), 20);
        assert_eq!(session.state().status, PlaybackStatus::Idle);

        assert_eq!(vis.fire(timer), TickOutcome::Stale);
        assert_eq!(vis.frame().unwrap().position, 0);
    }

    #[test]
    fn test_frame_reflects_position() {
        let mut vis = visualizer();
        vis.load_values(vec![2, 1]);
        vis.configure("sorting", "bubble", None, None).unwrap();
        vis.step_forward();

        let frame = vis.frame().unwrap();
        assert_eq!(frame.position, 1);
        assert_eq!(frame.comparisons, 1);
        assert_eq!(
            frame.highlights,
            vec![Highlight::Comparing, Highlight::Comparing]
        );
        assert_eq!(frame.total_steps, vis.session().unwrap().steps().len());
    }
}
