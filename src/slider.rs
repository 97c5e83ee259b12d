use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::fit::{FitResult, compute_layout};
use crate::slide::{ContentId, Markers, Slide, SlideId};
use crate::state::{Direction, StepOutcome, StepState};

/// One circular slider bound to a container of a given width.
///
/// Instead of scrolling, a step moves the slide at one end of the sequence
/// to the other end. The moved slide is duplicated first: the copy grows in
/// at the far end while the original shrinks away, then the original is
/// removed.
pub struct Slider {
    slides: VecDeque<Slide>,
    config: SliderConfig,
    container_width: f32,

    state: StepState,
    pending: Option<Direction>,

    next_id: u64,
    autoplay_timer: f32,
}

impl Slider {
    /// Builds the slider and runs the initial layout pass.
    pub fn new<I>(contents: I, container_width: f32, config: SliderConfig) -> Self
    where
        I: IntoIterator<Item = (ContentId, f32)>,
    {
        let mut slider = Self {
            slides: VecDeque::new(),
            config,
            container_width,
            state: StepState::Idle,
            pending: None,
            next_id: 0,
            autoplay_timer: 0.0,
        };

        for (content, width) in contents {
            let id = slider.allocate_id();
            slider.slides.push_back(Slide::new(id, content, width));
        }

        slider.align();
        slider
    }

    fn allocate_id(&mut self) -> SlideId {
        self.next_id += 1;
        SlideId(self.next_id)
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// All slides in display order, including ones still collapsing.
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Number of slides taking part in the rotation.
    pub fn len(&self) -> usize {
        self.slides.iter().filter(|s| !s.markers.skip).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content of the rotating slides, head first.
    pub fn order(&self) -> Vec<ContentId> {
        self.slides.iter().filter(|s| !s.markers.skip).map(Slide::content).collect()
    }

    /// Resizes the container, re-running the layout pass if the width changed.
    pub fn set_container_width(&mut self, width: f32) {
        if width == self.container_width {
            return;
        }
        debug!(from = self.container_width, to = width, "container resized");
        self.container_width = width;
        self.align();
    }

    /// Layout pass: fits the sequence into the container and animates every
    /// slide towards its place in the row.
    pub fn align(&mut self) -> FitResult {
        let fit = compute_layout(&self.slides, self.container_width, self.config.capacity);
        let boundary = fit.boundary();
        let duration = self.config.duration;

        for slide in self.slides.iter_mut().filter(|s| !s.markers.skip) {
            if fit.contains(slide.id()) {
                let is_boundary = boundary == Some(slide.id());
                let gap = if is_boundary { 0.0 } else { fit.gap };

                slide.markers.laid_out = true;
                slide.markers.boundary = is_boundary;
                slide.animate(slide.intrinsic_width(), gap, duration, None);
            } else {
                slide.markers.laid_out = false;
                slide.markers.boundary = false;
                slide.animate(0.0, 0.0, duration, None);
            }
        }

        debug!(fitted = fit.count(), gap = fit.gap, width = self.container_width, "aligned slides");
        fit
    }

    /// Requests one step in `direction`.
    ///
    /// While a collapse is in flight the request is parked in a single
    /// pending slot, replacing any older pending request, and runs once the
    /// collapse completes.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        self.autoplay_timer = 0.0;

        if self.state != StepState::Idle {
            if let Some(replaced) = self.pending.replace(direction) {
                debug!(?replaced, ?direction, "replaced pending step");
            } else {
                debug!(?direction, "step queued behind running collapse");
            }
            return StepOutcome::Queued;
        }

        let exiting = match direction {
            Direction::Forward => self.slides.iter().position(|s| !s.markers.skip),
            Direction::Backward => self.slides.iter().rposition(|s| !s.markers.skip),
        };
        let Some(mut index) = exiting else {
            debug!(?direction, "step on empty slider ignored");
            return StepOutcome::Ignored;
        };

        let id = self.allocate_id();
        let copy = self.slides[index].duplicate(id);
        match direction {
            Direction::Forward => self.slides.push_back(copy),
            Direction::Backward => {
                self.slides.push_front(copy);
                index += 1;
            }
        }

        let duration = self.config.duration;
        let original = &mut self.slides[index];
        trace!(exiting = original.id().0, copy = id.0, "duplicated boundary slide");
        original.markers = Markers { skip: true, ..Markers::default() };
        original.animate(0.0, 0.0, duration, Some(finish_collapse));
        self.set_state(StepState::Collapsing);

        self.align();
        StepOutcome::Started
    }

    /// Advances every running animation by `dt` seconds and runs the
    /// completion handlers of the ones that finished.
    pub fn update(&mut self, dt: f32) {
        let mut completed = Vec::new();
        for slide in self.slides.iter_mut() {
            if let Some(handler) = slide.update(dt) {
                completed.push((handler, slide.id()));
            }
        }
        for (handler, id) in completed {
            handler(self, id);
        }

        if let Some(interval) = self.config.autoplay {
            if self.state == StepState::Idle && self.pending.is_none() {
                self.autoplay_timer += dt;
                if self.autoplay_timer >= interval {
                    trace!("autoplay step");
                    self.step(Direction::Forward);
                }
            }
        }
    }

    fn set_state(&mut self, state: StepState) {
        trace!(from = ?self.state, to = ?state, "step state");
        self.state = state;
    }
}

/// Drops the collapsed original and starts the pending step, if any.
fn finish_collapse(slider: &mut Slider, id: SlideId) {
    slider.slides.retain(|s| s.id() != id);
    slider.set_state(StepState::Idle);

    if let Some(direction) = slider.pending.take() {
        slider.step(direction);
    }
}
