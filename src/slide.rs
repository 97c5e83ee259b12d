use crate::slider::Slider;
use crate::tween::Animated;

/// Identity of one slide entity inside its slider. A duplicate gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub u64);

/// Reference to the image a slide shows. Shared between a slide and its duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub usize);

/// Handler run once a slide's animation completes, with the owning slider
/// passed in explicitly.
pub type Completion = fn(&mut Slider, SlideId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
    Transitioning,
}

/// Marker flags toggled by the layout pass and the rotation controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Part of the currently fitted row.
    pub laid_out: bool,
    /// Last fitted slide; carries no trailing gap.
    pub boundary: bool,
    /// Pending removal; ignored by the layout pass.
    pub skip: bool,
}

pub struct Slide {
    id: SlideId,
    content: ContentId,
    intrinsic_width: f32,

    width: Animated,
    gap: Animated,

    pub markers: Markers,
    on_complete: Option<Completion>,
}

impl Slide {
    /// A new slide starts collapsed; the first layout pass grows it into view.
    pub fn new(id: SlideId, content: ContentId, intrinsic_width: f32) -> Self {
        let intrinsic_width = if intrinsic_width.is_finite() { intrinsic_width.max(0.0) } else { 0.0 };

        Self {
            id,
            content,
            intrinsic_width,
            width: Animated::new(0.0),
            gap: Animated::new(0.0),
            markers: Markers::default(),
            on_complete: None,
        }
    }

    /// Shallow copy showing the same content, collapsed and unmarked.
    pub fn duplicate(&self, id: SlideId) -> Self {
        Self::new(id, self.content, self.intrinsic_width)
    }

    pub fn id(&self) -> SlideId {
        self.id
    }

    pub fn content(&self) -> ContentId {
        self.content
    }

    pub fn intrinsic_width(&self) -> f32 {
        self.intrinsic_width
    }

    /// Currently displayed width.
    pub fn width(&self) -> f32 {
        self.width.value()
    }

    /// Currently displayed trailing gap.
    pub fn gap(&self) -> f32 {
        self.gap.value()
    }

    pub fn is_animating(&self) -> bool {
        self.width.is_animating() || self.gap.is_animating()
    }

    pub fn visibility(&self) -> Visibility {
        if self.is_animating() {
            Visibility::Transitioning
        } else if self.width.value() > 0.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// Animates width and gap to the given targets over `duration` seconds.
    ///
    /// `on_complete` replaces any previously registered handler and fires
    /// from [`Slide::update`] once both properties have settled.
    pub fn animate(&mut self, width: f32, gap: f32, duration: f32, on_complete: Option<Completion>) {
        self.width.animate_to(width, duration);
        self.gap.animate_to(gap, duration);
        self.on_complete = on_complete;
    }

    /// Advances the slide's animations; returns the completion handler on
    /// the frame they settle.
    pub fn update(&mut self, dt: f32) -> Option<Completion> {
        self.width.update(dt);
        self.gap.update(dt);

        if self.is_animating() {
            return None;
        }
        self.on_complete.take()
    }
}
