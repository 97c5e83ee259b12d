use raylib::prelude::*;

use crate::constants::*;
use crate::slide::{ContentId, Visibility};
use crate::slider::Slider;
use crate::state::{Direction, StepState};

/// Screen geometry of one slider row: the slide list between a "previous"
/// and a "next" button.
///
/// `list` always has the full slide height so images keep their aspect
/// ratio; on rows shorter than that, `clip` crops them vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub bounds: Rectangle,
    pub list: Rectangle,
    pub clip: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
}

fn contains(rec: &Rectangle, point: Vector2) -> bool {
    point.x >= rec.x && point.x <= rec.x + rec.width && point.y >= rec.y && point.y <= rec.y + rec.height
}

impl Container {
    /// Geometry of row `row` out of `rows` rows stacked over the screen.
    pub fn for_row(row: usize, rows: usize, screen_width: f32, screen_height: f32, slide_height: f32) -> Self {
        let rows = rows.max(1) as f32;
        let row_height = ((screen_height - ROW_PADDING) / rows).max(0.0);

        let bounds = Rectangle::new(
            ROW_PADDING,
            ROW_PADDING + row as f32 * row_height,
            (screen_width - 2.0 * ROW_PADDING).max(0.0),
            (row_height - ROW_PADDING).max(0.0),
        );

        let side = BUTTON_WIDTH + BUTTON_SPACING;
        let list = Rectangle::new(
            bounds.x + side,
            bounds.y + (bounds.height - slide_height) * 0.5,
            (bounds.width - 2.0 * side).max(0.0),
            slide_height,
        );
        let clip_height = slide_height.min(bounds.height);
        let clip = Rectangle::new(
            list.x,
            bounds.y + (bounds.height - clip_height) * 0.5,
            list.width,
            clip_height,
        );

        let prev_button = Rectangle::new(bounds.x, bounds.y, BUTTON_WIDTH, bounds.height);
        let next_button = Rectangle::new(bounds.x + bounds.width - BUTTON_WIDTH, bounds.y, BUTTON_WIDTH, bounds.height);

        Self { bounds, list, clip, prev_button, next_button }
    }

    /// Step requested by a click at `point`, if it hits a button.
    ///
    /// "previous" sends the head slide to the tail, "next" brings the tail
    /// slide back to the head.
    pub fn button_at(&self, point: Vector2) -> Option<Direction> {
        if contains(&self.prev_button, point) {
            Some(Direction::Forward)
        } else if contains(&self.next_button, point) {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// Where one slide lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePlacement {
    pub content: ContentId,
    pub dest: Rectangle,
    /// Share of the image width currently shown, from its left edge.
    pub shown: f32,
}

/// Lays the slides out left to right from the list's left edge, each one
/// followed by its gap. Collapsed slides are left out.
pub fn place_slides(slider: &Slider, list: Rectangle) -> Vec<SlidePlacement> {
    let mut placements = Vec::new();
    let mut x = list.x;

    for slide in slider.slides() {
        let width = slide.width();
        if width >= 0.5 && slide.intrinsic_width() > 0.0 {
            placements.push(SlidePlacement {
                content: slide.content(),
                dest: Rectangle::new(x, list.y, width, list.height),
                shown: (width / slide.intrinsic_width()).min(1.0),
            });
        }
        x += width + slide.gap();
    }
    placements
}

fn draw_button(d: &mut RaylibDrawHandle, rec: Rectangle, label: &str, hovered: bool) {
    let color = if hovered { Color::GRAY } else { Color::DARKGRAY };
    d.draw_rectangle_rec(rec, color);

    let font_size = 32;
    d.draw_text(
        label,
        (rec.x + rec.width * 0.5) as i32 - font_size / 4,
        (rec.y + rec.height * 0.5) as i32 - font_size / 2,
        font_size,
        Color::WHITE,
    );
}

/// Draws one slider row: its buttons, its slides clipped to the list area
/// and, in debug mode, the slide markers.
pub fn draw_row(
    d: &mut RaylibDrawHandle,
    container: &Container,
    slider: &Slider,
    textures: &[Texture2D],
    mouse: Vector2,
    debug: bool,
) {
    let hovered = container.button_at(mouse);
    draw_button(d, container.prev_button, "<", hovered == Some(Direction::Forward));
    draw_button(d, container.next_button, ">", hovered == Some(Direction::Backward));

    let placements = place_slides(slider, container.list);
    {
        let clip = container.clip;
        let mut s = d.begin_scissor_mode(clip.x as i32, clip.y as i32, clip.width as i32, clip.height as i32);

        for placement in placements.iter() {
            let Some(texture) = textures.get(placement.content.0) else {
                continue;
            };
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;

            s.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width * placement.shown, tex_height),
                placement.dest,
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
    }

    if debug {
        draw_markers(d, container, slider);
    }
}

fn draw_markers(d: &mut RaylibDrawHandle, container: &Container, slider: &Slider) {
    let list = container.list;
    let mut x = list.x;

    for slide in slider.slides() {
        let rec = Rectangle::new(x, container.clip.y, slide.width().max(1.0), container.clip.height);
        let color = if slide.markers.skip {
            Some(Color::YELLOW)
        } else if slide.markers.boundary {
            Some(Color::RED)
        } else if slide.markers.laid_out {
            Some(Color::LIME)
        } else {
            None
        };
        if let Some(color) = color {
            d.draw_rectangle_lines_ex(rec, 2.0, color);
        }
        x += slide.width() + slide.gap();
    }

    let state = match slider.state() {
        _ if slider.is_empty() => "empty",
        StepState::Idle => "idle",
        StepState::Collapsing => "collapsing",
    };
    let moving = slider.slides().filter(|s| s.visibility() == Visibility::Transitioning).count();
    let text = format!(
        "{} | {} slides, {} moving | width {:.0} | pending: {:?}",
        state,
        slider.len(),
        moving,
        slider.container_width(),
        slider.pending()
    );
    d.draw_text(&text, container.clip.x as i32, container.bounds.y as i32, 16, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;

    #[test]
    fn rows_split_the_screen() {
        let top = Container::for_row(0, 2, 1000.0, 416.0, 150.0);
        let bottom = Container::for_row(1, 2, 1000.0, 416.0, 150.0);

        assert_eq!(top.bounds, Rectangle::new(16.0, 16.0, 968.0, 184.0));
        assert_eq!(bottom.bounds.y, 216.0);
        assert_eq!(top.list.width, 968.0 - 2.0 * (BUTTON_WIDTH + BUTTON_SPACING));
        assert_eq!(top.list.height, 150.0);
        assert_eq!(top.list.y, 16.0 + 17.0);
    }

    #[test]
    fn short_rows_crop_instead_of_squashing() {
        let container = Container::for_row(0, 1, 800.0, 100.0, 400.0);
        assert_eq!(container.list.height, 400.0);
        assert_eq!(container.clip.height, container.bounds.height);
        assert_eq!(container.clip.y, container.bounds.y);

        let config = SliderConfig { capacity: 6, duration: 0.0, autoplay: None };
        let slider = Slider::new([(ContentId(0), 300.0)], container.list.width, config);
        let placements = place_slides(&slider, container.list);
        assert_eq!(placements[0].dest.width, 300.0);
        assert_eq!(placements[0].dest.height, 400.0);

        let tall = Container::for_row(0, 1, 800.0, 600.0, 400.0);
        assert_eq!(tall.clip, tall.list);
    }

    #[test]
    fn buttons_map_to_directions() {
        let container = Container::for_row(0, 1, 1000.0, 400.0, 150.0);
        let prev = Vector2::new(container.prev_button.x + 5.0, container.prev_button.y + 5.0);
        let next = Vector2::new(container.next_button.x + 5.0, container.next_button.y + 5.0);
        let middle = Vector2::new(500.0, 200.0);

        assert_eq!(container.button_at(prev), Some(Direction::Forward));
        assert_eq!(container.button_at(next), Some(Direction::Backward));
        assert_eq!(container.button_at(middle), None);
    }

    #[test]
    fn previous_button_sends_head_to_tail() {
        let container = Container::for_row(0, 1, 1000.0, 400.0, 150.0);
        let config = SliderConfig { capacity: 4, duration: 0.0, autoplay: None };
        let mut slider = Slider::new((0..6).map(|i| (ContentId(i), 100.0)), container.list.width, config);

        let click = Vector2::new(container.prev_button.x + 1.0, container.prev_button.y + 1.0);
        let direction = container.button_at(click).unwrap();
        slider.step(direction);
        let order: Vec<usize> = slider.order().iter().map(|c| c.0).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn placements_follow_widths_and_gaps() {
        let config = SliderConfig { capacity: 6, duration: 0.0, autoplay: None };
        let slider = Slider::new((0..4).map(|i| (ContentId(i), 90.0)), 300.0, config);
        let list = Rectangle::new(10.0, 20.0, 300.0, 100.0);

        let placements = place_slides(&slider, list);
        let xs: Vec<f32> = placements.iter().map(|p| p.dest.x).collect();
        assert_eq!(xs, vec![10.0, 115.0, 220.0]);
        assert!(placements.iter().all(|p| p.shown == 1.0 && p.dest.width == 90.0));
        assert_eq!(placements[2].content, ContentId(2));
    }
}
