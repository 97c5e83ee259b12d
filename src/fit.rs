use crate::slide::{Slide, SlideId};

/// Outcome of one fit pass over a slide sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Fitted slides, in sequence order. The last one is the boundary slide.
    pub fitted: Vec<SlideId>,
    /// Sum of the fitted intrinsic widths.
    pub fitted_width: f32,
    /// Uniform trailing gap for every fitted slide except the boundary one.
    pub gap: f32,
}

impl FitResult {
    pub fn count(&self) -> usize {
        self.fitted.len()
    }

    pub fn boundary(&self) -> Option<SlideId> {
        self.fitted.last().copied()
    }

    pub fn contains(&self, id: SlideId) -> bool {
        self.fitted.contains(&id)
    }
}

/// Picks the longest prefix of non-skipped slides that fits `container_width`
/// holding at most `capacity` slides, and the gap spreading the slack evenly.
///
/// The fill is greedy and stops at the first slide that would overflow
/// either bound; later, narrower slides are never pulled forward.
pub fn compute_layout<'a, I>(items: I, container_width: f32, capacity: usize) -> FitResult
where
    I: IntoIterator<Item = &'a Slide>,
{
    let container_width = if container_width.is_finite() { container_width.max(0.0) } else { 0.0 };
    let capacity = capacity.max(1);

    let mut fitted = Vec::new();
    let mut fitted_width = 0.0;

    for slide in items.into_iter().filter(|s| !s.markers.skip) {
        let width = slide.intrinsic_width();
        if fitted.len() == capacity || fitted_width + width > container_width {
            break;
        }
        fitted_width += width;
        fitted.push(slide.id());
    }

    let gap = if fitted.len() > 1 {
        (container_width - fitted_width) / (fitted.len() - 1) as f32
    } else {
        0.0
    };

    FitResult { fitted, fitted_width, gap }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::ContentId;
    use rand::Rng;

    fn slides(widths: &[f32]) -> Vec<Slide> {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| Slide::new(SlideId(i as u64 + 1), ContentId(i), *w))
            .collect()
    }

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<SlideId> {
        range.map(SlideId).collect()
    }

    #[test]
    fn capacity_bounds_an_exact_fit() {
        let items = slides(&[100.0; 6]);
        let fit = compute_layout(&items, 400.0, 4);
        assert_eq!(fit.fitted, ids(1..=4));
        assert_eq!(fit.gap, 0.0);
    }

    #[test]
    fn all_items_fit_exactly() {
        let items = slides(&[100.0; 3]);
        let fit = compute_layout(&items, 300.0, 6);
        assert_eq!(fit.fitted, ids(1..=3));
        assert_eq!(fit.gap, 0.0);
    }

    #[test]
    fn slack_is_spread_between_items() {
        let items = slides(&[90.0; 3]);
        let fit = compute_layout(&items, 300.0, 6);
        assert_eq!(fit.fitted, ids(1..=3));
        assert_eq!(fit.fitted_width, 270.0);
        assert_eq!(fit.gap, 15.0);
    }

    #[test]
    fn single_fitted_item_has_no_gap() {
        let items = slides(&[250.0, 250.0]);
        let fit = compute_layout(&items, 300.0, 6);
        assert_eq!(fit.fitted, ids(1..=1));
        assert_eq!(fit.gap, 0.0);
        assert_eq!(fit.boundary(), Some(SlideId(1)));
    }

    #[test]
    fn nothing_fits() {
        let items = slides(&[500.0, 100.0]);
        let fit = compute_layout(&items, 300.0, 6);
        assert!(fit.fitted.is_empty());
        assert_eq!(fit.gap, 0.0);
        assert_eq!(fit.boundary(), None);

        let fit = compute_layout(&Vec::<Slide>::new(), 300.0, 6);
        assert_eq!(fit.count(), 0);
        assert!(fit.gap.is_finite());
    }

    #[test]
    fn stops_at_first_overflow() {
        let items = slides(&[100.0, 250.0, 50.0]);
        let fit = compute_layout(&items, 300.0, 6);
        assert_eq!(fit.fitted, ids(1..=1));
    }

    #[test]
    fn skipped_items_are_ignored() {
        let mut items = slides(&[100.0, 100.0, 100.0, 100.0]);
        items[0].markers.skip = true;
        let fit = compute_layout(&items, 300.0, 6);
        assert_eq!(fit.fitted, ids(2..=4));
        assert!(!fit.contains(SlideId(1)));
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        let items = slides(&[100.0, 100.0]);
        assert_eq!(compute_layout(&items, -10.0, 6).count(), 0);
        assert_eq!(compute_layout(&items, f32::NAN, 6).count(), 0);
        assert_eq!(compute_layout(&items, 300.0, 0).count(), 1);
    }

    #[test]
    fn random_sequences_respect_bounds_and_are_deterministic() {
        let mut rng = rand::rng();

        for _ in 0..500 {
            let len = rng.random_range(0..12);
            let widths: Vec<f32> = (0..len).map(|_| rng.random_range(0.0..300.0f32).round()).collect();
            let container_width = rng.random_range(0.0..1200.0f32).round();
            let capacity = rng.random_range(1..8);
            let items = slides(&widths);

            let fit = compute_layout(&items, container_width, capacity);
            assert!(fit.count() <= capacity);
            assert!(fit.fitted_width <= container_width);
            assert!(fit.gap >= 0.0 && fit.gap.is_finite());

            let prefix: Vec<SlideId> = items.iter().take(fit.count()).map(Slide::id).collect();
            assert_eq!(fit.fitted, prefix);

            assert_eq!(compute_layout(&items, container_width, capacity), fit);
        }
    }
}
