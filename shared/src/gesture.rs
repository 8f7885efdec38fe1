//! Direction classification for drags that start on a horizontal control.
//!
//! The progress control sits in a vertically scrolling page, so a press on the
//! track may be the start of a page scroll rather than a value drag. The first
//! movement past a small threshold decides which one it is, once, for the rest
//! of the interaction.

use log::debug;

/// Displacement (in CSS pixels) a pointer must travel before the gesture is classified
pub const DEFAULT_THRESHOLD_PX: f64 = 5.0;

/// A pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Configuration for gesture classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub threshold_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
        }
    }
}

impl GestureConfig {
    pub fn with_threshold(threshold_px: f64) -> Self {
        let threshold_px = if threshold_px.is_finite() && threshold_px >= 0.0 {
            threshold_px
        } else {
            DEFAULT_THRESHOLD_PX
        };
        Self { threshold_px }
    }
}

/// Classification state of a single interaction.
///
/// Transitions are one-way: `Unclassified` moves to either `HorizontalDrag`
/// or `Scroll` and never changes again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer is down but has not moved past the threshold yet
    Unclassified { origin: Point },
    /// Horizontal intent confirmed; moves update the value and suppress scrolling
    HorizontalDrag,
    /// Vertical intent; the interaction is abandoned and the page scrolls
    Scroll,
}

impl Gesture {
    pub fn start(origin: Point) -> Self {
        Gesture::Unclassified { origin }
    }

    /// Feed the latest pointer position and return the (possibly new) classification
    pub fn observe(&mut self, position: Point, config: &GestureConfig) -> Gesture {
        if let Gesture::Unclassified { origin } = *self {
            let dx = (position.x - origin.x).abs();
            let dy = (position.y - origin.y).abs();

            if dx > config.threshold_px || dy > config.threshold_px {
                *self = if dx >= dy {
                    Gesture::HorizontalDrag
                } else {
                    Gesture::Scroll
                };
                debug!("gesture classified as {:?} (dx={:.1}, dy={:.1})", self, dx, dy);
            }
        }
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_stay_unclassified() {
        let config = GestureConfig::default();
        let mut gesture = Gesture::start(Point::new(100.0, 100.0));

        // Exactly at the threshold is not past it
        assert_eq!(
            gesture.observe(Point::new(105.0, 95.0), &config),
            Gesture::Unclassified {
                origin: Point::new(100.0, 100.0)
            }
        );
        assert!(matches!(gesture, Gesture::Unclassified { .. }));
    }

    #[test]
    fn test_horizontal_move_classifies_as_drag() {
        let config = GestureConfig::default();
        let mut gesture = Gesture::start(Point::new(0.0, 0.0));

        assert_eq!(gesture.observe(Point::new(12.0, 3.0), &config), Gesture::HorizontalDrag);
    }

    #[test]
    fn test_vertical_move_classifies_as_scroll() {
        let config = GestureConfig::default();
        let mut gesture = Gesture::start(Point::new(50.0, 50.0));

        assert_eq!(gesture.observe(Point::new(54.0, 70.0), &config), Gesture::Scroll);
    }

    #[test]
    fn test_diagonal_tie_counts_as_horizontal() {
        let config = GestureConfig::default();
        let mut gesture = Gesture::start(Point::new(0.0, 0.0));

        assert_eq!(gesture.observe(Point::new(-8.0, 8.0), &config), Gesture::HorizontalDrag);
    }

    #[test]
    fn test_classification_is_irrevocable() {
        let config = GestureConfig::default();
        let mut gesture = Gesture::start(Point::new(0.0, 0.0));
        gesture.observe(Point::new(0.0, 30.0), &config);

        // A later strongly horizontal move does not turn a scroll into a drag
        assert_eq!(gesture.observe(Point::new(200.0, 30.0), &config), Gesture::Scroll);

        let mut drag = Gesture::start(Point::new(0.0, 0.0));
        drag.observe(Point::new(30.0, 0.0), &config);
        assert_eq!(drag.observe(Point::new(30.0, 300.0), &config), Gesture::HorizontalDrag);
    }

    #[test]
    fn test_invalid_threshold_falls_back_to_default() {
        assert_eq!(GestureConfig::with_threshold(-1.0).threshold_px, DEFAULT_THRESHOLD_PX);
        assert_eq!(GestureConfig::with_threshold(f64::NAN).threshold_px, DEFAULT_THRESHOLD_PX);
        assert_eq!(GestureConfig::with_threshold(12.0).threshold_px, 12.0);
    }
}
