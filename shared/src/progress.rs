//! Headless state machine behind the draggable progress bar.
//!
//! `ProgressControl` knows nothing about the DOM. The frontend feeds it pointer
//! positions, track measurements and timer ticks, and forwards every value it
//! reports back to the host as a change notification.

use crate::gesture::{Gesture, GestureConfig, Point};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TARGET: f64 = 100.0;
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 1000;

/// Indicator dots shown for units other than "dots"
const INDICATOR_DOTS: usize = 6;
/// Upper bound on rendered dots for the "dots" unit
const MAX_DOTS: usize = 64;

/// Unit a progress quantity is measured in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressUnit {
    /// "min", rendered as hours and minutes for long targets
    #[default]
    Minutes,
    /// "dots", a habit-style counter rendered as a row of dots
    Dots,
    /// Any other label ("km", "pages", ...), including the empty string
    Other(String),
}

impl ProgressUnit {
    pub fn as_str(&self) -> &str {
        match self {
            ProgressUnit::Minutes => "min",
            ProgressUnit::Dots => "dots",
            ProgressUnit::Other(label) => label,
        }
    }
}

impl From<&str> for ProgressUnit {
    fn from(value: &str) -> Self {
        match value {
            "min" => ProgressUnit::Minutes,
            "dots" => ProgressUnit::Dots,
            other => ProgressUnit::Other(other.to_string()),
        }
    }
}

impl From<String> for ProgressUnit {
    fn from(value: String) -> Self {
        ProgressUnit::from(value.as_str())
    }
}

impl From<ProgressUnit> for String {
    fn from(unit: ProgressUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for ProgressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the host supplies to a progress control
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub current: f64,
    pub target: f64,
    pub unit: ProgressUnit,
    pub auto_advance: bool,
    pub step_interval_ms: u32,
    pub gesture: GestureConfig,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            current: 0.0,
            target: DEFAULT_TARGET,
            unit: ProgressUnit::Minutes,
            auto_advance: false,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            gesture: GestureConfig::default(),
        }
    }
}

/// Horizontal extent of the track at the moment of an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the track at `x`, clamped to [0, 1]. `None` for a collapsed track.
    pub fn position_of(&self, x: f64) -> Option<f64> {
        if self.width.is_nan() || self.width <= 0.0 || !self.left.is_finite() {
            return None;
        }
        let position = (x - self.left) / self.width;
        if position.is_nan() {
            Some(0.0)
        } else {
            Some(position.clamp(0.0, 1.0))
        }
    }
}

/// Result of feeding a pointer move to the control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No interaction in progress
    Idle,
    /// Direction not decided yet; leave default scrolling alone
    Pending,
    /// Horizontal drag; the host must suppress default scrolling for this event
    Dragging { changed: Option<f64> },
    /// Vertical gesture; the interaction has ended and the page should scroll
    Scrolled,
}

impl MoveOutcome {
    pub fn suppresses_default(&self) -> bool {
        matches!(self, MoveOutcome::Dragging { .. })
    }

    pub fn changed(&self) -> Option<f64> {
        match self {
            MoveOutcome::Dragging { changed } => *changed,
            _ => None,
        }
    }
}

/// State of one progress control instance.
///
/// Outside an interaction the displayed value mirrors the host's `current`.
/// During an interaction the displayed value is local and host updates are
/// only recorded. Every value the control reports (drag or auto-advance) is
/// also remembered as the host's value, since the host is expected to adopt it.
#[derive(Debug, Clone)]
pub struct ProgressControl {
    current: f64,
    target: f64,
    unit: ProgressUnit,
    auto_advance: bool,
    step_interval_ms: u32,
    gesture_config: GestureConfig,
    displayed: f64,
    interaction: Option<Gesture>,
}

impl Default for ProgressControl {
    fn default() -> Self {
        Self::new(ProgressConfig::default())
    }
}

impl ProgressControl {
    pub fn new(config: ProgressConfig) -> Self {
        let target = sanitize_target(config.target);
        let current = sanitize_value(config.current);
        Self {
            current,
            target,
            unit: config.unit,
            auto_advance: config.auto_advance,
            step_interval_ms: config.step_interval_ms.max(1),
            gesture_config: config.gesture,
            displayed: current.min(target),
            interaction: None,
        }
    }

    pub fn displayed_value(&self) -> f64 {
        self.displayed
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn unit(&self) -> &ProgressUnit {
        &self.unit
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.interaction
    }

    /// Apply new host-supplied configuration. Never reports a change.
    pub fn reconfigure(&mut self, config: ProgressConfig) {
        self.target = sanitize_target(config.target);
        self.unit = config.unit;
        self.auto_advance = config.auto_advance;
        self.step_interval_ms = config.step_interval_ms.max(1);
        self.gesture_config = config.gesture;

        if self.is_interacting() {
            self.displayed = self.clamp(self.displayed);
        }
        self.sync_current(config.current);
    }

    /// Record the host's authoritative value. Shown immediately unless a drag is in progress.
    pub fn sync_current(&mut self, current: f64) {
        self.current = sanitize_value(current);
        if !self.is_interacting() {
            self.displayed = self.clamp(self.current);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    /// Pointer-down on the track. Sets the value from the press location.
    pub fn begin_interaction(&mut self, pointer: Point, track: Option<TrackRect>) -> Option<f64> {
        self.interaction = Some(Gesture::start(pointer));
        debug!("progress interaction started at x={:.1}", pointer.x);
        self.set_from_pointer(pointer.x, track)
    }

    /// Pointer-move anywhere in the document while an interaction is active
    pub fn continue_interaction(&mut self, pointer: Point, track: Option<TrackRect>) -> MoveOutcome {
        let Some(gesture) = self.interaction.as_mut() else {
            return MoveOutcome::Idle;
        };

        let classified = gesture.observe(pointer, &self.gesture_config);
        match classified {
            Gesture::Unclassified { .. } => MoveOutcome::Pending,
            Gesture::Scroll => {
                self.end_interaction();
                MoveOutcome::Scrolled
            }
            Gesture::HorizontalDrag => MoveOutcome::Dragging {
                changed: self.set_from_pointer(pointer.x, track),
            },
        }
    }

    /// Pointer-up or cancel. The last dragged value stays in place.
    pub fn end_interaction(&mut self) {
        if self.interaction.take().is_some() {
            self.displayed = self.clamp(self.current);
            debug!("progress interaction ended at {}", self.displayed);
        }
    }

    /// Whether an auto-advance task should currently be scheduled
    pub fn wants_auto_advance(&self) -> bool {
        self.auto_advance && !self.is_interacting() && self.displayed < self.target
    }

    /// One auto-advance step. Returns the new value when it changed.
    pub fn auto_advance_tick(&mut self) -> Option<f64> {
        if !self.wants_auto_advance() {
            return None;
        }
        let next = (self.displayed + 1.0).min(self.target);
        self.report(next)
    }

    pub fn format_progress(&self) -> String {
        format_progress(self.displayed, self.target, &self.unit)
    }

    pub fn percentage(&self) -> u8 {
        percentage(self.displayed, self.target)
    }

    pub fn progress_dots(&self) -> Vec<bool> {
        progress_dots(self.displayed, self.target, &self.unit)
    }

    fn set_from_pointer(&mut self, x: f64, track: Option<TrackRect>) -> Option<f64> {
        let position = track?.position_of(x)?;
        let value = (position * self.target).round().min(self.target);
        self.report(value)
    }

    fn report(&mut self, value: f64) -> Option<f64> {
        if value == self.displayed {
            return None;
        }
        self.displayed = value;
        self.current = value;
        Some(value)
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.target)
    }
}

fn sanitize_target(target: f64) -> f64 {
    if target.is_finite() && target > 0.0 {
        target
    } else {
        1.0
    }
}

fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Render a value/target pair for display according to the unit
pub fn format_progress(value: f64, target: f64, unit: &ProgressUnit) -> String {
    match unit {
        ProgressUnit::Minutes => format!("{} / {}", format_minutes(value), format_minutes(target)),
        ProgressUnit::Dots => format!("{}/{}", format_number(value), format_number(target)),
        ProgressUnit::Other(label) => {
            format!("{} / {} {}", format_number(value), format_number(target), label)
                .trim_end()
                .to_string()
        }
    }
}

/// Compact hours/minutes, e.g. "1h 15m", "2h", "45m", "0m"
pub fn format_minutes(total_minutes: f64) -> String {
    let total = if total_minutes.is_finite() {
        total_minutes.round().max(0.0) as u64
    } else {
        0
    };
    let hours = total / 60;
    let minutes = total % 60;

    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Whole numbers print without a fraction, others with up to two decimals
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Fill width in whole percent
pub fn percentage(value: f64, target: f64) -> u8 {
    let target = sanitize_target(target);
    let ratio = (value / target).clamp(0.0, 1.0);
    if ratio.is_nan() {
        return 0;
    }
    (ratio * 100.0).round() as u8
}

/// Filled/empty state of each dot under the bar
pub fn progress_dots(value: f64, target: f64, unit: &ProgressUnit) -> Vec<bool> {
    let target = sanitize_target(target);
    match unit {
        ProgressUnit::Dots => {
            let count = (target.ceil() as usize).min(MAX_DOTS);
            let filled = sanitize_value(value).floor() as usize;
            (0..count).map(|i| i < filled).collect()
        }
        _ => {
            let count = (target.ceil() as usize).min(INDICATOR_DOTS);
            let pct = f64::from(percentage(value, target));
            (0..count)
                .map(|i| (i as f64) < pct * count as f64 / 100.0)
                .collect()
        }
    }
}
