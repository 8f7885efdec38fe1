//! Draggable progress bar.
//!
//! Pointer-down on the track sets the value from the press position and
//! installs document-level move/end listeners. The first move past the gesture
//! threshold decides between a horizontal drag (value follows the pointer,
//! page scrolling is suppressed) and a vertical scroll (interaction ends, the
//! page scrolls normally). Every value the bar produces is reported through
//! `on_progress_change`; the host feeds the accepted value back as `current`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Interval;
use shared::heuristics::DEFAULT_GOAL_COLOR;
use shared::progress::{DEFAULT_STEP_INTERVAL_MS, DEFAULT_TARGET};
use shared::{
    AutoAdvanceTask, Gesture, GestureConfig, MoveOutcome, Point, ProgressConfig, ProgressControl as ControlState,
    ProgressUnit, TrackRect,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ProgressControlProps {
    #[prop_or(0.0)]
    pub current: f64,
    #[prop_or(DEFAULT_TARGET)]
    pub target: f64,
    #[prop_or_default]
    pub unit: ProgressUnit,
    #[prop_or(AttrValue::Static(DEFAULT_GOAL_COLOR))]
    pub color: AttrValue,
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or_default]
    pub auto_increment: bool,
    #[prop_or(DEFAULT_STEP_INTERVAL_MS)]
    pub step_interval_ms: u32,
    #[prop_or_default]
    pub gesture: GestureConfig,
    #[prop_or_default]
    pub on_progress_change: Callback<f64>,
}

impl ProgressControlProps {
    fn config(&self) -> ProgressConfig {
        ProgressConfig {
            current: self.current,
            target: self.target,
            unit: self.unit.clone(),
            auto_advance: self.auto_increment,
            step_interval_ms: self.step_interval_ms,
            gesture: self.gesture,
        }
    }
}

pub enum Msg {
    PointerDown(Point),
    /// A document listener changed what the bar shows
    Redraw,
    /// The interaction ended (pointer released, cancelled or turned into a scroll)
    Released,
    Tick,
}

/// Document-level listeners for one interaction. Dropping it detaches them all.
struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragListeners {
    fn attach(
        link: &Scope<ProgressControl>,
        state: &Rc<RefCell<ControlState>>,
        track: &NodeRef,
        on_change: &Rc<RefCell<Callback<f64>>>,
    ) -> Self {
        let document = gloo::utils::document();

        let on_move = {
            let link = link.clone();
            let state = state.clone();
            let track = track.clone();
            let on_change = on_change.clone();
            move |event: &Event| {
                let Some(pointer) = pointer_of(event) else {
                    return;
                };
                let outcome = state.borrow_mut().continue_interaction(pointer, measure(&track));
                if outcome.suppresses_default() {
                    event.prevent_default();
                }
                match outcome {
                    MoveOutcome::Dragging { changed } => {
                        if let Some(value) = changed {
                            let callback = on_change.borrow().clone();
                            callback.emit(value);
                        }
                        link.send_message(Msg::Redraw);
                    }
                    MoveOutcome::Scrolled => link.send_message(Msg::Released),
                    MoveOutcome::Idle | MoveOutcome::Pending => {}
                }
            }
        };

        let on_end = {
            let link = link.clone();
            let state = state.clone();
            move |_: &Event| {
                state.borrow_mut().end_interaction();
                link.send_message(Msg::Released);
            }
        };

        let listeners = vec![
            EventListener::new_with_options(
                &document,
                "mousemove",
                EventListenerOptions::enable_prevent_default(),
                on_move.clone(),
            ),
            EventListener::new_with_options(
                &document,
                "touchmove",
                EventListenerOptions::enable_prevent_default(),
                on_move,
            ),
            EventListener::new(&document, "mouseup", on_end.clone()),
            EventListener::new(&document, "touchend", on_end.clone()),
            EventListener::new(&document, "touchcancel", on_end),
        ];

        Self { _listeners: listeners }
    }
}

/// Client coordinates of a mouse event or of the first touch point
fn pointer_of(event: &Event) -> Option<Point> {
    if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
        return Some(Point::new(
            f64::from(mouse_event.client_x()),
            f64::from(mouse_event.client_y()),
        ));
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn measure(track: &NodeRef) -> Option<TrackRect> {
    let element = track.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(TrackRect::new(rect.left(), rect.width()))
}

pub struct ProgressControl {
    state: Rc<RefCell<ControlState>>,
    track: NodeRef,
    listeners: Option<DragListeners>,
    timer: AutoAdvanceTask<Interval>,
    /// Latest `on_progress_change`, shared with the document listeners
    on_change: Rc<RefCell<Callback<f64>>>,
}

impl ProgressControl {
    fn reconcile_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let state = self.state.borrow();
        self.timer.reconcile_with(&state, move |period| {
            Interval::new(period, move || link.send_message(Msg::Tick))
        });
    }

    fn release(&mut self) {
        self.listeners = None;
        self.state.borrow_mut().end_interaction();
    }
}

impl Component for ProgressControl {
    type Message = Msg;
    type Properties = ProgressControlProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut control = Self {
            state: Rc::new(RefCell::new(ControlState::new(ctx.props().config()))),
            track: NodeRef::default(),
            listeners: None,
            timer: AutoAdvanceTask::new(),
            on_change: Rc::new(RefCell::new(ctx.props().on_progress_change.clone())),
        };
        control.reconcile_timer(ctx);
        control
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerDown(pointer) => {
                // A compatibility mousedown after a touch must not stack listeners
                self.listeners = None;
                let changed = self
                    .state
                    .borrow_mut()
                    .begin_interaction(pointer, measure(&self.track));
                self.listeners = Some(DragListeners::attach(
                    ctx.link(),
                    &self.state,
                    &self.track,
                    &self.on_change,
                ));
                self.reconcile_timer(ctx);
                if let Some(value) = changed {
                    ctx.props().on_progress_change.emit(value);
                }
                true
            }
            Msg::Redraw => true,
            Msg::Released => {
                self.release();
                self.reconcile_timer(ctx);
                true
            }
            Msg::Tick => {
                let changed = self.state.borrow_mut().auto_advance_tick();
                self.reconcile_timer(ctx);
                match changed {
                    Some(value) => {
                        ctx.props().on_progress_change.emit(value);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        *self.on_change.borrow_mut() = ctx.props().on_progress_change.clone();
        self.state.borrow_mut().reconfigure(ctx.props().config());
        self.reconcile_timer(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let state = self.state.borrow();
        let percentage = state.percentage();
        let is_dots = matches!(state.unit(), ProgressUnit::Dots);

        let onmousedown = ctx.link().batch_callback(|e: MouseEvent| {
            (e.button() == 0).then(|| Msg::PointerDown(Point::new(f64::from(e.client_x()), f64::from(e.client_y()))))
        });
        let ontouchstart = ctx.link().batch_callback(|e: TouchEvent| {
            e.touches()
                .get(0)
                .map(|touch| Msg::PointerDown(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))))
        });

        let fill_style = format!("width: {}%; background-color: {};", percentage, props.color);
        let label = format!(
            "Progress slider for {}",
            props.text.as_deref().unwrap_or("goal")
        );

        html! {
            <div
                ref={self.track.clone()}
                class={classes!(
                    "progress-control",
                    state.is_interacting().then_some("pressed"),
                    (state.gesture() == Some(Gesture::HorizontalDrag)).then_some("dragging"),
                )}
                role="slider"
                aria-valuemin="0"
                aria-valuemax={state.target().to_string()}
                aria-valuenow={state.displayed_value().to_string()}
                aria-label={label}
                style="touch-action: pan-y;"
                {onmousedown}
                {ontouchstart}
            >
                <div class="progress-track"></div>
                <div class="progress-fill" style={fill_style}></div>
                <div class="progress-content">
                    if let Some(text) = &props.text {
                        <span class="progress-text">{text}</span>
                    }
                    <span class="progress-value">{state.format_progress()}</span>
                </div>
                <div class={classes!("progress-dots", is_dots.then_some("habit-dots"))}>
                    { for state.progress_dots().into_iter().enumerate().map(|(i, filled)| html! {
                        <span key={i} class={classes!("progress-dot", filled.then_some("filled"))}></span>
                    }) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.state.borrow().is_interacting() {
            Logger::debug_with_component("progress-control", "Unmounted mid-interaction; detaching listeners");
        }
        self.release();
        self.timer.cancel();
    }
}
