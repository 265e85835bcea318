//! Animation lifecycle controller
//!
//! One controller exists per page lifetime. Sections register animations
//! through it and get back an [`AnimationHandle`]; the controller owns every
//! tween, timer, and listener behind those handles and is the only writer of
//! animated properties.
//!
//! # Scheduling
//!
//! Everything is driven by [`AnimationController::tick`], called once per
//! frame with a monotonic clock in milliseconds. A tick:
//! 1. drains listener events queued by the host (pointer, scroll, resize)
//! 2. resolves deferred scroll windows and drives scroll bindings
//! 3. advances typewriter sequences
//! 4. advances tweens
//! 5. flushes changed styles and text to the host
//!
//! # Ownership
//!
//! Only one running tween drives a given `(element, property)` pair. A tween
//! that starts on a pair takes it over and the previous owner loses that
//! track; an owner left without tracks is cancelled.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::descriptor::{AnimationDescriptor, ElementId, Repeat};
use super::easing::Easing;
use super::error::AnimationError;
use super::host::{AnimationHost, ListenerId, ListenerKind, ListenerTarget};
use super::scroll::{ElementGeometry, ScrollAnimation, ScrollRange, ScrollWindow, Viewport};
use super::section::ViewSection;
use super::state::HandleState;
use super::style::{AnimatedProperty, StyleState};
use super::text::{PhraseCycle, blend_text};
use super::timeline::Timeline;

/// Interval between frames when the host has no vsync source
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;

/// Convergence threshold for smoothed scroll progress
const PROGRESS_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub frame_interval_ms: u32,
    /// Render resting states immediately instead of animating
    pub reduced_motion: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            reduced_motion: false,
        }
    }
}

type HandleId = u64;
type TweenId = u64;

/// Opaque handle to a registered animation.
///
/// A no-op handle is returned when registration could not happen; releasing
/// it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationHandle(Option<HandleId>);

impl AnimationHandle {
    pub fn noop() -> Self {
        Self(None)
    }

    pub fn is_noop(&self) -> bool {
        self.0.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTrack {
    property: AnimatedProperty,
    from: Option<f64>,
    start: f64,
    to: f64,
}

#[derive(Debug)]
struct Tween {
    owner: HandleId,
    target: ElementId,
    tracks: Vec<ActiveTrack>,
    start_at: f64,
    duration_ms: f64,
    easing: Easing,
    repeat: Option<Repeat>,
    iteration: u32,
    state: HandleState,
}

impl Tween {
    fn progress_at(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.start_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Move past finished runs when repeats remain; true if it did
    fn roll_over(&mut self, now: f64) -> bool {
        let Some(repeat) = self.repeat else {
            return false;
        };
        if self.duration_ms <= 0.0 {
            return false;
        }

        let runs = ((now - self.start_at) / self.duration_ms).floor().max(0.0) as u64;
        let cycles = match repeat.count {
            Some(count) => runs.min(u64::from(count.saturating_sub(self.iteration))),
            None => runs,
        };
        if cycles == 0 {
            return false;
        }

        self.iteration = self
            .iteration
            .saturating_add(u32::try_from(cycles).unwrap_or(u32::MAX));
        self.start_at += cycles as f64 * self.duration_ms;
        if repeat.yoyo && cycles % 2 == 1 {
            for track in &mut self.tracks {
                std::mem::swap(&mut track.start, &mut track.to);
            }
        }
        true
    }
}

#[derive(Debug)]
struct ScrollBinding {
    trigger: ElementId,
    window: ScrollWindow,
    animation: ScrollAnimation,
    scroll_listener: ListenerId,
    resize_listener: ListenerId,
    range: Option<ScrollRange>,
    /// Trigger box and viewport height `range` was resolved against
    geometry: Option<ElementGeometry>,
    viewport_height: Option<f64>,
    /// A resize arrived since the last resolve
    resize_pending: bool,
    /// Scroll offset must be sampled on the next tick
    sample_pending: bool,
    progress: Option<f64>,
    played: bool,
    tweens: Vec<TweenId>,
}

#[derive(Debug, Clone, Copy)]
enum SequencePhase {
    Typing { started_at: f64 },
    Waiting { until: f64 },
}

#[derive(Debug)]
struct SequenceBinding {
    target: ElementId,
    cycle: PhraseCycle,
    step_ms: f64,
    from_text: String,
    phase: SequencePhase,
}

#[derive(Debug)]
enum Binding {
    Timeline {
        timeline: Timeline,
        tweens: Vec<TweenId>,
    },
    Hover {
        target: ElementId,
        enter: AnimationDescriptor,
        leave: AnimationDescriptor,
        enter_listener: ListenerId,
        leave_listener: ListenerId,
        active: Option<TweenId>,
    },
    Scroll(ScrollBinding),
    Sequence(SequenceBinding),
}

impl Binding {
    fn kind(&self) -> &'static str {
        match self {
            Binding::Timeline { .. } => "mount",
            Binding::Hover { .. } => "hover",
            Binding::Scroll(_) => "scroll",
            Binding::Sequence(_) => "sequence",
        }
    }

    fn listeners(&self) -> Vec<ListenerId> {
        match self {
            Binding::Hover {
                enter_listener,
                leave_listener,
                ..
            } => vec![*enter_listener, *leave_listener],
            Binding::Scroll(binding) => vec![binding.scroll_listener, binding.resize_listener],
            Binding::Timeline { .. } | Binding::Sequence(_) => Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Registration {
    section: ViewSection,
    state: HandleState,
    binding: Binding,
}

fn transition(state: &mut HandleState, next: HandleState, repeating: bool) {
    if *state == next {
        return;
    }
    if state.can_transition_to(next, repeating) {
        *state = next;
    } else {
        tracing::warn!(from = %state, to = %next, "illegal handle transition ignored");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverDirection {
    Enter,
    Leave,
}

enum ScrollResolve {
    Resolved,
    Deferred,
    TriggerGone,
}

pub struct AnimationController<H: AnimationHost> {
    host: H,
    config: ControllerConfig,
    now: f64,
    last_tick: Option<f64>,
    next_handle: HandleId,
    next_tween: TweenId,
    registrations: BTreeMap<HandleId, Registration>,
    tweens: BTreeMap<TweenId, Tween>,
    claims: HashMap<(ElementId, AnimatedProperty), TweenId>,
    listeners: HashMap<ListenerId, HandleId>,
    styles: HashMap<ElementId, StyleState>,
    texts: HashMap<ElementId, String>,
    dirty_styles: BTreeSet<ElementId>,
    dirty_text: BTreeSet<ElementId>,
}

impl<H: AnimationHost> AnimationController<H> {
    pub fn new(host: H, config: ControllerConfig) -> Self {
        Self::with_clock(host, config, 0.0)
    }

    /// Controller whose clock starts at `now_ms`
    pub fn with_clock(host: H, config: ControllerConfig, now_ms: f64) -> Self {
        Self {
            host,
            config,
            now: now_ms,
            last_tick: None,
            next_handle: 1,
            next_tween: 1,
            registrations: BTreeMap::new(),
            tweens: BTreeMap::new(),
            claims: HashMap::new(),
            listeners: HashMap::new(),
            styles: HashMap::new(),
            texts: HashMap::new(),
            dirty_styles: BTreeSet::new(),
            dirty_text: BTreeSet::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Play `timeline` from the current clock; explicit `from` values show immediately
    pub fn register_on_mount(&mut self, section: ViewSection, timeline: Timeline) -> AnimationHandle {
        if self.config.reduced_motion {
            self.snap_timeline(None, &timeline);
            self.flush();
            return AnimationHandle::noop();
        }
        let result = self.try_register_timeline(section, timeline);
        self.finish_registration(section, "mount", result)
    }

    /// Bind an enter/leave tween pair to pointer events on `element`
    pub fn register_hover(
        &mut self,
        section: ViewSection,
        element: impl Into<ElementId>,
        enter: AnimationDescriptor,
        leave: AnimationDescriptor,
    ) -> AnimationHandle {
        if self.config.reduced_motion {
            return AnimationHandle::noop();
        }
        let result = self.try_register_hover(section, element.into(), enter, leave);
        self.finish_registration(section, "hover", result)
    }

    /// Bind `animation` to scroll progress through `window` of `trigger`
    pub fn register_scroll_linked(
        &mut self,
        section: ViewSection,
        trigger: impl Into<ElementId>,
        window: ScrollWindow,
        animation: ScrollAnimation,
    ) -> AnimationHandle {
        if self.config.reduced_motion {
            return AnimationHandle::noop();
        }
        let result = self.try_register_scroll(section, trigger.into(), window, animation);
        self.finish_registration(section, "scroll", result)
    }

    /// Type each phrase of `cycle` into `element`, pausing `step_duration_ms` between phrases
    pub fn register_repeating_sequence(
        &mut self,
        section: ViewSection,
        element: impl Into<ElementId>,
        cycle: PhraseCycle,
        step_duration_ms: f64,
    ) -> AnimationHandle {
        let element = element.into();
        if self.config.reduced_motion {
            if self.host.element_exists(&element) {
                self.write_text(&element, cycle.current_text());
                self.flush();
            }
            return AnimationHandle::noop();
        }
        let result = self.try_register_sequence(section, element, cycle, step_duration_ms);
        self.finish_registration(section, "sequence", result)
    }

    fn finish_registration(
        &mut self,
        section: ViewSection,
        kind: &'static str,
        result: Result<HandleId, AnimationError>,
    ) -> AnimationHandle {
        match result {
            Ok(id) => {
                tracing::debug!(%section, kind, handle = id, "animation registered");
                AnimationHandle(Some(id))
            }
            Err(err) => {
                tracing::debug!(%section, kind, error = %err, "animation registration skipped");
                AnimationHandle::noop()
            }
        }
    }

    fn allocate_handle(&mut self) -> HandleId {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn try_register_timeline(
        &mut self,
        section: ViewSection,
        mut timeline: Timeline,
    ) -> Result<HandleId, AnimationError> {
        self.drop_missing_targets(&mut timeline)?;

        let id = self.allocate_handle();
        self.render_from_values(&timeline);
        let tweens = self.schedule_timeline(id, &timeline, self.now);
        self.registrations.insert(
            id,
            Registration {
                section,
                state: HandleState::Scheduled,
                binding: Binding::Timeline { timeline, tweens },
            },
        );
        self.flush();
        Ok(id)
    }

    fn try_register_hover(
        &mut self,
        section: ViewSection,
        element: ElementId,
        enter: AnimationDescriptor,
        leave: AnimationDescriptor,
    ) -> Result<HandleId, AnimationError> {
        if !self.host.element_exists(&element) {
            return Err(AnimationError::MissingTargetElement(element));
        }

        let target = ListenerTarget::Element(element.clone());
        let enter_listener = self
            .host
            .add_listener(target.clone(), ListenerKind::PointerEnter)
            .ok_or_else(|| AnimationError::MissingTargetElement(element.clone()))?;
        let Some(leave_listener) = self.host.add_listener(target, ListenerKind::PointerLeave)
        else {
            self.host.remove_listener(enter_listener);
            return Err(AnimationError::MissingTargetElement(element));
        };

        let id = self.allocate_handle();
        self.listeners.insert(enter_listener, id);
        self.listeners.insert(leave_listener, id);
        self.registrations.insert(
            id,
            Registration {
                section,
                state: HandleState::Scheduled,
                binding: Binding::Hover {
                    enter: enter.retarget(element.clone()),
                    leave: leave.retarget(element.clone()),
                    target: element,
                    enter_listener,
                    leave_listener,
                    active: None,
                },
            },
        );
        Ok(id)
    }

    fn try_register_scroll(
        &mut self,
        section: ViewSection,
        trigger: ElementId,
        window: ScrollWindow,
        mut animation: ScrollAnimation,
    ) -> Result<HandleId, AnimationError> {
        if !self.host.element_exists(&trigger) {
            return Err(AnimationError::MissingTargetElement(trigger));
        }
        match &mut animation {
            ScrollAnimation::PlayOnEnter(timeline) => self.drop_missing_targets(timeline)?,
            ScrollAnimation::Scrub { target, .. } | ScrollAnimation::Pin { target } => {
                if !self.host.element_exists(target) {
                    return Err(AnimationError::MissingTargetElement(target.clone()));
                }
            }
        }

        let scroll_listener = self
            .host
            .add_listener(ListenerTarget::Window, ListenerKind::Scroll)
            .ok_or(AnimationError::ViewportUnavailable)?;
        let Some(resize_listener) = self
            .host
            .add_listener(ListenerTarget::Window, ListenerKind::Resize)
        else {
            self.host.remove_listener(scroll_listener);
            return Err(AnimationError::ViewportUnavailable);
        };

        let id = self.allocate_handle();
        self.listeners.insert(scroll_listener, id);
        self.listeners.insert(resize_listener, id);
        self.registrations.insert(
            id,
            Registration {
                section,
                state: HandleState::Idle,
                binding: Binding::Scroll(ScrollBinding {
                    trigger,
                    window,
                    animation,
                    scroll_listener,
                    resize_listener,
                    range: None,
                    geometry: None,
                    viewport_height: None,
                    resize_pending: false,
                    sample_pending: false,
                    progress: None,
                    played: false,
                    tweens: Vec::new(),
                }),
            },
        );

        let viewport = self.host.viewport();
        match self.resolve_scroll(id, viewport) {
            ScrollResolve::Resolved => self.drive_scroll(id, viewport, 0.0),
            ScrollResolve::Deferred => {
                tracing::debug!(
                    %section,
                    handle = id,
                    reason = %AnimationError::ViewportUnavailable,
                    "scroll binding deferred"
                );
            }
            ScrollResolve::TriggerGone => {}
        }
        self.flush();
        Ok(id)
    }

    fn try_register_sequence(
        &mut self,
        section: ViewSection,
        element: ElementId,
        cycle: PhraseCycle,
        step_duration_ms: f64,
    ) -> Result<HandleId, AnimationError> {
        if !self.host.element_exists(&element) {
            return Err(AnimationError::MissingTargetElement(element));
        }
        if cycle.is_empty() {
            return Err(AnimationError::EmptySequence);
        }

        let from_text = self
            .texts
            .get(&element)
            .cloned()
            .or_else(|| self.host.text(&element))
            .unwrap_or_default();

        let id = self.allocate_handle();
        self.registrations.insert(
            id,
            Registration {
                section,
                state: HandleState::Scheduled,
                binding: Binding::Sequence(SequenceBinding {
                    target: element,
                    cycle,
                    step_ms: step_duration_ms.max(0.0),
                    from_text,
                    phase: SequencePhase::Typing {
                        started_at: self.now,
                    },
                }),
            },
        );
        Ok(id)
    }

    /// Remove steps whose element is not mounted; error if nothing is left
    fn drop_missing_targets(&self, timeline: &mut Timeline) -> Result<(), AnimationError> {
        let targets = timeline.targets();
        let missing: Vec<ElementId> = targets
            .iter()
            .filter(|t| !self.host.element_exists(t))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        if missing.len() == targets.len() {
            return Err(AnimationError::MissingTargetElement(missing[0].clone()));
        }
        tracing::debug!(missing = missing.len(), "skipping unmounted timeline targets");
        timeline.retain_targets(|t| !missing.contains(t));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Release
    // ------------------------------------------------------------------

    /// Cancel everything behind `handle` and detach its listeners.
    ///
    /// Releasing a no-op or already released handle does nothing.
    pub fn release(&mut self, handle: AnimationHandle) {
        let Some(id) = handle.0 else {
            return;
        };
        let Some(registration) = self.registrations.remove(&id) else {
            tracing::trace!(error = %AnimationError::StaleHandleRelease(id), "release ignored");
            return;
        };

        tracing::debug!(
            section = %registration.section,
            kind = registration.binding.kind(),
            handle = id,
            "animation released"
        );
        self.teardown(id, registration.binding);
        self.flush();
        self.forget_unmounted();
    }

    /// Release `previous` and keep `next` in its place
    pub fn replace(&mut self, previous: AnimationHandle, next: AnimationHandle) -> AnimationHandle {
        if previous != next {
            self.release(previous);
        }
        next
    }

    /// Release every handle `section` owns; returns how many were live
    pub fn unmount_section(&mut self, section: ViewSection) -> usize {
        let owned: Vec<HandleId> = self
            .registrations
            .iter()
            .filter(|(_, r)| r.section == section)
            .map(|(id, _)| *id)
            .collect();
        for id in &owned {
            self.release(AnimationHandle(Some(*id)));
        }
        tracing::debug!(%section, released = owned.len(), "section unmounted");
        owned.len()
    }

    fn teardown(&mut self, id: HandleId, binding: Binding) {
        let owned: Vec<TweenId> = self
            .tweens
            .iter()
            .filter(|(_, t)| t.owner == id)
            .map(|(tid, _)| *tid)
            .collect();
        for tid in owned {
            self.cancel_tween(tid);
        }

        for listener in binding.listeners() {
            self.listeners.remove(&listener);
            self.host.remove_listener(listener);
        }

        // Leave elements in their post-animation state
        match binding {
            Binding::Timeline { timeline, .. } => self.snap_timeline(Some(id), &timeline),
            Binding::Hover { target, leave, .. } => {
                if self.host.element_exists(&target) {
                    for track in &leave.tracks {
                        if !self.driven_by_other(id, &target, track.property) {
                            self.set_style_value(&target, track.property, track.to);
                        }
                    }
                }
            }
            Binding::Scroll(scroll) => match scroll.animation {
                ScrollAnimation::PlayOnEnter(timeline) => self.snap_timeline(Some(id), &timeline),
                ScrollAnimation::Pin { target } => {
                    if self.host.element_exists(&target) {
                        self.set_style_value(&target, AnimatedProperty::TranslateY, 0.0);
                    }
                }
                ScrollAnimation::Scrub { .. } => {}
            },
            Binding::Sequence(sequence) => {
                if self.host.element_exists(&sequence.target) {
                    self.write_text(&sequence.target, sequence.cycle.current_text());
                }
            }
        }
    }

    /// Write every step's end value; repeating steps go back to rest
    fn snap_timeline(&mut self, owner: Option<HandleId>, timeline: &Timeline) {
        for step in timeline.steps() {
            let descriptor = &step.descriptor;
            if !self.host.element_exists(&descriptor.target) {
                continue;
            }
            for track in &descriptor.tracks {
                if owner.is_some_and(|id| self.driven_by_other(id, &descriptor.target, track.property))
                {
                    continue;
                }
                let value = if descriptor.repeat.is_some() {
                    track.property.resting_value()
                } else {
                    track.to
                };
                self.set_style_value(&descriptor.target, track.property, value);
            }
        }
    }

    /// Whether a tween of another handle will write this pair
    fn driven_by_other(&self, owner: HandleId, target: &ElementId, property: AnimatedProperty) -> bool {
        self.tweens.values().any(|t| {
            t.owner != owner
                && &t.target == target
                && t.tracks.iter().any(|track| track.property == property)
        })
    }

    /// Drop cached state of elements that are gone, so a remount starts clean
    fn forget_unmounted(&mut self) {
        let host = &self.host;
        self.styles.retain(|id, _| host.element_exists(id));
        self.texts.retain(|id, _| host.element_exists(id));
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// `None` for no-op handles
    pub fn handle_state(&self, handle: AnimationHandle) -> Option<HandleState> {
        let id = handle.0?;
        match self.registrations.get(&id) {
            Some(registration) => Some(registration.state),
            // Issued ids that are gone were released
            None if id < self.next_handle => Some(HandleState::Cancelled),
            None => None,
        }
    }

    pub fn active_handles(&self, section: ViewSection) -> usize {
        self.registrations
            .values()
            .filter(|r| r.section == section)
            .count()
    }

    pub fn total_active_handles(&self) -> usize {
        self.registrations.len()
    }

    /// Tweens currently running on `element` that include `property`
    pub fn running_tweens_on(&self, element: &ElementId, property: AnimatedProperty) -> usize {
        self.tweens
            .values()
            .filter(|t| {
                t.state == HandleState::Running
                    && &t.target == element
                    && t.tracks.iter().any(|track| track.property == property)
            })
            .count()
    }

    /// Current phrase index of a repeating sequence
    pub fn sequence_index(&self, handle: AnimationHandle) -> Option<usize> {
        match &self.registrations.get(&handle.0?)?.binding {
            Binding::Sequence(sequence) => Some(sequence.cycle.index()),
            _ => None,
        }
    }

    /// Style the controller last wrote for `element`
    pub fn style_of(&self, element: &ElementId) -> StyleState {
        self.styles.get(element).copied().unwrap_or_default()
    }

    /// Number of listeners attached on behalf of live handles
    pub fn attached_listeners(&self) -> usize {
        self.listeners.len()
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance to `now_ms`; the clock never runs backwards
    pub fn tick(&mut self, now_ms: f64) {
        let now = now_ms.max(self.now);
        let dt = self.last_tick.map_or(0.0, |last| now - last);
        self.now = now;
        self.last_tick = Some(now);

        self.dispatch_events();
        self.update_scroll_bindings(dt);
        self.update_sequences();
        self.advance_tweens();
        self.update_completion();
        self.flush();
    }

    fn dispatch_events(&mut self) {
        for listener in self.host.drain_events() {
            let Some(&owner) = self.listeners.get(&listener) else {
                continue;
            };
            let direction = match self.registrations.get_mut(&owner).map(|r| &mut r.binding) {
                Some(Binding::Hover { enter_listener, .. }) if *enter_listener == listener => {
                    Some(HoverDirection::Enter)
                }
                Some(Binding::Hover { .. }) => Some(HoverDirection::Leave),
                Some(Binding::Scroll(binding)) => {
                    if binding.resize_listener == listener {
                        binding.resize_pending = true;
                    }
                    binding.sample_pending = true;
                    None
                }
                _ => None,
            };
            if let Some(direction) = direction {
                self.hover(owner, direction);
            }
        }
    }

    fn hover(&mut self, owner: HandleId, direction: HoverDirection) {
        let (previous, descriptor) = match self.registrations.get_mut(&owner) {
            Some(Registration {
                binding:
                    Binding::Hover {
                        enter,
                        leave,
                        active,
                        ..
                    },
                ..
            }) => {
                let descriptor = match direction {
                    HoverDirection::Enter => enter.clone(),
                    HoverDirection::Leave => leave.clone(),
                };
                (active.take(), descriptor)
            }
            _ => return,
        };

        // The opposite tween must stop before this one touches the element
        if let Some(previous) = previous {
            self.cancel_tween(previous);
        }
        let tween = self.spawn_tween(owner, &descriptor, self.now);

        if let Some(registration) = self.registrations.get_mut(&owner) {
            if let Binding::Hover { active, .. } = &mut registration.binding {
                *active = Some(tween);
            }
            transition(&mut registration.state, HandleState::Running, false);
        }
    }

    fn update_scroll_bindings(&mut self, dt: f64) {
        let viewport = self.host.viewport();
        let scroll_ids: Vec<HandleId> = self
            .registrations
            .iter()
            .filter(|(_, r)| matches!(r.binding, Binding::Scroll(_)))
            .map(|(id, _)| *id)
            .collect();

        for id in scroll_ids {
            // Layout can shift without a resize, so the trigger box is compared every tick
            let needs_resolve = match self.registrations.get(&id) {
                Some(Registration {
                    binding: Binding::Scroll(binding),
                    ..
                }) => self.host.geometry(&binding.trigger).map(|geometry| {
                    binding.range.is_none()
                        || binding.resize_pending
                        || binding.geometry != Some(geometry)
                        || binding.viewport_height != viewport.map(|v| v.height)
                }),
                _ => continue,
            };

            let resolved = match needs_resolve {
                None => ScrollResolve::TriggerGone,
                Some(true) => self.resolve_scroll(id, viewport),
                Some(false) => ScrollResolve::Resolved,
            };
            match resolved {
                ScrollResolve::Resolved => self.drive_scroll(id, viewport, dt),
                ScrollResolve::Deferred => {}
                ScrollResolve::TriggerGone => {
                    tracing::debug!(handle = id, "scroll trigger removed, releasing binding");
                    self.release(AnimationHandle(Some(id)));
                }
            }
        }
    }

    fn resolve_scroll(&mut self, id: HandleId, viewport: Option<Viewport>) -> ScrollResolve {
        let (trigger, window) = match self.registrations.get(&id) {
            Some(Registration {
                binding: Binding::Scroll(binding),
                ..
            }) => (binding.trigger.clone(), binding.window),
            _ => return ScrollResolve::TriggerGone,
        };
        let Some(geometry) = self.host.geometry(&trigger) else {
            return ScrollResolve::TriggerGone;
        };
        let Some(viewport) = viewport else {
            return ScrollResolve::Deferred;
        };

        let range = window.resolve(&geometry, viewport.height);
        let mut first_render = None;
        if let Some(Registration {
            state,
            binding: Binding::Scroll(binding),
            ..
        }) = self.registrations.get_mut(&id)
        {
            if binding.range.is_none() {
                transition(state, HandleState::Scheduled, false);
                if let ScrollAnimation::PlayOnEnter(timeline) = &binding.animation {
                    first_render = Some(timeline.clone());
                }
            } else if binding.range != Some(range) {
                tracing::trace!(handle = id, start = range.start, "scroll window moved");
            }
            binding.range = Some(range);
            binding.geometry = Some(geometry);
            binding.viewport_height = Some(viewport.height);
            binding.resize_pending = false;
            binding.sample_pending = true;
        }
        if let Some(timeline) = first_render {
            self.render_from_values(&timeline);
        }
        ScrollResolve::Resolved
    }

    fn drive_scroll(&mut self, id: HandleId, viewport: Option<Viewport>, dt: f64) {
        let Some(viewport) = viewport else {
            return;
        };
        let scroll_y = viewport.scroll_y;
        let Some(Registration {
            state,
            binding: Binding::Scroll(binding),
            ..
        }) = self.registrations.get_mut(&id)
        else {
            return;
        };
        let Some(range) = binding.range else {
            return;
        };
        if !std::mem::take(&mut binding.sample_pending) {
            return;
        }

        let mut writes: Vec<(ElementId, AnimatedProperty, f64)> = Vec::new();
        let mut play = None;
        match &binding.animation {
            ScrollAnimation::Scrub {
                target,
                tracks,
                easing,
                lag_ms,
            } => {
                let goal = range.progress(scroll_y);
                let progress = match (binding.progress, *lag_ms) {
                    (Some(current), Some(lag)) if lag > 0.0 => {
                        let next = current + (goal - current) * (dt / lag).min(1.0);
                        if (goal - next).abs() < PROGRESS_EPSILON {
                            goal
                        } else {
                            next
                        }
                    }
                    _ => goal,
                };
                binding.progress = Some(progress);
                // Keep sampling until the lag has caught up
                binding.sample_pending = progress != goal;
                let eased = easing.apply(progress);
                for track in tracks {
                    let from = track.from.unwrap_or_else(|| track.property.resting_value());
                    writes.push((target.clone(), track.property, from + (track.to - from) * eased));
                }
                transition(state, HandleState::Running, false);
            }
            ScrollAnimation::Pin { target } => {
                let offset = (scroll_y - range.start).clamp(0.0, range.length());
                writes.push((target.clone(), AnimatedProperty::TranslateY, offset));
                transition(state, HandleState::Running, false);
            }
            ScrollAnimation::PlayOnEnter(timeline) => {
                if !binding.played && range.has_started(scroll_y) {
                    binding.played = true;
                    play = Some(timeline.clone());
                    transition(state, HandleState::Running, false);
                }
            }
        }

        for (target, property, value) in writes {
            self.set_style_value(&target, property, value);
        }
        if let Some(timeline) = play {
            let tweens = self.schedule_timeline(id, &timeline, self.now);
            if let Some(Registration {
                binding: Binding::Scroll(binding),
                ..
            }) = self.registrations.get_mut(&id)
            {
                binding.tweens = tweens;
            }
        }
    }

    fn update_sequences(&mut self) {
        let now = self.now;
        let mut text_writes: Vec<(ElementId, String)> = Vec::new();

        for registration in self.registrations.values_mut() {
            let Registration {
                state,
                binding: Binding::Sequence(sequence),
                ..
            } = registration
            else {
                continue;
            };

            let mut latest = None;
            // Bounded so zero-length phases cannot spin
            for _ in 0..(2 * sequence.cycle.len() + 2) {
                match sequence.phase {
                    SequencePhase::Typing { started_at } => {
                        if now < started_at {
                            break;
                        }
                        transition(state, HandleState::Running, true);
                        let typing_ms = sequence.cycle.typing_ms();
                        let progress = if typing_ms <= 0.0 {
                            1.0
                        } else {
                            (now - started_at) / typing_ms
                        };
                        let target_text = sequence.cycle.current_text();
                        latest = Some(blend_text(&sequence.from_text, &target_text, progress));
                        if progress < 1.0 {
                            break;
                        }
                        sequence.phase = SequencePhase::Waiting {
                            until: started_at + typing_ms + sequence.step_ms,
                        };
                        transition(state, HandleState::Completed, true);
                    }
                    SequencePhase::Waiting { until } => {
                        if now < until {
                            break;
                        }
                        sequence.from_text = sequence.cycle.current_text();
                        sequence.cycle.advance();
                        sequence.phase = SequencePhase::Typing { started_at: until };
                        transition(state, HandleState::Scheduled, true);
                    }
                }
            }
            if let Some(text) = latest {
                text_writes.push((sequence.target.clone(), text));
            }
        }

        for (target, text) in text_writes {
            self.write_text(&target, text);
        }
    }

    fn advance_tweens(&mut self) {
        let now = self.now;
        let ids: Vec<TweenId> = self.tweens.keys().copied().collect();
        for tid in ids {
            let Some((state, start_at)) = self.tweens.get(&tid).map(|t| (t.state, t.start_at)) else {
                continue;
            };
            match state {
                HandleState::Scheduled if now >= start_at => self.start_tween(tid),
                HandleState::Running => {}
                _ => continue,
            }
            self.step_tween(tid, now);
        }
        self.tweens
            .retain(|_, t| !matches!(t.state, HandleState::Completed | HandleState::Cancelled));
    }

    fn start_tween(&mut self, tid: TweenId) {
        let Some(tween) = self.tweens.get(&tid) else {
            return;
        };
        let target = tween.target.clone();
        let properties: Vec<AnimatedProperty> = tween.tracks.iter().map(|t| t.property).collect();

        for property in properties {
            if let Some(previous) = self.claims.insert((target.clone(), property), tid) {
                if previous != tid {
                    self.drop_track(previous, property);
                }
            }
        }

        let current = self.style_of(&target);
        if let Some(tween) = self.tweens.get_mut(&tid) {
            for track in &mut tween.tracks {
                track.start = track.from.unwrap_or_else(|| current.get(track.property));
            }
            tween.state = HandleState::Running;
        }
    }

    /// Take `property` away from a tween that lost ownership of it
    fn drop_track(&mut self, tid: TweenId, property: AnimatedProperty) {
        if let Some(tween) = self.tweens.get_mut(&tid) {
            tween.tracks.retain(|t| t.property != property);
            if tween.tracks.is_empty() && tween.state != HandleState::Cancelled {
                tracing::trace!(tween = tid, %property, "tween overwritten");
                tween.state = HandleState::Cancelled;
            }
        }
    }

    fn step_tween(&mut self, tid: TweenId, now: f64) {
        let Some(tween) = self.tweens.get_mut(&tid) else {
            return;
        };
        if tween.state != HandleState::Running {
            return;
        }

        let mut progress = tween.progress_at(now);
        if progress >= 1.0 && tween.roll_over(now) {
            progress = tween.progress_at(now);
        }
        let eased = tween.easing.apply(progress);
        let writes: Vec<(AnimatedProperty, f64)> = tween
            .tracks
            .iter()
            .map(|t| (t.property, t.start + (t.to - t.start) * eased))
            .collect();
        let target = tween.target.clone();
        let done = progress >= 1.0;
        if done {
            tween.state = HandleState::Completed;
        }

        for (property, value) in writes {
            self.set_style_value(&target, property, value);
        }
        if done {
            self.release_claims(tid);
        }
    }

    fn update_completion(&mut self) {
        let live_tweens = &self.tweens;
        for registration in self.registrations.values_mut() {
            let owned = match &registration.binding {
                Binding::Timeline { tweens, .. } => tweens,
                Binding::Scroll(binding) if binding.played => &binding.tweens,
                _ => continue,
            };
            let live = owned.iter().filter(|t| live_tweens.contains_key(t)).count();
            if live < owned.len() || owned.is_empty() {
                transition(&mut registration.state, HandleState::Running, false);
            }
            if live == 0 {
                transition(&mut registration.state, HandleState::Completed, false);
            } else if owned
                .iter()
                .filter_map(|t| live_tweens.get(t))
                .any(|t| t.state == HandleState::Running)
            {
                transition(&mut registration.state, HandleState::Running, false);
            }
        }
    }

    // ------------------------------------------------------------------
    // Tween plumbing
    // ------------------------------------------------------------------

    fn spawn_tween(&mut self, owner: HandleId, descriptor: &AnimationDescriptor, origin: f64) -> TweenId {
        let tid = self.next_tween;
        self.next_tween += 1;
        self.tweens.insert(
            tid,
            Tween {
                owner,
                target: descriptor.target.clone(),
                tracks: descriptor
                    .tracks
                    .iter()
                    .map(|t| ActiveTrack {
                        property: t.property,
                        from: t.from,
                        start: t.from.unwrap_or_else(|| t.property.resting_value()),
                        to: t.to,
                    })
                    .collect(),
                start_at: origin + descriptor.delay_ms,
                duration_ms: descriptor.duration_ms,
                easing: descriptor.easing.unwrap_or_default(),
                repeat: descriptor.repeat,
                iteration: 0,
                state: HandleState::Scheduled,
            },
        );
        tid
    }

    fn schedule_timeline(&mut self, owner: HandleId, timeline: &Timeline, origin: f64) -> Vec<TweenId> {
        timeline
            .steps()
            .iter()
            .map(|step| self.spawn_tween(owner, &step.descriptor, origin + step.start_ms))
            .collect()
    }

    /// Show explicit start values before the tweens begin
    fn render_from_values(&mut self, timeline: &Timeline) {
        for step in timeline.steps() {
            for track in &step.descriptor.tracks {
                if let Some(from) = track.from {
                    self.set_style_value(&step.descriptor.target, track.property, from);
                }
            }
        }
    }

    fn cancel_tween(&mut self, tid: TweenId) {
        if self.tweens.remove(&tid).is_some() {
            self.release_claims(tid);
        }
    }

    fn release_claims(&mut self, tid: TweenId) {
        self.claims.retain(|_, owner| *owner != tid);
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    fn set_style_value(&mut self, target: &ElementId, property: AnimatedProperty, value: f64) {
        let style = self.styles.entry(target.clone()).or_default();
        let before = style.get(property);
        style.set(property, value);
        if (style.get(property) - before).abs() > f64::EPSILON {
            self.dirty_styles.insert(target.clone());
        }
    }

    fn write_text(&mut self, target: &ElementId, text: String) {
        if self.texts.get(target) != Some(&text) {
            self.texts.insert(target.clone(), text);
            self.dirty_text.insert(target.clone());
        }
    }

    fn flush(&mut self) {
        for id in std::mem::take(&mut self.dirty_styles) {
            if let Some(style) = self.styles.get(&id) {
                self.host.apply_style(&id, style);
            }
        }
        for id in std::mem::take(&mut self.dirty_text) {
            if let Some(text) = self.texts.get(&id) {
                self.host.set_text(&id, text);
            }
        }
    }
}
