//! Animation context for the component tree
//!
//! Provides:
//! - One `AnimationController` per page, owned by the app root
//! - A fixed-interval frame driver calling `tick`
//! - Registration helpers sections call from their mount effects
//!
//! On the server every helper is inert and returns no-op handles.

#[cfg(not(feature = "ssr"))]
mod dom_host;

#[cfg(not(feature = "ssr"))]
pub use dom_host::{
    DomHost, current_year, element_height, element_top, prefers_reduced_motion, smooth_scroll_to,
};

use leptos::prelude::*;

use crate::core::animation::{
    AnimationDescriptor, AnimationHandle, ElementId, PhraseCycle, ScrollAnimation, ScrollWindow,
    Timeline, ViewSection,
};
use crate::core::choreography::{HoverPair, ScrollBinding};

#[cfg(not(feature = "ssr"))]
use crate::core::animation::{AnimationController, ControllerConfig};

#[cfg(not(feature = "ssr"))]
type PageController = AnimationController<DomHost>;

/// Handle to the page's animation controller
#[derive(Clone, Copy)]
pub struct AnimationContext {
    #[cfg(not(feature = "ssr"))]
    controller: StoredValue<Option<PageController>, LocalStorage>,
}

impl AnimationContext {
    /// Run `f` against the controller, `None` on the server or while it is busy
    #[cfg(not(feature = "ssr"))]
    fn with_controller<R>(&self, f: impl FnOnce(&mut PageController) -> R) -> Option<R> {
        self.controller
            .try_update_value(|controller| controller.as_mut().map(f))
            .flatten()
    }

    pub fn register_on_mount(&self, section: ViewSection, timeline: Timeline) -> AnimationHandle {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.register_on_mount(section, timeline))
                .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (section, timeline);
            AnimationHandle::noop()
        }
    }

    pub fn register_hover(
        &self,
        section: ViewSection,
        element: impl Into<ElementId>,
        enter: AnimationDescriptor,
        leave: AnimationDescriptor,
    ) -> AnimationHandle {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.register_hover(section, element, enter, leave))
                .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (section, element, enter, leave);
            AnimationHandle::noop()
        }
    }

    /// Hover pair built by one of the choreography helpers
    pub fn register_hover_pair(
        &self,
        section: ViewSection,
        element: impl Into<ElementId>,
        pair: HoverPair,
    ) -> AnimationHandle {
        self.register_hover(section, element, pair.enter, pair.leave)
    }

    pub fn register_scroll_linked(
        &self,
        section: ViewSection,
        trigger: impl Into<ElementId>,
        window: ScrollWindow,
        animation: ScrollAnimation,
    ) -> AnimationHandle {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.register_scroll_linked(section, trigger, window, animation))
                .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (section, trigger, window, animation);
            AnimationHandle::noop()
        }
    }

    /// Register a prepared scroll binding; a malformed one is logged and skipped
    pub fn register_scroll_binding<E: std::fmt::Display>(
        &self,
        section: ViewSection,
        binding: Result<ScrollBinding, E>,
    ) -> AnimationHandle {
        match binding {
            Ok(binding) => {
                self.register_scroll_linked(section, binding.trigger, binding.window, binding.animation)
            }
            Err(err) => {
                tracing::warn!(%section, error = %err, "invalid scroll binding");
                AnimationHandle::noop()
            }
        }
    }

    pub fn register_repeating_sequence(
        &self,
        section: ViewSection,
        element: impl Into<ElementId>,
        cycle: PhraseCycle,
        step_duration_ms: f64,
    ) -> AnimationHandle {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| {
                c.register_repeating_sequence(section, element, cycle, step_duration_ms)
            })
            .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (section, element, cycle, step_duration_ms);
            AnimationHandle::noop()
        }
    }

    pub fn release(&self, handle: AnimationHandle) {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.release(handle));
        }
        #[cfg(feature = "ssr")]
        {
            let _ = handle;
        }
    }

    /// Release `previous` and return `next`
    pub fn replace(&self, previous: AnimationHandle, next: AnimationHandle) -> AnimationHandle {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.replace(previous, next))
                .unwrap_or(next)
        }
        #[cfg(feature = "ssr")]
        {
            let _ = previous;
            next
        }
    }

    pub fn unmount_section(&self, section: ViewSection) {
        #[cfg(not(feature = "ssr"))]
        {
            self.with_controller(|c| c.unmount_section(section));
        }
        #[cfg(feature = "ssr")]
        {
            let _ = section;
        }
    }

    /// Register `register` once the section is mounted and release everything
    /// the section owns when it is disposed
    pub fn bind_section(&self, section: ViewSection, register: impl Fn(AnimationContext) + 'static) {
        let ctx = *self;
        Effect::new(move |_| register(ctx));
        on_cleanup(move || ctx.unmount_section(section));
    }
}

/// Create the page controller, start its frame driver and provide the context
pub fn provide_animation_context() -> AnimationContext {
    #[cfg(not(feature = "ssr"))]
    let ctx = {
        use gloo_timers::callback::Interval;

        let config = ControllerConfig {
            reduced_motion: prefers_reduced_motion(),
            ..ControllerConfig::default()
        };
        let controller = DomHost::new()
            .map(|host| AnimationController::with_clock(host, config, dom_host::performance_now()));
        if controller.is_none() {
            tracing::warn!("no DOM available, animations disabled");
        }
        tracing::debug!(reduced_motion = config.reduced_motion, "animation controller created");

        let ctx = AnimationContext {
            controller: StoredValue::new_local(controller),
        };

        // Dropped with the owning scope, which stops the loop
        let frame_loop = Interval::new(config.frame_interval_ms, move || {
            let now = dom_host::performance_now();
            ctx.with_controller(|c| c.tick(now));
        });
        let _frames = StoredValue::new_local(frame_loop);

        ctx
    };

    #[cfg(feature = "ssr")]
    let ctx = AnimationContext {};

    provide_context(ctx);

    ctx
}

/// Use the animation context from anywhere in the component tree
pub fn use_animation_context() -> AnimationContext {
    use_context::<AnimationContext>().expect("AnimationContext should be provided")
}
