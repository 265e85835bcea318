//! DOM implementation of the animation host
//!
//! Elements are looked up by id on every call, so a section that unmounts
//! simply stops existing for the controller. Listener callbacks only push
//! their id onto a queue; the controller drains it on the next frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::animation::{
    AnimationHost, ElementGeometry, ElementId, ListenerId, ListenerKind, ListenerTarget,
    StyleState, Viewport,
};

struct AttachedListener {
    target: web_sys::EventTarget,
    kind: ListenerKind,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

pub struct DomHost {
    window: web_sys::Window,
    document: web_sys::Document,
    queue: Rc<RefCell<Vec<ListenerId>>>,
    listeners: HashMap<ListenerId, AttachedListener>,
    next_listener: u64,
}

impl DomHost {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            queue: Rc::new(RefCell::new(Vec::new())),
            listeners: HashMap::new(),
            next_listener: 0,
        })
    }

    fn element(&self, id: &ElementId) -> Option<web_sys::HtmlElement> {
        self.document
            .get_element_by_id(id.as_str())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

impl AnimationHost for DomHost {
    fn element_exists(&self, id: &ElementId) -> bool {
        self.document.get_element_by_id(id.as_str()).is_some()
    }

    fn geometry(&self, id: &ElementId) -> Option<ElementGeometry> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(ElementGeometry {
            top: rect.top() + self.scroll_y(),
            height: rect.height(),
        })
    }

    fn viewport(&self) -> Option<Viewport> {
        let width = self.window.inner_width().ok()?.as_f64()?;
        let height = self.window.inner_height().ok()?.as_f64()?;
        if height <= 0.0 {
            return None;
        }
        Some(Viewport {
            width,
            height,
            scroll_y: self.scroll_y(),
        })
    }

    fn apply_style(&mut self, id: &ElementId, style: &StyleState) {
        let Some(element) = self.element(id) else {
            return;
        };
        let css = element.style();
        if let Err(err) = css
            .set_property("transform", &style.transform_css())
            .and_then(|_| css.set_property("opacity", &style.opacity_css()))
        {
            tracing::warn!(element = %id, ?err, "failed to write animated style");
        }
    }

    fn text(&self, id: &ElementId) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> Option<ListenerId> {
        let event_target: web_sys::EventTarget = match &target {
            ListenerTarget::Window => self.window.clone().into(),
            ListenerTarget::Element(id) => self.element(id)?.into(),
        };

        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        let queue = Rc::clone(&self.queue);
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            queue.borrow_mut().push(id);
        }) as Box<dyn FnMut(web_sys::Event)>);

        event_target
            .add_event_listener_with_callback(&kind.to_string(), callback.as_ref().unchecked_ref())
            .ok()?;

        self.listeners.insert(
            id,
            AttachedListener {
                target: event_target,
                kind,
                callback,
            },
        );
        Some(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let Some(listener) = self.listeners.remove(&id) else {
            return;
        };
        let _ = listener.target.remove_event_listener_with_callback(
            &listener.kind.to_string(),
            listener.callback.as_ref().unchecked_ref(),
        );
    }

    fn drain_events(&mut self) -> Vec<ListenerId> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        // Callbacks must be detached before their closures are freed
        let ids: Vec<ListenerId> = self.listeners.keys().copied().collect();
        for id in ids {
            self.remove_listener(id);
        }
    }
}

/// Whether the user asked the system to minimise motion
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Milliseconds since page load
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

/// Smooth-scroll the window to `top`
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Document-space top of element `id`
pub fn element_top(id: &str) -> Option<f64> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0))
}

/// Rendered height of element `id`
pub fn element_height(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().height())
}

/// Current calendar year from the browser clock
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
