#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::core::animation::{
        AnimatedProperty, AnimationController, AnimationDescriptor, AnimationHandle, AnimationHost,
        ControllerConfig, Easing, ElementGeometry, ElementId, HandleState, ListenerId, ListenerKind,
        ListenerTarget, PhraseCycle, PropertyTrack, Repeat, ScrollAnimation, ScrollWindow,
        StyleState, Timeline, ViewSection, Viewport,
    };

    /// Recording host: elements are ids with geometry, listeners are queued by hand
    #[derive(Default)]
    struct MockHost {
        elements: HashMap<ElementId, ElementGeometry>,
        viewport: Option<Viewport>,
        styles: HashMap<ElementId, StyleState>,
        texts: HashMap<ElementId, String>,
        listeners: HashMap<ListenerId, (ListenerTarget, ListenerKind)>,
        removed: Vec<ListenerId>,
        queued: Vec<ListenerId>,
        next_listener: u64,
    }

    impl MockHost {
        fn with_elements(ids: &[&str]) -> Self {
            let mut host = Self {
                viewport: Some(Viewport {
                    width: 1280.0,
                    height: 800.0,
                    scroll_y: 0.0,
                }),
                ..Self::default()
            };
            for id in ids {
                host.mount(id, 0.0, 100.0);
            }
            host
        }

        fn mount(&mut self, id: &str, top: f64, height: f64) {
            self.elements
                .insert(ElementId::from(id), ElementGeometry { top, height });
        }

        fn unmount(&mut self, id: &str) {
            self.elements.remove(&ElementId::from(id));
        }

        fn style(&self, id: &str) -> StyleState {
            self.styles
                .get(&ElementId::from(id))
                .copied()
                .unwrap_or_default()
        }

        fn fire(&mut self, target: ListenerTarget, kind: ListenerKind) {
            let mut matching: Vec<ListenerId> = self
                .listeners
                .iter()
                .filter(|(_, (t, k))| *t == target && *k == kind)
                .map(|(id, _)| *id)
                .collect();
            matching.sort();
            self.queued.extend(matching);
        }

        fn pointer(&mut self, id: &str, kind: ListenerKind) {
            self.fire(ListenerTarget::Element(ElementId::from(id)), kind);
        }

        fn scroll_to(&mut self, scroll_y: f64) {
            if let Some(viewport) = self.viewport.as_mut() {
                viewport.scroll_y = scroll_y;
            }
            self.fire(ListenerTarget::Window, ListenerKind::Scroll);
        }

        fn resize(&mut self) {
            self.fire(ListenerTarget::Window, ListenerKind::Resize);
        }
    }

    impl AnimationHost for MockHost {
        fn element_exists(&self, id: &ElementId) -> bool {
            self.elements.contains_key(id)
        }

        fn geometry(&self, id: &ElementId) -> Option<ElementGeometry> {
            self.elements.get(id).copied()
        }

        fn viewport(&self) -> Option<Viewport> {
            self.viewport
        }

        fn apply_style(&mut self, id: &ElementId, style: &StyleState) {
            if self.elements.contains_key(id) {
                self.styles.insert(id.clone(), *style);
            }
        }

        fn text(&self, id: &ElementId) -> Option<String> {
            self.texts.get(id).cloned()
        }

        fn set_text(&mut self, id: &ElementId, text: &str) {
            if self.elements.contains_key(id) {
                self.texts.insert(id.clone(), text.to_string());
            }
        }

        fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> Option<ListenerId> {
            if let ListenerTarget::Element(id) = &target {
                if !self.elements.contains_key(id) {
                    return None;
                }
            }
            self.next_listener += 1;
            let id = ListenerId(self.next_listener);
            self.listeners.insert(id, (target, kind));
            Some(id)
        }

        fn remove_listener(&mut self, id: ListenerId) {
            if self.listeners.remove(&id).is_some() {
                self.removed.push(id);
            }
        }

        fn drain_events(&mut self) -> Vec<ListenerId> {
            std::mem::take(&mut self.queued)
                .into_iter()
                .filter(|id| self.listeners.contains_key(id))
                .collect()
        }
    }

    fn controller(ids: &[&str]) -> AnimationController<MockHost> {
        AnimationController::new(MockHost::with_elements(ids), ControllerConfig::default())
    }

    fn id(value: &str) -> ElementId {
        ElementId::from(value)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn fade_in(target: &str, duration_ms: f64) -> Timeline {
        Timeline::new().then(
            AnimationDescriptor::new(target, duration_ms)
                .from(AnimatedProperty::Opacity, 0.0)
                .ease(Easing::Linear),
        )
    }

    fn scale_hover(controller: &mut AnimationController<MockHost>, target: &str) -> AnimationHandle {
        controller.register_hover(
            ViewSection::Hero,
            target,
            AnimationDescriptor::new(target, 300.0).to(AnimatedProperty::Scale, 1.2),
            AnimationDescriptor::new(target, 300.0).to(AnimatedProperty::Scale, 1.0),
        )
    }

    #[test]
    fn test_mount_timeline_renders_from_values_immediately() {
        let mut controller = controller(&["headline"]);
        let handle = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));

        assert!(!handle.is_noop());
        assert_close(controller.host().style("headline").opacity, 0.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Scheduled));
    }

    #[test]
    fn test_mount_timeline_runs_to_completion() {
        let mut controller = controller(&["headline"]);
        let handle = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));

        controller.tick(0.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

        controller.tick(500.0);
        assert_close(controller.host().style("headline").opacity, 0.5);

        controller.tick(1000.0);
        assert_close(controller.host().style("headline").opacity, 1.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Completed));
    }

    #[test]
    fn test_timeline_offsets_delay_later_steps() {
        let mut controller = controller(&["headline", "name"]);
        let timeline = Timeline::new()
            .with_default_easing(Easing::Linear)
            .then(AnimationDescriptor::new("headline", 1000.0).from(AnimatedProperty::TranslateY, 50.0))
            .overlapping(
                AnimationDescriptor::new("name", 1000.0).from(AnimatedProperty::TranslateY, 30.0),
                500.0,
            );
        controller.register_on_mount(ViewSection::Hero, timeline);

        controller.tick(0.0);
        controller.tick(400.0);
        // Second step starts at 500ms, so it still shows its start value
        assert_close(controller.host().style("name").translate_y, 30.0);
        assert_close(controller.host().style("headline").translate_y, 30.0);

        controller.tick(1000.0);
        assert_close(controller.host().style("name").translate_y, 15.0);
        assert_close(controller.host().style("headline").translate_y, 0.0);
    }

    #[test]
    fn test_missing_target_yields_noop_handle() {
        let mut controller = controller(&[]);
        let handle = controller.register_on_mount(ViewSection::About, fade_in("ghost", 600.0));

        assert!(handle.is_noop());
        assert_eq!(controller.handle_state(handle), None);

        controller.release(handle);
        controller.release(handle);
        assert_eq!(controller.total_active_handles(), 0);
        assert!(controller.host().styles.is_empty());
    }

    #[test]
    fn test_missing_hover_target_attaches_nothing() {
        let mut controller = controller(&[]);
        let handle = scale_hover(&mut controller, "ghost");

        assert!(handle.is_noop());
        assert!(controller.host().listeners.is_empty());
    }

    #[test]
    fn test_partially_missing_timeline_keeps_mounted_targets() {
        let mut controller = controller(&["card-0"]);
        let timeline = Timeline::new().stagger(
            [id("card-0"), id("card-1")],
            AnimationDescriptor::new("card", 600.0).from(AnimatedProperty::Opacity, 0.0),
            100.0,
            Default::default(),
        );
        let handle = controller.register_on_mount(ViewSection::Skills, timeline);

        assert!(!handle.is_noop());
        assert_close(controller.host().style("card-0").opacity, 0.0);
        assert!(!controller.host().styles.contains_key(&id("card-1")));
    }

    #[test]
    fn test_double_release_equals_single_release() {
        let mut controller = controller(&["chip"]);
        let handle = scale_hover(&mut controller, "chip");
        assert_eq!(controller.host().listeners.len(), 2);

        controller.release(handle);
        let removed_once = controller.host().removed.clone();
        let styles_once = controller.host().styles.clone();

        controller.release(handle);
        assert_eq!(controller.host().removed, removed_once);
        assert_eq!(controller.host().styles, styles_once);
        assert_eq!(removed_once.len(), 2);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Cancelled));
    }

    #[test]
    fn test_release_detaches_only_own_listeners() {
        let mut controller = controller(&["chip-0", "chip-1"]);
        let first = scale_hover(&mut controller, "chip-0");
        let _second = scale_hover(&mut controller, "chip-1");

        controller.release(first);

        assert_eq!(controller.host().listeners.len(), 2);
        assert!(controller.host().listeners.values().all(|(target, _)| {
            *target == ListenerTarget::Element(id("chip-1"))
        }));
    }

    #[test]
    fn test_hover_pair_never_runs_concurrently() {
        let mut controller = controller(&["chip"]);
        scale_hover(&mut controller, "chip");

        let mut now = 0.0;
        for round in 0..10 {
            let kind = if round % 2 == 0 {
                ListenerKind::PointerEnter
            } else {
                ListenerKind::PointerLeave
            };
            controller.host_mut().pointer("chip", kind);
            controller.tick(now);
            assert!(controller.running_tweens_on(&id("chip"), AnimatedProperty::Scale) <= 1);
            now += 120.0;
            controller.tick(now);
            assert!(controller.running_tweens_on(&id("chip"), AnimatedProperty::Scale) <= 1);
        }
    }

    #[test]
    fn test_hover_leave_settles_at_rest() {
        let mut controller = controller(&["chip"]);
        let handle = scale_hover(&mut controller, "chip");
        assert_eq!(controller.handle_state(handle), Some(HandleState::Scheduled));

        controller.host_mut().pointer("chip", ListenerKind::PointerEnter);
        controller.tick(0.0);
        controller.tick(300.0);
        assert_close(controller.host().style("chip").scale, 1.2);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

        controller.host_mut().pointer("chip", ListenerKind::PointerLeave);
        controller.tick(400.0);
        controller.tick(700.0);
        assert_close(controller.host().style("chip").scale, 1.0);
    }

    #[test]
    fn test_release_mid_hover_snaps_to_leave_state() {
        let mut controller = controller(&["chip"]);
        let handle = scale_hover(&mut controller, "chip");

        controller.host_mut().pointer("chip", ListenerKind::PointerEnter);
        controller.tick(0.0);
        controller.tick(150.0);
        assert!(controller.host().style("chip").scale > 1.0);

        controller.release(handle);
        assert_close(controller.host().style("chip").scale, 1.0);
        assert_eq!(controller.running_tweens_on(&id("chip"), AnimatedProperty::Scale), 0);
    }

    #[test]
    fn test_newer_tween_takes_over_property() {
        let mut controller = controller(&["card"]);
        let first = Timeline::new().then(
            AnimationDescriptor::new("card", 1000.0)
                .to(AnimatedProperty::Opacity, 0.2)
                .to(AnimatedProperty::Scale, 1.5)
                .ease(Easing::Linear),
        );
        controller.register_on_mount(ViewSection::Projects, first);
        controller.tick(0.0);
        controller.tick(100.0);

        let second = Timeline::new().then(
            AnimationDescriptor::new("card", 500.0)
                .to(AnimatedProperty::Opacity, 1.0)
                .ease(Easing::Linear),
        );
        controller.register_on_mount(ViewSection::Projects, second);
        controller.tick(100.0);

        assert_eq!(controller.running_tweens_on(&id("card"), AnimatedProperty::Opacity), 1);
        assert_eq!(controller.running_tweens_on(&id("card"), AnimatedProperty::Scale), 1);

        controller.tick(600.0);
        assert_close(controller.host().style("card").opacity, 1.0);
        controller.tick(1000.0);
        assert_close(controller.host().style("card").scale, 1.5);
        assert_close(controller.host().style("card").opacity, 1.0);
    }

    #[test]
    fn test_tween_without_tracks_left_is_cancelled() {
        let mut controller = controller(&["card"]);
        let first = controller.register_on_mount(
            ViewSection::Projects,
            Timeline::new().then(AnimationDescriptor::new("card", 1000.0).to(AnimatedProperty::Opacity, 0.0)),
        );
        controller.tick(0.0);

        controller.register_on_mount(
            ViewSection::Projects,
            Timeline::new().then(AnimationDescriptor::new("card", 1000.0).to(AnimatedProperty::Opacity, 1.0)),
        );
        controller.tick(10.0);

        assert_eq!(controller.running_tweens_on(&id("card"), AnimatedProperty::Opacity), 1);
        // The overwritten timeline has nothing left to play
        assert_eq!(controller.handle_state(first), Some(HandleState::Completed));
    }

    #[test]
    fn test_yoyo_repeat_alternates_direction() {
        let mut controller = controller(&["chip"]);
        let timeline = Timeline::new().then(
            AnimationDescriptor::new("chip", 100.0)
                .to(AnimatedProperty::TranslateY, -10.0)
                .ease(Easing::Linear)
                .repeat(Repeat::yoyo_forever()),
        );
        let handle = controller.register_on_mount(ViewSection::Hero, timeline);

        controller.tick(0.0);
        controller.tick(50.0);
        assert_close(controller.host().style("chip").translate_y, -5.0);
        controller.tick(100.0);
        assert_close(controller.host().style("chip").translate_y, -10.0);
        controller.tick(150.0);
        assert_close(controller.host().style("chip").translate_y, -5.0);
        controller.tick(200.0);
        assert_close(controller.host().style("chip").translate_y, 0.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

        // Repeating steps rest at their resting value once released
        controller.tick(260.0);
        controller.release(handle);
        assert_close(controller.host().style("chip").translate_y, 0.0);
    }

    #[test]
    fn test_counted_repeat_finishes() {
        let mut controller = controller(&["chip"]);
        let timeline = Timeline::new().then(
            AnimationDescriptor::new("chip", 100.0)
                .to(AnimatedProperty::Rotation, 90.0)
                .ease(Easing::Linear)
                .repeat(Repeat {
                    count: Some(1),
                    yoyo: true,
                }),
        );
        let handle = controller.register_on_mount(ViewSection::Hero, timeline);

        controller.tick(0.0);
        controller.tick(1000.0);
        assert_close(controller.host().style("chip").rotation, 0.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Completed));
    }

    #[test]
    fn test_phrase_cycle_visits_phrases_in_order() {
        let mut controller = controller(&["typed"]);
        let cycle = PhraseCycle::new("", ["A", "B", "C"]).unwrap().with_typing_ms(100.0);
        let handle = controller.register_repeating_sequence(ViewSection::Hero, "typed", cycle, 50.0);

        let phrases = ["A", "B", "C"];
        for k in 0..6 {
            let start = k as f64 * 150.0;
            controller.tick(start + 99.0);
            assert_eq!(controller.sequence_index(handle), Some(k % 3));
            assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

            controller.tick(start + 100.0);
            assert_eq!(
                controller.host().texts.get(&id("typed")).map(String::as_str),
                Some(phrases[k % 3])
            );
            assert_eq!(controller.handle_state(handle), Some(HandleState::Completed));

            // Pause elapses before the index moves
            controller.tick(start + 149.0);
            assert_eq!(controller.sequence_index(handle), Some(k % 3));
        }
    }

    #[test]
    fn test_phrase_cycle_types_over_previous_text() {
        let mut controller = controller(&["typed"]);
        let cycle = PhraseCycle::new("I build ", ["Web Apps", "REST APIs"])
            .unwrap()
            .with_typing_ms(1000.0);
        controller.register_repeating_sequence(ViewSection::Hero, "typed", cycle, 1000.0);

        controller.tick(1000.0);
        assert_eq!(controller.host().texts[&id("typed")], "I build Web Apps");

        // Halfway into the next phrase: new prefix, old tail
        controller.tick(2500.0);
        let text = &controller.host().texts[&id("typed")];
        assert!(text.starts_with("I build "));
        assert_ne!(text, "I build Web Apps");
        assert_ne!(text, "I build REST APIs");

        controller.tick(3000.0);
        assert_eq!(controller.host().texts[&id("typed")], "I build REST APIs");
    }

    #[test]
    fn test_release_sequence_shows_full_phrase() {
        let mut controller = controller(&["typed"]);
        let cycle = PhraseCycle::new("I build ", ["UIs"]).unwrap().with_typing_ms(1000.0);
        let handle = controller.register_repeating_sequence(ViewSection::Hero, "typed", cycle, 500.0);

        controller.tick(300.0);
        controller.release(handle);
        assert_eq!(controller.host().texts[&id("typed")], "I build UIs");
    }

    #[test]
    fn test_play_on_enter_waits_for_window_start() {
        let mut controller = controller(&["card"]);
        controller.host_mut().mount("skills", 1000.0, 500.0);
        let timeline = fade_in("card", 600.0);
        let handle = controller.register_scroll_linked(
            ViewSection::Skills,
            "skills",
            ScrollWindow::starting_at("top center+=100").unwrap(),
            ScrollAnimation::PlayOnEnter(timeline),
        );

        assert_eq!(controller.handle_state(handle), Some(HandleState::Scheduled));
        assert_close(controller.host().style("card").opacity, 0.0);

        // Start offset: 1000 - (400 + 100)
        controller.host_mut().scroll_to(499.0);
        controller.tick(0.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Scheduled));

        controller.host_mut().scroll_to(500.0);
        controller.tick(100.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

        controller.tick(700.0);
        assert_close(controller.host().style("card").opacity, 1.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Completed));
    }

    #[test]
    fn test_scroll_registration_deferred_until_viewport_known() {
        let mut controller = controller(&["card"]);
        controller.host_mut().mount("skills", 1000.0, 500.0);
        controller.host_mut().viewport = None;

        let handle = controller.register_scroll_linked(
            ViewSection::Skills,
            "skills",
            ScrollWindow::starting_at("top 80%").unwrap(),
            ScrollAnimation::PlayOnEnter(fade_in("card", 600.0)),
        );
        assert!(!handle.is_noop());
        assert_eq!(controller.handle_state(handle), Some(HandleState::Idle));
        assert!(!controller.host().styles.contains_key(&id("card")));

        controller.tick(16.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Idle));

        controller.host_mut().viewport = Some(Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
        });
        controller.tick(32.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Scheduled));
        assert_close(controller.host().style("card").opacity, 0.0);
    }

    fn parallax(controller: &mut AnimationController<MockHost>, lag_ms: Option<f64>) -> AnimationHandle {
        controller.register_scroll_linked(
            ViewSection::Hero,
            "hero",
            ScrollWindow::new("top top", "bottom top").unwrap(),
            ScrollAnimation::Scrub {
                target: id("hero-bg"),
                tracks: vec![PropertyTrack {
                    property: AnimatedProperty::TranslateY,
                    from: None,
                    to: 100.0,
                }],
                easing: Easing::Linear,
                lag_ms,
            },
        )
    }

    #[test]
    fn test_scrub_follows_scroll_progress() {
        let mut controller = controller(&["hero-bg"]);
        controller.host_mut().mount("hero", 0.0, 1000.0);
        let handle = parallax(&mut controller, None);

        controller.host_mut().scroll_to(500.0);
        controller.tick(0.0);
        assert_close(controller.host().style("hero-bg").translate_y, 50.0);
        assert_eq!(controller.handle_state(handle), Some(HandleState::Running));

        controller.host_mut().scroll_to(2000.0);
        controller.tick(16.0);
        assert_close(controller.host().style("hero-bg").translate_y, 100.0);
    }

    #[test]
    fn test_scrub_lag_trails_scroll() {
        let mut controller = controller(&["hero-bg"]);
        controller.host_mut().mount("hero", 0.0, 1000.0);
        parallax(&mut controller, Some(1000.0));

        controller.tick(0.0);
        controller.host_mut().scroll_to(1000.0);
        controller.tick(100.0);
        let trailing = controller.host().style("hero-bg").translate_y;
        assert!(trailing > 0.0 && trailing < 100.0);

        controller.tick(1100.0);
        assert_close(controller.host().style("hero-bg").translate_y, 100.0);
    }

    #[test]
    fn test_layout_shift_recomputes_window() {
        let mut controller = controller(&["hero-bg"]);
        controller.host_mut().mount("hero", 0.0, 1000.0);
        parallax(&mut controller, None);

        controller.host_mut().scroll_to(500.0);
        controller.tick(0.0);
        assert_close(controller.host().style("hero-bg").translate_y, 50.0);

        // Trigger grows without any resize event
        controller.host_mut().mount("hero", 0.0, 2000.0);
        controller.tick(16.0);
        assert_close(controller.host().style("hero-bg").translate_y, 25.0);
    }

    fn pin_header(controller: &mut AnimationController<MockHost>) -> AnimationHandle {
        controller.register_scroll_linked(
            ViewSection::Projects,
            "projects",
            ScrollWindow::new("top top", "bottom bottom").unwrap(),
            ScrollAnimation::Pin {
                target: id("projects-header"),
            },
        )
    }

    #[test]
    fn test_shrunk_trigger_shortens_pin_window() {
        let mut controller = controller(&["projects-header"]);
        controller.host_mut().mount("projects", 1000.0, 3000.0);
        pin_header(&mut controller);

        controller.host_mut().scroll_to(5000.0);
        controller.tick(0.0);
        assert_close(controller.host().style("projects-header").translate_y, 2200.0);

        // Filtered grid re-renders with fewer cards
        controller.host_mut().mount("projects", 1000.0, 1200.0);
        controller.host_mut().scroll_to(5000.0);
        controller.tick(16.0);
        assert_close(controller.host().style("projects-header").translate_y, 400.0);
    }

    #[test]
    fn test_viewport_resize_recomputes_window() {
        let mut controller = controller(&["projects-header"]);
        controller.host_mut().mount("projects", 1000.0, 1200.0);
        pin_header(&mut controller);

        controller.host_mut().scroll_to(5000.0);
        controller.tick(0.0);
        assert_close(controller.host().style("projects-header").translate_y, 400.0);

        if let Some(viewport) = controller.host_mut().viewport.as_mut() {
            viewport.height = 600.0;
        }
        controller.host_mut().resize();
        controller.tick(16.0);
        assert_close(controller.host().style("projects-header").translate_y, 600.0);
    }

    #[test]
    fn test_scroll_offset_sampled_on_scroll_event() {
        let mut controller = controller(&["hero-bg"]);
        controller.host_mut().mount("hero", 0.0, 1000.0);
        parallax(&mut controller, None);
        controller.tick(0.0);
        assert_close(controller.host().style("hero-bg").translate_y, 0.0);

        // Offset moves but no scroll event has been delivered yet
        if let Some(viewport) = controller.host_mut().viewport.as_mut() {
            viewport.scroll_y = 500.0;
        }
        controller.tick(16.0);
        assert_close(controller.host().style("hero-bg").translate_y, 0.0);

        controller.host_mut().fire(ListenerTarget::Window, ListenerKind::Scroll);
        controller.tick(32.0);
        assert_close(controller.host().style("hero-bg").translate_y, 50.0);
    }

    #[test]
    fn test_pin_holds_element_within_window() {
        let mut controller = controller(&["projects-header"]);
        controller.host_mut().mount("projects", 1000.0, 1200.0);
        let handle = controller.register_scroll_linked(
            ViewSection::Projects,
            "projects",
            ScrollWindow::new("top top", "bottom bottom").unwrap(),
            ScrollAnimation::Pin {
                target: id("projects-header"),
            },
        );

        controller.host_mut().scroll_to(1200.0);
        controller.tick(0.0);
        assert_close(controller.host().style("projects-header").translate_y, 200.0);

        // Window length is 1200 - 800
        controller.host_mut().scroll_to(5000.0);
        controller.tick(16.0);
        assert_close(controller.host().style("projects-header").translate_y, 400.0);

        controller.release(handle);
        assert_close(controller.host().style("projects-header").translate_y, 0.0);
    }

    #[test]
    fn test_trigger_removal_releases_binding() {
        let mut controller = controller(&["hero-bg"]);
        controller.host_mut().mount("hero", 0.0, 1000.0);
        let handle = parallax(&mut controller, None);
        assert_eq!(controller.host().listeners.len(), 2);

        controller.host_mut().unmount("hero");
        controller.tick(16.0);

        assert_eq!(controller.handle_state(handle), Some(HandleState::Cancelled));
        assert_eq!(controller.active_handles(ViewSection::Hero), 0);
        assert!(controller.host().listeners.is_empty());
    }

    #[test]
    fn test_unmount_leaves_no_active_handles() {
        let mut controller = controller(&["el", "typed", "trigger"]);
        for section in ViewSection::ALL {
            controller.register_on_mount(section, fade_in("el", 500.0));
            scale_hover(&mut controller, "el");
            controller.register_scroll_linked(
                section,
                "trigger",
                ScrollWindow::starting_at("top 80%").unwrap(),
                ScrollAnimation::PlayOnEnter(fade_in("el", 500.0)),
            );
            controller.register_repeating_sequence(
                section,
                "typed",
                PhraseCycle::new("", ["x"]).unwrap(),
                100.0,
            );
        }
        controller.tick(250.0);

        for section in ViewSection::ALL {
            controller.unmount_section(section);
            assert_eq!(controller.active_handles(section), 0, "{section}");
        }
        assert_eq!(controller.total_active_handles(), 0);
        assert_eq!(controller.attached_listeners(), 0);
        assert!(controller.host().listeners.is_empty());
    }

    #[test]
    fn test_unmount_only_touches_its_section() {
        let mut controller = controller(&["nav", "hero"]);
        controller.register_on_mount(ViewSection::Navbar, fade_in("nav", 800.0));
        controller.register_on_mount(ViewSection::Hero, fade_in("hero", 800.0));

        assert_eq!(controller.unmount_section(ViewSection::Navbar), 1);
        assert_eq!(controller.active_handles(ViewSection::Hero), 1);
    }

    #[test]
    fn test_release_snaps_entrance_to_final_state() {
        let mut controller = controller(&["headline"]);
        let handle = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));
        controller.tick(0.0);
        controller.tick(200.0);

        controller.release(handle);
        assert_close(controller.host().style("headline").opacity, 1.0);
        assert_eq!(controller.running_tweens_on(&id("headline"), AnimatedProperty::Opacity), 0);
    }

    #[test]
    fn test_replace_releases_previous_handle() {
        let mut controller = controller(&["headline"]);
        let first = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));
        let second = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));

        let kept = controller.replace(first, second);
        assert_eq!(kept, second);
        assert_eq!(controller.handle_state(first), Some(HandleState::Cancelled));
        assert_eq!(controller.active_handles(ViewSection::Hero), 1);
    }

    #[test]
    fn test_replaced_handles_stay_cancelled() {
        let mut controller = controller(&["card"]);
        let first = controller.register_on_mount(ViewSection::Projects, fade_in("card", 600.0));
        let mut current = first;
        for _ in 0..50 {
            let next = controller.register_on_mount(ViewSection::Projects, fade_in("card", 600.0));
            current = controller.replace(current, next);
        }

        assert_eq!(controller.handle_state(first), Some(HandleState::Cancelled));
        assert_eq!(controller.handle_state(current), Some(HandleState::Scheduled));
        assert_eq!(controller.active_handles(ViewSection::Projects), 1);
        assert_eq!(controller.handle_state(AnimationHandle::noop()), None);
    }

    #[test]
    fn test_late_release_does_not_clobber_remount() {
        let mut controller = controller(&["hero"]);
        let old = controller.register_on_mount(ViewSection::Hero, fade_in("hero", 1000.0));
        controller.tick(0.0);
        controller.tick(500.0);

        // Remounted section registers before the old cleanup runs
        controller.register_on_mount(ViewSection::Hero, fade_in("hero", 1000.0));
        controller.release(old);

        assert_close(controller.host().style("hero").opacity, 0.0);
        controller.tick(1000.0);
        assert_close(controller.host().style("hero").opacity, 0.5);
    }

    #[test]
    fn test_reduced_motion_renders_resting_state() {
        let config = ControllerConfig {
            reduced_motion: true,
            ..ControllerConfig::default()
        };
        let mut controller = AnimationController::new(MockHost::with_elements(&["headline", "typed"]), config);

        let mount = controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));
        let typed = controller.register_repeating_sequence(
            ViewSection::Hero,
            "typed",
            PhraseCycle::new("I build ", ["Web Applications", "REST APIs"]).unwrap(),
            2000.0,
        );

        assert!(mount.is_noop());
        assert!(typed.is_noop());
        assert!(controller.host().style("headline").is_resting());
        assert_eq!(controller.host().texts[&id("typed")], "I build Web Applications");
        assert_eq!(controller.total_active_handles(), 0);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut controller = controller(&["headline"]);
        controller.register_on_mount(ViewSection::Hero, fade_in("headline", 1000.0));
        controller.tick(0.0);
        controller.tick(600.0);
        controller.tick(100.0);

        assert_close(controller.now(), 600.0);
        assert_close(controller.host().style("headline").opacity, 0.6);
    }
}
