use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuEvent {
    Toggle,
    ActionChosen,
    /// A pointer-down somewhere in the document; `inside` is true when the
    /// target is within the menu boundary.
    PointerDown { inside: bool },
}

impl MenuState {
    pub(crate) fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (_, MenuEvent::ActionChosen) => Self::Closed,
            (Self::Open, MenuEvent::PointerDown { inside: true }) => Self::Open,
            (_, MenuEvent::PointerDown { .. }) => Self::Closed,
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// DOM id of the menu boundary for one list item.
pub(crate) fn menu_dom_id(note_id: &str) -> String {
    format!("settings-dropdown-{note_id}")
}

/// Document-level pointer-down listener for one menu.
///
/// `attach` registers it, `detach` removes it; the owning component detaches
/// on cleanup so no listener outlives its list item.
pub(crate) struct OutsideClickSubscription {
    handle: Option<WindowListenerHandle>,
}

impl OutsideClickSubscription {
    /// Calls `on_pointer_down(inside)` for every pointer-down while attached.
    /// Events are ignored while the boundary element is not in the document.
    pub(crate) fn attach(boundary_id: String, on_pointer_down: impl Fn(bool) + 'static) -> Self {
        log::debug!("menu listener attached: {boundary_id}");
        let handle = window_event_listener(ev::pointerdown, move |e: web_sys::PointerEvent| {
            let Some(boundary) = document().get_element_by_id(&boundary_id) else {
                return;
            };
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| boundary.contains(Some(&node)))
                .unwrap_or(false);
            on_pointer_down(inside);
        });

        Self {
            handle: Some(handle),
        }
    }

    pub(crate) fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            log::debug!("menu listener detached");
            handle.remove();
        }
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let s = MenuState::default();
        assert!(!s.is_open());
        let s = s.next(MenuEvent::Toggle);
        assert!(s.is_open());
        assert_eq!(s.next(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_action_closes() {
        assert_eq!(MenuState::Open.next(MenuEvent::ActionChosen), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::ActionChosen), MenuState::Closed);
    }

    #[test]
    fn test_outside_pointer_down_closes_inside_does_not() {
        assert_eq!(
            MenuState::Open.next(MenuEvent::PointerDown { inside: false }),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Open.next(MenuEvent::PointerDown { inside: true }),
            MenuState::Open
        );
        assert_eq!(
            MenuState::Closed.next(MenuEvent::PointerDown { inside: true }),
            MenuState::Closed
        );
    }

    #[test]
    fn test_menu_dom_id_is_scoped_by_note() {
        assert_eq!(menu_dom_id("42"), "settings-dropdown-42");
        assert_ne!(menu_dom_id("1"), menu_dom_id("2"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pointer_down_on(target: &web_sys::Element) {
        let init = web_sys::PointerEventInit::new();
        init.set_bubbles(true);
        let event = web_sys::PointerEvent::new_with_event_init_dict("pointerdown", &init)
            .expect("event should construct");
        let _ = target.dispatch_event(&event);
    }

    #[wasm_bindgen_test]
    fn test_subscription_reports_inside_and_outside_then_detaches() {
        let doc = document();
        let body = doc.body().expect("document should have a body");

        let boundary = doc.create_element("div").expect("div");
        boundary.set_id(&menu_dom_id("t1"));
        let inner = doc.create_element("span").expect("span");
        boundary.append_child(&inner).expect("append");
        let outside = doc.create_element("p").expect("p");
        body.append_child(&boundary).expect("append");
        body.append_child(&outside).expect("append");

        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = seen.clone();
        let mut sub = OutsideClickSubscription::attach(menu_dom_id("t1"), move |inside| {
            sink.borrow_mut().push(inside)
        });

        pointer_down_on(&inner);
        pointer_down_on(&outside);
        assert_eq!(*seen.borrow(), vec![true, false]);

        sub.detach();
        sub.detach();
        pointer_down_on(&outside);
        assert_eq!(seen.borrow().len(), 2);

        boundary.remove();
        outside.remove();
    }
}
