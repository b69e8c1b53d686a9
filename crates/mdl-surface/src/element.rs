//! In-memory element tree
//!
//! Mirrors the slice of the DOM the components touch: class list,
//! attributes, text content, the `checked`/`disabled`/focus flags of
//! inputs, children and event listeners.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::surface::{EventKind, Listener, Surface, SurfaceRef};

#[derive(Default)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    checked: bool,
    disabled: bool,
    focused: bool,
    children: Vec<Element>,
    listeners: Vec<(EventKind, Listener)>,
}

pub struct Element {
    inner: Arc<RwLock<ElementData>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ElementData {
                tag: tag.into(),
                ..ElementData::default()
            })),
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_checked(self, checked: bool) -> Self {
        self.inner.write().checked = checked;
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.inner.write().disabled = disabled;
        self
    }

    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn append_child(&self, child: Element) {
        self.inner.write().children.push(child);
    }

    pub fn tag(&self) -> String {
        self.inner.read().tag.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.read().classes.clone()
    }

    pub fn children(&self) -> Vec<Element> {
        self.inner.read().children.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.inner.read().focused
    }

    pub fn listener_count(&self) -> usize {
        self.inner.read().listeners.len()
    }

    /// Give the element input focus, firing `focus`
    pub fn focus(&self) {
        let gained = {
            let mut data = self.inner.write();
            !std::mem::replace(&mut data.focused, true)
        };
        if gained {
            self.dispatch(EventKind::Focus);
        }
    }

    pub fn click(&self) {
        self.dispatch(EventKind::Click);
    }

    /// Run every listener registered for `event`.
    ///
    /// Listeners are snapshotted first so they may freely read and mutate
    /// this element, or register further listeners.
    pub fn dispatch(&self, event: EventKind) {
        let listeners: Vec<Listener> = self
            .inner
            .read()
            .listeners
            .iter()
            .filter(|(kind, _)| *kind == event)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    pub fn into_ref(self) -> SurfaceRef {
        Arc::new(self)
    }

    fn walk(&self, visit: &mut dyn FnMut(&Element) -> bool) -> bool {
        for child in self.children() {
            if !visit(&child) || !child.walk(visit) {
                return false;
            }
        }
        true
    }

    fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if predicate(el) {
                found.push(el.clone());
            }
            true
        });
        found
    }

    fn find_first(&self, predicate: impl Fn(&Element) -> bool) -> Option<Element> {
        let mut found = None;
        self.walk(&mut |el| {
            if predicate(el) {
                found = Some(el.clone());
                false
            } else {
                true
            }
        });
        found
    }
}

impl Surface for Element {
    fn add_class(&self, class: &str) {
        let mut data = self.inner.write();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.inner.write().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.read().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .write()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.inner.write().attributes.remove(name);
    }

    fn text(&self) -> String {
        self.inner.read().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.inner.write().text = text.to_string();
    }

    fn is_checked(&self) -> bool {
        self.inner.read().checked
    }

    fn set_checked(&self, checked: bool) {
        self.inner.write().checked = checked;
    }

    fn is_disabled(&self) -> bool {
        self.inner.read().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.inner.write().disabled = disabled;
    }

    fn blur(&self) {
        let lost = std::mem::replace(&mut self.inner.write().focused, false);
        if lost {
            self.dispatch(EventKind::Blur);
        }
    }

    fn query_class(&self, class: &str) -> Option<SurfaceRef> {
        self.find_first(|el| el.has_class(class))
            .map(Element::into_ref)
    }

    fn query_class_all(&self, class: &str) -> Vec<SurfaceRef> {
        self.find_all(|el| el.has_class(class))
            .into_iter()
            .map(Element::into_ref)
            .collect()
    }

    fn query_id(&self, id: &str) -> Option<SurfaceRef> {
        self.find_first(|el| el.attribute("id").as_deref() == Some(id))
            .map(Element::into_ref)
    }

    fn listen(&self, event: EventKind, listener: Listener) {
        self.inner.write().listeners.push((event, listener));
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.read();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("classes", &data.classes)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_class_list() {
        let el = Element::new("div").with_class("a");
        el.add_class("b");
        el.add_class("a");
        assert_eq!(el.classes(), vec!["a", "b"]);

        el.remove_class("a");
        assert!(!el.has_class("a"));
        assert!(el.has_class("b"));

        el.toggle_class("c", true);
        el.toggle_class("b", false);
        assert_eq!(el.classes(), vec!["c"]);
    }

    #[test]
    fn test_queries_in_document_order() {
        let root = Element::new("div")
            .with_child(
                Element::new("span")
                    .with_class("item")
                    .with_text("first")
                    .with_child(Element::new("b").with_class("item").with_text("nested")),
            )
            .with_child(Element::new("span").with_class("item").with_id("last").with_text("last"));

        let items: Vec<String> = root.query_class_all("item").iter().map(|s| s.text()).collect();
        assert_eq!(items, vec!["first", "nested", "last"]);

        assert_eq!(root.query_class("item").unwrap().text(), "first");
        assert_eq!(root.query_id("last").unwrap().text(), "last");
        assert!(root.query_id("missing").is_none());
        assert!(root.query_class("missing").is_none());
    }

    #[test]
    fn test_root_is_not_its_own_descendant() {
        let root = Element::new("div").with_class("item");
        assert!(root.query_class("item").is_none());
    }

    #[test]
    fn test_focus_and_blur_fire_once() {
        let el = Element::new("input");
        let focus_count = Arc::new(AtomicUsize::new(0));
        let blur_count = Arc::new(AtomicUsize::new(0));

        let f = Arc::clone(&focus_count);
        el.listen(EventKind::Focus, Arc::new(move |_: EventKind| {
            f.fetch_add(1, Ordering::SeqCst);
        }));
        let b = Arc::clone(&blur_count);
        el.listen(EventKind::Blur, Arc::new(move |_: EventKind| {
            b.fetch_add(1, Ordering::SeqCst);
        }));

        el.blur();
        assert_eq!(blur_count.load(Ordering::SeqCst), 0);

        el.focus();
        el.focus();
        assert!(el.is_focused());
        assert_eq!(focus_count.load(Ordering::SeqCst), 1);

        el.blur();
        assert!(!el.is_focused());
        assert_eq!(blur_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_mutate_element() {
        let el = Element::new("input");
        let handle = el.clone();
        el.listen(EventKind::Change, Arc::new(move |_: EventKind| {
            handle.toggle_class("seen", true);
        }));

        el.dispatch(EventKind::Change);
        assert!(el.has_class("seen"));
    }

    #[test]
    fn test_event_kind_parse() {
        assert_eq!("MouseUp".parse::<EventKind>().unwrap(), EventKind::MouseUp);
        assert!("hover".parse::<EventKind>().is_err());
    }
}
