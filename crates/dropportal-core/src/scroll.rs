#![forbid(unsafe_code)]

//! Scrollable ancestor discovery.
//!
//! A placement goes stale when any scrolling container between the anchor and
//! the document root scrolls. The host walks its own element tree through
//! [`ScrollContainer`] and subscribes to whatever [`scrollable_ancestors`]
//! returns.

/// An element in the host's tree, viewed only through its scroll metrics.
pub trait ScrollContainer {
    /// Full height of the element's content.
    fn scroll_height(&self) -> f64;

    /// Visible height of the element.
    fn client_height(&self) -> f64;

    /// Parent element, `None` at the root.
    fn parent(&self) -> Option<&Self>;

    /// Whether the content overflows vertically.
    fn is_scrollable(&self) -> bool {
        self.scroll_height() > self.client_height()
    }
}

/// Collect the scrollable ancestors of `node`, nearest first.
///
/// `node` itself is not inspected.
pub fn scrollable_ancestors<T: ScrollContainer>(node: &T) -> Vec<&T> {
    let mut found = Vec::new();
    let mut current = node.parent();
    while let Some(element) = current {
        if element.is_scrollable() {
            found.push(element);
        }
        current = element.parent();
    }
    found
}
