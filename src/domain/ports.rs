/// A node whose markup can be replaced wholesale.
pub trait Element {
    fn set_inner_html(&mut self, html: &str);
}

/// The page the banner helpers write into. Helpers depend on this trait, not
/// on a concrete page, so they run the same against a browser binding or the
/// in-memory document.
pub trait Document {
    type Element: Element;

    fn element_by_id(&mut self, id: &str) -> Option<&mut Self::Element>;
}
