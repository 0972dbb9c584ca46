use crate::citations::Citation;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.5;
pub const ZOOM_STEP: f32 = 0.2;

/// What `jump_to` asks the owning view to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum JumpAction {
    /// Same document: just navigate (the page move already happened).
    Navigate,
    /// Different document: fetch and load `url`, then show `target_page`.
    Load { url: String, target_page: u32 },
}

/// Transient state of the document preview surface: current page, zoom,
/// known page count and the citation that brought the user here. Owned by
/// the viewer entity and reset whenever the displayed document url changes.
#[derive(Debug, Clone)]
pub struct ViewerState {
    document_url: Option<String>,
    current_page: u32,
    scale: f32,
    total_pages: u32,
    loaded: bool,
    failed: bool,
    selected_citation: Option<Citation>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            document_url: None,
            current_page: 1,
            scale: 1.0,
            total_pages: 0,
            loaded: false,
            failed: false,
            selected_citation: None,
        }
    }

    pub fn document_url(&self) -> Option<&str> {
        self.document_url.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn selected_citation(&self) -> Option<&Citation> {
        self.selected_citation.as_ref()
    }

    /// Re-arms the surface for a new document. The page count is unknown
    /// until the render engine reports back; `target_page` is where the view
    /// lands once it does.
    pub fn begin_load(&mut self, url: String, target_page: u32) {
        self.document_url = Some(url);
        self.current_page = target_page.max(1);
        self.scale = 1.0;
        self.total_pages = 0;
        self.loaded = false;
        self.failed = false;
    }

    /// Completes a load: records the page count and clamps the requested
    /// target page into range. A document with no pages cannot be shown, so a
    /// zero count is a load failure rather than a loaded-but-empty state.
    pub fn complete_load(&mut self, total_pages: u32) {
        if total_pages == 0 {
            self.fail_load();
            return;
        }
        self.total_pages = total_pages;
        self.loaded = true;
        self.failed = false;
        self.current_page = self.current_page.clamp(1, total_pages);
    }

    /// The render engine could not open the document. Recoverable: a later
    /// `begin_load` with a different url starts fresh.
    pub fn fail_load(&mut self) {
        self.loaded = false;
        self.failed = true;
        self.total_pages = 0;
    }

    /// Clamps `page` to `[1, total_pages]`. A no-op before the page count is
    /// known; never an error.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if self.total_pages == 0 {
            return false;
        }
        let clamped = page.clamp(1, self.total_pages);
        if clamped == self.current_page {
            return false;
        }
        self.current_page = clamped;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1).max(1))
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Selects `citation` and either navigates within the current document or
    /// asks the caller to load the citation's document first.
    pub fn jump_to(&mut self, citation: Citation) -> JumpAction {
        let same_document = self
            .document_url
            .as_deref()
            .is_some_and(|url| url == citation.document_url);

        let action = if same_document {
            self.go_to_page(citation.page_number);
            JumpAction::Navigate
        } else {
            let url = citation.document_url.clone();
            let target_page = citation.page_number.max(1);
            self.begin_load(url.clone(), target_page);
            JumpAction::Load { url, target_page }
        };

        self.selected_citation = Some(citation);
        action
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citations::BoundingBox;

    fn citation(url: &str, page_number: u32) -> Citation {
        Citation {
            id: format!("cite-{url}-{page_number}"),
            document_id: "1".to_string(),
            document_name: "doc.pdf".to_string(),
            document_url: url.to_string(),
            page_number,
            text: String::new(),
            bounding_boxes: vec![BoundingBox {
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
            }],
        }
    }

    #[test]
    fn starts_unloaded() {
        let state = ViewerState::new();
        assert_eq!(state.document_url(), None);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.is_loaded());
        assert!(!state.is_failed());
    }

    #[test]
    fn begin_load_resets_page_scale_and_count() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(10);
        state.go_to_page(7);
        state.zoom_in();

        state.begin_load("/document/2/file".into(), 1);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.is_loaded());
    }

    #[test]
    fn complete_load_clamps_requested_target_page() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 12);
        state.complete_load(5);
        assert_eq!(state.current_page(), 5);
        assert!(state.is_loaded());
    }

    #[test]
    fn go_to_page_clamps_and_ignores_unloaded_state() {
        let mut state = ViewerState::new();
        assert!(!state.go_to_page(3));
        assert_eq!(state.current_page(), 1);

        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(4);
        assert!(state.go_to_page(9));
        assert_eq!(state.current_page(), 4);
        assert!(state.go_to_page(0));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn go_to_page_is_idempotent() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(8);

        assert!(state.go_to_page(3));
        let after_first = state.current_page();
        assert!(!state.go_to_page(3));
        assert_eq!(state.current_page(), after_first);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut state = ViewerState::new();
        for _ in 0..40 {
            state.zoom_in();
        }
        assert_eq!(state.scale(), ZOOM_MAX);

        for _ in 0..40 {
            state.zoom_out();
        }
        assert_eq!(state.scale(), ZOOM_MIN);
    }

    #[test]
    fn jump_within_current_document_navigates() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(6);

        let action = state.jump_to(citation("/document/1/file", 3));
        assert_eq!(action, JumpAction::Navigate);
        assert_eq!(state.current_page(), 3);
        assert!(state.selected_citation().is_some());
    }

    #[test]
    fn jump_to_other_document_requests_reload() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(6);

        let action = state.jump_to(citation("/document/9/file", 3));
        assert_eq!(
            action,
            JumpAction::Load {
                url: "/document/9/file".into(),
                target_page: 3,
            }
        );
        assert_eq!(state.document_url(), Some("/document/9/file"));
        assert_eq!(state.current_page(), 3);
        assert!(!state.is_loaded());
    }

    #[test]
    fn zero_page_document_fails_the_load() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.complete_load(0);
        assert!(state.is_failed());
        assert!(!state.is_loaded());
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn failed_load_is_recoverable() {
        let mut state = ViewerState::new();
        state.begin_load("/document/1/file".into(), 1);
        state.fail_load();
        assert!(state.is_failed());
        assert!(!state.is_loaded());

        state.begin_load("/document/2/file".into(), 1);
        assert!(!state.is_failed());
        state.complete_load(2);
        assert!(state.is_loaded());
    }
}
