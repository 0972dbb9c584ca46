mod engine;
mod highlight;
mod state;

use crate::api::ApiClient;
use crate::citations::Citation;
use gpui::*;
use gpui_component::scroll::{Scrollbar, ScrollbarShow};
use gpui_component::{button::*, *};
use std::sync::Arc;
use std::time::Duration;

use self::engine::PdfEngine;
use self::highlight::project_highlights;
use self::state::{JumpAction, ViewerState, ZOOM_MAX, ZOOM_MIN};

const HIGHLIGHT_SCROLL_MARGIN: f32 = 48.0;
const HIGHLIGHT_SCROLL_DELAY_MS: u64 = 120;

pub enum PdfViewerEvent {
    CloseRequested,
}

/// The source preview pane. Shows one page of the document the selected
/// citation points at, with the citation's bounding boxes drawn on top.
/// Documents are fetched from the backend and rendered off the main thread;
/// epoch counters drop results that arrive after the user moved on.
pub struct PdfViewer {
    api: Arc<ApiClient>,
    engine: Option<Arc<PdfEngine>>,
    state: ViewerState,
    citations: Vec<Citation>,
    document_name: SharedString,
    document_bytes: Option<Arc<Vec<u8>>>,
    page_image: Option<Arc<gpui::Image>>,
    page_size: Option<(f32, f32)>,
    loading: bool,
    error: Option<SharedString>,
    load_epoch: u64,
    render_epoch: u64,
    scroll_epoch: u64,
    page_scroll: ScrollHandle,
}

impl PdfViewer {
    pub fn new(api: Arc<ApiClient>, _cx: &mut Context<Self>) -> Self {
        let engine = match PdfEngine::new() {
            Ok(engine) => Some(Arc::new(engine)),
            Err(err) => {
                crate::debug_log!("[viewer] pdfium binding failed: {}", err);
                None
            }
        };

        Self {
            api,
            engine,
            state: ViewerState::new(),
            citations: Vec::new(),
            document_name: SharedString::default(),
            document_bytes: None,
            page_image: None,
            page_size: None,
            loading: false,
            error: None,
            load_epoch: 0,
            render_epoch: 0,
            scroll_epoch: 0,
            page_scroll: ScrollHandle::new(),
        }
    }

    /// Entry point for a citation click: select it, then navigate or load the
    /// cited document as needed. `conversation_citations` is the full set the
    /// conversation produced; every one that lands on the displayed page is
    /// highlighted, not just the clicked one.
    pub fn show_citation(
        &mut self,
        citation: Citation,
        conversation_citations: Vec<Citation>,
        cx: &mut Context<Self>,
    ) {
        self.citations = conversation_citations;
        self.document_name = citation.document_name.clone().into();
        match self.state.jump_to(citation) {
            JumpAction::Navigate => {
                self.request_page_render(cx);
                self.schedule_scroll_to_highlight(cx);
            }
            JumpAction::Load { url, .. } => self.start_document_load(url, cx),
        }
        cx.notify();
    }
}

include!("loading.rs");
include!("display.rs");

impl EventEmitter<PdfViewerEvent> for PdfViewer {}
