use crate::api::{ApiClient, Conversation, ConversationDetail, DocumentInfo, MessageRole};
use crate::citations::{self, Citation};
use crate::pdf_viewer::{PdfViewer, PdfViewerEvent};
use crate::typing::{TYPING_INTERVAL_MS, TypingEffect};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::checkbox::Checkbox;
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::scroll::{Scrollbar, ScrollbarShow};
use gpui_component::text::TextView;
use gpui_component::{button::*, *};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

include!("types.rs");

/// Root view of the document chat window: sidebar navigation, the active
/// page (home, files, new chat, a conversation) and the source preview pane.
pub struct Documind {
    focus_handle: FocusHandle,
    api: Arc<ApiClient>,
    active_view: ActiveView,
    conversations: Vec<Conversation>,
    conversations_loading: bool,
    conversations_epoch: u64,
    documents: Vec<DocumentInfo>,
    documents_loading: bool,
    documents_epoch: u64,
    uploading: bool,
    selected_document_ids: Vec<i64>,
    messages: Vec<MessageItem>,
    conversation_loading: bool,
    conversation_epoch: u64,
    sending: bool,
    pending_message_seq: u64,
    typing: Option<TypingEffect>,
    typing_epoch: u64,
    status: Option<SharedString>,
    input_state: Entity<InputState>,
    input_text: String,
    _input_subscription: Subscription,
    viewer: Entity<PdfViewer>,
    viewer_open: bool,
    _viewer_subscription: Subscription,
    delete_conversation_target: Option<i64>,
    delete_document_target: Option<i64>,
    window_size_store: Option<sled::Tree>,
    last_window_size: Option<(f32, f32)>,
    message_list_scroll: ScrollHandle,
    conversation_list_scroll: ScrollHandle,
    needs_initial_focus: bool,
}

impl Documind {
    pub fn new(api: Arc<ApiClient>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Ask a question about your documents...")
                .multi_line(true)
                .rows(3)
        });
        let input_subscription =
            cx.subscribe(&input_state, |this, input, event: &InputEvent, cx| {
                if !matches!(event, InputEvent::Change) {
                    return;
                }
                let next_text = input.read(cx).value().to_string();
                if this.input_text != next_text {
                    this.input_text = next_text;
                    cx.notify();
                }
            });

        let viewer = cx.new(|cx| PdfViewer::new(api.clone(), cx));
        let viewer_subscription =
            cx.subscribe(&viewer, |this, _, event: &PdfViewerEvent, cx| match event {
                PdfViewerEvent::CloseRequested => {
                    this.viewer_open = false;
                    cx.notify();
                }
            });

        let mut this = Self {
            focus_handle: cx.focus_handle(),
            api,
            active_view: ActiveView::Home,
            conversations: Vec::new(),
            conversations_loading: false,
            conversations_epoch: 0,
            documents: Vec::new(),
            documents_loading: false,
            documents_epoch: 0,
            uploading: false,
            selected_document_ids: Vec::new(),
            messages: Vec::new(),
            conversation_loading: false,
            conversation_epoch: 0,
            sending: false,
            pending_message_seq: 0,
            typing: None,
            typing_epoch: 0,
            status: None,
            input_state,
            input_text: String::new(),
            _input_subscription: input_subscription,
            viewer,
            viewer_open: false,
            _viewer_subscription: viewer_subscription,
            delete_conversation_target: None,
            delete_document_target: None,
            window_size_store: crate::store::open_window_size_tree(),
            last_window_size: None,
            message_list_scroll: ScrollHandle::new(),
            conversation_list_scroll: ScrollHandle::new(),
            needs_initial_focus: true,
        };

        this.refresh_conversations(cx);
        this.refresh_documents(cx);
        this
    }

    fn save_window_size(&self, width: f32, height: f32) {
        if let Some(store) = &self.window_size_store {
            crate::store::save_window_size(store, width, height);
        }
    }
}

include!("data.rs");
include!("actions.rs");
include!("sidebar.rs");
include!("conversation.rs");
include!("documents.rs");
include!("title_bar.rs");

impl Focusable for Documind {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Documind {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            cx.focus_self(window);
        }

        window.set_rem_size(cx.theme().font_size);

        let bounds = window.bounds();
        let current_size = (f32::from(bounds.size.width), f32::from(bounds.size.height));
        if self.last_window_size != Some(current_size) {
            self.last_window_size = Some(current_size);
            if !window.is_maximized() && !window.is_fullscreen() {
                self.save_window_size(current_size.0, current_size.1);
            }
        }

        let main_view = match self.active_view {
            ActiveView::Home => self.render_home(cx),
            ActiveView::Files => self.render_files(cx),
            ActiveView::NewChat => self.render_new_chat(window, cx),
            ActiveView::Conversation(id) => self.render_conversation(id, window, cx),
        };
        let delete_dialog = self
            .render_delete_conversation_dialog(cx)
            .or_else(|| self.render_delete_document_dialog(cx));

        div()
            .size_full()
            .on_action(cx.listener(|_, _: &crate::EnableLoggingMenu, _, cx| {
                if crate::logger::enable_file_logging() {
                    crate::configure_app_menus(cx);
                }
            }))
            .on_action(cx.listener(|_, _: &crate::DisableLoggingMenu, _, cx| {
                crate::logger::disable_file_logging();
                crate::configure_app_menus(cx);
            }))
            .on_action(cx.listener(|_, _: &crate::OpenLogsMenu, _, _| {
                crate::logger::open_logs_directory();
            }))
            .child(
                div()
                    .v_flex()
                    .size_full()
                    .bg(cx.theme().background)
                    .relative()
                    .track_focus(&self.focus_handle)
                    .child(self.render_title_bar(window, cx))
                    .child(
                        div()
                            .flex_1()
                            .min_h_0()
                            .w_full()
                            .flex()
                            .overflow_hidden()
                            .child(self.render_sidebar(cx))
                            .child(div().flex_1().min_w_0().h_full().child(main_view))
                            .when(self.viewer_open, |this| {
                                this.child(
                                    div()
                                        .flex_1()
                                        .min_w_0()
                                        .h_full()
                                        .child(self.viewer.clone()),
                                )
                            }),
                    )
                    .when_some(delete_dialog, |this, dialog| this.child(dialog)),
            )
    }
}
