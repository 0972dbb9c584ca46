impl Documind {
    fn render_home(&self, cx: &mut Context<Self>) -> AnyElement {
        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_3()
            .child(
                div()
                    .text_2xl()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child("Documind"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Chat with your documents and jump straight to the cited sources."),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .pt_2()
                    .child(
                        Button::new("home-upload")
                            .outline()
                            .label("Upload Files")
                            .icon(Icon::new(crate::icons::IconName::FileUp))
                            .on_click(cx.listener(|this, _, _, cx| this.show_files(cx))),
                    )
                    .child(
                        Button::new("home-new-chat")
                            .primary()
                            .label("New Chat")
                            .icon(Icon::new(crate::icons::IconName::PencilLine))
                            .on_click(cx.listener(|this, _, _, cx| this.show_new_chat(cx))),
                    ),
            )
            .when_some(self.status.clone(), |this, status| {
                this.child(
                    div()
                        .pt_2()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child(status),
                )
            })
            .into_any_element()
    }

    fn render_new_chat(&self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let document_rows: Vec<_> = self
            .documents
            .iter()
            .enumerate()
            .map(|(ix, document)| {
                let id = document.id;
                let selected = self.selected_document_ids.contains(&id);
                div()
                    .id(("new-chat-document", ix))
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .border_1()
                    .border_color(cx.theme().border)
                    .when(selected, |this| this.border_color(cx.theme().primary))
                    .cursor_pointer()
                    .child(Checkbox::new(("new-chat-document-check", ix)).checked(selected))
                    .child(
                        Icon::new(crate::icons::IconName::File)
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .text_sm()
                            .text_color(cx.theme().foreground)
                            .truncate()
                            .child(SharedString::from(document.filename.clone())),
                    )
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.toggle_document_selection(id, cx);
                    }))
                    .into_any_element()
            })
            .collect();

        div()
            .v_flex()
            .size_full()
            .child(
                div()
                    .v_flex()
                    .flex_1()
                    .min_h_0()
                    .p_4()
                    .gap_2()
                    .child(
                        div()
                            .text_lg()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child("New chat"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child("Pick the documents this conversation can search, then ask your first question."),
                    )
                    .when(self.documents_loading && self.documents.is_empty(), |this| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child("Loading documents..."),
                        )
                    })
                    .when(!self.documents_loading && self.documents.is_empty(), |this| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child("No documents uploaded yet. Upload a file first."),
                        )
                    })
                    .child(
                        div()
                            .id("new-chat-document-list")
                            .flex_1()
                            .min_h_0()
                            .overflow_y_scroll()
                            .v_flex()
                            .gap_1()
                            .children(document_rows),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!(
                                "{} document(s) selected",
                                self.selected_document_ids.len()
                            )),
                    ),
            )
            .child(self.render_chat_input(window, cx))
            .into_any_element()
    }

    fn render_conversation(
        &self,
        id: i64,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let message_rows: Vec<_> = self
            .messages
            .iter()
            .enumerate()
            .map(|(ix, message)| self.render_message(ix, message, window, cx))
            .collect();

        div()
            .v_flex()
            .size_full()
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .truncate()
                    .child(self.conversation_title(id)),
            )
            .child(
                div().flex_1().min_h_0().relative().child(
                    div()
                        .id("message-list")
                        .size_full()
                        .overflow_y_scroll()
                        .track_scroll(&self.message_list_scroll)
                        .v_flex()
                        .gap_4()
                        .p_4()
                        .when(self.conversation_loading && self.messages.is_empty(), |this| {
                            this.child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child("Loading conversation..."),
                            )
                        })
                        .children(message_rows)
                        .when(self.sending, |this| {
                            this.child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(
                                        Icon::new(crate::icons::IconName::LoaderCircle)
                                            .text_color(cx.theme().muted_foreground),
                                    )
                                    .child("Thinking..."),
                            )
                        }),
                )
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .child(
                            Scrollbar::vertical(&self.message_list_scroll)
                                .scrollbar_show(ScrollbarShow::Always),
                        ),
                ),
            )
            .when_some(self.status.clone(), |this, status| {
                this.child(
                    div()
                        .px_4()
                        .py_1()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child(status),
                )
            })
            .child(self.render_chat_input(window, cx))
            .into_any_element()
    }

    fn render_message(
        &self,
        message_ix: usize,
        message: &MessageItem,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let is_user = message.role == MessageRole::User;
        let avatar_icon = if is_user {
            crate::icons::IconName::User
        } else {
            crate::icons::IconName::Bot
        };

        let avatar = div()
            .size(px(28.))
            .flex_shrink_0()
            .rounded_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(cx.theme().secondary)
            .child(Icon::new(avatar_icon).text_color(cx.theme().muted_foreground));

        let body = if is_user {
            div()
                .px_3()
                .py_2()
                .rounded_lg()
                .bg(cx.theme().primary)
                .text_sm()
                .text_color(cx.theme().primary_foreground)
                .child(SharedString::from(message.content.clone()))
                .into_any_element()
        } else {
            self.render_assistant_content(message_ix, message, window, cx)
        };

        div()
            .w_full()
            .flex()
            .gap_2()
            .when(is_user, |this| this.flex_row_reverse())
            .child(avatar)
            .child(
                div()
                    .v_flex()
                    .gap_0p5()
                    .max_w(relative(0.78))
                    .when(is_user, |this| this.items_end())
                    .child(body)
                    .when(!message.timestamp.is_empty(), |this| {
                        this.child(
                            div()
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                                .child(message.timestamp.clone()),
                        )
                    }),
            )
            .into_any_element()
    }

    /// Assistant text with the `[n]` markers turned into click targets. While
    /// the typing effect runs, only the revealed prefix is parsed, so a marker
    /// stays literal until its closing bracket has appeared. Replies without
    /// markers render as markdown; replies with markers fall back to styled
    /// plain text, since markdown rendering has no inline click targets.
    fn render_assistant_content(
        &self,
        message_ix: usize,
        message: &MessageItem,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let visible: &str = match &self.typing {
            Some(typing) if typing.message_id() == message.id => typing.visible(&message.content),
            _ => &message.content,
        };

        let segments = citations::parse_message_segments(visible, &message.citations);
        let marker_ranges = citations::marker_ranges(&segments);

        let content = if marker_ranges.is_empty() {
            let markdown_id: SharedString = format!("assistant-markdown-{message_ix}").into();
            div()
                .text_sm()
                .text_color(cx.theme().foreground)
                .child(
                    TextView::markdown(
                        markdown_id,
                        SharedString::from(visible.to_string()),
                        window,
                        cx,
                    )
                    .selectable(true)
                    .scrollable(false),
                )
                .into_any_element()
        } else {
            let mut text_style = window.text_style();
            text_style.color = cx.theme().foreground;
            let highlights: Vec<_> = marker_ranges
                .iter()
                .map(|(range, _)| {
                    (
                        range.clone(),
                        HighlightStyle {
                            color: Some(cx.theme().primary),
                            ..Default::default()
                        },
                    )
                })
                .collect();
            let click_ranges: Vec<_> = marker_ranges
                .iter()
                .map(|(range, _)| range.clone())
                .collect();
            let citation_indices: Vec<_> = marker_ranges.iter().map(|(_, ix)| *ix).collect();
            let entity = cx.entity();

            let styled = StyledText::new(SharedString::from(visible.to_string()))
                .with_default_highlights(&text_style, highlights);

            div()
                .text_sm()
                .child(
                    InteractiveText::new(("assistant-message", message_ix), styled).on_click(
                        click_ranges,
                        move |range_ix, _, cx| {
                            let Some(citation_ix) = citation_indices.get(range_ix).copied() else {
                                return;
                            };
                            entity.update(cx, |this, cx| {
                                this.on_citation_clicked(message_ix, citation_ix, cx);
                            });
                        },
                    ),
                )
                .into_any_element()
        };

        div()
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(cx.theme().muted)
            .child(content)
            .into_any_element()
    }

    fn render_chat_input(&self, _window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let can_send = self.can_send();

        div()
            .w_full()
            .p_3()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                div()
                    .flex()
                    .items_end()
                    .gap_2()
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .capture_key_down(cx.listener(
                                |this, event: &gpui::KeyDownEvent, window, cx| {
                                    if event.keystroke.key.as_str() == "enter"
                                        && !event.keystroke.modifiers.shift
                                    {
                                        cx.stop_propagation();
                                        this.send_current_message(window, cx);
                                    }
                                },
                            ))
                            .child(Input::new(&self.input_state)),
                    )
                    .child(
                        Button::new("send-message")
                            .primary()
                            .icon(Icon::new(crate::icons::IconName::Send))
                            .disabled(!can_send)
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.send_current_message(window, cx);
                            })),
                    ),
            )
            .into_any_element()
    }
}
