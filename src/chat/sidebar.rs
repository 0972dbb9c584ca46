impl Documind {
    fn render_nav_item(
        &self,
        id: &'static str,
        icon: crate::icons::IconName,
        label: &'static str,
        active: bool,
        on_click: impl Fn(&mut Self, &mut Context<Self>) + 'static,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .px_2()
            .py_1p5()
            .rounded_md()
            .cursor_pointer()
            .text_sm()
            .text_color(cx.theme().foreground)
            .when(active, |this| this.bg(cx.theme().accent))
            .when(!active, |this| this.hover(|this| this.bg(cx.theme().accent)))
            .child(Icon::new(icon).text_color(cx.theme().muted_foreground))
            .child(label)
            .on_click(cx.listener(move |this, _, _, cx| on_click(this, cx)))
    }

    fn render_conversation_item(
        &self,
        conversation: &Conversation,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let id = conversation.id;
        let active = self.active_view == ActiveView::Conversation(id);

        div()
            .id(("conversation", id as usize))
            .w_full()
            .flex()
            .items_center()
            .gap_1()
            .px_2()
            .py_1p5()
            .rounded_md()
            .cursor_pointer()
            .when(active, |this| this.bg(cx.theme().accent))
            .when(!active, |this| this.hover(|this| this.bg(cx.theme().accent)))
            .child(
                Icon::new(crate::icons::IconName::MessageSquare)
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .truncate()
                    .child(SharedString::from(conversation.title.clone())),
            )
            .child(
                Button::new(("conversation-delete", id as usize))
                    .ghost()
                    .xsmall()
                    .icon(
                        Icon::new(crate::icons::IconName::Trash)
                            .text_color(cx.theme().muted_foreground),
                    )
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.request_delete_conversation(id, cx);
                    })),
            )
            .on_click(cx.listener(move |this, _, _, cx| {
                this.open_conversation(id, cx);
            }))
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let conversation_items: Vec<_> = self
            .conversations
            .iter()
            .map(|conversation| {
                self.render_conversation_item(conversation, cx)
                    .into_any_element()
            })
            .collect();

        div()
            .v_flex()
            .h_full()
            .w(px(240.))
            .flex_shrink_0()
            .bg(cx.theme().sidebar)
            .border_r_1()
            .border_color(cx.theme().border)
            .p_2()
            .gap_1()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_2()
                    .py_2()
                    .text_color(cx.theme().foreground)
                    .font_semibold()
                    .child(
                        Icon::new(crate::icons::IconName::MessageSquare)
                            .text_color(cx.theme().primary),
                    )
                    .child("Documind"),
            )
            .child(self.render_nav_item(
                "nav-home",
                crate::icons::IconName::Home,
                "Home",
                self.active_view == ActiveView::Home,
                |this, cx| this.show_home(cx),
                cx,
            ))
            .child(self.render_nav_item(
                "nav-files",
                crate::icons::IconName::FolderOpen,
                "Upload Files",
                self.active_view == ActiveView::Files,
                |this, cx| this.show_files(cx),
                cx,
            ))
            .child(self.render_nav_item(
                "nav-new-chat",
                crate::icons::IconName::PencilLine,
                "New Chat",
                self.active_view == ActiveView::NewChat,
                |this, cx| this.show_new_chat(cx),
                cx,
            ))
            .child(
                div()
                    .px_2()
                    .pt_3()
                    .pb_1()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("Conversations"),
            )
            .child(
                div().flex_1().min_h_0().relative().child(
                    div()
                        .id("conversation-list")
                        .size_full()
                        .overflow_y_scroll()
                        .track_scroll(&self.conversation_list_scroll)
                        .v_flex()
                        .gap_0p5()
                        .when(
                            self.conversations_loading && self.conversations.is_empty(),
                            |this| {
                                this.child(
                                    div()
                                        .px_2()
                                        .py_1()
                                        .text_xs()
                                        .text_color(cx.theme().muted_foreground)
                                        .child("Loading..."),
                                )
                            },
                        )
                        .when(
                            !self.conversations_loading && self.conversations.is_empty(),
                            |this| {
                                this.child(
                                    div()
                                        .px_2()
                                        .py_1()
                                        .text_xs()
                                        .text_color(cx.theme().muted_foreground)
                                        .child("No conversations yet"),
                                )
                            },
                        )
                        .children(conversation_items),
                )
                .child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .bottom_0()
                        .child(
                            Scrollbar::vertical(&self.conversation_list_scroll)
                                .scrollbar_show(ScrollbarShow::Always),
                        ),
                ),
            )
    }

    fn render_delete_conversation_dialog(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let id = self.delete_conversation_target?;
        let title = self.conversation_title(id);

        Some(
            div()
                .id("delete-conversation-overlay")
                .absolute()
                .top_0()
                .left_0()
                .right_0()
                .bottom_0()
                .flex()
                .items_center()
                .justify_center()
                .bg(gpui::black().opacity(0.4))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| this.cancel_delete_conversation(cx)),
                )
                .child(
                    div()
                        .id("delete-conversation-dialog")
                        .w(px(360.))
                        .v_flex()
                        .gap_3()
                        .p_4()
                        .rounded_lg()
                        .shadow_lg()
                        .bg(cx.theme().background)
                        .border_1()
                        .border_color(cx.theme().border)
                        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                        .child(
                            div()
                                .font_semibold()
                                .text_color(cx.theme().foreground)
                                .child("Delete conversation"),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!("\"{title}\" and its messages will be removed.")),
                        )
                        .child(
                            div()
                                .flex()
                                .justify_end()
                                .gap_2()
                                .child(
                                    Button::new("delete-conversation-cancel")
                                        .ghost()
                                        .small()
                                        .label("Cancel")
                                        .on_click(cx.listener(|this, _, _, cx| {
                                            this.cancel_delete_conversation(cx);
                                        })),
                                )
                                .child(
                                    Button::new("delete-conversation-confirm")
                                        .danger()
                                        .small()
                                        .label("Delete")
                                        .on_click(cx.listener(|this, _, _, cx| {
                                            this.confirm_delete_conversation(cx);
                                        })),
                                ),
                        ),
                )
                .into_any_element(),
        )
    }
}
