impl Documind {
    fn render_document_row(
        &self,
        ix: usize,
        document: &DocumentInfo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let id = document.id;
        let uploaded_label: SharedString = document
            .uploaded_at
            .get(..10)
            .map(|date| date.to_string().into())
            .unwrap_or_default();

        div()
            .id(("document-row", ix))
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(Icon::new(crate::icons::IconName::File).text_color(cx.theme().muted_foreground))
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .truncate()
                    .child(SharedString::from(document.filename.clone())),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(uploaded_label),
            )
            .child(
                Button::new(("document-delete", ix))
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::Trash)
                            .text_color(cx.theme().muted_foreground),
                    )
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.request_delete_document(id, cx);
                    })),
            )
            .into_any_element()
    }

    fn render_delete_document_dialog(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let id = self.delete_document_target?;
        let filename = self
            .documents
            .iter()
            .find(|document| document.id == id)
            .map(|document| document.filename.clone())
            .unwrap_or_else(|| "this document".to_string());

        Some(
            div()
                .id("delete-document-overlay")
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
                    cx.listener(|this, _, _, cx| this.cancel_delete_document(cx)),
                )
                .child(
                    div()
                        .id("delete-document-dialog")
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
                                .child("Delete file"),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!(
                                    "\"{filename}\" will be removed. Conversations that cite it lose their source preview."
                                )),
                        )
                        .child(
                            div()
                                .flex()
                                .justify_end()
                                .gap_2()
                                .child(
                                    Button::new("delete-document-cancel")
                                        .ghost()
                                        .small()
                                        .label("Cancel")
                                        .on_click(cx.listener(|this, _, _, cx| {
                                            this.cancel_delete_document(cx);
                                        })),
                                )
                                .child(
                                    Button::new("delete-document-confirm")
                                        .danger()
                                        .small()
                                        .label("Delete")
                                        .on_click(cx.listener(|this, _, _, cx| {
                                            this.confirm_delete_document(cx);
                                        })),
                                ),
                        ),
                )
                .into_any_element(),
        )
    }

    fn render_files(&self, cx: &mut Context<Self>) -> AnyElement {
        let document_rows: Vec<_> = self
            .documents
            .iter()
            .enumerate()
            .map(|(ix, document)| self.render_document_row(ix, document, cx))
            .collect();

        div()
            .v_flex()
            .size_full()
            .p_4()
            .gap_2()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .child(
                        div()
                            .flex_1()
                            .text_lg()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child("Your Files"),
                    )
                    .child(
                        Button::new("upload-documents")
                            .primary()
                            .small()
                            .label(if self.uploading { "Uploading..." } else { "Upload" })
                            .icon(Icon::new(crate::icons::IconName::FileUp))
                            .disabled(self.uploading)
                            .on_click(cx.listener(|this, _, _, cx| this.open_upload_dialog(cx))),
                    ),
            )
            .when_some(self.status.clone(), |this, status| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child(status),
                )
            })
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
                        .child("Nothing here yet. Upload a PDF to start asking questions about it."),
                )
            })
            .child(
                div()
                    .id("document-list")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .v_flex()
                    .gap_1()
                    .children(document_rows),
            )
            .into_any_element()
    }
}
