impl PdfViewer {
    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let page_label: SharedString = if self.state.is_loaded() {
            format!(
                "{} / {}",
                self.state.current_page(),
                self.state.total_pages()
            )
            .into()
        } else {
            "- / -".into()
        };
        let zoom_label: SharedString = format!("{:.0}%", self.state.scale() * 100.0).into();
        let at_first = !self.state.is_loaded() || self.state.current_page() <= 1;
        let at_last =
            !self.state.is_loaded() || self.state.current_page() >= self.state.total_pages();

        div()
            .w_full()
            .h(px(40.))
            .flex_shrink_0()
            .flex()
            .items_center()
            .gap_1()
            .px_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().sidebar)
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .truncate()
                    .child(self.document_name.clone()),
            )
            .child(
                Button::new("viewer-prev-page")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::ChevronLeft)
                            .text_color(cx.theme().foreground),
                    )
                    .disabled(at_first)
                    .on_click(cx.listener(|this, _, _, cx| this.prev_page(cx))),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(page_label),
            )
            .child(
                Button::new("viewer-next-page")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::ChevronRight)
                            .text_color(cx.theme().foreground),
                    )
                    .disabled(at_last)
                    .on_click(cx.listener(|this, _, _, cx| this.next_page(cx))),
            )
            .child(
                Button::new("viewer-zoom-out")
                    .ghost()
                    .small()
                    .icon(Icon::new(crate::icons::IconName::Minus).text_color(cx.theme().foreground))
                    .disabled(!self.state.is_loaded() || self.state.scale() <= ZOOM_MIN)
                    .on_click(cx.listener(|this, _, _, cx| this.zoom_out(cx))),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(zoom_label),
            )
            .child(
                Button::new("viewer-zoom-in")
                    .ghost()
                    .small()
                    .icon(Icon::new(crate::icons::IconName::Plus).text_color(cx.theme().foreground))
                    .disabled(!self.state.is_loaded() || self.state.scale() >= ZOOM_MAX)
                    .on_click(cx.listener(|this, _, _, cx| this.zoom_in(cx))),
            )
            .child(
                Button::new("viewer-close")
                    .ghost()
                    .small()
                    .icon(Icon::new(crate::icons::IconName::X).text_color(cx.theme().foreground))
                    .on_click(cx.listener(|_, _, _, cx| {
                        cx.emit(PdfViewerEvent::CloseRequested);
                    })),
            )
    }

    fn render_status(&self, message: SharedString, cx: &mut Context<Self>) -> AnyElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .child(message)
            .into_any_element()
    }

    fn render_page(&self, cx: &mut Context<Self>) -> AnyElement {
        let (Some(image), Some((page_width, page_height))) =
            (self.page_image.clone(), self.page_size)
        else {
            return self.render_status("Rendering page...".into(), cx);
        };

        let highlights = project_highlights(
            &self.citations,
            self.state.document_url(),
            self.state.current_page(),
            self.state.scale(),
        );

        div()
            .relative()
            .size_full()
            .overflow_hidden()
            .child(
                div()
                    .id("viewer-page-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .track_scroll(&self.page_scroll)
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .justify_center()
                            .py_4()
                            .child(
                                div()
                                    .relative()
                                    .w(px(page_width))
                                    .h(px(page_height))
                                    .flex_shrink_0()
                                    .bg(gpui::white())
                                    .shadow_md()
                                    .child(img(image).size_full().object_fit(ObjectFit::Contain))
                                    .children(highlights.into_iter().enumerate().map(
                                        |(ix, rect)| {
                                            div()
                                                .id(("viewer-highlight", ix))
                                                .absolute()
                                                .left(px(rect.x))
                                                .top(px(rect.y))
                                                .w(px(rect.width))
                                                .h(px(rect.height))
                                                .bg(gpui::rgb(0x3390FF))
                                                .opacity(0.3)
                                        },
                                    )),
                            ),
                    ),
            )
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .right_0()
                    .bottom_0()
                    .child(
                        Scrollbar::vertical(&self.page_scroll).scrollbar_show(ScrollbarShow::Always),
                    ),
            )
            .into_any_element()
    }
}

impl Render for PdfViewer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body = if let Some(error) = self.error.clone() {
            self.render_status(error, cx)
        } else if self.loading {
            self.render_status("Loading document...".into(), cx)
        } else if self.state.is_failed() {
            self.render_status("Failed to load the cited document".into(), cx)
        } else if self.state.is_loaded() {
            self.render_page(cx)
        } else {
            self.render_status("Select a citation to preview its source".into(), cx)
        };

        div()
            .v_flex()
            .size_full()
            .bg(cx.theme().muted)
            .border_l_1()
            .border_color(cx.theme().border)
            .child(self.render_toolbar(cx))
            .child(div().flex_1().min_h_0().child(body))
    }
}
