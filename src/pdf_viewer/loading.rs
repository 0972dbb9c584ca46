impl PdfViewer {
    fn start_document_load(&mut self, url: String, cx: &mut Context<Self>) {
        let Some(engine) = self.engine.clone() else {
            self.error = Some("PDF rendering is unavailable (Pdfium not found)".into());
            return;
        };

        self.loading = true;
        self.error = None;
        self.page_image = None;
        self.page_size = None;
        self.document_bytes = None;
        self.load_epoch = self.load_epoch.wrapping_add(1);
        let epoch = self.load_epoch;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let load_result = cx
                .background_executor()
                .spawn(async move {
                    let bytes = api.fetch_document_bytes(&url)?;
                    let page_count = engine.page_count(&bytes)?;
                    anyhow::Ok((bytes, page_count))
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.load_epoch != epoch {
                    return;
                }
                this.loading = false;

                match load_result {
                    Ok((bytes, page_count)) => {
                        this.document_bytes = Some(Arc::new(bytes));
                        this.state.complete_load(page_count);
                        this.request_page_render(cx);
                        this.schedule_scroll_to_highlight(cx);
                    }
                    Err(err) => {
                        crate::debug_log!("[viewer] document load failed: {}", err);
                        this.state.fail_load();
                        this.error = Some("Failed to load the cited document".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn request_page_render(&mut self, cx: &mut Context<Self>) {
        let (Some(engine), Some(bytes)) = (self.engine.clone(), self.document_bytes.clone()) else {
            return;
        };
        if !self.state.is_loaded() {
            return;
        }

        self.render_epoch = self.render_epoch.wrapping_add(1);
        let epoch = self.render_epoch;
        let page_number = self.state.current_page();
        let scale = self.state.scale();

        cx.spawn(async move |view, cx| {
            let render_result = cx
                .background_executor()
                .spawn(async move { engine.render_page(&bytes, page_number, scale) })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.render_epoch != epoch {
                    return;
                }

                match render_result {
                    Ok(page) => {
                        this.page_image = Some(page.image);
                        this.page_size = Some((page.width, page.height));
                        this.error = None;
                    }
                    Err(err) => {
                        crate::debug_log!("[viewer] page render failed: {}", err);
                        this.error = Some("Failed to render the page".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Brings the selected citation's first highlight box into view once the
    /// freshly rendered page has been laid out. Best effort only.
    fn schedule_scroll_to_highlight(&mut self, cx: &mut Context<Self>) {
        self.scroll_epoch = self.scroll_epoch.wrapping_add(1);
        let epoch = self.scroll_epoch;

        cx.spawn(async move |view, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(HIGHLIGHT_SCROLL_DELAY_MS))
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.scroll_epoch != epoch {
                    return;
                }

                // Scroll targets only the clicked citation, even though every
                // matching citation on the page gets an overlay.
                let Some(selected) = this.state.selected_citation() else {
                    return;
                };
                let highlights = project_highlights(
                    std::slice::from_ref(selected),
                    this.state.document_url(),
                    this.state.current_page(),
                    this.state.scale(),
                );
                let Some(first) = highlights.first() else {
                    return;
                };

                let target_y = (first.y - HIGHLIGHT_SCROLL_MARGIN).max(0.0);
                this.page_scroll.set_offset(point(px(0.), px(-target_y)));
                cx.notify();
            });
        })
        .detach();
    }

    fn prev_page(&mut self, cx: &mut Context<Self>) {
        if self.state.prev_page() {
            self.request_page_render(cx);
            cx.notify();
        }
    }

    fn next_page(&mut self, cx: &mut Context<Self>) {
        if self.state.next_page() {
            self.request_page_render(cx);
            cx.notify();
        }
    }

    fn zoom_in(&mut self, cx: &mut Context<Self>) {
        let before = self.state.scale();
        self.state.zoom_in();
        if self.state.scale() != before {
            self.request_page_render(cx);
            cx.notify();
        }
    }

    fn zoom_out(&mut self, cx: &mut Context<Self>) {
        let before = self.state.scale();
        self.state.zoom_out();
        if self.state.scale() != before {
            self.request_page_render(cx);
            cx.notify();
        }
    }
}
