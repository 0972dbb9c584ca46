impl Documind {
    fn show_home(&mut self, cx: &mut Context<Self>) {
        self.active_view = ActiveView::Home;
        self.status = None;
        cx.notify();
    }

    fn show_files(&mut self, cx: &mut Context<Self>) {
        self.active_view = ActiveView::Files;
        self.status = None;
        self.refresh_documents(cx);
        cx.notify();
    }

    fn show_new_chat(&mut self, cx: &mut Context<Self>) {
        self.active_view = ActiveView::NewChat;
        self.status = None;
        self.refresh_documents(cx);
        cx.notify();
    }

    fn toggle_document_selection(&mut self, id: i64, cx: &mut Context<Self>) {
        if let Some(position) = self
            .selected_document_ids
            .iter()
            .position(|selected| *selected == id)
        {
            self.selected_document_ids.remove(position);
        } else {
            self.selected_document_ids.push(id);
        }
        cx.notify();
    }

    fn can_send(&self) -> bool {
        if self.sending || self.input_text.trim().is_empty() {
            return false;
        }
        match self.active_view {
            ActiveView::NewChat => !self.selected_document_ids.is_empty(),
            ActiveView::Conversation(_) => true,
            _ => false,
        }
    }

    fn send_current_message(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.can_send() {
            return;
        }
        let content = self.input_text.trim().to_string();
        self.input_state
            .update(cx, |input, cx| input.set_value("", window, cx));
        self.input_text.clear();

        match self.active_view {
            ActiveView::NewChat => self.start_conversation(content, cx),
            ActiveView::Conversation(id) => self.send_message(id, content, cx),
            _ => {}
        }
    }

    fn start_conversation(&mut self, content: String, cx: &mut Context<Self>) {
        self.sending = true;
        self.status = None;
        let api = self.api.clone();
        let document_ids = self.selected_document_ids.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move {
                    let conversation = api.create_conversation(&content, &document_ids)?;
                    let detail = api.conversation_detail(conversation.id)?;
                    anyhow::Ok((conversation, detail))
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                this.sending = false;

                match result {
                    Ok((conversation, detail)) => {
                        let id = conversation.id;
                        this.conversations.insert(0, conversation);
                        this.selected_document_ids.clear();
                        this.active_view = ActiveView::Conversation(id);
                        this.conversation_epoch = this.conversation_epoch.wrapping_add(1);
                        this.conversation_loading = false;
                        this.apply_conversation_detail(detail, true, cx);
                    }
                    Err(err) => {
                        crate::debug_log!("[chat] conversation create failed: {}", err);
                        this.status = Some("Failed to start the conversation".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn send_message(&mut self, conversation_id: i64, content: String, cx: &mut Context<Self>) {
        self.sending = true;
        self.status = None;
        self.cancel_typing_effect();

        // Show the user's message right away; the reply round-trip replaces
        // the whole list with the backend's copy.
        self.pending_message_seq += 1;
        self.messages.push(MessageItem {
            id: format!("pending-{}", self.pending_message_seq),
            role: MessageRole::User,
            content: content.clone(),
            timestamp: SharedString::default(),
            citations: Vec::new(),
        });
        self.scroll_to_latest_message();

        let epoch = self.conversation_epoch;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.send_message(conversation_id, &content) })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.conversation_epoch != epoch {
                    return;
                }
                this.sending = false;

                match result {
                    Ok(detail) => {
                        this.apply_conversation_detail(detail, true, cx);
                        this.refresh_conversations(cx);
                    }
                    Err(err) => {
                        crate::debug_log!("[chat] message send failed: {}", err);
                        this.status = Some("Failed to send the message".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn start_typing_effect(&mut self, cx: &mut Context<Self>) {
        let Some(reply) = self
            .messages
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::Assistant)
        else {
            return;
        };
        self.typing_epoch = self.typing_epoch.wrapping_add(1);
        self.typing = Some(TypingEffect::new(reply.id.clone(), self.typing_epoch));
        self.schedule_typing_tick(cx);
    }

    fn cancel_typing_effect(&mut self) {
        self.typing_epoch = self.typing_epoch.wrapping_add(1);
        self.typing = None;
    }

    fn schedule_typing_tick(&mut self, cx: &mut Context<Self>) {
        let Some(typing) = &self.typing else {
            return;
        };
        let epoch = typing.epoch();

        cx.spawn(async move |view, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(TYPING_INTERVAL_MS))
                .await;

            let _ = view.update(cx, |this, cx| {
                let (current_epoch, message_id) = match &this.typing {
                    Some(typing) => (typing.epoch(), typing.message_id().to_string()),
                    None => return,
                };
                if current_epoch != epoch {
                    return;
                }

                let Some(content) = this
                    .messages
                    .iter()
                    .find(|message| message.id == message_id)
                    .map(|message| message.content.clone())
                else {
                    this.typing = None;
                    cx.notify();
                    return;
                };

                let done = match this.typing.as_mut() {
                    Some(typing) => {
                        typing.step(&content);
                        typing.is_done(&content)
                    }
                    None => return,
                };
                if done {
                    this.typing = None;
                }
                this.scroll_to_latest_message();
                cx.notify();
                if !done {
                    this.schedule_typing_tick(cx);
                }
            });
        })
        .detach();
    }

    /// A click on a `[n]` marker: resolve the citation, open the preview pane
    /// and hand the citation to the viewer along with every citation the
    /// conversation produced, so sibling highlights on the same page show too.
    fn on_citation_clicked(&mut self, message_ix: usize, citation_ix: usize, cx: &mut Context<Self>) {
        let Some(citation) = self
            .messages
            .get(message_ix)
            .and_then(|message| message.citations.get(citation_ix))
            .cloned()
        else {
            return;
        };
        let conversation_citations: Vec<Citation> = self
            .messages
            .iter()
            .filter(|message| message.role == MessageRole::Assistant)
            .flat_map(|message| message.citations.iter().cloned())
            .collect();

        self.viewer_open = true;
        self.viewer.update(cx, |viewer, cx| {
            viewer.show_citation(citation, conversation_citations, cx)
        });
        cx.notify();
    }

    fn request_delete_conversation(&mut self, id: i64, cx: &mut Context<Self>) {
        self.delete_conversation_target = Some(id);
        cx.notify();
    }

    fn cancel_delete_conversation(&mut self, cx: &mut Context<Self>) {
        self.delete_conversation_target = None;
        cx.notify();
    }

    fn confirm_delete_conversation(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.delete_conversation_target.take() else {
            return;
        };
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.delete_conversation(id) })
                .await;

            let _ = view.update(cx, |this, cx| {
                match result {
                    Ok(()) => {
                        this.conversations
                            .retain(|conversation| conversation.id != id);
                        if this.active_view == ActiveView::Conversation(id) {
                            this.messages.clear();
                            this.cancel_typing_effect();
                            this.show_new_chat(cx);
                        }
                    }
                    Err(err) => {
                        crate::debug_log!("[chat] conversation {} delete failed: {}", id, err);
                        this.status = Some("Failed to delete the conversation".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn request_delete_document(&mut self, id: i64, cx: &mut Context<Self>) {
        self.delete_document_target = Some(id);
        cx.notify();
    }

    fn cancel_delete_document(&mut self, cx: &mut Context<Self>) {
        self.delete_document_target = None;
        cx.notify();
    }

    fn confirm_delete_document(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.delete_document_target.take() else {
            return;
        };
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.delete_document(id) })
                .await;

            let _ = view.update(cx, |this, cx| {
                match result {
                    Ok(()) => {
                        this.documents.retain(|document| document.id != id);
                        this.selected_document_ids.retain(|selected| *selected != id);
                    }
                    Err(err) => {
                        crate::debug_log!("[chat] document {} delete failed: {}", id, err);
                        this.status = Some("Failed to delete the document".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn open_upload_dialog(&mut self, cx: &mut Context<Self>) {
        let picker = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: true,
            prompt: Some("Upload".into()),
        });

        cx.spawn(async move |view, cx| {
            if let Ok(Ok(Some(paths))) = picker.await {
                let _ = view.update(cx, |this, cx| {
                    this.upload_documents(paths, cx);
                });
            }
        })
        .detach();
    }

    fn upload_documents(&mut self, paths: Vec<PathBuf>, cx: &mut Context<Self>) {
        if paths.is_empty() {
            return;
        }
        self.uploading = true;
        self.status = None;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let failures = cx
                .background_executor()
                .spawn(async move {
                    let mut failures = 0usize;
                    for path in &paths {
                        if let Err(err) = api.upload_document(path) {
                            crate::debug_log!(
                                "[chat] upload failed for {}: {}",
                                path.display(),
                                err
                            );
                            failures += 1;
                        }
                    }
                    failures
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                this.uploading = false;
                if failures > 0 {
                    this.status = Some(format!("{failures} upload(s) failed").into());
                }
                this.refresh_documents(cx);
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }
}
