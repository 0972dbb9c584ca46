impl Documind {
    fn refresh_conversations(&mut self, cx: &mut Context<Self>) {
        self.conversations_loading = true;
        self.conversations_epoch = self.conversations_epoch.wrapping_add(1);
        let epoch = self.conversations_epoch;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.list_conversations() })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.conversations_epoch != epoch {
                    return;
                }
                this.conversations_loading = false;

                match result {
                    Ok(conversations) => this.conversations = conversations,
                    Err(err) => {
                        crate::debug_log!("[chat] conversation list failed: {}", err);
                        this.status = Some("Could not reach the backend".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn refresh_documents(&mut self, cx: &mut Context<Self>) {
        self.documents_loading = true;
        self.documents_epoch = self.documents_epoch.wrapping_add(1);
        let epoch = self.documents_epoch;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.list_documents() })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.documents_epoch != epoch {
                    return;
                }
                this.documents_loading = false;

                match result {
                    Ok(documents) => {
                        this.selected_document_ids
                            .retain(|id| documents.iter().any(|doc| doc.id == *id));
                        this.documents = documents;
                    }
                    Err(err) => {
                        crate::debug_log!("[chat] document list failed: {}", err);
                        this.status = Some("Could not reach the backend".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn open_conversation(&mut self, id: i64, cx: &mut Context<Self>) {
        self.active_view = ActiveView::Conversation(id);
        self.messages.clear();
        self.status = None;
        self.sending = false;
        self.cancel_typing_effect();
        self.conversation_loading = true;
        self.conversation_epoch = self.conversation_epoch.wrapping_add(1);
        let epoch = self.conversation_epoch;
        let api = self.api.clone();

        cx.spawn(async move |view, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { api.conversation_detail(id) })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.conversation_epoch != epoch {
                    return;
                }
                this.conversation_loading = false;

                match result {
                    Ok(detail) => this.apply_conversation_detail(detail, false, cx),
                    Err(err) => {
                        crate::debug_log!("[chat] conversation {} load failed: {}", id, err);
                        this.status = Some("Failed to load the conversation".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn apply_conversation_detail(
        &mut self,
        detail: ConversationDetail,
        animate_reply: bool,
        cx: &mut Context<Self>,
    ) {
        self.messages = detail
            .messages
            .into_iter()
            .map(MessageItem::from_dto)
            .collect();
        if animate_reply {
            self.start_typing_effect(cx);
        }
        self.scroll_to_latest_message();
    }

    fn conversation_title(&self, id: i64) -> SharedString {
        self.conversations
            .iter()
            .find(|conversation| conversation.id == id)
            .map(|conversation| conversation.title.clone().into())
            .unwrap_or_else(|| "Conversation".into())
    }

    fn scroll_to_latest_message(&self) {
        if !self.messages.is_empty() {
            self.message_list_scroll
                .scroll_to_item(self.messages.len() - 1);
        }
    }
}
