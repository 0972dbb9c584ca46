#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveView {
    Home,
    Files,
    NewChat,
    Conversation(i64),
}

/// One message as the conversation view renders it. Backend messages carry
/// their numeric id; an optimistically shown user message gets a `pending-N`
/// id until the send round-trip replaces the whole list.
#[derive(Debug, Clone)]
struct MessageItem {
    id: String,
    role: MessageRole,
    content: String,
    timestamp: SharedString,
    citations: Vec<Citation>,
}

impl MessageItem {
    fn from_dto(dto: crate::api::MessageDto) -> Self {
        Self {
            id: dto.id.to_string(),
            role: dto.role,
            content: dto.content,
            timestamp: clock_label(&dto.created_at),
            citations: dto.citations,
        }
    }
}

/// The `HH:MM` portion of an RFC 3339 timestamp, or nothing when the value
/// is too short to carry one.
fn clock_label(created_at: &str) -> SharedString {
    created_at
        .get(11..16)
        .map(|clock| clock.to_string().into())
        .unwrap_or_default()
}
