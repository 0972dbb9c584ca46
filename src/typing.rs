/// Character-by-character reveal state for a newly arrived assistant reply.
///
/// The chat view drives this from a timer task on the foreground executor;
/// the task carries the epoch it was started with and stops silently when the
/// epoch has moved on (conversation switched, newer reply arrived, reveal
/// finished). Reveal positions always sit on UTF-8 character boundaries.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    message_id: String,
    revealed_bytes: usize,
    epoch: u64,
}

/// Milliseconds between revealed characters.
pub const TYPING_INTERVAL_MS: u64 = 25;

impl TypingEffect {
    pub fn new(message_id: String, epoch: u64) -> Self {
        Self {
            message_id,
            revealed_bytes: 0,
            epoch,
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Advances the reveal by one character of `content`. Returns `false`
    /// once the whole content is visible.
    pub fn step(&mut self, content: &str) -> bool {
        let Some(next) = content[self.revealed_bytes.min(content.len())..].chars().next() else {
            return false;
        };
        self.revealed_bytes += next.len_utf8();
        self.revealed_bytes < content.len()
    }

    pub fn is_done(&self, content: &str) -> bool {
        self.revealed_bytes >= content.len()
    }

    /// The currently visible prefix of `content`.
    pub fn visible<'a>(&self, content: &'a str) -> &'a str {
        &content[..self.revealed_bytes.min(content.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_step() {
        let content = "abc";
        let mut typing = TypingEffect::new("m1".into(), 1);

        assert_eq!(typing.visible(content), "");
        assert!(typing.step(content));
        assert_eq!(typing.visible(content), "a");
        assert!(typing.step(content));
        assert_eq!(typing.visible(content), "ab");
        assert!(!typing.step(content));
        assert_eq!(typing.visible(content), "abc");
        assert!(typing.is_done(content));
    }

    #[test]
    fn never_splits_multibyte_characters() {
        let content = "日本語 ok";
        let mut typing = TypingEffect::new("m1".into(), 1);

        let mut seen = Vec::new();
        while typing.step(content) {
            seen.push(typing.visible(content).to_string());
        }
        seen.push(typing.visible(content).to_string());

        assert_eq!(seen.first().map(String::as_str), Some("日"));
        assert_eq!(seen.last().map(String::as_str), Some(content));
        assert_eq!(seen.len(), content.chars().count());
    }

    #[test]
    fn empty_content_is_immediately_done() {
        let mut typing = TypingEffect::new("m1".into(), 1);
        assert!(typing.is_done(""));
        assert!(!typing.step(""));
    }

    #[test]
    fn stepping_past_the_end_is_a_no_op() {
        let content = "x";
        let mut typing = TypingEffect::new("m1".into(), 1);
        assert!(!typing.step(content));
        assert!(!typing.step(content));
        assert_eq!(typing.visible(content), "x");
    }
}
