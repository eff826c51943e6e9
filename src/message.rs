//! The message record shown by each conversation row.

/// One chat line: who wrote it and what they wrote.
///
/// Messages are plain values. They are built once when the conversation is
/// assembled and only ever read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub author: String,
    /// May contain embedded line breaks.
    pub body: String,
}

impl Message {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Message::new("Neide", "hello");
        let b = Message::new("Neide".to_string(), "hello".to_string());
        assert_eq!(a, b);
        assert_ne!(a, Message::new("Neide", "hello!"));
    }
}
