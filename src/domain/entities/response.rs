/// One canned answer and the keywords that select it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEntry {
    pub keywords: Vec<String>,
    pub answer: String,
}

impl ResponseEntry {
    pub fn new<K: Into<String>>(keywords: impl IntoIterator<Item = K>, answer: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }
}

/// The static response table, loaded once at startup and read-only afterwards.
/// Entry order is the first-match tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    pub entries: Vec<ResponseEntry>,
    pub default_answer: String,
    pub welcome_message: String,
}

impl ResponseTable {
    pub fn new(default_answer: impl Into<String>, welcome_message: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_answer: default_answer.into(),
            welcome_message: welcome_message.into(),
        }
    }

    pub fn with_entry(mut self, entry: ResponseEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
