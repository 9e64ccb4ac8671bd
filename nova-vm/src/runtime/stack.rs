use crate::runtime::error::StackError;
use crate::runtime::word::Word;

/// Last-in-first-out word storage used by `push`, `pop`, `call` and `ret`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    data: Vec<Word>,
    limit: Option<usize>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack that refuses to grow past `limit` words.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, value: Word) -> Result<(), StackError> {
        if let Some(limit) = self.limit {
            if self.data.len() >= limit {
                return Err(StackError::Overflow { limit });
            }
        }

        self.data.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Word, StackError> {
        self.data.pop().ok_or(StackError::Empty)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bottom-to-top view of the stack contents.
    pub fn as_slice(&self) -> &[Word] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
