use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Whitespace separated arguments of an invocation.
///
/// A span wrapped in double quotes is kept as one word with the quotes removed,
/// an unterminated quote runs to the end of the input.
#[derive(Debug, Clone)]
pub struct Words {
    values: Vec<String>,
    pos: Arc<AtomicUsize>,
}

impl Words {
    pub fn new(input: &str) -> Self {
        Self {
            values: split_words(input),
            pos: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn next(&self) -> Option<String> {
        let pos = self.advance();

        self.values.get(pos).cloned()
    }

    pub fn current(&self) -> Option<String> {
        self.values.get(self.current_position()).cloned()
    }

    pub fn rest(&self) -> Vec<String> {
        let pos = self.advance_to_end();

        self.values.iter().skip(pos).cloned().collect()
    }

    pub fn current_position(&self) -> usize {
        self.pos.load(Ordering::SeqCst)
    }

    pub fn advance(&self) -> usize {
        self.pos.fetch_add(1, Ordering::SeqCst)
    }

    pub fn undo(&self) -> usize {
        self.pos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |pos| pos.checked_sub(1))
            .unwrap_or(0)
    }

    pub fn advance_to_end(&self) -> usize {
        self.pos.swap(self.values.len(), Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut started = false;

    for ch in input.chars() {
        match ch {
            '"' if quoted => {
                words.push(std::mem::take(&mut current));
                quoted = false;
                started = false;
            }
            '"' if !started => {
                quoted = true;
                started = true;
            }
            ch if ch.is_whitespace() && !quoted => {
                if started {
                    words.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            ch => {
                current.push(ch);
                started = true;
            }
        }
    }

    if started {
        words.push(current);
    }

    words
}
