//! Literal multi-delimiter splitting

use crate::delimiter::DelimiterSet;

/// Iterator over the tokens between delimiters
///
/// Delimiters are matched as literal substrings. At each position the set is
/// tried in order and the first match wins. Adjacent delimiters produce empty
/// tokens, so `"1,,2"` yields `"1"`, `""`, `"2"`.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    delimiters: &'a [String],
    pos: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    /// Tokenize `text` with the given delimiter set
    pub fn new(text: &'a str, delimiters: &'a DelimiterSet) -> Self {
        Self {
            text,
            delimiters: delimiters.as_slice(),
            pos: 0,
            finished: false,
        }
    }

    /// Find the next delimiter at or after `from`, as (start, length)
    fn next_delimiter(&self, from: usize) -> Option<(usize, usize)> {
        let rest = &self.text[from..];
        rest.char_indices().find_map(|(offset, _)| {
            let candidate = &rest[offset..];
            self.delimiters
                .iter()
                .find(|d| !d.is_empty() && candidate.starts_with(d.as_str()))
                .map(|d| (from + offset, d.len()))
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_delimiter(self.pos) {
            Some((start, len)) => {
                let token = &self.text[self.pos..start];
                self.pos = start + len;
                Some(token)
            }
            None => {
                self.finished = true;
                Some(&self.text[self.pos..])
            }
        }
    }
}
