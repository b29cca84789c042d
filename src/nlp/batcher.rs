/// Splits long documents into line-aligned windows small enough for a
/// single inference request.
///
/// Each window is annotated on its own, so an entity that straddles a window
/// boundary comes back as two spans. Boundaries fall between lines except
/// when a single line exceeds the limit.
pub struct TextBatcher {
    max_chars: usize,
}

impl TextBatcher {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// Returns contiguous slices of `text`, each at most `max_chars`
    /// characters. Lines are kept whole unless a single line is too long, in
    /// which case it is cut at the last whitespace before the limit. Blank
    /// windows are skipped.
    pub fn windows<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut windows = Vec::new();
        let mut start = 0;
        let mut offset = 0;
        let mut current_chars = 0;

        for line in text.split_inclusive('\n') {
            let line_chars = line.chars().count();

            if current_chars + line_chars > self.max_chars && offset > start {
                windows.push(&text[start..offset]);
                start = offset;
                current_chars = 0;
            }

            if line_chars > self.max_chars {
                let pieces = self.split_long_line(line);
                if let Some((last, full)) = pieces.split_last() {
                    windows.extend(full.iter().copied());
                    start = offset + line.len() - last.len();
                    current_chars = last.chars().count();
                }
            } else {
                current_chars += line_chars;
            }

            offset += line.len();
        }

        if offset > start {
            windows.push(&text[start..offset]);
        }

        windows.retain(|w| !w.trim().is_empty());
        windows
    }

    fn split_long_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut rest = line;

        while rest.chars().count() > self.max_chars {
            let hard = rest
                .char_indices()
                .nth(self.max_chars)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());

            let cut = rest[..hard]
                .char_indices()
                .rev()
                .find(|(_, c)| c.is_whitespace())
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(hard);

            pieces.push(&rest[..cut]);
            rest = &rest[cut..];
        }

        if !rest.is_empty() {
            pieces.push(rest);
        }

        pieces
    }
}

impl Default for TextBatcher {
    fn default() -> Self {
        Self::new(2_000)
    }
}
