// Column model of the target display: anything outside ASCII is two cells wide.
fn char_width(ch: char) -> usize {
    if ch.is_ascii() { 1 } else { 2 }
}

/// Longest prefix of `text` that fits in `limit` columns.
pub fn clip(text: &str, limit: usize) -> &str {
    let mut width = 0;
    for (index, ch) in text.char_indices() {
        let next = width + char_width(ch);
        if next > limit {
            return &text[..index];
        }
        width = next;
    }
    text
}

pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
