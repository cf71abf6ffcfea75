//! Loaded document state
//!
//! The document pane shows plain text, one line per row. ANSI escapes are
//! preserved here and interpreted at render time.

pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Built-in demo document, shown when no input is given so scrolling can
    /// be tried immediately.
    pub fn demo() -> Self {
        let mut lines = vec![
            "autoscroll demo".to_string(),
            String::new(),
            "This is filler content so you can watch the auto-scroller work.".to_string(),
            "Load your own file with: autoscroll <FILE>".to_string(),
            String::new(),
        ];
        for i in 1..=400 {
            lines.push(format!("{:>4}  ────────────────────────────────", i));
        }
        lines.push(String::new());
        lines.push("End of demo content.".to_string());
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joined text for the render path, which feeds the ANSI parser once.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_from_text_splits_lines() {
        let doc = Document::from_text("one\ntwo\nthree");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines()[1], "two");
    }

    #[test]
    fn test_from_text_trailing_newline() {
        let doc = Document::from_text("one\ntwo\n");
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_demo_is_scrollable() {
        // Taller than any reasonable terminal so the animation is visible
        let doc = Document::demo();
        assert!(doc.line_count() > 300);
    }

    #[test]
    fn test_text_round_trip() {
        let doc = Document::from_text("a\nb");
        assert_eq!(doc.text(), "a\nb");
    }
}
