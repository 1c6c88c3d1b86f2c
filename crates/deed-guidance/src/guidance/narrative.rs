/// Line-oriented builder for guidance narratives.
///
/// Output is plain text with bullet glyphs; presentation layers embed it as-is.
#[derive(Debug, Default)]
pub(crate) struct Narrative {
    lines: Vec<String>,
}

impl Narrative {
    pub(crate) fn start(first_line: impl Into<String>) -> Self {
        Self {
            lines: vec![first_line.into()],
        }
    }

    pub(crate) fn new(tag: &str, subject: &str) -> Self {
        Self::start(format!("[{tag}] {subject}:"))
    }

    pub(crate) fn headline(tag: &str) -> Self {
        Self::start(format!("[{tag}]"))
    }

    pub(crate) fn bullet(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("  • {}", text.as_ref()));
        self
    }

    pub(crate) fn arrow(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("  → {}", text.as_ref()));
        self
    }

    pub(crate) fn line(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("  {}", text.as_ref()));
        self
    }

    pub(crate) fn item(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("      - {}", text.as_ref()));
        self
    }

    pub(crate) fn star(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("      * {}", text.as_ref()));
        self
    }

    pub(crate) fn numbered(mut self, index: u8, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("      ({index}) {}", text.as_ref()));
        self
    }

    /// Continuation of the previous item or note.
    pub(crate) fn cont(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("        {}", text.as_ref()));
        self
    }

    pub(crate) fn notes(self) -> Self {
        self.line("Ghi chú:")
    }

    /// The two standard caveats attached to a marital-status certificate.
    pub(crate) fn certificate_span(self, span: impl AsRef<str>) -> Self {
        self.star("Giấy xác nhận TTHN phải xác nhận đầy đủ thời gian")
            .cont(span)
            .star("Giấy xác nhận TTHN phải còn hạn 06 tháng")
            .cont("tính đến ngày nộp hồ sơ.")
    }

    pub(crate) fn build(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_indented_lines() {
        let text = Narrative::new("TAG", "ông A")
            .bullet("Tính chất: TÀI SẢN RIÊNG.")
            .arrow("Phải xuất trình bản chính:")
            .item("GCN QSDĐ/QSHN.")
            .build();

        assert_eq!(
            text,
            "[TAG] ông A:\n  • Tính chất: TÀI SẢN RIÊNG.\n  → Phải xuất trình bản chính:\n      - GCN QSDĐ/QSHN."
        );
    }
}
