/// One display unit of a formatted report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Subheading line, bold markers stripped
    Heading(String),
    /// Bullet point, markers stripped and trimmed
    Bullet(String),
    /// Any other non-blank line, verbatim
    Paragraph(String),
}

/// Splits report text into an ordered sequence of display blocks.
///
/// This is a line-prefix heuristic, not a markdown parser: a leading `**`
/// makes a heading, a leading `*` makes a bullet, anything else non-blank
/// falls through to a paragraph. Blank lines produce nothing.
pub fn format_report(report: &str) -> Vec<Block> {
    report
        .lines()
        .filter_map(|line| {
            if line.starts_with("**") {
                Some(Block::Heading(line.replace("**", "")))
            } else if line.starts_with('*') {
                Some(Block::Bullet(line.replace('*', "").trim().to_string()))
            } else if !line.trim().is_empty() {
                Some(Block::Paragraph(line.to_string()))
            } else {
                None
            }
        })
        .collect()
}
