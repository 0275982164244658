//! Line-oriented reader for the lightweight markdown the advisor returns.
//! Everything becomes typed blocks; markup in the source is kept as text.

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `#`..`######` heading. Level is clamped to 1..=6.
    Heading { level: u8, content: Vec<Inline> },
    /// Consecutive non-blank lines; each inner vec is one line.
    Paragraph(Vec<Vec<Inline>>),
    /// A run of `-`, `*`, `•` or `1.` items.
    List { ordered: bool, items: Vec<Vec<Inline>> },
    Rule,
}

/// Split `**bold**` spans out of a line. An unclosed marker stays literal.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = line;
    let mut text = String::new();

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        match after.find("**") {
            Some(end) if end > 0 => {
                text.push_str(&rest[..start]);
                if !text.is_empty() {
                    spans.push(Inline::Text(std::mem::take(&mut text)));
                }
                spans.push(Inline::Bold(after[..end].to_string()));
                rest = &after[end + 2..];
            }
            _ => {
                text.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        spans.push(Inline::Text(text));
    }
    spans
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

fn is_rule(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|m| compact.chars().all(|c| c == *m))
}

fn bullet(line: &str) -> Option<&str> {
    ["- ", "* ", "• "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

fn numbered(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .or_else(|| line[digits..].strip_prefix(") "))
        .map(str::trim)
}

/// Parse generated text into blocks.
pub fn parse_rich_text(input: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut paragraph: Vec<Vec<Inline>> = Vec::new();

    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<Vec<Inline>>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(std::mem::take(paragraph)));
        }
    }

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph);
            continue;
        }

        if is_rule(line) {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::Rule);
        } else if let Some((level, text)) = heading(line) {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading {
                level,
                content: parse_inline(text),
            });
        } else if let Some((ordered, text)) = bullet(line)
            .map(|t| (false, t))
            .or_else(|| numbered(line).map(|t| (true, t)))
        {
            flush(&mut blocks, &mut paragraph);
            let item = parse_inline(text);
            match blocks.last_mut() {
                Some(Block::List {
                    ordered: prev,
                    items,
                }) if *prev == ordered => items.push(item),
                _ => blocks.push(Block::List {
                    ordered,
                    items: vec![item],
                }),
            }
        } else {
            paragraph.push(parse_inline(line));
        }
    }
    flush(&mut blocks, &mut paragraph);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn bold_spans_split_out() {
        assert_eq!(
            parse_inline("Focus on **graphs** and **trees**."),
            vec![text("Focus on "), bold("graphs"), text(" and "), bold("trees"), text(".")]
        );
    }

    #[test]
    fn unclosed_or_empty_bold_stays_literal() {
        assert_eq!(parse_inline("a ** b"), vec![text("a ** b")]);
        assert_eq!(parse_inline("****"), vec![text("****")]);
    }

    #[test]
    fn mixed_document() {
        let input = "\
## Session Plan
Start with a check-in.
Ask about **workload**.

- Review algorithms
- Pair on SQL
1. Week one
2. Week two
---
Good luck";
        assert_eq!(
            parse_rich_text(input),
            vec![
                Block::Heading {
                    level: 2,
                    content: vec![text("Session Plan")]
                },
                Block::Paragraph(vec![
                    vec![text("Start with a check-in.")],
                    vec![text("Ask about "), bold("workload"), text(".")],
                ]),
                Block::List {
                    ordered: false,
                    items: vec![vec![text("Review algorithms")], vec![text("Pair on SQL")]],
                },
                Block::List {
                    ordered: true,
                    items: vec![vec![text("Week one")], vec![text("Week two")]],
                },
                Block::Rule,
                Block::Paragraph(vec![vec![text("Good luck")]]),
            ]
        );
    }

    #[test]
    fn html_is_plain_text() {
        assert_eq!(
            parse_rich_text("<b>hi</b><script>x()</script>"),
            vec![Block::Paragraph(vec![vec![text("<b>hi</b><script>x()</script>")]])]
        );
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(
            parse_rich_text("#hashtag"),
            vec![Block::Paragraph(vec![vec![text("#hashtag")]])]
        );
    }

    #[test]
    fn star_rule_is_not_a_bullet() {
        assert_eq!(parse_rich_text("* * *"), vec![Block::Rule]);
    }

    #[test]
    fn blank_input_has_no_blocks() {
        assert!(parse_rich_text("  \n\n").is_empty());
    }
}
