//! Output formats for a [`Page`]: plain text for the terminal, JSON for tooling.

use std::fmt;

use crate::pages::{Block, Page};

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for block in &self.blocks {
            writeln!(f)?;
            write_block(f, block)?;
        }
        Ok(())
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, text: &str, indent: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "{indent}{line}")?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    match block {
        Block::Heading { text } => writeln!(f, "## {text}"),
        Block::Paragraph { text } => write_indented(f, text, ""),
        Block::Card {
            title,
            body,
            anchor,
        } => {
            match anchor {
                Some(anchor) => writeln!(f, "* {title} (#{anchor})")?,
                None => writeln!(f, "* {title}")?,
            }
            write_indented(f, body, "    ")
        }
        Block::Facts { items } => {
            let width = items
                .iter()
                .map(|i| i.label.chars().count())
                .max()
                .unwrap_or(0);
            for item in items {
                writeln!(f, "  {:<width$}  {}", item.label, item.value)?;
            }
            Ok(())
        }
        Block::List { title, items } => {
            writeln!(f, "{title}:")?;
            for item in items {
                writeln!(f, "  - {item}")?;
            }
            Ok(())
        }
        Block::Link { label, href } => writeln!(f, "-> {label} [{href}]"),
    }
}

/// Render as indented JSON.
pub fn render_json(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Fact;
    use vitrine_core::i18n::Language;

    fn sample() -> Page {
        Page {
            path: "/sample".into(),
            lang: Language::En,
            title: "Sample".into(),
            blocks: vec![
                Block::heading("Intro"),
                Block::paragraph("First line\nSecond line"),
                Block::anchored_card("Data", "We keep little.", "section-0"),
                Block::Facts {
                    items: vec![Fact::new("Email", "a@b.dz"), Fact::new("Fax", "021")],
                },
                Block::List {
                    title: "Services".into(),
                    items: vec!["Queues".into()],
                },
                Block::link("Back", "/"),
            ],
        }
    }

    #[test]
    fn test_render_text() {
        let text = sample().to_string();
        assert!(text.starts_with("Sample\n======\n"));
        assert!(text.contains("## Intro\n"));
        assert!(text.contains("First line\nSecond line\n"));
        assert!(text.contains("* Data (#section-0)\n    We keep little.\n"));
        assert!(text.contains("  Email  a@b.dz\n"));
        assert!(text.contains("  Fax    021\n"));
        assert!(text.contains("Services:\n  - Queues\n"));
        assert!(text.ends_with("-> Back [/]\n"));
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["lang"], "en");
        assert_eq!(json["blocks"][0]["kind"], "heading");
        assert_eq!(json["blocks"][2]["anchor"], "section-0");
        assert_eq!(json["blocks"][3]["items"][1]["label"], "Fax");
    }

    #[test]
    fn test_card_without_anchor_omits_it_in_json() {
        let page = Page {
            blocks: vec![Block::card("T", "B")],
            ..sample()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json["blocks"][0].get("anchor").is_none());
    }
}
