use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::token::{Nesting, Token, TokenKind};

use super::Renderer;

/// Renders tokens as HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

/// Where a tag puts its line breaks.
#[derive(Clone, Copy)]
enum Layout {
    /// Block that holds other blocks: break after both tags.
    Container,
    /// Block that holds inline content: break after the close tag.
    Leaf,
    /// Inline markup: no breaks.
    Inline,
}

impl HtmlRenderer {
    fn tag(token: &Token, layout: Layout) -> String {
        match token.nesting {
            Nesting::Open => {
                let mut out = format!("<{}", token.tag);
                for (name, value) in &token.attributes {
                    out.push_str(&format!(
                        " {name}=\"{}\"",
                        encode_double_quoted_attribute(value)
                    ));
                }
                out.push('>');
                if matches!(layout, Layout::Container) {
                    out.push('\n');
                }
                out
            }
            Nesting::Close => match layout {
                Layout::Inline => format!("</{}>", token.tag),
                Layout::Container | Layout::Leaf => format!("</{}>\n", token.tag),
            },
            Nesting::Neutral => String::new(),
        }
    }

    fn code_block(token: &Token) -> String {
        let class = token
            .info
            .split_whitespace()
            .next()
            .map(|lang| format!(" class=\"language-{}\"", encode_double_quoted_attribute(lang)))
            .unwrap_or_default();
        format!(
            "<pre><code{class}>{}</code></pre>\n",
            encode_text(&token.content)
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_token(&self, token: &Token, index: usize, siblings: &[Token]) -> String {
        if token.hidden {
            return String::new();
        }
        match token.kind {
            TokenKind::List { .. }
            | TokenKind::Blockquote
            | TokenKind::Table
            | TokenKind::TableHead
            | TokenKind::TableBody
            | TokenKind::TableRow => Self::tag(token, Layout::Container),
            TokenKind::Paragraph
            | TokenKind::Heading { .. }
            | TokenKind::ListItem
            | TokenKind::TableCell { .. } => Self::tag(token, Layout::Leaf),
            TokenKind::Strong | TokenKind::Emphasis | TokenKind::Strike => {
                Self::tag(token, Layout::Inline)
            }
            TokenKind::HorizontalRule => "<hr>\n".to_string(),
            TokenKind::CodeBlock => Self::code_block(token),
            TokenKind::SoftBreak => "\n".to_string(),
            TokenKind::Text => encode_text(&token.content).into_owned(),
            TokenKind::Inline => self.render_default(token, index, siblings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use insta::assert_snapshot;

    fn html(md: &str) -> String {
        HtmlRenderer.render(&parse(md))
    }

    #[test]
    fn paragraph_with_emphasis() {
        assert_snapshot!(html("Some *text* & **more**"), @"<p>Some <em>text</em> &amp; <strong>more</strong></p>");
    }

    #[test]
    fn heading_levels() {
        assert_snapshot!(html("### Three"), @"<h3>Three</h3>");
    }

    #[test]
    fn table_cells_carry_alignment() {
        assert_snapshot!(html("|a|b|\n|:---:|---:|\n|1|2|"), @r#"
        <table>
        <thead>
        <tr>
        <th style="text-align: center">a</th>
        <th style="text-align: right">b</th>
        </tr>
        </thead>
        <tbody>
        <tr>
        <td style="text-align: center">1</td>
        <td style="text-align: right">2</td>
        </tr>
        </tbody>
        </table>
        "#);
    }

    #[test]
    fn code_block_is_escaped() {
        assert_snapshot!(html("```html\n<b>\n```"), @r#"
        <pre><code class="language-html">&lt;b&gt;
        </code></pre>
        "#);
    }

    #[test]
    fn code_block_without_info_has_no_class() {
        assert_eq!(html("```\nx\n```"), "<pre><code>x\n</code></pre>\n");
    }

    #[test]
    fn hidden_tokens_render_nothing() {
        let mut tokens = parse("# gone");
        for t in &mut tokens {
            t.hidden = true;
        }
        assert_eq!(HtmlRenderer.render(&tokens), "");
    }

    #[test]
    fn inline_container_renders_children_or_content() {
        let childless = Token::inline("a < b");
        assert_eq!(HtmlRenderer.render(&[childless]), "a &lt; b");

        let parent = Token::inline("ignored").with_children(vec![
            Token::open(TokenKind::Strike).with_markup("~~"),
            Token::text("x"),
            Token::close(TokenKind::Strike).with_markup("~~"),
        ]);
        assert_eq!(HtmlRenderer.render(&[parent]), "<del>x</del>");
    }

    #[test]
    fn horizontal_rule_and_soft_break() {
        assert_eq!(html("a\nb\n\n---"), "<p>a\nb</p>\n<hr>\n");
    }
}
