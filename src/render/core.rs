use std::io::Write;

use crate::dom::{DomTree, NodeId, NodeKind};
use crate::error::Result;

/// Serialisation parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Inline style written on hidden elements.
    pub hidden_style: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            hidden_style: "display: none;".to_string(),
        }
    }
}

/// Writes document-mirror subtrees as HTML.
pub struct MarkupRenderer {
    settings: RendererSettings,
}

impl MarkupRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    /// Write `node` and its subtree.
    pub fn render(&self, writer: &mut impl Write, dom: &DomTree, node: NodeId) -> Result<()> {
        match &dom.node(node)?.kind {
            NodeKind::Text(text) => write!(writer, "{text}")?,
            NodeKind::Element {
                tag,
                classes,
                attrs,
                hidden,
            } => {
                write!(writer, "<{tag}")?;
                for (name, value) in attrs {
                    write!(writer, " {name}=\"{value}\"")?;
                }
                if !classes.is_empty() {
                    write!(writer, " class=\"{}\"", classes.join(" "))?;
                }
                if *hidden {
                    write!(writer, " style=\"{}\"", self.settings.hidden_style)?;
                }
                write!(writer, ">")?;
                self.render_children(writer, dom, node)?;
                write!(writer, "</{tag}>")?;
            }
        }
        Ok(())
    }

    pub fn render_children(
        &self,
        writer: &mut impl Write,
        dom: &DomTree,
        node: NodeId,
    ) -> Result<()> {
        for child in dom.children(node) {
            self.render(writer, dom, *child)?;
        }
        Ok(())
    }

    pub fn outer_html(&self, dom: &DomTree, node: NodeId) -> Result<String> {
        let mut out = Vec::new();
        self.render(&mut out, dom, node)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn inner_html(&self, dom: &DomTree, node: NodeId) -> Result<String> {
        let mut out = Vec::new();
        self.render_children(&mut out, dom, node)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_elements_carry_inline_style() {
        let mut dom = DomTree::new();
        let ul = dom.create_element("ul", &["menu"]);
        let li = dom.create_element("li", &["leaf", "active"]);
        let a = dom.create_element("a", &[]);
        let label = dom.create_text("Home");
        dom.set_attr(a, "href", "/").unwrap();
        dom.append_child(ul, li).unwrap();
        dom.append_child(li, a).unwrap();
        dom.append_child(a, label).unwrap();
        dom.set_hidden(ul, true).unwrap();

        let html = MarkupRenderer::with_default().outer_html(&dom, ul).unwrap();
        assert_eq!(
            html,
            "<ul class=\"menu\" style=\"display: none;\"><li class=\"leaf active\"><a href=\"/\">Home</a></li></ul>"
        );
    }

    #[test]
    fn inner_html_skips_the_container() {
        let mut dom = DomTree::new();
        let p = dom.create_element("p", &[]);
        dom.append_child(dom.root(), p).unwrap();
        let html = MarkupRenderer::with_default()
            .inner_html(&dom, dom.root())
            .unwrap();
        assert_eq!(html, "<p></p>");
    }
}
