//! A small render tree with an escaping HTML serializer.

/// User interactions a rendered element can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Action>,
}

const VOID_TAGS: [&str; 2] = ["img", "br"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

pub fn div(class: &str) -> Element {
    Element::new("div").class(class)
}

pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    push_attr(out, name, value);
                }
                if let Some(Action::Search { name }) = &el.on_click {
                    push_attr(out, "data-search", name);
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(el.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Every click action in document order.
    pub fn actions(&self) -> Vec<Action> {
        let mut found = Vec::new();
        self.collect_actions(&mut found);
        found
    }

    fn collect_actions(&self, found: &mut Vec<Action>) {
        if let Node::Element(el) = self {
            if let Some(action) = &el.on_click {
                found.push(action.clone());
            }
            for child in &el.children {
                child.collect_actions(found);
            }
        }
    }

    /// Counts descendant elements (including self) carrying `class`.
    pub fn count_class(&self, class: &str) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Element(el) => {
                let own = el
                    .attrs
                    .iter()
                    .any(|(name, value)| *name == "class" && value.split(' ').any(|c| c == class));
                usize::from(own) + el.children.iter().map(|c| c.count_class(class)).sum::<usize>()
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_elements() {
        let node: Node = div("card win")
            .child(img("a.png", "Ahri Icon"))
            .child(Element::new("span").text("7"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="card win"><img src="a.png" alt="Ahri Icon"><span>7</span></div>"#
        );
    }

    #[test]
    fn names_are_escaped_in_text_and_attributes() {
        let name = r#"x');alert("pwned");//<b>"#;
        let node: Node = div("other-participant")
            .text(name)
            .on_click(Action::Search { name: name.to_string() })
            .into();
        let html = node.to_html();
        assert!(!html.contains("<b>"));
        assert!(!html.contains("');"));
        assert!(html.contains("data-search=\"x&#39;);alert(&quot;pwned&quot;);//&lt;b&gt;\""));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn collects_actions_and_text() {
        let node: Node = div("root")
            .child(div("a").text("one").on_click(Action::Search { name: "one".into() }))
            .child(div("b").text("two").on_click(Action::Search { name: "two".into() }))
            .into();
        assert_eq!(node.text_content(), "onetwo");
        assert_eq!(
            node.actions(),
            vec![
                Action::Search { name: "one".into() },
                Action::Search { name: "two".into() }
            ]
        );
        assert_eq!(node.count_class("a"), 1);
        assert_eq!(node.count_class("root"), 1);
    }
}
