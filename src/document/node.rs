//! A labeled node within a parsed document tree.

/// A labeled tree fragment: a tag, an ordered attribute list, optional text,
/// and ordered children.
///
/// Nodes are immutable once built. Equality is structural, which is what
/// gives every entity wrapped around a node its identity-by-content
/// semantics.
///
/// # Examples
///
/// ```
/// use seqrecord::document::Node;
///
/// let node = Node::new("INSDInterval")
///     .with_child(Node::new("INSDInterval_from").with_text("1"))
///     .with_child(Node::new("INSDInterval_to").with_text("9"));
///
/// assert_eq!(node.tag(), "INSDInterval");
/// assert_eq!(node.text_at(&["INSDInterval_from"]), Some("1"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    /// The tag labeling this node.
    tag: String,

    /// The ordered `(name, value)` attribute pairs.
    attributes: Vec<(String, String)>,

    /// The text content, if any.
    text: Option<String>,

    /// The ordered child nodes.
    children: Vec<Node>,
}

impl Node {
    /// Creates a new node with the given tag and no attributes, text, or
    /// children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Consumes `self` and sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Consumes `self` and appends an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Consumes `self` and appends a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Gets the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Gets the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Gets the value of the named attribute on this node, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Gets the child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Gets the text of the first descendant matching the tag path.
    ///
    /// The path is descended one level per element: each segment selects
    /// children of the nodes matched by the previous segment. The first
    /// match in document order wins. Absence of a match, or a match
    /// without text, yields [`None`] rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrecord::document::Node;
    ///
    /// let node = Node::new("INSDQualifier")
    ///     .with_child(Node::new("INSDQualifier_name").with_text("product"))
    ///     .with_child(Node::new("INSDQualifier_value").with_text("hypothetical protein"));
    ///
    /// assert_eq!(node.text_at(&["INSDQualifier_name"]), Some("product"));
    /// assert_eq!(node.text_at(&["missing"]), None);
    /// ```
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find_first(path).and_then(Node::text)
    }

    /// Gets the text of every descendant matching the tag path, in document
    /// order. Matches without text are skipped.
    pub fn texts_at(&self, path: &[&str]) -> Vec<&str> {
        self.find_all(path)
            .into_iter()
            .filter_map(Node::text)
            .collect()
    }

    /// Gets the value of the named attribute on the first descendant
    /// matching the tag path, if present.
    pub fn attribute_at(&self, path: &[&str], name: &str) -> Option<&str> {
        self.find_first(path).and_then(|node| node.attribute(name))
    }

    /// Gets every child node matching the tag path, in document order.
    pub fn children_at(&self, path: &[&str]) -> Vec<&Node> {
        self.find_all(path)
    }

    /// Finds the first descendant matching the tag path in document order.
    /// An empty path matches `self`.
    fn find_first(&self, path: &[&str]) -> Option<&Node> {
        match path.split_first() {
            None => Some(self),
            Some((tag, rest)) => self
                .children
                .iter()
                .filter(|child| child.tag == *tag)
                .find_map(|child| child.find_first(rest)),
        }
    }

    /// Finds every descendant matching the tag path in document order. An
    /// empty path matches `self`.
    fn find_all(&self, path: &[&str]) -> Vec<&Node> {
        match path.split_first() {
            None => vec![self],
            Some((tag, rest)) => self
                .children
                .iter()
                .filter(|child| child.tag == *tag)
                .flat_map(|child| child.find_all(rest))
                .collect(),
        }
    }
}
