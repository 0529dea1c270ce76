//! Helpers for walking the POI export tree.

use roxmltree::Node;

/// Local tag name of an element, namespace prefix dropped.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use gpoi_converter::xml::get_tag_name;
///
/// let doc = Document::parse(r#"<export><gpoi/></export>"#).unwrap();
/// let gpoi = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(gpoi), "gpoi");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Whether `node` is an element named `tag`.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// First direct child element named `tag`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use gpoi_converter::xml::find_child;
///
/// let doc = Document::parse(r#"<pos><lat>35.0</lat><lon>135.0</lon></pos>"#).unwrap();
/// assert!(find_child(doc.root_element(), "lat").is_some());
/// assert!(find_child(doc.root_element(), "alt").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// First element named `tag` below `node`, at any depth.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|child| has_tag(*child, tag))
}

/// Untrimmed text of an element, `None` when absent or empty.
pub fn raw_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().filter(|text| !text.is_empty())
}

/// Trimmed text of an element; empty when it has none.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text().map(|s| s.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:export xmlns:ns="http://example.com"><ns:gpoi/></ns:export>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "export");
    }

    #[test]
    fn test_find_child_ignores_grandchildren() {
        let xml = r#"<gpoi><detail><category>x</category></detail></gpoi>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(find_child(doc.root_element(), "category").is_none());
    }

    #[test]
    fn test_find_descendant_skips_self() {
        let xml = r#"<gpoi><detail><pos><lat>1</lat></pos></detail></gpoi>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(get_tag_name(find_descendant(root, "pos").unwrap()), "pos");
        assert!(find_descendant(root, "gpoi").is_none());
    }

    #[test]
    fn test_text_helpers() {
        let doc = Document::parse(r#"<nb>  Tokyo Tower </nb>"#).unwrap();
        assert_eq!(get_text(doc.root_element()), "Tokyo Tower");
        assert_eq!(raw_text(doc.root_element()), Some("  Tokyo Tower "));

        let empty = Document::parse("<nb/>").unwrap();
        assert_eq!(get_text(empty.root_element()), "");
        assert_eq!(raw_text(empty.root_element()), None);
    }

    #[test]
    fn test_has_tag_rejects_text_nodes() {
        let doc = Document::parse(r#"<gpoi>text</gpoi>"#).unwrap();
        let root = doc.root_element();

        assert!(has_tag(root, "gpoi"));
        assert!(!has_tag(root, "pos"));
        assert!(!has_tag(root.first_child().unwrap(), "gpoi"));
    }
}
