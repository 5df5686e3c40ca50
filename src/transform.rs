//! Textual rewrites that turn raw SVG markup into JSX-embeddable markup
//!
//! The rewrites are ordered and purely textual (no DOM awareness): the icon's
//! white fill becomes `currentColor` so it recolors with surrounding text, the
//! fixed pixel dimensions are stripped so the embedding context controls
//! sizing, a `className` expression is injected into the root tag, the XML
//! prolog is dropped, and XLink-namespaced attributes are collapsed into the
//! forms JSX accepts.

use regex::Regex;

/// Literal white fill attribute as exported by most icon editors
const WHITE_FILL: &str = r##"fill="#ffffff""##;

/// Replacement fill that inherits the surrounding text color
const CURRENT_COLOR_FILL: &str = r#"fill="currentColor""#;

/// The XLink namespace declaration, removed entirely from output
const XLINK_NAMESPACE_DECL: &str = r#"xmlns:xlink="http://www.w3.org/1999/xlink""#;

/// Applies the ordered substitution sequence to SVG markup
///
/// Construct once and reuse; the numeric-attribute and prolog patterns are
/// compiled at construction time.
#[derive(Debug)]
pub struct Transformer {
    width_attr: Regex,
    height_attr: Regex,
    xml_prolog: Regex,
    base_class: String,
}

impl Transformer {
    /// Create a transformer that injects the given base class into the
    /// `className` expression (joined with the component's `className` prop)
    pub fn new(base_class: &str) -> Self {
        Self {
            width_attr: Regex::new(r#"width="\d+""#).expect("width pattern is valid"),
            height_attr: Regex::new(r#"height="\d+""#).expect("height pattern is valid"),
            xml_prolog: Regex::new(r"<\?xml.*?\?>").expect("prolog pattern is valid"),
            base_class: base_class.to_string(),
        }
    }

    /// Run every rewrite in order and return the transformed markup
    ///
    /// The output is no longer guaranteed to be well-formed SVG: substitutions
    /// are textual, and malformed input passes through undetected.
    pub fn apply(&self, source: &str) -> String {
        // 1. First white fill inherits the current text color
        let markup = source.replacen(WHITE_FILL, CURRENT_COLOR_FILL, 1);

        // 2. Strip the first numeric width/height; sizing is deferred to the
        //    embedding context
        let markup = self.width_attr.replace(&markup, "");
        let markup = self.height_attr.replace(&markup, "");

        // 3. Inject the className expression right after the opening tag name
        let class_expr = format!(
            r#"<svg className={{cn("{}", className)}} "#,
            self.base_class
        );
        let markup = markup.replacen("<svg ", &class_expr, 1);

        // 4. Drop every XML prolog
        let markup = self.xml_prolog.replace_all(&markup, "");

        // 5. Collapse XLink attributes. The href rule runs first so it wins
        //    over the camel-token rule on `xlink:href` instances; the
        //    namespace declaration is then removed outright, and only a
        //    non-standard leftover `xmlns:xlink` gets camelized.
        let markup = markup.replace("xlink:href=", "href=");
        let markup = markup.replace(XLINK_NAMESPACE_DECL, "");
        markup.replace("xmlns:xlink", "xmlnsXlink")
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BASE_CLASS)
    }
}
