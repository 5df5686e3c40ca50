//! svg2tsx - Rewrite an SVG icon into an embeddable TSX component
//!
//! This library reads SVG markup, applies an ordered sequence of textual
//! substitutions (recoloring, size stripping, className injection, prolog
//! removal, XLink collapsing), and wraps the result in component boilerplate.
//!
//! # Example
//!
//! ```rust
//! use svg2tsx::{componentize, EmbedConfig};
//!
//! let tsx = componentize(
//!     r##"<svg width="10" height="10" fill="#ffffff"><path/></svg>"##,
//!     &EmbedConfig::default(),
//! );
//! assert!(tsx.contains(r#"fill="currentColor""#));
//! assert!(tsx.contains("export function Logo"));
//! ```

pub mod config;
pub mod error;
pub mod transform;
pub mod wrapper;

pub use config::{ConfigError, EmbedConfig};
pub use error::EmbedError;
pub use transform::Transformer;
pub use wrapper::wrap_component;

use std::fs;

/// Transform SVG markup and wrap it in the component boilerplate
///
/// This is the pure half of the pipeline; no filesystem access happens here.
pub fn componentize(svg: &str, config: &EmbedConfig) -> String {
    let transformer = Transformer::new(&config.base_class);
    let markup = transformer.apply(svg);
    wrapper::wrap_component(&markup, &config.component_name)
}

/// Run the whole pipeline: read the source SVG, transform it, and write the
/// component file
///
/// The destination is overwritten unconditionally. The run is linear with no
/// retries; the first I/O failure aborts it.
pub fn embed(config: &EmbedConfig) -> Result<(), EmbedError> {
    let svg = fs::read_to_string(&config.source).map_err(|e| EmbedError::SourceRead {
        path: config.source.clone(),
        source: e,
    })?;

    let document = componentize(&svg, config);

    fs::write(&config.destination, document).map_err(|e| EmbedError::DestinationWrite {
        path: config.destination.clone(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentize_wraps_transformed_markup() {
        let tsx = componentize(
            r##"<?xml version="1.0"?><svg fill="#ffffff"><path/></svg>"##,
            &EmbedConfig::default(),
        );
        assert!(tsx.starts_with("import { cn } from '@/lib/utils';"));
        assert!(tsx.contains("interface LogoProps {"));
        assert!(tsx.contains(r#"fill="currentColor""#));
        assert!(!tsx.contains("<?xml"));
    }

    #[test]
    fn test_componentize_honors_component_name() {
        let config = EmbedConfig::default().with_component_name("Mark");
        let tsx = componentize("<svg/>", &config);
        assert!(tsx.contains("export function Mark({ className }: MarkProps) {"));
        assert!(!tsx.contains("LogoProps"));
    }

    #[test]
    fn test_embed_missing_source_is_read_error() {
        let config = EmbedConfig::default().with_source("/nonexistent/input.svg");
        let err = embed(&config).unwrap_err();
        assert!(matches!(err, EmbedError::SourceRead { .. }));
    }
}
