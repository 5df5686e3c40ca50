//! Component boilerplate wrapped around the transformed markup
//!
//! The output document is a TSX module: an import of the `cn` class-joining
//! utility, a props interface with a single optional `className`, and an
//! exported function component returning the markup in parentheses.

/// Embed transformed markup into the component wrapper
///
/// The markup is inserted verbatim; the props interface name is derived from
/// the component name.
pub fn wrap_component(markup: &str, component_name: &str) -> String {
    format!(
        "import {{ cn }} from '@/lib/utils';\n\
         \n\
         interface {name}Props {{\n\
         {indent}className?: string;\n\
         }}\n\
         \n\
         export function {name}({{ className }}: {name}Props) {{\n\
         {indent}return (\n\
         {indent}{indent}{markup}\n\
         {indent});\n\
         }}\n",
        name = component_name,
        indent = "  ",
        markup = markup
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrapper_shape() {
        let out = wrap_component("<svg><path/></svg>", "Logo");
        assert_eq!(
            out,
            "import { cn } from '@/lib/utils';\n\
             \n\
             interface LogoProps {\n\
             \x20 className?: string;\n\
             }\n\
             \n\
             export function Logo({ className }: LogoProps) {\n\
             \x20 return (\n\
             \x20   <svg><path/></svg>\n\
             \x20 );\n\
             }\n"
        );
    }

    #[test]
    fn test_component_name_flows_into_interface() {
        let out = wrap_component("<svg/>", "BrandMark");
        assert!(out.contains("interface BrandMarkProps {"));
        assert!(out.contains("export function BrandMark({ className }: BrandMarkProps) {"));
    }

    #[test]
    fn test_markup_embedded_verbatim() {
        let markup = r#"<svg className={cn("h-6 w-auto", className)} fill="currentColor"/>"#;
        let out = wrap_component(markup, "Logo");
        assert!(out.contains(markup));
    }
}
