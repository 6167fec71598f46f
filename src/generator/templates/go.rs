use askama::Template;
use tracing::info;

use crate::generator::{definition::EnumDefinition, tables::EnumTables};
use crate::GeneratorError;

#[derive(Template)]
#[template(path = "go/enum.j2", escape = "none")]
pub struct GoEnumTemplate<'a> {
    pub package: &'a str,
    pub tables: &'a EnumTables,
}

mod filters {
    /// Renders `value` as a Go interpreted string literal.
    pub fn go_quote<T: std::fmt::Display>(value: T) -> ::askama::Result<String> {
        Ok(super::go_string_literal(&value.to_string()))
    }
}

pub fn go_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                literal.push_str(&format!("\\x{:02x}", c as u32))
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

pub fn render_enum_definition(definition: &EnumDefinition) -> Result<String, GeneratorError> {
    let tables = EnumTables::from_definition(definition);
    info!(
        "Rendering {} with {} values and {} variants",
        tables.ids.type_name,
        tables.count,
        tables.variants.len()
    );

    let mut code = GoEnumTemplate {
        package: &definition.package,
        tables: &tables,
    }
    .render()
    .map_err(|err| GeneratorError::CodeGenerationError(definition.name.clone(), err.to_string()))?;

    if !code.ends_with('\n') {
        code.push('\n');
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_string_literal() {
        assert_eq!(go_string_literal("RED"), "\"RED\"");
        assert_eq!(go_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(go_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(go_string_literal("tab\there"), "\"tab\\there\"");
        assert_eq!(go_string_literal("\u{1}"), "\"\\x01\"");
        assert_eq!(go_string_literal("ünï"), "\"ünï\"");
    }
}
