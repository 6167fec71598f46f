use itertools::Itertools;
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};
use tracing::{debug, trace};

use crate::{
    utils::{
        config::Config,
        name_mapping::{value_text, NameMapping, AGGREGATE_FIELDS, TYPE_METHODS},
    },
    GeneratorError,
};

/// Alternate labels of the enum values, position `i` labels value `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: String,
    pub values: Vec<String>,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{name: {}, values: [{}]}}", self.name, self.values.iter().join(", "))
    }
}

impl FromStr for Variant {
    type Err = GeneratorError;

    /// Parses `Name:Label1,Label2,...`, splitting on the first `:` only.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (name, labels) = spec
            .split_once(':')
            .ok_or_else(|| GeneratorError::MalformedVariantSpec(spec.to_owned()))?;
        if name.is_empty() {
            return Err(GeneratorError::MalformedVariantSpec(spec.to_owned()));
        }
        Ok(Variant {
            name: name.to_owned(),
            values: labels.split(',').map(str::to_owned).collect(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition {
    pub package: String,
    pub name: String,
    pub values: Vec<String>,
    pub variants: Vec<Variant>,
}

impl EnumDefinition {
    /// Builds and validates a definition from the flat configuration form.
    pub fn parse(
        package: &str,
        name: &str,
        values: &str,
        variant_specs: &[String],
    ) -> Result<Self, GeneratorError> {
        let variants = variant_specs
            .iter()
            .map(|spec| spec.parse::<Variant>())
            .collect::<Result<Vec<_>, _>>()?;

        let definition = EnumDefinition {
            package: package.to_owned(),
            name: name.to_owned(),
            values: match values {
                "" => vec![],
                values => values.split(',').map(str::to_owned).collect(),
            },
            variants,
        };
        definition.validate()?;

        debug!(
            "Enum {} with values [{}] and variants [{}]",
            definition.name,
            definition.values.iter().join(", "),
            definition.variants.iter().join(", ")
        );
        Ok(definition)
    }

    pub fn from_config(config: &Config) -> Result<Self, GeneratorError> {
        EnumDefinition::parse(&config.package, &config.name, &config.values, &config.variants)
    }

    pub fn names(&self) -> NameMapping {
        NameMapping::new(&self.name)
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.name.is_empty() {
            return Err(GeneratorError::EmptyEnumName);
        }
        if self.values.is_empty() {
            return Err(GeneratorError::EmptyValues(self.name.clone()));
        }
        if let Some(position) = self.values.iter().position(|value| value.is_empty()) {
            return Err(GeneratorError::EmptyValueName {
                name: self.name.clone(),
                position,
            });
        }

        let mut texts: HashMap<String, &str> = HashMap::new();
        for value in self.values.iter() {
            let text = value_text(value);
            if let Some(first) = texts.insert(text.clone(), value) {
                return Err(GeneratorError::DuplicateValue {
                    first: first.to_owned(),
                    second: value.clone(),
                    text,
                });
            }
        }

        for variant in self.variants.iter() {
            if variant.values.len() != self.values.len() {
                return Err(GeneratorError::VariantLengthMismatch {
                    variant: variant.name.clone(),
                    expected: self.values.len(),
                    found: variant.values.len(),
                });
            }
            if let Some(label) = variant.values.iter().duplicates().next() {
                return Err(GeneratorError::DuplicateVariantLabel {
                    variant: variant.name.clone(),
                    label: label.clone(),
                });
            }
        }

        self.check_identifiers()
    }

    /// Every derived identifier must be unique within its Go scope.
    fn check_identifiers(&self) -> Result<(), GeneratorError> {
        let names = self.names();

        // the template imports "errors" into the file scope
        let mut package_scope = vec!["errors".to_owned()];
        package_scope.extend(names.identifiers().declarations());
        package_scope.extend(self.values.iter().map(|value| names.value_constant(value)));
        for variant in self.variants.iter() {
            package_scope.push(names.variant_map(&variant.name));
            package_scope.push(names.variant_reverse_map(&variant.name));
            package_scope.push(names.from_variant(&variant.name));
            package_scope.push(names.must_from_variant(&variant.name));
        }

        let mut method_scope: Vec<String> = TYPE_METHODS.iter().map(|m| m.to_string()).collect();
        method_scope.extend(
            self.variants
                .iter()
                .map(|variant| names.variant_accessor(&variant.name)),
        );

        let mut field_scope: Vec<String> = AGGREGATE_FIELDS.iter().map(|f| f.to_string()).collect();
        field_scope.extend(self.values.iter().map(|value| names.value_field(value)));
        for variant in self.variants.iter() {
            field_scope.push(names.variant_from_field(&variant.name));
            field_scope.push(names.variant_must_from_field(&variant.name));
        }

        ensure_unique("package scope", package_scope)?;
        ensure_unique(&format!("methods of {}", names.type_name()), method_scope)?;
        ensure_unique(&format!("fields of {}", names.identifiers().instance_type), field_scope)
    }
}

fn ensure_unique(scope: &str, identifiers: Vec<String>) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for identifier in identifiers {
        if !seen.insert(identifier.clone()) {
            return Err(GeneratorError::IdentifierCollision {
                scope: scope.to_owned(),
                identifier,
            });
        }
    }
    trace!("{} identifiers in {} are unique", seen.len(), scope);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_values_and_variants() {
        let definition =
            EnumDefinition::parse("enums", "Status", "Ok,Fail", &specs(&["Code:0,1", "Label:fine,broken"]))
                .unwrap();
        assert_eq!(definition.values, vec!["Ok", "Fail"]);
        assert_eq!(
            definition.variants,
            vec![
                Variant {
                    name: "Code".to_owned(),
                    values: vec!["0".to_owned(), "1".to_owned()]
                },
                Variant {
                    name: "Label".to_owned(),
                    values: vec!["fine".to_owned(), "broken".to_owned()]
                },
            ]
        );
    }

    #[test]
    fn test_variant_splits_on_first_colon() {
        let variant: Variant = "Time:1:00,2:00".parse().unwrap();
        assert_eq!(variant.name, "Time");
        assert_eq!(variant.values, vec!["1:00", "2:00"]);
    }

    #[test]
    fn test_variant_without_separator() {
        let result = "Code".parse::<Variant>();
        assert!(matches!(result, Err(GeneratorError::MalformedVariantSpec(spec)) if spec == "Code"));
        assert!(matches!(
            ":a,b".parse::<Variant>(),
            Err(GeneratorError::MalformedVariantSpec(_))
        ));
    }

    #[test]
    fn test_variant_display() {
        let variant: Variant = "Code:0,1".parse().unwrap();
        assert_eq!(variant.to_string(), "{name: Code, values: [0, 1]}");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let definition = EnumDefinition::parse("enums", "Color", "Red, Green", &[]).unwrap();
        assert_eq!(definition.values, vec!["Red", " Green"]);
    }

    #[test]
    fn test_empty_values_rejected() {
        let result = EnumDefinition::parse("enums", "Color", "", &[]);
        assert!(matches!(result, Err(GeneratorError::EmptyValues(_))));
    }

    #[test]
    fn test_empty_value_name_rejected() {
        let result = EnumDefinition::parse("enums", "Color", "Red,,Blue", &[]);
        assert!(matches!(
            result,
            Err(GeneratorError::EmptyValueName { position: 1, .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = EnumDefinition::parse("enums", "", "Red", &[]);
        assert!(matches!(result, Err(GeneratorError::EmptyEnumName)));
    }

    #[test]
    fn test_duplicate_values_rejected() {
        let result = EnumDefinition::parse("enums", "Color", "Red,Green,red", &[]);
        assert!(matches!(
            result,
            Err(GeneratorError::DuplicateValue { first, second, text })
                if first == "Red" && second == "red" && text == "RED"
        ));
    }

    #[test]
    fn test_variant_length_mismatch_rejected() {
        let result = EnumDefinition::parse("enums", "Status", "Ok,Fail", &specs(&["Code:0"]));
        assert!(matches!(
            result,
            Err(GeneratorError::VariantLengthMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_variant_label_rejected() {
        let result = EnumDefinition::parse("enums", "Status", "Ok,Fail,Skip", &specs(&["Code:0,1,0"]));
        assert!(matches!(
            result,
            Err(GeneratorError::DuplicateVariantLabel { label, .. }) if label == "0"
        ));
    }

    #[test]
    fn test_variant_name_collisions_rejected() {
        let result = EnumDefinition::parse("enums", "Status", "Ok,Fail", &specs(&["code:0,1", "Code:a,b"]));
        assert!(matches!(
            result,
            Err(GeneratorError::IdentifierCollision { identifier, .. }) if identifier == "statusCodeMap"
        ));

        let result = EnumDefinition::parse("enums", "Status", "Ok,Fail", &specs(&["String:a,b"]));
        assert!(matches!(result, Err(GeneratorError::IdentifierCollision { .. })));
    }

    #[test]
    fn test_value_field_collision_rejected() {
        let result = EnumDefinition::parse("enums", "Color", "Red,count", &[]);
        assert!(matches!(
            result,
            Err(GeneratorError::IdentifierCollision { identifier, .. }) if identifier == "Count"
        ));
    }

    #[test]
    fn test_uncased_enum_name_rejected() {
        let result = EnumDefinition::parse("enums", "_color", "Red", &[]);
        assert!(matches!(
            result,
            Err(GeneratorError::IdentifierCollision { identifier, .. }) if identifier == "_color"
        ));
    }

    #[test]
    fn test_enum_name_shadowing_errors_import_rejected() {
        let result = EnumDefinition::parse("enums", "Errors", "A,B", &[]);
        assert!(matches!(
            result,
            Err(GeneratorError::IdentifierCollision { identifier, .. }) if identifier == "errors"
        ));
    }

    #[test]
    fn test_empty_values_checked_before_variants() {
        let result = EnumDefinition::parse("enums", "Status", "", &specs(&["Code:0"]));
        assert!(matches!(result, Err(GeneratorError::EmptyValues(name)) if name == "Status"));
    }

    #[test]
    fn test_validate_constructed_definition() {
        let definition = EnumDefinition {
            package: "enums".to_owned(),
            name: String::new(),
            values: vec!["A".to_owned()],
            variants: vec![],
        };
        assert!(matches!(definition.validate(), Err(GeneratorError::EmptyEnumName)));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            name: "Color".to_owned(),
            values: "Red,Green,Blue".to_owned(),
            ..Config::default()
        };
        let definition = EnumDefinition::from_config(&config).unwrap();
        assert_eq!(definition.package, "enums");
        assert_eq!(definition.values.len(), 3);
        assert!(definition.variants.is_empty());
    }
}
