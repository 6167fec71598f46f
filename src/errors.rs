use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid config {0} {1}")]
    ConfigError(String, String),
    #[error("Enum name must not be empty")]
    EmptyEnumName,
    #[error("No values given for enum {0}")]
    EmptyValues(String),
    #[error("Value at position {position} of enum {name} is empty")]
    EmptyValueName { name: String, position: usize },
    #[error("Malformed variant spec \"{0}\", expected Name:Label1,Label2,...")]
    MalformedVariantSpec(String),
    #[error("Variant {variant} has {found} labels but enum has {expected} values")]
    VariantLengthMismatch {
        variant: String,
        expected: usize,
        found: usize,
    },
    #[error("Values {first} and {second} both map to {text}")]
    DuplicateValue {
        first: String,
        second: String,
        text: String,
    },
    #[error("Variant {variant} repeats label \"{label}\"")]
    DuplicateVariantLabel { variant: String, label: String },
    #[error("Identifier {identifier} is generated twice in {scope}")]
    IdentifierCollision { scope: String, identifier: String },
    #[error("Failed to generated {0} code {1}")]
    CodeGenerationError(String, String),
    #[error("Unable to create file {0} {1}")]
    FileCreationError(String, String),
    #[error("Unable to write file {0} {1}")]
    FileWriteError(String, String),
    #[error("Formatter {0} failed {1}")]
    FormatterError(String, String),
}
