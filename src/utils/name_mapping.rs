/// Upper-cases the first character of `name`, leaving the rest untouched.
pub fn cap_upper(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character of `name`, leaving the rest untouched.
pub fn cap_lower(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text a value is looked up by in the string maps.
pub fn value_text(value: &str) -> String {
    value.to_uppercase()
}

/// Identifiers that depend on the enum name only.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumIdentifiers {
    pub type_name: String,
    pub error: String,
    pub string_map: String,
    pub reverse_string_map: String,
    pub from_string: String,
    pub must_from_string: String,
    pub ordinal_map: String,
    pub reverse_ordinal_map: String,
    pub from_ordinal: String,
    pub must_from_ordinal: String,
    pub count: String,
    pub values: String,
    pub instance: String,
    pub instance_type: String,
}

/// Derives every generated Go identifier of one enum.
#[derive(Clone, Debug, PartialEq)]
pub struct NameMapping {
    upper: String,
    lower: String,
}

impl NameMapping {
    pub fn new(enum_name: &str) -> Self {
        NameMapping {
            upper: cap_upper(enum_name),
            lower: cap_lower(enum_name),
        }
    }

    pub fn type_name(&self) -> String {
        format!("{}T", self.upper)
    }

    pub fn error_name(&self) -> String {
        format!("ErrInvalid{}", self.upper)
    }

    pub fn value_constant(&self, value: &str) -> String {
        format!("{}_{}_v", self.lower, cap_lower(value))
    }

    pub fn value_field(&self, value: &str) -> String {
        cap_upper(value)
    }

    pub fn variant_map(&self, variant: &str) -> String {
        format!("{}{}Map", self.lower, cap_upper(variant))
    }

    pub fn variant_reverse_map(&self, variant: &str) -> String {
        format!("{}Reverse{}Map", self.lower, cap_upper(variant))
    }

    pub fn from_variant(&self, variant: &str) -> String {
        format!("{}From{}", self.lower, cap_upper(variant))
    }

    pub fn must_from_variant(&self, variant: &str) -> String {
        format!("must{}From{}", self.upper, cap_upper(variant))
    }

    pub fn variant_accessor(&self, variant: &str) -> String {
        cap_upper(variant)
    }

    pub fn variant_from_field(&self, variant: &str) -> String {
        format!("From{}", cap_upper(variant))
    }

    pub fn variant_must_from_field(&self, variant: &str) -> String {
        format!("MustFrom{}", cap_upper(variant))
    }

    pub fn identifiers(&self) -> EnumIdentifiers {
        EnumIdentifiers {
            type_name: self.type_name(),
            error: self.error_name(),
            string_map: format!("{}StringMap", self.lower),
            reverse_string_map: format!("{}ReverseStringMap", self.lower),
            from_string: format!("{}FromString", self.lower),
            must_from_string: format!("must{}FromString", self.upper),
            ordinal_map: format!("{}OrdinalMap", self.lower),
            reverse_ordinal_map: format!("{}ReverseOrdinalMap", self.lower),
            from_ordinal: format!("{}FromOrdinal", self.lower),
            must_from_ordinal: format!("must{}FromOrdinal", self.upper),
            count: format!("{}Count", self.lower),
            values: format!("{}Values", self.lower),
            instance: self.upper.clone(),
            instance_type: self.lower.clone(),
        }
    }
}

impl EnumIdentifiers {
    /// Package level declarations that exist regardless of values and variants.
    pub fn declarations(&self) -> Vec<String> {
        vec![
            self.type_name.clone(),
            self.error.clone(),
            self.string_map.clone(),
            self.reverse_string_map.clone(),
            self.from_string.clone(),
            self.must_from_string.clone(),
            self.ordinal_map.clone(),
            self.reverse_ordinal_map.clone(),
            self.from_ordinal.clone(),
            self.must_from_ordinal.clone(),
            self.count.clone(),
            self.values.clone(),
            self.instance.clone(),
            self.instance_type.clone(),
        ]
    }
}

/// Methods always defined on the enum type.
pub const TYPE_METHODS: [&str; 2] = ["String", "Ordinal"];

/// Fields always present on the aggregate struct.
pub const AGGREGATE_FIELDS: [&str; 6] = [
    "Count",
    "Values",
    "FromString",
    "MustFromString",
    "FromOrdinal",
    "MustFromOrdinal",
];
