use tracing::trace;

use crate::utils::name_mapping::{value_text, EnumIdentifiers};

use super::definition::EnumDefinition;

/// One value of the enum as it appears in every generated table.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberEntry {
    pub constant: String,
    pub field: String,
    pub text: String,
    /// 1-based, 0 is the unset sentinel
    pub ordinal: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantEntry {
    pub constant: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantTables {
    pub name: String,
    pub map: String,
    pub reverse_map: String,
    pub from: String,
    pub must_from: String,
    pub accessor: String,
    pub from_field: String,
    pub must_from_field: String,
    pub entries: Vec<VariantEntry>,
}

/// Everything the emitted artifact declares, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTables {
    pub ids: EnumIdentifiers,
    pub count: usize,
    pub members: Vec<MemberEntry>,
    pub variants: Vec<VariantTables>,
}

impl EnumTables {
    pub fn from_definition(definition: &EnumDefinition) -> Self {
        let names = definition.names();

        let members: Vec<MemberEntry> = definition
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| MemberEntry {
                constant: names.value_constant(value),
                field: names.value_field(value),
                text: value_text(value),
                ordinal: index + 1,
            })
            .collect();

        let variants = definition
            .variants
            .iter()
            .map(|variant| {
                trace!("Building tables for variant {}", variant);
                VariantTables {
                    name: variant.name.clone(),
                    map: names.variant_map(&variant.name),
                    reverse_map: names.variant_reverse_map(&variant.name),
                    from: names.from_variant(&variant.name),
                    must_from: names.must_from_variant(&variant.name),
                    accessor: names.variant_accessor(&variant.name),
                    from_field: names.variant_from_field(&variant.name),
                    must_from_field: names.variant_must_from_field(&variant.name),
                    entries: members
                        .iter()
                        .zip(variant.values.iter())
                        .map(|(member, label)| VariantEntry {
                            constant: member.constant.clone(),
                            label: label.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        EnumTables {
            ids: names.identifiers(),
            count: members.len(),
            members,
            variants,
        }
    }
}
