//! Vacancy predicates: which nodes count as semantically empty after
//! normalization and may be removed by their parent.
//!
//! Each prunable kind lists the fields that constitute its payload; the node
//! is vacant when every listed field is absent. Mandatory enums and other
//! always-present values carry no information on their own and are left off
//! the lists. Kinds that never prune (the environment, identifiables, asset
//! information, and the kinds whose mandatory references get re-synthesized)
//! have no entry here. Keys, references, language strings, operation
//! variables, and value/reference pairs are decided structurally by the
//! passes that rebuild them.

use crate::model::common::{
    AdministrativeInformation, Extension, Qualifier, Resource, SpecificAssetId,
};
use crate::model::concept::{EmbeddedDataSpecification, ValueList};
use crate::model::element::{
    Blob, Capability, Entity, File, MultiLanguageProperty, Operation, Property, Range,
    ReferenceElement, SubmodelElementCollection, SubmodelElementList,
};

/// Nodes that may disappear when normalization leaves nothing behind.
pub trait Vacant {
    fn is_vacant(&self) -> bool;
}

/// Absence for the two shapes an optional field takes in the model.
trait Absent {
    fn is_absent(&self) -> bool;
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Absent for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! vacant_when_all_absent {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl Vacant for $ty {
            fn is_vacant(&self) -> bool {
                $(self.$field.is_absent())&&+
            }
        }
    };
}

vacant_when_all_absent!(Property {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
    value_id,
});

vacant_when_all_absent!(MultiLanguageProperty {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
    value_id,
});

vacant_when_all_absent!(Range {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    min,
    max,
});

vacant_when_all_absent!(Blob {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
    content_type,
});

vacant_when_all_absent!(File {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
    content_type,
});

vacant_when_all_absent!(ReferenceElement {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
});

vacant_when_all_absent!(Operation {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    input_variables,
    output_variables,
    inout_variables,
});

vacant_when_all_absent!(Capability {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
});

vacant_when_all_absent!(Entity {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    statements,
    global_asset_id,
    specific_asset_ids,
});

vacant_when_all_absent!(SubmodelElementCollection {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    value,
});

vacant_when_all_absent!(SubmodelElementList {
    extensions,
    category,
    id_short,
    display_name,
    description,
    semantic_id,
    supplemental_semantic_ids,
    qualifiers,
    embedded_data_specifications,
    order_relevant,
    semantic_id_list_element,
    value_type_list_element,
    value,
});

vacant_when_all_absent!(SpecificAssetId {
    semantic_id,
    supplemental_semantic_ids,
    name,
    value,
    external_subject_id,
});

vacant_when_all_absent!(Resource { path, content_type });

vacant_when_all_absent!(AdministrativeInformation {
    embedded_data_specifications,
    version,
    revision,
    creator,
    template_id,
});

vacant_when_all_absent!(Extension {
    semantic_id,
    supplemental_semantic_ids,
    name,
    value_type,
    value,
    refers_to,
});

vacant_when_all_absent!(Qualifier {
    semantic_id,
    supplemental_semantic_ids,
    kind,
    qualifier_type,
    value,
    value_id,
});

vacant_when_all_absent!(EmbeddedDataSpecification {
    data_specification,
    data_specification_content,
});

vacant_when_all_absent!(ValueList {
    value_reference_pairs
});
