//! The submodel element kinds and their polymorphic wrapper.
//!
//! Every concrete kind is a plain struct; [`SubmodelElement`] is the closed
//! set of variants that may sit in a polymorphic child position. Capability
//! differences between kinds show up as differences in their field lists,
//! never as subtyping.

use serde::{Serialize, Deserialize};

use crate::model::NodeKind;
use crate::model::common::{
    DataTypeXsd, Extension, LangString, Qualifier, Reference, SpecificAssetId,
};
use crate::model::concept::EmbeddedDataSpecification;

/// A data element with a single typed value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Property {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value_type: DataTypeXsd,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

/// A data element whose value is a set of language-tagged strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiLanguageProperty {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value: Vec<LangString>,
    pub value_id: Option<Reference>,
}

/// A data element describing a value range with optional open ends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value_type: DataTypeXsd,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// A data element holding a byte payload inline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Blob {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value: Option<Vec<u8>>,
    pub content_type: Option<String>,
}

/// A data element pointing at file content by path or URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct File {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value: Option<String>,
    pub content_type: Option<String>,
}

/// A data element whose value is itself a reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceElement {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value: Option<Reference>,
}

/// A directed relationship between two referable elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationshipElement {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub first: Reference,
    pub second: Reference,
}

/// A relationship annotated with additional data elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotatedRelationshipElement {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub first: Reference,
    pub second: Reference,
    pub annotations: Vec<SubmodelElement>,
}

/// An invokable element with typed input, output, and in/out variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Operation {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub input_variables: Vec<OperationVariable>,
    pub output_variables: Vec<OperationVariable>,
    pub inout_variables: Vec<OperationVariable>,
}

/// Wrapper carrying one element in an operation signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationVariable {
    pub value: SubmodelElement,
}

impl OperationVariable {
    pub fn new(value: SubmodelElement) -> Self {
        OperationVariable { value }
    }
}

/// A marker element asserting an ability of the asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capability {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityType {
    CoManagedEntity,
    #[default]
    SelfManagedEntity,
}

/// An element describing a (sub-)asset and the statements made about it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub statements: Vec<SubmodelElement>,
    pub entity_type: EntityType,
    pub global_asset_id: Option<String>,
    pub specific_asset_ids: Vec<SpecificAssetId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventDirection {
    #[default]
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventState {
    #[default]
    Off,
    On,
}

/// An event source or sink observing another referable element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicEventElement {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub observed: Reference,
    pub direction: EventDirection,
    pub state: EventState,
    pub message_topic: Option<String>,
    pub message_broker: Option<Reference>,
    pub last_update: Option<String>,
    pub min_interval: Option<String>,
    pub max_interval: Option<String>,
}

/// An unordered group of named child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmodelElementCollection {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub value: Vec<SubmodelElement>,
}

/// Element kinds admissible as entries of a [`SubmodelElementList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AasSubmodelElements {
    AnnotatedRelationshipElement,
    BasicEventElement,
    Blob,
    Capability,
    DataElement,
    Entity,
    EventElement,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    #[default]
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

/// An ordered list of homogeneously typed child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmodelElementList {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub order_relevant: Option<bool>,
    pub semantic_id_list_element: Option<Reference>,
    pub type_value_list_element: AasSubmodelElements,
    pub value_type_list_element: Option<DataTypeXsd>,
    pub value: Vec<SubmodelElement>,
}

/// The closed set of element kinds that may appear in a polymorphic child
/// position (submodel contents, collections, lists, annotations, entity
/// statements, operation variables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmodelElement {
    Property(Property),
    MultiLanguageProperty(MultiLanguageProperty),
    Range(Range),
    Blob(Blob),
    File(File),
    ReferenceElement(ReferenceElement),
    RelationshipElement(RelationshipElement),
    AnnotatedRelationshipElement(AnnotatedRelationshipElement),
    Operation(Operation),
    Capability(Capability),
    Entity(Entity),
    BasicEventElement(BasicEventElement),
    SubmodelElementCollection(SubmodelElementCollection),
    SubmodelElementList(SubmodelElementList),
}

impl SubmodelElement {
    pub fn kind(&self) -> NodeKind {
        match self {
            SubmodelElement::Property(_) => NodeKind::Property,
            SubmodelElement::MultiLanguageProperty(_) => NodeKind::MultiLanguageProperty,
            SubmodelElement::Range(_) => NodeKind::Range,
            SubmodelElement::Blob(_) => NodeKind::Blob,
            SubmodelElement::File(_) => NodeKind::File,
            SubmodelElement::ReferenceElement(_) => NodeKind::ReferenceElement,
            SubmodelElement::RelationshipElement(_) => NodeKind::RelationshipElement,
            SubmodelElement::AnnotatedRelationshipElement(_) => {
                NodeKind::AnnotatedRelationshipElement
            }
            SubmodelElement::Operation(_) => NodeKind::Operation,
            SubmodelElement::Capability(_) => NodeKind::Capability,
            SubmodelElement::Entity(_) => NodeKind::Entity,
            SubmodelElement::BasicEventElement(_) => NodeKind::BasicEventElement,
            SubmodelElement::SubmodelElementCollection(_) => NodeKind::SubmodelElementCollection,
            SubmodelElement::SubmodelElementList(_) => NodeKind::SubmodelElementList,
        }
    }

    pub fn id_short(&self) -> Option<&str> {
        match self {
            SubmodelElement::Property(e) => e.id_short.as_deref(),
            SubmodelElement::MultiLanguageProperty(e) => e.id_short.as_deref(),
            SubmodelElement::Range(e) => e.id_short.as_deref(),
            SubmodelElement::Blob(e) => e.id_short.as_deref(),
            SubmodelElement::File(e) => e.id_short.as_deref(),
            SubmodelElement::ReferenceElement(e) => e.id_short.as_deref(),
            SubmodelElement::RelationshipElement(e) => e.id_short.as_deref(),
            SubmodelElement::AnnotatedRelationshipElement(e) => e.id_short.as_deref(),
            SubmodelElement::Operation(e) => e.id_short.as_deref(),
            SubmodelElement::Capability(e) => e.id_short.as_deref(),
            SubmodelElement::Entity(e) => e.id_short.as_deref(),
            SubmodelElement::BasicEventElement(e) => e.id_short.as_deref(),
            SubmodelElement::SubmodelElementCollection(e) => e.id_short.as_deref(),
            SubmodelElement::SubmodelElementList(e) => e.id_short.as_deref(),
        }
    }
}
