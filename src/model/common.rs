//! Shared value types used across the AAS meta-model: references, keys,
//! language strings, qualifiers, extensions, and the XSD value-type lattice.

use serde::{Serialize, Deserialize};

/// A single text entry tagged with an ISO 639-1 language code.
///
/// One shape serves every textual role in the model (display names,
/// descriptions, IEC 61360 preferred/short names and definitions).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LangString {
    pub language: String,
    pub text: String,
}

impl LangString {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        LangString {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Kind discriminator for a [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyType {
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    #[default]
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

/// One step of a reference chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Key {
    pub key_type: KeyType,
    pub value: String,
}

impl Key {
    pub fn new(key_type: KeyType, value: impl Into<String>) -> Self {
        Key {
            key_type,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceType {
    #[default]
    ExternalReference,
    ModelReference,
}

/// A typed chain of keys pointing at a model element or an external entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reference {
    pub reference_type: ReferenceType,
    pub referred_semantic_id: Option<Box<Reference>>,
    pub keys: Vec<Key>,
}

impl Reference {
    pub fn new(reference_type: ReferenceType, keys: Vec<Key>) -> Self {
        Reference {
            reference_type,
            referred_semantic_id: None,
            keys,
        }
    }

    /// Shorthand for an external reference with a single global key.
    pub fn external(value: impl Into<String>) -> Self {
        Reference::new(
            ReferenceType::ExternalReference,
            vec![Key::new(KeyType::GlobalReference, value)],
        )
    }
}

/// Extra metadata attached to a referable element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extension {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub name: Option<String>,
    pub value_type: Option<DataTypeXsd>,
    pub value: Option<String>,
    pub refers_to: Vec<Reference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QualifierKind {
    #[default]
    ConceptQualifier,
    TemplateQualifier,
    ValueQualifier,
}

/// A typed constraint on an element's value or concept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Qualifier {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub kind: Option<QualifierKind>,
    pub qualifier_type: Option<String>,
    pub value_type: DataTypeXsd,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

/// A named identifier bound to an asset within some subject's scope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecificAssetId {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub external_subject_id: Option<Reference>,
}

/// Versioning metadata for identifiable elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdministrativeInformation {
    pub embedded_data_specifications: Vec<crate::model::concept::EmbeddedDataSpecification>,
    pub version: Option<String>,
    pub revision: Option<String>,
    pub creator: Option<Reference>,
    pub template_id: Option<String>,
}

/// A file or network resource addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resource {
    pub path: Option<String>,
    pub content_type: Option<String>,
}

/// XSD atomic types usable as element value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataTypeXsd {
    AnyUri,
    Base64Binary,
    Boolean,
    Byte,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    GDay,
    GMonth,
    GMonthDay,
    GYear,
    GYearMonth,
    HexBinary,
    Int,
    Integer,
    Long,
    NegativeInteger,
    NonNegativeInteger,
    NonPositiveInteger,
    PositiveInteger,
    Short,
    #[default]
    String,
    Time,
    UnsignedByte,
    UnsignedInt,
    UnsignedLong,
    UnsignedShort,
}

impl DataTypeXsd {
    /// True for the integral types, whose lexical values canonicalize
    /// through integer parsing.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            DataTypeXsd::Byte
                | DataTypeXsd::Int
                | DataTypeXsd::Integer
                | DataTypeXsd::Long
                | DataTypeXsd::NegativeInteger
                | DataTypeXsd::NonNegativeInteger
                | DataTypeXsd::NonPositiveInteger
                | DataTypeXsd::PositiveInteger
                | DataTypeXsd::Short
                | DataTypeXsd::UnsignedByte
                | DataTypeXsd::UnsignedInt
                | DataTypeXsd::UnsignedLong
                | DataTypeXsd::UnsignedShort
        )
    }

    /// True for the floating-point types, whose lexical values
    /// canonicalize through `f64` parsing.
    pub fn is_floating(self) -> bool {
        matches!(self, DataTypeXsd::Decimal | DataTypeXsd::Double | DataTypeXsd::Float)
    }
}
