//! Concept descriptions and embedded data specifications (IEC 61360).

use serde::{Serialize, Deserialize};

use crate::model::common::{
    AdministrativeInformation, Extension, LangString, Reference,
};

/// IRI of the IEC 61360 data specification template. Used when a
/// specification reference has to be reconstructed from its content.
pub const IEC_61360_TEMPLATE_IRI: &str =
    "https://admin-shell.io/DataSpecificationTemplates/DataSpecificationIec61360/3/0";

/// Standalone definition of a concept, referenced by semantic ids elsewhere
/// in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConceptDescription {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub administration: Option<AdministrativeInformation>,
    pub id: String,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub is_case_of: Vec<Reference>,
}

impl ConceptDescription {
    pub fn new(id: impl Into<String>) -> Self {
        ConceptDescription {
            id: id.into(),
            ..ConceptDescription::default()
        }
    }
}

/// Pairing of a data specification template reference with inline content.
///
/// Both halves are optional on input; normalization backfills a missing
/// reference when content is present and prunes the pair when both are gone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmbeddedDataSpecification {
    pub data_specification: Option<Reference>,
    pub data_specification_content: Option<DataSpecificationContent>,
}

/// Content variants for an embedded data specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSpecificationContent {
    Iec61360(DataSpecificationIec61360),
}

/// Data types defined by IEC 61360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataTypeIec61360 {
    Blob,
    Boolean,
    Date,
    File,
    Html,
    IntegerCount,
    IntegerCurrency,
    IntegerMeasure,
    Irdi,
    Iri,
    Rational,
    RationalMeasure,
    RealCount,
    RealCurrency,
    RealMeasure,
    #[default]
    String,
    StringTranslatable,
    Time,
    Timestamp,
}

/// Property definition following the IEC 61360 template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataSpecificationIec61360 {
    pub preferred_name: Vec<LangString>,
    pub short_name: Vec<LangString>,
    pub unit: Option<String>,
    pub unit_id: Option<Reference>,
    pub source_of_definition: Option<String>,
    pub symbol: Option<String>,
    pub data_type: Option<DataTypeIec61360>,
    pub definition: Vec<LangString>,
    pub value_format: Option<String>,
    pub value_list: Option<ValueList>,
    pub value: Option<String>,
    pub level_type: Option<LevelType>,
}

/// Enumerated value domain of an IEC 61360 property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueList {
    pub value_reference_pairs: Vec<ValueReferencePair>,
}

/// One admissible value together with its defining reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueReferencePair {
    pub value: Option<String>,
    pub value_id: Reference,
}

/// Which level characteristics (min/nom/typ/max) an IEC 61360 property
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelType {
    pub min: bool,
    pub nom: bool,
    pub typ: bool,
    pub max: bool,
}
