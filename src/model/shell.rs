//! The identifiable top-level containers: shells, submodels, and the
//! environment that holds them.

use serde::{Serialize, Deserialize};

use crate::model::common::{
    AdministrativeInformation, Extension, LangString, Qualifier, Reference, Resource,
    SpecificAssetId,
};
use crate::model::concept::{ConceptDescription, EmbeddedDataSpecification};
use crate::model::element::SubmodelElement;

/// Root container of a transferable document: all identifiable elements,
/// each list in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub asset_administration_shells: Vec<AssetAdministrationShell>,
    pub submodels: Vec<Submodel>,
    pub concept_descriptions: Vec<ConceptDescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssetKind {
    #[default]
    Instance,
    NotApplicable,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModellingKind {
    #[default]
    Instance,
    Template,
}

/// The administration shell of one asset, tying asset identification to the
/// submodels describing it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetAdministrationShell {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub administration: Option<AdministrativeInformation>,
    pub id: String,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub derived_from: Option<Reference>,
    pub asset_information: AssetInformation,
    pub submodels: Vec<Reference>,
}

impl AssetAdministrationShell {
    pub fn new(id: impl Into<String>) -> Self {
        AssetAdministrationShell {
            id: id.into(),
            ..AssetAdministrationShell::default()
        }
    }
}

/// Identification of the asset a shell describes. Always present on a
/// shell, even when all of its own fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetInformation {
    pub asset_kind: AssetKind,
    pub global_asset_id: Option<String>,
    pub specific_asset_ids: Vec<SpecificAssetId>,
    pub asset_type: Option<String>,
    pub default_thumbnail: Option<Resource>,
}

/// A self-contained aspect model: the grouping unit for submodel elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Submodel {
    pub extensions: Vec<Extension>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Vec<LangString>,
    pub description: Vec<LangString>,
    pub administration: Option<AdministrativeInformation>,
    pub id: String,
    pub kind: Option<ModellingKind>,
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Vec<Reference>,
    pub qualifiers: Vec<Qualifier>,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub submodel_elements: Vec<SubmodelElement>,
}

impl Submodel {
    pub fn new(id: impl Into<String>) -> Self {
        Submodel {
            id: id.into(),
            ..Submodel::default()
        }
    }
}
