//! In-memory model of an AAS environment.
//!
//! The kinds form a closed set: polymorphic positions are enums, so a pass
//! that matches on them is checked for exhaustiveness at compile time.

use std::fmt;

use serde::{Serialize, Deserialize};

pub mod common;
pub mod concept;
pub mod element;
pub mod prune;
pub mod shell;

pub use common::*;
pub use concept::*;
pub use element::*;
pub use prune::Vacant;
pub use shell::*;

/// Discriminator naming every node kind, for diagnostics and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    AdministrativeInformation,
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    AssetInformation,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataSpecificationIec61360,
    EmbeddedDataSpecification,
    Entity,
    Environment,
    Extension,
    File,
    Key,
    LangString,
    LevelType,
    MultiLanguageProperty,
    Operation,
    OperationVariable,
    Property,
    Qualifier,
    Range,
    Reference,
    ReferenceElement,
    RelationshipElement,
    Resource,
    SpecificAssetId,
    Submodel,
    SubmodelElementCollection,
    SubmodelElementList,
    ValueList,
    ValueReferencePair,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::AdministrativeInformation => "AdministrativeInformation",
            NodeKind::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            NodeKind::AssetAdministrationShell => "AssetAdministrationShell",
            NodeKind::AssetInformation => "AssetInformation",
            NodeKind::BasicEventElement => "BasicEventElement",
            NodeKind::Blob => "Blob",
            NodeKind::Capability => "Capability",
            NodeKind::ConceptDescription => "ConceptDescription",
            NodeKind::DataSpecificationIec61360 => "DataSpecificationIec61360",
            NodeKind::EmbeddedDataSpecification => "EmbeddedDataSpecification",
            NodeKind::Entity => "Entity",
            NodeKind::Environment => "Environment",
            NodeKind::Extension => "Extension",
            NodeKind::File => "File",
            NodeKind::Key => "Key",
            NodeKind::LangString => "LangString",
            NodeKind::LevelType => "LevelType",
            NodeKind::MultiLanguageProperty => "MultiLanguageProperty",
            NodeKind::Operation => "Operation",
            NodeKind::OperationVariable => "OperationVariable",
            NodeKind::Property => "Property",
            NodeKind::Qualifier => "Qualifier",
            NodeKind::Range => "Range",
            NodeKind::Reference => "Reference",
            NodeKind::ReferenceElement => "ReferenceElement",
            NodeKind::RelationshipElement => "RelationshipElement",
            NodeKind::Resource => "Resource",
            NodeKind::SpecificAssetId => "SpecificAssetId",
            NodeKind::Submodel => "Submodel",
            NodeKind::SubmodelElementCollection => "SubmodelElementCollection",
            NodeKind::SubmodelElementList => "SubmodelElementList",
            NodeKind::ValueList => "ValueList",
            NodeKind::ValueReferencePair => "ValueReferencePair",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
