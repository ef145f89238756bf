//! Transforming visitor infrastructure for the environment tree.
//!
//! This module provides one trait, [`Transform`], and corresponding `walk_*`
//! functions for traversing an environment by value:
//!
//! - every node kind has a `transform_*` method that consumes the node and
//!   returns the rebuilt node, or `None` where the kind may be removed;
//! - `walk_*` functions perform the default recursion, rebuilding each child
//!   position from the child's transform result. Children whose transform
//!   returns `None` drop out of sequences and optional slots.
//!
//! ## Usage
//!
//! Implement `Transform` for your pass, overriding only the methods you need.
//! Call the corresponding `walk_*` function inside your override to get the
//! default recursion, then adjust or discard the rebuilt node. With no
//! overrides the trait is the identity: it returns the tree unchanged.
//!
//! Two positions are special. Mandatory reference slots (relationship
//! `first`/`second`, event `observed`) fall back to an empty reference when a
//! transform removes the child; a pass that can drop references must restore
//! those slots itself. Operation variables and value/reference pairs follow
//! their mandatory child: when it is removed, the wrapper is removed too.

use crate::model::*;

// ============================================================================
// Transform Trait
// ============================================================================

/// A by-value tree transformation over every node kind.
pub trait Transform: Sized {
    fn transform_environment(&mut self, env: Environment) -> Environment {
        walk_environment(self, env)
    }

    fn transform_asset_administration_shell(
        &mut self,
        shell: AssetAdministrationShell,
    ) -> Option<AssetAdministrationShell> {
        Some(walk_asset_administration_shell(self, shell))
    }

    fn transform_asset_information(&mut self, info: AssetInformation) -> AssetInformation {
        walk_asset_information(self, info)
    }

    fn transform_specific_asset_id(&mut self, id: SpecificAssetId) -> Option<SpecificAssetId> {
        Some(walk_specific_asset_id(self, id))
    }

    fn transform_resource(&mut self, resource: Resource) -> Option<Resource> {
        Some(resource)
    }

    fn transform_submodel(&mut self, submodel: Submodel) -> Option<Submodel> {
        Some(walk_submodel(self, submodel))
    }

    /// Double-dispatch point: routes a polymorphic child to the method for
    /// its concrete kind.
    fn transform_element(&mut self, element: SubmodelElement) -> Option<SubmodelElement> {
        walk_element(self, element)
    }

    fn transform_property(&mut self, property: Property) -> Option<Property> {
        Some(walk_property(self, property))
    }

    fn transform_multi_language_property(
        &mut self,
        property: MultiLanguageProperty,
    ) -> Option<MultiLanguageProperty> {
        Some(walk_multi_language_property(self, property))
    }

    fn transform_range(&mut self, range: Range) -> Option<Range> {
        Some(walk_range(self, range))
    }

    fn transform_blob(&mut self, blob: Blob) -> Option<Blob> {
        Some(walk_blob(self, blob))
    }

    fn transform_file(&mut self, file: File) -> Option<File> {
        Some(walk_file(self, file))
    }

    fn transform_reference_element(
        &mut self,
        element: ReferenceElement,
    ) -> Option<ReferenceElement> {
        Some(walk_reference_element(self, element))
    }

    fn transform_relationship_element(
        &mut self,
        element: RelationshipElement,
    ) -> Option<RelationshipElement> {
        Some(walk_relationship_element(self, element))
    }

    fn transform_annotated_relationship_element(
        &mut self,
        element: AnnotatedRelationshipElement,
    ) -> Option<AnnotatedRelationshipElement> {
        Some(walk_annotated_relationship_element(self, element))
    }

    fn transform_operation(&mut self, operation: Operation) -> Option<Operation> {
        Some(walk_operation(self, operation))
    }

    fn transform_operation_variable(
        &mut self,
        variable: OperationVariable,
    ) -> Option<OperationVariable> {
        walk_operation_variable(self, variable)
    }

    fn transform_capability(&mut self, capability: Capability) -> Option<Capability> {
        Some(walk_capability(self, capability))
    }

    fn transform_entity(&mut self, entity: Entity) -> Option<Entity> {
        Some(walk_entity(self, entity))
    }

    fn transform_basic_event_element(
        &mut self,
        element: BasicEventElement,
    ) -> Option<BasicEventElement> {
        Some(walk_basic_event_element(self, element))
    }

    fn transform_submodel_element_collection(
        &mut self,
        collection: SubmodelElementCollection,
    ) -> Option<SubmodelElementCollection> {
        Some(walk_submodel_element_collection(self, collection))
    }

    fn transform_submodel_element_list(
        &mut self,
        list: SubmodelElementList,
    ) -> Option<SubmodelElementList> {
        Some(walk_submodel_element_list(self, list))
    }

    fn transform_concept_description(
        &mut self,
        concept: ConceptDescription,
    ) -> Option<ConceptDescription> {
        Some(walk_concept_description(self, concept))
    }

    fn transform_embedded_data_specification(
        &mut self,
        eds: EmbeddedDataSpecification,
    ) -> Option<EmbeddedDataSpecification> {
        Some(walk_embedded_data_specification(self, eds))
    }

    fn transform_data_specification_content(
        &mut self,
        content: DataSpecificationContent,
    ) -> Option<DataSpecificationContent> {
        walk_data_specification_content(self, content)
    }

    fn transform_data_specification_iec61360(
        &mut self,
        data: DataSpecificationIec61360,
    ) -> Option<DataSpecificationIec61360> {
        Some(walk_data_specification_iec61360(self, data))
    }

    fn transform_value_list(&mut self, list: ValueList) -> Option<ValueList> {
        Some(walk_value_list(self, list))
    }

    fn transform_value_reference_pair(
        &mut self,
        pair: ValueReferencePair,
    ) -> Option<ValueReferencePair> {
        walk_value_reference_pair(self, pair)
    }

    fn transform_level_type(&mut self, level: LevelType) -> LevelType {
        level
    }

    fn transform_administrative_information(
        &mut self,
        info: AdministrativeInformation,
    ) -> Option<AdministrativeInformation> {
        Some(walk_administrative_information(self, info))
    }

    fn transform_extension(&mut self, extension: Extension) -> Option<Extension> {
        Some(walk_extension(self, extension))
    }

    fn transform_qualifier(&mut self, qualifier: Qualifier) -> Option<Qualifier> {
        Some(walk_qualifier(self, qualifier))
    }

    fn transform_reference(&mut self, reference: Reference) -> Option<Reference> {
        Some(walk_reference(self, reference))
    }

    fn transform_key(&mut self, key: Key) -> Option<Key> {
        Some(key)
    }

    fn transform_lang_string(&mut self, lang_string: LangString) -> Option<LangString> {
        Some(lang_string)
    }
}

// ============================================================================
// Child-Sequence Helpers
// ============================================================================

fn transform_elements<T: Transform>(
    t: &mut T,
    elements: Vec<SubmodelElement>,
) -> Vec<SubmodelElement> {
    elements
        .into_iter()
        .filter_map(|e| t.transform_element(e))
        .collect()
}

fn transform_lang_strings<T: Transform>(t: &mut T, strings: Vec<LangString>) -> Vec<LangString> {
    strings
        .into_iter()
        .filter_map(|s| t.transform_lang_string(s))
        .collect()
}

fn transform_references<T: Transform>(t: &mut T, references: Vec<Reference>) -> Vec<Reference> {
    references
        .into_iter()
        .filter_map(|r| t.transform_reference(r))
        .collect()
}

fn transform_extensions<T: Transform>(t: &mut T, extensions: Vec<Extension>) -> Vec<Extension> {
    extensions
        .into_iter()
        .filter_map(|e| t.transform_extension(e))
        .collect()
}

fn transform_qualifiers<T: Transform>(t: &mut T, qualifiers: Vec<Qualifier>) -> Vec<Qualifier> {
    qualifiers
        .into_iter()
        .filter_map(|q| t.transform_qualifier(q))
        .collect()
}

fn transform_data_specifications<T: Transform>(
    t: &mut T,
    specs: Vec<EmbeddedDataSpecification>,
) -> Vec<EmbeddedDataSpecification> {
    specs
        .into_iter()
        .filter_map(|s| t.transform_embedded_data_specification(s))
        .collect()
}

fn transform_variables<T: Transform>(
    t: &mut T,
    variables: Vec<OperationVariable>,
) -> Vec<OperationVariable> {
    variables
        .into_iter()
        .filter_map(|v| t.transform_operation_variable(v))
        .collect()
}

// ============================================================================
// Walk Functions
// ============================================================================

/// Rebuilds each top-level list from the child transforms. The environment
/// itself is never removed.
pub fn walk_environment<T: Transform>(t: &mut T, env: Environment) -> Environment {
    Environment {
        asset_administration_shells: env
            .asset_administration_shells
            .into_iter()
            .filter_map(|s| t.transform_asset_administration_shell(s))
            .collect(),
        submodels: env
            .submodels
            .into_iter()
            .filter_map(|s| t.transform_submodel(s))
            .collect(),
        concept_descriptions: env
            .concept_descriptions
            .into_iter()
            .filter_map(|c| t.transform_concept_description(c))
            .collect(),
    }
}

pub fn walk_asset_administration_shell<T: Transform>(
    t: &mut T,
    shell: AssetAdministrationShell,
) -> AssetAdministrationShell {
    AssetAdministrationShell {
        extensions: transform_extensions(t, shell.extensions),
        category: shell.category,
        id_short: shell.id_short,
        display_name: transform_lang_strings(t, shell.display_name),
        description: transform_lang_strings(t, shell.description),
        administration: shell
            .administration
            .and_then(|a| t.transform_administrative_information(a)),
        id: shell.id,
        embedded_data_specifications: transform_data_specifications(
            t,
            shell.embedded_data_specifications,
        ),
        derived_from: shell.derived_from.and_then(|r| t.transform_reference(r)),
        asset_information: t.transform_asset_information(shell.asset_information),
        submodels: transform_references(t, shell.submodels),
    }
}

pub fn walk_asset_information<T: Transform>(t: &mut T, info: AssetInformation) -> AssetInformation {
    AssetInformation {
        asset_kind: info.asset_kind,
        global_asset_id: info.global_asset_id,
        specific_asset_ids: info
            .specific_asset_ids
            .into_iter()
            .filter_map(|s| t.transform_specific_asset_id(s))
            .collect(),
        asset_type: info.asset_type,
        default_thumbnail: info.default_thumbnail.and_then(|r| t.transform_resource(r)),
    }
}

pub fn walk_specific_asset_id<T: Transform>(t: &mut T, id: SpecificAssetId) -> SpecificAssetId {
    SpecificAssetId {
        semantic_id: id.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, id.supplemental_semantic_ids),
        name: id.name,
        value: id.value,
        external_subject_id: id.external_subject_id.and_then(|r| t.transform_reference(r)),
    }
}

pub fn walk_submodel<T: Transform>(t: &mut T, submodel: Submodel) -> Submodel {
    Submodel {
        extensions: transform_extensions(t, submodel.extensions),
        category: submodel.category,
        id_short: submodel.id_short,
        display_name: transform_lang_strings(t, submodel.display_name),
        description: transform_lang_strings(t, submodel.description),
        administration: submodel
            .administration
            .and_then(|a| t.transform_administrative_information(a)),
        id: submodel.id,
        kind: submodel.kind,
        semantic_id: submodel.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, submodel.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, submodel.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            submodel.embedded_data_specifications,
        ),
        submodel_elements: transform_elements(t, submodel.submodel_elements),
    }
}

/// Total dispatch over the element variants. Adding a variant without a
/// matching arm here is a compile error.
pub fn walk_element<T: Transform>(t: &mut T, element: SubmodelElement) -> Option<SubmodelElement> {
    match element {
        SubmodelElement::Property(e) => t.transform_property(e).map(SubmodelElement::Property),
        SubmodelElement::MultiLanguageProperty(e) => t
            .transform_multi_language_property(e)
            .map(SubmodelElement::MultiLanguageProperty),
        SubmodelElement::Range(e) => t.transform_range(e).map(SubmodelElement::Range),
        SubmodelElement::Blob(e) => t.transform_blob(e).map(SubmodelElement::Blob),
        SubmodelElement::File(e) => t.transform_file(e).map(SubmodelElement::File),
        SubmodelElement::ReferenceElement(e) => t
            .transform_reference_element(e)
            .map(SubmodelElement::ReferenceElement),
        SubmodelElement::RelationshipElement(e) => t
            .transform_relationship_element(e)
            .map(SubmodelElement::RelationshipElement),
        SubmodelElement::AnnotatedRelationshipElement(e) => t
            .transform_annotated_relationship_element(e)
            .map(SubmodelElement::AnnotatedRelationshipElement),
        SubmodelElement::Operation(e) => t.transform_operation(e).map(SubmodelElement::Operation),
        SubmodelElement::Capability(e) => {
            t.transform_capability(e).map(SubmodelElement::Capability)
        }
        SubmodelElement::Entity(e) => t.transform_entity(e).map(SubmodelElement::Entity),
        SubmodelElement::BasicEventElement(e) => t
            .transform_basic_event_element(e)
            .map(SubmodelElement::BasicEventElement),
        SubmodelElement::SubmodelElementCollection(e) => t
            .transform_submodel_element_collection(e)
            .map(SubmodelElement::SubmodelElementCollection),
        SubmodelElement::SubmodelElementList(e) => t
            .transform_submodel_element_list(e)
            .map(SubmodelElement::SubmodelElementList),
    }
}

pub fn walk_property<T: Transform>(t: &mut T, property: Property) -> Property {
    Property {
        extensions: transform_extensions(t, property.extensions),
        category: property.category,
        id_short: property.id_short,
        display_name: transform_lang_strings(t, property.display_name),
        description: transform_lang_strings(t, property.description),
        semantic_id: property.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, property.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, property.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            property.embedded_data_specifications,
        ),
        value_type: property.value_type,
        value: property.value,
        value_id: property.value_id.and_then(|r| t.transform_reference(r)),
    }
}

pub fn walk_multi_language_property<T: Transform>(
    t: &mut T,
    property: MultiLanguageProperty,
) -> MultiLanguageProperty {
    MultiLanguageProperty {
        extensions: transform_extensions(t, property.extensions),
        category: property.category,
        id_short: property.id_short,
        display_name: transform_lang_strings(t, property.display_name),
        description: transform_lang_strings(t, property.description),
        semantic_id: property.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, property.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, property.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            property.embedded_data_specifications,
        ),
        value: transform_lang_strings(t, property.value),
        value_id: property.value_id.and_then(|r| t.transform_reference(r)),
    }
}

pub fn walk_range<T: Transform>(t: &mut T, range: Range) -> Range {
    Range {
        extensions: transform_extensions(t, range.extensions),
        category: range.category,
        id_short: range.id_short,
        display_name: transform_lang_strings(t, range.display_name),
        description: transform_lang_strings(t, range.description),
        semantic_id: range.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, range.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, range.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            range.embedded_data_specifications,
        ),
        value_type: range.value_type,
        min: range.min,
        max: range.max,
    }
}

pub fn walk_blob<T: Transform>(t: &mut T, blob: Blob) -> Blob {
    Blob {
        extensions: transform_extensions(t, blob.extensions),
        category: blob.category,
        id_short: blob.id_short,
        display_name: transform_lang_strings(t, blob.display_name),
        description: transform_lang_strings(t, blob.description),
        semantic_id: blob.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, blob.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, blob.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            blob.embedded_data_specifications,
        ),
        value: blob.value,
        content_type: blob.content_type,
    }
}

pub fn walk_file<T: Transform>(t: &mut T, file: File) -> File {
    File {
        extensions: transform_extensions(t, file.extensions),
        category: file.category,
        id_short: file.id_short,
        display_name: transform_lang_strings(t, file.display_name),
        description: transform_lang_strings(t, file.description),
        semantic_id: file.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, file.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, file.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            file.embedded_data_specifications,
        ),
        value: file.value,
        content_type: file.content_type,
    }
}

pub fn walk_reference_element<T: Transform>(
    t: &mut T,
    element: ReferenceElement,
) -> ReferenceElement {
    ReferenceElement {
        extensions: transform_extensions(t, element.extensions),
        category: element.category,
        id_short: element.id_short,
        display_name: transform_lang_strings(t, element.display_name),
        description: transform_lang_strings(t, element.description),
        semantic_id: element.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, element.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, element.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            element.embedded_data_specifications,
        ),
        value: element.value.and_then(|r| t.transform_reference(r)),
    }
}

pub fn walk_relationship_element<T: Transform>(
    t: &mut T,
    element: RelationshipElement,
) -> RelationshipElement {
    RelationshipElement {
        extensions: transform_extensions(t, element.extensions),
        category: element.category,
        id_short: element.id_short,
        display_name: transform_lang_strings(t, element.display_name),
        description: transform_lang_strings(t, element.description),
        semantic_id: element.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, element.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, element.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            element.embedded_data_specifications,
        ),
        first: t.transform_reference(element.first).unwrap_or_default(),
        second: t.transform_reference(element.second).unwrap_or_default(),
    }
}

pub fn walk_annotated_relationship_element<T: Transform>(
    t: &mut T,
    element: AnnotatedRelationshipElement,
) -> AnnotatedRelationshipElement {
    AnnotatedRelationshipElement {
        extensions: transform_extensions(t, element.extensions),
        category: element.category,
        id_short: element.id_short,
        display_name: transform_lang_strings(t, element.display_name),
        description: transform_lang_strings(t, element.description),
        semantic_id: element.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, element.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, element.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            element.embedded_data_specifications,
        ),
        first: t.transform_reference(element.first).unwrap_or_default(),
        second: t.transform_reference(element.second).unwrap_or_default(),
        annotations: transform_elements(t, element.annotations),
    }
}

pub fn walk_operation<T: Transform>(t: &mut T, operation: Operation) -> Operation {
    Operation {
        extensions: transform_extensions(t, operation.extensions),
        category: operation.category,
        id_short: operation.id_short,
        display_name: transform_lang_strings(t, operation.display_name),
        description: transform_lang_strings(t, operation.description),
        semantic_id: operation.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, operation.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, operation.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            operation.embedded_data_specifications,
        ),
        input_variables: transform_variables(t, operation.input_variables),
        output_variables: transform_variables(t, operation.output_variables),
        inout_variables: transform_variables(t, operation.inout_variables),
    }
}

pub fn walk_operation_variable<T: Transform>(
    t: &mut T,
    variable: OperationVariable,
) -> Option<OperationVariable> {
    let value = t.transform_element(variable.value)?;
    Some(OperationVariable { value })
}

pub fn walk_capability<T: Transform>(t: &mut T, capability: Capability) -> Capability {
    Capability {
        extensions: transform_extensions(t, capability.extensions),
        category: capability.category,
        id_short: capability.id_short,
        display_name: transform_lang_strings(t, capability.display_name),
        description: transform_lang_strings(t, capability.description),
        semantic_id: capability.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, capability.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, capability.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            capability.embedded_data_specifications,
        ),
    }
}

pub fn walk_entity<T: Transform>(t: &mut T, entity: Entity) -> Entity {
    Entity {
        extensions: transform_extensions(t, entity.extensions),
        category: entity.category,
        id_short: entity.id_short,
        display_name: transform_lang_strings(t, entity.display_name),
        description: transform_lang_strings(t, entity.description),
        semantic_id: entity.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, entity.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, entity.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            entity.embedded_data_specifications,
        ),
        statements: transform_elements(t, entity.statements),
        entity_type: entity.entity_type,
        global_asset_id: entity.global_asset_id,
        specific_asset_ids: entity
            .specific_asset_ids
            .into_iter()
            .filter_map(|s| t.transform_specific_asset_id(s))
            .collect(),
    }
}

pub fn walk_basic_event_element<T: Transform>(
    t: &mut T,
    element: BasicEventElement,
) -> BasicEventElement {
    BasicEventElement {
        extensions: transform_extensions(t, element.extensions),
        category: element.category,
        id_short: element.id_short,
        display_name: transform_lang_strings(t, element.display_name),
        description: transform_lang_strings(t, element.description),
        semantic_id: element.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, element.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, element.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            element.embedded_data_specifications,
        ),
        observed: t.transform_reference(element.observed).unwrap_or_default(),
        direction: element.direction,
        state: element.state,
        message_topic: element.message_topic,
        message_broker: element.message_broker.and_then(|r| t.transform_reference(r)),
        last_update: element.last_update,
        min_interval: element.min_interval,
        max_interval: element.max_interval,
    }
}

pub fn walk_submodel_element_collection<T: Transform>(
    t: &mut T,
    collection: SubmodelElementCollection,
) -> SubmodelElementCollection {
    SubmodelElementCollection {
        extensions: transform_extensions(t, collection.extensions),
        category: collection.category,
        id_short: collection.id_short,
        display_name: transform_lang_strings(t, collection.display_name),
        description: transform_lang_strings(t, collection.description),
        semantic_id: collection.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, collection.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, collection.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            collection.embedded_data_specifications,
        ),
        value: transform_elements(t, collection.value),
    }
}

pub fn walk_submodel_element_list<T: Transform>(
    t: &mut T,
    list: SubmodelElementList,
) -> SubmodelElementList {
    SubmodelElementList {
        extensions: transform_extensions(t, list.extensions),
        category: list.category,
        id_short: list.id_short,
        display_name: transform_lang_strings(t, list.display_name),
        description: transform_lang_strings(t, list.description),
        semantic_id: list.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, list.supplemental_semantic_ids),
        qualifiers: transform_qualifiers(t, list.qualifiers),
        embedded_data_specifications: transform_data_specifications(
            t,
            list.embedded_data_specifications,
        ),
        order_relevant: list.order_relevant,
        semantic_id_list_element: list
            .semantic_id_list_element
            .and_then(|r| t.transform_reference(r)),
        type_value_list_element: list.type_value_list_element,
        value_type_list_element: list.value_type_list_element,
        value: transform_elements(t, list.value),
    }
}

pub fn walk_concept_description<T: Transform>(
    t: &mut T,
    concept: ConceptDescription,
) -> ConceptDescription {
    ConceptDescription {
        extensions: transform_extensions(t, concept.extensions),
        category: concept.category,
        id_short: concept.id_short,
        display_name: transform_lang_strings(t, concept.display_name),
        description: transform_lang_strings(t, concept.description),
        administration: concept
            .administration
            .and_then(|a| t.transform_administrative_information(a)),
        id: concept.id,
        embedded_data_specifications: transform_data_specifications(
            t,
            concept.embedded_data_specifications,
        ),
        is_case_of: transform_references(t, concept.is_case_of),
    }
}

pub fn walk_embedded_data_specification<T: Transform>(
    t: &mut T,
    eds: EmbeddedDataSpecification,
) -> EmbeddedDataSpecification {
    EmbeddedDataSpecification {
        data_specification: eds.data_specification.and_then(|r| t.transform_reference(r)),
        data_specification_content: eds
            .data_specification_content
            .and_then(|c| t.transform_data_specification_content(c)),
    }
}

pub fn walk_data_specification_content<T: Transform>(
    t: &mut T,
    content: DataSpecificationContent,
) -> Option<DataSpecificationContent> {
    match content {
        DataSpecificationContent::Iec61360(data) => t
            .transform_data_specification_iec61360(data)
            .map(DataSpecificationContent::Iec61360),
    }
}

pub fn walk_data_specification_iec61360<T: Transform>(
    t: &mut T,
    data: DataSpecificationIec61360,
) -> DataSpecificationIec61360 {
    DataSpecificationIec61360 {
        preferred_name: transform_lang_strings(t, data.preferred_name),
        short_name: transform_lang_strings(t, data.short_name),
        unit: data.unit,
        unit_id: data.unit_id.and_then(|r| t.transform_reference(r)),
        source_of_definition: data.source_of_definition,
        symbol: data.symbol,
        data_type: data.data_type,
        definition: transform_lang_strings(t, data.definition),
        value_format: data.value_format,
        value_list: data.value_list.and_then(|v| t.transform_value_list(v)),
        value: data.value,
        level_type: data.level_type.map(|l| t.transform_level_type(l)),
    }
}

pub fn walk_value_list<T: Transform>(t: &mut T, list: ValueList) -> ValueList {
    ValueList {
        value_reference_pairs: list
            .value_reference_pairs
            .into_iter()
            .filter_map(|p| t.transform_value_reference_pair(p))
            .collect(),
    }
}

pub fn walk_value_reference_pair<T: Transform>(
    t: &mut T,
    pair: ValueReferencePair,
) -> Option<ValueReferencePair> {
    let value_id = t.transform_reference(pair.value_id)?;
    Some(ValueReferencePair {
        value: pair.value,
        value_id,
    })
}

pub fn walk_administrative_information<T: Transform>(
    t: &mut T,
    info: AdministrativeInformation,
) -> AdministrativeInformation {
    AdministrativeInformation {
        embedded_data_specifications: transform_data_specifications(
            t,
            info.embedded_data_specifications,
        ),
        version: info.version,
        revision: info.revision,
        creator: info.creator.and_then(|r| t.transform_reference(r)),
        template_id: info.template_id,
    }
}

pub fn walk_extension<T: Transform>(t: &mut T, extension: Extension) -> Extension {
    Extension {
        semantic_id: extension.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, extension.supplemental_semantic_ids),
        name: extension.name,
        value_type: extension.value_type,
        value: extension.value,
        refers_to: transform_references(t, extension.refers_to),
    }
}

pub fn walk_qualifier<T: Transform>(t: &mut T, qualifier: Qualifier) -> Qualifier {
    Qualifier {
        semantic_id: qualifier.semantic_id.and_then(|r| t.transform_reference(r)),
        supplemental_semantic_ids: transform_references(t, qualifier.supplemental_semantic_ids),
        kind: qualifier.kind,
        qualifier_type: qualifier.qualifier_type,
        value_type: qualifier.value_type,
        value: qualifier.value,
        value_id: qualifier.value_id.and_then(|r| t.transform_reference(r)),
    }
}

pub fn walk_reference<T: Transform>(t: &mut T, reference: Reference) -> Reference {
    Reference {
        reference_type: reference.reference_type,
        referred_semantic_id: reference
            .referred_semantic_id
            .and_then(|r| t.transform_reference(*r))
            .map(Box::new),
        keys: reference
            .keys
            .into_iter()
            .filter_map(|k| t.transform_key(k))
            .collect(),
    }
}
