//! The normalization pass: one [`Transform`] implementation that repairs and
//! prunes an environment in a single depth-first traversal.
//!
//! Each handler works the same way: recurse into the children first, then
//! clean blank optional strings, then inject placeholders where the
//! meta-model demands a value, then apply the kind's coercions, and finally
//! test the rebuilt node for vacancy. A vacant node returns `None` and
//! disappears from its parent; removal cascades bottom-up but never past the
//! identifiables or the environment root.
//!
//! Every change is recorded in the [`Report`] passed to [`Normalizer::new`],
//! located by a breadcrumb path of ids and idShorts.

use crate::diagnostics::{Repair, Report};
use crate::langtag;
use crate::model::*;
use crate::numeric;
use crate::visit::*;

// ============================================================================
// Sentinels
// ============================================================================

/// Placeholder injected where the meta-model demands a present value.
pub const PLACEHOLDER: &str = "EMPTY";

/// Language substituted when a tag cannot be repaired.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Value substituted when a floating-point value cannot be parsed.
pub const FALLBACK_FLOAT: &str = "0.0";

/// Value substituted when an integer value cannot be parsed.
pub const FALLBACK_INTEGER: &str = "0";

fn placeholder_reference() -> Reference {
    Reference::external(PLACEHOLDER)
}

/// Breadcrumb label for an element: its idShort, when usably non-blank.
fn element_label(id_short: &Option<String>) -> Option<&str> {
    id_short.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// Pass State & Helpers
// ============================================================================

/// The normalization pass. Owns a breadcrumb trail for locating records;
/// all output goes to the borrowed [`Report`].
///
/// The pass can be applied to any node kind, not only a whole environment:
/// every `transform_*` method normalizes the subtree it is given.
pub struct Normalizer<'a> {
    report: &'a mut Report,
    trail: Vec<String>,
}

impl<'a> Normalizer<'a> {
    pub fn new(report: &'a mut Report) -> Self {
        Normalizer {
            report,
            trail: Vec::new(),
        }
    }

    fn enter(&mut self, kind: NodeKind, name: Option<&str>) {
        let label = match name {
            Some(name) => format!("{kind}[{name}]"),
            None => kind.to_string(),
        };
        self.trail.push(label);
    }

    fn leave(&mut self) {
        self.trail.pop();
    }

    fn path(&self) -> String {
        self.trail.join("/")
    }

    fn record(&mut self, repair: Repair) {
        self.report.push(repair);
    }

    /// Trims an optional string; a blank value becomes absent and is
    /// recorded. Pure whitespace trimming is not worth a record.
    fn clean_field(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = value?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.record(Repair::ClearedField {
                path: self.path(),
                field,
            });
            None
        } else if trimmed.len() != value.len() {
            Some(trimmed.to_string())
        } else {
            Some(value)
        }
    }

    /// An absent idShort stays absent; a present-but-blank one is filled
    /// with the placeholder so the element keeps an addressable name.
    fn fix_id_short(&mut self, id_short: Option<String>) -> Option<String> {
        let id_short = id_short?;
        let trimmed = id_short.trim();
        if trimmed.is_empty() {
            self.record(Repair::FilledIdShort { path: self.path() });
            Some(PLACEHOLDER.to_string())
        } else if trimmed.len() != id_short.len() {
            Some(trimmed.to_string())
        } else {
            Some(id_short)
        }
    }

    /// Re-renders a typed value in canonical form. Unparseable values take
    /// the type class fallback; non-numeric types pass through untouched.
    fn reformat_typed_value(&mut self, value_type: DataTypeXsd, value: String) -> String {
        let canonical = if value_type.is_floating() {
            Some(numeric::canonical_float(&value).unwrap_or_else(|| FALLBACK_FLOAT.to_string()))
        } else if value_type.is_integer() {
            Some(numeric::canonical_integer(&value).unwrap_or_else(|| FALLBACK_INTEGER.to_string()))
        } else {
            None
        };
        match canonical {
            Some(canonical) if canonical != value => {
                self.record(Repair::ReformattedValue {
                    path: self.path(),
                    from: value,
                    to: canonical.clone(),
                });
                canonical
            }
            _ => value,
        }
    }

    /// Mandatory reference slots must survive normalization. When the child
    /// transform emptied one, put the placeholder reference there.
    fn restore_reference_slot(&mut self, slot: &'static str, reference: &mut Reference) {
        if reference.keys.is_empty() {
            *reference = placeholder_reference();
            self.record(Repair::SynthesizedReference {
                path: self.path(),
                slot,
            });
        }
    }

    fn prune_if_vacant<N: Vacant>(&mut self, kind: NodeKind, node: N) -> Option<N> {
        if node.is_vacant() {
            self.record(Repair::Pruned {
                path: self.path(),
                kind,
            });
            None
        } else {
            Some(node)
        }
    }
}

// ============================================================================
// Transform Implementation
// ============================================================================

impl Transform for Normalizer<'_> {
    fn transform_environment(&mut self, env: Environment) -> Environment {
        self.enter(NodeKind::Environment, None);
        let env = walk_environment(self, env);
        self.leave();
        env
    }

    fn transform_asset_administration_shell(
        &mut self,
        shell: AssetAdministrationShell,
    ) -> Option<AssetAdministrationShell> {
        self.enter(NodeKind::AssetAdministrationShell, Some(&shell.id));
        let mut shell = walk_asset_administration_shell(self, shell);
        shell.category = self.clean_field("category", shell.category);
        shell.id_short = self.fix_id_short(shell.id_short);
        self.leave();
        Some(shell)
    }

    fn transform_asset_information(&mut self, info: AssetInformation) -> AssetInformation {
        self.enter(NodeKind::AssetInformation, None);
        let mut info = walk_asset_information(self, info);
        info.global_asset_id = self.clean_field("globalAssetId", info.global_asset_id);
        info.asset_type = self.clean_field("assetType", info.asset_type);
        self.leave();
        info
    }

    fn transform_specific_asset_id(&mut self, id: SpecificAssetId) -> Option<SpecificAssetId> {
        self.enter(NodeKind::SpecificAssetId, None);
        let mut id = walk_specific_asset_id(self, id);
        id.name = self.clean_field("name", id.name);
        id.value = self.clean_field("value", id.value);
        let out = self.prune_if_vacant(NodeKind::SpecificAssetId, id);
        self.leave();
        out
    }

    fn transform_resource(&mut self, mut resource: Resource) -> Option<Resource> {
        self.enter(NodeKind::Resource, None);
        resource.path = self.clean_field("path", resource.path);
        resource.content_type = self.clean_field("contentType", resource.content_type);
        let out = self.prune_if_vacant(NodeKind::Resource, resource);
        self.leave();
        out
    }

    fn transform_submodel(&mut self, submodel: Submodel) -> Option<Submodel> {
        self.enter(NodeKind::Submodel, Some(&submodel.id));
        let mut submodel = walk_submodel(self, submodel);
        submodel.category = self.clean_field("category", submodel.category);
        submodel.id_short = self.fix_id_short(submodel.id_short);
        self.leave();
        Some(submodel)
    }

    fn transform_property(&mut self, property: Property) -> Option<Property> {
        self.enter(NodeKind::Property, element_label(&property.id_short));
        let mut property = walk_property(self, property);
        property.category = self.clean_field("category", property.category);
        property.id_short = self.fix_id_short(property.id_short);
        if let Some(value) = property.value.take() {
            property.value = Some(self.reformat_typed_value(property.value_type, value));
        }
        let out = self.prune_if_vacant(NodeKind::Property, property);
        self.leave();
        out
    }

    fn transform_multi_language_property(
        &mut self,
        property: MultiLanguageProperty,
    ) -> Option<MultiLanguageProperty> {
        self.enter(NodeKind::MultiLanguageProperty, element_label(&property.id_short));
        let mut property = walk_multi_language_property(self, property);
        property.category = self.clean_field("category", property.category);
        property.id_short = self.fix_id_short(property.id_short);
        let out = self.prune_if_vacant(NodeKind::MultiLanguageProperty, property);
        self.leave();
        out
    }

    fn transform_range(&mut self, range: Range) -> Option<Range> {
        self.enter(NodeKind::Range, element_label(&range.id_short));
        let mut range = walk_range(self, range);
        range.category = self.clean_field("category", range.category);
        range.id_short = self.fix_id_short(range.id_short);
        let out = self.prune_if_vacant(NodeKind::Range, range);
        self.leave();
        out
    }

    fn transform_blob(&mut self, blob: Blob) -> Option<Blob> {
        self.enter(NodeKind::Blob, element_label(&blob.id_short));
        let mut blob = walk_blob(self, blob);
        blob.category = self.clean_field("category", blob.category);
        blob.id_short = self.fix_id_short(blob.id_short);
        blob.content_type = self.clean_field("contentType", blob.content_type);
        if blob.value.as_ref().is_some_and(|bytes| bytes.is_empty()) {
            blob.value = None;
            self.record(Repair::ClearedField {
                path: self.path(),
                field: "value",
            });
        }
        let out = self.prune_if_vacant(NodeKind::Blob, blob);
        self.leave();
        out
    }

    fn transform_file(&mut self, file: File) -> Option<File> {
        self.enter(NodeKind::File, element_label(&file.id_short));
        let mut file = walk_file(self, file);
        file.category = self.clean_field("category", file.category);
        file.id_short = self.fix_id_short(file.id_short);
        file.content_type = self.clean_field("contentType", file.content_type);
        let out = self.prune_if_vacant(NodeKind::File, file);
        self.leave();
        out
    }

    fn transform_reference_element(
        &mut self,
        element: ReferenceElement,
    ) -> Option<ReferenceElement> {
        self.enter(NodeKind::ReferenceElement, element_label(&element.id_short));
        let mut element = walk_reference_element(self, element);
        element.category = self.clean_field("category", element.category);
        element.id_short = self.fix_id_short(element.id_short);
        let out = self.prune_if_vacant(NodeKind::ReferenceElement, element);
        self.leave();
        out
    }

    fn transform_relationship_element(
        &mut self,
        element: RelationshipElement,
    ) -> Option<RelationshipElement> {
        self.enter(NodeKind::RelationshipElement, element_label(&element.id_short));
        let mut element = walk_relationship_element(self, element);
        element.category = self.clean_field("category", element.category);
        element.id_short = self.fix_id_short(element.id_short);
        self.restore_reference_slot("first", &mut element.first);
        self.restore_reference_slot("second", &mut element.second);
        self.leave();
        Some(element)
    }

    fn transform_annotated_relationship_element(
        &mut self,
        element: AnnotatedRelationshipElement,
    ) -> Option<AnnotatedRelationshipElement> {
        self.enter(
            NodeKind::AnnotatedRelationshipElement,
            element_label(&element.id_short),
        );
        let mut element = walk_annotated_relationship_element(self, element);
        element.category = self.clean_field("category", element.category);
        element.id_short = self.fix_id_short(element.id_short);
        self.restore_reference_slot("first", &mut element.first);
        self.restore_reference_slot("second", &mut element.second);
        self.leave();
        Some(element)
    }

    fn transform_operation(&mut self, operation: Operation) -> Option<Operation> {
        self.enter(NodeKind::Operation, element_label(&operation.id_short));
        let mut operation = walk_operation(self, operation);
        operation.category = self.clean_field("category", operation.category);
        operation.id_short = self.fix_id_short(operation.id_short);
        let out = self.prune_if_vacant(NodeKind::Operation, operation);
        self.leave();
        out
    }

    fn transform_operation_variable(
        &mut self,
        variable: OperationVariable,
    ) -> Option<OperationVariable> {
        self.enter(NodeKind::OperationVariable, None);
        let out = walk_operation_variable(self, variable);
        if out.is_none() {
            self.record(Repair::Pruned {
                path: self.path(),
                kind: NodeKind::OperationVariable,
            });
        }
        self.leave();
        out
    }

    fn transform_capability(&mut self, capability: Capability) -> Option<Capability> {
        self.enter(NodeKind::Capability, element_label(&capability.id_short));
        let mut capability = walk_capability(self, capability);
        capability.category = self.clean_field("category", capability.category);
        capability.id_short = self.fix_id_short(capability.id_short);
        let out = self.prune_if_vacant(NodeKind::Capability, capability);
        self.leave();
        out
    }

    fn transform_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.enter(NodeKind::Entity, element_label(&entity.id_short));
        let mut entity = walk_entity(self, entity);
        entity.category = self.clean_field("category", entity.category);
        entity.id_short = self.fix_id_short(entity.id_short);
        entity.global_asset_id = self.clean_field("globalAssetId", entity.global_asset_id);
        let out = self.prune_if_vacant(NodeKind::Entity, entity);
        self.leave();
        out
    }

    fn transform_basic_event_element(
        &mut self,
        element: BasicEventElement,
    ) -> Option<BasicEventElement> {
        self.enter(NodeKind::BasicEventElement, element_label(&element.id_short));
        let mut element = walk_basic_event_element(self, element);
        element.category = self.clean_field("category", element.category);
        element.id_short = self.fix_id_short(element.id_short);
        element.message_topic = self.clean_field("messageTopic", element.message_topic);
        element.last_update = self.clean_field("lastUpdate", element.last_update);
        element.min_interval = self.clean_field("minInterval", element.min_interval);
        element.max_interval = self.clean_field("maxInterval", element.max_interval);
        self.restore_reference_slot("observed", &mut element.observed);
        self.leave();
        Some(element)
    }

    fn transform_submodel_element_collection(
        &mut self,
        collection: SubmodelElementCollection,
    ) -> Option<SubmodelElementCollection> {
        self.enter(
            NodeKind::SubmodelElementCollection,
            element_label(&collection.id_short),
        );
        let mut collection = walk_submodel_element_collection(self, collection);
        collection.category = self.clean_field("category", collection.category);
        collection.id_short = self.fix_id_short(collection.id_short);
        let out = self.prune_if_vacant(NodeKind::SubmodelElementCollection, collection);
        self.leave();
        out
    }

    fn transform_submodel_element_list(
        &mut self,
        list: SubmodelElementList,
    ) -> Option<SubmodelElementList> {
        self.enter(NodeKind::SubmodelElementList, element_label(&list.id_short));
        let mut list = walk_submodel_element_list(self, list);
        list.category = self.clean_field("category", list.category);
        list.id_short = self.fix_id_short(list.id_short);
        let out = self.prune_if_vacant(NodeKind::SubmodelElementList, list);
        self.leave();
        out
    }

    fn transform_concept_description(
        &mut self,
        concept: ConceptDescription,
    ) -> Option<ConceptDescription> {
        self.enter(NodeKind::ConceptDescription, Some(&concept.id));
        let mut concept = walk_concept_description(self, concept);
        concept.category = self.clean_field("category", concept.category);
        concept.id_short = self.fix_id_short(concept.id_short);
        self.leave();
        Some(concept)
    }

    fn transform_embedded_data_specification(
        &mut self,
        eds: EmbeddedDataSpecification,
    ) -> Option<EmbeddedDataSpecification> {
        self.enter(NodeKind::EmbeddedDataSpecification, None);
        let mut eds = walk_embedded_data_specification(self, eds);
        if eds.data_specification.is_none() && eds.data_specification_content.is_some() {
            eds.data_specification = Some(placeholder_reference());
            self.record(Repair::BackfilledDataSpecification { path: self.path() });
        }
        let out = self.prune_if_vacant(NodeKind::EmbeddedDataSpecification, eds);
        self.leave();
        out
    }

    fn transform_data_specification_iec61360(
        &mut self,
        data: DataSpecificationIec61360,
    ) -> Option<DataSpecificationIec61360> {
        self.enter(NodeKind::DataSpecificationIec61360, None);
        let mut data = walk_data_specification_iec61360(self, data);
        data.unit = self.clean_field("unit", data.unit);
        data.source_of_definition =
            self.clean_field("sourceOfDefinition", data.source_of_definition);
        data.symbol = self.clean_field("symbol", data.symbol);
        data.value_format = self.clean_field("valueFormat", data.value_format);
        if data.preferred_name.is_empty() {
            data.preferred_name
                .push(LangString::new(FALLBACK_LANGUAGE, PLACEHOLDER));
            self.record(Repair::DefaultedPreferredName { path: self.path() });
        }
        self.leave();
        Some(data)
    }

    fn transform_value_list(&mut self, list: ValueList) -> Option<ValueList> {
        self.enter(NodeKind::ValueList, None);
        let list = walk_value_list(self, list);
        let out = self.prune_if_vacant(NodeKind::ValueList, list);
        self.leave();
        out
    }

    fn transform_value_reference_pair(
        &mut self,
        pair: ValueReferencePair,
    ) -> Option<ValueReferencePair> {
        self.enter(NodeKind::ValueReferencePair, None);
        let out = walk_value_reference_pair(self, pair);
        if out.is_none() {
            self.record(Repair::Pruned {
                path: self.path(),
                kind: NodeKind::ValueReferencePair,
            });
        }
        self.leave();
        out
    }

    fn transform_administrative_information(
        &mut self,
        info: AdministrativeInformation,
    ) -> Option<AdministrativeInformation> {
        self.enter(NodeKind::AdministrativeInformation, None);
        let mut info = walk_administrative_information(self, info);
        info.version = self.clean_field("version", info.version);
        info.revision = self.clean_field("revision", info.revision);
        info.template_id = self.clean_field("templateId", info.template_id);
        let out = self.prune_if_vacant(NodeKind::AdministrativeInformation, info);
        self.leave();
        out
    }

    fn transform_extension(&mut self, extension: Extension) -> Option<Extension> {
        self.enter(NodeKind::Extension, None);
        let mut extension = walk_extension(self, extension);
        extension.name = self.clean_field("name", extension.name);
        let out = self.prune_if_vacant(NodeKind::Extension, extension);
        self.leave();
        out
    }

    fn transform_qualifier(&mut self, qualifier: Qualifier) -> Option<Qualifier> {
        self.enter(NodeKind::Qualifier, None);
        let mut qualifier = walk_qualifier(self, qualifier);
        qualifier.qualifier_type = self.clean_field("type", qualifier.qualifier_type);
        let out = self.prune_if_vacant(NodeKind::Qualifier, qualifier);
        self.leave();
        out
    }

    fn transform_reference(&mut self, reference: Reference) -> Option<Reference> {
        let mut reference = walk_reference(self, reference);

        // The first surviving key decides the reference type.
        let inferred = match reference.keys.first().map(|k| k.key_type) {
            Some(KeyType::GlobalReference) => Some(ReferenceType::ExternalReference),
            Some(_) => Some(ReferenceType::ModelReference),
            None => None,
        };
        if let Some(inferred) = inferred {
            if inferred != reference.reference_type {
                reference.reference_type = inferred;
                self.record(Repair::RetypedReference {
                    path: self.path(),
                    to: inferred,
                });
            }
        }

        if reference.keys.is_empty() {
            self.record(Repair::Pruned {
                path: self.path(),
                kind: NodeKind::Reference,
            });
            None
        } else {
            Some(reference)
        }
    }

    fn transform_key(&mut self, key: Key) -> Option<Key> {
        let trimmed = key.value.trim();
        if trimmed.is_empty() {
            self.record(Repair::DroppedKey { path: self.path() });
            return None;
        }
        if trimmed.len() != key.value.len() {
            return Some(Key::new(key.key_type, trimmed));
        }
        Some(key)
    }

    fn transform_lang_string(&mut self, lang_string: LangString) -> Option<LangString> {
        let text_trimmed = lang_string.text.trim();
        match langtag::repair(&lang_string.language) {
            None => {
                if text_trimmed.is_empty() {
                    self.record(Repair::DroppedLangString { path: self.path() });
                    None
                } else {
                    let text = text_trimmed.to_string();
                    self.record(Repair::CoercedLanguage {
                        path: self.path(),
                        from: lang_string.language,
                        to: FALLBACK_LANGUAGE.to_string(),
                    });
                    Some(LangString::new(FALLBACK_LANGUAGE, text))
                }
            }
            Some(language) => {
                if language != lang_string.language {
                    self.record(Repair::CoercedLanguage {
                        path: self.path(),
                        from: lang_string.language.clone(),
                        to: language.clone(),
                    });
                }
                if text_trimmed.is_empty() {
                    self.record(Repair::FilledLangText {
                        path: self.path(),
                        language: language.clone(),
                    });
                    Some(LangString::new(language, PLACEHOLDER))
                } else {
                    Some(LangString::new(language, text_trimmed.to_string()))
                }
            }
        }
    }
}
