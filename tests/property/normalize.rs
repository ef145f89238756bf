//! Property-based tests for normalization invariants.
//!
//! These tests use proptest to verify the pass guarantees hold across a
//! wide variety of generated documents.

use proptest::prelude::*;

use aas_normalize::model::*;
use aas_normalize::visit::*;
use aas_normalize::{fix_and_finalize, langtag, normalize, numeric};

// Generators for messy documents: blank, padded, and well-formed values in
// every position the pass has to repair.

fn arb_raw_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z][a-zA-Z0-9 ]{0,10}",
        " [a-zA-Z]{1,6} ",
    ]
}

fn arb_opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(arb_raw_text())
}

fn arb_language() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{2}",
        "[A-Z]{2}",
        Just("en-us".to_string()),
        Just("zh-hant-cn".to_string()),
        Just("english".to_string()),
        Just(String::new()),
        "[a-z]{1,3}",
    ]
}

fn arb_lang_strings() -> impl Strategy<Value = Vec<LangString>> {
    prop::collection::vec(
        (arb_language(), arb_raw_text()).prop_map(|(language, text)| LangString { language, text }),
        0..3,
    )
}

fn arb_key_type() -> impl Strategy<Value = KeyType> {
    prop_oneof![
        Just(KeyType::GlobalReference),
        Just(KeyType::Submodel),
        Just(KeyType::Property),
        Just(KeyType::ConceptDescription),
        Just(KeyType::FragmentReference),
    ]
}

fn arb_reference() -> impl Strategy<Value = Reference> {
    (
        prop_oneof![
            Just(ReferenceType::ExternalReference),
            Just(ReferenceType::ModelReference),
        ],
        prop::collection::vec(
            (arb_key_type(), arb_raw_text())
                .prop_map(|(key_type, value)| Key::new(key_type, value)),
            0..3,
        ),
    )
        .prop_map(|(reference_type, keys)| Reference::new(reference_type, keys))
}

fn arb_value_type() -> impl Strategy<Value = DataTypeXsd> {
    prop_oneof![
        Just(DataTypeXsd::String),
        Just(DataTypeXsd::Boolean),
        Just(DataTypeXsd::Double),
        Just(DataTypeXsd::Float),
        Just(DataTypeXsd::Int),
        Just(DataTypeXsd::Integer),
        Just(DataTypeXsd::UnsignedLong),
        Just(DataTypeXsd::Decimal),
    ]
}

fn arb_typed_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "0{1,3}[0-9]{1,4}",
        "-?[0-9]{1,4}\\.[0-9]{1,3}",
        " [0-9]{1,3} ",
        Just("1e2".to_string()),
        Just("NaN".to_string()),
        "[a-z]{1,5}",
        Just(String::new()),
    ]
}

fn arb_property() -> impl Strategy<Value = Property> {
    (
        arb_opt_text(),
        arb_opt_text(),
        arb_value_type(),
        prop::option::of(arb_typed_value()),
        prop::option::of(arb_reference()),
        arb_lang_strings(),
    )
        .prop_map(
            |(id_short, category, value_type, value, semantic_id, description)| Property {
                id_short,
                category,
                value_type,
                value,
                semantic_id,
                description,
                ..Property::default()
            },
        )
}

fn arb_leaf_element() -> impl Strategy<Value = SubmodelElement> {
    prop_oneof![
        arb_property().prop_map(SubmodelElement::Property),
        (arb_opt_text(), arb_lang_strings()).prop_map(|(id_short, value)| {
            SubmodelElement::MultiLanguageProperty(MultiLanguageProperty {
                id_short,
                value,
                ..MultiLanguageProperty::default()
            })
        }),
        (arb_opt_text(), prop::option::of(arb_reference())).prop_map(|(id_short, value)| {
            SubmodelElement::ReferenceElement(ReferenceElement {
                id_short,
                value,
                ..ReferenceElement::default()
            })
        }),
        (arb_opt_text(), arb_opt_text()).prop_map(|(id_short, content_type)| {
            SubmodelElement::File(File {
                id_short,
                content_type,
                ..File::default()
            })
        }),
        (arb_opt_text(), arb_reference(), arb_reference()).prop_map(
            |(id_short, first, second)| {
                SubmodelElement::RelationshipElement(RelationshipElement {
                    id_short,
                    first,
                    second,
                    ..RelationshipElement::default()
                })
            }
        ),
    ]
}

fn arb_element() -> impl Strategy<Value = SubmodelElement> {
    prop_oneof![
        arb_leaf_element(),
        (arb_opt_text(), prop::collection::vec(arb_leaf_element(), 0..3)).prop_map(
            |(id_short, value)| {
                SubmodelElement::SubmodelElementCollection(SubmodelElementCollection {
                    id_short,
                    value,
                    ..SubmodelElementCollection::default()
                })
            }
        ),
    ]
}

fn arb_submodel() -> impl Strategy<Value = Submodel> {
    (
        "urn:sm:[a-z]{1,6}",
        arb_opt_text(),
        arb_opt_text(),
        prop::collection::vec(arb_element(), 0..4),
    )
        .prop_map(|(id, id_short, category, submodel_elements)| {
            let mut submodel = Submodel::new(id);
            submodel.id_short = id_short;
            submodel.category = category;
            submodel.submodel_elements = submodel_elements;
            submodel
        })
}

fn arb_shell() -> impl Strategy<Value = AssetAdministrationShell> {
    (
        "urn:shell:[a-z]{1,6}",
        arb_opt_text(),
        arb_opt_text(),
        prop::collection::vec(arb_reference(), 0..2),
    )
        .prop_map(|(id, id_short, global_asset_id, submodels)| {
            let mut shell = AssetAdministrationShell::new(id);
            shell.id_short = id_short;
            shell.asset_information.global_asset_id = global_asset_id;
            shell.submodels = submodels;
            shell
        })
}

fn arb_embedded_spec() -> impl Strategy<Value = EmbeddedDataSpecification> {
    (
        prop::option::of(arb_reference()),
        arb_lang_strings(),
        arb_opt_text(),
    )
        .prop_map(|(data_specification, preferred_name, unit)| {
            EmbeddedDataSpecification {
                data_specification,
                data_specification_content: Some(DataSpecificationContent::Iec61360(
                    DataSpecificationIec61360 {
                        preferred_name,
                        unit,
                        ..DataSpecificationIec61360::default()
                    },
                )),
            }
        })
}

fn arb_concept() -> impl Strategy<Value = ConceptDescription> {
    (
        "urn:cd:[a-z]{1,6}",
        prop::collection::vec(arb_embedded_spec(), 0..2),
    )
        .prop_map(|(id, specs)| {
            let mut concept = ConceptDescription::new(id);
            concept.embedded_data_specifications = specs;
            concept
        })
}

fn arb_environment() -> impl Strategy<Value = Environment> {
    (
        prop::collection::vec(arb_shell(), 0..2),
        prop::collection::vec(arb_submodel(), 0..3),
        prop::collection::vec(arb_concept(), 0..2),
    )
        .prop_map(
            |(asset_administration_shells, submodels, concept_descriptions)| Environment {
                asset_administration_shells,
                submodels,
                concept_descriptions,
            },
        )
}

/// Asserting pass run over an already-normalized document: every override
/// checks the guarantee for its node kind, then recurses.
struct InvariantChecker;

impl Transform for InvariantChecker {
    fn transform_element(&mut self, element: SubmodelElement) -> Option<SubmodelElement> {
        if let Some(id_short) = element.id_short() {
            assert!(!id_short.trim().is_empty(), "blank idShort survived");
            assert_eq!(
                id_short.trim().len(),
                id_short.len(),
                "untrimmed idShort survived: {id_short:?}"
            );
        }
        walk_element(self, element)
    }

    fn transform_embedded_data_specification(
        &mut self,
        eds: EmbeddedDataSpecification,
    ) -> Option<EmbeddedDataSpecification> {
        assert!(
            !(eds.data_specification_content.is_some() && eds.data_specification.is_none()),
            "content survived without a data specification reference"
        );
        Some(walk_embedded_data_specification(self, eds))
    }

    fn transform_data_specification_iec61360(
        &mut self,
        data: DataSpecificationIec61360,
    ) -> Option<DataSpecificationIec61360> {
        assert!(
            !data.preferred_name.is_empty(),
            "preferred name emptied without a default"
        );
        Some(walk_data_specification_iec61360(self, data))
    }

    fn transform_reference(&mut self, reference: Reference) -> Option<Reference> {
        let first = reference.keys.first().expect("empty reference survived");
        let expected = match first.key_type {
            KeyType::GlobalReference => ReferenceType::ExternalReference,
            _ => ReferenceType::ModelReference,
        };
        assert_eq!(
            reference.reference_type, expected,
            "reference type does not match its first key"
        );
        Some(walk_reference(self, reference))
    }

    fn transform_key(&mut self, key: Key) -> Option<Key> {
        let trimmed = key.value.trim();
        assert!(!trimmed.is_empty(), "blank key survived");
        assert_eq!(
            trimmed.len(),
            key.value.len(),
            "untrimmed key survived: {:?}",
            key.value
        );
        Some(key)
    }

    fn transform_lang_string(&mut self, lang_string: LangString) -> Option<LangString> {
        assert!(
            langtag::is_canonical(&lang_string.language),
            "non-canonical language survived: {:?}",
            lang_string.language
        );
        let trimmed = lang_string.text.trim();
        assert!(!trimmed.is_empty(), "blank language text survived");
        assert_eq!(
            trimmed.len(),
            lang_string.text.len(),
            "untrimmed language text survived: {:?}",
            lang_string.text
        );
        Some(lang_string)
    }
}

fn check_invariants(env: Environment) {
    let mut checker = InvariantChecker;
    checker.transform_environment(env);
}

proptest! {
    /// Property: a second normalization pass finds nothing left to repair
    #[test]
    fn normalization_is_idempotent(env in arb_environment()) {
        let (once, _) = normalize(env);
        let (twice, second) = normalize(once.clone());
        assert!(second.is_empty(), "second pass repaired more: {second}");
        assert_eq!(twice, once, "second pass changed the document");
    }

    /// Property: every node surviving normalization satisfies the output
    /// guarantees (no blanks, canonical tags, well-formed references)
    #[test]
    fn normalized_documents_are_clean(env in arb_environment()) {
        let (env, _) = normalize(env);
        check_invariants(env);
    }

    /// Property: the combined pipeline reports no failures on documents
    /// whose data specifications all carry content
    #[test]
    fn fix_and_finalize_recovers_generated_concepts(env in arb_environment()) {
        let (env, report) = fix_and_finalize(env);
        assert_eq!(report.failure_count(), 0, "unexpected failures: {report}");
        check_invariants(env);
    }

    /// Property: numeric values come out in the canonicalizer's own fixed
    /// point; non-numeric values pass through untouched
    #[test]
    fn numeric_values_end_up_canonical(
        value_type in arb_value_type(),
        value in arb_typed_value(),
    ) {
        let mut submodel = Submodel::new("urn:sm");
        submodel.submodel_elements = vec![SubmodelElement::Property(Property {
            id_short: Some("value".to_string()),
            value_type,
            value: Some(value.clone()),
            ..Property::default()
        })];
        let env = Environment {
            submodels: vec![submodel],
            ..Environment::default()
        };

        let (env, _) = normalize(env);

        let SubmodelElement::Property(property) = &env.submodels[0].submodel_elements[0] else {
            panic!("property missing");
        };
        let out = property.value.as_deref().expect("value kept");
        if value_type.is_floating() {
            assert_eq!(
                numeric::canonical_float(out).as_deref(),
                Some(out),
                "not a canonical float: {out:?}"
            );
        } else if value_type.is_integer() {
            assert_eq!(
                numeric::canonical_integer(out).as_deref(),
                Some(out),
                "not a canonical integer: {out:?}"
            );
        } else {
            assert_eq!(out, value, "non-numeric value changed");
        }
    }

    /// Property: identifiables survive no matter how empty they end up
    #[test]
    fn identifiables_are_never_removed(env in arb_environment()) {
        let shells = env.asset_administration_shells.len();
        let submodels = env.submodels.len();
        let concepts = env.concept_descriptions.len();

        let (env, _) = normalize(env);

        assert_eq!(env.asset_administration_shells.len(), shells);
        assert_eq!(env.submodels.len(), submodels);
        assert_eq!(env.concept_descriptions.len(), concepts);
    }

    /// Property: every repair is located by a path anchored at the root
    #[test]
    fn report_lines_are_rooted(env in arb_environment()) {
        let (_, report) = normalize(env);
        for line in report.to_string().lines() {
            assert!(line.starts_with("Environment"), "unanchored line: {line}");
        }
    }
}
