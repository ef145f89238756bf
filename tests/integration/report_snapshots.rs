//! Snapshot tests for the rendered repair report.
//!
//! Uses insta to pin the report wording and ordering. Run
//! `cargo insta review` to review changes.

use insta::assert_snapshot;

use aas_normalize::model::*;
use aas_normalize::{Report, fix_and_finalize, normalize};

fn rendered(report: &Report) -> String {
    report.to_string().trim_end().to_string()
}

#[test]
fn repair_trail_for_a_messy_submodel() {
    let mut submodel = Submodel::new("urn:demo");
    submodel.id_short = Some("  ".to_string());
    submodel.submodel_elements = vec![
        SubmodelElement::Property(Property {
            id_short: Some("Temp".to_string()),
            category: Some(" ".to_string()),
            value_type: DataTypeXsd::Double,
            value: Some("7".to_string()),
            ..Property::default()
        }),
        SubmodelElement::Property(Property::default()),
    ];
    let env = Environment {
        submodels: vec![submodel],
        ..Environment::default()
    };

    let (_, report) = normalize(env);

    assert_snapshot!(rendered(&report), @r#"
    Environment/Submodel[urn:demo]/Property[Temp]: cleared blank category
    Environment/Submodel[urn:demo]/Property[Temp]: reformatted value "7" as "7.0"
    Environment/Submodel[urn:demo]/Property: pruned empty Property
    Environment/Submodel[urn:demo]: filled blank idShort with "EMPTY"
    "#);
}

#[test]
fn language_and_reference_repairs() {
    let mut submodel = Submodel::new("urn:demo");
    submodel.submodel_elements = vec![SubmodelElement::MultiLanguageProperty(
        MultiLanguageProperty {
            id_short: Some("labels".to_string()),
            semantic_id: Some(Reference::new(
                ReferenceType::ExternalReference,
                vec![Key::new(KeyType::GlobalReference, " ")],
            )),
            value: vec![
                LangString::new("EN", "Hello"),
                LangString::new("??", ""),
                LangString::new("de", "  "),
            ],
            ..MultiLanguageProperty::default()
        },
    )];
    let env = Environment {
        submodels: vec![submodel],
        ..Environment::default()
    };

    let (_, report) = normalize(env);

    assert_snapshot!(rendered(&report), @r#"
    Environment/Submodel[urn:demo]/MultiLanguageProperty[labels]: dropped key with blank value
    Environment/Submodel[urn:demo]/MultiLanguageProperty[labels]: pruned empty Reference
    Environment/Submodel[urn:demo]/MultiLanguageProperty[labels]: coerced language tag "EN" to "en"
    Environment/Submodel[urn:demo]/MultiLanguageProperty[labels]: dropped empty language string
    Environment/Submodel[urn:demo]/MultiLanguageProperty[labels]: filled blank text for language "de"
    "#);
}

#[test]
fn failure_lines_follow_repair_lines() {
    let mut broken = ConceptDescription::new("urn:cd:broken");
    broken.category = Some(" ".to_string());
    broken.embedded_data_specifications = vec![EmbeddedDataSpecification::default()];
    let env = Environment {
        concept_descriptions: vec![broken],
        ..Environment::default()
    };

    let (_, report) = fix_and_finalize(env);

    assert_snapshot!(rendered(&report), @r#"
    Environment/ConceptDescription[urn:cd:broken]/EmbeddedDataSpecification: pruned empty EmbeddedDataSpecification
    Environment/ConceptDescription[urn:cd:broken]: cleared blank category
    error: concept description `urn:cd:broken`: data specification 0 has neither content nor a usable reference
    "#);
}

#[test]
fn synthesized_slots_and_backfills() {
    let mut submodel = Submodel::new("urn:demo");
    submodel.submodel_elements = vec![SubmodelElement::RelationshipElement(
        RelationshipElement {
            id_short: Some("wires".to_string()),
            first: Reference::new(
                ReferenceType::ExternalReference,
                vec![Key::new(KeyType::GlobalReference, "")],
            ),
            second: Reference::external("urn:plug"),
            ..RelationshipElement::default()
        },
    )];
    let env = Environment {
        submodels: vec![submodel],
        ..Environment::default()
    };

    let (_, report) = normalize(env);

    assert_snapshot!(rendered(&report), @r#"
    Environment/Submodel[urn:demo]/RelationshipElement[wires]: dropped key with blank value
    Environment/Submodel[urn:demo]/RelationshipElement[wires]: pruned empty Reference
    Environment/Submodel[urn:demo]/RelationshipElement[wires]: replaced removed first reference with placeholder
    "#);
}
