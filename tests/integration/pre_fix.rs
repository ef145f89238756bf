//! The pre-fix pass through the public API, alone and combined with
//! normalization via `fix_and_finalize`.

use aas_normalize::model::*;
use aas_normalize::{Repair, Report, fix_and_finalize, normalize_with, pre_fix, pre_fix_with};

fn concept_env(specs: Vec<EmbeddedDataSpecification>) -> Environment {
    let mut concept = ConceptDescription::new("urn:cd");
    concept.embedded_data_specifications = specs;
    Environment {
        concept_descriptions: vec![concept],
        ..Environment::default()
    }
}

fn iec_content(preferred_name: Vec<LangString>) -> DataSpecificationContent {
    DataSpecificationContent::Iec61360(DataSpecificationIec61360 {
        preferred_name,
        ..DataSpecificationIec61360::default()
    })
}

#[test]
fn test_pre_fix_and_normalize_cooperate_on_preferred_names() {
    // The pre-fix only defaults a preferred name that is already absent.
    // This one is present but bogus; it takes the normalization pass to
    // drop it and refill the default.
    let unusable = Reference::new(
        ReferenceType::ExternalReference,
        vec![Key::new(KeyType::GlobalReference, "  ")],
    );
    let env = concept_env(vec![EmbeddedDataSpecification {
        data_specification: Some(unusable),
        data_specification_content: Some(iec_content(vec![LangString::new(" ", " ")])),
    }]);

    let (env, report) = fix_and_finalize(env);

    let eds = &env.concept_descriptions[0].embedded_data_specifications[0];
    assert_eq!(
        eds.data_specification.as_ref().unwrap().keys[0].value,
        IEC_61360_TEMPLATE_IRI
    );
    let Some(DataSpecificationContent::Iec61360(data)) = &eds.data_specification_content else {
        panic!("content missing");
    };
    assert_eq!(data.preferred_name, vec![LangString::new("en", "EMPTY")]);

    let saw = |pred: fn(&Repair) -> bool| report.repairs().iter().any(|r| pred(r));
    assert!(saw(|r| matches!(r, Repair::RegeneratedDataSpecification { .. })));
    assert!(saw(|r| matches!(r, Repair::DroppedLangString { .. })));
    assert!(saw(|r| matches!(r, Repair::DefaultedPreferredName { .. })));
    assert!(report.is_clean());
}

#[test]
fn test_failed_concept_still_flows_through_normalization() {
    let mut broken = ConceptDescription::new("urn:cd:broken");
    broken.id_short = Some("  ".to_string());
    broken.embedded_data_specifications = vec![EmbeddedDataSpecification {
        data_specification: None,
        data_specification_content: None,
    }];
    let env = Environment {
        concept_descriptions: vec![broken],
        ..Environment::default()
    };

    let (env, report) = fix_and_finalize(env);

    assert_eq!(report.failure_count(), 1);
    assert!(!report.is_clean());

    // The failure did not exempt the concept from the main pass: its blank
    // idShort was filled and the hollow data specification was pruned.
    let concept = &env.concept_descriptions[0];
    assert_eq!(concept.id_short.as_deref(), Some("EMPTY"));
    assert!(concept.embedded_data_specifications.is_empty());
    assert!(report.repairs().iter().any(|r| matches!(
        r,
        Repair::Pruned {
            kind: NodeKind::EmbeddedDataSpecification,
            ..
        }
    )));
}

#[test]
fn test_failure_line_names_the_concept_and_slot() {
    let mut broken = ConceptDescription::new("urn:cd:broken");
    broken.embedded_data_specifications = vec![EmbeddedDataSpecification::default()];
    let mut env = Environment {
        concept_descriptions: vec![broken],
        ..Environment::default()
    };

    let report = pre_fix(&mut env);

    let rendered = report.to_string();
    assert!(
        rendered.contains(
            "error: concept description `urn:cd:broken`: data specification 0 \
             has neither content nor a usable reference"
        ),
        "got: {rendered}"
    );
}

#[test]
fn test_pre_fix_is_idempotent() {
    let mut env = concept_env(vec![EmbeddedDataSpecification {
        data_specification: None,
        data_specification_content: Some(iec_content(Vec::new())),
    }]);

    let first = pre_fix(&mut env);
    assert_eq!(first.repair_count(), 2);

    let second = pre_fix(&mut env);
    assert!(second.is_empty(), "second pass found work: {second}");
}

#[test]
fn test_fix_and_finalize_matches_the_manual_sequence() {
    let env = concept_env(vec![EmbeddedDataSpecification {
        data_specification: None,
        data_specification_content: Some(iec_content(vec![LangString::new("EN", "Torque")])),
    }]);

    let (combined_env, combined_report) = fix_and_finalize(env.clone());

    let mut manual_env = env;
    let mut manual_report = Report::new();
    pre_fix_with(&mut manual_env, &mut manual_report);
    let manual_env = normalize_with(manual_env, &mut manual_report);

    assert_eq!(combined_env, manual_env);
    assert_eq!(combined_report, manual_report);
}
