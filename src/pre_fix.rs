//! Best-effort repair of concept descriptions, run before normalization.
//!
//! The main pass assumes data specifications are at least self-consistent.
//! Documents written by older tooling break that assumption in two ways:
//! the reference half of an embedded data specification is missing or
//! points nowhere, and IEC 61360 content arrives without a preferred name.
//! Both are fixed here, in place.
//!
//! The pass is deliberately tolerant: a concept description that cannot be
//! repaired is recorded as a failure and left as found, and processing
//! continues with the next one. A partial failure never prevents the
//! subsequent [`normalize`](crate::normalize) run.

use crate::diagnostics::{PreFixError, Repair, Report};
use crate::model::{
    ConceptDescription, DataSpecificationContent, Environment, IEC_61360_TEMPLATE_IRI, LangString,
    Reference,
};
use crate::normalize::{FALLBACK_LANGUAGE, PLACEHOLDER};

/// Repairs every concept description in `env` and reports what was done.
pub fn pre_fix(env: &mut Environment) -> Report {
    let mut report = Report::new();
    pre_fix_with(env, &mut report);
    report
}

/// Like [`pre_fix`], accumulating into an existing report.
pub fn pre_fix_with(env: &mut Environment, report: &mut Report) {
    for concept in &mut env.concept_descriptions {
        if let Err(failure) = fix_concept(concept, report) {
            report.fail(failure);
        }
    }
}

/// Repairs one concept description. The first unrecoverable data
/// specification aborts this concept; whatever was already fixed stays
/// fixed.
fn fix_concept(concept: &mut ConceptDescription, report: &mut Report) -> Result<(), PreFixError> {
    let path = format!("Environment/ConceptDescription[{}]", concept.id);
    for (index, eds) in concept.embedded_data_specifications.iter_mut().enumerate() {
        let usable = eds
            .data_specification
            .as_ref()
            .is_some_and(reference_is_usable);
        match &mut eds.data_specification_content {
            Some(content) => {
                if !usable {
                    eds.data_specification = Some(template_reference(content));
                    report.push(Repair::RegeneratedDataSpecification { path: path.clone() });
                }
                let DataSpecificationContent::Iec61360(data) = content;
                if data.preferred_name.is_empty() {
                    data.preferred_name
                        .push(LangString::new(FALLBACK_LANGUAGE, PLACEHOLDER));
                    report.push(Repair::DefaultedPreferredName { path: path.clone() });
                }
            }
            None => {
                if !usable {
                    return Err(PreFixError::unrecoverable(&concept.id, index));
                }
            }
        }
    }
    Ok(())
}

/// A reference can locate something only if at least one of its keys has a
/// non-blank value.
fn reference_is_usable(reference: &Reference) -> bool {
    reference.keys.iter().any(|key| !key.value.trim().is_empty())
}

/// The canonical reference for a given content kind.
fn template_reference(content: &DataSpecificationContent) -> Reference {
    match content {
        DataSpecificationContent::Iec61360(_) => Reference::external(IEC_61360_TEMPLATE_IRI),
    }
}
