//! Structured records of what normalization changed and what the pre-fix
//! pass could not repair.
//!
//! Nothing here is ever printed by the crate itself. Callers drain the
//! [`Report`] and decide what to do with it; every record implements
//! `Display` so emitting it as a log line is one `format!` away.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::{NodeKind, ReferenceType};
use crate::normalize::PLACEHOLDER;

/// One repair applied during normalization, located by a breadcrumb path of
/// the enclosing identifiables and elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Repair {
    /// A present-but-blank idShort was replaced with the placeholder.
    FilledIdShort { path: String },
    /// An optional string field was blank and became absent.
    ClearedField { path: String, field: &'static str },
    /// A typed property value was re-rendered in canonical form.
    ReformattedValue {
        path: String,
        from: String,
        to: String,
    },
    /// A language tag was invalid or blank and was replaced.
    CoercedLanguage {
        path: String,
        from: String,
        to: String,
    },
    /// A language string had a usable tag but blank text.
    FilledLangText { path: String, language: String },
    /// A language string with neither usable tag nor text was removed.
    DroppedLangString { path: String },
    /// A key with a blank value was removed from its reference.
    DroppedKey { path: String },
    /// The declared reference type contradicted the first key and was fixed.
    RetypedReference { path: String, to: ReferenceType },
    /// A mandatory reference slot lost its value and got the placeholder.
    SynthesizedReference { path: String, slot: &'static str },
    /// A data specification had content but no reference.
    BackfilledDataSpecification { path: String },
    /// A data specification reference was rebuilt from its content kind.
    RegeneratedDataSpecification { path: String },
    /// An IEC 61360 preferred name was empty and got the default entry.
    DefaultedPreferredName { path: String },
    /// A node became semantically empty and was removed by its parent.
    Pruned { path: String, kind: NodeKind },
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::FilledIdShort { path } => {
                write!(f, "{path}: filled blank idShort with \"{PLACEHOLDER}\"")
            }
            Repair::ClearedField { path, field } => {
                write!(f, "{path}: cleared blank {field}")
            }
            Repair::ReformattedValue { path, from, to } => {
                write!(f, "{path}: reformatted value \"{from}\" as \"{to}\"")
            }
            Repair::CoercedLanguage { path, from, to } => {
                write!(f, "{path}: coerced language tag \"{from}\" to \"{to}\"")
            }
            Repair::FilledLangText { path, language } => {
                write!(f, "{path}: filled blank text for language \"{language}\"")
            }
            Repair::DroppedLangString { path } => {
                write!(f, "{path}: dropped empty language string")
            }
            Repair::DroppedKey { path } => {
                write!(f, "{path}: dropped key with blank value")
            }
            Repair::RetypedReference { path, to } => {
                write!(f, "{path}: retyped reference as {to:?}")
            }
            Repair::SynthesizedReference { path, slot } => {
                write!(f, "{path}: replaced removed {slot} reference with placeholder")
            }
            Repair::BackfilledDataSpecification { path } => {
                write!(f, "{path}: backfilled missing data specification reference")
            }
            Repair::RegeneratedDataSpecification { path } => {
                write!(f, "{path}: regenerated data specification reference from content")
            }
            Repair::DefaultedPreferredName { path } => {
                write!(f, "{path}: defaulted preferred name to \"{PLACEHOLDER}\"")
            }
            Repair::Pruned { path, kind } => {
                write!(f, "{path}: pruned empty {kind}")
            }
        }
    }
}

/// Failure of the pre-fix pass for a single concept description. The batch
/// keeps going; the failure is recorded and the concept is left as found.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum PreFixError {
    #[error(
        "concept description `{id}`: data specification {index} has neither content nor a usable reference"
    )]
    UnrecoverableDataSpecification { id: String, index: usize },
}

impl PreFixError {
    pub fn unrecoverable(id: impl Into<String>, index: usize) -> Self {
        Self::UnrecoverableDataSpecification { id: id.into(), index }
    }
}

/// Accumulated outcome of the repair passes over one environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    repairs: Vec<Repair>,
    failures: Vec<PreFixError>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn push(&mut self, repair: Repair) {
        self.repairs.push(repair);
    }

    pub fn fail(&mut self, failure: PreFixError) {
        self.failures.push(failure);
    }

    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    pub fn failures(&self) -> &[PreFixError] {
        &self.failures
    }

    /// No repairs and no failures: the input was already normal.
    pub fn is_empty(&self) -> bool {
        self.repairs.is_empty() && self.failures.is_empty()
    }

    /// True when every concept description survived the pre-fix pass.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn repair_count(&self) -> usize {
        self.repairs.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for repair in &self.repairs {
            writeln!(f, "{repair}")?;
        }
        for failure in &self.failures {
            writeln!(f, "error: {failure}")?;
        }
        Ok(())
    }
}
