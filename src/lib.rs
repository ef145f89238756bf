pub mod model;
pub mod diagnostics;
pub mod langtag;
pub mod numeric;
pub mod visit;
pub mod normalize;
pub mod pre_fix;

pub use diagnostics::{PreFixError, Repair, Report};
pub use model::Environment;
pub use normalize::Normalizer;
pub use pre_fix::{pre_fix, pre_fix_with};
pub use visit::Transform;

/// Normalize an environment (recurse → clean blanks → inject placeholders →
/// coerce values → prune empty nodes). Returns the rebuilt environment and
/// the record of every repair.
pub fn normalize(env: Environment) -> (Environment, Report) {
    let mut report = Report::new();
    let env = normalize_with(env, &mut report);
    (env, report)
}

/// Like [`normalize`], accumulating into an existing report.
pub fn normalize_with(env: Environment, report: &mut Report) -> Environment {
    let mut normalizer = Normalizer::new(report);
    normalizer.transform_environment(env)
}

/// The full repair workflow (pre-fix → normalize). Pre-fix failures are
/// recorded in the report and do not stop normalization.
pub fn fix_and_finalize(mut env: Environment) -> (Environment, Report) {
    let mut report = Report::new();
    pre_fix_with(&mut env, &mut report);
    let env = normalize_with(env, &mut report);
    (env, report)
}
