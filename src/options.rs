// src/options.rs
use std::path::Path;

use serde_json::Value;

/// Single-character flags callers may set, with the meaning each one has
/// for the simulation executable. Anything not listed here is dropped
/// from the request without comment.
pub const ALLOWED_FLAGS: [(char, &str); 13] = [
    ('V', "intracellular volume"),
    ('n', "target molecule count"),
    ('r', "replication threshold"),
    ('k', "killing threshold"),
    ('R', "baseline replication rate"),
    ('K', "maximum kill rate"),
    ('A', "target association rate"),
    ('D', "target dissociation rate"),
    ('C', "carrying capacity"),
    ('t', "end time and step size, colon separated"),
    ('d', "starting antibiotic amount"),
    ('p', "starting population"),
    ('S', "solver selection"),
];

/// Flag naming the results file. Reserved: the service sets it per run
/// and caller input can never override it.
pub const RESULTS_FLAG: char = 'm';

/// Always-on verbose flag appended to every invocation.
pub const VERBOSE_FLAG: char = 'v';

/// The ordered set of flags forwarded to one simulation run.
#[derive(Debug, Default, Clone)]
pub struct OptionSet {
    entries: Vec<(char, String)>,
}

impl OptionSet {
    /// Copy every whitelisted scalar out of a decoded JSON body, in
    /// whitelist order. A body that is not a JSON object contributes
    /// nothing.
    pub fn from_body(body: &Value) -> Self {
        let mut set = OptionSet::default();
        let Some(object) = body.as_object() else {
            return set;
        };
        for (flag, _) in ALLOWED_FLAGS {
            if let Some(value) = object.get(&flag.to_string()) {
                if let Some(rendered) = render_scalar(value) {
                    set.entries.push((flag, rendered));
                }
            }
        }
        set
    }

    /// Inject the reserved results-file entry. Called once per run with
    /// that run's scratch path.
    pub fn set_results_path(&mut self, path: &Path) {
        self.entries
            .push((RESULTS_FLAG, path.display().to_string()));
    }

    /// Render the argument vector: `-<flag> <value>` per entry in
    /// insertion order, then the verbose flag. Each value is a discrete
    /// argument, so no quoting or escaping is ever needed.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.entries.len() * 2 + 1);
        for (flag, value) in &self.entries {
            args.push(format!("-{}", flag));
            args.push(value.clone());
        }
        args.push(format!("-{}", VERBOSE_FLAG));
        args
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scalars pass through; integers must not grow a spurious `.0`, so the
/// JSON number renders itself. Arrays, objects, booleans and nulls are
/// not meaningful as flag values and are skipped.
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whitelisted_keys_are_copied_in_order() {
        let body = json!({"t": "100:0.1", "n": 500, "V": 1.5e-15});
        let set = OptionSet::from_body(&body);
        // whitelist order, not body order
        assert_eq!(
            set.to_args(),
            vec!["-V", "1.5e-15", "-n", "500", "-t", "100:0.1", "-v"]
        );
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let body = json!({"n": 10, "bogus": 42, "mm": "x"});
        let set = OptionSet::from_body(&body);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_args(), vec!["-n", "10", "-v"]);
    }

    #[test]
    fn test_results_flag_cannot_be_set_by_caller() {
        let body = json!({"m": "/tmp/evil", "n": 1});
        let mut set = OptionSet::from_body(&body);
        assert_eq!(set.len(), 1);

        set.set_results_path(Path::new("/scratch/run-1/output.out"));
        assert_eq!(
            set.to_args(),
            vec!["-n", "1", "-m", "/scratch/run-1/output.out", "-v"]
        );
    }

    #[test]
    fn test_integers_render_without_decimal_point() {
        let body = json!({"n": 100, "R": 0.03});
        let set = OptionSet::from_body(&body);
        assert_eq!(set.to_args(), vec!["-n", "100", "-R", "0.03", "-v"]);
    }

    #[test]
    fn test_non_scalar_values_are_skipped() {
        let body = json!({"n": [1, 2], "r": {"a": 1}, "k": null, "p": 7});
        let set = OptionSet::from_body(&body);
        assert_eq!(set.to_args(), vec!["-p", "7", "-v"]);
    }

    #[test]
    fn test_non_object_body_yields_empty_set() {
        assert!(OptionSet::from_body(&json!([1, 2, 3])).is_empty());
        assert!(OptionSet::from_body(&json!(42)).is_empty());
        assert!(OptionSet::from_body(&json!(null)).is_empty());
    }

    #[test]
    fn test_empty_set_still_gets_verbose_flag() {
        let set = OptionSet::default();
        assert_eq!(set.to_args(), vec!["-v"]);
    }
}
