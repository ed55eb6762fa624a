//! Parsing and display formatting for the args and env columns.
//!
//! Both are edited as single comma-delimited strings.

use indexmap::IndexMap;

/// Split a comma-delimited args string. Tokens are trimmed; empty tokens
/// are dropped, never kept as empty-string arguments.
pub fn parse_args(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `K=V,K2=V2` pairs into an env mapping. Each pair splits on the
/// first `=`; a token without one is skipped, never an error.
pub fn parse_env(input: &str) -> IndexMap<String, String> {
    let mut env = IndexMap::new();
    for pair in input.split(',') {
        if let Some((key, value)) = pair.split_once('=') {
            env.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    env
}

/// Args column text: tokens joined with `", "`.
pub fn format_args(args: &[String]) -> String {
    args.join(", ")
}

/// Env column text: `k=v` pairs joined with `", "`.
pub fn format_env(env: &IndexMap<String, String>) -> String {
    env.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
