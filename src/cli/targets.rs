//! Target set resolution.
//!
//! Host commands accept their target list from exactly one of three sources:
//! positional arguments, a JSON array on stdin (`--json`), or a JSON array in
//! a file (`--json-file`). Anything else is a configuration error caught
//! before any network call. No semantic validation happens here; whether a
//! host exists is the scheduler's concern.

use std::fs;
use std::io::Read;

use thiserror::Error;

use crate::cli::types::HostSourceArgs;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("targets must come from exactly one source: positional arguments, --json, or --json-file")]
    ConflictingSources,

    #[error("at least one target must be specified")]
    NoTargets,

    #[error("failed to read target list: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON target list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolve the target list from the given source arguments, reading stdin if
/// `--json` was passed.
pub fn resolve(args: &HostSourceArgs) -> Result<Vec<String>, TargetError> {
    resolve_with_stdin(args, std::io::stdin().lock())
}

fn resolve_with_stdin<R: Read>(args: &HostSourceArgs, mut stdin: R) -> Result<Vec<String>, TargetError> {
    let sources =
        usize::from(!args.hosts.is_empty()) + usize::from(args.json) + usize::from(args.json_file.is_some());
    if sources > 1 {
        return Err(TargetError::ConflictingSources);
    }

    let targets: Vec<String> = if args.json {
        let mut raw = String::new();
        stdin.read_to_string(&mut raw)?;
        serde_json::from_str(&raw)?
    } else if let Some(path) = &args.json_file {
        serde_json::from_str(&fs::read_to_string(path)?)?
    } else {
        args.hosts.clone()
    };

    if targets.is_empty() {
        return Err(TargetError::NoTargets);
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn args(hosts: &[&str], json: bool, json_file: Option<PathBuf>) -> HostSourceArgs {
        HostSourceArgs {
            hosts: hosts.iter().map(|h| (*h).to_string()).collect(),
            json,
            json_file,
        }
    }

    #[test]
    fn positional_hosts_pass_through_in_order() {
        let resolved =
            resolve_with_stdin(&args(&["host-b", "host-a"], false, None), std::io::empty())
                .unwrap();
        assert_eq!(resolved, vec!["host-b", "host-a"]);
    }

    #[test]
    fn stdin_json_array_is_accepted() {
        let resolved = resolve_with_stdin(
            &args(&[], true, None),
            r#"["host-a", "host-b"]"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(resolved, vec!["host-a", "host-b"]);
    }

    #[test]
    fn json_file_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["host-c"]"#).unwrap();

        let resolved = resolve_with_stdin(
            &args(&[], false, Some(file.path().to_path_buf())),
            std::io::empty(),
        )
        .unwrap();
        assert_eq!(resolved, vec!["host-c"]);
    }

    #[test]
    fn stdin_and_file_sources_conflict() {
        let err = resolve_with_stdin(
            &args(&[], true, Some(PathBuf::from("/tmp/hosts.json"))),
            std::io::empty(),
        )
        .unwrap_err();
        assert!(matches!(err, TargetError::ConflictingSources));
    }

    #[test]
    fn positional_and_stdin_sources_conflict() {
        let err = resolve_with_stdin(&args(&["host-a"], true, None), std::io::empty())
            .unwrap_err();
        assert!(matches!(err, TargetError::ConflictingSources));
    }

    #[test]
    fn no_source_at_all_is_rejected() {
        let err = resolve_with_stdin(&args(&[], false, None), std::io::empty()).unwrap_err();
        assert!(matches!(err, TargetError::NoTargets));
    }

    #[test]
    fn empty_json_array_is_rejected() {
        let err = resolve_with_stdin(&args(&[], true, None), "[]".as_bytes()).unwrap_err();
        assert!(matches!(err, TargetError::NoTargets));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err =
            resolve_with_stdin(&args(&[], true, None), "host-a host-b".as_bytes()).unwrap_err();
        assert!(matches!(err, TargetError::Json(_)));
    }
}
