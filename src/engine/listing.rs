//! Parsing of `container ls --format {{.Names}}` output

use crate::error::ParseError;
use serde::Serialize;

/// Single line of the container listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerRecord {
    /// Line in the engine output this record came from, starting at 1
    pub line: usize,

    /// Names of the container itself
    pub names: Vec<String>,

    /// Legacy link aliases (`other/name`) docker may print next to the names, these are not
    /// container names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl ContainerRecord {
    /// Exact, case-sensitive match against the names, aliases never match
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|x| x == name)
    }
}

/// Docker and podman both require `[a-zA-Z0-9][a-zA-Z0-9_.-]*`
fn is_valid_name(token: &str) -> bool {
    let mut chars = token.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Link alias is `<container>/<alias>`, both parts valid names
fn is_valid_alias(token: &str) -> bool {
    token
        .split_once('/')
        .is_some_and(|(container, alias)| is_valid_name(container) && is_valid_name(alias))
}

/// Splits raw engine output into records, one per non-blank line
pub fn parse_listing_bytes(stdout: &[u8]) -> Result<Vec<ContainerRecord>, ParseError> {
    let stdout = std::str::from_utf8(stdout).map_err(|_| ParseError::NotUtf8)?;

    parse_listing(stdout)
}

/// Splits engine output into records, one per non-blank line
///
/// Records are separated by `\n` and names inside a record by `,`, whitespace around names and a
/// leading `/` are formatting added by the engine. Tokens with a `/` left are link aliases
pub fn parse_listing(stdout: &str) -> Result<Vec<ContainerRecord>, ParseError> {
    let mut records = vec![];

    for (index, line) in stdout.split('\n').enumerate() {
        let line_no = index + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            continue;
        }

        let mut names = vec![];
        let mut aliases = vec![];
        for token in line.split(',') {
            let token = token.trim();
            let name = token.strip_prefix('/').unwrap_or(token);

            if is_valid_name(name) {
                names.push(name.to_string());
            } else if is_valid_alias(name) {
                aliases.push(name.to_string());
            } else {
                return Err(ParseError::InvalidName {
                    line: line_no,
                    token: token.to_string(),
                });
            }
        }

        log::trace!("Line {line_no}: container names {names:?}, aliases {aliases:?}");

        records.push(ContainerRecord {
            line: line_no,
            names,
            aliases,
        });
    }

    Ok(records)
}
