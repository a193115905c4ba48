//! Tool list loading.
//!
//! Two formats are accepted:
//! - A JSON array of `{"id": ..., "name": ..., "url": ...}` objects (`name`
//!   optional)
//! - Plain text with one tool per line: `url`, `id url` or `id url name…`.
//!   Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use log::debug;

use crate::collect::Tool;
use crate::error_handling::InputError;

/// Reads and parses the tool list at `path`.
pub fn load_tools(path: &Path) -> Result<Vec<Tool>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tools = parse_tools(&contents, path)?;
    debug!("Loaded {} tools from {}", tools.len(), path.display());
    Ok(tools)
}

/// Parses a tool list; `path` is only used in error messages.
pub fn parse_tools(contents: &str, path: &Path) -> Result<Vec<Tool>, InputError> {
    if contents.trim_start().starts_with('[') {
        let mut tools: Vec<Tool> =
            serde_json::from_str(contents).map_err(|source| InputError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        for tool in &mut tools {
            if tool.name.trim().is_empty() {
                tool.name = tool.id.clone();
            }
        }
        return Ok(tools);
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            parse_line(line).ok_or_else(|| InputError::MissingUrl {
                path: path.to_path_buf(),
                line: index + 1,
            })
        })
        .collect()
}

fn looks_like_url(token: &str) -> bool {
    token.contains("://") || (token.contains('.') && !token.starts_with('.'))
}

/// Turns a host into an id: `www.Planform.ai` becomes `planform-ai`.
fn slug_from_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme);
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

fn parse_line(line: &str) -> Option<Tool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (id, url, rest) = match tokens.as_slice() {
        [url, rest @ ..] if looks_like_url(url) => (slug_from_url(url), *url, rest),
        [id, url, rest @ ..] if looks_like_url(url) => (id.to_string(), *url, rest),
        _ => return None,
    };
    let name = if rest.is_empty() {
        id.clone()
    } else {
        rest.join(" ")
    };
    Some(Tool {
        id,
        name,
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(contents: &str) -> Result<Vec<Tool>, InputError> {
        parse_tools(contents, &PathBuf::from("tools.txt"))
    }

    #[test]
    fn test_json_array() {
        let tools = parse(
            r#"[{"id":"planform","name":"Planform","url":"https://planform.ai"},
                {"id":"roomgpt","url":"roomgpt.io"}]"#,
        )
        .unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Planform");
        assert_eq!(tools[1].name, "roomgpt");
        assert_eq!(tools[1].url, "roomgpt.io");
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        assert!(matches!(parse("[{\"id\": 1}"), Err(InputError::Json { .. })));
    }

    #[test]
    fn test_text_lines() {
        let tools = parse(
            "# tools to refresh\n\nhttps://www.Planform.ai/app\nroomgpt https://roomgpt.io\nmaket maket.ai Maket AI Studio\n",
        )
        .unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].id, "planform-ai");
        assert_eq!(tools[0].url, "https://www.Planform.ai/app");
        assert_eq!(tools[1].id, "roomgpt");
        assert_eq!(tools[1].name, "roomgpt");
        assert_eq!(tools[2].name, "Maket AI Studio");
        assert_eq!(tools[2].url, "maket.ai");
    }

    #[test]
    fn test_line_without_url_reports_line_number() {
        match parse("planform.ai\njust-an-id\n") {
            Err(InputError::MissingUrl { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MissingUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_tools(&dir.path().join("absent.json")),
            Err(InputError::Read { .. })
        ));
    }
}
