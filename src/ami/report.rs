use crate::ami::record::AmiRecord;
use crate::error::Result;
use serde_json::{json, Map as JsonMap, Value};
use std::fs;
use std::path::Path;

/// Build the `{region: {"ami": id}}` entries every emitter shares, in the
/// order of the filtered record set.
pub fn doc_entries(records: &[AmiRecord]) -> Vec<Value> {
    records
        .iter()
        .map(|r| {
            let mut entry = JsonMap::new();
            entry.insert(r.region.clone(), json!({ "ami": r.ami_id }));
            Value::Object(entry)
        })
        .collect()
}

/// The structured document: the full entry list, pretty-printed.
pub fn write_doc_json(path: &Path, entries: &[Value]) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

/// The record stream: one compact entry per line.
pub fn write_doc_ndjson(path: &Path, entries: &[Value]) -> Result<()> {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        lines.push(serde_json::to_string(entry)?);
    }
    fs::write(path, lines.join("\n"))?;
    Ok(())
}

/// The line fragment: re-reads the record stream from disk and rewrites each
/// line with the outer braces stripped and a trailing comma, for pasting
/// into a TypeScript object literal.
pub fn write_doc_ts(ts_path: &Path, ndjson_path: &Path) -> Result<()> {
    let stream = fs::read_to_string(ndjson_path)?;

    let mut out = String::new();
    for line in stream.lines() {
        let fragment = line.strip_prefix('{').unwrap_or(line);
        let fragment = fragment.strip_suffix('}').unwrap_or(fragment);
        out.push_str(fragment);
        out.push_str(",\n");
    }

    fs::write(ts_path, out)?;
    Ok(())
}

/// The visibility-toggle script: one active grant-public command per entry,
/// then the matching revoke commands, each commented out so they are inert
/// until an operator uncomments them. The script is marked executable.
pub fn write_command_script(path: &Path, entries: &[Value]) -> Result<()> {
    let mut make_public = Vec::new();
    let mut make_private = Vec::new();

    for entry in entries {
        if let Value::Object(map) = entry {
            for (region, body) in map {
                if let Some(ami) = body.get("ami").and_then(Value::as_str) {
                    make_public.push(format!(
                        "aws ec2 modify-image-attribute --region {} --image-id {} --launch-permission 'Add=[{{Group=all}}]'",
                        region, ami
                    ));
                    make_private.push(format!(
                        "aws ec2 modify-image-attribute --region {} --image-id {} --launch-permission 'Remove=[{{Group=all}}]'",
                        region, ami
                    ));
                }
            }
        }
    }

    let mut script = String::new();
    for cmd in &make_public {
        script.push_str(cmd);
        script.push('\n');
    }
    for cmd in &make_private {
        script.push('#');
        script.push_str(cmd);
        script.push('\n');
    }

    fs::write(path, script)?;
    set_executable(path)?;
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
