use crate::cli::{ArgsSource, RenderArgs, TemplateSource};
use crate::config::ConfigFile;
use sqltmpl::{BuildQuery, QueryBuilder, Value, skip};

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let file = ConfigFile::load(args.config.as_deref())?;
    let config = file.build_config(args.quote_style.as_deref())?;

    let template = read_template(&args.template)?;
    let values = read_args(&args.args)?;

    let sql = QueryBuilder::with_config(config).build_query(&template, values)?;
    println!("{sql}");
    Ok(())
}

pub fn read_template(source: &TemplateSource) -> anyhow::Result<String> {
    match source {
        TemplateSource::Inline(s) => Ok(s.clone()),
        TemplateSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("failed to read template file {}: {e}", path.display())
            })?;
            // Editors add a trailing newline; it is not part of the statement.
            Ok(raw.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn read_args(source: &ArgsSource) -> anyhow::Result<Vec<Value>> {
    match source {
        ArgsSource::None => Ok(Vec::new()),
        ArgsSource::Inline(raw) => parse_json_args(raw),
        ArgsSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("failed to read args file {}: {e}", path.display())
            })?;
            parse_json_args(&raw)
                .map_err(|e| anyhow::anyhow!("invalid args file {}: {e}", path.display()))
        }
    }
}

/// Parse a JSON array of arguments. A top-level `{"$skip": true}` element is the skip marker.
pub fn parse_json_args(raw: &str) -> anyhow::Result<Vec<Value>> {
    let json: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("invalid JSON arguments: {e}"))?;
    let serde_json::Value::Array(items) = json else {
        anyhow::bail!("arguments must be a JSON array");
    };

    Ok(items
        .into_iter()
        .map(|item| {
            if is_skip_marker(&item) {
                skip().into()
            } else {
                Value::from(item)
            }
        })
        .collect())
}

fn is_skip_marker(item: &serde_json::Value) -> bool {
    match item {
        serde_json::Value::Object(map) => {
            map.len() == 1 && map.get("$skip") == Some(&serde_json::Value::Bool(true))
        }
        _ => false,
    }
}
