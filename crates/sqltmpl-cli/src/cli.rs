use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
    Scan,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
    Scan(ScanArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsSource {
    None,
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub template: TemplateSource,
    pub args: ArgsSource,
    /// `None` means the default `sqltmpl.toml`, which may be absent.
    pub config: Option<PathBuf>,
    pub quote_style: Option<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub template: TemplateSource,
    pub verbose: bool,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        "scan" => parse_scan(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

/// Value of `--name <v>` or `--name=<v>`, if `token` is that option.
fn option_value<'a>(
    token: &'a str,
    name: &str,
    it: &mut impl Iterator<Item = &'a str>,
) -> anyhow::Result<Option<&'a str>> {
    if token == name {
        let Some(v) = it.next() else {
            anyhow::bail!("{name} requires a value");
        };
        return Ok(Some(v));
    }
    Ok(token
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('=')))
}

fn set_template(
    slot: &mut Option<TemplateSource>,
    source: TemplateSource,
) -> anyhow::Result<()> {
    if slot.is_some() {
        anyhow::bail!("template given more than once (use one of --template, --file, or a positional template)");
    }
    *slot = Some(source);
    Ok(())
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut template: Option<TemplateSource> = None;
    let mut args = ArgsSource::None;
    let mut config: Option<PathBuf> = None;
    let mut quote_style: Option<String> = None;
    let mut verbose = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "-v" | "--verbose" => verbose = true,
            _ => {
                if let Some(v) = option_value(token, "--template", &mut it)? {
                    set_template(&mut template, TemplateSource::Inline(v.to_string()))?;
                } else if let Some(v) = option_value(token, "--file", &mut it)? {
                    set_template(&mut template, TemplateSource::File(PathBuf::from(v)))?;
                } else if let Some(v) = option_value(token, "--args", &mut it)? {
                    if args != ArgsSource::None {
                        anyhow::bail!("arguments given more than once");
                    }
                    args = ArgsSource::Inline(v.to_string());
                } else if let Some(v) = option_value(token, "--args-file", &mut it)? {
                    if args != ArgsSource::None {
                        anyhow::bail!("arguments given more than once");
                    }
                    args = ArgsSource::File(PathBuf::from(v));
                } else if let Some(v) = option_value(token, "--config", &mut it)? {
                    config = Some(PathBuf::from(v));
                } else if let Some(v) = option_value(token, "--quote-style", &mut it)? {
                    quote_style = Some(v.to_string());
                } else if token.starts_with('-') {
                    anyhow::bail!("unknown option for render: {token}");
                } else {
                    set_template(&mut template, TemplateSource::Inline(token.to_string()))?;
                }
            }
        }
    }

    let Some(template) = template else {
        anyhow::bail!("render requires a template (--template, --file, or positional)");
    };

    Ok(Command::Render(RenderArgs {
        template,
        args,
        config,
        quote_style,
        verbose,
    }))
}

fn parse_scan<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut template: Option<TemplateSource> = None;
    let mut verbose = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Scan)),
            "-v" | "--verbose" => verbose = true,
            _ => {
                if let Some(v) = option_value(token, "--file", &mut it)? {
                    set_template(&mut template, TemplateSource::File(PathBuf::from(v)))?;
                } else if token.starts_with('-') {
                    anyhow::bail!("unknown option for scan: {token}");
                } else {
                    set_template(&mut template, TemplateSource::Inline(token.to_string()))?;
                }
            }
        }
    }

    let Some(template) = template else {
        anyhow::bail!("scan requires a template (--file or positional)");
    };

    Ok(Command::Scan(ScanArgs { template, verbose }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqltmpl - render SQL templates with typed placeholders

USAGE:
  sqltmpl <COMMAND> [OPTIONS]

COMMANDS:
  render        Substitute arguments into a template and print the SQL
  scan          List the placeholders and conditional blocks of a template

Run `sqltmpl <command> --help` for more."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  sqltmpl render [OPTIONS] [TEMPLATE]

OPTIONS:
  --template <SQL>        Template text (or pass it positionally)
  --file <PATH>           Read the template from a file
  --args <JSON>           Arguments as a JSON array
  --args-file <PATH>      Read the JSON argument array from a file
  --config <PATH>         Config file (default: sqltmpl.toml, optional)
  --quote-style <STYLE>   verbatim | double_quotes (overrides config)
  -v, --verbose           Log build details to stderr
  -h, --help              Print help

ARGUMENTS:
  JSON null/bool/number/string map to scalars, arrays to lists, objects to
  keyed arrays (`?a`). The element {{\"$skip\": true}} is the skip marker."
            );
        }
        HelpTopic::Scan => {
            println!(
                "\
USAGE:
  sqltmpl scan [OPTIONS] [TEMPLATE]

OPTIONS:
  --file <PATH>           Read the template from a file
  -v, --verbose           Log details to stderr
  -h, --help              Print help"
            );
        }
    }
}
