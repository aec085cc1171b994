use crate::cli::ScanArgs;
use crate::render::read_template;
use sqltmpl::{Token, TokenKind, scan_with_blocks};

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let template = read_template(&args.template)?;
    let tokens = scan_with_blocks(&template);
    tracing::debug!(token_count = tokens.len(), "template scanned");
    for line in describe(&template, &tokens) {
        println!("{line}");
    }
    Ok(())
}

/// One line per argument slot: `#slot  offset  kind  text`.
fn describe(template: &str, tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .map(|(slot, token)| {
            let kind = match token.kind {
                TokenKind::Placeholder(kind) => kind.as_str(),
                TokenKind::Block => "block",
            };
            format!(
                "#{:<3} {:>5}  {:<5}  {}",
                slot + 1,
                token.start,
                kind,
                token.text(template)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_argument_slot() {
        let template = "SELECT ?# FROM t WHERE id = ?d{ AND del = ?d}";
        let lines = describe(template, &scan_with_blocks(template));
        assert_eq!(
            lines,
            vec![
                "#1       7  ?#     ?#",
                "#2      28  ?d     ?d",
                "#3      30  block  { AND del = ?d}",
            ]
        );
    }
}
