//! Basic usage example for sqltmpl
//!
//! Run with: cargo run --example basic -p sqltmpl

use sqltmpl::prelude::*;

fn find_users(deleted: Option<bool>) -> BuildResult<String> {
    let deleted: Value = match deleted {
        Some(flag) => flag.into(),
        None => skip().into(),
    };
    build(
        "SELECT ?# FROM users WHERE 1=1{ AND deleted = ?d} AND status = ? ORDER BY id",
        args![vec!["id", "name", "email"], deleted, "active"],
    )
}

fn main() -> Result<(), BuildError> {
    println!("{}", find_users(None)?);
    println!("{}", find_users(Some(false))?);

    let update = build(
        "UPDATE users SET ?a WHERE id = ?d",
        vec![
            Value::array([("name", Value::from("Jack")), ("email", Value::Null)]),
            Value::from(42),
        ],
    )?;
    println!("{update}");

    // Untrusted text: double embedded quotes.
    let qb = QueryBuilder::with_config(BuildConfig::new().with_quote_style(QuoteStyle::DoubleQuotes));
    println!(
        "{}",
        qb.build_query("SELECT * FROM users WHERE name = ?", args!["O'Brien"])?
    );

    Ok(())
}
