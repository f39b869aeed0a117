use anyhow::{Context, Result};
use comfy_table::Table;

use roster_cli::pipeline::{RosterResult, check_roster, validation_options};
use roster_model::Role;
use roster_validate::POLICY;

use crate::cli::{OutputFormatArg, ValidateArgs};
use crate::summary::{apply_table_style, header_cell, print_summary};

pub fn run_validate(args: &ValidateArgs) -> Result<RosterResult> {
    let options = validation_options(args.strict, args.flag_duplicates, args.flag_unknown_roles);
    let result = check_roster(&args.file, &options)?;

    match args.format {
        OutputFormatArg::Table => print_summary(&result),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize results")?;
            println!("{json}");
        }
    }
    Ok(result)
}

pub fn run_policy() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Must report to")]);
    apply_table_style(&mut table);
    table.add_row(vec![Role::Root.to_string(), "(no supervisor)".to_string()]);
    for rule in &POLICY {
        let allowed: Vec<&str> = rule.allowed.iter().map(Role::as_str).collect();
        table.add_row(vec![rule.role.to_string(), allowed.join(" or ")]);
    }
    println!("{table}");
}
