//! `hubres validate KEY=VALUE...` – check parameters only.

use anyhow::Result;
use hubres_core::Resolver;
use std::io::Write;

use crate::cli::request::parse_params;

pub fn run_validate(resolver: &dyn Resolver, args: &[String], out: &mut dyn Write) -> Result<()> {
    let params = parse_params(args)?;
    resolver.validate_params(&params)?;
    writeln!(out, "parameters are valid for the {} resolver", resolver.name())?;
    Ok(())
}
