//! `hubres info` – resolver name and selector labels.

use anyhow::Result;
use hubres_core::Resolver;
use std::io::Write;

pub fn run_info(resolver: &dyn Resolver, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "name: {}", resolver.name())?;
    writeln!(out, "selector:")?;
    for (k, v) in resolver.selector() {
        writeln!(out, "  {}={}", k, v)?;
    }
    Ok(())
}
