//! `hubres resolve KEY=VALUE...` – fetch a manifest from the catalog.

use anyhow::{Context, Result};
use hubres_core::{RequestContext, ResolvedResource, Resolver};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::cli::request::parse_params;

pub fn run_resolve(
    resolver: &dyn Resolver,
    args: &[String],
    output: Option<&Path>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let params = parse_params(args)?;
    resolver.validate_params(&params)?;

    let mut ctx = RequestContext::background();
    if let Some(secs) = timeout_secs {
        ctx = ctx.with_timeout(Duration::from_secs(secs));
    }

    let resource = resolver
        .resolve(&ctx, &params)
        .with_context(|| format!("{} resolver", resolver.name()))?;
    write_resource(&resource, output)?;

    let source = resource.source();
    eprintln!("resolved {} ({} bytes)", source.uri, resource.data().len());
    for (algo, digest) in &source.digest {
        eprintln!("  {}:{}", algo, digest);
    }
    Ok(())
}

fn write_resource(resource: &ResolvedResource, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, resource.data())
            .with_context(|| format!("write {}", path.display())),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(resource.data()).context("write stdout")?;
            out.flush().context("flush stdout")
        }
    }
}
