//! `key=value` argument parsing into a resolution parameter map.

use anyhow::{bail, Result};
use std::collections::HashMap;

/// Parses `kind=task name=git-clone version=0.9`. Later duplicates win.
/// Values may contain `=`; keys may not be empty.
pub(crate) fn parse_params(args: &[String]) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("invalid parameter {:?}: expected KEY=VALUE", arg);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid parameter {:?}: empty key", arg);
        }
        params.insert(key.to_string(), value.to_string());
    }
    Ok(params)
}
