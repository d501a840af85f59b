//! `hubres pattern` – show the lookup URL pattern in effect.

use hubres_core::url_pattern::UrlPattern;

pub fn run_pattern(pattern: &UrlPattern) {
    println!("{}", pattern);
}
