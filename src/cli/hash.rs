//! `windcfg hash`: print the resolved-config fingerprint.

use anyhow::Result;

use crate::config::Config;
use crate::theme::ResolvedConfig;
use crate::utils::hash::fingerprint;

pub fn run_hash(config: &Config, short: bool) -> Result<()> {
    let hash = fingerprint(&ResolvedConfig::new(config))?;
    if short {
        println!("{}", hash.short());
    } else {
        println!("{}", hash.to_hex());
    }
    Ok(())
}
