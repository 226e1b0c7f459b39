//! List command.
//!
//! Lists configured secret names. Names only; payloads are never read.

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// List configured secret names.
pub fn execute(json: bool) -> Result<()> {
    let config = Config::load()?;
    let names = &config.secrets.names;

    if json {
        let result = serde_json::json!({
            "source": config.source.kind.to_string(),
            "names": names,
            "count": names.len()
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if names.is_empty() {
        output::dimmed("no secrets configured");
    } else {
        output::kv("source:", config.source.kind);
        for name in names {
            output::list_item(name);
        }
    }

    Ok(())
}
