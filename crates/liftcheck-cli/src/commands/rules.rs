//! `liftcheck rules`: describe the rule passes and their limits.

use serde_json::json;

use liftcheck_core::domain::thresholds::{
    DEFAULT_MRV, DELOAD_VOLUME_MAX, DELOAD_VOLUME_MIN, MRV_REGISTRY, RULE_REGISTRY,
};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&rules_document())?;
        return Ok(());
    }

    output.header("Rules (in evaluation order):")?;
    for (index, rule) in RULE_REGISTRY.iter().enumerate() {
        output.print(&format!(
            "  {}. {:<22} {}",
            index + 1,
            rule.tag.as_str(),
            rule.summary
        ))?;
    }

    output.print("")?;
    output.header("Maximum recoverable volume (sets per muscle per week):")?;
    for def in MRV_REGISTRY {
        output.print(&format!("  {:<14} {}", def.level.as_str(), def.sets))?;
    }
    output.print(&format!("  {:<14} {}", "unknown", DEFAULT_MRV))?;

    output.print("")?;
    output.info(&format!(
        "Deload volume band: {DELOAD_VOLUME_MIN:.2}-{DELOAD_VOLUME_MAX:.2} of baseline"
    ))?;

    Ok(())
}

fn rules_document() -> serde_json::Value {
    let rules: Vec<_> = RULE_REGISTRY
        .iter()
        .map(|rule| json!({ "tag": rule.tag, "summary": rule.summary }))
        .collect();

    let mut mrv = serde_json::Map::new();
    for def in MRV_REGISTRY {
        mrv.insert(def.level.as_str().to_string(), json!(def.sets));
    }
    mrv.insert("unknown".into(), json!(DEFAULT_MRV));

    json!({
        "rules": rules,
        "mrv": mrv,
        "deload_volume": { "min": DELOAD_VOLUME_MIN, "max": DELOAD_VOLUME_MAX },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_rules_in_order() {
        let doc = rules_document();
        let tags: Vec<_> = doc["rules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["tag"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags.first().map(String::as_str), Some("DeloadRequired"));
        assert_eq!(tags.last().map(String::as_str), Some("InsufficientRecovery"));
        assert!(tags.contains(&"VolumeExceedsMRV".to_string()));
    }

    #[test]
    fn document_includes_mrv_fallback() {
        let doc = rules_document();
        assert_eq!(doc["mrv"]["intermediate"], 20);
        assert_eq!(doc["mrv"]["unknown"], 16);
        assert_eq!(doc["deload_volume"]["min"], 0.4);
    }
}
