use anyhow::{bail, Context, Result};
use linemark::config::Config;
use linemark::Linemark;
use std::path::Path;

pub fn handle(project: &Path, key: &str, lang: Option<&str>, placeholders: &[String]) -> Result<()> {
    let config = Config::load_or_default(project)?;
    let name = lang.unwrap_or(&config.data.language.name);

    let language = Linemark::load_language(&config, name)
        .with_context(|| format!("Failed to load language '{}'", name))?;

    let pairs = parse_placeholders(placeholders)?;
    println!("{}", language.translate(key, &pairs));

    Ok(())
}

/// Split `NAME=VALUE` arguments at the first `=`; the value may contain more.
fn parse_placeholders(raw: &[String]) -> Result<Vec<(&str, &str)>> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some(("", _)) => bail!("Invalid placeholder '{}', the name is empty", entry),
            Some(pair) => Ok(pair),
            None => bail!("Invalid placeholder '{}', expected NAME=VALUE", entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_placeholders() -> Result<()> {
        let raw = args(&["name=Ada", "expr=a=b", "empty="]);
        let pairs = parse_placeholders(&raw)?;

        assert_eq!(pairs, vec![("name", "Ada"), ("expr", "a=b"), ("empty", "")]);
        Ok(())
    }

    #[test]
    fn test_parse_placeholders_rejects_malformed() {
        let err = parse_placeholders(&args(&["ok=1", "noeq"])).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Invalid placeholder 'noeq', expected NAME=VALUE");

        let err = parse_placeholders(&args(&["=value"])).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Invalid placeholder '=value', the name is empty");
    }
}
