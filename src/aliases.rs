use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::constants::FRANCHISE_ALIASES;
use crate::error::{FeatureError, Result};
use crate::team::is_canonical_name;

/// Alternate team names and codes mapped onto canonical catalog names.
///
/// Keys are stored lowercased, so lookups ignore case. Targets must be
/// canonical names; anything else is rejected when the alias is added.
#[derive(Clone, Debug, Default)]
pub struct AliasMap {
    aliases: HashMap<String, String>,
}

impl AliasMap {
    pub fn new() -> Self {
        AliasMap {
            aliases: HashMap::new(),
        }
    }

    /// Relocation and rename history shipped with the crate.
    pub fn builtin() -> Self {
        let mut map = AliasMap::new();
        for (alias, target) in FRANCHISE_ALIASES {
            map.aliases.insert(alias.to_lowercase(), target.to_string());
        }
        map
    }

    /// Read aliases from a CSV file.
    /// Format: alias,canonical
    pub fn read_from_file(&mut self, filepath: impl AsRef<Path>) -> Result<usize> {
        let file = File::open(filepath.as_ref())?;
        let added = self.read_from_reader(file)?;
        debug!(
            path = %filepath.as_ref().display(),
            added,
            "loaded team aliases"
        );
        Ok(added)
    }

    /// Same as [`AliasMap::read_from_file`] over any reader.
    ///
    /// Blank lines, `#` comments and an `alias,canonical` header are skipped.
    /// Names containing commas must be quoted.
    pub fn read_from_reader<R: Read>(&mut self, rdr: R) -> Result<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(rdr);
        let mut added = 0;
        let mut first = true;

        for result in reader.records() {
            let record = result.map_err(|source| FeatureError::Csv {
                line: source.position().map(|p| p.line()).unwrap_or(0),
                source,
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if record.iter().all(str::is_empty) {
                continue;
            }

            let (alias, target) = match (record.get(0), record.get(1), record.len()) {
                (Some(alias), Some(target), 2) => (alias, target),
                _ => {
                    return Err(FeatureError::Malformed {
                        line,
                        field: "alias row".to_string(),
                        value: record.iter().collect::<Vec<_>>().join(","),
                    })
                }
            };

            let is_header = first && alias.eq_ignore_ascii_case("alias");
            first = false;
            if is_header {
                continue;
            }

            self.add_alias(alias, target)?;
            added += 1;
        }

        Ok(added)
    }

    /// Add or replace an alias.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<()> {
        if !is_canonical_name(target) {
            return Err(FeatureError::Alias {
                alias: alias.to_string(),
                target: target.to_string(),
            });
        }
        self.aliases.insert(alias.to_lowercase(), target.to_string());
        Ok(())
    }

    pub fn remove_alias(&mut self, alias: &str) {
        self.aliases.remove(&alias.to_lowercase());
    }

    /// Canonical name for an alias, if one is registered.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.contains_key(&alias.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Merge another map into this one; entries in `other` win.
    pub fn extend(&mut self, other: AliasMap) {
        self.aliases.extend(other.aliases);
    }
}
