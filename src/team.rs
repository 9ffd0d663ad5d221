use std::collections::HashMap;
use std::sync::OnceLock;

use crate::aliases::AliasMap;
use crate::constants::{MISSING_INDEX, TEAM_CODES, TEAM_INDEX, UNKNOWN_CODE, UNKNOWN_NAME};

/// True if `name` is one of the 34 canonical names in the index table.
pub fn is_canonical_name(name: &str) -> bool {
    TEAM_INDEX.iter().any(|(n, _)| *n == name)
}

/// Process-wide catalog without aliases, built on first use.
pub fn shared_catalog() -> &'static TeamCatalog {
    static CATALOG: OnceLock<TeamCatalog> = OnceLock::new();
    CATALOG.get_or_init(TeamCatalog::new)
}

/// Static team catalog: code to canonical name, canonical name to index.
///
/// Built once from the constant tables and shared read-only across rows.
/// Optional aliases extend name resolution without touching the index.
#[derive(Clone, Debug)]
pub struct TeamCatalog {
    code_to_name: HashMap<&'static str, &'static str>,
    name_to_index: HashMap<&'static str, i32>,
    aliases: AliasMap,
}

impl Default for TeamCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamCatalog {
    pub fn new() -> Self {
        TeamCatalog {
            code_to_name: TEAM_CODES.iter().copied().collect(),
            name_to_index: TEAM_INDEX.iter().copied().collect(),
            aliases: AliasMap::new(),
        }
    }

    pub fn with_aliases(aliases: AliasMap) -> Self {
        TeamCatalog {
            aliases,
            ..Self::new()
        }
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Canonical name for a team code.
    pub fn name_for_code(&self, code: &str) -> Option<&'static str> {
        self.code_to_name.get(code).copied()
    }

    pub fn is_canonical(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Model index for a canonical name, or -1.
    pub fn index_of(&self, name: &str) -> i32 {
        self.name_to_index.get(name).copied().unwrap_or(MISSING_INDEX)
    }

    /// Resolve a home/away team field to the name used for indexing.
    ///
    /// Codes map through the catalog, canonical names pass through, then
    /// aliases are tried. Anything else is returned untouched and will index
    /// to -1.
    pub fn resolve_team<'a>(&'a self, raw: &'a str) -> &'a str {
        if let Some(name) = self.name_for_code(raw) {
            return name;
        }
        if self.is_canonical(raw) {
            return raw;
        }
        self.aliases.get(raw).unwrap_or(raw)
    }

    /// Resolve the favorite field to a canonical name.
    ///
    /// Missing favorites become `UNK`; unresolvable ones become `Unknown`.
    pub fn resolve_favorite<'a>(&'a self, raw: Option<&'a str>) -> &'a str {
        let code = raw.unwrap_or(UNKNOWN_CODE);
        let name = self.resolve_team(code);
        if self.is_canonical(name) {
            name
        } else {
            UNKNOWN_NAME
        }
    }

    /// Catalog rows as (code, name, index), in code table order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, i32)> {
        TEAM_CODES
            .iter()
            .map(|(code, name)| (*code, *name, self.index_of(name)))
            .collect()
    }
}
