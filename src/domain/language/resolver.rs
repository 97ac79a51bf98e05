use super::{Provider, Tier};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Code used when a provider has no table at all
pub const DEFAULT_CODE: &str = "en";

/// A provider code together with the tier it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub code: String,
    pub tier: Tier,
}

impl Resolution {
    pub fn is_degraded(&self) -> bool {
        self.tier != Tier::Direct
    }
}

/// Language name to provider code mapping for a single provider.
///
/// Lookups are exact and case-sensitive: "hindi" does not match "Hindi" and
/// resolves to the hard default like any other unknown name.
#[derive(Debug, Clone)]
pub struct ResolutionTable {
    direct: BTreeMap<String, String>,
    script_fallback: BTreeMap<String, String>,
    hard_default: String,
}

impl ResolutionTable {
    pub fn new(hard_default: impl Into<String>) -> Self {
        Self {
            direct: BTreeMap::new(),
            script_fallback: BTreeMap::new(),
            hard_default: hard_default.into(),
        }
    }

    pub fn with_direct(mut self, entries: &[(&str, &str)]) -> Self {
        for (name, code) in entries {
            self.direct.insert(name.to_string(), code.to_string());
        }
        self
    }

    pub fn with_script_fallback(mut self, entries: &[(&str, &str)]) -> Self {
        for (name, code) in entries {
            self.script_fallback.insert(name.to_string(), code.to_string());
        }
        self
    }

    /// Direct entry first, then the script fallback, then the hard default
    pub fn resolve(&self, language: &str) -> Resolution {
        if let Some(code) = self.direct.get(language) {
            return Resolution {
                code: code.clone(),
                tier: Tier::Direct,
            };
        }

        if let Some(code) = self.script_fallback.get(language) {
            return Resolution {
                code: code.clone(),
                tier: Tier::ScriptFallback,
            };
        }

        Resolution {
            code: self.hard_default.clone(),
            tier: Tier::HardDefault,
        }
    }

    /// Code for one specific tier, ignoring the others.
    /// The hard default tier always has a code.
    pub fn code_for(&self, language: &str, tier: Tier) -> Option<&str> {
        match tier {
            Tier::Direct => self.direct.get(language).map(String::as_str),
            Tier::ScriptFallback => self.script_fallback.get(language).map(String::as_str),
            Tier::HardDefault => Some(self.hard_default.as_str()),
        }
    }

    /// Every language name with an explicit entry, sorted
    pub fn languages(&self) -> BTreeSet<&str> {
        self.direct
            .keys()
            .chain(self.script_fallback.keys())
            .map(String::as_str)
            .collect()
    }
}

/// One resolution table per provider, built once at start-up and shared read-only
#[derive(Debug, Clone, Default)]
pub struct LanguageTables {
    tables: HashMap<Provider, ResolutionTable>,
}

impl LanguageTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, provider: Provider, table: ResolutionTable) -> Self {
        self.tables.insert(provider, table);
        self
    }

    pub fn table(&self, provider: Provider) -> Option<&ResolutionTable> {
        self.tables.get(&provider)
    }

    pub fn resolve(&self, language: &str, provider: Provider) -> Resolution {
        match self.tables.get(&provider) {
            Some(table) => table.resolve(language),
            None => Resolution {
                code: DEFAULT_CODE.to_string(),
                tier: Tier::HardDefault,
            },
        }
    }

    pub fn code_for(&self, language: &str, provider: Provider, tier: Tier) -> Option<&str> {
        match self.tables.get(&provider) {
            Some(table) => table.code_for(language, tier),
            None if tier == Tier::HardDefault => Some(DEFAULT_CODE),
            None => None,
        }
    }
}
