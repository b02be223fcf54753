//! Trigger-group pattern tables.
//!
//! Groups are declarative data: a name, a weight class, and a list of
//! substring or regex patterns. The builtin seed lists cover English and
//! Hungarian; Hungarian phrases that users commonly type without accents
//! are listed in both spellings rather than normalized at match time.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TriggerClass;

/// Errors raised while compiling or loading trigger groups.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regex in group '{group}': {source}")]
    InvalidRegex {
        group: String,
        #[source]
        source: regex::Error,
    },
    #[error("duplicate trigger group name '{0}'")]
    DuplicateGroup(String),
    #[error("failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse pattern file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One pattern within a trigger group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Matched as a substring of the case-folded prompt.
    Substring(String),
    /// Matched as a regex against the case-folded prompt.
    Regex(String),
}

/// Declarative description of a trigger group, as found in pattern files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerGroupSpec {
    pub name: String,
    pub class: TriggerClass,
    pub patterns: Vec<Pattern>,
}

impl TriggerGroupSpec {
    pub(crate) fn seed(name: &str, class: TriggerClass, substrings: &[&str], regexes: &[&str]) -> Self {
        let patterns = substrings
            .iter()
            .map(|s| Pattern::Substring((*s).into()))
            .chain(regexes.iter().map(|r| Pattern::Regex((*r).into())))
            .collect();
        Self {
            name: name.into(),
            class,
            patterns,
        }
    }
}

/// A trigger group compiled for matching.
#[derive(Debug)]
pub struct TriggerGroup {
    pub name: String,
    pub class: TriggerClass,
    substrings: Vec<String>,
    regexes: Vec<Regex>,
}

impl TriggerGroup {
    pub fn compile(spec: &TriggerGroupSpec) -> Result<Self, PatternError> {
        let mut substrings = Vec::new();
        let mut regexes = Vec::new();
        for pattern in &spec.patterns {
            match pattern {
                Pattern::Substring(s) => substrings.push(s.to_lowercase()),
                Pattern::Regex(r) => regexes.push(
                    regex::RegexBuilder::new(r)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| PatternError::InvalidRegex {
                            group: spec.name.clone(),
                            source,
                        })?,
                ),
            }
        }
        Ok(Self {
            name: spec.name.clone(),
            class: spec.class,
            substrings,
            regexes,
        })
    }

    /// True if any pattern occurs in the case-folded prompt.
    pub fn matches(&self, folded: &str) -> bool {
        self.substrings.iter().any(|s| folded.contains(s.as_str()))
            || self.regexes.iter().any(|r| r.is_match(folded))
    }
}

/// Compile a full group list, rejecting duplicate names.
/// Distinct-group counting is per table entry, so a duplicated name
/// would double-count one signal.
pub fn compile_all(specs: &[TriggerGroupSpec]) -> Result<Vec<TriggerGroup>, PatternError> {
    let mut seen: Vec<&str> = Vec::with_capacity(specs.len());
    let mut groups = Vec::with_capacity(specs.len());
    for spec in specs {
        if seen.contains(&spec.name.as_str()) {
            return Err(PatternError::DuplicateGroup(spec.name.clone()));
        }
        seen.push(&spec.name);
        groups.push(TriggerGroup::compile(spec)?);
    }
    Ok(groups)
}

/// Read additional trigger group specs from a JSON file.
pub fn load_specs(path: impl AsRef<Path>) -> Result<Vec<TriggerGroupSpec>, PatternError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Builtin EN/HU seed groups. A starting taxonomy, not a frozen list;
/// refine with real prompts or extend via a pattern file.
pub fn builtin_specs() -> Vec<TriggerGroupSpec> {
    use TriggerClass::{Medium, Strong};
    vec![
        TriggerGroupSpec::seed(
            "agent-correction",
            Strong,
            &[
                "you're wrong",
                "you are wrong",
                "that's wrong",
                "that's not what i asked",
                "not what i asked",
                "not like that",
                "you misunderstood",
                "that's not right",
                "stop doing that",
                "tévedsz",
                "tevedsz",
                "nem ezt kértem",
                "nem ezt kertem",
                "nem így",
                "nem igy",
                "félreérted",
                "felreerted",
                "rosszul csináltad",
                "rosszul csinaltad",
                "nem erről van szó",
            ],
            &[],
        ),
        TriggerGroupSpec::seed(
            "expletives",
            Strong,
            &[
                "wtf",
                "ffs",
                "fuck",
                "damn it",
                "dammit",
                "goddamn",
                "bullshit",
                "useless",
                "piece of crap",
                "bassz",
                "baszki",
                "a francba",
                "francba",
                "a fenébe",
                "a fenebe",
                "kurva",
                "szar ez",
            ],
            &[],
        ),
        TriggerGroupSpec::seed(
            "giving-up",
            Strong,
            &[
                "nevermind",
                "never mind",
                "forget it",
                "i give up",
                "giving up",
                "hopeless",
                "i'm done with this",
                "im done with this",
                "hagyjuk",
                "feladom",
                "felejtsd el",
                "nem érdekel már",
                "nem erdekel mar",
            ],
            &[],
        ),
        TriggerGroupSpec::seed(
            "repetition",
            Medium,
            &[
                "already told",
                "already said",
                "already asked",
                "already explained",
                "how many times",
                "i keep telling",
                "már mondtam",
                "mar mondtam",
                "már leírtam",
                "mar leirtam",
                "már elmagyaráztam",
                "megmondtam már",
                "hányszor",
                "hanyszor",
            ],
            &[r"\brepeat(ing)?\b.*\b(myself|again)\b"],
        ),
        TriggerGroupSpec::seed(
            "temporal",
            Medium,
            &[
                "still waiting",
                "taking forever",
                "takes forever",
                "took forever",
                "for hours",
                "all day",
                "so slow",
                "too slow",
                "még mindig",
                "meg mindig",
                "örökké tart",
                "orokke tart",
                "mióta várok",
                "miota varok",
                "egy örökkévalóság",
                "lassú",
                "lassu",
            ],
            &[r"\bages\b", r"\bhow long\b.*\btak(e|es|ing)\b"],
        ),
        TriggerGroupSpec::seed(
            "escalation",
            Medium,
            &[
                "yet again",
                "once again",
                "every time",
                "every single time",
                "as usual",
                "as always",
                "not again",
                "már megint",
                "mar megint",
                "minden alkalommal",
                "szokás szerint",
                "szokas szerint",
                "sokadszor",
            ],
            &[r"\b(second|third|fourth|fifth)\s+time\b"],
        ),
        TriggerGroupSpec::seed(
            "intensifiers",
            Medium,
            &[
                "annoying",
                "ridiculous",
                "unbelievable",
                "seriously",
                "frustrating",
                "infuriating",
                "driving me crazy",
                "insane",
                "idegesítő",
                "idegesito",
                "nevetséges",
                "nevetseges",
                "hihetetlen",
                "komolyan",
                "frusztráló",
                "frusztralo",
                "őrjítő",
                "orjito",
                "megőrülök",
                "megorulok",
            ],
            &[],
        ),
    ]
}

static BUILTIN: LazyLock<Vec<TriggerGroup>> =
    LazyLock::new(|| compile_all(&builtin_specs()).expect("builtin trigger groups compile"));

/// The compiled builtin table. Built once, immutable thereafter.
pub fn builtin() -> &'static [TriggerGroup] {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_groups_compile() {
        let groups = builtin();
        assert_eq!(groups.len(), 7);
        assert!(groups.iter().any(|g| g.class == TriggerClass::Strong));
        assert!(groups.iter().any(|g| g.class == TriggerClass::Medium));
    }

    #[test]
    fn builtin_group_names_unique_and_nonempty() {
        let specs = builtin_specs();
        let mut names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), specs.len());
        assert!(specs.iter().all(|s| !s.patterns.is_empty()));
    }

    #[test]
    fn substring_match_is_case_folded() {
        let spec = TriggerGroupSpec::seed("t", TriggerClass::Medium, &["Still Waiting"], &[]);
        let group = TriggerGroup::compile(&spec).unwrap();
        assert!(group.matches("still waiting for this"));
    }

    #[test]
    fn regex_match_respects_word_boundary() {
        let groups = builtin();
        let temporal = groups.iter().find(|g| g.name == "temporal").unwrap();
        assert!(temporal.matches("this took ages to finish"));
        // "ages" inside a longer word must not match
        assert!(!temporal.matches("check your messages"));
    }

    #[test]
    fn hungarian_bare_ascii_variant_matches() {
        let groups = builtin();
        let repetition = groups.iter().find(|g| g.name == "repetition").unwrap();
        assert!(repetition.matches("mar mondtam tegnap"));
        assert!(repetition.matches("már mondtam tegnap"));
    }

    #[test]
    fn invalid_regex_is_reported_with_group_name() {
        let spec = TriggerGroupSpec::seed("broken", TriggerClass::Medium, &[], &["(unclosed"]);
        let err = TriggerGroup::compile(&spec).unwrap_err();
        match err {
            PatternError::InvalidRegex { group, .. } => assert_eq!(group, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn compile_all_rejects_duplicate_names() {
        let specs = vec![
            TriggerGroupSpec::seed("dup", TriggerClass::Medium, &["a"], &[]),
            TriggerGroupSpec::seed("dup", TriggerClass::Medium, &["b"], &[]),
        ];
        let err = compile_all(&specs).unwrap_err();
        assert!(matches!(err, PatternError::DuplicateGroup(name) if name == "dup"));
    }

    #[test]
    fn spec_json_roundtrip() {
        let specs = vec![TriggerGroupSpec::seed(
            "custom",
            TriggerClass::Strong,
            &["enough of this"],
            &[r"\bso done\b"],
        )];
        let json = serde_json::to_string(&specs).unwrap();
        let parsed: Vec<TriggerGroupSpec> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "custom");
        assert_eq!(parsed[0].patterns.len(), 2);
    }
}
