//! Exclusion rules for fingerprinting.
//!
//! A rule is a set of optional field matchers; an absent field matches
//! anything. An artifact is excluded when every present field matches it,
//! compared case-insensitively.

use crate::model::artifact::ResolvedArtifact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRule {
    #[serde(default, alias = "groupId")]
    pub group: Option<String>,
    #[serde(default, alias = "artifactId")]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl ExclusionRule {
    /// Parse the `group:name[:version[:classifier]]` shorthand; `*` or an
    /// empty segment leaves the field unconstrained.
    pub fn parse(shorthand: &str) -> Self {
        let mut fields = shorthand.split(':').map(|s| {
            let s = s.trim();
            (!s.is_empty() && s != "*").then(|| s.to_string())
        });
        Self {
            group: fields.next().flatten(),
            name: fields.next().flatten(),
            version: fields.next().flatten(),
            classifier: fields.next().flatten(),
        }
    }

    /// True when every non-null field equals the artifact's field.
    pub fn matches(&self, artifact: &ResolvedArtifact) -> bool {
        field_matches(self.group.as_deref(), Some(&artifact.group))
            && field_matches(self.name.as_deref(), Some(&artifact.name))
            && field_matches(self.version.as_deref(), Some(&artifact.version))
            && field_matches(self.classifier.as_deref(), artifact.classifier.as_deref())
    }
}

fn field_matches(rule: Option<&str>, value: Option<&str>) -> bool {
    match (rule, value) {
        (None, _) => true,
        (Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(actual),
        (Some(_), None) => false,
    }
}

/// True when any rule excludes the artifact.
pub fn should_exclude(artifact: &ResolvedArtifact, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule.matches(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ResolvedArtifact {
        ResolvedArtifact::new("org.Example", "Core", "1.2.0", "/repo/core.jar")
    }

    #[test]
    fn test_empty_rule_matches_everything() {
        assert!(ExclusionRule::default().matches(&artifact()));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rule = ExclusionRule::parse("ORG.EXAMPLE:core");
        assert!(rule.matches(&artifact()));
    }

    #[test]
    fn test_any_mismatched_field_prevents_match() {
        let rule = ExclusionRule::parse("org.example:core:9.9.9");
        assert!(!rule.matches(&artifact()));
    }

    #[test]
    fn test_classifier_rule_never_matches_unclassified_artifact() {
        let rule = ExclusionRule {
            classifier: Some("tests".to_string()),
            ..Default::default()
        };
        assert!(!rule.matches(&artifact()));
        assert!(rule.matches(&artifact().with_classifier("TESTS")));
    }

    #[test]
    fn test_parse_wildcards() {
        let rule = ExclusionRule::parse("*:core::");
        assert_eq!(rule.group, None);
        assert_eq!(rule.name.as_deref(), Some("core"));
        assert_eq!(rule.version, None);
        assert_eq!(rule.classifier, None);
    }

    #[test]
    fn test_should_exclude_any_rule() {
        let rules = vec![
            ExclusionRule::parse("other.group"),
            ExclusionRule::parse(":core"),
        ];
        assert!(should_exclude(&artifact(), &rules));
        assert!(!should_exclude(&artifact(), &rules[..1]));
        assert!(!should_exclude(&artifact(), &[]));
    }
}
