//! Classification pipeline: drives the two scanner passes and merges the
//! results. Pass 1 feeds sentences to the language identifier; pass 2 runs
//! only when English made it through the filter, and feeds words to tag
//! lookup and salary extraction.

use std::collections::BTreeMap;

use crate::classify::language::LanguageAggregator;
use crate::classify::lexicon::TagLexicon;
use crate::classify::models::{GroupedResult, SalaryFigures};
use crate::classify::salary::SalaryExtractor;
use crate::classify::scanner::{Sentences, Words};
use crate::classify::tagger::TagClassifier;
use crate::errors::AppError;
use crate::lang_id::LanguageIdentifier;

/// Everything one classification call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub detected_languages: Vec<String>,
    pub group_to_keyword_dict: GroupedResult,
    pub salary: Vec<String>,
}

/// Classifies one job description. The input is immutable for the duration
/// of the call; the only side effect is one identifier call per qualifying
/// sentence.
pub async fn classify_description(
    description: &str,
    lexicon: &TagLexicon,
    identifier: &dyn LanguageIdentifier,
) -> Result<Classification, AppError> {
    let mut aggregator = LanguageAggregator::new(lexicon);
    for sentence in Sentences::new(description) {
        let identification = identifier
            .identify(sentence)
            .await
            .map_err(|e| AppError::Classification(format!("Language detection failed: {e}")))?;
        aggregator.observe(identification);
    }
    let detected_languages = aggregator.into_filtered();

    let mut tagger = TagClassifier::new(lexicon);
    let mut salary = SalaryExtractor::default();
    if detected_languages.iter().any(|code| code == "EN") {
        for word in Words::new(description) {
            if word.starts_with('$') {
                salary.observe(&word);
            } else {
                tagger.observe(&word);
            }
        }
    }

    let figures = salary.finish()?;
    let group_to_keyword_dict = assemble(tagger.into_groups(), &detected_languages, figures);

    Ok(Classification {
        detected_languages,
        group_to_keyword_dict,
        salary: salary.into_candidates(),
    })
}

/// Merges the grouped tags, the detected languages and the optional pay
/// figures. The `languages` group always exists; lexicon-derived codes come
/// first, detected codes are appended when not already present.
fn assemble(
    mut groups: BTreeMap<String, Vec<String>>,
    detected: &[String],
    figures: Option<SalaryFigures>,
) -> GroupedResult {
    let languages = groups.entry("languages".to_string()).or_default();
    for code in detected {
        if !languages.contains(code) {
            languages.push(code.clone());
        }
    }

    match figures {
        Some(figures) => GroupedResult {
            groups,
            pay_type: Some(figures.pay_type),
            salary: Some(figures.range),
            pay_period: Some(figures.pay_period),
        },
        None => GroupedResult {
            groups,
            pay_type: None,
            salary: None,
            pay_period: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::models::{PayPeriod, PayType, SalaryRange};
    use crate::lang_id::{Identification, LangIdError};
    use async_trait::async_trait;
    use serde_json::json;

    /// Always answers with the same code and confidence.
    struct StubIdentifier {
        code: &'static str,
        confidence: f32,
    }

    #[async_trait]
    impl LanguageIdentifier for StubIdentifier {
        async fn identify(&self, _text: &str) -> Result<Identification, LangIdError> {
            Ok(Identification {
                code: self.code.to_string(),
                confidence: self.confidence,
            })
        }
    }

    /// Answers per sentence: the first (needle, code) pair whose needle is
    /// contained in the sentence wins, `en` otherwise.
    struct KeyedIdentifier(Vec<(&'static str, &'static str)>);

    #[async_trait]
    impl LanguageIdentifier for KeyedIdentifier {
        async fn identify(&self, text: &str) -> Result<Identification, LangIdError> {
            let code = self
                .0
                .iter()
                .find(|(needle, _)| text.contains(needle))
                .map(|(_, code)| *code)
                .unwrap_or("en");
            Ok(Identification {
                code: code.to_string(),
                confidence: 0.99,
            })
        }
    }

    const ENGLISH_JD: &str = "<p>We are looking for a full-time Python developer \
with health and dental benefits. Salary: $60000 - $80000 per year. \
Must be fluent in Spanish.</p>";

    #[tokio::test]
    async fn test_english_description_full_flow() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "en", confidence: 0.99 };

        let classification = classify_description(ENGLISH_JD, &lexicon, &identifier)
            .await
            .unwrap();

        assert_eq!(classification.detected_languages, vec!["EN"]);
        assert_eq!(classification.salary, vec!["60000", "80000"]);

        let dict = &classification.group_to_keyword_dict;
        assert_eq!(dict.groups["jobType"], vec!["fullTime"]);
        assert_eq!(dict.groups["benefits"], vec!["dental", "health"]);
        // "spanish" is lexicon-derived ES; detected EN is appended after it.
        assert_eq!(dict.groups["languages"], vec!["ES", "EN"]);
        assert_eq!(dict.pay_type, Some(PayType::Range));
        assert_eq!(dict.salary, Some(SalaryRange { min: 60000, max: 80000 }));
        assert_eq!(dict.pay_period, Some(PayPeriod::Yearly));
    }

    #[tokio::test]
    async fn test_non_english_text_gets_language_tags_only() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "ko", confidence: 0.99 };

        let classification = classify_description(
            "<p>한국어로 작성된 직무 설명입니다. 급여는 $60000 입니다.</p>",
            &lexicon,
            &identifier,
        )
        .await
        .unwrap();

        assert_eq!(classification.detected_languages, vec!["KO"]);
        assert!(classification.salary.is_empty());
        assert_eq!(
            serde_json::to_value(&classification.group_to_keyword_dict).unwrap(),
            json!({"languages": ["KO"]})
        );
    }

    #[tokio::test]
    async fn test_low_confidence_identification_leaves_languages_empty() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "en", confidence: 0.5 };

        let classification =
            classify_description("A perfectly ordinary sentence.", &lexicon, &identifier)
                .await
                .unwrap();

        assert!(classification.detected_languages.is_empty());
        assert_eq!(
            serde_json::to_value(&classification.group_to_keyword_dict).unwrap(),
            json!({"languages": []})
        );
    }

    #[tokio::test]
    async fn test_code_off_the_allow_list_is_filtered() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "de", confidence: 0.99 };

        let classification =
            classify_description("Eine ganz gewoehnliche Stellenbeschreibung.", &lexicon, &identifier)
                .await
                .unwrap();

        assert!(classification.detected_languages.is_empty());
    }

    #[tokio::test]
    async fn test_mixed_language_description() {
        let lexicon = TagLexicon::builtin();
        let identifier = KeyedIdentifier(vec![("français", "fr")]);

        let classification = classify_description(
            "<p>Remote contract position with flexible hours. \
Vous devez parler couramment le français.</p>",
            &lexicon,
            &identifier,
        )
        .await
        .unwrap();

        assert_eq!(classification.detected_languages, vec!["EN", "FR"]);
        let dict = &classification.group_to_keyword_dict;
        assert_eq!(dict.groups["jobType"], vec!["contract"]);
        assert_eq!(dict.groups["workplace"], vec!["remote"]);
        assert_eq!(dict.groups["workShift"], vec!["flexible"]);
        assert_eq!(dict.groups["languages"], vec!["EN", "FR"]);
    }

    #[tokio::test]
    async fn test_markup_only_text_yields_empty_result() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "en", confidence: 0.99 };

        let classification =
            classify_description("<div class=\"posting\"><hr/></div>", &lexicon, &identifier)
                .await
                .unwrap();

        assert!(classification.detected_languages.is_empty());
        assert!(classification.salary.is_empty());
        assert_eq!(
            serde_json::to_value(&classification.group_to_keyword_dict).unwrap(),
            json!({"languages": []})
        );
    }

    #[tokio::test]
    async fn test_classification_is_deterministic() {
        let lexicon = TagLexicon::builtin();
        let identifier = StubIdentifier { code: "en", confidence: 0.99 };

        let first = classify_description(ENGLISH_JD, &lexicon, &identifier)
            .await
            .unwrap();
        let second = classify_description(ENGLISH_JD, &lexicon, &identifier)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.group_to_keyword_dict).unwrap(),
            serde_json::to_string(&second.group_to_keyword_dict).unwrap()
        );
    }
}
