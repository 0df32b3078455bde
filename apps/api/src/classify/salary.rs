//! Salary extraction: `$`-prefixed words from the word pass become digit
//! candidates; after the pass a small disambiguation step decides min, max
//! and pay period.

use crate::classify::models::{PayPeriod, PayType, SalaryFigures, SalaryRange};
use crate::errors::AppError;

/// A figure with at most this many digits reads as an hourly rate;
/// anything longer reads as a yearly amount.
const MAX_HOURLY_DIGITS: usize = 3;

/// Collects raw digit candidates in encounter order.
#[derive(Debug, Default)]
pub struct SalaryExtractor {
    candidates: Vec<String>,
}

impl SalaryExtractor {
    /// Records one `$`-prefixed word: drop the `$`, drop comma separators,
    /// keep the maximal leading ASCII-digit run. The run may be empty (a
    /// bare `$`); it is kept anyway and dealt with at disambiguation time.
    /// Words without the `$` prefix are not salary candidates and are
    /// ignored.
    pub fn observe(&mut self, word: &str) {
        let Some(rest) = word.strip_prefix('$') else {
            return;
        };
        let cleaned = rest.replace(',', "");
        let run = cleaned
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count();
        self.candidates.push(cleaned[..run].to_string());
    }

    /// Disambiguates the collected candidates. Returns `None` when nothing
    /// was collected; the pay fields are then omitted from the result.
    ///
    /// Candidates are ordered as strings, not numbers ("9000" sorts after
    /// "80000"). The length tie-break below discards a second figure whose
    /// digit count is more than one off the top figure's, collapsing the
    /// range to a point: a `$5` tip next to a `$60000` salary is noise.
    pub fn finish(&self) -> Result<Option<SalaryFigures>, AppError> {
        if self.candidates.is_empty() {
            return Ok(None);
        }

        let mut ordered = self.candidates.clone();
        ordered.sort();

        let max_digits = &ordered[ordered.len() - 1];
        let max = parse_figure(max_digits)?;

        let (pay_type, min) = if ordered.len() == 1 {
            (PayType::Minimum, max)
        } else {
            let second_digits = &ordered[ordered.len() - 2];
            let similar_length =
                max_digits.len() as i64 - second_digits.len() as i64 <= 1;
            let min = if similar_length {
                parse_figure(second_digits)?
            } else {
                max
            };
            (PayType::Range, min)
        };

        let pay_period = if decimal_digits(max) <= MAX_HOURLY_DIGITS {
            PayPeriod::Hourly
        } else {
            PayPeriod::Yearly
        };

        Ok(Some(SalaryFigures {
            pay_type,
            range: SalaryRange { min, max },
            pay_period,
        }))
    }

    /// The raw candidate list, in encounter order, for the response body.
    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
    }
}

fn parse_figure(digits: &str) -> Result<u64, AppError> {
    digits
        .parse::<u64>()
        .map_err(|_| AppError::Classification(format!("Unreadable salary figure '{digits}'")))
}

fn decimal_digits(value: u64) -> usize {
    value.to_string().len()
}
