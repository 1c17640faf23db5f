//! HTML response parsing utilities

use crate::{ExampleCase, SubmissionResult, error::AocError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// Parser for puzzle service HTML responses with cached regex patterns and selectors
#[derive(Clone, Debug, Default)]
pub(crate) struct ResponseParser {
    user_id_regex: OnceCell<Regex>,
    throttle_regex: OnceCell<Regex>,
    main_selector: OnceCell<Selector>,
    article_selector: OnceCell<Selector>,
    example_selector: OnceCell<Selector>,
    answer_selector: OnceCell<Selector>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn user_id_regex(&self) -> &Regex {
        self.user_id_regex
            .get_or_init(|| Regex::new(r"\(anonymous user #(\d+)\)").expect("valid regex"))
    }

    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").expect("valid regex"))
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").expect("valid selector"))
    }

    fn article_selector(&self) -> &Selector {
        self.article_selector
            .get_or_init(|| Selector::parse("article").expect("valid selector"))
    }

    fn example_selector(&self) -> &Selector {
        self.example_selector
            .get_or_init(|| Selector::parse("pre > code").expect("valid selector"))
    }

    fn answer_selector(&self) -> &Selector {
        self.answer_selector
            .get_or_init(|| Selector::parse("code > em").expect("valid selector"))
    }

    /// Extract user ID from settings page HTML
    pub fn extract_user_id(&self, html: &str) -> Option<u64> {
        let captures = self.user_id_regex().captures(html)?;
        captures.get(1)?.as_str().parse::<u64>().ok()
    }

    /// Extract text content from the main element of an HTML document
    pub fn extract_main_text(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);
        let main_element = document
            .select(self.main_selector())
            .next()
            .ok_or(AocError::HtmlParse("main"))?;

        Ok(main_element.text().collect::<String>())
    }

    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        humantime::parse_duration(captures.get(1)?.as_str()).ok()
    }

    /// Classify the page returned after posting an answer
    pub fn parse_submission_response(&self, html: &str) -> Result<SubmissionResult, AocError> {
        let text = self.extract_main_text(html)?;

        if text.contains("not the right answer") {
            return Ok(SubmissionResult::Incorrect);
        }
        if text.contains("already complete it") {
            return Ok(SubmissionResult::AlreadyCompleted);
        }
        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(&text);
            return Ok(SubmissionResult::Throttled { wait_time });
        }

        Ok(SubmissionResult::Correct)
    }

    /// Scrape the example from a puzzle page.
    ///
    /// The example input is the first `<pre><code>` block of the first
    /// `<article>`. The expected answer for each part is the last
    /// `<code><em>` of that part's article; part b's article only exists
    /// once part a is solved. Returns an empty list when the page has no
    /// example block.
    pub fn parse_examples(&self, html: &str) -> Vec<ExampleCase> {
        let document = Html::parse_document(html);
        let articles: Vec<ElementRef<'_>> = document.select(self.article_selector()).collect();

        let Some(first) = articles.first() else {
            return Vec::new();
        };
        let Some(input) = first
            .select(self.example_selector())
            .next()
            .map(|code| code.text().collect::<String>())
        else {
            return Vec::new();
        };

        vec![ExampleCase {
            input,
            answer_a: self.last_answer(first),
            answer_b: articles.get(1).and_then(|article| self.last_answer(article)),
        }]
    }

    fn last_answer(&self, article: &ElementRef<'_>) -> Option<String> {
        article
            .select(self.answer_selector())
            .last()
            .map(|em| em.text().collect::<String>().trim().to_string())
            .filter(|answer| !answer.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PUZZLE_PAGE: &str = r#"<html><body><main>
<article class="day-desc"><h2>--- Day 1: Trebuchet?! ---</h2>
<p>For example:</p>
<pre><code>1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
</code></pre>
<p>In this example, the calibration values of these four lines are <code>12</code>, <code>38</code>, <code>15</code>, and <code>77</code>. Adding these together produces <code><em>142</em></code>.</p>
</article>
<p>Your puzzle answer was <code>54990</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2>
<pre><code>two1nine
eightwothree
</code></pre>
<p>Adding these together produces <code><em>281</em></code>.</p>
</article>
</main></body></html>"#;

    #[test]
    fn test_parse_examples_both_parts() {
        let parser = ResponseParser::new();
        let examples = parser.parse_examples(PUZZLE_PAGE);

        assert_eq!(examples.len(), 1);
        let example = &examples[0];
        assert_eq!(example.input, "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n");
        assert_eq!(example.answer_a.as_deref(), Some("142"));
        assert_eq!(example.answer_b.as_deref(), Some("281"));
    }

    #[test]
    fn test_parse_examples_before_part_two_unlocks() {
        let parser = ResponseParser::new();
        let cut = PUZZLE_PAGE.find("<p>Your puzzle answer").unwrap();
        let html = format!("{}</main></body></html>", &PUZZLE_PAGE[..cut]);

        let examples = parser.parse_examples(&html);
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].answer_a.as_deref(), Some("142"));
        assert!(examples[0].answer_b.is_none());
    }

    #[test]
    fn test_parse_examples_without_code_block() {
        let parser = ResponseParser::new();
        let html = "<html><body><main><article><p>No example today</p></article></main></body></html>";
        assert!(parser.parse_examples(html).is_empty());
        assert!(parser.parse_examples("<html></html>").is_empty());
    }

    #[test]
    fn test_throttled_without_duration() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><main>You gave an answer too recently.</main></body></html>"#;
        assert_eq!(
            parser.parse_submission_response(html).unwrap(),
            SubmissionResult::Throttled { wait_time: None }
        );
    }

    #[test]
    fn test_throttled_with_duration() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><main>You gave an answer too recently. You have 4m 12s left to wait.</main></body></html>"#;
        assert_eq!(
            parser.parse_submission_response(html).unwrap(),
            SubmissionResult::Throttled {
                wait_time: Some(Duration::from_secs(252))
            }
        );
    }

    #[test]
    fn test_submission_without_main_element() {
        let parser = ResponseParser::new();
        assert!(matches!(
            parser.parse_submission_response("<html><body>oops</body></html>"),
            Err(AocError::HtmlParse("main"))
        ));
    }

    #[test]
    fn test_empty_main_defaults_to_correct() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><main></main></body></html>"#;
        assert_eq!(
            parser.parse_submission_response(html).unwrap(),
            SubmissionResult::Correct
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_submission_classification(
            prefix in "[a-zA-Z0-9 .,!?]{0,60}",
            suffix in "[a-zA-Z0-9 .,!?]{0,60}",
            (phrase, expected) in prop::sample::select(vec![
                ("That's not the right answer.", SubmissionResult::Incorrect),
                ("You don't seem to be solving the right level. Did you already complete it?", SubmissionResult::AlreadyCompleted),
                ("You gave an answer too recently.", SubmissionResult::Throttled { wait_time: None }),
                ("That's the right answer!", SubmissionResult::Correct),
            ]),
        ) {
            // Keep the random text from forming a duration sentence
            prop_assume!(!suffix.contains("left to wait"));
            let html = format!(
                "<html><body><main>{} {} {}</main></body></html>",
                prefix, phrase, suffix
            );
            let parser = ResponseParser::new();
            prop_assert_eq!(parser.parse_submission_response(&html).unwrap(), expected);
        }

        #[test]
        fn prop_user_id_extraction(
            user_id in 1u64..99_999_999,
            prefix in "[a-zA-Z0-9 .,!?]{0,60}",
        ) {
            let html = format!(
                "<html><body>{} (anonymous user #{}) settings</body></html>",
                prefix, user_id
            );
            let parser = ResponseParser::new();
            prop_assert_eq!(parser.extract_user_id(&html), Some(user_id));
        }
    }
}
