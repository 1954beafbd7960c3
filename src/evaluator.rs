//! Password analyzer - main analysis logic.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::entropy_bits;
use crate::generator::{SUGGESTION_LENGTH, assemble};
use crate::rules::{RuleTables, WordMatcher};
use crate::sections::{SECTIONS, SectionContext};
use crate::types::{AnalysisRequest, AnalysisResult, Strength, round2};

const ENTROPY_POINTS_CAP: i64 = 30;
const NO_ISSUES: &str = "No major issues detected";
const NO_RECOMMENDATIONS: &str = "Maintain good password practices";

/// Scores passwords against a fixed set of rule tables.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: RuleTables,
    dictionary: WordMatcher,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RuleTables::default())
    }
}

impl Analyzer {
    /// Takes ownership of `rules` and compiles the dictionary matcher once.
    pub fn new(rules: RuleTables) -> Self {
        let dictionary = WordMatcher::new(&rules.dictionary_words);
        Self { rules, dictionary }
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Analyzes `password`, checking it against `personal_info` as well.
    ///
    /// Never fails: an empty password yields an `Invalid` result. When the
    /// password is not `Excellent` a replacement is generated with the
    /// thread-local RNG.
    pub fn analyze(&self, password: &SecretString, personal_info: &[String]) -> AnalysisResult {
        self.analyze_with_rng(password, personal_info, &mut rand::thread_rng())
    }

    /// Same as [`Analyzer::analyze`], drawing the suggestion from `rng`.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        password: &SecretString,
        personal_info: &[String],
        rng: &mut R,
    ) -> AnalysisResult {
        let mut run = Run::start(self, password.expose_secret(), personal_info);
        run.apply_all();
        run.finish(rng)
    }

    pub fn analyze_request(&self, request: AnalysisRequest) -> AnalysisResult {
        self.analyze(&request.password, &request.personal_info)
    }

    /// Like [`Analyzer::analyze`], but checks `token` before each section and
    /// returns `None` once it is cancelled.
    #[cfg(feature = "async")]
    pub fn analyze_cancellable(
        &self,
        password: &SecretString,
        personal_info: &[String],
        token: &CancellationToken,
    ) -> Option<AnalysisResult> {
        let mut run = Run::start(self, password.expose_secret(), personal_info);
        if let Run::Scoring(state) = &mut run {
            for (section_name, section_fn) in SECTIONS {
                if token.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Analysis cancelled before section: {}", section_name);
                    return None;
                }
                state.apply(section_name, *section_fn);
            }
        }
        Some(run.finish(&mut rand::thread_rng()))
    }
}

/// Analyzes after a short debounce and sends the result through `tx`.
/// Nothing is sent if `token` is cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    analyzer: &Analyzer,
    password: &SecretString,
    personal_info: &[String],
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let Some(result) = analyzer.analyze_cancellable(password, personal_info, &token) else {
        return;
    };

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

enum Run<'a> {
    Empty,
    Scoring(Scoring<'a>),
}

struct Scoring<'a> {
    ctx: SectionContext<'a>,
    score: i64,
    issues: Vec<String>,
    recommendations: Vec<String>,
}

impl<'a> Run<'a> {
    fn start(analyzer: &'a Analyzer, password: &'a str, personal_info: &'a [String]) -> Self {
        if password.is_empty() {
            return Run::Empty;
        }
        Run::Scoring(Scoring {
            ctx: SectionContext::with_dictionary(
                password,
                personal_info,
                &analyzer.rules,
                &analyzer.dictionary,
            ),
            score: 0,
            issues: Vec::new(),
            recommendations: Vec::new(),
        })
    }

    fn apply_all(&mut self) {
        if let Run::Scoring(state) = self {
            for (section_name, section_fn) in SECTIONS {
                state.apply(section_name, *section_fn);
            }
        }
    }

    fn finish<R: Rng + ?Sized>(self, rng: &mut R) -> AnalysisResult {
        match self {
            Run::Empty => empty_result(),
            Run::Scoring(state) => state.finish(rng),
        }
    }
}

impl Scoring<'_> {
    fn apply(&mut self, _section_name: &str, section_fn: crate::sections::Section) {
        let outcome = section_fn(&self.ctx);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "section {}: delta {}, flagged {}",
            _section_name,
            outcome.delta,
            outcome.finding.is_some()
        );
        self.score += outcome.delta;
        if let Some(finding) = outcome.finding {
            self.issues.push(finding.issue);
            self.recommendations.push(finding.recommendation);
        }
    }

    fn finish<R: Rng + ?Sized>(mut self, rng: &mut R) -> AnalysisResult {
        let length = self.ctx.length;
        let entropy = entropy_bits(self.ctx.classes.charset_size(), length);
        if entropy > 0.0 {
            self.score += ((entropy / 2.0).floor() as i64).min(ENTROPY_POINTS_CAP);
        }
        let max_entropy = entropy_bits(self.ctx.rules.max_charset_size, length);

        let score = self.score.clamp(0, 100) as u8;
        let strength = Strength::from_score(score);

        #[cfg(feature = "tracing")]
        tracing::debug!("analysis finished: score {}, strength {}", score, strength);

        let generated_password = (!strength.is_excellent())
            .then(|| SecretString::new(assemble(rng, SUGGESTION_LENGTH).into()));

        AnalysisResult {
            score,
            strength,
            issues: or_default(self.issues, NO_ISSUES),
            recommendations: or_default(self.recommendations, NO_RECOMMENDATIONS),
            entropy: round2(entropy),
            max_entropy: round2(max_entropy),
            generated_password,
            has_spaces: self.ctx.password.contains(' '),
        }
    }
}

fn empty_result() -> AnalysisResult {
    AnalysisResult {
        score: 0,
        strength: Strength::Invalid,
        issues: vec!["Password cannot be empty".to_string()],
        recommendations: vec!["Enter a non-empty password".to_string()],
        entropy: 0.0,
        max_entropy: 0.0,
        generated_password: None,
        has_spaces: false,
    }
}

fn or_default(items: Vec<String>, fallback: &str) -> Vec<String> {
    if items.is_empty() {
        vec![fallback.to_string()]
    } else {
        items
    }
}
