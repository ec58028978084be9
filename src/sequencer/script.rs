use crate::models::EventKind;

/// Static definition of one step. `{query}` in the message is replaced with
/// the run's query.
pub struct StepDefinition {
    pub kind: EventKind,
    pub message: &'static str,
    pub detail: &'static str,
}

pub static SHOPPING_STEPS: &[StepDefinition] = &[
    StepDefinition {
        kind: EventKind::Info,
        message: "Starting search for: \"{query}\"",
        detail: "Initializing AI agent...",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Analyzing search intent...",
        detail: "Understanding product requirements",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Scraping Amazon product listings",
        detail: "Found 1,247 products",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Scraping Flipkart product listings",
        detail: "Found 856 products",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Analyzing Croma inventory",
        detail: "Found 234 products",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Processing price comparisons",
        detail: "Comparing across 15+ platforms",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Applying AI scoring algorithm",
        detail: "Rating products based on specs and reviews",
    },
    StepDefinition {
        kind: EventKind::Success,
        message: "Filtering top results",
        detail: "Selected 5 best matches",
    },
    StepDefinition {
        kind: EventKind::Progress,
        message: "Generating AI summary",
        detail: "Creating personalized recommendations",
    },
    StepDefinition {
        kind: EventKind::Success,
        message: "Search completed successfully!",
        detail: "Ready to display results",
    },
];

/// Zero-based index of the step after which results are revealed.
pub const SHOPPING_RESULTS_STEP: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub kind: EventKind,
    pub message: String,
    pub detail: Option<String>,
}

/// Ordered list of steps played back by one run.
#[derive(Debug, Clone)]
pub struct Script {
    steps: Vec<ScriptStep>,
    results_step: usize,
}

impl Script {
    /// Returns `None` for an empty script or an out-of-range results step.
    #[cfg(test)]
    pub(crate) fn new(steps: Vec<ScriptStep>, results_step: usize) -> Option<Self> {
        if steps.is_empty() || results_step >= steps.len() {
            return None;
        }
        Some(Self { steps, results_step })
    }

    pub fn shopping(query: &str) -> Self {
        let steps = SHOPPING_STEPS
            .iter()
            .map(|def| ScriptStep {
                kind: def.kind,
                message: def.message.replace("{query}", query),
                detail: Some(def.detail.to_string()),
            })
            .collect();
        Self {
            steps,
            results_step: SHOPPING_RESULTS_STEP,
        }
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn results_step(&self) -> usize {
        self.results_step
    }

    /// Progress percent once step `index` has been emitted: `round(100 * (index + 1) / len)`.
    pub fn progress_after(&self, index: usize) -> u8 {
        let pct = (100.0 * (index + 1) as f64 / self.steps.len() as f64).round();
        pct.min(100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_script_has_ten_steps() {
        let script = Script::shopping("gaming laptop");
        assert_eq!(script.len(), 10);
        assert_eq!(script.results_step(), 7);
        assert_eq!(script.steps()[9].message, "Search completed successfully!");
    }

    #[test]
    fn test_first_step_interpolates_query() {
        let script = Script::shopping("gaming laptop");
        let first = &script.steps()[0];
        assert_eq!(first.message, "Starting search for: \"gaming laptop\"");
        assert_eq!(first.kind, EventKind::Info);
        assert_eq!(first.detail.as_deref(), Some("Initializing AI agent..."));
    }

    #[test]
    fn test_results_step_is_filtering() {
        let script = Script::shopping("q");
        let step = &script.steps()[script.results_step()];
        assert_eq!(step.message, "Filtering top results");
        assert_eq!(step.kind, EventKind::Success);
    }

    #[test]
    fn test_progress_reaches_exactly_100() {
        let script = Script::shopping("q");
        let values: Vec<u8> = (0..script.len()).map(|i| script.progress_after(i)).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_progress_rounds_uneven_lengths() {
        let step = ScriptStep {
            kind: EventKind::Info,
            message: "x".into(),
            detail: None,
        };
        let script = Script::new(vec![step.clone(), step.clone(), step], 1).unwrap();
        assert_eq!(script.progress_after(0), 33);
        assert_eq!(script.progress_after(1), 67);
        assert_eq!(script.progress_after(2), 100);
    }

    #[test]
    fn test_new_rejects_bad_results_step() {
        let step = ScriptStep {
            kind: EventKind::Info,
            message: "x".into(),
            detail: None,
        };
        assert!(Script::new(vec![step], 1).is_none());
        assert!(Script::new(Vec::new(), 0).is_none());
    }
}
