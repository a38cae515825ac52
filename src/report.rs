/// What happened to a single eligible repository during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOutcome {
    /// The repository already has the file on its default branch.
    FilePresent,
    /// A pull request for the propagation branch is already open.
    PrAlreadyOpen,
    /// A new pull request was opened.
    PrOpened { number: u64 },
    /// The probe or create sequence failed; the run continued with the next
    /// repository.
    Failed { message: String },
}

impl RepoOutcome {
    /// Stable display name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilePresent => "file already present",
            Self::PrAlreadyOpen => "pull request already open",
            Self::PrOpened { .. } => "pull request opened",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Aggregated end-of-run report, one outcome per eligible repository, in
/// processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(String, RepoOutcome)>,
}

impl RunReport {
    pub fn record(&mut self, repo: String, outcome: RepoOutcome) {
        self.outcomes.push((repo, outcome));
    }

    pub fn outcomes(&self) -> &[(String, RepoOutcome)] {
        &self.outcomes
    }

    /// Repositories whose sequence failed, with their error messages.
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(repo, outcome)| match outcome {
                RepoOutcome::Failed { message } => Some((repo.as_str(), message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// One-line summary for the end-of-run log.
    pub fn summary(&self) -> String {
        let mut present = 0;
        let mut already_open = 0;
        let mut opened = 0;
        let mut failed = 0;
        for (_, outcome) in &self.outcomes {
            match outcome {
                RepoOutcome::FilePresent => present += 1,
                RepoOutcome::PrAlreadyOpen => already_open += 1,
                RepoOutcome::PrOpened { .. } => opened += 1,
                RepoOutcome::Failed { .. } => failed += 1,
            }
        }
        format!(
            "{} repositories considered: {opened} PRs opened, {present} already have the file, \
             {already_open} PRs already open, {failed} failed",
            self.outcomes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_lists_only_failed_repos() {
        let mut report = RunReport::default();
        report.record("a".into(), RepoOutcome::PrOpened { number: 1 });
        report.record(
            "b".into(),
            RepoOutcome::Failed {
                message: "boom".into(),
            },
        );
        report.record("c".into(), RepoOutcome::FilePresent);

        let failures = report.failures();
        assert_eq!(failures, vec![("b", "boom")]);
    }

    #[test]
    fn summary_counts_every_outcome() {
        let mut report = RunReport::default();
        report.record("a".into(), RepoOutcome::PrOpened { number: 1 });
        report.record("b".into(), RepoOutcome::PrAlreadyOpen);
        report.record("c".into(), RepoOutcome::FilePresent);
        report.record(
            "d".into(),
            RepoOutcome::Failed {
                message: "boom".into(),
            },
        );

        let summary = report.summary();
        assert!(summary.starts_with("4 repositories considered"));
        assert!(summary.contains("1 PRs opened"));
        assert!(summary.contains("1 failed"));
    }

    #[test]
    fn empty_report_summarizes_cleanly() {
        let report = RunReport::default();
        assert!(report.failures().is_empty());
        assert!(report.summary().starts_with("0 repositories considered"));
    }
}
