use std::time::Duration;

use rand::Rng;

use super::script::Script;
use crate::config::SequencerConfig;

/// Timing knobs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub step_delay: Duration,
    pub jitter: Duration,
    pub results_reveal: Duration,
    pub summary_reveal: Duration,
}

impl Pacing {
    /// Zero delays everywhere. Tasks still run in schedule order.
    #[cfg(test)]
    pub(crate) fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            jitter: Duration::ZERO,
            results_reveal: Duration::ZERO,
            summary_reveal: Duration::ZERO,
        }
    }

    fn step_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.step_delay;
        }
        self.step_delay + Duration::from_millis(rng.gen_range(0..=jitter_ms))
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&SequencerConfig::default())
    }
}

impl From<&SequencerConfig> for Pacing {
    fn from(config: &SequencerConfig) -> Self {
        Self {
            step_delay: Duration::from_millis(config.step_delay_ms),
            jitter: Duration::from_millis(config.jitter_ms),
            results_reveal: Duration::from_millis(config.results_reveal_ms),
            summary_reveal: Duration::from_millis(config.summary_reveal_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Append the event for script step `n` and advance progress.
    Emit(usize),
    RevealResults,
    /// Mark the run completed and deliver the notification.
    Complete,
    RevealSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Offset from run start.
    pub at: Duration,
    pub task: Task,
}

/// Every task of a run with its absolute deadline, in execution order.
#[derive(Debug, Clone)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
}

impl Schedule {
    pub fn plan(script: &Script, pacing: &Pacing) -> Self {
        Self::plan_with(script, pacing, &mut rand::thread_rng())
    }

    pub fn plan_with<R: Rng + ?Sized>(script: &Script, pacing: &Pacing, rng: &mut R) -> Self {
        let mut tasks = Vec::with_capacity(script.len() + 3);
        let mut offset = Duration::ZERO;
        let mut results_at = None;

        for index in 0..script.len() {
            offset += pacing.step_interval(rng);
            tasks.push(ScheduledTask { at: offset, task: Task::Emit(index) });

            if index == script.results_step() {
                results_at = Some(offset + pacing.results_reveal);
            }
        }

        let summary_at = offset + pacing.summary_reveal;
        // Results must land before the summary even with a long reveal delay.
        if let Some(at) = results_at {
            tasks.push(ScheduledTask { at: at.min(summary_at), task: Task::RevealResults });
        }
        tasks.push(ScheduledTask { at: offset, task: Task::Complete });
        tasks.push(ScheduledTask { at: summary_at, task: Task::RevealSummary });

        // Stable: ties keep push order, so Emit(final) precedes Complete.
        tasks.sort_by_key(|t| t.at);
        Self { tasks }
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn total(&self) -> Duration {
        self.tasks.last().map(|t| t.at).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_pacing() -> Pacing {
        Pacing {
            step_delay: Duration::from_millis(800),
            jitter: Duration::ZERO,
            results_reveal: Duration::from_millis(500),
            summary_reveal: Duration::from_millis(800),
        }
    }

    fn position(schedule: &Schedule, task: Task) -> usize {
        schedule.tasks().iter().position(|t| t.task == task).unwrap()
    }

    #[test]
    fn test_fixed_pacing_offsets() {
        let schedule = Schedule::plan(&Script::shopping("q"), &fixed_pacing());
        let emits: Vec<u64> = schedule
            .tasks()
            .iter()
            .filter(|t| matches!(t.task, Task::Emit(_)))
            .map(|t| t.at.as_millis() as u64)
            .collect();
        assert_eq!(emits, (1..=10).map(|i| i * 800).collect::<Vec<_>>());
        assert_eq!(schedule.total(), Duration::from_millis(8800));
    }

    #[test]
    fn test_emits_in_script_order() {
        let schedule = Schedule::plan(&Script::shopping("q"), &Pacing::default());
        let order: Vec<usize> = schedule
            .tasks()
            .iter()
            .filter_map(|t| match t.task {
                Task::Emit(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_results_between_eighth_and_ninth_step() {
        let schedule = Schedule::plan(&Script::shopping("q"), &fixed_pacing());
        let results = position(&schedule, Task::RevealResults);
        assert!(results > position(&schedule, Task::Emit(7)));
        assert!(results < position(&schedule, Task::Emit(8)));
    }

    #[test]
    fn test_complete_follows_final_emit_and_precedes_summary() {
        let schedule = Schedule::plan(&Script::shopping("q"), &fixed_pacing());
        let complete = position(&schedule, Task::Complete);
        assert!(complete > position(&schedule, Task::Emit(9)));
        assert!(complete < position(&schedule, Task::RevealSummary));
        assert_eq!(schedule.tasks().last().unwrap().task, Task::RevealSummary);
    }

    #[test]
    fn test_instant_pacing_keeps_order() {
        let schedule = Schedule::plan(&Script::shopping("q"), &Pacing::instant());
        let tasks: Vec<Task> = schedule.tasks().iter().map(|t| t.task).collect();
        assert_eq!(tasks[7], Task::Emit(7));
        assert_eq!(tasks[8], Task::Emit(8));
        assert_eq!(tasks[10], Task::RevealResults);
        assert_eq!(tasks[11], Task::Complete);
        assert_eq!(tasks[12], Task::RevealSummary);
    }

    #[test]
    fn test_long_results_delay_is_clamped_before_summary() {
        let pacing = Pacing {
            results_reveal: Duration::from_secs(60),
            ..fixed_pacing()
        };
        let schedule = Schedule::plan(&Script::shopping("q"), &pacing);
        assert!(position(&schedule, Task::RevealResults) < position(&schedule, Task::RevealSummary));
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let pacing = Pacing {
            jitter: Duration::from_millis(400),
            ..fixed_pacing()
        };
        for _ in 0..20 {
            let schedule = Schedule::plan(&Script::shopping("q"), &pacing);
            let mut last = Duration::ZERO;
            for t in schedule.tasks().iter().filter(|t| matches!(t.task, Task::Emit(_))) {
                let gap = t.at - last;
                assert!(gap >= Duration::from_millis(800) && gap <= Duration::from_millis(1200));
                last = t.at;
            }
        }
    }
}
