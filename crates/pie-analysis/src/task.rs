//! Experiment task conditions
//!
//! Each log file belongs to exactly one task condition, encoded as a short
//! code in the file name (`log_data_<subject>_<task>_<trial>.csv`).

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// Task condition of a trial block.
///
/// Variants are declared in plot order, so the derived `Ord` sorts tasks the
/// way they appear in legends: traffic light, crossing intention, trajectory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    /// Traffic light state recognition (`tl`)
    TrafficLight,
    /// Pedestrian crossing intention (`int`)
    CrossingIntention,
    /// Pedestrian trajectory (`traj`)
    Trajectory,
    /// Any other code found in a file name, kept verbatim
    Other(String),
}

impl Task {
    /// Known tasks in plot (hue) order.
    pub const PLOT_ORDER: [Task; 3] = [
        Task::TrafficLight,
        Task::CrossingIntention,
        Task::Trajectory,
    ];

    /// Short code used in log file names.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Task::TrafficLight => "tl",
            Task::CrossingIntention => "int",
            Task::Trajectory => "traj",
            Task::Other(code) => code,
        }
    }

    /// Position in [`Task::PLOT_ORDER`], or `None` for [`Task::Other`].
    #[must_use]
    pub fn hue_index(&self) -> Option<usize> {
        Task::PLOT_ORDER.iter().position(|task| task == self)
    }

    /// Human-readable label used in reports and plot legends.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Task::TrafficLight => "traffic light",
            Task::CrossingIntention => "crossing intention",
            Task::Trajectory => "trajectory",
            Task::Other(code) => code,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl FromStr for Task {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "tl" => Task::TrafficLight,
            "int" => Task::CrossingIntention,
            "traj" => Task::Trajectory,
            other => Task::Other(other.to_owned()),
        })
    }
}

impl Serialize for Task {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!("tl".parse::<Task>(), Ok(Task::TrafficLight));
        assert_eq!("int".parse::<Task>(), Ok(Task::CrossingIntention));
        assert_eq!("traj".parse::<Task>(), Ok(Task::Trajectory));
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let task: Task = "gaze".parse().unwrap();
        assert_eq!(task, Task::Other("gaze".to_owned()));
        assert_eq!(task.code(), "gaze");
        assert_eq!(task.to_string(), "gaze");
    }

    #[test]
    fn test_order_matches_plot_order() {
        let mut tasks = vec![
            Task::Trajectory,
            Task::Other("a".to_owned()),
            Task::TrafficLight,
            Task::CrossingIntention,
        ];
        tasks.sort();
        assert_eq!(tasks[..3], Task::PLOT_ORDER);
    }

    #[test]
    fn test_hue_index_follows_plot_order() {
        assert_eq!(Task::TrafficLight.hue_index(), Some(0));
        assert_eq!(Task::CrossingIntention.hue_index(), Some(1));
        assert_eq!(Task::Trajectory.hue_index(), Some(2));
        assert_eq!(Task::Other("gaze".to_owned()).hue_index(), None);
    }

    #[test]
    fn test_label_roundtrip_through_code() {
        for task in Task::PLOT_ORDER {
            assert_eq!(task.code().parse::<Task>().unwrap(), task);
        }
        assert_eq!(Task::CrossingIntention.to_string(), "crossing intention");
    }
}
