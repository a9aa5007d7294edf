use std::time::{Duration, Instant};
use std::collections::HashMap;

use tracing::info;

#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
}

/// Wall-clock time spent in each pipeline stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    stages: Vec<StageTiming>,
    stage_map: HashMap<String, Duration>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stage(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        self.stages.push(StageTiming {
            name: name.clone(),
            duration,
        });
        *self.stage_map.entry(name).or_insert(Duration::ZERO) += duration;
    }

    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.add_stage(name, duration);
    }

    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|s| s.duration).sum()
    }

    pub fn get_stage(&self, name: &str) -> Option<Duration> {
        self.stage_map.get(name).copied()
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for stage in &self.stages {
            let percentage = if total.as_secs_f64() > 0.0 {
                (stage.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            info!(
                "{:<34} {:>10.1}s ({:>5.1}%)",
                stage.name,
                stage.duration.as_secs_f64(),
                percentage
            );
        }
        info!("{:<34} {:>10.1}s", "Total", total.as_secs_f64());
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}
