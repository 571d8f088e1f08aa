//! Simulation report generation.

use super::config::SimConfig;
use std::collections::BTreeMap;

/// Tallies from one simulated play-through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub wins: u32,
    pub losses: u32,
    /// Combats abandoned at the turn cap.
    pub stalemates: u32,
    /// Player actions across every finished combat.
    pub total_turns: u64,
    pub final_level: u32,
    pub final_gold: u32,
}

impl RunStats {
    pub fn combats(&self) -> u32 {
        self.wins + self.losses + self.stalemates
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub class_id: String,
    pub location_id: String,
    pub num_runs: u32,
    pub total_combats: u32,
    pub wins: u32,
    pub losses: u32,
    pub stalemates: u32,

    pub avg_turns_per_combat: f64,
    pub avg_final_level: f64,
    pub avg_final_gold: f64,

    pub level_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let wins = runs.iter().map(|r| r.wins).sum::<u32>();
        let losses = runs.iter().map(|r| r.losses).sum::<u32>();
        let stalemates = runs.iter().map(|r| r.stalemates).sum::<u32>();
        let total_combats = runs.iter().map(RunStats::combats).sum::<u32>();

        let finished = (wins + losses).max(1) as f64;
        let avg_turns_per_combat =
            runs.iter().map(|r| r.total_turns as f64).sum::<f64>() / finished;

        let per_run = num_runs.max(1) as f64;
        let avg_final_level =
            runs.iter().map(|r| r.final_level as f64).sum::<f64>() / per_run;
        let avg_final_gold = runs.iter().map(|r| r.final_gold as f64).sum::<f64>() / per_run;

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            class_id: config.class_id.clone(),
            location_id: config.location_id.clone(),
            num_runs,
            total_combats,
            wins,
            losses,
            stalemates,
            avg_turns_per_combat,
            avg_final_level,
            avg_final_gold,
            level_distribution,
            runs,
        }
    }

    /// Share of all combats won, in `[0, 1]`.
    pub fn win_rate(&self) -> f64 {
        if self.total_combats == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_combats as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("               (Using Real Combat Mechanics)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} in {}, {} combats total\n\n",
            self.num_runs, self.class_id, self.location_id, self.total_combats
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Wins:                {}\n", self.wins));
        report.push_str(&format!("  Losses:              {}\n", self.losses));
        report.push_str(&format!("  Stalemates:          {}\n", self.stalemates));
        report.push_str(&format!(
            "  Win Rate:            {:.1}%\n",
            self.win_rate() * 100.0
        ));
        report.push_str(&format!(
            "  Avg Turns/Combat:    {:.1}\n\n",
            self.avg_turns_per_combat
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Final Gold:      {:.0}\n\n",
            self.avg_final_gold
        ));

        report.push_str("── LEVEL DISTRIBUTION ───────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let win_rate = self.win_rate();
        let rating = if win_rate > 0.95 {
            "TOO EASY - Enemies rarely win"
        } else if win_rate > 0.75 {
            "GOOD - Challenging but fair"
        } else if win_rate > 0.5 {
            "HARD - Frequent defeats"
        } else {
            "TOO HARD - Most fights are lost"
        };
        report.push_str(&format!("  Rating: {}\n", rating));

        if self.stalemates > 0 {
            report.push_str("  ⚠️  Some combats hit the turn cap - healing outpaces damage?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 12)?;
        state.serialize_field("class_id", &self.class_id)?;
        state.serialize_field("location_id", &self.location_id)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("total_combats", &self.total_combats)?;
        state.serialize_field("wins", &self.wins)?;
        state.serialize_field("losses", &self.losses)?;
        state.serialize_field("stalemates", &self.stalemates)?;
        state.serialize_field("win_rate", &self.win_rate())?;
        state.serialize_field("avg_turns_per_combat", &self.avg_turns_per_combat)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("avg_final_gold", &self.avg_final_gold)?;
        state.serialize_field("level_distribution", &self.level_distribution)?;
        state.end()
    }
}
