//! Terminal stand-in for the 3D renderer: draws the grid as text at every
//! snapshot and keeps running counters for the end-of-run summary.

use tracing::info;

use rg_agent::{AgentView, Phase};
use rg_core::{Bounds, Tick};
use rg_sim::{ShuffleOutcome, SimObserver, TickReport};

pub struct AsciiRenderer {
    bounds: Bounds,
    pub moves:    usize,
    pub landings: usize,
    pub swaps:    usize,
    pub shuffles: usize,
}

impl AsciiRenderer {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, moves: 0, landings: 0, swaps: 0, shuffles: 0 }
    }

    fn glyph(phase: &Phase) -> char {
        match phase {
            Phase::Settled => '#',
            Phase::Ready => 'o',
            Phase::Moving(_) => '*',
            Phase::Landing { .. } => '^',
        }
    }

    fn draw(&self, views: &[AgentView]) -> String {
        let width = self.bounds.width() as usize;
        let depth = self.bounds.depth() as usize;
        let mut rows = vec![vec!['.'; width]; depth];

        for view in views {
            let col = (view.cell.x - self.bounds.min_x) as usize;
            let row = (view.cell.z - self.bounds.min_z) as usize;
            if let Some(slot) = rows.get_mut(row).and_then(|r| r.get_mut(col)) {
                *slot = Self::glyph(&view.phase);
            }
        }

        rows.into_iter()
            .map(|r| r.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SimObserver for AsciiRenderer {
    fn on_tick_end(&mut self, report: &TickReport) {
        self.moves += report.arrived;
        self.landings += report.landed;
    }

    fn on_shuffle(&mut self, _tick: Tick, outcome: &ShuffleOutcome) {
        self.shuffles += 1;
        if outcome.is_swapped() {
            self.swaps += 1;
        }
    }

    fn on_snapshot(&mut self, tick: Tick, views: &[AgentView]) {
        let unsettled = views.iter().filter(|v| !v.phase.is_settled()).count();
        info!(%tick, unsettled, moves = self.moves, swaps = self.swaps, "snapshot");
        println!("{}\n", self.draw(views));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, "simulation finished");
    }
}
