//! Terminal rendering.
//!
//! [`BarModel`] folds the engine's step stream into per-bar display state
//! and is pure data, so the fold rules are unit tested without a TTY.
//! [`TerminalRenderer`] owns the crossterm session (raw mode + alternate
//! screen) and redraws the whole frame after every event.

use std::io::{self, Write};

use async_trait::async_trait;
use crossterm::style::{self, Color};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use engine::{AnimationStep, RunEvent, SortAlgorithm, SpeedControl};

use crate::error::ViewerResult;
use crate::traits::Frontend;

/// Display state of a single bar, in ascending render precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Idle,
    Sorted,
    Pivot,
    Active,
    Swapped,
}

/// Pure fold of the animation protocol into drawable bars.
#[derive(Debug, Clone)]
pub struct BarModel {
    heights: Vec<u32>,
    sorted: Vec<bool>,
    active: Vec<usize>,
    swapped: Vec<usize>,
    pivot: Option<usize>,
    pub comparisons: u64,
    pub swaps: u64,
    pub writes: u64,
}

impl BarModel {
    pub fn new(values: &[u32]) -> Self {
        Self {
            heights: values.to_vec(),
            sorted: vec![false; values.len()],
            active: Vec::new(),
            swapped: Vec::new(),
            pivot: None,
            comparisons: 0,
            swaps: 0,
            writes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Tallest bar, floored at 1 so height scaling never divides by zero.
    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Fold one step into the model. Transient highlights (active pair,
    /// swapped pair) replace each other; sorted marks accumulate.
    pub fn apply(&mut self, step: &AnimationStep) {
        match step {
            AnimationStep::Compare { i, j } => {
                self.active = vec![*i, *j];
                self.swapped.clear();
                self.comparisons += 1;
            }
            AnimationStep::Swap { i, j } => {
                self.heights.swap(*i, *j);
                self.swapped = vec![*i, *j];
                self.active.clear();
                // The closing swap of a partition retires the pivot highlight.
                if self.pivot == Some(*i) || self.pivot == Some(*j) {
                    self.pivot = None;
                }
                self.swaps += 1;
            }
            AnimationStep::Overwrite { index, value } => {
                self.heights[*index] = *value;
                self.swapped = vec![*index];
                self.active.clear();
                self.writes += 1;
            }
            AnimationStep::MarkActive { indices } => {
                self.active = indices.clone();
                self.swapped.clear();
            }
            AnimationStep::MarkPivot { index } => {
                self.pivot = Some(*index);
            }
            AnimationStep::MarkSorted { indices } => {
                for &index in indices {
                    if let Some(slot) = self.sorted.get_mut(index) {
                        *slot = true;
                    }
                }
            }
        }
    }

    /// Snap to the final picture: settled heights, everything sorted,
    /// no transient highlights left over.
    pub fn complete(&mut self, values: &[u32]) {
        self.heights = values.to_vec();
        self.sorted = vec![true; self.heights.len()];
        self.active.clear();
        self.swapped.clear();
        self.pivot = None;
    }

    pub fn state_of(&self, index: usize) -> BarState {
        if self.swapped.contains(&index) {
            BarState::Swapped
        } else if self.active.contains(&index) {
            BarState::Active
        } else if self.pivot == Some(index) {
            BarState::Pivot
        } else if self.sorted.get(index).copied().unwrap_or(false) {
            BarState::Sorted
        } else {
            BarState::Idle
        }
    }
}

fn bar_color(state: BarState) -> Color {
    match state {
        BarState::Idle => Color::Cyan,
        BarState::Sorted => Color::Green,
        BarState::Pivot => Color::Magenta,
        BarState::Active => Color::Yellow,
        BarState::Swapped => Color::Red,
    }
}

/// Interactive crossterm frontend. Construction enters raw mode and the
/// alternate screen; [`Frontend::finish`] (or `Drop`, as a fallback)
/// restores the terminal.
pub struct TerminalRenderer {
    out: io::Stdout,
    model: BarModel,
    algorithm: SortAlgorithm,
    speed: SpeedControl,
    outcome: Option<String>,
    restored: bool,
}

impl TerminalRenderer {
    pub fn new(
        algorithm: SortAlgorithm,
        speed: SpeedControl,
        values: &[u32],
    ) -> ViewerResult<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        let mut renderer = Self {
            out,
            model: BarModel::new(values),
            algorithm,
            speed,
            outcome: None,
            restored: false,
        };
        renderer.draw()?;
        Ok(renderer)
    }

    /// Redraw after a local state change, e.g. a speed adjustment.
    pub fn refresh(&mut self) -> ViewerResult<()> {
        self.draw()
    }

    fn draw(&mut self) -> ViewerResult<()> {
        let (cols, rows) = terminal::size()?;
        if cols < 4 || rows < 4 {
            return Ok(());
        }

        queue!(self.out, terminal::Clear(ClearType::All))?;

        let status = format!(
            "{}  speed {:>3}%  |  {} comparisons  {} swaps  {} writes",
            self.algorithm.label(),
            self.speed.percent(),
            self.model.comparisons,
            self.model.swaps,
            self.model.writes,
        );
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(Color::White),
            style::Print(&status),
        )?;

        // Row 0 is the status line, row 1 a separator, the last row the
        // hint line. Bars grow upward from row rows - 2.
        let plot_rows = rows - 3;
        let bottom = rows - 2;
        let count = self.model.len();
        if count > 0 {
            let bar_width: usize = if count * 2 <= cols as usize { 2 } else { 1 };
            let shown = count.min(cols as usize / bar_width);
            let max = u64::from(self.model.max_height());
            for index in 0..shown {
                let value = u64::from(self.model.heights()[index]);
                // Ceiling scale so every nonzero value shows at least one cell.
                let cells = ((value * u64::from(plot_rows) + max - 1) / max) as u16;
                let cells = cells.min(plot_rows);
                queue!(
                    self.out,
                    style::SetForegroundColor(bar_color(self.model.state_of(index))),
                )?;
                let x = (index * bar_width) as u16;
                for row in 0..cells {
                    queue!(self.out, cursor::MoveTo(x, bottom - row), style::Print("█"))?;
                }
            }
        }

        let hint = match &self.outcome {
            Some(text) => text.clone(),
            None => String::from("[q] cancel   [+]/[-] speed"),
        };
        queue!(
            self.out,
            cursor::MoveTo(0, rows - 1),
            style::SetForegroundColor(Color::DarkGrey),
            style::Print(&hint),
            style::ResetColor,
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn restore(&mut self) -> ViewerResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

#[async_trait]
impl Frontend for TerminalRenderer {
    async fn handle_event(&mut self, event: RunEvent) -> ViewerResult<()> {
        match event {
            RunEvent::Step(step) => self.model.apply(&step),
            RunEvent::Completed { values, stats } => {
                self.model.complete(&values);
                self.outcome = Some(format!(
                    "✅ sorted in {} steps   [any key] exit",
                    stats.steps
                ));
            }
            RunEvent::Cancelled { .. } => {
                self.outcome = Some(String::from("🛑 cancelled   [any key] exit"));
            }
            RunEvent::Failed { message } => {
                self.outcome = Some(format!("❌ failed: {message}   [any key] exit"));
            }
        }
        self.draw()
    }

    async fn finish(&mut self) -> ViewerResult<()> {
        self.restore()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
