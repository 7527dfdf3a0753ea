//! Column layout for the trades table: fixed column set, default widths, a
//! drag-resize state machine, and the cell formatting policy.
//!
//! The drag is an explicit idle/resizing machine. Entering `Resizing` stands
//! for acquiring the global pointer listeners; every path back to `Idle`
//! releases them, including a drag abandoned by a pointer-up outside the table
//! (callers route that through `end_resize` too).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Trade;

pub const MIN_COLUMN_WIDTH: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Id,
    Symbol,
    EntryTime,
    ExitTime,
    EntryPrice,
    ExitPrice,
    ProfitLoss,
    RMultiple,
    Volatility,
    Drawdown,
    Duration,
    Quantity,
    Win,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub label: &'static str,
}

/// Display order of the trades table, left to right.
pub const TRADE_COLUMNS: [ColumnDef; 13] = [
    ColumnDef { key: ColumnKey::Id, label: "Trade ID" },
    ColumnDef { key: ColumnKey::Symbol, label: "Symbol" },
    ColumnDef { key: ColumnKey::EntryTime, label: "Entry Time" },
    ColumnDef { key: ColumnKey::ExitTime, label: "Exit Time" },
    ColumnDef { key: ColumnKey::EntryPrice, label: "Entry Price" },
    ColumnDef { key: ColumnKey::ExitPrice, label: "Exit Price" },
    ColumnDef { key: ColumnKey::ProfitLoss, label: "PnL" },
    ColumnDef { key: ColumnKey::RMultiple, label: "R-Multiple" },
    ColumnDef { key: ColumnKey::Volatility, label: "Volatility" },
    ColumnDef { key: ColumnKey::Drawdown, label: "Drawdown" },
    ColumnDef { key: ColumnKey::Duration, label: "Duration (min)" },
    ColumnDef { key: ColumnKey::Quantity, label: "Quantity" },
    ColumnDef { key: ColumnKey::Win, label: "Win" },
];

fn default_width(key: ColumnKey) -> u32 {
    match key {
        ColumnKey::Id => 80,
        ColumnKey::Symbol => 100,
        ColumnKey::EntryTime => 170,
        ColumnKey::ExitTime => 170,
        ColumnKey::EntryPrice => 110,
        ColumnKey::ExitPrice => 110,
        ColumnKey::ProfitLoss => 100,
        ColumnKey::RMultiple => 110,
        ColumnKey::Volatility => 110,
        ColumnKey::Drawdown => 110,
        ColumnKey::Duration => 120,
        ColumnKey::Quantity => 100,
        ColumnKey::Win => 80,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResizeState {
    Idle,
    Resizing {
        column: ColumnKey,
        anchor_x: i32,
        anchor_width: u32,
    },
}

/// Pixel widths for every table column plus the in-flight drag, if any.
/// Widths never drop below [`MIN_COLUMN_WIDTH`]. Like the chart selection,
/// widths survive cluster switches.
#[derive(Debug, Clone)]
pub struct ColumnWidthModel {
    widths: HashMap<ColumnKey, u32>,
    resize: ResizeState,
}

impl Default for ColumnWidthModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnWidthModel {
    pub fn new() -> Self {
        let widths = TRADE_COLUMNS
            .iter()
            .map(|col| (col.key, default_width(col.key)))
            .collect();
        Self {
            widths,
            resize: ResizeState::Idle,
        }
    }

    pub fn width(&self, key: ColumnKey) -> u32 {
        self.widths.get(&key).copied().unwrap_or(MIN_COLUMN_WIDTH)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.resize, ResizeState::Resizing { .. })
    }

    /// Starts a drag on `column`, anchoring its current width to `pointer_x`.
    /// A drag already in progress is superseded, never stacked.
    pub fn begin_resize(&mut self, column: ColumnKey, pointer_x: i32) {
        self.resize = ResizeState::Resizing {
            column,
            anchor_x: pointer_x,
            anchor_width: self.width(column),
        };
    }

    /// Applies pointer movement to the column under drag. Clamped to the
    /// minimum width; a no-op while idle.
    pub fn update_resize(&mut self, pointer_x: i32) {
        let ResizeState::Resizing {
            column,
            anchor_x,
            anchor_width,
        } = self.resize
        else {
            return;
        };

        let target = anchor_width as i64 + (pointer_x - anchor_x) as i64;
        let width = target.max(MIN_COLUMN_WIDTH as i64) as u32;
        self.widths.insert(column, width);
    }

    /// Ends the drag. Safe to call at any time, including with no drag in
    /// progress (abnormal pointer release).
    pub fn end_resize(&mut self) {
        self.resize = ResizeState::Idle;
    }
}

/// Fixed cell formatting: timestamps to the minute, win flag as a mark,
/// id/quantity/duration verbatim, every other numeric to two decimals.
pub fn format_cell(trade: &Trade, key: ColumnKey) -> String {
    const TIME_FMT: &str = "%Y-%m-%d %H:%M";
    match key {
        ColumnKey::Id => trade.id.to_string(),
        ColumnKey::Symbol => trade.symbol.clone(),
        ColumnKey::EntryTime => trade.entry_time.format(TIME_FMT).to_string(),
        ColumnKey::ExitTime => trade.exit_time.format(TIME_FMT).to_string(),
        ColumnKey::EntryPrice => format!("{:.2}", trade.entry_price),
        ColumnKey::ExitPrice => format!("{:.2}", trade.exit_price),
        ColumnKey::ProfitLoss => format!("{:.2}", trade.profit_loss),
        ColumnKey::RMultiple => format!("{:.2}", trade.r_multiple),
        ColumnKey::Volatility => format!("{:.2}", trade.volatility),
        ColumnKey::Drawdown => format!("{:.2}", trade.drawdown),
        ColumnKey::Duration => trade.duration.to_string(),
        ColumnKey::Quantity => trade.quantity.to_string(),
        ColumnKey::Win => match trade.win {
            Some(true) => "✅".to_string(),
            Some(false) => "❌".to_string(),
            None => String::new(),
        },
    }
}
