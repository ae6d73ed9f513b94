//! Summary - Betting and Winning Totals per Draw

use serde::{Deserialize, Serialize};

use crate::domain::record::{CellRef, TableRecord};

/// Ticket sales for one game, draw and region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettingSummary {
    pub id: i64,
    pub draw_date: String,
    pub game: String,
    #[serde(rename = "Region")]
    pub region: String,
    pub tickets_sold: i64,
    /// Total staked amount
    pub total_bets: f64,
}

impl TableRecord for BettingSummary {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "drawDate" => CellRef::Text(&self.draw_date),
            "game" => CellRef::Text(&self.game),
            "Region" => CellRef::Text(&self.region),
            "ticketsSold" => CellRef::Number(self.tickets_sold as f64),
            "totalBets" => CellRef::Number(self.total_bets),
            _ => CellRef::Null,
        }
    }
}

/// Payouts for one game, draw and region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningSummary {
    pub id: i64,
    pub draw_date: String,
    pub game: String,
    #[serde(rename = "Region")]
    pub region: String,
    pub winners: i64,
    pub total_winnings: f64,
    #[serde(default)]
    pub total_claimed: f64,
}

impl WinningSummary {
    /// Winnings not yet claimed
    pub fn unclaimed(&self) -> f64 {
        (self.total_winnings - self.total_claimed).max(0.0)
    }
}

impl TableRecord for WinningSummary {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "drawDate" => CellRef::Text(&self.draw_date),
            "game" => CellRef::Text(&self.game),
            "Region" => CellRef::Text(&self.region),
            "winners" => CellRef::Number(self.winners as f64),
            "totalWinnings" => CellRef::Number(self.total_winnings),
            "totalClaimed" => CellRef::Number(self.total_claimed),
            "unclaimed" => CellRef::Number(self.unclaimed()),
            _ => CellRef::Null,
        }
    }
}
