// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Input ---
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CandleData {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl CandleData {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: 0.0,
        }
    }
}

// --- Levels ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LevelRole {
    Boundary,
    RejectionBlock,
    OrderBlock,
    FairValueGap,
    LiquidityVoid,
    Breaker,
    Equilibrium,
}

impl LevelRole {
    pub fn name(&self) -> &'static str {
        match self {
            LevelRole::Boundary => "Boundary",
            LevelRole::RejectionBlock => "Rejection Block",
            LevelRole::OrderBlock => "Order Block",
            LevelRole::FairValueGap => "Fair Value Gap",
            LevelRole::LiquidityVoid => "Liquidity Void",
            LevelRole::Breaker => "Breaker",
            LevelRole::Equilibrium => "Equilibrium",
        }
    }

    /// Chart color used by the frontend overlay.
    pub fn color(&self) -> &'static str {
        match self {
            LevelRole::Boundary => "#94a3b8",
            LevelRole::RejectionBlock => "#f97316",
            LevelRole::OrderBlock => "#ef4444",
            LevelRole::FairValueGap => "#a855f7",
            LevelRole::LiquidityVoid => "#3b82f6",
            LevelRole::Breaker => "#22c55e",
            LevelRole::Equilibrium => "#eab308",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceLevel {
    pub price: f64,
    pub label: String,
    pub ratio: f64,
    pub role: LevelRole,
    pub color: String,
}

// --- Ranges ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    pub low: f64,
    pub high: f64,
}

/// `high == low + grid_size` always holds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DealingRange {
    pub grid_size: u32,
    pub low: f64,
    pub high: f64,
}

impl DealingRange {
    pub fn midpoint(&self) -> f64 {
        self.low + (self.high - self.low) / 2.0
    }
}

// --- Signals ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalType {
    Hippo,
    StopRun,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Signal {
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub detected: bool,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub direction: Option<Sentiment>,
}

// --- Output ---
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Premium,
    Discount,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Premium => write!(f, "Premium"),
            Zone::Discount => write!(f, "Discount"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentStatus {
    pub price: f64,
    pub zone: Zone,
    pub nearest_level: Option<PriceLevel>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub narrative: String,
    pub dealing_range: DealingRange,
    pub current_status: CurrentStatus,
    pub signals: Vec<Signal>,
    pub levels: Vec<PriceLevel>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MultiZoneRange {
    pub grid_size: u32,
    pub low: f64,
    pub high: f64,
    pub all_ranges: Vec<ZoneBounds>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RangeWindowResult {
    pub levels: Vec<PriceLevel>,
    pub dealing_range: MultiZoneRange,
}
