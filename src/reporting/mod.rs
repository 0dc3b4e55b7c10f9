pub mod reporting_model;
pub mod reporting_service;

pub use reporting_model::{
    DailyFlow, PositionSnapshot, RankedInstrument, RankingReport, SettlementReport,
};
pub use reporting_service::{generate_report, render_text};
