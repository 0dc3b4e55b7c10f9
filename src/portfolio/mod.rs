pub mod portfolio_model;

pub use portfolio_model::PortfolioLedger;
