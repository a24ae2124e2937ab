pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod interactive;
pub mod parser;
pub mod portfolio;
pub mod prices;
pub mod report;
pub mod valuation;
