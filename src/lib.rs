//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod taxonomy;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use matching::{score, Findings, MatchResult, SkillDetector};
pub use taxonomy::SkillTaxonomy;
