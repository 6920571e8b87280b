//! USFind Common Library
//!
//! CLIと将来のフロントエンドで共有される型と照合エンジン

pub mod error;
pub mod intake;
pub mod matcher;
pub mod parser;
pub mod prompts;
pub mod types;

pub use error::{Error, Result};
pub use intake::ManualEntry;
pub use matcher::{explain, rank, score, MatchResult, MatchWeights, Matcher, ScoreBreakdown};
pub use parser::{extract_json, parse_item_response};
pub use prompts::build_extraction_prompt;
pub use types::{ItemCategory, ItemRecord};
