//! USFind
//!
//! 拾得物の写真をAIで解析して登録し、遺失物の届出に対して候補を照合する。
//! 照合エンジン本体は usfind-common にあり、このクレートは周辺処理を担う。

pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod service;
pub mod store;
