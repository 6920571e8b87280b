use crate::ai_provider::AiProvider;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use usfind_common::ManualEntry;

#[derive(Parser)]
#[command(name = "usfind")]
#[command(about = "遺失物・拾得物の写真AI解析と照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

/// 手入力フィールド
#[derive(Args, Debug, Clone, Default)]
pub struct ItemFields {
    /// 品目（例: wallet, keys, phone）
    #[arg(short = 't', long)]
    pub item_type: Option<String>,

    /// 色
    #[arg(short, long)]
    pub color: Option<String>,

    /// ブランド・型番
    #[arg(short, long)]
    pub brand: Option<String>,

    /// 特徴（傷、シール、タグなど）
    #[arg(short, long)]
    pub features: Option<String>,
}

impl ItemFields {
    /// いずれかのフィールドが指定されたか
    pub fn any_given(&self) -> bool {
        self.item_type.is_some()
            || self.color.is_some()
            || self.brand.is_some()
            || self.features.is_some()
    }

    pub fn into_entry(self) -> ManualEntry {
        ManualEntry {
            item_type: self.item_type.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 拾得物を登録（写真をAI解析し、手入力値で上書き）
    Found {
        /// 写真ファイル（jpg/jpeg/png）
        #[arg(short, long, required = true)]
        photo: PathBuf,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// 遺失物を届け出て、拾得物から候補を探す
    Lost {
        /// 写真ファイル（省略時はテキスト入力）
        #[arg(short, long, conflicts_with_all = ["item_type", "color", "brand", "features"])]
        photo: Option<PathBuf>,

        #[command(flatten)]
        fields: ItemFields,

        /// 表示件数（省略時は設定値）
        #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },

    /// 拾得物の一覧（品目・色の部分一致で絞り込み可）
    List {
        /// 品目で絞り込み
        #[arg(short = 't', long)]
        item_type: Option<String>,

        /// 色で絞り込み
        #[arg(short, long)]
        color: Option<String>,
    },

    /// 登録件数
    Stats,

    /// 2件のレコード（JSONファイル）のスコア内訳を表示
    Score {
        /// 遺失物側のJSONファイル
        #[arg(required = true)]
        query: PathBuf,

        /// 拾得物側のJSONファイル
        #[arg(required = true)]
        candidate: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 照合の閾値を設定
        #[arg(long)]
        set_threshold: Option<u32>,

        /// 表示件数を設定
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        set_limit: Option<usize>,

        /// 保存先ファイルを設定
        #[arg(long)]
        set_store: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lost_text() {
        let cli = Cli::try_parse_from([
            "usfind", "lost", "--item-type", "wallet", "--color", "black", "-n", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Lost { photo, fields, limit } => {
                assert!(photo.is_none());
                assert!(fields.any_given());
                assert_eq!(limit, Some(3));
                let entry = fields.into_entry();
                assert_eq!(entry.item_type, "wallet");
                assert_eq!(entry.brand, "");
            }
            _ => panic!("Expected Lost"),
        }
    }

    #[test]
    fn test_lost_photo_conflicts_with_fields() {
        let result = Cli::try_parse_from(["usfind", "lost", "--photo", "a.jpg", "--color", "red"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_found_requires_photo() {
        assert!(Cli::try_parse_from(["usfind", "found", "--item-type", "keys"]).is_err());

        let cli =
            Cli::try_parse_from(["usfind", "-v", "found", "-p", "keys.jpg", "-t", "keys"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.ai_provider, AiProvider::Claude);
    }

    #[test]
    fn test_ai_provider_flag() {
        let cli = Cli::try_parse_from(["usfind", "--ai-provider", "gemini", "list"]).unwrap();
        assert_eq!(cli.ai_provider, AiProvider::Gemini);
    }

    #[test]
    fn test_lost_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["usfind", "lost", "-t", "keys", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["usfind", "config", "--set-limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["usfind", "lost", "-t", "keys", "-n", "1"]).unwrap();
        match cli.command {
            Commands::Lost { limit, .. } => assert_eq!(limit, Some(1)),
            _ => panic!("Expected Lost"),
        }
    }

    #[test]
    fn test_list_filters() {
        let cli =
            Cli::try_parse_from(["usfind", "list", "-t", "wallet", "--color", "black"]).unwrap();
        match cli.command {
            Commands::List { item_type, color } => {
                assert_eq!(item_type.as_deref(), Some("wallet"));
                assert_eq!(color.as_deref(), Some("black"));
            }
            _ => panic!("Expected List"),
        }

        let cli = Cli::try_parse_from(["usfind", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { item_type: None, color: None }));
    }
}
