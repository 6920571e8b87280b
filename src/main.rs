use clap::Parser;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use usfind::ai_provider::AiProvider;
use usfind::cli::{Cli, Commands};
use usfind::config::Config;
use usfind::error::Result;
use usfind::store::{ItemStore, JsonStore};
use usfind::{extractor, logging, prompt, report, scanner, service};
use usfind_common::{ItemCategory, ItemRecord, Matcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Found { photo, fields } => {
            println!("📦 usfind - 拾得物登録\n");

            scanner::ensure_image(&photo)?;
            let mut record = analyze_photo(&photo, cli.ai_provider, &config).await;

            // 手入力値で上書き
            fields.into_entry().apply_overrides(&mut record);

            let mut store = open_store(&config)?;
            let id = service::report_found(&mut store, record.clone())?;

            println!("✔ 拾得物を保存しました (ID: {})\n", id);
            println!("{}", report::render_record(&record));
        }

        Commands::Lost { photo, fields, limit } => {
            println!("🔍 usfind - 遺失物検索\n");

            let record = match photo {
                Some(photo) => {
                    scanner::ensure_image(&photo)?;
                    analyze_photo(&photo, cli.ai_provider, &config).await
                }
                None => {
                    let entry = if fields.any_given() {
                        fields.into_entry()
                    } else {
                        prompt::prompt_manual_entry()?
                    };

                    if entry.is_blank() {
                        println!("⚠ 品目・色・ブランド・特徴のいずれかを入力してください");
                        return Ok(());
                    }
                    entry.into_lost_record()
                }
            };

            let matcher = Matcher::new(config.matching);
            let limit = limit.unwrap_or(config.display_limit);

            let mut store = open_store(&config)?;
            let lost = service::report_lost(&mut store, record, &matcher, limit)?;
            println!("遺失物として保存しました (ID: {})\n", lost.id);

            if lost.candidates_count == 0 {
                println!("拾得物はまだ登録されていません");
                return Ok(());
            }

            if lost.matches.is_empty() {
                println!(
                    "⚠ はっきりした候補はまだありません。別の写真や説明で試してください"
                );
                return Ok(());
            }

            println!("候補 {}件:\n", lost.matches.len());
            for ranked in &lost.matches {
                println!("{}\n", report::render_match(ranked));
            }
        }

        Commands::List { item_type, color } => {
            let store = open_store(&config)?;
            let filtered = item_type.is_some() || color.is_some();
            let items =
                store.search(ItemCategory::Found, item_type.as_deref(), color.as_deref())?;

            if items.is_empty() {
                if filtered {
                    println!("条件に一致する拾得物はありません");
                } else {
                    println!("拾得物はまだありません。最初の1件を登録してください");
                }
                return Ok(());
            }

            println!("拾得物: {}件\n", items.len());
            for item in &items {
                println!("{}\n", report::render_item(item));
            }
        }

        Commands::Stats => {
            let store = open_store(&config)?;
            println!("{}", report::render_stats(&store.stats()?));
        }

        Commands::Score { query, candidate } => {
            let query = service::load_record(&query)?;
            let candidate = service::load_record(&candidate)?;

            let matcher = Matcher::new(config.matching);
            let breakdown = matcher.explain(&query, &candidate);
            let total = breakdown.total();

            println!("スコア: {} / {}", total, matcher.weights().max_score());
            println!("内訳: {}", report::render_breakdown(&breakdown));
            println!(
                "判定: {}",
                if total >= matcher.weights().threshold {
                    "候補に表示"
                } else {
                    "閾値未満"
                }
            );
        }

        Commands::Config { show, set_threshold, set_limit, set_store } => {
            let mut config = config;

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ 閾値を設定しました: {}", threshold);
            }

            if let Some(limit) = set_limit {
                config.set_display_limit(limit)?;
                println!("✔ 表示件数を設定しました: {}", limit);
            }

            if let Some(path) = set_store {
                config.set_store_path(path)?;
                println!("✔ 保存先を設定しました");
            }

            if show {
                let weights = &config.matching;
                println!("設定:");
                println!("  保存先: {}", config.resolve_store_path()?.display());
                println!("  表示件数: {}", config.display_limit);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  配点: 品目 {} / 色 {} / ブランド {} / 特徴 {}×語（上限{}）",
                    weights.item_type, weights.color, weights.brand,
                    weights.feature_per_token, weights.feature_cap
                );
                println!("  閾値: {}", weights.threshold);
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<JsonStore> {
    JsonStore::open(config.resolve_store_path()?)
}

/// 写真を解析（失敗時も "Unknown" レコードで続行）
async fn analyze_photo(photo: &Path, provider: AiProvider, config: &Config) -> ItemRecord {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("写真を解析中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let timeout = Duration::from_secs(config.timeout_seconds);
    let record = extractor::extract_item(photo, provider, timeout).await;

    spinner.finish_and_clear();

    if record.is_extraction_failure() {
        println!("⚠ AI解析に失敗しました（{}）\n", record.features);
    } else {
        println!("✔ 解析完了\n");
    }

    record
}
