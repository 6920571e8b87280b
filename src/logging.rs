//! 診断ログの初期化
//!
//! 利用者向けの進捗は println! で出し、内部の診断は tracing で stderr に出す。
//! `RUST_LOG` が設定されていればそれを優先する。

use tracing_subscriber::EnvFilter;

/// 既定のフィルタ（-v で debug）
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "usfind=debug,usfind_common=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // テスト等で二重初期化されても失敗扱いにしない
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("debug"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
