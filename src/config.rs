use crate::domain::{book::Book, role::Principal};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Malformed CATALOG_API_TOKENS entry: {0}")]
    MalformedToken(String),

    #[error("Failed to read seed file {path}")]
    SeedFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}")]
    SeedFileMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// トークン設定の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub token: String,
    pub principal: Principal,
}

/// アプリケーション設定
///
/// 環境変数から読み込む:
/// - `HOST` / `PORT`: 待ち受けアドレス
/// - `CATALOG_API_TOKENS`: `token=subject:ROLE_A,ROLE_B;token2=...`
/// - `CATALOG_SEED_FILE`: 起動時に読み込む書籍のJSON配列
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub tokens: Vec<TokenGrant>,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// キーと値の組から設定を構築する
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let host = vars
            .get("HOST")
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match vars.get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let tokens = match vars.get("CATALOG_API_TOKENS") {
            Some(raw) => parse_tokens(raw)?,
            None => Vec::new(),
        };

        let seed_file = vars
            .get("CATALOG_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            tokens,
            seed_file,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `token=subject:ROLE_A,ROLE_B` を `;` 区切りで並べた文字列をパースする
///
/// 未知のロール名は無視される。ロールなし（`token=subject`）も許容する。
pub fn parse_tokens(raw: &str) -> Result<Vec<TokenGrant>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<TokenGrant, ConfigError> {
            let (token, rest) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedToken(entry.to_string()))?;
            let (subject, roles) = rest.split_once(':').unwrap_or((rest, ""));

            let token = token.trim();
            let subject = subject.trim();
            if token.is_empty() || subject.is_empty() {
                return Err(ConfigError::MalformedToken(entry.to_string()));
            }

            let role_names = roles.split(',').map(str::trim).filter(|r| !r.is_empty());
            Ok(TokenGrant {
                token: token.to_string(),
                principal: Principal::from_role_names(subject, role_names),
            })
        })
        .collect()
}

/// 書籍のJSON配列ファイルを読み込む
pub fn load_seed_books(path: &Path) -> Result<Vec<Book>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::SeedFileMalformed {
        path: path.to_path_buf(),
        source,
    })
}
