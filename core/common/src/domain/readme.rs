//! README の取り出しとデコード（description_long）
//!
//! API は README を base64（60 桁ごとに改行入り）で返す。
//! base64 → UTF-8 の 2 段階はそれぞれ別のエラー種別で失敗する。

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error as ThisError;

pub const README_FETCH_FAILED: &str = "Failed to retrieve README.";
pub const README_NOT_FOUND: &str = "No README found.";
pub const README_UNPROCESSABLE: &str = "Unable to process README content.";

/// 標準アルファベット・パディング必須。末尾の余りビットが 0 でなくても受け付ける。
const README_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// README のデコード失敗
#[derive(Debug, ThisError)]
pub enum ReadmeDecodeError {
    #[error("invalid README response body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded README is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// README エンドポイントのレスポンス本文（必要なフィールドのみ）
#[derive(Debug, Deserialize)]
struct ReadmeBody {
    #[serde(default)]
    content: Option<String>,
}

/// README 本文の有無
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeContent {
    /// content が無い・null・空文字
    Missing,
    /// base64 のまま
    Encoded(String),
}

impl ReadmeContent {
    pub fn from_body(body: &str) -> Result<Self, ReadmeDecodeError> {
        let parsed: ReadmeBody = serde_json::from_str(body)?;
        Ok(match parsed.content {
            Some(c) if !c.is_empty() => Self::Encoded(c),
            _ => Self::Missing,
        })
    }
}

/// base64 をデコードして UTF-8 文字列にする（改行などの空白は無視）
pub fn decode_content(encoded: &str) -> Result<String, ReadmeDecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = README_ENGINE.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// レコードの description_long
///
/// JSON では常に文字列。失敗系は固定の文言になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionLong {
    Text(String),
    /// README の取得に失敗（200 以外・通信エラー）
    FetchFailed,
    /// README に content が無い
    NoReadme,
    /// 本文・base64・UTF-8 のいずれかが壊れている
    Unprocessable,
}

impl DescriptionLong {
    /// 200 で受け取った README 本文から description_long を作る
    pub fn from_readme_body(body: &str) -> Result<Self, ReadmeDecodeError> {
        match ReadmeContent::from_body(body)? {
            ReadmeContent::Missing => Ok(Self::NoReadme),
            ReadmeContent::Encoded(c) => decode_content(&c).map(Self::Text),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::FetchFailed => README_FETCH_FAILED,
            Self::NoReadme => README_NOT_FOUND,
            Self::Unprocessable => README_UNPROCESSABLE,
        }
    }

    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::FetchFailed => "fetch_failed",
            Self::NoReadme => "no_readme",
            Self::Unprocessable => "unprocessable",
        }
    }
}

impl Serialize for DescriptionLong {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
