//! projimport コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

/// projimport のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示（コマンド未指定時も）
    Help,

    /// リポジトリ情報を取得してストアを 1 件で上書き（replace [owner/name]）
    Replace { repo: Option<String> },

    /// README 込みで取得してストアに追記（append [owner/name]）
    Append { repo: Option<String> },

    /// ストアのプロジェクト一覧（list）
    List,

    /// id 指定で 1 件表示（show <id>）。id 省略は main でエラーにする
    Show { id: Option<String> },

    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する
    pub fn parse_with_args(name: &str, args: &[String]) -> Self {
        match name {
            "replace" => Command::Replace {
                repo: args.first().cloned(),
            },
            "append" => Command::Append {
                repo: args.first().cloned(),
            },
            "list" => Command::List,
            "show" => Command::Show {
                id: args.first().cloned(),
            },
            "help" => Command::Help,
            _ => Command::Unknown(name.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Replace { .. } => "replace",
            Command::Append { .. } => "append",
            Command::List => "list",
            Command::Show { .. } => "show",
            Command::Unknown(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replace_without_repo() {
        assert_eq!(
            Command::parse_with_args("replace", &[]),
            Command::Replace { repo: None }
        );
    }

    #[test]
    fn test_parse_append_with_repo() {
        let cmd = Command::parse_with_args("append", &["livekit/agents".to_string()]);
        assert_eq!(
            cmd,
            Command::Append {
                repo: Some("livekit/agents".to_string())
            }
        );
        assert_eq!(cmd.name(), "append");
    }

    #[test]
    fn test_parse_show() {
        let cmd = Command::parse_with_args("show", &["agents".to_string()]);
        assert_eq!(cmd, Command::Show { id: Some("agents".to_string()) });
        assert_eq!(Command::parse_with_args("show", &[]), Command::Show { id: None });
    }

    #[test]
    fn test_parse_unknown() {
        let cmd = Command::parse_with_args("import", &[]);
        assert!(matches!(cmd, Command::Unknown(s) if s == "import"));
    }
}
