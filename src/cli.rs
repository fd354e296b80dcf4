use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "object-identifier")]
#[command(about = "画像に写っている物体をGeminiで識別するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像ファイルの物体を識別して表を出力
    Identify {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// パースせずにモデルの応答をそのまま出力
        #[arg(long)]
        raw: bool,

        /// 使用するモデル（省略時は設定ファイルの値）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 同梱サンプルの識別結果を表示
    Examples,

    /// 設定
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定のモデルを設定
        #[arg(long)]
        model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
