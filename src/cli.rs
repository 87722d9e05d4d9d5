use clap::{Args, Parser, Subcommand, ValueEnum};
use estate_common::draft::{optional_text, parse_tags, price_from_input};
use estate_common::{BannerDraft, BannerKind, PropertyDraft, SearchQuery};

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "不動産マーケットプレイスのCLIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIの接続先（ESTATE_API_URL・設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 物件の一覧・詳細・削除
    Properties {
        #[command(subcommand)]
        action: PropertyCommand,
    },

    /// エージェント
    Agents {
        #[command(subcommand)]
        action: AgentCommand,
    },

    /// バナーの一覧・登録・更新・削除
    Banners {
        #[command(subcommand)]
        action: BannerCommand,
    },

    /// 通知
    Notifications {
        #[command(subcommand)]
        action: NotificationCommand,
    },

    /// 設定
    Config {
        /// 接続先URLを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum PropertyCommand {
    /// 一覧を表示（区分・検索で絞り込み、ページ単位で表示）
    List(ListArgs),

    /// 登録（タイトル・区分は必須）
    Add(PropertyFields),

    /// 指定したフィールドだけ更新
    Update {
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        fields: PropertyFields,
    },

    /// 1件の詳細
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// 削除
    Delete {
        #[arg(required = true)]
        id: String,

        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// 区分 (All / Rent / Buy / "Off Plan" / "Commercial for Rent" / "Commercial for Buy")
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// エージェントIDで絞り込み（サーバー側）
    #[arg(short, long)]
    pub agent: Option<String>,

    /// タイトル・所在地の検索文字列
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub min_bedrooms: Option<u32>,

    /// 1ページの件数（デフォルト: 設定ファイル）
    #[arg(long)]
    pub page_size: Option<usize>,

    /// 表示するページ数（「もっと見る」の回数 + 1）
    #[arg(short, long, default_value = "1")]
    pub pages: usize,
}

impl ListArgs {
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.search.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
        }
    }
}

/// 物件の入力項目（未指定は送らない）
#[derive(Args, Debug, Clone, Default)]
pub struct PropertyFields {
    #[arg(long)]
    pub title: Option<String>,

    /// 区分 (Rent / Buy / "Off Plan" / "Commercial for Rent" / "Commercial for Buy")
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// 数値または表示用の文字列
    #[arg(long)]
    pub price: Option<String>,

    /// 画像URL
    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub developer: Option<String>,

    #[arg(long)]
    pub completion_date: Option<String>,

    /// カンマ区切り
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub bedrooms: Option<u32>,

    /// 面積（sq.ft）
    #[arg(long)]
    pub size: Option<f64>,

    /// 掲載エージェントID
    #[arg(long)]
    pub agent: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

impl PropertyFields {
    pub fn to_draft(&self) -> PropertyDraft {
        let text = |v: &Option<String>| v.as_deref().and_then(optional_text);
        PropertyDraft {
            title: text(&self.title),
            category: text(&self.category),
            location: text(&self.location),
            price: self.price.as_deref().and_then(price_from_input),
            image: text(&self.image),
            developer: text(&self.developer),
            completion_date: text(&self.completion_date),
            tags: self.tags.as_deref().map(parse_tags),
            bedrooms: self.bedrooms,
            size: self.size,
            agent: text(&self.agent),
            description: text(&self.description),
        }
    }
}

#[derive(Subcommand)]
pub enum BannerCommand {
    /// 一覧
    List {
        /// 種別 (home/offplan)
        #[arg(short, long)]
        kind: Option<BannerKindArg>,
    },

    /// 登録（画像・種別は必須）
    Create(BannerFields),

    /// 指定したフィールドだけ更新
    Update {
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        fields: BannerFields,
    },

    /// 削除
    Delete {
        #[arg(required = true)]
        id: String,

        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },
}

/// バナーの入力項目
#[derive(Args, Debug, Clone, Default)]
pub struct BannerFields {
    /// 画像URL
    #[arg(long)]
    pub image: Option<String>,

    #[arg(short, long)]
    pub kind: Option<BannerKindArg>,

    #[arg(long)]
    pub title: Option<String>,

    /// クリック時の遷移先
    #[arg(long)]
    pub link: Option<String>,
}

impl BannerFields {
    pub fn to_draft(&self) -> BannerDraft {
        let text = |v: &Option<String>| v.as_deref().and_then(optional_text);
        BannerDraft {
            title: text(&self.title),
            image: text(&self.image),
            link: text(&self.link),
            kind: self.kind.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum AgentCommand {
    /// 一覧（ページ番号指定）
    List {
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 1ページの件数（デフォルト: 設定ファイル）
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// ログイン状態
    Status,
}

#[derive(Subcommand)]
pub enum NotificationCommand {
    /// 一覧
    List {
        /// 未読のみ
        #[arg(short, long)]
        unread: bool,
    },

    /// 既読にする
    Read {
        #[arg(required = true)]
        id: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BannerKindArg {
    Home,
    Offplan,
}

impl From<BannerKindArg> for BannerKind {
    fn from(arg: BannerKindArg) -> Self {
        match arg {
            BannerKindArg::Home => BannerKind::Home,
            BannerKindArg::Offplan => BannerKind::Offplan,
        }
    }
}

impl std::fmt::Display for BannerKindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(BannerKind::from(*self).as_str())
    }
}
