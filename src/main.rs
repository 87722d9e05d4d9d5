use clap::Parser;
use dialoguer::Confirm;
use estate::{cli, client, commands, config, error, render};
use cli::{AgentCommand, BannerCommand, Cli, Commands, NotificationCommand, PropertyCommand};
use client::ApiClient;
use config::Config;
use error::{EstateError, Result};
use estate_common::notification::unread_count;
use std::future::Future;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "estate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Ctrl-Cで実行中のリクエストを打ち切る
async fn cancellable<T>(fut: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::select! {
        result = fut => result,
        _ = tokio::signal::ctrl_c() => Err(EstateError::Cancelled),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "コマンド失敗");
        eprintln!("✖ {}", err);
        std::process::exit(1);
    }
}

/// 削除前の確認（`--yes` なら省略）
fn confirm_delete(what: &str, id: &str, yes: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    let confirmed = Confirm::new()
        .with_prompt(format!("{} {} を削除しますか？", what, id))
        .default(false)
        .interact()
        .map_err(|e| EstateError::Io(std::io::Error::other(e.to_string())))?;
    if confirmed {
        Ok(())
    } else {
        Err(EstateError::Cancelled)
    }
}

fn connect(config: &Config, base_url: Option<&str>) -> Result<ApiClient> {
    let api = config.api_config(base_url)?;
    let client = ApiClient::new(
        api,
        Duration::from_secs(config.timeout_seconds),
        config.session_cookie.clone(),
    )?;
    tracing::debug!(base_url = client.base_url(), "API接続先");
    Ok(client)
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を保存しました");
            }

            if show {
                println!("設定:");
                println!("  接続先: {}", config.api_base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  一覧の1ページ件数: {}", config.listing_page_size);
                println!("  エージェント1ページ件数: {}", config.agents_per_page);
                println!(
                    "  セッションCookie: {}",
                    if config.session_cookie.is_some() { "設定済み" } else { "未設定" }
                );
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }

        Commands::Properties { action } => match action {
            PropertyCommand::List(args) => {
                let client = connect(&config, base_url)?;
                let records = cancellable(client.properties(args.agent.as_deref())).await?;
                let state = commands::prepare_listing(records, &args, config.listing_page_size);
                println!("{}", render::listing(&state));
            }

            PropertyCommand::Show { id } => {
                let client = connect(&config, base_url)?;
                let record = cancellable(client.property(&id)).await?;
                println!("{}", render::property_detail(&record));
            }

            PropertyCommand::Add(fields) => {
                let draft = fields.to_draft();
                let client = connect(&config, base_url)?;
                match cancellable(client.add_property(&draft)).await? {
                    Some(record) => {
                        println!("✔ 物件を登録しました: {}", record.id);
                        println!("{}", render::property_detail(&record));
                    }
                    None => println!("✔ 物件を登録しました"),
                }
            }

            PropertyCommand::Update { id, fields } => {
                let draft = fields.to_draft();
                let client = connect(&config, base_url)?;
                match cancellable(client.update_property(&id, &draft)).await? {
                    Some(record) => {
                        println!("✔ 物件を更新しました: {}", id);
                        println!("{}", render::property_detail(&record));
                    }
                    None => println!("✔ 物件を更新しました: {}", id),
                }
            }

            PropertyCommand::Delete { id, yes } => {
                confirm_delete("物件", &id, yes)?;
                let client = connect(&config, base_url)?;
                cancellable(client.delete_property(&id)).await?;
                println!("✔ 物件を削除しました: {}", id);
            }
        },

        Commands::Agents { action } => match action {
            AgentCommand::List { page, per_page } => {
                let client = connect(&config, base_url)?;
                let agents = cancellable(client.agents()).await?;
                let pager = commands::agent_pager(
                    agents.len(),
                    per_page.unwrap_or(config.agents_per_page),
                    page,
                )?;
                println!("{}", render::agents_page(&agents, &pager));
            }

            AgentCommand::Status => {
                let client = connect(&config, base_url)?;
                let status = cancellable(client.auth_status()).await?;
                match status.agent.filter(|_| status.authenticated) {
                    Some(agent) => println!("✔ ログイン中: {} <{}>", agent.name, agent.email),
                    None => println!("未ログイン"),
                }
            }
        },

        Commands::Banners { action } => match action {
            BannerCommand::List { kind } => {
                let client = connect(&config, base_url)?;
                let banners = cancellable(client.banners(kind.map(Into::into))).await?;
                if banners.is_empty() {
                    println!("バナーはありません");
                }
                for banner in &banners {
                    println!("{}", render::banner(banner));
                }
            }

            BannerCommand::Create(fields) => {
                let draft = fields.to_draft();
                let client = connect(&config, base_url)?;
                match cancellable(client.create_banner(&draft)).await? {
                    Some(banner) => println!("✔ バナーを登録しました\n{}", render::banner(&banner)),
                    None => println!("✔ バナーを登録しました"),
                }
            }

            BannerCommand::Update { id, fields } => {
                let draft = fields.to_draft();
                let client = connect(&config, base_url)?;
                cancellable(client.update_banner(&id, &draft)).await?;
                println!("✔ バナーを更新しました: {}", id);
            }

            BannerCommand::Delete { id, yes } => {
                confirm_delete("バナー", &id, yes)?;
                let client = connect(&config, base_url)?;
                cancellable(client.delete_banner(&id)).await?;
                println!("✔ バナーを削除しました: {}", id);
            }
        },

        Commands::Notifications { action } => match action {
            NotificationCommand::List { unread } => {
                let client = connect(&config, base_url)?;
                let notifications = cancellable(client.notifications()).await?;
                println!("未読: {} / {} 件", unread_count(&notifications), notifications.len());
                for n in notifications.iter().filter(|n| !unread || !n.read) {
                    println!("{}", render::notification(n));
                }
            }

            NotificationCommand::Read { id } => {
                let client = connect(&config, base_url)?;
                cancellable(client.mark_notification_read(&id)).await?;
                println!("✔ 既読にしました: {}", id);
            }
        },
    }

    Ok(())
}
