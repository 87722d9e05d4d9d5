//! 登録・更新コマンドの入力変換テスト

use clap::Parser;
use estate::cli::{BannerCommand, Cli, Commands, PropertyCommand};
use estate_common::{BannerKind, Price};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("引数の解析に失敗")
}

/// 物件登録：数値の価格・タグ分割・空文字の除外
#[test]
fn test_properties_add_builds_draft() {
    let cli = parse(&[
        "estate", "properties", "add",
        "--title", "Creek Rise",
        "--category", "Off Plan",
        "--price", "1,250,000",
        "--tags", "Sea View, Pool",
        "--developer", "  ",
    ]);
    let Commands::Properties { action: PropertyCommand::Add(fields) } = cli.command else {
        panic!("properties add として解釈されていない");
    };

    let draft = fields.to_draft();
    assert_eq!(draft.title.as_deref(), Some("Creek Rise"));
    assert_eq!(draft.category.as_deref(), Some("Off Plan"));
    assert_eq!(draft.price, Some(Price::Amount(1_250_000.0)));
    assert_eq!(draft.tags, Some(vec!["Sea View".to_string(), "Pool".to_string()]));
    assert!(draft.developer.is_none());
    assert!(draft.validate_new().is_ok());
}

/// 物件更新：指定したフィールドだけ
#[test]
fn test_properties_update_sends_only_given_fields() {
    let cli = parse(&["estate", "properties", "update", "p 1", "--bedrooms", "3"]);
    let Commands::Properties { action: PropertyCommand::Update { id, fields } } = cli.command else {
        panic!("properties update として解釈されていない");
    };

    assert_eq!(id, "p 1");
    let json = serde_json::to_value(fields.to_draft()).expect("シリアライズ失敗");
    assert_eq!(json, serde_json::json!({ "bedrooms": 3 }));
}

#[test]
fn test_properties_update_without_fields_is_invalid() {
    let cli = parse(&["estate", "properties", "update", "p1"]);
    let Commands::Properties { action: PropertyCommand::Update { fields, .. } } = cli.command else {
        panic!("properties update として解釈されていない");
    };
    assert!(fields.to_draft().validate_update().is_err());
}

#[test]
fn test_banners_create_and_delete() {
    let cli = parse(&[
        "estate", "banners", "create",
        "--image", "https://cdn.example.com/b.jpg",
        "--kind", "offplan",
    ]);
    let Commands::Banners { action: BannerCommand::Create(fields) } = cli.command else {
        panic!("banners create として解釈されていない");
    };
    let draft = fields.to_draft();
    assert_eq!(draft.kind, Some(BannerKind::Offplan));
    assert!(draft.validate_new().is_ok());

    let cli = parse(&["estate", "banners", "delete", "b1", "--yes"]);
    let Commands::Banners { action: BannerCommand::Delete { id, yes } } = cli.command else {
        panic!("banners delete として解釈されていない");
    };
    assert_eq!(id, "b1");
    assert!(yes);
}

#[test]
fn test_banners_list_kind_filter() {
    let cli = parse(&["estate", "banners", "list", "--kind", "home"]);
    let Commands::Banners { action: BannerCommand::List { kind } } = cli.command else {
        panic!("banners list として解釈されていない");
    };
    assert_eq!(kind.map(BannerKind::from), Some(BannerKind::Home));
}
