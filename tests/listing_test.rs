//! 一覧・ページングの統合テスト
//!
//! CLIの組み立て処理を通して、区分絞り込みと2種類のページングを検証

use estate::cli::ListArgs;
use estate::commands::{agent_pager, prepare_listing};
use estate::error::EstateError;
use estate_common::{PropertyRecord, ALL_CATEGORIES};

fn list_args(category: &str, pages: usize, page_size: Option<usize>) -> ListArgs {
    ListArgs {
        category: category.to_string(),
        agent: None,
        search: None,
        min_price: None,
        max_price: None,
        min_bedrooms: None,
        page_size,
        pages,
    }
}

fn create_records(off_plan: usize, rent: usize) -> Vec<PropertyRecord> {
    let off_plan = (0..off_plan).map(|i| PropertyRecord {
        id: format!("op-{}", i),
        title: format!("Tower {}", i),
        category: Some("Off Plan".to_string()),
        developer: Some("Damac".to_string()),
        ..Default::default()
    });
    let rent = (0..rent).map(|i| PropertyRecord {
        id: format!("rent-{}", i),
        title: format!("Apartment {}", i),
        category: Some("Rent".to_string()),
        location: Some("Business Bay".to_string()),
        ..Default::default()
    });
    off_plan.chain(rent).collect()
}

/// 7件のOff Planと3件のRent、1ページ6件
#[test]
fn test_off_plan_first_page() {
    let state = prepare_listing(create_records(7, 3), &list_args("Off Plan", 1, None), 6);

    assert_eq!(state.filtered().len(), 7);
    assert_eq!(state.displayed().len(), 6);
    assert!(state.has_more());
}

/// 2ページ目まで表示すると残り1件も出る
#[test]
fn test_off_plan_second_page() {
    let state = prepare_listing(create_records(7, 3), &list_args("Off Plan", 2, None), 6);

    assert_eq!(state.displayed().len(), 7);
    assert!(!state.has_more());
}

/// ページ数を多く指定しても件数を超えない
#[test]
fn test_pages_capped_at_filtered_length() {
    let state = prepare_listing(create_records(2, 3), &list_args("Rent", 10, Some(2)), 6);

    assert_eq!(state.page_size(), 2);
    assert_eq!(state.displayed().len(), 3);
    assert!(!state.has_more());
}

/// "All" は全件を元の順序で返す
#[test]
fn test_all_keeps_original_order() {
    let records = create_records(2, 2);
    let state = prepare_listing(records.clone(), &list_args(ALL_CATEGORIES, 1, Some(10)), 6);

    assert_eq!(state.filtered(), records.as_slice());
}

/// 検索条件は区分と同時に効く
#[test]
fn test_search_with_category() {
    let mut args = list_args("Rent", 1, None);
    args.search = Some("apartment 2".to_string());

    let state = prepare_listing(create_records(3, 3), &args, 6);
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.displayed()[0].id, "rent-2");
}

/// 10件・1ページ4件 → 3ページ、4ページ目は範囲外
#[test]
fn test_agent_pager_scenario() {
    let pager = agent_pager(10, 4, 3).expect("3ページ目は有効");
    assert_eq!(pager.total_pages(), 3);
    assert_eq!(pager.current_page(), 3);

    let err = agent_pager(10, 4, 4).unwrap_err();
    assert!(matches!(
        err,
        EstateError::PageOutOfRange { page: 4, total_pages: 3 }
    ));
}

/// 0件でも1ページ目の指定はエラーにしない
#[test]
fn test_agent_pager_empty() {
    let pager = agent_pager(0, 4, 1).expect("空一覧の1ページ目");
    assert_eq!(pager.total_pages(), 0);
    assert_eq!(pager.current_page(), 1);
}
