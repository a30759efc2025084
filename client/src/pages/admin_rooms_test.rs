use super::*;

fn room(id: i64, name: &str) -> Room {
    Room { id, name_fr: Some(name.to_owned()), ..Room::default() }
}

#[test]
fn table_criteria_sorts_by_id_without_filters() {
    let criteria = table_criteria(String::new());
    assert_eq!(criteria.sort, SortKey::Id);
    assert!(!criteria.is_active());
}

#[test]
fn table_search_narrows_rows_case_insensitively() {
    let rooms = vec![room(3, "Masques du Mali"), room(1, "Textiles"), room(2, "Masques Dan")];

    let shown = listing::apply(&rooms, &table_criteria("MASQUES".to_owned()), Language::Fr);

    let ids: Vec<i64> = shown.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}
