use super::*;

fn artwork(id: i64, title: &str) -> Artwork {
    Artwork { id, title: title.to_owned(), ..Artwork::default() }
}

fn room(id: i64, name: &str) -> Room {
    Room { id, name_fr: Some(name.to_owned()), ..Room::default() }
}

fn ids<T: Listable>(items: &[T]) -> Vec<i64> {
    items.iter().map(Listable::id).collect()
}

fn gallery() -> Vec<Artwork> {
    vec![
        Artwork {
            category: Some("Masques".to_owned()),
            period: Some("XIXe siècle".to_owned()),
            origin: Some("Sénégal".to_owned()),
            room_id: Some(1),
            popularity: Some(10),
            description_fr: Some("Masques cérémoniels du pays Diola".to_owned()),
            created_at: Some("2024-03-01T10:00:00".to_owned()),
            ..artwork(1, "Kanaga")
        },
        Artwork {
            category: Some("Sculptures".to_owned()),
            period: Some("XXe siècle".to_owned()),
            origin: Some("Mali".to_owned()),
            room_id: Some(2),
            popularity: Some(90),
            created_at: Some("2024-05-01T10:00:00".to_owned()),
            ..artwork(2, "baobab sculpté")
        },
        Artwork {
            category: Some("Masques".to_owned()),
            period: Some("XXe siècle".to_owned()),
            origin: Some("Mali".to_owned()),
            room_id: Some(10),
            ..artwork(3, "Antilope Tyiwara")
        },
    ]
}

// =============================================================
// Criteria
// =============================================================

#[test]
fn setting_empty_value_removes_filter() {
    let mut criteria = Criteria::default();
    criteria.set(FilterKey::Category, "Masques");
    assert_eq!(criteria.get(FilterKey::Category), "Masques");
    assert!(criteria.is_active());

    criteria.set(FilterKey::Category, "");
    assert_eq!(criteria.get(FilterKey::Category), "");
    assert!(!criteria.is_active());
}

#[test]
fn clear_keeps_sort() {
    let mut criteria = Criteria::with_sort(SortKey::Popularity);
    criteria.search = "x".to_owned();
    criteria.set(FilterKey::Origin, "Mali");

    criteria.clear();

    assert!(!criteria.is_active());
    assert_eq!(criteria.sort, SortKey::Popularity);
}

#[test]
fn sort_key_parse_round_trips() {
    for key in [
        SortKey::Title,
        SortKey::Popularity,
        SortKey::ViewCount,
        SortKey::CreatedAt,
        SortKey::Id,
        SortKey::Theme,
    ] {
        assert_eq!(SortKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(SortKey::parse("random"), None);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_input_yields_empty_output() {
    let out = apply::<Artwork>(&[], &Criteria::default(), Language::Fr);
    assert!(out.is_empty());
}

#[test]
fn no_criteria_keeps_everything() {
    let out = apply(&gallery(), &Criteria::default(), Language::Fr);
    assert_eq!(out.len(), 3);
}

#[test]
fn search_matches_localized_description_case_insensitively() {
    let criteria = Criteria { search: "masque".to_owned(), ..Criteria::default() };
    let out = apply(&gallery(), &criteria, Language::Fr);
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn search_matches_title() {
    let criteria = Criteria { search: "BAOBAB".to_owned(), ..Criteria::default() };
    let out = apply(&gallery(), &criteria, Language::Fr);
    assert_eq!(ids(&out), vec![2]);
}

#[test]
fn filters_combine_with_and() {
    let mut criteria = Criteria::default();
    criteria.set(FilterKey::Category, "Masques");
    criteria.set(FilterKey::Origin, "Mali");
    let out = apply(&gallery(), &criteria, Language::Fr);
    assert_eq!(ids(&out), vec![3]);
}

#[test]
fn room_filter_compares_textual_id() {
    let mut criteria = Criteria::default();
    criteria.set(FilterKey::Room, "10");
    let out = apply(&gallery(), &criteria, Language::Fr);
    assert_eq!(ids(&out), vec![3]);
}

#[test]
fn absent_value_never_matches_active_filter() {
    let mut items = gallery();
    items.push(artwork(4, "Sans catégorie"));
    let mut criteria = Criteria::default();
    criteria.set(FilterKey::Category, "Masques");
    let out = apply(&items, &criteria, Language::Fr);
    assert!(!ids(&out).contains(&4));
}

#[test]
fn room_flags_filter_by_textual_bool() {
    let rooms = vec![
        Room { has_audio: true, ..room(1, "Salle des masques") },
        Room { has_audio: false, ..room(2, "Salle des textiles") },
    ];
    let mut criteria = Criteria::with_sort(SortKey::Id);
    criteria.set(FilterKey::HasAudio, "true");
    assert_eq!(ids(&apply(&rooms, &criteria, Language::Fr)), vec![1]);
    criteria.set(FilterKey::HasAudio, "false");
    assert_eq!(ids(&apply(&rooms, &criteria, Language::Fr)), vec![2]);
}

#[test]
fn filtering_is_sound_and_complete_over_all_combinations() {
    let items = gallery();
    let categories = ["", "Masques", "Sculptures"];
    let periods = ["", "XIXe siècle", "XXe siècle"];
    let origins = ["", "Sénégal", "Mali"];
    let searches = ["", "a", "masque"];

    for category in categories {
        for period in periods {
            for origin in origins {
                for search in searches {
                    let mut criteria = Criteria { search: search.to_owned(), ..Criteria::default() };
                    criteria.set(FilterKey::Category, category);
                    criteria.set(FilterKey::Period, period);
                    criteria.set(FilterKey::Origin, origin);

                    let out = apply(&items, &criteria, Language::Fr);

                    let expected: Vec<i64> = items
                        .iter()
                        .filter(|a| {
                            let text = search.is_empty()
                                || a.title.to_lowercase().contains(search)
                                || a.description_in(Language::Fr).to_lowercase().contains(search);
                            let field = |wanted: &str, actual: &Option<String>| {
                                wanted.is_empty() || actual.as_deref() == Some(wanted)
                            };
                            text && field(category, &a.category)
                                && field(period, &a.period)
                                && field(origin, &a.origin)
                        })
                        .map(|a| a.id)
                        .collect();
                    let mut got = ids(&out);
                    got.sort_unstable();
                    assert_eq!(got, expected, "criteria {criteria:?}");
                }
            }
        }
    }
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn popularity_sorts_descending_with_absent_as_zero() {
    let out = apply(&gallery(), &Criteria::with_sort(SortKey::Popularity), Language::Fr);
    let pops: Vec<Option<i64>> = out.iter().map(|a| a.popularity).collect();
    assert_eq!(pops, vec![Some(90), Some(10), None]);
}

#[test]
fn title_sort_ignores_case() {
    let out = apply(&gallery(), &Criteria::default(), Language::Fr);
    assert_eq!(ids(&out), vec![3, 2, 1]);
}

#[test]
fn created_at_sorts_newest_first_absent_last() {
    let out = apply(&gallery(), &Criteria::with_sort(SortKey::CreatedAt), Language::Fr);
    assert_eq!(ids(&out), vec![2, 1, 3]);
}

#[test]
fn view_count_ties_keep_input_order() {
    let items = vec![
        Artwork { view_count: Some(5), ..artwork(7, "a") },
        Artwork { view_count: None, ..artwork(8, "b") },
        Artwork { view_count: Some(5), ..artwork(9, "c") },
        Artwork { view_count: Some(0), ..artwork(10, "d") },
    ];
    let out = apply(&items, &Criteria::with_sort(SortKey::ViewCount), Language::Fr);
    assert_eq!(ids(&out), vec![7, 9, 8, 10]);
}

#[test]
fn rooms_sort_by_id_and_theme() {
    let rooms = vec![
        Room { theme: None, ..room(3, "C") },
        Room { theme: Some("Textiles".to_owned()), ..room(1, "A") },
        Room { theme: Some("art sacré".to_owned()), ..room(2, "B") },
    ];
    assert_eq!(ids(&apply(&rooms, &Criteria::with_sort(SortKey::Id), Language::Fr)), vec![1, 2, 3]);
    assert_eq!(ids(&apply(&rooms, &Criteria::with_sort(SortKey::Theme), Language::Fr)), vec![2, 1, 3]);
}

#[test]
fn room_title_follows_language() {
    let rooms = vec![
        Room { name_en: Some("Zebra hall".to_owned()), ..room(1, "Alpha") },
        Room { name_en: Some("Antelope hall".to_owned()), ..room(2, "Zèbre") },
    ];
    let criteria = Criteria::default();
    assert_eq!(ids(&apply(&rooms, &criteria, Language::Fr)), vec![1, 2]);
    assert_eq!(ids(&apply(&rooms, &criteria, Language::En)), vec![2, 1]);
}

// =============================================================
// distinct_values
// =============================================================

#[test]
fn distinct_values_are_unique_and_sorted() {
    assert_eq!(distinct_values(&gallery(), FilterKey::Origin), vec!["Mali", "Sénégal"]);
}

#[test]
fn distinct_room_ids_sort_numerically() {
    assert_eq!(distinct_values(&gallery(), FilterKey::Room), vec!["1", "2", "10"]);
}

#[test]
fn distinct_values_skip_absent() {
    let items = vec![artwork(1, "a"), Artwork { period: Some("XXe siècle".to_owned()), ..artwork(2, "b") }];
    assert_eq!(distinct_values(&items, FilterKey::Period), vec!["XXe siècle"]);
}
