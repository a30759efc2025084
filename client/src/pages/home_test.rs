use super::*;

#[test]
fn showcase_counts_artworks_per_room_and_ranks_by_popularity() {
    let rooms = vec![
        Room { id: 2, name_fr: Some("B".to_owned()), ..Room::default() },
        Room { id: 1, name_fr: Some("A".to_owned()), ..Room::default() },
    ];
    let artworks = vec![
        Artwork { id: 1, title: "x".to_owned(), room_id: Some(1), popularity: Some(3), ..Artwork::default() },
        Artwork { id: 2, title: "y".to_owned(), room_id: Some(1), popularity: Some(9), ..Artwork::default() },
        Artwork { id: 3, title: "z".to_owned(), room_id: Some(2), ..Artwork::default() },
    ];

    let out = showcase(&rooms, &artworks, Language::Fr);

    let counts: Vec<(i64, usize)> = out.rooms.iter().map(|(room, count)| (room.id, *count)).collect();
    assert_eq!(counts, vec![(1, 2), (2, 1)]);
    let ids: Vec<i64> = out.artworks.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}
