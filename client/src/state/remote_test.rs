use super::*;

#[test]
fn default_is_loading() {
    let remote = Remote::<u8>::default();
    assert!(remote.is_loading());
    assert_eq!(remote.ready(), None);
    assert_eq!(remote.error(), None);
}

#[test]
fn ok_result_is_ready() {
    let remote = Remote::from_result(Ok(3), |_| unreachable!());
    assert_eq!(remote.ready(), Some(&3));
}

#[test]
fn err_result_uses_description() {
    let remote = Remote::<u8>::from_result(Err(ApiError::Network("offline".to_owned())), |e| format!("oops: {e}"));
    assert_eq!(remote.error(), Some("oops: offline"));
    assert!(!remote.is_loading());
}

#[test]
fn map_keeps_failure() {
    let failed: Remote<u8> = Remote::Failed("x".to_owned());
    assert_eq!(failed.map(|v| v * 2), Remote::Failed("x".to_owned()));
    assert_eq!(Remote::Ready(2).map(|v| v * 2), Remote::Ready(4));
}
