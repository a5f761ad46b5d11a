use super::*;

#[test]
fn test_day_blob_offsets() {
    let blob = NameBlob::from_names([
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ]);
    assert_eq!(
        blob.text,
        "MondayTuesdayWednesdayThursdayFridaySaturdaySunday"
    );
    assert_eq!(blob.index, vec![0, 6, 13, 22, 30, 36, 44, 50]);
    assert_eq!(blob.width, IndexWidth::U8);
    assert_eq!(blob.len(), 7);
    assert_eq!(blob.name(2), "Wednesday");
    assert_eq!(blob.span(6), (44, 50));
}

#[test]
fn test_empty_blob() {
    let blob = NameBlob::from_names(std::iter::empty());
    assert!(blob.is_empty());
    assert_eq!(blob.index, vec![0]);
    assert_eq!(blob.names().count(), 0);
}

#[test]
fn test_empty_names_are_preserved() {
    let blob = NameBlob::from_names(["", "A", ""]);
    assert_eq!(blob.index, vec![0, 0, 1, 1]);
    assert_eq!(blob.names().collect::<Vec<_>>(), vec!["", "A", ""]);
}

#[test]
fn test_index_width_grows_with_blob() {
    assert_eq!(IndexWidth::for_max_offset(255), IndexWidth::U8);
    assert_eq!(IndexWidth::for_max_offset(256), IndexWidth::U16);
    assert_eq!(IndexWidth::for_max_offset(70_000), IndexWidth::U32);

    let long = "x".repeat(200);
    let blob = NameBlob::from_names([long.as_str(), long.as_str()]);
    assert_eq!(blob.width, IndexWidth::U16);
    assert_eq!(blob.width.bytes(), 2);
    assert_eq!(blob.width.rust_name(), "u16");
}
