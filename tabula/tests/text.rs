use tabula::text::{Alignment, align_offset, display_width, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii_and_cjk() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("日本語"), 6);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_does_not_split_wide_chars() {
    // Only one 2-cell char fits before the ellipsis.
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, Alignment::Left), 0);
    assert_eq!(align_offset(4, 10, Alignment::Center), 3);
    assert_eq!(align_offset(4, 10, Alignment::Right), 6);
    assert_eq!(align_offset(12, 10, Alignment::Right), 0);
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 5, Alignment::Left), "ab   ");
    assert_eq!(pad_to_width("ab", 5, Alignment::Right), "   ab");
    assert_eq!(pad_to_width("ab", 5, Alignment::Center), " ab  ");
    assert_eq!(pad_to_width("abcdef", 4, Alignment::Left), "abc…");
    assert_eq!(pad_to_width("日本", 5, Alignment::Left), "日本 ");
}
