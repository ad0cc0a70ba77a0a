use crate::*;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::any::Any;

#[derive(Debug, Default, PartialEq)]
struct TextRow {
    text: String,
}

impl ReusableView for TextRow {
    type Payload = String;

    fn configure(&mut self, payload: &String) {
        self.text = payload.clone();
    }
}

#[derive(Debug, Default, PartialEq)]
struct ImageRow {
    name: String,
    width: u32,
}

impl ReusableView for ImageRow {
    type Payload = (String, u32);

    fn configure(&mut self, (name, width): &(String, u32)) {
        self.name = name.clone();
        self.width = *width;
    }
}

#[derive(Debug, Default)]
struct BadgeCell {
    count: u32,
}

impl ReusableView for BadgeCell {
    type Payload = u32;

    fn reuse_identifier() -> &'static str {
        "badge"
    }

    fn configure(&mut self, payload: &u32) {
        self.count = *payload;
    }
}

#[allow(dead_code)]
struct Wrapper<T>(T);

/// A host stand-in that hands out fresh views by identifier and a bare `()` otherwise.
fn recycler() -> impl FnMut(&str, IndexPath) -> Box<dyn Any> {
    |reuse_identifier: &str, _at: IndexPath| -> Box<dyn Any> {
        match reuse_identifier {
            "TextRow" => Box::new(TextRow::default()),
            "ImageRow" => Box::new(ImageRow::default()),
            "badge" => Box::new(BadgeCell::default()),
            _ => Box::new(()),
        }
    }
}

fn text(s: &str) -> Arc<dyn Row> {
    TypedRow::<TextRow>::erased(s.to_string())
}

fn image(name: &str, width: u32) -> Arc<dyn Row> {
    TypedRow::<ImageRow>::erased((name.to_string(), width))
}

fn identifiers(section: &Section) -> Vec<&str> {
    section.rows.iter().map(|r| r.reuse_identifier()).collect()
}

#[test]
fn reuse_identifier_defaults_to_short_type_name() {
    assert_eq!(TextRow::reuse_identifier(), "TextRow");
    assert_eq!(ImageRow::reuse_identifier(), "ImageRow");
    assert_eq!(text("a").reuse_identifier(), "TextRow");
    assert_eq!(short_type_name::<Wrapper<u8>>(), "Wrapper");
    assert_eq!(short_type_name::<u64>(), "u64");
}

#[test]
fn reuse_identifier_can_be_overridden() {
    let row = TypedRow::<BadgeCell>::new(3);
    assert_eq!(row.reuse_identifier(), "badge");
    assert_eq!(*row.payload(), 3);
}

#[test]
fn typed_row_configures_matching_view() {
    let row = text("hello");
    let mut view = TextRow::default();
    row.configure(&mut view);
    assert_eq!(view.text, "hello");
}

#[test]
fn typed_row_leaves_mismatched_view_untouched() {
    let row = text("hello");
    let mut view = ImageRow {
        name: "previous".to_string(),
        width: 7,
    };
    row.configure(&mut view);
    assert_eq!(
        view,
        ImageRow {
            name: "previous".to_string(),
            width: 7,
        }
    );
}

#[test]
fn fn_row_narrows_its_own_view() {
    let row = FnRow::for_view::<TextRow>("Custom", |view| view.text.push('!'));
    assert_eq!(row.reuse_identifier(), "Custom");

    let mut view = TextRow {
        text: "hi".to_string(),
    };
    row.configure(&mut view);
    assert_eq!(view.text, "hi!");

    let mut other = BadgeCell { count: 9 };
    row.configure(&mut other);
    assert_eq!(other.count, 9);
}

#[test]
fn section_keeps_row_order_and_independent_chrome() {
    let section = Section::new([text("a"), image("b", 1)])
        .with_typed_row::<BadgeCell>(2)
        .with_header_title("Header")
        .with_header_height(Some(32.0))
        .with_footer_view(Arc::new(42u8));

    assert_eq!(identifiers(&section), vec!["TextRow", "ImageRow", "badge"]);
    assert_eq!(section.header.title.as_deref(), Some("Header"));
    assert_eq!(section.header.height, Some(32.0));
    assert!(section.header.view.is_none());
    assert!(section.footer.title.is_none());
    assert!(section.footer.view.is_some());
    assert!(Section::empty().header.is_empty());
}

#[test]
fn counts_follow_appended_sections() {
    let mut list = SectionList::from_sections([Section::new([text("R1"), image("R2", 10)])]);
    assert_eq!(list.number_of_sections(), 1);
    assert_eq!(list.number_of_rows(0), 2);

    list.append_section(Section::empty());
    assert_eq!(list.number_of_sections(), 2);
    assert_eq!(list.number_of_rows(1), 0);
}

#[test]
fn footer_height_falls_back_to_automatic() {
    let list = SectionList::from_sections([Section::empty()
        .with_footer_height(None)
        .with_footer_title("Done")]);
    assert_eq!(list.footer_height(0), Dimension::Automatic);
    assert_eq!(list.footer_title(0).as_deref(), Some("Done"));
}

#[test]
fn explicit_heights_are_reported() {
    let list = SectionList::from_sections([Section::empty()
        .with_header_height(Some(44.0))
        .with_footer_height(Some(12.5))]);
    assert_eq!(list.header_height(0), Dimension::Points(44.0));
    assert_eq!(list.footer_height(0).points(), Some(12.5));
}

#[test]
fn out_of_range_supplementary_queries_are_absent() {
    let list = SectionList::from_sections([Section::empty()
        .with_header_title("H")
        .with_header_view(Arc::new(1u8))
        .with_header_height(Some(10.0))]);

    for index in [-1isize, -100, 1, 2, isize::MAX] {
        assert!(list.header_title(index).is_none());
        assert!(list.header_view(index).is_none());
        assert!(list.footer_title(index).is_none());
        assert!(list.footer_view(index).is_none());
        assert!(list.header_height(index).is_automatic());
        assert!(list.footer_height(index).is_automatic());
    }
    assert_eq!(list.header_title(0).as_deref(), Some("H"));
}

#[test]
fn remove_all_empties_every_query() {
    let mut list = SectionList::from_sections([
        Section::new([text("a")]).with_header_title("A"),
        Section::new([image("b", 2)]).with_footer_title("B"),
    ]);
    list.remove_all(false);

    assert_eq!(list.number_of_sections(), 0);
    assert_eq!(list.rows_in(0), None);
    assert!(list.header_title(0).is_none());
    assert!(list.footer_title(1).is_none());
    assert!(list.header_height(0).is_automatic());
}

#[test]
fn remove_all_keep_capacity_is_only_a_hint() {
    let mut kept = SectionList::new();
    kept.append_sections((0..8).map(|_| Section::empty()));
    let before = kept.capacity();
    kept.remove_all(true);
    assert!(kept.is_empty());
    assert_eq!(kept.capacity(), before);

    let mut dropped = SectionList::from_sections((0..8).map(|_| Section::empty()));
    dropped.remove_all(false);
    assert!(dropped.is_empty());
    assert_eq!(dropped.capacity(), 0);
}

#[test]
fn inserts_shift_later_sections() {
    let mut list = SectionList::from_sections([
        Section::empty().with_header_title("a"),
        Section::empty().with_header_title("d"),
    ]);
    assert!(list.insert_sections(
        [
            Section::empty().with_header_title("b"),
            Section::empty().with_header_title("c"),
        ],
        1,
    ));
    assert!(list.insert_section(Section::empty().with_header_title("e"), 4));
    assert!(list.insert_section(Section::empty().with_header_title("start"), 0));

    let titles: Vec<_> = (0..list.len() as isize)
        .filter_map(|i| list.header_title(i))
        .collect();
    assert_eq!(titles, vec!["start", "a", "b", "c", "d", "e"]);
}

#[test]
fn insert_past_end_is_rejected() {
    let mut list = SectionList::from_sections([Section::empty()]);
    assert!(!list.insert_section(Section::empty(), 2));
    assert!(!list.insert_sections([Section::empty(), Section::empty()], 5));
    assert_eq!(list.len(), 1);
}

#[test]
fn cell_for_row_configures_dequeued_view() {
    let list = SectionList::from_sections([Section::new([text("R1"), image("R2", 64)])]);
    let mut host = recycler();

    let cell = list.cell_for_row(&mut host, IndexPath::new(0, 0));
    let cell = cell.downcast::<TextRow>().ok().map(|b| *b);
    assert_eq!(
        cell,
        Some(TextRow {
            text: "R1".to_string(),
        })
    );

    let cell = list.cell_for_row(&mut host, (0, 1).into());
    let cell = cell.downcast_ref::<ImageRow>();
    assert_eq!(cell.map(|c| c.width), Some(64));
}

#[test]
fn cell_for_unregistered_identifier_is_returned_unconfigured() {
    let list = SectionList::from_sections([Section::new([Arc::new(FnRow::new(
        "Unregistered",
        |_| {},
    )) as Arc<dyn Row>])]);
    let mut host = recycler();

    let cell = list.cell_for_row(&mut host, IndexPath::new(0, 0));
    assert!(cell.is::<()>());
}

#[test]
fn recycled_view_of_stale_kind_is_not_touched() {
    let row = text("fresh");
    let mut stale = |_: &str, _: IndexPath| -> Box<dyn Any> {
        Box::new(ImageRow {
            name: "stale".to_string(),
            width: 3,
        })
    };
    let cell = dequeue_configured(row.as_ref(), &mut stale, IndexPath::default());
    let cell = cell.downcast_ref::<ImageRow>();
    assert_eq!(cell.map(|c| c.name.as_str()), Some("stale"));
}

#[test]
#[should_panic(expected = "out of range")]
fn row_count_for_missing_section_panics() {
    let list = SectionList::from_sections([Section::empty()]);
    list.row_count(1);
}

#[test]
#[should_panic(expected = "no row at section 0 row 3")]
fn cell_for_missing_row_panics() {
    let list = SectionList::from_sections([Section::new([text("a")])]);
    let mut host = recycler();
    list.cell_for_row(&mut host, IndexPath::new(0, 3));
}

#[test]
fn safe_index_rejects_negative_and_overflowing_indexes() {
    let values = [10, 20, 30];
    assert_eq!(values.get_signed(0), Some(&10));
    assert_eq!(values.get_signed(2), Some(&30));
    assert_eq!(values.get_signed(3), None);
    assert_eq!(values.get_signed(-1), None);
    assert_eq!(values[..0].get_signed(0), None);
}
