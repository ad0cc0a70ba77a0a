// Example: heterogeneous typed rows answered through the host query contract.
use std::any::Any;

use sectionkit::{IndexPath, ReusableView, Section, SectionList, TableDataSource};

#[derive(Debug, Default)]
struct TextCell {
    text: String,
}

impl ReusableView for TextCell {
    type Payload = String;

    fn configure(&mut self, payload: &String) {
        self.text = payload.clone();
    }
}

#[derive(Debug, Default)]
struct ToggleCell {
    label: String,
    on: bool,
}

impl ReusableView for ToggleCell {
    type Payload = (&'static str, bool);

    fn reuse_identifier() -> &'static str {
        "toggle"
    }

    fn configure(&mut self, (label, on): &(&'static str, bool)) {
        self.label = label.to_string();
        self.on = *on;
    }
}

fn main() {
    let list = SectionList::from_sections([
        Section::empty()
            .with_header_title("Account")
            .with_typed_row::<TextCell>("alice@example.com".to_string())
            .with_typed_row::<ToggleCell>(("Sync", true)),
        Section::empty()
            .with_footer_title("Done")
            .with_typed_row::<TextCell>("Sign out".to_string()),
    ]);

    // A host keeps one template per reuse identifier.
    let mut recycler = |reuse_identifier: &str, _at: IndexPath| -> Box<dyn Any> {
        match reuse_identifier {
            "TextCell" => Box::new(TextCell::default()),
            "toggle" => Box::new(ToggleCell::default()),
            _ => Box::new(()),
        }
    };

    for section in 0..list.number_of_sections() {
        println!(
            "section {section}: header={:?} footer={:?} footer_height={:?}",
            list.header_title(section as isize),
            list.footer_title(section as isize),
            list.footer_height(section as isize),
        );
        for row in 0..list.number_of_rows(section) {
            let cell = list.cell_for_row(&mut recycler, IndexPath::new(section, row));
            if let Some(cell) = cell.downcast_ref::<TextCell>() {
                println!("  {cell:?}");
            } else if let Some(cell) = cell.downcast_ref::<ToggleCell>() {
                println!("  {cell:?}");
            }
        }
    }
}
