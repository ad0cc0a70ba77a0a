// Example: writers on several threads, a host querying from its own thread.
use std::sync::Arc;
use std::thread;

use sectionkit_adapter::{DataSource, DataSourceOptions, Section};

fn main() {
    let source = Arc::new(DataSource::with_options(
        [Section::empty().with_header_title("Pinned")],
        DataSourceOptions::new().with_lane_name("example-lane"),
    ));

    let writers: Vec<_> = (0..3)
        .map(|w| {
            let source = Arc::clone(&source);
            thread::spawn(move || {
                for i in 0..5 {
                    source.append_section(Section::empty().with_header_title(format!("w{w}-{i}")));
                }
            })
        })
        .collect();

    // Without a barrier this may print any count between 1 and 16.
    println!("racing read: section_count={}", source.section_count());

    for writer in writers {
        let _ = writer.join();
    }
    source.sync();
    println!("after sync: section_count={}", source.section_count());

    source.insert_section(Section::empty().with_header_title("Top"), 0);
    println!(
        "first header={:?} pending={}",
        source.header_title(0),
        source.pending_tasks()
    );

    source.remove_all(false);
    println!("after remove_all: section_count={}", source.section_count());
}
