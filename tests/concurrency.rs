//! The parsers share no state, so they can run on many threads at once.

use statusbar::statusbar::command::{Command, CommandRegistry};
use statusbar::statusbar::template::{parse_template, ResolvedSegment};
use statusbar::{parse_markup, StyledSegment};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn output_types_are_send_and_sync() {
    assert_send_sync::<StyledSegment>();
    assert_send_sync::<ResolvedSegment<Command>>();
    assert_send_sync::<CommandRegistry<Command>>();
}

#[test]
fn parses_from_many_threads() {
    let markup = "<fc=red><action=`top`>cpu</action></fc> <raw=3:<x>/>";
    let expected = parse_markup("white", markup);

    let registry: Arc<CommandRegistry<Command>> =
        Arc::new([Command::new("cpu")].into_iter().collect());
    let expected_template = parse_template('%', &*registry, "%cpu% %mem%");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let segments = parse_markup("white", markup);
                let template = parse_template('%', &*registry, "%cpu% %mem%");
                (segments, template)
            })
        })
        .collect();

    for handle in handles {
        let (segments, template) = handle.join().expect("parser thread panicked");
        assert_eq!(segments, expected);
        assert_eq!(template, expected_template);
    }
}
