//! Lays out the classic "datetime + update + quit" form against an in-memory
//! widget recorder and prints the resulting geometry as JSON lines.

use std::io::{self, Write};
use std::num::NonZeroU16;

use widget_cursor::logging::{LogEvent, LogSink};
use widget_cursor::{
    Container, Cursor, Logger, LoggingResult, Position, Rect, Size, Spacing, lookup_event,
};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Window,
    Output,
    Button,
}

#[derive(Debug)]
struct Recorded {
    id: usize,
    kind: Kind,
    rect: Rect,
    label: String,
}

#[derive(Default)]
struct Recorder {
    widgets: Vec<Recorded>,
}

impl Recorder {
    fn factory(&mut self, kind: Kind) -> impl FnOnce(Rect, &str) -> usize + '_ {
        move |rect: Rect, label: &str| {
            let id = self.widgets.len();
            self.widgets.push(Recorded {
                id,
                kind,
                rect,
                label: label.to_string(),
            });
            id
        }
    }
}

struct StderrSink;

impl LogSink for StderrSink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        let line = serde_json::to_string(event)?;
        writeln!(io::stderr(), "{line}")?;
        Ok(())
    }
}

fn main() -> widget_cursor::Result<()> {
    let spacing = Spacing::from_json_str(r#"{ "pad": 5, "margin": 10 }"#)?;
    let logger = Logger::new(StderrSink);
    let mut toolkit = Recorder::default();

    let win_origin = Cursor::new(100, 50);
    let win_size = Size::new(300, 140);
    let button = Size::new(80, 20);

    let (window, _, _) = win_origin.place(toolkit.factory(Kind::Window), win_size, "form");

    let window_area = win_size.container(spacing);
    let field_origin = window_area.top_left().label_gutter("Datetime:", 8);
    let (_, _, down) =
        field_origin.place_with(&logger, toolkit.factory(Kind::Output), (180, 20), "Datetime:");
    let (_, _, _) = down.place_with(&logger, toolkit.factory(Kind::Button), button, "Update");

    let one = NonZeroU16::MIN;
    let quit_origin = Container::from(win_size)
        .with_spacing(spacing)
        .bottom_centre(button, one);
    let (_, _, _) = quit_origin.place_with(&logger, toolkit.factory(Kind::Button), button, "Quit");

    let mut out = io::stdout().lock();
    writeln!(out, "window #{window} holds {} widgets", toolkit.widgets.len() - 1)
        .map_err(widget_cursor::LoggingError::from)?;
    for widget in &toolkit.widgets {
        let Position { x, y } = widget.rect.origin();
        writeln!(
            out,
            "#{} {:?} {:?} at ({x}, {y}) {}x{}",
            widget.id, widget.kind, widget.label, widget.rect.width, widget.rect.height
        )
        .map_err(widget_cursor::LoggingError::from)?;
    }
    writeln!(out, "first click arrives as {}", lookup_event(1))
        .map_err(widget_cursor::LoggingError::from)?;
    Ok(())
}
