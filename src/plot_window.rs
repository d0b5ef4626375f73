use flo_draw::{create_canvas_window_with_events, DrawEvent};
use futures::{executor, prelude::*};
use log::debug;

use crate::plot::{self, Figure};

/// Open a window showing `figure` and block until the user closes it.
///
/// The window is serviced by the event loop that `flo_draw::with_2d_graphics`
/// runs on the main thread, so this has to be called from inside its callback.
pub fn show(figure: &Figure) {
    let (canvas, events) = create_canvas_window_with_events(figure.title.as_str());
    canvas.draw(|gc| plot::draw_figure(gc, figure));
    debug!("plot window open, waiting for it to close");

    executor::block_on(async move {
        let mut events = Box::pin(events);

        while let Some(event) = events.next().await {
            if let DrawEvent::Closed = event {
                break;
            }
        }
    });

    debug!("plot window closed");
}
