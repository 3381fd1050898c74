//! Scripted cursor demo
//!
//! Drives a cursor controller through the event system without a window:
//! a jittery pointer sweep across the board, an allow-list restriction, a
//! cinematic pause and a final selection. Every notification and highlight
//! command is logged.
//!
//! Usage: `cursor_demo [config.toml|config.ron]`

use std::cell::RefCell;
use std::rc::Rc;

use board_cursor::foundation::logging;
use board_cursor::prelude::*;
use rand::prelude::*;
use thiserror::Error;

const FRAME_TIME: f64 = 1.0 / 30.0;
const SWEEP_FRAMES: u32 = 90;
const JITTER_PX: f32 = 3.0;
const CINEMATIC_START: f64 = 1.0;
const CINEMATIC_END: f64 = 2.0;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Cursor setup failed: {0}")]
    Cursor(#[from] CursorError),

    #[error("Could not load config: {0}")]
    Config(#[from] board_cursor::config::ConfigError),
}

fn load_config() -> Result<CursorConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(CursorConfig::load_from_file(&path)?),
        None => Ok(CursorConfig::default()),
    }
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("cursor_demo: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);
    log::info!("Starting cursor demo on a {}x{} board", config.board.columns, config.board.rows);

    let notifications = NotificationLog::new();
    let highlight = HighlightQueue::new();
    let geometry = GridGeometry::from_config(&config.board);

    let cursor = CursorControllerBuilder::from_config(&config)?
        .with_publisher(notifications.clone())
        .with_highlight_sink(highlight.clone())
        .build()?;
    let cursor = Rc::new(RefCell::new(cursor));

    let mut events = EventSystem::new();
    register_handlers(&cursor, &mut events);

    events.post(CINEMATIC_START, Event::new(EventType::CinematicModeEnabled, CINEMATIC_START));
    events.post(CINEMATIC_END, Event::new(EventType::CinematicModeDisabled, CINEMATIC_END));

    // Only the diagonal may take focus during the second half of the sweep
    let diagonal: Vec<Cell> = (0..geometry.columns().min(geometry.rows()))
        .map(|i| Cell::new(i, i))
        .collect();

    let mut rng = thread_rng();
    let transform = config.transform;
    let board_end = geometry.cell_to_pixel(Cell::new(geometry.columns() - 1, geometry.rows() - 1));
    let board_start = geometry.cell_to_pixel(Cell::new(0, 0));

    for frame in 0..=SWEEP_FRAMES {
        let time = f64::from(frame) * FRAME_TIME;
        events.update_time(time);

        if frame == SWEEP_FRAMES / 2 {
            log::info!("Restricting focus to {} diagonal cells", diagonal.len());
            cursor.borrow_mut().set_valid_cells(diagonal.iter().copied());
        }

        let t = frame as f32 / SWEEP_FRAMES as f32;
        let local = board_start + (board_end - board_start) * t;
        let jitter = Vec2::new(
            rng.gen_range(-JITTER_PX..=JITTER_PX),
            rng.gen_range(-JITTER_PX..=JITTER_PX),
        );
        let pointer = local.coords.component_mul(&transform.scale) + transform.position + jitter;
        events.send(Event::pointer_moved(pointer.x, pointer.y, time));

        events.dispatch();
        report(&notifications, &highlight, time);
    }

    let last = cursor.borrow().focus();
    let target = last.map_or(board_end, |cell| geometry.cell_to_pixel(cell));
    let pointer = target.coords.component_mul(&transform.scale) + transform.position;
    events.send(Event::pointer_released(pointer.x, pointer.y, CINEMATIC_END + FRAME_TIME));
    events.dispatch();
    report(&notifications, &highlight, CINEMATIC_END + FRAME_TIME);

    log::info!("Cursor demo finished, final focus {:?}", cursor.borrow().focus());
    Ok(())
}

fn report(notifications: &NotificationLog, highlight: &HighlightQueue, time: f64) {
    for command in highlight.drain() {
        log::debug!("[{time:.2}s] highlight {command:?}");
    }
    for notification in notifications.take() {
        match notification {
            Notification::Cursor(CursorEvent::Selected(cell)) => {
                log::info!("[{time:.2}s] selected {cell:?}");
            }
            Notification::Cursor(CursorEvent::ActivationChanged) => {
                log::info!("[{time:.2}s] activation changed");
            }
            other => log::debug!("[{time:.2}s] {other:?}"),
        }
    }
}
