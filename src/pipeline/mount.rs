//! Mount API - Application lifecycle and render effect.
//!
//! Build the component tree first, then mount: mount puts the terminal in
//! raw mode, creates the layout and frame buffer deriveds and the one render
//! effect that feeds the renderer, and installs the global keys.
//!
//! ```ignore
//! let handle = mount(RenderMode::Fullscreen)?;
//! run(&handle)?; // until Ctrl+C
//! handle.unmount()?;
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::terminal;
use spark_signals::effect;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::layout::compute_layout;
use crate::renderer::{DiffRenderer, FrameBuffer, InlineRenderer};
use crate::state::{global_keys, input};
use crate::types::RenderMode;

use super::frame_buffer_derived::{create_frame_buffer_derived, paint_frame};
use super::layout_derived::create_layout_derived;
use super::terminal::{detect_terminal_size, set_render_mode};

/// Poll interval of the event loop.
const TICK: Duration = Duration::from_millis(16);

enum ActiveRenderer {
    Fullscreen(DiffRenderer),
    Inline(InlineRenderer),
}

impl ActiveRenderer {
    fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        match self {
            ActiveRenderer::Fullscreen(renderer) => renderer.render(buffer).map(|_| ()),
            ActiveRenderer::Inline(renderer) => renderer.render(buffer),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        match self {
            ActiveRenderer::Fullscreen(renderer) => renderer.exit_fullscreen(),
            ActiveRenderer::Inline(renderer) => renderer.finish(),
        }
    }
}

/// Handle returned by [`mount`].
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    global_keys: Option<global_keys::GlobalKeysHandle>,
    renderer: Rc<RefCell<ActiveRenderer>>,
    raw_mode: bool,
}

impl MountHandle {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request shutdown; [`run`] returns on its next tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop rendering and restore the terminal.
    pub fn unmount(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        let Some(stop) = self.stop_effect.take() else {
            return Ok(());
        };
        stop();

        self.renderer.borrow_mut().finish()?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        info!("unmounted");
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Err(error) = self.teardown() {
            warn!(%error, "terminal restore failed");
        }
    }
}

/// Mount the component tree onto the terminal.
pub fn mount(mode: RenderMode) -> Result<MountHandle> {
    detect_terminal_size();
    set_render_mode(mode);

    // Piped stdin has no raw mode; rendering still works.
    let raw_mode = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "raw mode unavailable");
            false
        }
    };

    let renderer = match mode {
        RenderMode::Fullscreen => {
            let mut renderer = DiffRenderer::new();
            start_fullscreen(&mut renderer, raw_mode, terminal::disable_raw_mode)?;
            ActiveRenderer::Fullscreen(renderer)
        }
        RenderMode::Inline => ActiveRenderer::Inline(InlineRenderer::new()),
    };
    let renderer = Rc::new(RefCell::new(renderer));

    let layout_derived = create_layout_derived();
    let fb_derived = create_frame_buffer_derived(layout_derived);

    let running = Arc::new(AtomicBool::new(true));
    let running_for_effect = running.clone();
    let renderer_for_effect = renderer.clone();

    let stop = effect(move || {
        if !running_for_effect.load(Ordering::SeqCst) {
            return;
        }
        let result = fb_derived.get();
        if let Err(error) = renderer_for_effect.borrow_mut().render(&result.buffer) {
            warn!(%error, "render failed");
        }
    });

    let global_keys = global_keys::setup_global_keys(running.clone());
    info!(?mode, "mounted");

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop)),
        running,
        global_keys: Some(global_keys),
        renderer,
        raw_mode,
    })
}

/// Switch `renderer` to the alternate screen. If that fails, raw mode is
/// handed back through `restore_raw_mode` before the error returns, since no
/// handle exists yet to restore it on drop.
fn start_fullscreen<W, F>(renderer: &mut DiffRenderer<W>, raw_mode: bool, restore_raw_mode: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    if let Err(error) = renderer.enter_fullscreen() {
        if raw_mode {
            if let Err(restore_error) = restore_raw_mode() {
                warn!(%restore_error, "raw mode restore failed");
            }
        }
        return Err(error.into());
    }
    Ok(())
}

/// Process at most one terminal event. `Ok(false)` once stopped.
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }
    if let Some(event) = input::poll_event(TICK)? {
        input::route_event(event);
    }
    Ok(handle.is_running())
}

/// Run the event loop until Ctrl+C or [`MountHandle::stop`].
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}

/// Lay out and paint the current tree at a fixed size, without a terminal.
///
/// Returns plain text, one line per row with trailing blanks trimmed.
pub fn render_to_string(width: u16, height: u16) -> String {
    let layout = compute_layout(width, height, true);
    paint_frame(&layout, width, height, RenderMode::Fullscreen)
        .buffer
        .to_plain_string()
}
