//! Desktop window: event handling and presentation through softbuffer
//!
//! All state changes happen on the event-loop thread in response to window
//! events. The app keeps the controller and reads the board back from it on
//! every redraw.

use std::num::NonZeroU32;
use std::rc::Rc;

use image::RgbaImage;
use log::{error, info};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::game::{MoveOutcome, PuzzleController};
use crate::io::configuration::{SOLVED_TITLE, WINDOW_TITLE};
use crate::io::error::{PuzzleError, Result, surface_error};
use crate::view::frame::compose_frame;
use crate::view::layout::GridLayout;

struct Graphics {
    window: Rc<Window>,
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

/// Top-left corner that centres a window on a monitor
pub fn centered_origin(
    monitor_origin: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let offset = |monitor: u32, window: u32| (i64::from(monitor) - i64::from(window)) / 2;
    (
        (i64::from(monitor_origin.0) + offset(monitor_size.0, window_size.0)) as i32,
        (i64::from(monitor_origin.1) + offset(monitor_size.1, window_size.1)) as i32,
    )
}

/// Window state and winit event handler for one puzzle
pub struct PuzzleApp {
    controller: PuzzleController<RgbaImage>,
    layout: GridLayout,
    cursor: Option<(u32, u32)>,
    hovered: Option<usize>,
    graphics: Option<Graphics>,
    failure: Option<PuzzleError>,
}

impl PuzzleApp {
    /// Create the app; the window itself opens when the event loop resumes
    pub const fn new(controller: PuzzleController<RgbaImage>, layout: GridLayout) -> Self {
        Self {
            controller,
            layout,
            cursor: None,
            hovered: None,
            graphics: None,
            failure: None,
        }
    }

    /// Controller driving the board
    pub const fn controller(&self) -> &PuzzleController<RgbaImage> {
        &self.controller
    }

    /// Slot under the cursor
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Title matching the current state of the puzzle
    pub const fn title(&self) -> &'static str {
        if self.controller.solved_notice() {
            SOLVED_TITLE
        } else {
            WINDOW_TITLE
        }
    }

    /// Track the cursor; returns whether the hovered slot changed
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> bool {
        self.cursor = (x >= 0.0 && y >= 0.0).then_some((x as u32, y as u32));
        let hovered = self
            .cursor
            .and_then(|(cx, cy)| self.layout.slot_at(cx, cy));
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Forget the cursor; returns whether a slot was highlighted
    pub fn cursor_left(&mut self) -> bool {
        self.cursor = None;
        self.hovered.take().is_some()
    }

    /// Left-button press at the last cursor position
    pub fn press(&mut self) -> MoveOutcome {
        match self.hovered {
            Some(slot) => self.controller.click(slot),
            None => MoveOutcome::Ignored,
        }
    }

    fn request_redraw(&self) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }

    fn sync_title(&self) {
        if let Some(graphics) = &self.graphics {
            graphics.window.set_title(self.title());
        }
    }

    fn create_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let (width, height) = self.layout.frame_size();
        let mut attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        if let Some(monitor) = event_loop.primary_monitor() {
            let origin = monitor.position();
            let size = monitor.size();
            let (x, y) = centered_origin(
                (origin.x, origin.y),
                (size.width, size.height),
                (width, height),
            );
            attributes = attributes.with_position(PhysicalPosition::new(x, y));
        }

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window)).map_err(surface_error("create context"))?;
        let surface =
            Surface::new(&context, Rc::clone(&window)).map_err(surface_error("create surface"))?;

        info!("Opened {width}x{height} window");
        window.request_redraw();
        Ok(Graphics {
            window,
            _context: context,
            surface,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(graphics) = self.graphics.as_mut() else {
            return Ok(());
        };
        let size = graphics.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        graphics
            .surface
            .resize(width, height)
            .map_err(surface_error("resize"))?;

        let frame = compose_frame(self.controller.board(), &self.layout, self.hovered);
        let mut buffer = graphics
            .surface
            .buffer_mut()
            .map_err(surface_error("lock buffer"))?;
        frame.blit_into(&mut buffer, size.width, size.height);
        buffer.present().map_err(surface_error("present"))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PuzzleError) {
        error!("{err}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn into_result(self) -> Result<()> {
        self.failure.map_or(Ok(()), Err)
    }
}

impl ApplicationHandler for PuzzleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.create_graphics(event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window closed after {} moves", self.controller.moves());
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.cursor_moved(position.x, position.y) {
                    self.request_redraw();
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if self.cursor_left() {
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if self.press().needs_redraw() {
                    self.sync_title();
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }
}

/// Open the puzzle window and block until it is closed
///
/// # Errors
///
/// Returns an error if the event loop, window or drawing surface cannot be
/// created, or if presenting a frame fails
pub fn run_window(controller: PuzzleController<RgbaImage>, layout: GridLayout) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = PuzzleApp::new(controller, layout);
    event_loop.run_app(&mut app)?;
    app.into_result()
}
