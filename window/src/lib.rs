//! Interactive window target for ticplot.
//!
//! Frames are rasterized by `ticplot-pxl` and the pixels are presented in a
//! winit window through softbuffer. The event loop is pumped by the target
//! itself, so a [`WindowTarget`] is used from the main thread without handing
//! control over to winit.
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;
use std::fmt;

use ticplot::Target;
use ticplot_pxl::PxlSurface;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

const PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Errors raised by the window target
#[derive(Debug)]
pub enum Error {
    /// The event loop could not be created or failed
    EventLoop(winit::error::EventLoopError),
    /// The window could not be created
    Os(winit::error::OsError),
    /// The window could not be bound to a pixel buffer.
    /// softbuffer errors are not `Send`, only their message is kept.
    Buffer(String),
    /// The raster surface could not be allocated
    Pxl(ticplot_pxl::Error),
    /// The window was closed before it was shown
    Closed,
}

impl From<winit::error::EventLoopError> for Error {
    fn from(err: winit::error::EventLoopError) -> Self {
        Error::EventLoop(err)
    }
}

impl From<winit::error::OsError> for Error {
    fn from(err: winit::error::OsError) -> Self {
        Error::Os(err)
    }
}

impl From<softbuffer::SoftBufferError> for Error {
    fn from(err: softbuffer::SoftBufferError) -> Self {
        Error::Buffer(err.to_string())
    }
}

impl From<ticplot_pxl::Error> for Error {
    fn from(err: ticplot_pxl::Error) -> Self {
        Error::Pxl(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EventLoop(err) => write!(f, "Event loop error: {}", err),
            Error::Os(err) => write!(f, "Window creation error: {}", err),
            Error::Buffer(err) => write!(f, "Pixel buffer error: {}", err),
            Error::Pxl(err) => write!(f, "Rasterization error: {}", err),
            Error::Closed => write!(f, "The window was closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EventLoop(err) => Some(err),
            Error::Os(err) => Some(err),
            Error::Pxl(err) => Some(err),
            Error::Buffer(_) | Error::Closed => None,
        }
    }
}

/// Window state driven by the pumped event loop
#[derive(Debug)]
struct App {
    title: String,
    size: PhysicalSize<u32>,
    window: Option<Rc<Window>>,
    error: Option<winit::error::OsError>,
    exposed: bool,
    redraw: bool,
    close_requested: bool,
}

impl App {
    fn new(title: &str, width: u32, height: u32) -> Self {
        App {
            title: title.to_string(),
            size: PhysicalSize::new(width, height),
            window: None,
            error: None,
            exposed: false,
            redraw: false,
            close_requested: false,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size)
            .with_resizable(false);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(Rc::new(window));
            }
            Err(err) => self.error = Some(err),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::RedrawRequested => {
                self.exposed = true;
                self.redraw = true;
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) | Key::Character("q") => {
                        self.close_requested = true
                    }
                    _ => (),
                }
            }
            _ => (),
        }
    }
}

/// A canvas target presenting pages in a window.
///
/// The window is mapped by [`WindowTarget::open`]. Each shown page replaces
/// the window content. [`WindowTarget::wait_close`] keeps the last page on
/// screen until the user closes the window, or presses `Escape` or `Q`.
pub struct WindowTarget {
    surface: PxlSurface,
    event_loop: EventLoop<()>,
    app: App,
    buffer: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    pages: usize,
}

impl fmt::Debug for WindowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowTarget")
            .field("surface", &self.surface)
            .field("app", &self.app)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}

impl WindowTarget {
    /// Open a window of `width` x `height` pixels and wait until it is exposed
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self, Error> {
        let surface = PxlSurface::new(width, height)?;
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Err(ticplot_pxl::Error::InvalidSize { width, height }.into());
        };

        let mut event_loop = EventLoop::new()?;
        let mut app = App::new(title, width, height);
        while !app.exposed {
            if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(PUMP_TIMEOUT), &mut app) {
                log::debug!("Event loop exited with code {} before the window was shown", code);
                return Err(Error::Closed);
            }
            if let Some(err) = app.error.take() {
                return Err(err.into());
            }
            if app.close_requested {
                return Err(Error::Closed);
            }
        }
        let window = app.window.clone().ok_or(Error::Closed)?;
        log::debug!("Window {:?} exposed", window.id());

        let context = softbuffer::Context::new(window.clone())?;
        let mut buffer = softbuffer::Surface::new(&context, window)?;
        buffer.resize(w, h)?;

        Ok(WindowTarget {
            surface,
            event_loop,
            app,
            buffer,
            pages: 0,
        })
    }

    /// Open a window with the default canvas size
    pub fn open_default(title: &str) -> Result<Self, Error> {
        WindowTarget::open(
            title,
            ticplot::style::defaults::CANVAS_WIDTH,
            ticplot::style::defaults::CANVAS_HEIGHT,
        )
    }

    /// Whether the user asked to close the window
    pub fn close_requested(&self) -> bool {
        self.app.close_requested
    }

    /// Number of pages shown so far
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Keep the window open until the user closes it.
    /// The last shown page is presented again whenever the window is exposed.
    pub fn wait_close(&mut self) -> Result<(), Error> {
        while !self.app.close_requested {
            if let PumpStatus::Exit(_) = self.event_loop.pump_app_events(None, &mut self.app) {
                break;
            }
            if self.app.redraw && self.pages > 0 {
                self.present()?;
            }
        }
        Ok(())
    }

    fn pump(&mut self) {
        if let PumpStatus::Exit(_) = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.app)
        {
            self.app.close_requested = true;
        }
    }

    fn present(&mut self) -> Result<(), Error> {
        self.app.redraw = false;
        let mut buffer = self.buffer.buffer_mut()?;
        pack_xrgb(&self.surface, &mut buffer);
        buffer.present()?;
        Ok(())
    }
}

impl Target for WindowTarget {
    type Surface = PxlSurface;
    type Error = Error;

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn surface(&mut self) -> &mut PxlSurface {
        &mut self.surface
    }

    fn show_page(&mut self) -> Result<(), Error> {
        self.pump();
        self.present()?;
        self.pages += 1;
        Ok(())
    }

    fn close(self) -> Result<(), Error> {
        let WindowTarget { buffer, app, .. } = self;
        drop(buffer);
        if let Some(window) = app.window {
            log::debug!("Closing window {:?}", window.id());
        }
        Ok(())
    }
}

/// Copy the surface pixels into a softbuffer buffer, as `0x00RRGGBB`
fn pack_xrgb(surface: &PxlSurface, dst: &mut [u32]) {
    for (out, px) in dst.iter_mut().zip(surface.pixmap().pixels()) {
        let c = px.demultiply();
        *out = ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32;
    }
}
