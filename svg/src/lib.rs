//! SVG rendering for ticplot: an [`SvgSurface`] and the [`SvgFile`] canvas target.
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use base64::Engine;
use svg::Node;
use svg::node::element;
use ticplot::geom::{self, Transform};
use ticplot::render::{self, Surface};
use ticplot::{Target, style};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// A clip was pushed and never popped, or popped without being pushed
    UnbalancedClip,
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::UnbalancedClip => write!(f, "Unbalanced clip stack"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::UnbalancedClip => None,
        }
    }
}

/// A surface building an SVG document in memory
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    doc: svg::Document,
    clip_num: u32,
    group_stack: Vec<element::Group>,
    unbalanced: bool,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let doc = svg::Document::new()
            .set("width", width)
            .set("height", height);
        SvgSurface {
            width,
            height,
            doc,
            clip_num: 0,
            group_stack: vec![],
            unbalanced: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.check_balanced()?;
        svg::save(path, &self.doc)?;
        Ok(())
    }

    pub fn write<W>(&self, dest: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        self.check_balanced()?;
        svg::write(dest, &self.doc)?;
        Ok(())
    }

    /// The document as a string
    pub fn to_svg_string(&self) -> Result<String, Error> {
        self.check_balanced()?;
        Ok(self.doc.to_string())
    }

    fn check_balanced(&self) -> Result<(), Error> {
        if self.unbalanced || !self.group_stack.is_empty() {
            Err(Error::UnbalancedClip)
        } else {
            Ok(())
        }
    }
}

impl Surface for SvgSurface {
    fn prepare(&mut self, size: geom::Size) {
        self.doc
            .assign("viewBox", (0, 0, size.width(), size.height()));
    }

    fn fill(&mut self, fill: render::Paint) {
        let mut node = element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%");
        assign_fill(&mut node, Some(&fill));
        self.append_node(node);
    }

    fn draw_rect(&mut self, rect: &render::Rect) {
        let mut node = rectangle_node(&rect.rect);
        assign_fill(&mut node, rect.fill.as_ref());
        assign_stroke(&mut node, rect.stroke.as_ref());
        assign_transform(&mut node, rect.transform);
        self.append_node(node);
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut node = element::Path::new();
        assign_fill(&mut node, path.fill.as_ref());
        assign_stroke(&mut node, path.stroke.as_ref());
        assign_transform(&mut node, path.transform);
        node.assign("d", path_data(path.path));
        self.append_node(node);
    }

    fn draw_image(&mut self, image: &render::Image) {
        let png = match encode_png(image.image) {
            Some(png) => png,
            None => {
                log::warn!("Could not encode {:?} as PNG", image.image);
                return;
            }
        };
        let href = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        );
        let mut node = element::Image::new()
            .set("x", image.rect.x())
            .set("y", image.rect.y())
            .set("width", image.rect.width())
            .set("height", image.rect.height())
            .set("preserveAspectRatio", "none")
            .set("href", href);
        assign_transform(&mut node, image.transform);
        self.append_node(node);
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        let clip_id = self.bump_clip_id();
        let clip_id_url = format!("url(#{})", clip_id);
        let mut rect_node = rectangle_node(clip.rect);
        assign_transform(&mut rect_node, clip.transform);
        let node = element::ClipPath::new()
            .set("id", clip_id)
            .add(rect_node);
        self.append_node(node);
        self.group_stack
            .push(element::Group::new().set("clip-path", clip_id_url));
    }

    fn pop_clip(&mut self) {
        match self.group_stack.pop() {
            Some(g) => self.append_node(g),
            None => {
                log::error!("pop_clip called without matching push_clip");
                self.unbalanced = true;
            }
        }
    }
}

impl SvgSurface {
    fn append_node<T>(&mut self, node: T)
    where
        T: Node,
    {
        match self.group_stack.last_mut() {
            Some(group) => group.append(node),
            None => self.doc.append(node),
        }
    }

    fn bump_clip_id(&mut self) -> String {
        self.clip_num += 1;
        format!("ticplot-clip{}", self.clip_num)
    }
}

/// A canvas target writing an SVG file.
///
/// Each shown page overwrites the file.
/// Closing the target writes the file if no page was shown.
#[derive(Debug)]
pub struct SvgFile {
    path: PathBuf,
    surface: SvgSurface,
    pages: usize,
}

impl SvgFile {
    /// Create the file at `path` for a canvas of the given size
    pub fn create<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        fs::File::create(&path)?;
        Ok(SvgFile {
            path,
            surface: SvgSurface::new(width, height),
            pages: 0,
        })
    }

    /// Create the file at `path` with the default canvas size
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        SvgFile::create(
            path,
            style::defaults::CANVAS_WIDTH,
            style::defaults::CANVAS_HEIGHT,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages written so far
    pub fn pages(&self) -> usize {
        self.pages
    }
}

impl Target for SvgFile {
    type Surface = SvgSurface;
    type Error = Error;

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn surface(&mut self) -> &mut SvgSurface {
        &mut self.surface
    }

    fn show_page(&mut self) -> Result<(), Error> {
        self.surface.save_svg(&self.path)?;
        self.pages += 1;
        log::debug!("Wrote page {} to {}", self.pages, self.path.display());
        self.surface = SvgSurface::new(self.surface.width(), self.surface.height());
        Ok(())
    }

    fn close(self) -> Result<(), Error> {
        if self.pages == 0 {
            self.surface.save_svg(&self.path)?;
        }
        Ok(())
    }
}

fn assign_transform<N>(node: &mut N, transform: Option<&geom::Transform>)
where
    N: Node,
{
    if let Some(Transform {
        sx,
        kx,
        ky,
        sy,
        tx,
        ty,
    }) = transform
    {
        node.assign(
            "transform",
            format!("matrix({sx} {ky} {kx} {sy} {tx} {ty})"),
        );
    }
}

fn assign_fill<N>(node: &mut N, fill: Option<&render::Paint>)
where
    N: Node,
{
    if let Some(render::Paint::Solid(color)) = fill {
        node.assign("fill", color.html());
        if let Some(opacity) = color.opacity() {
            node.assign("fill-opacity", opacity);
        }
    } else {
        node.assign("fill", "none");
    }
}

fn assign_stroke<N>(node: &mut N, stroke: Option<&render::Stroke>)
where
    N: Node,
{
    if let Some(stroke) = stroke {
        let w = stroke.width;
        node.assign("stroke", stroke.color.html());
        node.assign("stroke-width", w);
        if let Some(opacity) = stroke.color.opacity() {
            node.assign("stroke-opacity", opacity);
        }
        if let render::LinePattern::Dash(dash) = stroke.pattern {
            let array: Vec<f32> = dash.iter().map(|d| d * w).collect();
            node.assign("stroke-dasharray", array)
        }
    } else {
        node.assign("stroke", "none");
    }
}

fn path_data(path: &geom::Path) -> element::path::Data {
    let mut data = element::path::Data::new();
    for segment in path.segments() {
        match segment {
            geom::PathSegment::MoveTo(p) => {
                data = data.move_to((p.x, p.y));
            }
            geom::PathSegment::LineTo(p) => {
                data = data.line_to((p.x, p.y));
            }
            geom::PathSegment::QuadTo(p1, p2) => {
                data = data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y));
            }
            geom::PathSegment::CubicTo(p1, p2, p3) => {
                data = data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y));
            }
            geom::PathSegment::Close => {
                data = data.close();
            }
        }
    }
    data
}

fn rectangle_node(rect: &geom::Rect) -> element::Rectangle {
    element::Rectangle::new()
        .set("x", rect.x())
        .set("y", rect.y())
        .set("width", rect.width())
        .set("height", rect.height())
}

/// Encode straight alpha RGBA as PNG, through a premultiplied pixmap
fn encode_png(image: &render::ImageData) -> Option<Vec<u8>> {
    let mut pixmap = tiny_skia::Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.rgba().chunks_exact(4))
    {
        *dst = tiny_skia::ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    pixmap.encode_png().ok()
}
