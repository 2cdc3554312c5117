use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tqdm::tqdm;
use tracing::{debug, info};

use crate::{
    error::WaypointError,
    search::{Frame, NodeId, Point, PointGraph},
};

const NODE_RADIUS: u32 = 5;
const HIGHLIGHT_WIDTH: u32 = 5;
const TRAVERSED_COLOR: &str = "red";
const PATH_COLOR: &str = "#00ff00";

/// Renders a [`PointGraph`] and the frames of a search on it as one animated SVG.
///
/// The graph is drawn in black. Each frame becomes a hidden group holding its
/// traversed edges in red and its path in green; a CSS animation then shows the
/// groups one after the other, `frame_time` seconds each, and holds the last one
/// for `last_frame_time` seconds before the cycle restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgAnimation {
    pub frame_time: f64,
    pub last_frame_time: f64,
    show_progress: bool,
}

impl Default for SvgAnimation {
    fn default() -> Self {
        SvgAnimation::new(0.1, 5.0)
    }
}

impl SvgAnimation {
    pub fn new(frame_time: f64, last_frame_time: f64) -> Self {
        SvgAnimation {
            frame_time,
            last_frame_time,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while frame groups are rendered.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Length of one animation cycle, in seconds.
    pub fn cycle_time(&self, frame_count: usize) -> f64 {
        frame_count.saturating_sub(1) as f64 * self.frame_time + self.last_frame_time
    }

    pub fn render(&self, graph: &PointGraph, frames: &[Frame<NodeId>]) -> String {
        let size = graph.canvas_size();
        let mut svg = String::new();

        // writing into a String cannot fail
        let _ = write!(
            svg,
            "<svg viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">"
        );
        let _ = write!(
            svg,
            "<rect width=\"{size}\" height=\"{size}\" fill=\"white\" />"
        );

        svg.push_str("<defs><style type=\"text/css\">");
        svg.push_str(&Self::selectors(0..frames.len()));
        svg.push_str("{visibility: hidden}</style></defs>");

        for (_, position) in graph.positions() {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{NODE_RADIUS}\" fill=\"black\"/>",
                position.x as i64, position.y as i64
            );
        }
        for (a, b) in graph.edges().iter() {
            svg.push_str(&Self::line(
                graph.position(*a),
                graph.position(*b),
                "black",
                None,
            ));
        }

        let groups: Box<dyn Iterator<Item = (usize, &Frame<NodeId>)> + '_> = if self.show_progress {
            Box::new(tqdm(frames.iter().enumerate()))
        } else {
            Box::new(frames.iter().enumerate())
        };
        for (i, frame) in groups {
            Self::render_frame(&mut svg, graph, i, frame);
        }

        self.render_animation(&mut svg, frames.len());
        svg.push_str("</svg>");
        svg
    }

    fn render_frame(svg: &mut String, graph: &PointGraph, index: usize, frame: &Frame<NodeId>) {
        let _ = write!(svg, "<g id=\"_{index}\">");
        for (a, b) in frame.traversed.iter() {
            svg.push_str(&Self::line(
                graph.position(*a),
                graph.position(*b),
                TRAVERSED_COLOR,
                Some(HIGHLIGHT_WIDTH),
            ));
        }
        for pair in frame.path.windows(2) {
            svg.push_str(&Self::line(
                graph.position(pair[1]),
                graph.position(pair[0]),
                PATH_COLOR,
                Some(HIGHLIGHT_WIDTH),
            ));
        }
        svg.push_str("</g>");
    }

    fn render_animation(&self, svg: &mut String, frame_count: usize) {
        if frame_count == 0 {
            return;
        }
        let cycle = self.cycle_time(frame_count);
        let last = frame_count - 1;

        svg.push_str("<defs><style type=\"text/css\">");
        if last > 0 {
            svg.push_str(&Self::selectors(0..last));
            let _ = write!(svg, "{{animation: {cycle:.6}s linear _k infinite}}");
        }
        let _ = write!(svg, "#_{last}{{animation: {cycle:.6}s linear _j infinite}}");
        for i in 0..frame_count {
            let _ = write!(
                svg,
                "#_{i} {{animation-delay: {:.6}s}}",
                self.frame_time * i as f64
            );
        }

        let frac = 100.0 / frame_count as f64;
        let _ = write!(
            svg,
            "@keyframes _k {{0%, {frac:.6}% {{visibility: visible }} {frac:.6}%, 100% {{visibility: hidden }}}}"
        );
        let frac = 100.0 * self.last_frame_time / cycle;
        let _ = write!(
            svg,
            "@keyframes _j {{0%, {frac:.6}% {{visibility: visible }} {frac:.6}%, 100% {{visibility: hidden }}}}"
        );
        svg.push_str("</style></defs>");
    }

    fn selectors(indices: std::ops::Range<usize>) -> String {
        indices
            .map(|i| format!("#_{i}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn line(from: Point, to: Point, stroke: &str, width: Option<u32>) -> String {
        let width = width
            .map(|w| format!(" stroke-width=\"{w}\""))
            .unwrap_or_default();
        format!(
            "<line x1=\"{}\" x2=\"{}\" y1=\"{}\" y2=\"{}\" stroke=\"{stroke}\"{width}/>",
            from.x as i64, to.x as i64, from.y as i64, to.y as i64
        )
    }

    pub fn write_to<W: Write>(
        &self,
        graph: &PointGraph,
        frames: &[Frame<NodeId>],
        mut writer: W,
    ) -> Result<(), WaypointError> {
        let svg = self.render(graph, frames);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        debug!(bytes = svg.len(), frames = frames.len(), "wrote svg animation");
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        graph: &PointGraph,
        frames: &[Frame<NodeId>],
        path: P,
    ) -> Result<(), WaypointError> {
        let file = File::create(path.as_ref())?;
        self.write_to(graph, frames, BufWriter::new(file))?;
        info!(path = %path.as_ref().display(), "saved svg animation");
        Ok(())
    }
}
