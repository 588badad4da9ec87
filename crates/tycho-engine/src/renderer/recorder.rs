use glam::Vec2;

use super::traits::Renderer;
use crate::api::types::Color;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, color: Color },
    Polyline { points: Vec<Vec2>, color: Color },
    Ring { center: Vec2, radius: f32, color: Color },
    Text { content: String, at: Vec2, color: Color },
}

/// Renderer that just remembers what it was asked to draw.
///
/// Handy for tests and for hosts that want to replay a frame themselves.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Contents of every text command, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for CommandRecorder {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_polyline(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, content: &str, at: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            content: content.to_owned(),
            at,
            color,
        });
    }

    // Kept as one command so tests can tell guides from trails.
    fn draw_ring(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Ring { center, radius, color });
    }
}
