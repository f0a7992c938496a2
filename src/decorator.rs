//! Decorator: border and shadow around a drawable node.
//!
//! The bad half subclasses a rectangle once per combination of effects. The
//! good half wraps any [`Node`] in a decorator that owns exactly one child,
//! forwards its geometry, and adds drawing before or after delegating.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub fn new(color: impl Into<String>, blur: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            color: color.into(),
            blur,
            offset_x,
            offset_y,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::new("rgba(0, 0, 0, 0.5)", 5.0, 3.0, 3.0)
    }
}

/// The drawing surface. Whatever embeds the nodes supplies the real one.
pub trait RenderContext {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_shadow(&mut self, shadow: &Shadow);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    FillStyle(String),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeStyle(String),
    LineWidth(f64),
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    Shadow(Shadow),
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrawCommand::Save => write!(f, "save()"),
            DrawCommand::Restore => write!(f, "restore()"),
            DrawCommand::FillStyle(color) => write!(f, "fillStyle = {}", color),
            DrawCommand::FillRect { x, y, width, height } => {
                write!(f, "fillRect({}, {}, {}, {})", x, y, width, height)
            }
            DrawCommand::StrokeStyle(color) => write!(f, "strokeStyle = {}", color),
            DrawCommand::LineWidth(width) => write!(f, "lineWidth = {}", width),
            DrawCommand::StrokeRect { x, y, width, height } => {
                write!(f, "strokeRect({}, {}, {}, {})", x, y, width, height)
            }
            DrawCommand::Shadow(shadow) => write!(
                f,
                "shadow = {} blur {} offset ({}, {})",
                shadow.color, shadow.blur, shadow.offset_x, shadow.offset_y
            ),
        }
    }
}

/// Keeps every command in call order.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl RenderContext for RecordingContext {
    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.push(DrawCommand::Shadow(shadow.clone()));
    }
}

/// Prints each command as it arrives, indented by save depth.
#[derive(Debug, Default)]
pub struct ConsoleContext {
    depth: usize,
}

impl ConsoleContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, command: DrawCommand) {
        println!("  {}{}", "  ".repeat(self.depth), command);
    }
}

impl RenderContext for ConsoleContext {
    fn save(&mut self) {
        self.emit(DrawCommand::Save);
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.emit(DrawCommand::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.emit(DrawCommand::FillStyle(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.emit(DrawCommand::FillRect { x, y, width, height });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.emit(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.emit(DrawCommand::LineWidth(width));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.emit(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.emit(DrawCommand::Shadow(shadow.clone()));
    }
}

pub trait Node {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset);
}

/// A filled rectangle. Children are drawn relative to its top-left corner.
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    pub color: String,
    children: Vec<Box<dyn Node>>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: color.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: impl Node + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Node>> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    fn origin(&self, offset: Offset) -> Offset {
        Offset::new(offset.x + self.x, offset.y + self.y)
    }
}

impl Node for Rect {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        let origin = self.origin(offset);
        ctx.set_fill_style(&self.color);
        ctx.fill_rect(origin.x, origin.y, self.width, self.height);

        for child in &self.children {
            child.draw(ctx, origin);
        }
    }
}

fn stroke_border(
    ctx: &mut dyn RenderContext,
    node: &dyn Node,
    offset: Offset,
    color: &str,
    line_width: f64,
) {
    ctx.set_stroke_style(color);
    ctx.set_line_width(line_width);
    ctx.stroke_rect(
        offset.x + node.x(),
        offset.y + node.y(),
        node.width(),
        node.height(),
    );
}

// ============================================================================
// Bad: a subclass per combination
// ============================================================================

pub struct BorderedRect {
    pub rect: Rect,
    pub border_color: String,
    pub border_width: f64,
}

impl Node for BorderedRect {
    fn x(&self) -> f64 {
        self.rect.x()
    }

    fn y(&self) -> f64 {
        self.rect.y()
    }

    fn width(&self) -> f64 {
        self.rect.width()
    }

    fn height(&self) -> f64 {
        self.rect.height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        self.rect.draw(ctx, offset);
        stroke_border(ctx, &self.rect, offset, &self.border_color, self.border_width);
    }
}

pub struct ShadowedRect {
    pub rect: Rect,
    pub shadow: Shadow,
}

impl Node for ShadowedRect {
    fn x(&self) -> f64 {
        self.rect.x()
    }

    fn y(&self) -> f64 {
        self.rect.y()
    }

    fn width(&self) -> f64 {
        self.rect.width()
    }

    fn height(&self) -> f64 {
        self.rect.height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        ctx.save();
        ctx.set_shadow(&self.shadow);
        self.rect.draw(ctx, offset);
        ctx.restore();
    }
}

/// Border and shadow logic copied from the two types above, and already
/// drifting: the border is stroked before the shadow is even set.
pub struct BorderedShadowedRect {
    pub rect: Rect,
    pub border_color: String,
    pub border_width: f64,
    pub shadow: Shadow,
}

impl Node for BorderedShadowedRect {
    fn x(&self) -> f64 {
        self.rect.x()
    }

    fn y(&self) -> f64 {
        self.rect.y()
    }

    fn width(&self) -> f64 {
        self.rect.width()
    }

    fn height(&self) -> f64 {
        self.rect.height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        ctx.save();
        stroke_border(ctx, &self.rect, offset, &self.border_color, self.border_width);
        ctx.set_shadow(&self.shadow);
        self.rect.draw(ctx, offset);
        ctx.restore();
    }
}

// ============================================================================
// Good: decorators over any node
// ============================================================================

/// Strokes a border after the child has drawn.
pub struct BorderDecorator {
    child: Box<dyn Node>,
    pub color: String,
    pub line_width: f64,
}

impl BorderDecorator {
    pub fn new(child: impl Node + 'static, color: impl Into<String>, line_width: f64) -> Self {
        Self {
            child: Box::new(child),
            color: color.into(),
            line_width,
        }
    }

    pub fn into_inner(self) -> Box<dyn Node> {
        self.child
    }
}

impl Node for BorderDecorator {
    fn x(&self) -> f64 {
        self.child.x()
    }

    fn y(&self) -> f64 {
        self.child.y()
    }

    fn width(&self) -> f64 {
        self.child.width()
    }

    fn height(&self) -> f64 {
        self.child.height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        self.child.draw(ctx, offset);
        stroke_border(ctx, self, offset, &self.color, self.line_width);
    }
}

/// Draws the child with a shadow, scoped by save/restore.
pub struct ShadowDecorator {
    child: Box<dyn Node>,
    pub shadow: Shadow,
}

impl ShadowDecorator {
    pub fn new(child: impl Node + 'static, shadow: Shadow) -> Self {
        Self {
            child: Box::new(child),
            shadow,
        }
    }

    pub fn into_inner(self) -> Box<dyn Node> {
        self.child
    }
}

impl Node for ShadowDecorator {
    fn x(&self) -> f64 {
        self.child.x()
    }

    fn y(&self) -> f64 {
        self.child.y()
    }

    fn width(&self) -> f64 {
        self.child.width()
    }

    fn height(&self) -> f64 {
        self.child.height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        ctx.save();
        ctx.set_shadow(&self.shadow);
        self.child.draw(ctx, offset);
        ctx.restore();
    }
}

impl Node for Box<dyn Node> {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn draw(&self, ctx: &mut dyn RenderContext, offset: Offset) {
        (**self).draw(ctx, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(color: &str, x: f64, y: f64, width: f64, height: f64) -> Vec<DrawCommand> {
        vec![
            DrawCommand::FillStyle(color.to_string()),
            DrawCommand::FillRect { x, y, width, height },
        ]
    }

    fn border(color: &str, line_width: f64, x: f64, y: f64, width: f64, height: f64) -> Vec<DrawCommand> {
        vec![
            DrawCommand::StrokeStyle(color.to_string()),
            DrawCommand::LineWidth(line_width),
            DrawCommand::StrokeRect { x, y, width, height },
        ]
    }

    fn render(node: &dyn Node, offset: Offset) -> Vec<DrawCommand> {
        let mut ctx = RecordingContext::new();
        node.draw(&mut ctx, offset);
        ctx.take()
    }

    #[test]
    fn test_rect_draws_at_offset() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0, "red");
        assert_eq!(
            render(&rect, Offset::new(5.0, 5.0)),
            fill("red", 15.0, 15.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_rect_children_are_relative() {
        let mut parent = Rect::new(10.0, 20.0, 200.0, 100.0, "white");
        parent.add_child(Rect::new(5.0, 5.0, 10.0, 10.0, "black"));

        let mut expected = fill("white", 10.0, 20.0, 200.0, 100.0);
        expected.extend(fill("black", 15.0, 25.0, 10.0, 10.0));
        assert_eq!(render(&parent, Offset::ORIGIN), expected);
    }

    #[test]
    fn test_remove_child() {
        let mut parent = Rect::new(0.0, 0.0, 10.0, 10.0, "white");
        parent.add_child(Rect::new(1.0, 1.0, 1.0, 1.0, "a"));
        parent.add_child(Rect::new(2.0, 2.0, 1.0, 1.0, "b"));

        let removed = parent.remove_child(0).unwrap();
        assert_eq!(removed.x(), 1.0);
        assert_eq!(parent.children().len(), 1);
        assert!(parent.remove_child(5).is_none());
    }

    #[test]
    fn test_decorators_forward_geometry() {
        let node = BorderDecorator::new(
            ShadowDecorator::new(Rect::new(230.0, 10.0, 100.0, 50.0, "green"), Shadow::default()),
            "black",
            2.0,
        );
        assert_eq!(
            (node.x(), node.y(), node.width(), node.height()),
            (230.0, 10.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_border_decorator() {
        let node = BorderDecorator::new(Rect::new(10.0, 10.0, 100.0, 50.0, "red"), "black", 2.0);

        let mut expected = fill("red", 10.0, 10.0, 100.0, 50.0);
        expected.extend(border("black", 2.0, 10.0, 10.0, 100.0, 50.0));
        assert_eq!(render(&node, Offset::ORIGIN), expected);
    }

    #[test]
    fn test_border_outside_shadow() {
        let shadow = Shadow::default();
        let node = BorderDecorator::new(
            ShadowDecorator::new(Rect::new(230.0, 10.0, 100.0, 50.0, "green"), shadow.clone()),
            "black",
            2.0,
        );

        let mut expected = vec![DrawCommand::Save, DrawCommand::Shadow(shadow)];
        expected.extend(fill("green", 230.0, 10.0, 100.0, 50.0));
        expected.push(DrawCommand::Restore);
        expected.extend(border("black", 2.0, 230.0, 10.0, 100.0, 50.0));
        assert_eq!(render(&node, Offset::ORIGIN), expected);
    }

    #[test]
    fn test_shadow_outside_border() {
        let shadow = Shadow::default();
        let node = ShadowDecorator::new(
            BorderDecorator::new(Rect::new(230.0, 10.0, 100.0, 50.0, "green"), "black", 2.0),
            shadow.clone(),
        );

        let mut expected = vec![DrawCommand::Save, DrawCommand::Shadow(shadow)];
        expected.extend(fill("green", 230.0, 10.0, 100.0, 50.0));
        expected.extend(border("black", 2.0, 230.0, 10.0, 100.0, 50.0));
        expected.push(DrawCommand::Restore);
        assert_eq!(render(&node, Offset::ORIGIN), expected);
    }

    #[test]
    fn test_nesting_order_changes_output() {
        let inner_first = BorderDecorator::new(
            ShadowDecorator::new(Rect::new(0.0, 0.0, 1.0, 1.0, "c"), Shadow::default()),
            "black",
            1.0,
        );
        let outer_first = ShadowDecorator::new(
            BorderDecorator::new(Rect::new(0.0, 0.0, 1.0, 1.0, "c"), "black", 1.0),
            Shadow::default(),
        );
        assert_ne!(
            render(&inner_first, Offset::ORIGIN),
            render(&outer_first, Offset::ORIGIN)
        );
    }

    #[test]
    fn test_three_deep_nesting() {
        let soft = Shadow::new("grey", 2.0, 1.0, 1.0);
        let node = BorderDecorator::new(
            ShadowDecorator::new(
                BorderDecorator::new(Rect::new(0.0, 0.0, 40.0, 20.0, "blue"), "white", 1.0),
                soft.clone(),
            ),
            "black",
            3.0,
        );

        let mut expected = vec![DrawCommand::Save, DrawCommand::Shadow(soft)];
        expected.extend(fill("blue", 10.0, 10.0, 40.0, 20.0));
        expected.extend(border("white", 1.0, 10.0, 10.0, 40.0, 20.0));
        expected.push(DrawCommand::Restore);
        expected.extend(border("black", 3.0, 10.0, 10.0, 40.0, 20.0));
        assert_eq!(render(&node, Offset::new(10.0, 10.0)), expected);
    }

    #[test]
    fn test_into_inner_unwraps_one_layer() {
        let node = BorderDecorator::new(Rect::new(0.0, 0.0, 1.0, 1.0, "red"), "black", 1.0);
        let inner = node.into_inner();
        assert_eq!(render(&inner, Offset::ORIGIN), fill("red", 0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_bad_combined_type_strokes_before_shadow() {
        let shadow = Shadow::default();
        let node = BorderedShadowedRect {
            rect: Rect::new(230.0, 10.0, 100.0, 50.0, "green"),
            border_color: "black".to_string(),
            border_width: 2.0,
            shadow: shadow.clone(),
        };

        let mut expected = vec![DrawCommand::Save];
        expected.extend(border("black", 2.0, 230.0, 10.0, 100.0, 50.0));
        expected.push(DrawCommand::Shadow(shadow));
        expected.extend(fill("green", 230.0, 10.0, 100.0, 50.0));
        expected.push(DrawCommand::Restore);
        assert_eq!(render(&node, Offset::ORIGIN), expected);
    }

    #[test]
    fn test_bad_single_effect_types_match_decorators() {
        let bordered = BorderedRect {
            rect: Rect::new(10.0, 10.0, 100.0, 50.0, "red"),
            border_color: "black".to_string(),
            border_width: 2.0,
        };
        let decorated = BorderDecorator::new(Rect::new(10.0, 10.0, 100.0, 50.0, "red"), "black", 2.0);
        assert_eq!(render(&bordered, Offset::ORIGIN), render(&decorated, Offset::ORIGIN));

        let shadowed = ShadowedRect {
            rect: Rect::new(120.0, 10.0, 100.0, 50.0, "blue"),
            shadow: Shadow::default(),
        };
        let decorated = ShadowDecorator::new(Rect::new(120.0, 10.0, 100.0, 50.0, "blue"), Shadow::default());
        assert_eq!(render(&shadowed, Offset::ORIGIN), render(&decorated, Offset::ORIGIN));
    }

    #[test]
    fn test_draw_command_display() {
        let command = DrawCommand::StrokeRect {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(command.to_string(), "strokeRect(10, 10, 100, 50)");
    }
}
