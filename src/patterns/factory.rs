// Factory Pattern - the caller names a shape, the factory builds it.
// The set of shapes is closed, so the tag is an enum parsed once at the edge.

use crate::error::FactoryError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rectangle];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
        };
        f.write_str(name)
    }
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Circle" => Ok(ShapeKind::Circle),
            "Square" => Ok(ShapeKind::Square),
            "Rectangle" => Ok(ShapeKind::Rectangle),
            other => Err(FactoryError::UnknownShape(other.to_string())),
        }
    }
}

// ============================================================================
// Trait objects: callers only see `dyn Shape`
// ============================================================================

pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn draw(&self) -> String {
        format!("Draw {}", self.kind())
    }
}

pub struct Circle;
impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

pub struct Square;
impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

pub struct Rectangle;
impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create(kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Square => Box::new(Square),
            ShapeKind::Rectangle => Box::new(Rectangle),
        }
    }

    /// Parse the tag and build in one step.
    pub fn create_named(name: &str) -> Result<Box<dyn Shape>, FactoryError> {
        Ok(Self::create(name.parse()?))
    }
}

// ============================================================================
// Enum dispatch: no allocation, no vtable
// ============================================================================

pub enum AnyShape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
}

impl AnyShape {
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => AnyShape::Circle(Circle),
            ShapeKind::Square => AnyShape::Square(Square),
            ShapeKind::Rectangle => AnyShape::Rectangle(Rectangle),
        }
    }

    pub fn draw(&self) -> String {
        match self {
            AnyShape::Circle(shape) => shape.draw(),
            AnyShape::Square(shape) => shape.draw(),
            AnyShape::Rectangle(shape) => shape.draw(),
        }
    }
}
