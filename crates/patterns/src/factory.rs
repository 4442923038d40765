//! Factory — shapes are built from a name without the caller naming a type.

use homedemo_app::ports::Console;

pub trait Shape {
    fn draw(&self, console: &dyn Console);
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, console: &dyn Console) {
        console.info("Drawing Circle");
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self, console: &dyn Console) {
        console.info("Drawing Square");
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    /// Build the shape called `kind` (`circle` or `square`).
    #[must_use]
    pub fn create(kind: &str) -> Option<Box<dyn Shape>> {
        match kind {
            "circle" => Some(Box::new(Circle)),
            "square" => Some(Box::new(Square)),
            _ => None,
        }
    }
}
