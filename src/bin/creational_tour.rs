//! Creational Patterns: factory, abstract factory, builder, prototype, and
//! the threading work units
//!
//! Run with: cargo run --bin creational_tour

use creational_patterns::logging;
use creational_patterns::patterns::abstract_factory::{CarType, CarTypeFactory, Company};
use creational_patterns::patterns::builder::{Director, House};
use creational_patterns::patterns::factory::{AnyShape, ShapeFactory, ShapeKind};
use creational_patterns::patterns::prototype::{Prototype, Student};
use creational_patterns::workers::{self, Greeter};
use std::time::Duration;

fn factory_example() {
    for name in ["Circle", "Square", "Rectangle", "Triangle"] {
        match ShapeFactory::create_named(name) {
            Ok(shape) => println!("  {}", shape.draw()),
            Err(err) => println!("  {}", err),
        }
    }
    println!("  Enum-based factory: {}", AnyShape::new(ShapeKind::Circle).draw());
}

fn abstract_factory_example() {
    let suv = CarTypeFactory::for_type(CarType::Suv);
    println!("  Ordering from the {} factory", suv.name());
    for company in [Company::RangeRover, Company::Audi] {
        match suv.create_car(company) {
            Ok(car) => println!("  {}", car.display()),
            Err(err) => println!("  {}", err),
        }
    }
    match CarTypeFactory::order("Sedan", "Audi") {
        Ok(car) => println!("  {}", car.display()),
        Err(err) => println!("  {}", err),
    }
}

fn builder_example() {
    let custom = House::builder().stories(2).door_type("Black").build();
    println!("  Custom house: {:?}", custom);
    let director = Director::new(House::builder());
    println!("  One story recipe: {:?}", director.one_story_house());
    println!("  Two story recipe: {:?}", director.two_story_house());
}

fn prototype_example() {
    let original = Student::new("John", 23, 1);
    let clone1 = original.clone_prototype();
    let clone3 = clone1.clone_prototype();
    println!("  Original: {:?}", original);
    println!("  Clone of clone: {:?}", clone3);
    println!("  Roll number carried over: {}", clone3.roll_number());
}

fn greeters() -> Vec<Greeter> {
    vec![
        Greeter::new("Thread1", "Hello")
            .repeats(3)
            .pause(Duration::from_millis(100)),
        Greeter::new("Thread2", "Hi")
            .repeats(3)
            .pause(Duration::from_millis(100)),
    ]
}

fn workers_example() -> std::io::Result<()> {
    println!("  -- without a lock --");
    workers::run_interleaved(greeters())?;
    println!("  -- with a shared lock --");
    workers::run_serialized(greeters())?;
    Ok(())
}

fn main() {
    logging::init(log::LevelFilter::Warn);

    println!("Creational Patterns Tour");
    println!("========================\n");

    println!("=== Factory Pattern ===");
    factory_example();
    println!();

    println!("=== Abstract Factory Pattern ===");
    abstract_factory_example();
    println!();

    println!("=== Builder Pattern ===");
    builder_example();
    println!();

    println!("=== Prototype Pattern ===");
    prototype_example();
    println!();

    println!("=== Work Units ===");
    if let Err(err) = workers_example() {
        log::error!("failed to start worker thread: {}", err);
    }
}
