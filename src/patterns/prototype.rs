// Prototype Pattern - the copy operation lives on the type, so private fields
// come along without the caller reaching into them.

pub trait Prototype {
    fn clone_prototype(&self) -> Self;
}

#[derive(Debug, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub age: u32,
    roll_number: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32, roll_number: u32) -> Self {
        Self {
            name: name.into(),
            age,
            roll_number,
        }
    }

    pub fn roll_number(&self) -> u32 {
        self.roll_number
    }
}

impl Prototype for Student {
    fn clone_prototype(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            roll_number: self.roll_number,
        }
    }
}
