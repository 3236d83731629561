// Builder Pattern - a house assembled step by step.
// Steps are optional; an unset step leaves its field empty. The director
// owns a builder and runs the canned recipes on it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    pub stories: Option<u32>,
    pub door_type: Option<String>,
    pub roof_type: Option<String>,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }
}

#[derive(Debug, Default, Clone)]
pub struct HouseBuilder {
    stories: Option<u32>,
    door_type: Option<String>,
    roof_type: Option<String>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stories(mut self, stories: u32) -> Self {
        self.stories = Some(stories);
        self
    }

    pub fn door_type(mut self, door_type: impl Into<String>) -> Self {
        self.door_type = Some(door_type.into());
        self
    }

    pub fn roof_type(mut self, roof_type: impl Into<String>) -> Self {
        self.roof_type = Some(roof_type.into());
        self
    }

    #[must_use]
    pub fn build(self) -> House {
        House {
            stories: self.stories,
            door_type: self.door_type,
            roof_type: self.roof_type,
        }
    }
}

pub struct Director {
    builder: HouseBuilder,
}

impl Director {
    pub fn new(builder: HouseBuilder) -> Self {
        Self { builder }
    }

    /// Each recipe starts from a copy of the director's builder, so steps it
    /// does not set keep the builder's values.
    pub fn one_story_house(&self) -> House {
        self.builder
            .clone()
            .stories(2)
            .door_type("Black")
            .roof_type("Pointy")
            .build()
    }

    pub fn two_story_house(&self) -> House {
        self.builder
            .clone()
            .stories(3)
            .door_type("White")
            .roof_type("Flat")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builder_defaults() {
        let house = House::builder().build();
        assert_eq!(house.stories, None);
        assert_eq!(house.door_type, None);
        assert_eq!(house.roof_type, None);
    }

    #[test]
    fn test_step_by_step() {
        let step1 = HouseBuilder::new().stories(2);
        let step2 = step1.door_type("Black");
        let house = step2.roof_type("Pointy").build();

        let director = Director::new(HouseBuilder::new());
        assert_eq!(house, director.one_story_house());
    }

    #[test]
    fn test_director_recipes() {
        let director = Director::new(House::builder());

        let first = director.one_story_house();
        assert_eq!(first.stories, Some(2));
        assert_eq!(first.door_type.as_deref(), Some("Black"));
        assert_eq!(first.roof_type.as_deref(), Some("Pointy"));

        let second = director.two_story_house();
        assert_eq!(second.stories, Some(3));
        assert_eq!(second.door_type.as_deref(), Some("White"));
        assert_eq!(second.roof_type.as_deref(), Some("Flat"));

        // The same director can run a recipe again.
        assert_eq!(director.one_story_house(), first);
    }

    #[test]
    fn test_director_recipe_overrides_builder() {
        let preset = House::builder().stories(7).roof_type("Dome");
        let house = Director::new(preset).two_story_house();
        assert_eq!(house.stories, Some(3));
        assert_eq!(house.roof_type.as_deref(), Some("Flat"));
    }

    proptest! {
        #[test]
        fn test_fields_carried_over(
            stories in 1u32..100,
            door in "[A-Za-z]{1,10}",
            roof in "[A-Za-z]{1,10}",
        ) {
            let house = House::builder()
                .roof_type(roof.clone())
                .stories(stories)
                .door_type(door.clone())
                .build();

            prop_assert_eq!(house.stories, Some(stories));
            prop_assert_eq!(house.door_type, Some(door));
            prop_assert_eq!(house.roof_type, Some(roof));
        }

        #[test]
        fn test_last_write_wins(first in 1u32..10, second in 10u32..20) {
            let house = House::builder().stories(first).stories(second).build();
            prop_assert_eq!(house.stories, Some(second));
        }
    }
}
