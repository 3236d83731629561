// Abstract Factory Pattern - a factory of factories.
// `CarTypeFactory` picks the factory for a car type; that factory builds the
// cars of its own line. Any other company is unknown to it.

use crate::error::FactoryError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Suv,
    Sedan,
}

impl FromStr for CarType {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUV" => Ok(CarType::Suv),
            "Sedan" => Ok(CarType::Sedan),
            other => Err(FactoryError::UnknownCarType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    RangeRover,
    Volvo,
    Benz,
    Audi,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Company::RangeRover => "RangeRover",
            Company::Volvo => "Volvo",
            Company::Benz => "Benz",
            Company::Audi => "Audi",
        };
        f.write_str(name)
    }
}

impl FromStr for Company {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RangeRover" => Ok(Company::RangeRover),
            "Volvo" => Ok(Company::Volvo),
            "Benz" => Ok(Company::Benz),
            "Audi" => Ok(Company::Audi),
            other => Err(FactoryError::UnknownCompany(other.to_string())),
        }
    }
}

pub trait Car {
    fn display(&self) -> String;
}

pub struct SuvCar {
    company: Company,
}

impl Car for SuvCar {
    fn display(&self) -> String {
        format!("This is a {} SUV", self.company)
    }
}

pub struct SedanCar {
    company: Company,
}

impl Car for SedanCar {
    fn display(&self) -> String {
        format!("This is a {} Sedan", self.company)
    }
}

pub trait CarFactory {
    fn name(&self) -> &'static str;
    fn create_car(&self, company: Company) -> Result<Box<dyn Car>, FactoryError>;
}

pub struct SuvFactory;

impl CarFactory for SuvFactory {
    fn name(&self) -> &'static str {
        "SUV"
    }

    fn create_car(&self, company: Company) -> Result<Box<dyn Car>, FactoryError> {
        match company {
            Company::RangeRover | Company::Volvo => Ok(Box::new(SuvCar { company })),
            other => Err(FactoryError::UnknownCompany(other.to_string())),
        }
    }
}

pub struct SedanFactory;

impl CarFactory for SedanFactory {
    fn name(&self) -> &'static str {
        "Sedan"
    }

    fn create_car(&self, company: Company) -> Result<Box<dyn Car>, FactoryError> {
        match company {
            Company::Benz | Company::Audi => Ok(Box::new(SedanCar { company })),
            other => Err(FactoryError::UnknownCompany(other.to_string())),
        }
    }
}

pub struct CarTypeFactory;

impl CarTypeFactory {
    pub fn for_type(car_type: CarType) -> Box<dyn CarFactory> {
        match car_type {
            CarType::Suv => Box::new(SuvFactory),
            CarType::Sedan => Box::new(SedanFactory),
        }
    }

    /// Both tags as strings, e.g. `("SUV", "RangeRover")`.
    pub fn order(car_type: &str, company: &str) -> Result<Box<dyn Car>, FactoryError> {
        Self::for_type(car_type.parse()?).create_car(company.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suv_line() {
        let factory = CarTypeFactory::for_type(CarType::Suv);
        assert_eq!(factory.name(), "SUV");
        assert_eq!(
            factory.create_car(Company::RangeRover).unwrap().display(),
            "This is a RangeRover SUV"
        );
        assert_eq!(
            factory.create_car(Company::Volvo).unwrap().display(),
            "This is a Volvo SUV"
        );
    }

    #[test]
    fn test_sedan_line() {
        let car = CarTypeFactory::order("Sedan", "Audi").unwrap();
        assert_eq!(car.display(), "This is a Audi Sedan");
    }

    #[test]
    fn test_company_outside_line() {
        let err = CarTypeFactory::for_type(CarType::Suv)
            .create_car(Company::Benz)
            .err()
            .unwrap();
        assert_eq!(err, FactoryError::UnknownCompany("Benz".to_string()));

        assert_eq!(
            CarTypeFactory::order("Sedan", "Volvo").err(),
            Some(FactoryError::UnknownCompany("Volvo".to_string()))
        );
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(
            CarTypeFactory::order("Truck", "Volvo").err(),
            Some(FactoryError::UnknownCarType("Truck".to_string()))
        );
        assert_eq!(
            CarTypeFactory::order("SUV", "Tesla").err(),
            Some(FactoryError::UnknownCompany("Tesla".to_string()))
        );
    }
}
