//! Drink types and the categories used for breakdowns and package coverage.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every drink the calculator knows how to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    Soda,
    SpecialtyCoffee,
    PremiumTea,
    FreshJuice,
    Mocktail,
    EnergyDrink,
    Milkshake,
    BottledWater,
    Beer,
    Wine,
    Cocktail,
    Spirits,
}

/// Display bucket for the "where is your money going" aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkCategory {
    Soda,
    Coffee,
    Water,
    Juice,
    Alcohol,
    Other,
}

impl DrinkType {
    pub const COUNT: usize = 12;

    /// All drink types in catalog order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Soda,
        Self::SpecialtyCoffee,
        Self::PremiumTea,
        Self::FreshJuice,
        Self::Mocktail,
        Self::EnergyDrink,
        Self::Milkshake,
        Self::BottledWater,
        Self::Beer,
        Self::Wine,
        Self::Cocktail,
        Self::Spirits,
    ];

    /// Position of this drink in [`DrinkType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_alcoholic(self) -> bool {
        matches!(self, Self::Beer | Self::Wine | Self::Cocktail | Self::Spirits)
    }

    #[must_use]
    pub const fn category(self) -> DrinkCategory {
        match self {
            Self::Soda => DrinkCategory::Soda,
            Self::SpecialtyCoffee | Self::PremiumTea => DrinkCategory::Coffee,
            Self::BottledWater => DrinkCategory::Water,
            Self::FreshJuice => DrinkCategory::Juice,
            Self::Beer | Self::Wine | Self::Cocktail | Self::Spirits => DrinkCategory::Alcohol,
            Self::Mocktail | Self::EnergyDrink | Self::Milkshake => DrinkCategory::Other,
        }
    }

    /// Stable identifier used in input documents and the pricing file.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Soda => "soda",
            Self::SpecialtyCoffee => "specialty_coffee",
            Self::PremiumTea => "premium_tea",
            Self::FreshJuice => "fresh_juice",
            Self::Mocktail => "mocktail",
            Self::EnergyDrink => "energy_drink",
            Self::Milkshake => "milkshake",
            Self::BottledWater => "bottled_water",
            Self::Beer => "beer",
            Self::Wine => "wine",
            Self::Cocktail => "cocktail",
            Self::Spirits => "spirits",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DrinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|drink| drink.id() == key)
            .ok_or_else(|| format!("unknown drink type: {s}"))
    }
}

impl DrinkCategory {
    pub const ALL: [Self; 6] = [
        Self::Soda,
        Self::Coffee,
        Self::Water,
        Self::Juice,
        Self::Alcohol,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Soda => "Soda",
            Self::Coffee => "Coffee & tea",
            Self::Water => "Water",
            Self::Juice => "Juice",
            Self::Alcohol => "Alcohol",
            Self::Other => "Other",
        }
    }
}
