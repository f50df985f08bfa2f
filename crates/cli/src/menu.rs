//! Main menu choices and loop states.

use core::str::FromStr;

/// One entry of the numbered main menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    ReadFile,
    Capture,
    ViewAll,
    Restock,
    Search,
    ValuePerItem,
    HighestQuantity,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ReadFile,
        MenuChoice::Capture,
        MenuChoice::ViewAll,
        MenuChoice::Restock,
        MenuChoice::Search,
        MenuChoice::ValuePerItem,
        MenuChoice::HighestQuantity,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ReadFile => 1,
            MenuChoice::Capture => 2,
            MenuChoice::ViewAll => 3,
            MenuChoice::Restock => 4,
            MenuChoice::Search => 5,
            MenuChoice::ValuePerItem => 6,
            MenuChoice::HighestQuantity => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ReadFile => "Read shoes data from file",
            MenuChoice::Capture => "Capture new shoe data",
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::Restock => "Restock the lowest quantity shoe",
            MenuChoice::Search => "Search for a shoe by code",
            MenuChoice::ValuePerItem => "Calculate value per item",
            MenuChoice::HighestQuantity => "Find the shoe with the highest quantity",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Input that is not one of the menu numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| s == choice.number().to_string())
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// Menu loop state. `Exited` is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Exited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_choices_in_order() {
        for (idx, choice) in MenuChoice::ALL.into_iter().enumerate() {
            assert_eq!(choice.number() as usize, idx + 1);
            assert_eq!((idx + 1).to_string().parse::<MenuChoice>(), Ok(choice));
        }
    }

    #[test]
    fn anything_else_is_unknown() {
        for raw in ["0", "9", "", "exit", "1.0", "01"] {
            assert!(raw.parse::<MenuChoice>().is_err(), "{raw:?} should be rejected");
        }
    }
}
