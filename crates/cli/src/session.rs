//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockroom_infra::InventorySource;
use stockroom_inventory::Inventory;

use crate::console::Console;
use crate::menu::{MenuChoice, MenuState};
use crate::operations;

/// One user's session: the inventory it owns, the backing source and the terminal.
pub struct Session<S, R, W> {
    inventory: Inventory,
    source: S,
    console: Console<R, W>,
}

impl<S, R, W> Session<S, R, W>
where
    S: InventorySource,
    R: BufRead,
    W: Write,
{
    /// Start with an empty inventory; nothing is read until the user asks.
    pub fn new(source: S, console: Console<R, W>) -> Self {
        Self {
            inventory: Inventory::new(),
            source,
            console,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = MenuState::AwaitingChoice;
        while state == MenuState::AwaitingChoice {
            state = self.step()?;
        }
        Ok(())
    }

    /// Show the menu once, read a choice and act on it.
    pub fn step(&mut self) -> io::Result<MenuState> {
        self.print_menu()?;
        let Some(line) = self.console.prompt("Enter your choice (1-8): ")? else {
            debug!("input closed, leaving menu");
            return Ok(MenuState::Exited);
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                self.console.say("Exiting the program. Goodbye!")?;
                Ok(MenuState::Exited)
            }
            Ok(choice) => {
                debug!(?choice, "menu choice");
                self.dispatch(choice)?;
                Ok(MenuState::AwaitingChoice)
            }
            Err(_) => {
                self.console
                    .say("Invalid choice. Please enter a number between 1 and 8.")?;
                Ok(MenuState::AwaitingChoice)
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.say("\nShoe Inventory Management System")?;
        for choice in MenuChoice::ALL {
            self.console
                .say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        let Self {
            inventory,
            source,
            console,
        } = self;

        match choice {
            MenuChoice::ReadFile => operations::read_file(inventory, source, console),
            MenuChoice::Capture => operations::capture(inventory, console),
            MenuChoice::ViewAll => operations::view_all(inventory, console),
            MenuChoice::Restock => operations::restock(inventory, source, console),
            MenuChoice::Search => operations::search(inventory, console),
            MenuChoice::ValuePerItem => operations::value_per_item(inventory, console),
            MenuChoice::HighestQuantity => operations::highest_quantity(inventory, console),
            MenuChoice::Exit => Ok(()),
        }
    }
}
