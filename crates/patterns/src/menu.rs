//! Pattern menu — maps a digit to one of the six examples.

use std::str::FromStr;

use homedemo_app::ports::Console;
use homedemo_app::session::{CommandHandler, Flow};

use crate::adapter::{OldPrinter, Printer, PrinterAdapter};
use crate::decorator::{BasicNotifier, EmailNotifier, Notifier};
use crate::error::PatternError;
use crate::factory::ShapeFactory;
use crate::observer::{ChatRoom, User};
use crate::singleton::ConfigSlot;
use crate::strategy::{CardPayment, PaymentContext};

/// Menu line listing every option.
pub const PATTERN_MENU: &str = "Choose option: 1-Strategy, 2-Observer, 3-Singleton, 4-Factory, 5-Adapter, 6-Decorator, 0-Exit";

/// A menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Strategy,
    Observer,
    Singleton,
    Factory,
    Adapter,
    Decorator,
}

impl FromStr for Selection {
    type Err = PatternError;

    /// Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Exit),
            "1" => Ok(Self::Strategy),
            "2" => Ok(Self::Observer),
            "3" => Ok(Self::Singleton),
            "4" => Ok(Self::Factory),
            "5" => Ok(Self::Adapter),
            "6" => Ok(Self::Decorator),
            other => Err(PatternError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }
}

/// Dispatcher behind the pattern menu.
///
/// Each option builds its object graph afresh, except the singleton, whose
/// instance is owned by the menu and reused for its whole lifetime.
pub struct PatternMenu<C> {
    console: C,
    config: ConfigSlot,
}

impl<C: Console> PatternMenu<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            config: ConfigSlot::default(),
        }
    }

    /// The menu's config slot.
    #[must_use]
    pub fn config(&self) -> &ConfigSlot {
        &self.config
    }

    /// Run the example behind `selection`.
    ///
    /// Returns [`Flow::Exit`] for [`Selection::Exit`].
    #[tracing::instrument(skip(self))]
    pub fn run(&self, selection: Selection) -> Flow {
        let console: &dyn Console = &self.console;
        match selection {
            Selection::Exit => return Flow::Exit,
            Selection::Strategy => {
                PaymentContext::new(Box::new(CardPayment)).execute(100, console);
            }
            Selection::Observer => {
                let mut room = ChatRoom::default();
                room.add_user(Box::new(User::new("Alice")));
                room.add_user(Box::new(User::new("Bob")));
                room.notify("Hello!", console);
            }
            Selection::Singleton => console.info(&self.config.instance().app_name),
            Selection::Factory => {
                if let Some(shape) = ShapeFactory::create("circle") {
                    shape.draw(console);
                }
            }
            Selection::Adapter => PrinterAdapter::new(OldPrinter).print("Adapted Print", console),
            Selection::Decorator => EmailNotifier::new(BasicNotifier).send("Hi there", console),
        }
        Flow::Continue
    }
}

impl<C: Console> CommandHandler for PatternMenu<C> {
    type Error = PatternError;

    fn menu(&self) -> &str {
        PATTERN_MENU
    }

    fn handle(&mut self, line: &str) -> Result<Flow, PatternError> {
        let selection = line.parse()?;
        Ok(self.run(selection))
    }
}
