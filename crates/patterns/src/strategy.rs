//! Strategy — the payment method is chosen at construction and swapped freely.

use homedemo_app::ports::Console;

/// A way of paying an amount.
pub trait PaymentStrategy {
    fn pay(&self, amount: u32, console: &dyn Console);
}

pub struct CardPayment;

impl PaymentStrategy for CardPayment {
    fn pay(&self, amount: u32, console: &dyn Console) {
        console.info(&format!("Paid {amount} using Card."));
    }
}

pub struct UpiPayment;

impl PaymentStrategy for UpiPayment {
    fn pay(&self, amount: u32, console: &dyn Console) {
        console.info(&format!("Paid {amount} using UPI."));
    }
}

/// Executes payments through whichever strategy it was built with.
pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    #[must_use]
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn execute(&self, amount: u32, console: &dyn Console) {
        self.strategy.pay(amount, console);
    }
}
