//! Adapter — a legacy printer exposed through the modern `Printer` trait.

use homedemo_app::ports::Console;

/// Legacy API with its own method name.
pub struct OldPrinter;

impl OldPrinter {
    pub fn old_print(&self, text: &str, console: &dyn Console) {
        console.info(&format!("OldPrinter: {text}"));
    }
}

pub trait Printer {
    fn print(&self, text: &str, console: &dyn Console);
}

pub struct PrinterAdapter {
    old_printer: OldPrinter,
}

impl PrinterAdapter {
    #[must_use]
    pub fn new(old_printer: OldPrinter) -> Self {
        Self { old_printer }
    }
}

impl Printer for PrinterAdapter {
    fn print(&self, text: &str, console: &dyn Console) {
        self.old_printer.old_print(text, console);
    }
}
