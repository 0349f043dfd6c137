//! Output formatting for the CLI.

use console::style;
use rocket_commerce::{Cart, CartError, Currency, Money};
use rocket_store::NotificationSink;
use serde::Serialize;
use serde_json::json;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print the cart as a table, or as JSON in JSON mode.
    pub fn cart(&self, cart: &Cart, currency: Currency) -> Result<(), CartError> {
        let total = cart.total(currency)?;

        if self.json {
            self.json(&CartView {
                items: cart,
                item_count: cart.item_count(),
                total: total.to_decimal(),
                currency: currency.code(),
            });
            return Ok(());
        }

        if cart.is_empty() {
            self.info("Cart is empty");
            return Ok(());
        }

        let widths = [6, 32, 6, 12, 12];
        self.table_row(&["ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"], &widths);
        for item in cart.items() {
            let id = item.id().to_string();
            let price = item.product.unit_price(currency).display();
            let subtotal = item.subtotal(currency)?.display();
            let amount = item.amount.to_string();
            let name = item.product.display_name();
            self.table_row(
                &[&id, &name, &amount, &price, &subtotal],
                &widths,
            );
        }

        println!();
        self.kv("items", &cart.item_count().to_string());
        self.kv("total", &style(total.display()).bold().to_string());
        Ok(())
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

impl NotificationSink for Output {
    fn notify_error(&self, message: &str) {
        self.error(message);
    }
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a Cart,
    item_count: u64,
    total: f64,
    currency: &'static str,
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = *width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Shorten `s` to at most `width` characters, marking the cut with `…`.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Total formatted for a one-line status message.
pub fn summary(cart: &Cart, currency: Currency) -> String {
    let total = cart
        .total(currency)
        .map(|m| m.display())
        .unwrap_or_else(|_| Money::zero(currency).display());
    format!("{} item(s), {}", cart.item_count(), total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket_commerce::catalog::Product;
    use rocket_commerce::ProductId;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tênis", 10), "Tênis");
        assert_eq!(truncate("Tênis de Caminhada", 8), "Tênis d…");
    }

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["1", "ab"], &[3, 2]), "1    ab");
    }

    #[test]
    fn test_summary() {
        let cart = Cart::new()
            .with_new_item(Product::new(ProductId::new(1), "Tênis", 139.9, "a.jpg"))
            .and_then(|c| c.with_incremented(ProductId::new(1)))
            .unwrap();

        assert_eq!(summary(&cart, Currency::BRL), "2 item(s), R$279.80");
        assert_eq!(summary(&Cart::new(), Currency::USD), "0 item(s), $0.00");
    }
}
