//! Cart table rendering.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::domain::cart::models::Cart;

impl Cart {
    /// Writes the cart lines as a table followed by the totals line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Carrinho vazio");
        }

        let mut builder = Builder::default();

        builder.push_record(["Id", "Produto", "Preço", "Qtd", "Subtotal"]);

        for item in self {
            builder.push_record([
                item.id.to_string(),
                item.title.clone(),
                format_price(item.price),
                item.amount.to_string(),
                format_amount(item.subtotal()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(
            out,
            "Itens: {}  Total: {}",
            self.items_count(),
            format_amount(self.total())
        )
    }
}

const OVERFLOW_PLACEHOLDER: &str = "R$ ---";

/// Brazilian real, two decimals with a comma separator.
fn format_price(price: Decimal) -> String {
    format!("R$ {:.2}", price.round_dp(2)).replace('.', ",")
}

fn format_amount(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| OVERFLOW_PLACEHOLDER.to_owned(), format_price)
}
