//! Cart summary table.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::domain::carts::models::Cart;

/// Writes the cart as a table of lines followed by the unit count and total.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_to(mut out: impl io::Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Carrinho vazio");
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Produto", "Preço", "Qtd", "Subtotal"]);

    for product in cart {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            format_brl(product.price),
            product.amount.to_string(),
            format_brl(product.subtotal()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Itens: {}", cart.item_count())?;
    writeln!(out, "Total: {}", format_brl(cart.total()))
}

fn format_brl(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::BRL).to_string()
}
