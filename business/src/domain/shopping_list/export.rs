use super::model::{PriceItem, ShoppingList};

const HEADERS: [&str; 5] = ["Name", "Price", "Quantity", "Total", "Date"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a list as comma-separated, double-quoted rows with a header row.
///
/// Dates are written as `YYYY-MM-DD` in UTC so the output does not depend on
/// the locale of the machine producing it.
pub fn to_delimited_text(list: &ShoppingList) -> String {
    std::iter::once(HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>())
        .chain(list.items.iter().map(item_row))
        .map(|row| {
            row.iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn item_row(item: &PriceItem) -> Vec<String> {
    vec![
        item.name.clone(),
        item.price.to_string(),
        item.quantity.to_string(),
        item.total.to_string(),
        item.created_at.format(DATE_FORMAT).to_string(),
    ]
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
