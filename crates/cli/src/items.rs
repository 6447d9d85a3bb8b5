//! `--item ID=QTY` argument parsing.

use apa_core::{ProductId, Quantity};

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Parse `ID=QTY`, or a bare `ID` meaning one unit.
///
/// # Errors
///
/// Returns a message if the ID is blank or the quantity is not a positive
/// integer.
pub fn parse_item(arg: &str) -> Result<ItemArg, String> {
    let (id, quantity) = match arg.split_once('=') {
        Some((id, qty)) => {
            let qty: i64 = qty
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity in '{arg}'"))?;
            let quantity = Quantity::try_from(qty).map_err(|e| e.to_string())?;
            (id, quantity)
        }
        None => (arg, Quantity::ONE),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing product id in '{arg}'"));
    }

    Ok(ItemArg {
        product_id: ProductId::new(id),
        quantity,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_quantity() {
        let item = parse_item("3=4").unwrap();
        assert_eq!(item.product_id, ProductId::new("3"));
        assert_eq!(item.quantity.get(), 4);
    }

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(parse_item(" 12 ").unwrap().quantity, Quantity::ONE);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_item("=2").is_err());
        assert!(parse_item("3=0").is_err());
        assert!(parse_item("3=-1").is_err());
        assert!(parse_item("3=dos").is_err());
    }
}
