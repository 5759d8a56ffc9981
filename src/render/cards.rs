use crate::model::Product;
use crate::render::format_date_raw;

/// Product card list in insertion order.
pub fn render_product_cards(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("#{} {}\n", product.id, product.name));
        if let Some(description) = &product.description {
            if !description.is_empty() {
                out.push_str(&format!("  {description}\n"));
            }
        }
        if let Some(created_at) = &product.created_at {
            out.push_str(&format!("  Created: {}\n", format_date_raw(created_at)));
        }
    }
    out
}
