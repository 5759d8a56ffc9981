use crate::model::{Product, Scorecard};
use crate::render::{format_date, score_badge};

const HEADERS: [&str; 5] = ["Product", "Date", "Category", "Score", "Export"];

/// Scorecard table view. Product names come from the scorecard row when the
/// backend embeds one, else from the cached product list, else a placeholder.
pub fn render_scorecard_table(scorecards: &[Scorecard], products: &[Product]) -> String {
    if scorecards.is_empty() {
        return "No scorecards found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = scorecards
        .iter()
        .map(|card| {
            let product = card
                .product_name
                .clone()
                .or_else(|| {
                    products
                        .iter()
                        .find(|p| p.id == card.product_id)
                        .map(|p| p.name.clone())
                })
                .unwrap_or_else(|| format!("product #{}", card.product_id));
            [
                product,
                format_date(card.date),
                card.category.label().to_string(),
                score_badge(card.score),
                format!("pdf #{}", card.id),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    for card in scorecards {
        if card.feedback.is_none() && card.tool_suggestions.is_none() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("Notes for scorecard #{}:\n", card.id));
        if let Some(feedback) = &card.feedback {
            out.push_str(&format!("  Feedback: {feedback}\n"));
        }
        if let Some(tools) = &card.tool_suggestions {
            out.push_str(&format!("  Suggested tools: {tools}\n"));
        }
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
