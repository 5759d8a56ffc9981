use thiserror::Error;

use crate::model::{AnswerValue, Breakdown, Category};

pub mod registry;

use registry::{FieldDef, FieldKind, SCALE_LEVELS, fields_for, fields_for_name};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("malformed answer `{0}`: expected key=value")]
    Malformed(String),
    #[error("unknown field `{key}` for category {category}")]
    UnknownField { key: String, category: Category },
    #[error("invalid value `{value}` for `{key}`: expected a rating between 1 and 4")]
    InvalidScale { key: String, value: String },
    #[error("invalid value `{value}` for `{key}`: expected yes/no")]
    InvalidFlag { key: String, value: String },
}

pub fn parse_answer_args(args: &[String]) -> Result<Vec<(String, String)>, FormError> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(FormError::Malformed(arg.clone()));
        };
        out.push((key.trim().to_string(), value.trim().to_string()));
    }
    Ok(out)
}

/// Reads collected answers into a breakdown payload for one category.
///
/// Every schema field is present in the result: unanswered checkboxes read as
/// false and an unanswered scale reads as 0. Keys outside the category's
/// schema are rejected.
pub fn collect_breakdown(
    category: Category,
    answers: &[(String, String)],
) -> Result<Breakdown, FormError> {
    let fields = fields_for(category);
    let mut breakdown = Breakdown::new();
    for field in fields {
        let unanswered = match field.kind {
            FieldKind::Checkbox => AnswerValue::Flag(false),
            FieldKind::Scale => AnswerValue::Scale(0),
        };
        breakdown.insert(field.key.to_string(), unanswered);
    }

    for (key, value) in answers {
        let Some(field) = fields.iter().find(|f| f.key == key) else {
            return Err(FormError::UnknownField {
                key: key.clone(),
                category,
            });
        };
        breakdown.insert(key.clone(), read_answer(field, value)?);
    }

    Ok(breakdown)
}

fn read_answer(field: &FieldDef, value: &str) -> Result<AnswerValue, FormError> {
    match field.kind {
        FieldKind::Scale => {
            if value.is_empty() {
                return Ok(AnswerValue::Scale(0));
            }
            match value.parse::<u8>() {
                Ok(rating) if (1..=4).contains(&rating) => Ok(AnswerValue::Scale(rating)),
                _ => Err(FormError::InvalidScale {
                    key: field.key.to_string(),
                    value: value.to_string(),
                }),
            }
        }
        FieldKind::Checkbox => match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(AnswerValue::Flag(true)),
            "false" | "no" | "n" | "0" | "" => Ok(AnswerValue::Flag(false)),
            _ => Err(FormError::InvalidFlag {
                key: field.key.to_string(),
                value: value.to_string(),
            }),
        },
    }
}

/// Blank-form view for a category name. An unknown name renders as an empty
/// string, the cleared state of the form region.
pub fn render_form_named(name: &str) -> String {
    let fields = fields_for_name(name);
    if fields.is_empty() {
        return String::new();
    }
    let title = match name.parse::<Category>() {
        Ok(category) => format!("{} Scorecard", category.label()),
        Err(_) => return String::new(),
    };
    render_fields(&title, fields)
}

fn render_fields(title: &str, fields: &[FieldDef]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n");

    let key_width = fields.iter().map(|f| f.key.len()).max().unwrap_or(0);

    let mut section = None;
    for field in fields {
        if section != Some(field.section) {
            section = Some(field.section);
            out.push('\n');
            out.push_str(field.section.label());
            if field.section == registry::Section::Metrics {
                let legend = SCALE_LEVELS
                    .iter()
                    .enumerate()
                    .map(|(i, level)| format!("{}={}", i + 1, level))
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str(&format!(" (rate {legend})"));
            }
            out.push('\n');
        }
        let marker = match field.kind {
            FieldKind::Checkbox => "[ ]",
            FieldKind::Scale => "1-4",
        };
        out.push_str(&format!(
            "  {marker} {:key_width$}  {}\n",
            field.key, field.label
        ));
    }

    out
}
