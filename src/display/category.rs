//! Category display formatting

use crate::models::TransactionKind;

/// Format category names grouped under their kind heading
pub fn format_category_list(groups: &[(TransactionKind, Vec<String>)]) -> String {
    let mut output = String::new();

    for (kind, names) in groups {
        output.push_str(&format!("{}\n", kind.plural().to_uppercase()));
        if names.is_empty() {
            output.push_str("  (no categories)\n");
        }
        for name in names {
            output.push_str(&format!("  {}\n", name));
        }
        output.push('\n');
    }

    output
}
