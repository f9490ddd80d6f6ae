//! Split statistics table.

use crate::registry::{DatasetInfo, SplitInfo};
use crate::utils::format_thousands;

/// Rendered in place of the table when statistics were never computed.
pub const NOT_COMPUTED: &str = "None computed";

/// Render example counts per split, largest first, headed by an `ALL` row.
///
/// Rows with equal counts keep their input order, so `ALL` precedes any split
/// holding every example.
pub fn render_statistics(splits: &[SplitInfo], total: Option<u64>) -> String {
    let total = match total {
        Some(t) if t > 0 => t,
        _ => return NOT_COMPUTED.to_owned(),
    };

    let mut stats: Vec<(String, u64)> = Vec::with_capacity(splits.len() + 1);
    stats.push(("ALL".to_owned(), total));
    stats.extend(
        splits
            .iter()
            .map(|s| (s.name.to_uppercase(), s.num_examples)),
    );
    // sort_by is stable
    stats.sort_by(|a, b| b.1.cmp(&a.1));

    let rows: Vec<String> = stats
        .iter()
        .map(|(name, count)| format!("{name:<10} | {:>10}", format_thousands(*count)))
        .collect();

    format!("Split  | Examples\n:----- | ---:\n{}\n", rows.join("\n"))
}

/// Statistics section for a resolved info record.
pub fn statistics_information(info: &DatasetInfo) -> String {
    render_statistics(&info.splits, Some(info.total_num_examples()))
}
