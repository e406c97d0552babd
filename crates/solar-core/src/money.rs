//! Rupee amount formatting

/// Format a whole-rupee amount. With `grouped` the digits use Indian
/// grouping: the last three together, then pairs (`₹1,00,000`).
pub fn format_rupees(amount: u64, grouped: bool) -> String {
    let digits = amount.to_string();
    if !grouped || digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
