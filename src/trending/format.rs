/// Format a count for compact display.
///
/// Values of 1000 and above are shown in thousands with one decimal digit
/// (`2175` -> `"2.2K"`); smaller values are shown as plain integers.
/// Ties round half-up: `1250` -> `"1.3K"`.
///
/// # Examples
///
/// ```
/// use agora::trending::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1000), "1.0K");
/// assert_eq!(format_count(15_430), "15.4K");
/// ```
pub fn format_count(n: u64) -> String {
    if n >= 1000 {
        let tenths = n / 100 + u64::from(n % 100 >= 50);
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        n.to_string()
    }
}
