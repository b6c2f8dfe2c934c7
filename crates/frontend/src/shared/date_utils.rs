/// Record dates are shown as DD/MM/YYYY; a missing date as "-".
pub fn format_naive_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_naive_date() {
        assert_eq!(
            format_naive_date(chrono::NaiveDate::from_ymd_opt(2025, 5, 26)),
            "26/05/2025"
        );
        assert_eq!(
            format_naive_date(chrono::NaiveDate::from_ymd_opt(2025, 1, 2)),
            "02/01/2025"
        );
        assert_eq!(format_naive_date(None), "-");
    }
}
