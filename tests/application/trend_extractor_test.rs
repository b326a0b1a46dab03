use docsight::application::services::extract_statistical_insights;

#[test]
fn given_strictly_increasing_column_when_extracting_then_reports_consistent_increase() {
    let text = "Annual figures\nYear    Revenue    Expenses\n2021    100    80\n2022    150    70\n";

    let insights = extract_statistical_insights(text);

    assert!(
        insights
            .iter()
            .any(|s| s.contains("Revenue increased consistently")),
        "{insights:?}"
    );
    assert!(
        insights
            .iter()
            .any(|s| s.contains("Expenses decreased consistently")),
        "{insights:?}"
    );
}

#[test]
fn given_two_year_table_when_extracting_then_sentences_name_values_and_years() {
    let text = "Year    Revenue\n2021    100\n2022    150\n";

    let insights = extract_statistical_insights(text);

    assert_eq!(
        insights,
        vec![
            "Revenue increased consistently from 100 in 2021 to 150 in 2022.".to_string(),
            "Revenue peaked at 150 in 2022 and was lowest at 100 in 2021.".to_string(),
        ]
    );
}

#[test]
fn given_mixed_column_when_extracting_then_reports_counts_and_extremes() {
    let text = "\
Year    Sales
2019    10
2020    30
2021    20
2022    40
";

    let insights = extract_statistical_insights(text);

    assert!(insights.contains(&"Sales showed a mixed trend with 2 increases and 1 decreases.".to_string()));
    assert!(insights.contains(&"Sales peaked at 40 in 2022 and was lowest at 10 in 2019.".to_string()));
}

#[test]
fn given_constant_column_when_extracting_then_reports_constancy_only() {
    let text = "Year    Headcount\n2020    12\n2021    12\n2022    12";

    let insights = extract_statistical_insights(text);

    assert_eq!(insights, vec!["Headcount remained constant at 12.".to_string()]);
}

#[test]
fn given_non_numeric_column_when_extracting_then_column_is_skipped() {
    let text = "Year    Region    Profit\n2021    North    1,200\n2022    South    1,500";

    let insights = extract_statistical_insights(text);

    assert!(insights.iter().all(|s| !s.starts_with("Region")));
    assert!(
        insights
            .iter()
            .any(|s| s.starts_with("Profit increased consistently from 1200 in 2021 to 1500 in 2022"))
    );
}

#[test]
fn given_misaligned_rows_when_extracting_then_only_matching_rows_count() {
    let text = "Year    Margin\n2020    5.5%\n2021    6.25%    extra\n2022    7%";

    let insights = extract_statistical_insights(text);

    assert!(
        insights
            .iter()
            .any(|s| s == "Margin increased consistently from 5.5 in 2020 to 7 in 2022."),
        "{insights:?}"
    );
}

#[test]
fn given_single_data_row_when_extracting_then_returns_nothing() {
    let text = "Year    Revenue\n2021    100";

    assert!(extract_statistical_insights(text).is_empty());
}

#[test]
fn given_prose_without_table_when_extracting_then_returns_nothing() {
    let text = "The board met twice. Revenue rose in 2021 and again in 2022.";

    assert!(extract_statistical_insights(text).is_empty());
}
